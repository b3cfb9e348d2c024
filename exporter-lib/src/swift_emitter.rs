use tracing::info;

use crate::{ExhibitorRecord, ExportConfig};

const IMPORT_LINE: &str = "import Foundation";
const LIST_COMMENT: &str = "// All exhibitors from the official Excel file.";
const LIST_OPEN: &str = "let allExhibitors: [Exhibitor] = [";
const LIST_CLOSE: &str = "]";
/// Swift literal for a missing booth number
const NIL_LITERAL: &str = "nil";

/// Escape double quotes for a Swift string literal. Nothing else is escaped.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Renders exhibitor records as the `allExhibitors` Swift constant
pub struct SwiftEmitter<'a> {
    config: &'a ExportConfig,
}

impl<'a> SwiftEmitter<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        SwiftEmitter { config }
    }

    /// Render the whole file. Same records in, same bytes out.
    pub fn render(&self, records: &[ExhibitorRecord]) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(records.len() + 8);

        lines.push(format!("// Generated from {}", self.config.source_label));
        lines.push(format!(
            "// Do not edit by hand - run {} instead.",
            self.config.regenerate_command
        ));
        lines.push(String::new());
        lines.push(IMPORT_LINE.to_string());
        lines.push(String::new());
        lines.push(LIST_COMMENT.to_string());
        lines.push(LIST_OPEN.to_string());

        for record in records {
            lines.push(self.render_entry(record));
        }

        lines.push(LIST_CLOSE.to_string());
        // Trailing newline at end of file
        lines.push(String::new());

        info!(records = records.len(), "rendered Swift source");
        lines.join("\n")
    }

    /// One `Exhibitor(...)` line, including the trailing comma
    pub fn render_entry(&self, record: &ExhibitorRecord) -> String {
        let booth_literal = record
            .booth_number
            .map_or_else(|| NIL_LITERAL.to_string(), |booth| booth.to_string());

        format!(
            "    Exhibitor(id: \"{id}\", name: \"{name}\", industrySector: \"{zone}\", \
             dateAttendance: \"{date}\", purpose: {purpose}, \
             buhubURL: URL(string: \"{url}\")!, boothNumber: {booth}),",
            id = self.derived_id(record),
            name = escape_quotes(&record.organization_name),
            zone = escape_quotes(&record.zone),
            date = escape_quotes(&record.attendance_date),
            purpose = self.config.purpose.classify(record).swift_case(),
            url = self.derived_url(record),
            booth = booth_literal,
        )
    }

    pub fn derived_id(&self, record: &ExhibitorRecord) -> String {
        format!("{}{}", self.config.id_prefix, record.sequence_index)
    }

    /// Company page URL. Well-formed as long as the config passed `ExportConfig::validate`.
    pub fn derived_url(&self, record: &ExhibitorRecord) -> String {
        format!("{}{}", self.config.url_base, record.sequence_index)
    }
}
