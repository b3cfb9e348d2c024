use serde::Deserialize;

/// Category shown on an exhibitor's tag in the client app.
///
/// Mirrors the client's `ExhibitorPurpose` enum; the Swift case name is what
/// ends up in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitorPurpose {
    #[default]
    Recruitment,
    Branding,
}

impl ExhibitorPurpose {
    /// Implicit member expression used in the Swift literal, e.g. `.recruitment`
    pub fn swift_case(&self) -> &'static str {
        match self {
            ExhibitorPurpose::Recruitment => ".recruitment",
            ExhibitorPurpose::Branding => ".branding",
        }
    }
}

/// One validated exhibitor row of the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhibitorRecord {
    /// Value of the first column, used for the derived id and URL
    pub sequence_index: u32,
    pub organization_name: String,
    pub zone: String,
    pub attendance_date: String,
    pub booth_number: Option<u32>,
}
