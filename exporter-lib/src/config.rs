use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::{ExhibitorPurpose, ExhibitorRecord, ExportError};

pub const DEFAULT_SOURCE_LABEL: &str = "Content/HKBU Career Fair 2025 Exhibitor list.xlsx";
pub const DEFAULT_REGENERATE_COMMAND: &str = "exhibitor-export";
pub const DEFAULT_ID_PREFIX: &str = "ex-";
pub const DEFAULT_URL_BASE: &str = "https://buhub.hkbu.edu.hk/company/";

/// Settings for the generated Swift file.
///
/// Every key is optional in the JSON file; a missing key keeps the default,
/// which reproduces the file the app ships with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Workbook name mentioned in the header comment
    pub source_label: String,
    /// Command mentioned in the "do not edit" comment
    pub regenerate_command: String,
    pub id_prefix: String,
    pub url_base: String,
    pub purpose: PurposeRule,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            url_base: DEFAULT_URL_BASE.to_string(),
            purpose: PurposeRule::default(),
        }
    }
}

impl ExportConfig {
    /// Load and validate a JSON config file
    pub fn from_json_file(path: &Path) -> Result<Self, ExportError> {
        let contents = fs::read_to_string(path).map_err(|source| ExportError::io(path, source))?;
        let config: ExportConfig =
            serde_json::from_str(&contents).map_err(|source| ExportError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce broken Swift or a malformed URL.
    ///
    /// The index appended to `url_base` is always a plain positive integer, so a
    /// base that passes here always yields a well-formed URL.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !(self.url_base.starts_with("https://") || self.url_base.starts_with("http://")) {
            return Err(ExportError::InvalidConfig(format!(
                "url_base must start with https:// or http://, got \"{}\"",
                self.url_base
            )));
        }

        let host = self
            .url_base
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        if host.is_empty() || host.starts_with('/') {
            return Err(ExportError::InvalidConfig(format!(
                "url_base has no host: \"{}\"",
                self.url_base
            )));
        }

        if self
            .url_base
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '\\')
        {
            return Err(ExportError::InvalidConfig(format!(
                "url_base contains characters not allowed in a URL literal: \"{}\"",
                self.url_base
            )));
        }

        for (key, value) in [
            ("id_prefix", &self.id_prefix),
            ("source_label", &self.source_label),
            ("regenerate_command", &self.regenerate_command),
        ] {
            if value.chars().any(|c| c == '\n' || c == '\r') {
                return Err(ExportError::InvalidConfig(format!(
                    "{key} must be a single line"
                )));
            }
        }

        if self.id_prefix.contains(['"', '\\']) {
            return Err(ExportError::InvalidConfig(format!(
                "id_prefix must not contain quotes or backslashes: \"{}\"",
                self.id_prefix
            )));
        }

        Ok(())
    }
}

/// Rule deciding the purpose tag of each exhibitor.
///
/// Lookup order: `by_index`, then `by_zone`, then `default`. With no overrides
/// every exhibitor gets `default`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurposeRule {
    pub default: ExhibitorPurpose,
    pub by_zone: BTreeMap<String, ExhibitorPurpose>,
    pub by_index: BTreeMap<u32, ExhibitorPurpose>,
}

impl PurposeRule {
    pub fn classify(&self, record: &ExhibitorRecord) -> ExhibitorPurpose {
        self.by_index
            .get(&record.sequence_index)
            .or_else(|| self.by_zone.get(&record.zone))
            .copied()
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.id_prefix, "ex-");
        assert_eq!(config.url_base, "https://buhub.hkbu.edu.hk/company/");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ExportConfig = serde_json::from_value(json!({
            "id_prefix": "exhibitor-",
            "purpose": { "by_zone": { "Banking": "branding" } }
        }))
        .unwrap();

        assert_eq!(config.id_prefix, "exhibitor-");
        assert_eq!(config.url_base, DEFAULT_URL_BASE);
        assert_eq!(config.purpose.default, ExhibitorPurpose::Recruitment);
        assert_eq!(
            config.purpose.by_zone.get("Banking"),
            Some(&ExhibitorPurpose::Branding)
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<ExportConfig, _> = serde_json::from_value(json!({ "prefix": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url_base() {
        for url_base in [
            "ftp://example.com/",
            "buhub.hkbu.edu.hk/company/",
            "https://",
            "https:///company/",
            "https://example.com/a b/",
            "https://example.com/\"/",
        ] {
            let config = ExportConfig {
                url_base: url_base.to_string(),
                ..ExportConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ExportError::InvalidConfig(_))),
                "url_base {url_base:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_quoted_id_prefix() {
        let config = ExportConfig {
            id_prefix: "ex\"-".to_string(),
            ..ExportConfig::default()
        };
        assert!(matches!(config.validate(), Err(ExportError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_multiline_source_label() {
        let config = ExportConfig {
            source_label: "a.xlsx\nimport Evil".to_string(),
            ..ExportConfig::default()
        };
        assert!(matches!(config.validate(), Err(ExportError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "purpose": {{ "default": "branding" }} }}"#).unwrap();

        let config = ExportConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.purpose.default, ExhibitorPurpose::Branding);
    }

    #[test]
    fn test_from_json_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ExportConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::Config { .. }));
    }

    #[test]
    fn test_from_json_file_runs_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "url_base": "mailto:someone" }}"#).unwrap();

        let err = ExportConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidConfig(_)));
    }

    #[test]
    fn test_purpose_rule_lookup_order() {
        let rule: PurposeRule = serde_json::from_value(json!({
            "default": "recruitment",
            "by_zone": { "Media": "branding" },
            "by_index": { "3": "recruitment", "4": "branding" }
        }))
        .unwrap();

        assert_eq!(
            rule.classify(&record(1, "A", "Banking", "Day 1", None)),
            ExhibitorPurpose::Recruitment
        );
        assert_eq!(
            rule.classify(&record(2, "B", "Media", "Day 1", None)),
            ExhibitorPurpose::Branding
        );
        // Index overrides win over zone overrides
        assert_eq!(
            rule.classify(&record(3, "C", "Media", "Day 1", None)),
            ExhibitorPurpose::Recruitment
        );
        assert_eq!(
            rule.classify(&record(4, "D", "Banking", "Day 1", None)),
            ExhibitorPurpose::Branding
        );
    }
}
