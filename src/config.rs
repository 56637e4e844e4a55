//! Per-invocation settings shared by every processed file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{StatementError, StatementResult};

pub const DEFAULT_ACCOUNT_TYPE: &str = "credit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Account type written into generated file names
    #[serde(default = "default_account_type")]
    pub account_type: String,

    /// Directory for generated files; next to each input when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            account_type: default_account_type(),
            output_dir: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// The account type ends up in a file name, so it must be non-empty and
    /// free of path separators.
    pub fn validate(&self) -> StatementResult<()> {
        let account_type = self.account_type.trim();
        if account_type.is_empty() {
            return Err(StatementError::InvalidSetting(
                "account type must not be empty".to_string(),
            ));
        }
        if account_type.contains(['/', '\\']) {
            return Err(StatementError::InvalidSetting(format!(
                "account type '{}' must not contain a path separator",
                self.account_type
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.account_type, "credit");
        assert!(settings.output_dir().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let settings = Settings::new()
            .with_account_type("debit")
            .with_output_dir("/tmp/statements");

        assert_eq!(settings.account_type, "debit");
        assert_eq!(settings.output_dir(), Some(Path::new("/tmp/statements")));
    }

    #[rstest]
    #[case("credit", true)]
    #[case("checking", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("a/b", false)]
    #[case("a\\b", false)]
    fn test_validate_account_type(#[case] account_type: &str, #[case] valid: bool) {
        let settings = Settings::new().with_account_type(account_type);
        assert_eq!(settings.validate().is_ok(), valid);
    }

    #[test]
    fn test_settings_deserialize_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"account_type":"credit"}"#);
    }
}
