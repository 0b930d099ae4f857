use crate::core::allocator::FailedGroupPolicy;
use crate::domain::ports::ReportFormat;
use crate::utils::error::{AllocError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub allocation: Option<AllocationConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub failed_groups: Option<FailedGroupPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub show_fill_ratio: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AllocError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AllocError::Io(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AllocError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn report_format(&self) -> Result<Option<ReportFormat>> {
        self.report
            .as_ref()
            .and_then(|r| r.format.as_deref())
            .map(ReportFormat::from_str)
            .transpose()
    }

    pub fn failed_groups(&self) -> Option<FailedGroupPolicy> {
        self.allocation.as_ref().and_then(|a| a.failed_groups)
    }

    pub fn show_fill_ratio(&self) -> Option<bool> {
        self.report.as_ref().and_then(|r| r.show_fill_ratio)
    }

    pub fn verbose(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.verbose)
    }

    pub fn json_logs(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.json)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.report.as_ref().and_then(|r| r.format.as_deref()) {
            validate_one_of("report.format", format, &ReportFormat::NAMES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[allocation]
failed_groups = "leave-unassigned"

[report]
format = "json"
show_fill_ratio = true

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.report_format().unwrap(), Some(ReportFormat::Json));
        assert_eq!(config.show_fill_ratio(), Some(true));
        assert_eq!(config.verbose(), Some(true));
        assert_eq!(config.json_logs(), None);
        assert_eq!(
            config.failed_groups(),
            Some(FailedGroupPolicy::LeaveUnassigned)
        );
    }

    #[test]
    fn test_unknown_failed_group_policy() {
        let err = TomlConfig::from_toml_str("[allocation]\nfailed_groups = \"split\"\n").unwrap_err();
        assert!(matches!(err, AllocError::Config { .. }));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.report_format().unwrap(), None);
        assert_eq!(config.show_fill_ratio(), None);
        assert_eq!(config.failed_groups(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RIDE_ALLOC_TEST_FORMAT", "csv");

        let config = TomlConfig::from_toml_str(
            r#"
[report]
format = "${RIDE_ALLOC_TEST_FORMAT}"
"#,
        )
        .unwrap();
        assert_eq!(config.report_format().unwrap(), Some(ReportFormat::Csv));

        std::env::remove_var("RIDE_ALLOC_TEST_FORMAT");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[report]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
        assert!(config.report_format().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[report\nformat = 1").unwrap_err();
        assert!(matches!(err, AllocError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\nshow_fill_ratio = false\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.show_fill_ratio(), Some(false));

        let missing = TomlConfig::from_file("/no/such/settings.toml").unwrap_err();
        assert!(matches!(missing, AllocError::FileNotFound { .. }));
    }
}
