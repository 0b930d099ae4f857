#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::report::ReportOptions;
use crate::core::allocator::FailedGroupPolicy;
use crate::domain::ports::{ConfigProvider, ReportFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

/// Effective settings after merging the settings file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub failed_groups: FailedGroupPolicy,
    pub format: ReportFormat,
    pub show_fill_ratio: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            failed_groups: FailedGroupPolicy::default(),
            format: ReportFormat::default(),
            show_fill_ratio: false,
            verbose: false,
            json_logs: false,
        }
    }

    /// Layers a settings file under the current values.
    pub fn with_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        if let Some(policy) = file.failed_groups() {
            self.failed_groups = policy;
        }
        if let Some(format) = file.report_format()? {
            self.format = format;
        }
        self.show_fill_ratio = file.show_fill_ratio().unwrap_or(self.show_fill_ratio);
        self.verbose = file.verbose().unwrap_or(self.verbose);
        self.json_logs = file.json_logs().unwrap_or(self.json_logs);
        Ok(self)
    }

    /// File settings first, then explicit flags on top.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &cli::CliConfig) -> Result<Self> {
        cli.validate()?;

        let mut settings = Self::new(cli.input.clone());
        if let Some(path) = &cli.config {
            settings = settings.with_file(&TomlConfig::from_file(path)?)?;
        }

        if let Some(policy) = cli.failed_groups {
            settings.failed_groups = policy;
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        settings.show_fill_ratio |= cli.fill_ratio;
        settings.verbose |= cli.verbose;
        settings.json_logs |= cli.log_json;
        Ok(settings)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.format,
            show_fill_ratio: self.show_fill_ratio,
        }
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn failed_group_policy(&self) -> FailedGroupPolicy {
        self.failed_groups
    }

    fn report_format(&self) -> ReportFormat {
        self.format
    }

    fn show_fill_ratio(&self) -> bool {
        self.show_fill_ratio
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)
    }
}
