use crate::core::allocator::FailedGroupPolicy;
use crate::domain::model::Roster;
use crate::utils::error::{AllocError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Anything that can hand the engine its drivers and riders.
pub trait RosterSource {
    fn load_roster(&self) -> Result<Roster>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn failed_group_policy(&self) -> FailedGroupPolicy;
    fn report_format(&self) -> ReportFormat;
    fn show_fill_ratio(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for ReportFormat {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(AllocError::InvalidConfigValue {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
