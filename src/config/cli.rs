use crate::core::allocator::FailedGroupPolicy;
use crate::domain::ports::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ride-alloc")]
#[command(about = "Assign riders to drivers by seat capacity and group affinity")]
pub struct CliConfig {
    /// Roster file: drivers, a blank line, then riders (or a .json roster)
    pub input: String,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// What to do with members of a group no single driver can take [default: pack-individually]
    #[arg(long, value_enum)]
    pub failed_groups: Option<FailedGroupPolicy>,

    /// Show each driver's fill ratio in the text report
    #[arg(long)]
    pub fill_ratio: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
