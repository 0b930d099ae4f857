pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::report::{render_report, write_report, ReportOptions};
pub use adapters::roster::{parse_roster, FileRoster};
pub use config::Settings;
pub use core::allocator::{allocate, allocate_with, Allocation, AllocationEngine, FailedGroupPolicy};
pub use core::summary::Summary;
pub use domain::model::{Driver, GroupId, Rider, Roster};
pub use domain::ports::ReportFormat;
pub use utils::error::{AllocError, ParseErrorKind, Result};
