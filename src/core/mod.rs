pub mod allocator;
pub mod group_assignment;
pub mod grouping;
pub mod individual_assignment;
pub mod summary;

pub use crate::domain::model::{Driver, GroupId, Rider, Roster};
pub use crate::domain::ports::{ConfigProvider, ReportFormat, RosterSource};
pub use crate::utils::error::Result;
