// File: ./src/model/mod.rs
// Plain dashboard records, split per entity
pub mod activity;
pub mod event;
pub mod member;
pub mod project;

pub use activity::{Activity, ActivityKind};
pub use event::{Event, EventCategory};
pub use member::{MemberStatus, TeamMember};
pub use project::{Priority, Project, ProjectStatus};

use crate::error::{DashboardError, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` date as used throughout the data files and CLI.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DashboardError::InvalidDate(value.to_string()))
}

/// First character of `value`, uppercased. Used for avatar placeholders.
pub fn initial(value: &str) -> String {
    value
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
