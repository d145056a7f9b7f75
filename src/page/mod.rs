//! Per-page state, independent of any front-end.
//!
//! Each page owns its records and its interaction state (search text, status
//! filter, selected date, toggles). Front-ends read it through `&self`
//! accessors and change it only through the setters.

pub mod calendar;
pub mod dashboard;
pub mod projects;
pub mod settings;
pub mod team;

pub use calendar::CalendarPage;
pub use dashboard::{DashboardPage, DashboardSummary};
pub use projects::ProjectsPage;
pub use settings::{Notifications, SettingsPage, Theme};
pub use team::TeamPage;
