pub mod auth;
pub mod calendar;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod page;
pub mod provider;
pub mod route;

#[cfg(feature = "tui")]
pub mod tui;
