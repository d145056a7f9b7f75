//! Path-based page routing and the sign-in gate.

use crate::auth::Session;
use crate::i18n::Strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    Projects,
    Team,
    Calendar,
    Settings,
    Auth,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/" | "" => Self::Dashboard,
            "/projects" => Self::Projects,
            "/team" => Self::Team,
            "/calendar" => Self::Calendar,
            "/settings" => Self::Settings,
            "/auth" => Self::Auth,
            _ => Self::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Projects => "/projects",
            Self::Team => "/team",
            Self::Calendar => "/calendar",
            Self::Settings => "/settings",
            Self::Auth => "/auth",
            Self::NotFound => "*",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Auth | Self::NotFound)
    }

    pub fn title(self, s: &Strings) -> &'static str {
        match self {
            Self::Dashboard => s.nav_dashboard,
            Self::Projects => s.nav_projects,
            Self::Team => s.nav_team,
            Self::Calendar => s.nav_calendar,
            Self::Settings => s.nav_settings,
            Self::Auth => s.auth_title,
            Self::NotFound => s.not_found,
        }
    }
}

impl FromStr for Route {
    type Err = String;

    /// Accepts either a path (`/team`) or a bare page name (`team`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = if s.starts_with('/') {
            s.to_string()
        } else if s.eq_ignore_ascii_case("dashboard") {
            "/".to_string()
        } else {
            format!("/{}", s.to_lowercase())
        };
        match Self::from_path(&path) {
            Self::NotFound => Err(format!("unknown page '{}'", s)),
            route => Ok(route),
        }
    }
}

/// Resolves `path` for `session`: protected pages send anonymous users to
/// the auth page.
pub fn resolve(path: &str, session: &Session) -> Route {
    let route = Route::from_path(path);
    if route.is_protected() && !session.is_authenticated() {
        log::debug!("event=route_redirect from={} to=/auth", path);
        Route::Auth
    } else {
        route
    }
}

/// Main sidebar group, then the settings group.
pub const MAIN_NAV: [Route; 4] = [Route::Dashboard, Route::Projects, Route::Team, Route::Calendar];
pub const SETTINGS_NAV: [Route; 1] = [Route::Settings];

pub fn nav_items() -> impl Iterator<Item = Route> {
    MAIN_NAV.into_iter().chain(SETTINGS_NAV)
}

/// Whether the sidebar entry for `item` is highlighted at `current_path`.
pub fn is_active(item: Route, current_path: &str) -> bool {
    match item {
        Route::Dashboard => current_path == "/",
        other => current_path.starts_with(other.path()),
    }
}
