use crate::auth::Identity;
use crate::error::{DashboardError, Result};
use crate::i18n::Language;
use crate::page::settings::Theme;
use crate::route::Route;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "PROJECTON_CONFIG_DIR";
const CONFIG_FILE: &str = "config.toml";

/// `~/.config/projecton/config.toml`
///
/// ```toml
/// [user]
/// email = "kim.dev@company.com"
/// display_name = "김개발"
///
/// [ui]
/// language = "en"
/// theme = "dark"
/// start_page = "calendar"
///
/// [data]
/// dataset = "/path/to/dataset.json"
/// events_ics = "/path/to/events.ics"
///
/// [log]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub start_page: Route,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub dataset: Option<PathBuf>,
    pub events_ics: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "projecton", "projecton").map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Loads the default config file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        Self::parse(&content)
            .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log.dir.clone().or_else(|| {
            ProjectDirs::from("com", "projecton", "projecton")
                .map(|p| p.data_dir().join("logs"))
        })
    }
}
