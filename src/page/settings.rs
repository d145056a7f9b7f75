use crate::auth::Identity;
use crate::i18n::{Language, Strings};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn label(self, s: &Strings) -> &'static str {
        match self {
            Self::Light => s.theme_light,
            Self::Dark => s.theme_dark,
            Self::System => s.theme_system,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notifications {
    pub email: bool,
    pub push: bool,
    pub project_updates: bool,
    pub task_assignments: bool,
    pub reminders: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            project_updates: true,
            task_assignments: true,
            reminders: true,
        }
    }
}

/// Rows of the settings page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DisplayName,
    NotifyEmail,
    NotifyPush,
    NotifyProjectUpdates,
    NotifyTaskAssignments,
    NotifyReminders,
    Theme,
    Language,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 8] = [
        Self::DisplayName,
        Self::NotifyEmail,
        Self::NotifyPush,
        Self::NotifyProjectUpdates,
        Self::NotifyTaskAssignments,
        Self::NotifyReminders,
        Self::Theme,
        Self::Language,
    ];
}

/// In-memory settings. Nothing here is written back anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPage {
    pub notifications: Notifications,
    pub theme: Theme,
    pub language: Language,
    display_name_draft: String,
}

impl SettingsPage {
    pub fn new(theme: Theme, language: Language, identity: Option<&Identity>) -> Self {
        Self {
            notifications: Notifications::default(),
            theme,
            language,
            display_name_draft: identity
                .and_then(|i| i.display_name.clone())
                .unwrap_or_default(),
        }
    }

    pub fn display_name_draft(&self) -> &str {
        &self.display_name_draft
    }

    pub fn set_display_name_draft(&mut self, name: &str) {
        self.display_name_draft = name.to_string();
    }

    /// Applies the display-name draft to the in-memory identity.
    pub fn apply_profile(&self, identity: &mut Identity) {
        let draft = self.display_name_draft.trim();
        identity.display_name = if draft.is_empty() {
            None
        } else {
            Some(draft.to_string())
        };
    }

    /// Flips a toggle, or advances a choice row to its next value.
    pub fn toggle(&mut self, row: SettingsRow) {
        let n = &mut self.notifications;
        match row {
            SettingsRow::DisplayName => {}
            SettingsRow::NotifyEmail => n.email = !n.email,
            SettingsRow::NotifyPush => n.push = !n.push,
            SettingsRow::NotifyProjectUpdates => n.project_updates = !n.project_updates,
            SettingsRow::NotifyTaskAssignments => n.task_assignments = !n.task_assignments,
            SettingsRow::NotifyReminders => n.reminders = !n.reminders,
            SettingsRow::Theme => {
                let i = Theme::ALL.iter().position(|t| *t == self.theme).unwrap_or(0);
                self.theme = Theme::ALL[(i + 1) % Theme::ALL.len()];
            }
            SettingsRow::Language => {
                self.language = match self.language {
                    Language::Ko => Language::En,
                    Language::En => Language::Ko,
                };
            }
        }
        log::debug!("event=settings_toggle row={:?}", row);
    }
}
