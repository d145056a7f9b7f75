use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Waiting,
    Active,
    Done,
}

impl ProjectStatus {
    /// Order of the status filter menu.
    pub const MENU: [ProjectStatus; 4] = [Self::Active, Self::Done, Self::Waiting, Self::Planned];

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Planned, Language::Ko) => "계획중",
            (Self::Waiting, Language::Ko) => "대기중",
            (Self::Active, Language::Ko) => "진행중",
            (Self::Done, Language::Ko) => "완료",
            (Self::Planned, Language::En) => "Planned",
            (Self::Waiting, Language::En) => "Waiting",
            (Self::Active, Language::En) => "In progress",
            (Self::Done, Language::En) => "Done",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(Self::Planned),
            "waiting" => Ok(Self::Waiting),
            "active" => Ok(Self::Active),
            "done" => Ok(Self::Done),
            other => Err(format!(
                "unknown project status '{}' (expected planned, waiting, active or done)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Low, Language::Ko) => "낮음",
            (Self::Medium, Language::Ko) => "중간",
            (Self::High, Language::Ko) => "높음",
            (Self::Low, Language::En) => "Low",
            (Self::Medium, Language::En) => "Medium",
            (Self::High, Language::En) => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(deserialize_with = "clamped_progress")]
    pub progress: u8,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub team_size: u32,
    pub priority: Priority,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: &str,
        description: &str,
        status: ProjectStatus,
        progress: u8,
        due_date: NaiveDate,
        team_size: u32,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            status,
            progress: progress.min(100),
            due_date,
            team_size,
            priority,
        }
    }

    /// Projects shown on the dashboard's "in progress" card.
    pub fn is_in_flight(&self) -> bool {
        matches!(self.status, ProjectStatus::Active | ProjectStatus::Waiting)
    }
}

fn clamped_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u32::deserialize(deserializer)?;
    Ok(raw.min(100) as u8)
}
