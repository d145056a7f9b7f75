use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    #[default]
    Meeting,
    Review,
    Deadline,
}

impl EventCategory {
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Meeting, Language::Ko) => "미팅",
            (Self::Review, Language::Ko) => "리뷰",
            (Self::Deadline, Language::Ko) => "마감",
            (Self::Meeting, Language::En) => "Meeting",
            (Self::Review, Language::En) => "Review",
            (Self::Deadline, Language::En) => "Deadline",
        }
    }

    /// Recognises a category name from free text (ICS `CATEGORIES`, CLI).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "meeting" => Some(Self::Meeting),
            "review" => Some(Self::Review),
            "deadline" => Some(Self::Deadline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub description: String,
}

impl Event {
    pub fn new(id: u32, title: &str, date: NaiveDate, category: EventCategory) -> Self {
        Self {
            id,
            title: title.to_string(),
            date,
            category,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}
