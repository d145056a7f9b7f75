use crate::i18n::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Completed,
    Updated,
    Shared,
    Reported,
}

/// One line of the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub actor: String,
    pub subject: String,
    pub verb: ActivityKind,
    pub hours_ago: u32,
}

impl Activity {
    pub fn new(actor: &str, subject: &str, verb: ActivityKind, hours_ago: u32) -> Self {
        Self {
            actor: actor.to_string(),
            subject: subject.to_string(),
            verb,
            hours_ago,
        }
    }

    pub fn sentence(&self, lang: Language) -> String {
        match lang {
            Language::Ko => {
                let verb = match self.verb {
                    ActivityKind::Completed => "완료했습니다",
                    ActivityKind::Updated => "업데이트했습니다",
                    ActivityKind::Shared => "공유했습니다",
                    ActivityKind::Reported => "작성했습니다",
                };
                format!(
                    "{}{} {}{} {}",
                    self.actor,
                    subject_particle(&self.actor),
                    self.subject,
                    object_particle(&self.subject),
                    verb
                )
            }
            Language::En => {
                let verb = match self.verb {
                    ActivityKind::Completed => "completed",
                    ActivityKind::Updated => "updated",
                    ActivityKind::Shared => "shared",
                    ActivityKind::Reported => "filed",
                };
                format!("{} {} {}", self.actor, verb, self.subject)
            }
        }
    }

    pub fn when(&self, lang: Language) -> String {
        let (n, days) = if self.hours_ago >= 24 {
            (self.hours_ago / 24, true)
        } else {
            (self.hours_ago, false)
        };
        match (lang, days) {
            (Language::Ko, false) => format!("{}시간 전", n),
            (Language::Ko, true) => format!("{}일 전", n),
            (Language::En, false) if n == 1 => "1 hour ago".to_string(),
            (Language::En, false) => format!("{} hours ago", n),
            (Language::En, true) if n == 1 => "1 day ago".to_string(),
            (Language::En, true) => format!("{} days ago", n),
        }
    }
}

// Hangul syllables carry a final consonant when (code - 0xAC00) % 28 != 0.
fn has_final_consonant(word: &str) -> bool {
    match word.chars().last() {
        Some(c) if ('\u{AC00}'..='\u{D7A3}').contains(&c) => (c as u32 - 0xAC00) % 28 != 0,
        _ => false,
    }
}

fn subject_particle(word: &str) -> &'static str {
    if has_final_consonant(word) { "이" } else { "가" }
}

fn object_particle(word: &str) -> &'static str {
    if has_final_consonant(word) { "을" } else { "를" }
}
