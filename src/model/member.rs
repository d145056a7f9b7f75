use crate::i18n::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    OnLeave,
    Inactive,
}

impl MemberStatus {
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Active, Language::Ko) => "활성",
            (Self::OnLeave, Language::Ko) => "휴가",
            (Self::Inactive, Language::Ko) => "비활성",
            (Self::Active, Language::En) => "Active",
            (Self::OnLeave, Language::En) => "On leave",
            (Self::Inactive, Language::En) => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: MemberStatus,
    #[serde(default)]
    pub department: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl TeamMember {
    pub fn avatar_initial(&self) -> String {
        super::initial(&self.name)
    }
}
