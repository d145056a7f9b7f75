use crate::error::Result;
use crate::filter::search;
use crate::model::TeamMember;
use crate::provider::DataProvider;

#[derive(Debug, Clone, Default)]
pub struct TeamPage {
    members: Vec<TeamMember>,
    search: String,
}

impl TeamPage {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members,
            search: String::new(),
        }
    }

    pub fn load(provider: &dyn DataProvider) -> Result<Self> {
        Ok(Self::new(provider.list_team_members()?))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    pub fn all(&self) -> &[TeamMember] {
        &self.members
    }

    /// Members whose name, email or role contain the search text.
    pub fn visible(&self) -> Vec<&TeamMember> {
        search(&self.search, &self.members)
    }
}
