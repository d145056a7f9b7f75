use super::{DataProvider, in_range};
use crate::calendar::DateRange;
use crate::error::{DashboardError, Result};
use crate::model::{Activity, Event, Project, TeamMember};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A JSON file holding every record the dashboard shows.
///
/// ```json
/// { "events": [...], "projects": [...], "members": [...], "activity": [...] }
/// ```
/// Missing arrays are treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetProvider {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl DatasetProvider {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        let dataset: Self = serde_json::from_str(&json).map_err(|source| DashboardError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "event=dataset_loaded events={} projects={} members={}",
            dataset.events.len(),
            dataset.projects.len(),
            dataset.members.len()
        );
        Ok(dataset)
    }
}

impl DataProvider for DatasetProvider {
    fn list_events_in_range(&self, range: &DateRange) -> Result<Vec<Event>> {
        Ok(in_range(&self.events, range))
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        Ok(self.members.clone())
    }

    fn list_activity(&self) -> Result<Vec<Activity>> {
        Ok(self.activity.clone())
    }
}
