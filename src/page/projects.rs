use crate::error::Result;
use crate::filter::{Searchable, StatusFilter, filter_with_status};
use crate::model::{Project, ProjectStatus};
use crate::provider::DataProvider;

#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    projects: Vec<Project>,
    search: String,
    status: StatusFilter<ProjectStatus>,
}

impl ProjectsPage {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn load(provider: &dyn DataProvider) -> Result<Self> {
        Ok(Self::new(provider.list_projects()?))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    pub fn status_filter(&self) -> StatusFilter<ProjectStatus> {
        self.status
    }

    pub fn set_status_filter(&mut self, status: StatusFilter<ProjectStatus>) {
        log::debug!("event=projects_filter status={:?}", status);
        self.status = status;
    }

    pub fn cycle_status_filter(&mut self) {
        self.set_status_filter(self.status.cycle());
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching the search text and the status filter, in order.
    pub fn visible(&self) -> Vec<&Project> {
        filter_with_status(
            &self.search,
            &self.projects,
            Project::search_fields,
            &self.status,
            |p: &Project| &p.status,
        )
    }
}
