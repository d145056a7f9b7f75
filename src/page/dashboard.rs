use crate::error::Result;
use crate::model::{Activity, MemberStatus, Project, ProjectStatus, TeamMember};
use crate::provider::DataProvider;

/// Numbers on the dashboard's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub active_members: usize,
    pub completed_projects: usize,
    /// Mean project progress, rounded to the nearest percent.
    pub average_progress: u8,
}

impl DashboardSummary {
    pub fn compute(projects: &[Project], members: &[TeamMember]) -> Self {
        let total: u32 = projects.iter().map(|p| p.progress as u32).sum();
        let average_progress = if projects.is_empty() {
            0
        } else {
            (total as f64 / projects.len() as f64).round() as u8
        };
        Self {
            total_projects: projects.len(),
            active_members: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            completed_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Done)
                .count(),
            average_progress,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    projects: Vec<Project>,
    activity: Vec<Activity>,
    summary: DashboardSummary,
}

impl DashboardPage {
    pub fn new(projects: Vec<Project>, members: Vec<TeamMember>, activity: Vec<Activity>) -> Self {
        let summary = DashboardSummary::compute(&projects, &members);
        Self {
            projects,
            activity,
            summary,
        }
    }

    pub fn load(provider: &dyn DataProvider) -> Result<Self> {
        Ok(Self::new(
            provider.list_projects()?,
            provider.list_team_members()?,
            provider.list_activity()?,
        ))
    }

    pub fn summary(&self) -> DashboardSummary {
        self.summary
    }

    /// Projects still moving (active or waiting), in source order.
    pub fn in_flight(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_in_flight()).collect()
    }

    pub fn activity(&self) -> &[Activity] {
        &self.activity
    }
}
