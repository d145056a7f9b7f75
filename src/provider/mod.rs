//! Data sources for the dashboard pages.
//!
//! Pages never hold on to where their records came from: they ask a
//! [`DataProvider`] and render whatever it returns.

pub mod dataset;
pub mod ics;
pub mod mock;

pub use dataset::DatasetProvider;
pub use ics::IcsEvents;
pub use mock::MockProvider;

use crate::calendar::DateRange;
use crate::config::DataConfig;
use crate::error::Result;
use crate::model::{Activity, Event, Project, TeamMember};

pub trait DataProvider {
    /// Events whose date falls inside `range` (inclusive), in source order.
    fn list_events_in_range(&self, range: &DateRange) -> Result<Vec<Event>>;
    fn list_projects(&self) -> Result<Vec<Project>>;
    fn list_team_members(&self) -> Result<Vec<TeamMember>>;
    fn list_activity(&self) -> Result<Vec<Activity>>;
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
    fn list_events_in_range(&self, range: &DateRange) -> Result<Vec<Event>> {
        (**self).list_events_in_range(range)
    }
    fn list_projects(&self) -> Result<Vec<Project>> {
        (**self).list_projects()
    }
    fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        (**self).list_team_members()
    }
    fn list_activity(&self) -> Result<Vec<Activity>> {
        (**self).list_activity()
    }
}

/// Builds the provider described by the `[data]` config table.
pub fn open(config: &DataConfig) -> Result<Box<dyn DataProvider>> {
    let base: Box<dyn DataProvider> = match &config.dataset {
        Some(path) => {
            log::info!("event=provider_open kind=dataset path={}", path.display());
            Box::new(DatasetProvider::load(path)?)
        }
        None => {
            log::info!("event=provider_open kind=mock");
            Box::new(MockProvider)
        }
    };

    match &config.events_ics {
        Some(path) => {
            log::info!("event=provider_open kind=ics path={}", path.display());
            Ok(Box::new(IcsEvents::load(path, base)?))
        }
        None => Ok(base),
    }
}

pub(crate) fn in_range(events: &[Event], range: &DateRange) -> Vec<Event> {
    events
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}
