use crate::calendar::{CalendarState, DateRange, DayCell, events_in_month, events_on, padded_weeks};
use crate::error::Result;
use crate::model::Event;
use crate::provider::DataProvider;
use chrono::NaiveDate;

/// Calendar page: navigation state plus the events of the visible weeks.
///
/// Events are re-fetched from the provider whenever the visible range moves
/// to another month.
#[derive(Debug, Clone)]
pub struct CalendarPage {
    state: CalendarState,
    events: Vec<Event>,
    loaded: Option<DateRange>,
}

impl CalendarPage {
    pub fn new(state: CalendarState, events: Vec<Event>) -> Self {
        Self {
            state,
            events,
            loaded: None,
        }
    }

    pub fn load(provider: &dyn DataProvider, reference: NaiveDate) -> Result<Self> {
        let mut page = Self::new(CalendarState::new(reference), Vec::new());
        page.refresh(provider)?;
        Ok(page)
    }

    /// Fetches the visible range if it changed since the last fetch.
    pub fn refresh(&mut self, provider: &dyn DataProvider) -> Result<()> {
        let range = self.state.visible_range();
        if self.loaded == Some(range) {
            return Ok(());
        }
        self.events = provider.list_events_in_range(&range)?;
        self.loaded = Some(range);
        log::debug!(
            "event=calendar_refresh start={} end={} events={}",
            range.start,
            range.end,
            self.events.len()
        );
        Ok(())
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn reference(&self) -> NaiveDate {
        self.state.reference
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.state.selected
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn next_month(&mut self) {
        self.state.next_month();
    }

    pub fn previous_month(&mut self) {
        self.state.previous_month();
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.state.select(date);
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn move_selection(&mut self, days: i64) {
        self.state.move_selection(days);
    }

    pub fn go_to_today(&mut self) {
        self.state.go_to_today();
    }

    pub fn weeks(&self) -> Vec<Vec<DayCell<'_>>> {
        padded_weeks(self.state.reference, &self.events)
    }

    /// `None` when no date is selected; otherwise that day's events.
    pub fn selected_events(&self) -> Option<Vec<&Event>> {
        self.state.selected.map(|d| events_on(d, &self.events))
    }

    pub fn month_events(&self) -> Vec<&Event> {
        events_in_month(self.state.reference, &self.events)
    }
}
