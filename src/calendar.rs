//! Month grid construction and calendar navigation.
//!
//! Cells are built for every day of the reference month and each cell holds
//! the events dated exactly on that day, in the order they appeared in the
//! source list.

use crate::model::Event;
use chrono::{Datelike, Days, Duration, Local, Months, NaiveDate};
use std::collections::HashMap;

/// Inclusive date range used when asking a provider for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            start: start_of_month(date),
            end: end_of_month(date),
        }
    }

    /// The Sunday-aligned weeks covering the month containing `date`.
    pub fn weeks_of(date: NaiveDate) -> Self {
        let month = Self::month_of(date);
        Self {
            start: week_start(month.start),
            end: week_end(month.end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    [31, 30, 29, 28]
        .into_iter()
        .find_map(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), day))
        .unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// First day of the month after `date`'s month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .unwrap_or(date)
}

/// First day of the month before `date`'s month.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_sub_months(Months::new(1))
        .unwrap_or(date)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

// Both clamp at the ends of the representable date range.
fn week_start(date: NaiveDate) -> NaiveDate {
    let back = Days::new(date.weekday().num_days_from_sunday() as u64);
    date.checked_sub_days(back).unwrap_or(NaiveDate::MIN)
}

fn week_end(date: NaiveDate) -> NaiveDate {
    let ahead = Days::new(6 - date.weekday().num_days_from_sunday() as u64);
    date.checked_add_days(ahead).unwrap_or(NaiveDate::MAX)
}

/// One calendar-day slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    /// Titles to draw in the cell, plus how many were left out.
    pub fn preview(&self, max: usize) -> (Vec<&str>, usize) {
        let shown = self
            .events
            .iter()
            .take(max)
            .map(|e| e.title.as_str())
            .collect();
        (shown, self.events.len().saturating_sub(max))
    }
}

fn bucket_by_date(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut buckets: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
    for event in events {
        buckets.entry(event.date).or_default().push(event);
    }
    buckets
}

fn build_cells<'a>(
    range: DateRange,
    reference: NaiveDate,
    events: &'a [Event],
) -> Vec<DayCell<'a>> {
    let mut buckets = bucket_by_date(events);
    range
        .days()
        .map(|date| DayCell {
            date,
            in_current_month: same_month(date, reference),
            events: buckets.remove(&date).unwrap_or_default(),
        })
        .collect()
}

/// Cells for every day of `reference`'s month, ascending.
pub fn month_cells(reference: NaiveDate, events: &[Event]) -> Vec<DayCell<'_>> {
    build_cells(DateRange::month_of(reference), reference, events)
}

/// Cells padded with adjacent-month days to whole Sunday-first weeks.
pub fn padded_weeks(reference: NaiveDate, events: &[Event]) -> Vec<Vec<DayCell<'_>>> {
    let cells = build_cells(DateRange::weeks_of(reference), reference, events);
    let mut weeks = Vec::with_capacity(cells.len() / 7);
    let mut iter = cells.into_iter().peekable();
    while iter.peek().is_some() {
        weeks.push(iter.by_ref().take(7).collect());
    }
    weeks
}

pub fn events_on(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.date == date).collect()
}

pub fn events_in_month(reference: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| same_month(e.date, reference))
        .collect()
}

/// Reference month and selection owned by the calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    pub reference: NaiveDate,
    pub selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            selected: None,
        }
    }

    pub fn visible_range(&self) -> DateRange {
        DateRange::weeks_of(self.reference)
    }

    pub fn next_month(&mut self) {
        self.reference = next_month(self.reference);
    }

    pub fn previous_month(&mut self) {
        self.reference = previous_month(self.reference);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn go_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.reference = today;
        self.selected = Some(today);
    }

    /// Moves the selection by `days`, starting from the first of the month
    /// when nothing is selected. The displayed month follows the selection.
    pub fn move_selection(&mut self, days: i64) {
        let from = self
            .selected
            .unwrap_or_else(|| start_of_month(self.reference));
        let to = if self.selected.is_none() {
            from
        } else {
            from.checked_add_signed(Duration::days(days)).unwrap_or(from)
        };
        self.selected = Some(to);
        if !same_month(to, self.reference) {
            self.reference = start_of_month(to);
        }
    }
}
