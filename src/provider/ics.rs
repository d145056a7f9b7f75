// File: ./src/provider/ics.rs
// Serves calendar events from an .ics file on top of another provider
use super::{DataProvider, in_range};
use crate::calendar::DateRange;
use crate::error::{DashboardError, Result};
use crate::model::{Activity, Event, EventCategory, Project, TeamMember};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use icalendar::{Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, EventLike};
use rrule::{RRuleSet, Tz};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Upper bound on occurrences generated per recurrence rule.
const MAX_OCCURRENCES: u16 = 1000;

/// A VEVENT reduced to what the dashboard displays.
#[derive(Debug, Clone)]
struct Entry {
    title: String,
    description: String,
    category: EventCategory,
    date: NaiveDate,
    rrule: Option<String>,
}

pub struct IcsEvents<P> {
    entries: Vec<Entry>,
    inner: P,
}

impl<P: DataProvider> IcsEvents<P> {
    pub fn load(path: &Path, inner: P) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        let entries = parse_entries(&raw).map_err(|reason| DashboardError::Ics {
            path: path.to_path_buf(),
            reason,
        })?;
        log::debug!("event=ics_loaded entries={}", entries.len());
        Ok(Self { entries, inner })
    }

    pub fn from_ics(raw: &str, inner: P) -> Result<Self> {
        let entries = parse_entries(raw).map_err(|reason| DashboardError::Ics {
            path: "<memory>".into(),
            reason,
        })?;
        Ok(Self { entries, inner })
    }
}

fn parse_entries(raw: &str) -> std::result::Result<Vec<Entry>, String> {
    let calendar: Calendar = raw.parse().map_err(|e| format!("Parse: {}", e))?;
    let mut entries = Vec::new();
    for component in &calendar.components {
        let CalendarComponent::Event(vevent) = component else {
            continue;
        };
        let Some(date) = vevent.get_start().map(start_date) else {
            log::warn!(
                "event=ics_skip reason=no_dtstart uid={}",
                vevent.get_uid().unwrap_or_default()
            );
            continue;
        };

        let category = vevent
            .properties()
            .get("CATEGORIES")
            .into_iter()
            .chain(vevent.multi_properties().get("CATEGORIES").into_iter().flatten())
            .flat_map(|p| p.value().split(','))
            .find_map(EventCategory::from_name)
            .unwrap_or_default();

        entries.push(Entry {
            title: vevent.get_summary().unwrap_or("(No title)").to_string(),
            description: vevent.get_description().unwrap_or("").to_string(),
            category,
            date,
            rrule: vevent
                .properties()
                .get("RRULE")
                .map(|p| p.value().to_string()),
        });
    }
    Ok(entries)
}

fn start_date(start: DatePerhapsTime) -> NaiveDate {
    match start {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => dt.date_naive(),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => naive.date(),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            date_time.date()
        }
    }
}

/// Dates inside `range` on which `entry` occurs. Falls back to the start date
/// alone when the rule cannot be parsed.
fn occurrences(entry: &Entry, range: &DateRange) -> Vec<NaiveDate> {
    let Some(rule) = &entry.rrule else {
        return vec![entry.date];
    };
    // All-day starts become midnight UTC, so UNTIL must be UTC as well.
    let rrule_string = format!(
        "DTSTART:{}\nRRULE:{}",
        entry.date.format("%Y%m%dT000000Z"),
        utc_until(rule)
    );
    let set = match RRuleSet::from_str(&rrule_string) {
        Ok(set) => set,
        Err(e) => {
            log::warn!("event=ics_rrule_invalid rule={} error={}", rule, e);
            return vec![entry.date];
        }
    };

    // after/before are exclusive; widen by a second on each side.
    let tz: Tz = Utc.into();
    let after = range
        .start
        .and_time(NaiveTime::MIN)
        .checked_sub_signed(Duration::seconds(1));
    let set = match after {
        Some(after) => set.after(after.and_utc().with_timezone(&tz)),
        None => set,
    };
    let before = range.end.succ_opt().map(|d| d.and_time(NaiveTime::MIN));
    let set = match before {
        Some(before) => set.before(before.and_utc().with_timezone(&tz)),
        None => set,
    };
    set.all(MAX_OCCURRENCES)
        .dates
        .iter()
        .map(|dt| dt.date_naive())
        .collect()
}

/// Rewrites a date-only or floating UNTIL as a UTC date-time.
fn utc_until(rule: &str) -> String {
    rule.split(';')
        .map(|part| match part.split_once('=') {
            Some((key, value)) if key.eq_ignore_ascii_case("UNTIL") => {
                if value.len() == 8 {
                    format!("{}={}T235959Z", key, value)
                } else if !value.ends_with('Z') {
                    format!("{}={}Z", key, value)
                } else {
                    part.to_string()
                }
            }
            _ => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

impl<P: DataProvider> DataProvider for IcsEvents<P> {
    fn list_events_in_range(&self, range: &DateRange) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for entry in &self.entries {
            for date in occurrences(entry, range) {
                events.push(Event {
                    id: events.len() as u32 + 1,
                    title: entry.title.clone(),
                    date,
                    category: entry.category,
                    description: entry.description.clone(),
                });
            }
        }
        Ok(in_range(&events, range))
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        self.inner.list_projects()
    }

    fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        self.inner.list_team_members()
    }

    fn list_activity(&self) -> Result<Vec<Activity>> {
        self.inner.list_activity()
    }
}
