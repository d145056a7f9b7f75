use chrono::{Datelike, NaiveDate, Weekday};
use projecton::calendar::{
    CalendarState, DateRange, days_in_month, events_in_month, events_on, month_cells,
    padded_weeks,
};
use projecton::model::{Event, EventCategory};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_events() -> Vec<Event> {
    vec![
        Event::new(1, "A", ymd(2024, 1, 15), EventCategory::Meeting),
        Event::new(2, "B", ymd(2024, 1, 15), EventCategory::Review),
        Event::new(3, "C", ymd(2024, 1, 20), EventCategory::Deadline),
    ]
}

#[test]
fn test_month_cells_cover_every_day_in_order() {
    let cases = [
        (ymd(2024, 1, 10), 31),
        (ymd(2024, 2, 1), 29),
        (ymd(2023, 2, 28), 28),
        (ymd(2024, 4, 30), 30),
        (ymd(2024, 12, 25), 31),
    ];
    for (reference, expected) in cases {
        let cells = month_cells(reference, &[]);
        assert_eq!(cells.len(), expected, "month of {}", reference);
        assert_eq!(days_in_month(reference) as usize, expected);
        assert_eq!(cells[0].date.day(), 1);
        assert!(cells.windows(2).all(|w| w[0].date < w[1].date));
        assert!(cells.iter().all(|c| c.in_current_month));
        assert!(cells.iter().all(|c| c.events.is_empty()));
    }
}

#[test]
fn test_events_land_on_matching_dates_only() {
    let events = sample_events();
    let cells = month_cells(ymd(2024, 1, 1), &events);

    let titles = |day: u32| -> Vec<&str> {
        cells[(day - 1) as usize]
            .events
            .iter()
            .map(|e| e.title.as_str())
            .collect()
    };
    assert_eq!(titles(15), vec!["A", "B"]);
    assert_eq!(titles(20), vec!["C"]);
    assert!(titles(16).is_empty());

    for cell in &cells {
        for event in &cell.events {
            assert_eq!(event.date, cell.date);
        }
    }
    let placed: usize = cells.iter().map(|c| c.events.len()).sum();
    assert_eq!(placed, 3);
}

#[test]
fn test_events_outside_month_are_ignored() {
    let events = vec![
        Event::new(1, "Last year", ymd(2023, 12, 31), EventCategory::Meeting),
        Event::new(2, "Next month", ymd(2024, 2, 1), EventCategory::Meeting),
    ];
    let cells = month_cells(ymd(2024, 1, 1), &events);
    assert!(cells.iter().all(|c| c.events.is_empty()));
    assert!(events_in_month(ymd(2024, 1, 1), &events).is_empty());
}

#[test]
fn test_preview_shows_two_titles_and_counts_the_rest() {
    let date = ymd(2024, 3, 5);
    let events: Vec<Event> = (1..=4)
        .map(|i| Event::new(i, &format!("E{}", i), date, EventCategory::Meeting))
        .collect();
    let cells = month_cells(date, &events);
    let (shown, hidden) = cells[4].preview(2);
    assert_eq!(shown, vec!["E1", "E2"]);
    assert_eq!(hidden, 2);

    let (shown, hidden) = cells[5].preview(2);
    assert!(shown.is_empty());
    assert_eq!(hidden, 0);
}

#[test]
fn test_padded_weeks_start_on_sunday() {
    for month in 1..=12 {
        let reference = ymd(2024, month, 1);
        let weeks = padded_weeks(reference, &[]);
        let cells: Vec<_> = weeks.iter().flatten().collect();

        assert_eq!(cells.len() % 7, 0);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        assert_eq!(cells[cells.len() - 1].date.weekday(), Weekday::Sat);

        let in_month = cells.iter().filter(|c| c.in_current_month).count();
        assert_eq!(in_month as u32, days_in_month(reference));
    }
}

#[test]
fn test_padded_weeks_carry_neighbouring_events() {
    // January 2024 starts on a Monday, so Dec 31 leads the first week.
    let events = vec![Event::new(1, "NYE", ymd(2023, 12, 31), EventCategory::Meeting)];
    let weeks = padded_weeks(ymd(2024, 1, 1), &events);
    let first = &weeks[0][0];
    assert_eq!(first.date, ymd(2023, 12, 31));
    assert!(!first.in_current_month);
    assert_eq!(first.events.len(), 1);
}

#[test]
fn test_events_on_date() {
    let events = sample_events();
    let titles: Vec<&str> = events_on(ymd(2024, 1, 15), &events)
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert!(events_on(ymd(2024, 1, 16), &events).is_empty());
}

#[test]
fn test_date_range_normalizes_and_contains() {
    let range = DateRange::new(ymd(2024, 1, 31), ymd(2024, 1, 1));
    assert_eq!(range.start, ymd(2024, 1, 1));
    assert_eq!(range.end, ymd(2024, 1, 31));
    assert!(range.contains(ymd(2024, 1, 1)));
    assert!(range.contains(ymd(2024, 1, 31)));
    assert!(!range.contains(ymd(2024, 2, 1)));
    assert_eq!(range.days().count(), 31);

    let month = DateRange::month_of(ymd(2024, 2, 14));
    assert_eq!(month.start, ymd(2024, 2, 1));
    assert_eq!(month.end, ymd(2024, 2, 29));
}

#[test]
fn test_month_navigation_crosses_year() {
    let mut state = CalendarState::new(ymd(2023, 12, 31));
    state.next_month();
    assert_eq!((state.reference.year(), state.reference.month()), (2024, 1));

    state.previous_month();
    state.previous_month();
    assert_eq!((state.reference.year(), state.reference.month()), (2023, 11));
}

#[test]
fn test_move_selection_follows_month() {
    let mut state = CalendarState::new(ymd(2024, 1, 10));
    state.move_selection(1);
    assert_eq!(state.selected, Some(ymd(2024, 1, 1)));

    state.move_selection(-1);
    assert_eq!(state.selected, Some(ymd(2023, 12, 31)));
    assert_eq!(state.reference, ymd(2023, 12, 1));

    state.clear_selection();
    assert_eq!(state.selected, None);
}

#[test]
fn test_grid_is_total_at_date_limits() {
    let last = month_cells(NaiveDate::MAX, &[]);
    assert_eq!(last.len() as u32, days_in_month(NaiveDate::MAX));
    assert_eq!(last.last().map(|c| c.date), Some(NaiveDate::MAX));

    let first = month_cells(NaiveDate::MIN, &[]);
    assert_eq!(first.len() as u32, days_in_month(NaiveDate::MIN));
    assert_eq!(first[0].date, NaiveDate::MIN);

    let weeks = padded_weeks(NaiveDate::MAX, &[]);
    let cells: Vec<_> = weeks.iter().flatten().collect();
    assert_eq!(cells.last().map(|c| c.date), Some(NaiveDate::MAX));
    assert_eq!(cells.iter().filter(|c| c.in_current_month).count(), last.len());

    let weeks = padded_weeks(NaiveDate::MIN, &[]);
    assert_eq!(weeks[0][0].date, NaiveDate::MIN);

    let mut state = CalendarState::new(NaiveDate::MAX);
    assert_eq!(state.visible_range().end, NaiveDate::MAX);
    state.select(NaiveDate::MAX);
    state.move_selection(7);
    assert_eq!(state.selected, Some(NaiveDate::MAX));
}
