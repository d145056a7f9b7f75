use chrono::NaiveDate;
use projecton::calendar::DateRange;
use projecton::config::{Config, DataConfig};
use projecton::error::DashboardError;
use projecton::i18n::Language;
use projecton::model::{ActivityKind, EventCategory, MemberStatus, ProjectStatus};
use projecton::page::{CalendarPage, DashboardPage, DashboardSummary, Theme};
use projecton::provider::{self, DataProvider, DatasetProvider, IcsEvents, MockProvider};
use projecton::route::Route;
use std::fs;
use tempfile::tempdir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const DATASET: &str = r#"{
  "events": [
    { "id": 1, "title": "Sprint planning", "date": "2024-05-06", "category": "meeting" },
    { "id": 2, "title": "Release", "date": "2024-05-31", "category": "deadline",
      "description": "v2 goes out" },
    { "id": 3, "title": "Retro", "date": "2024-06-03" }
  ],
  "projects": [
    { "id": 1, "name": "Billing", "description": "Invoices", "status": "active",
      "progress": 30, "due_date": "2024-06-01", "team_size": 3, "priority": "high" },
    { "id": 2, "name": "Search", "status": "done",
      "progress": 250, "due_date": "2024-04-01", "team_size": 2, "priority": "low" }
  ],
  "members": [
    { "id": 1, "name": "Ada", "email": "ada@example.com", "role": "Engineer",
      "status": "active", "join_date": "2022-01-10" },
    { "id": 2, "name": "Grace", "email": "grace@example.com", "role": "Manager",
      "status": "on_leave", "department": "Ops", "join_date": "2021-03-02" }
  ]
}"#;

const ICS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:standup\r\n\
DTSTAMP:20240101T000000Z\r\n\
SUMMARY:Standup\r\n\
DTSTART;VALUE=DATE:20240102\r\n\
RRULE:FREQ=WEEKLY;COUNT=4\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:review\r\n\
DTSTAMP:20240101T000000Z\r\n\
SUMMARY:Design review\r\n\
DESCRIPTION:Screens for v2\r\n\
CATEGORIES:REVIEW\r\n\
DTSTART:20240118T090000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

#[test]
fn test_mock_dashboard_summary() {
    let page = DashboardPage::load(&MockProvider).unwrap();
    assert_eq!(
        page.summary(),
        DashboardSummary {
            total_projects: 6,
            active_members: 5,
            completed_projects: 1,
            average_progress: 52,
        }
    );

    let in_flight: Vec<&str> = page.in_flight().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        in_flight,
        vec!["웹사이트 리뉴얼", "모바일 앱 개발", "데이터베이스 최적화", "API 문서화"]
    );
}

#[test]
fn test_empty_summary_has_zero_progress() {
    assert_eq!(DashboardSummary::compute(&[], &[]), DashboardSummary::default());
}

#[test]
fn test_mock_events_in_range() {
    let provider = MockProvider;
    let january = provider
        .list_events_in_range(&DateRange::month_of(ymd(2024, 1, 1)))
        .unwrap();
    assert_eq!(january.len(), 5);

    let february = provider
        .list_events_in_range(&DateRange::month_of(ymd(2024, 2, 1)))
        .unwrap();
    assert!(february.is_empty());
}

#[test]
fn test_activity_sentences() {
    let feed = projecton::provider::mock::activity();
    assert_eq!(feed[0].verb, ActivityKind::Completed);
    assert_eq!(
        feed[0].sentence(Language::Ko),
        "김개발이 로그인 기능을 완료했습니다"
    );
    assert_eq!(feed[0].when(Language::Ko), "2시간 전");
    assert_eq!(feed[3].when(Language::Ko), "1일 전");
    assert_eq!(feed[0].sentence(Language::En), "김개발 completed 로그인 기능");
    assert_eq!(feed[3].when(Language::En), "1 day ago");
}

#[test]
fn test_dataset_provider_loads_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    fs::write(&path, DATASET).unwrap();

    let provider = DatasetProvider::load(&path).unwrap();
    let projects = provider.list_projects().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].status, ProjectStatus::Done);
    assert_eq!(projects[1].progress, 100, "progress is clamped");
    assert!(projects[1].description.is_empty());

    let members = provider.list_team_members().unwrap();
    assert_eq!(members[1].status, MemberStatus::OnLeave);
    assert!(provider.list_activity().unwrap().is_empty());

    let may = provider
        .list_events_in_range(&DateRange::month_of(ymd(2024, 5, 1)))
        .unwrap();
    let titles: Vec<&str> = may.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Sprint planning", "Release"]);

    // Padded weeks of May 2024 run through Saturday June 1, not June 3.
    let page = CalendarPage::load(&provider, ymd(2024, 5, 15)).unwrap();
    assert_eq!(page.events().len(), 2);

    let summary = DashboardPage::load(&provider).unwrap().summary();
    assert_eq!(summary.active_members, 1);
    assert_eq!(summary.average_progress, 65);
}

#[test]
fn test_dataset_event_category_defaults_to_meeting() {
    let dataset: DatasetProvider = serde_json::from_str(DATASET).unwrap();
    assert_eq!(dataset.events[2].category, EventCategory::Meeting);
    assert!(dataset.events[2].description.is_empty());
}

#[test]
fn test_dataset_errors_carry_the_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    match DatasetProvider::load(&missing) {
        Err(DashboardError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    match DatasetProvider::load(&broken) {
        Err(DashboardError::Json { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected Json error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_ics_expands_recurrence() {
    let provider = IcsEvents::from_ics(ICS, MockProvider).unwrap();
    let january = provider
        .list_events_in_range(&DateRange::month_of(ymd(2024, 1, 1)))
        .unwrap();

    let standups: Vec<NaiveDate> = january
        .iter()
        .filter(|e| e.title == "Standup")
        .map(|e| e.date)
        .collect();
    assert_eq!(
        standups,
        vec![ymd(2024, 1, 2), ymd(2024, 1, 9), ymd(2024, 1, 16), ymd(2024, 1, 23)]
    );

    let review = january
        .iter()
        .find(|e| e.title == "Design review")
        .unwrap();
    assert_eq!(review.date, ymd(2024, 1, 18));
    assert_eq!(review.category, EventCategory::Review);
    assert_eq!(review.description, "Screens for v2");

    // Everything but events comes from the wrapped provider.
    assert_eq!(provider.list_projects().unwrap().len(), 6);
    assert!(
        provider
            .list_events_in_range(&DateRange::month_of(ymd(2024, 2, 1)))
            .unwrap()
            .is_empty()
    );
}

fn single_event_ics(start: &str, rule: &str) -> String {
    format!(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:repeat\r\n\
DTSTAMP:20240101T000000Z\r\n\
SUMMARY:Repeat\r\n\
{}\r\n\
RRULE:{}\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n",
        start, rule
    )
}

fn repeat_dates(ics: &str, range: DateRange) -> Vec<NaiveDate> {
    let provider = IcsEvents::from_ics(ics, MockProvider).unwrap();
    provider
        .list_events_in_range(&range)
        .unwrap()
        .into_iter()
        .filter(|e| e.title == "Repeat")
        .map(|e| e.date)
        .collect()
}

#[test]
fn test_ics_old_daily_rule_fills_later_month() {
    let ics = single_event_ics("DTSTART;VALUE=DATE:20200101", "FREQ=DAILY");
    let january = DateRange::month_of(ymd(2024, 1, 1));
    let dates = repeat_dates(&ics, january);
    assert_eq!(dates.len(), 31);
    assert_eq!(dates.first(), Some(&ymd(2024, 1, 1)));
    assert_eq!(dates.last(), Some(&ymd(2024, 1, 31)));
}

#[test]
fn test_ics_all_day_rule_with_date_until() {
    let ics = single_event_ics("DTSTART;VALUE=DATE:20240102", "FREQ=WEEKLY;UNTIL=20240130");
    let dates = repeat_dates(&ics, DateRange::month_of(ymd(2024, 1, 1)));
    assert_eq!(
        dates,
        vec![
            ymd(2024, 1, 2),
            ymd(2024, 1, 9),
            ymd(2024, 1, 16),
            ymd(2024, 1, 23),
            ymd(2024, 1, 30)
        ]
    );

    let february = DateRange::month_of(ymd(2024, 2, 1));
    assert!(repeat_dates(&ics, february).is_empty());
}

#[test]
fn test_ics_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = IcsEvents::load(&dir.path().join("none.ics"), MockProvider);
    assert!(matches!(result, Err(DashboardError::Io { .. })));
}

#[test]
fn test_open_uses_configured_sources() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("dataset.json");
    let ics = dir.path().join("events.ics");
    fs::write(&dataset, DATASET).unwrap();
    fs::write(&ics, ICS).unwrap();

    let mock = provider::open(&DataConfig::default()).unwrap();
    assert_eq!(mock.list_projects().unwrap().len(), 6);

    let layered = provider::open(&DataConfig {
        dataset: Some(dataset),
        events_ics: Some(ics),
    })
    .unwrap();
    assert_eq!(layered.list_projects().unwrap().len(), 2);
    let may = layered
        .list_events_in_range(&DateRange::month_of(ymd(2024, 5, 1)))
        .unwrap();
    assert!(may.is_empty(), "ICS events replace dataset events");
}

#[test]
fn test_config_parse_and_defaults() {
    let config = Config::parse(
        r#"
[user]
email = "kim.dev@company.com"
display_name = "김개발"

[ui]
language = "en"
theme = "dark"
start_page = "calendar"

[log]
level = "debug"
"#,
    )
    .unwrap();
    let user = config.user.as_ref().unwrap();
    assert_eq!(user.display_name(), "김개발");
    assert_eq!(config.ui.language, Language::En);
    assert_eq!(config.ui.theme, Theme::Dark);
    assert_eq!(config.ui.start_page, Route::Calendar);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.data, DataConfig::default());

    let empty = Config::parse("").unwrap();
    assert_eq!(empty, Config::default());
    assert_eq!(empty.ui.language, Language::Ko);
    assert_eq!(empty.ui.theme, Theme::System);
    assert_eq!(empty.log.level, "info");
}

#[test]
fn test_config_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nlanguage = \"en\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.language, Language::En);

    fs::write(&path, "[ui]\nlanguage = 42\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(DashboardError::Config(_))
    ));
}
