#![cfg(feature = "tui")]

use chrono::NaiveDate;
use projecton::auth::Identity;
use projecton::config::Config;
use projecton::i18n::Language;
use projecton::provider::MockProvider;
use projecton::route::Route;
use projecton::tui::action::Action;
use projecton::tui::state::AppState;
use projecton::tui::view;
use ratatui::{Terminal, backend::TestBackend};

fn english_app(user: Option<Identity>) -> AppState {
    let mut config = Config {
        user,
        ..Config::default()
    };
    config.ui.language = Language::En;
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    AppState::new(&config, Box::new(MockProvider), today)
}

fn render(state: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| view::draw(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_every_page_renders() {
    let mut state = english_app(Some(Identity::new("kim.dev@company.com")));
    for route in [
        Route::Dashboard,
        Route::Projects,
        Route::Team,
        Route::Calendar,
        Route::Settings,
    ] {
        state.apply(Action::Navigate(route));
        let screen = render(&mut state);
        assert!(screen.contains("ProjectON"), "{:?}", route);
        assert!(screen.contains("kim.dev@company.com"), "{:?}", route);
    }
}

#[test]
fn test_dashboard_shows_summary() {
    let mut state = english_app(Some(Identity::new("kim.dev@company.com")));
    let screen = render(&mut state);
    assert!(screen.contains("Total projects"));
    assert!(screen.contains("52%"));
}

#[test]
fn test_calendar_shows_month_title() {
    let mut state = english_app(Some(Identity::new("kim.dev@company.com")));
    state.apply(Action::Navigate(Route::Calendar));
    let screen = render(&mut state);
    assert!(screen.contains("January 2024"));
    assert!(screen.contains("This month"));
}

#[test]
fn test_sign_in_and_not_found_render() {
    let mut state = english_app(None);
    assert!(render(&mut state).contains("Enter your email"));

    state.session.sign_in("kim.dev@company.com");
    state.navigate("/missing");
    let screen = render(&mut state);
    assert!(screen.contains("404"));
    assert!(screen.contains("/missing"));
}
