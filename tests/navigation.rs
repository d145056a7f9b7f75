use projecton::auth::{Identity, Session};
use projecton::i18n::Language;
use projecton::page::settings::SettingsRow;
use projecton::page::{SettingsPage, Theme};
use projecton::route::{self, Route};

fn signed_in() -> Session {
    Session::new(Some(Identity::new("kim.dev@company.com")))
}

#[test]
fn test_paths_map_to_routes() {
    assert_eq!(Route::from_path("/"), Route::Dashboard);
    assert_eq!(Route::from_path("/projects"), Route::Projects);
    assert_eq!(Route::from_path("/team/"), Route::Team);
    assert_eq!(Route::from_path("/calendar"), Route::Calendar);
    assert_eq!(Route::from_path("/settings"), Route::Settings);
    assert_eq!(Route::from_path("/auth"), Route::Auth);
    assert_eq!(Route::from_path("/nowhere"), Route::NotFound);

    assert_eq!("team".parse::<Route>(), Ok(Route::Team));
    assert_eq!("dashboard".parse::<Route>(), Ok(Route::Dashboard));
    assert_eq!("/calendar".parse::<Route>(), Ok(Route::Calendar));
    assert!("nowhere".parse::<Route>().is_err());
}

#[test]
fn test_auth_gate_redirects_anonymous_users() {
    let anonymous = Session::default();
    for path in ["/", "/projects", "/team", "/calendar", "/settings"] {
        assert_eq!(route::resolve(path, &anonymous), Route::Auth, "{}", path);
    }
    assert_eq!(route::resolve("/auth", &anonymous), Route::Auth);
    assert_eq!(route::resolve("/nowhere", &anonymous), Route::NotFound);

    let session = signed_in();
    assert_eq!(route::resolve("/projects", &session), Route::Projects);
    assert_eq!(route::resolve("/nowhere", &session), Route::NotFound);
}

#[test]
fn test_sidebar_highlights_current_path() {
    let items: Vec<Route> = route::nav_items().collect();
    assert_eq!(
        items,
        vec![
            Route::Dashboard,
            Route::Projects,
            Route::Team,
            Route::Calendar,
            Route::Settings
        ]
    );
    assert!(route::is_active(Route::Dashboard, "/"));
    assert!(!route::is_active(Route::Dashboard, "/team"));
    assert!(route::is_active(Route::Team, "/team"));
    assert!(!route::is_active(Route::Projects, "/team"));
}

#[test]
fn test_session_sign_in_and_out() {
    let mut session = Session::default();
    assert!(!session.sign_in("   "));
    assert!(!session.is_authenticated());

    assert!(session.sign_in(" lee.design@company.com "));
    let identity = session.identity().unwrap();
    assert_eq!(identity.email, "lee.design@company.com");
    assert_eq!(identity.display_name(), "lee.design@company.com");
    assert_eq!(identity.avatar_initial(), "L");

    session.sign_out();
    assert!(session.identity().is_none());
}

#[test]
fn test_settings_defaults_and_toggles() {
    let mut identity = Identity::new("kim.dev@company.com");
    let mut page = SettingsPage::new(Theme::default(), Language::default(), Some(&identity));
    let n = page.notifications;
    assert!(n.email && !n.push && n.project_updates && n.task_assignments && n.reminders);
    assert_eq!(page.theme, Theme::System);
    assert_eq!(page.language, Language::Ko);

    page.toggle(SettingsRow::NotifyPush);
    assert!(page.notifications.push);
    page.toggle(SettingsRow::Theme);
    assert_eq!(page.theme, Theme::Light);
    page.toggle(SettingsRow::Language);
    assert_eq!(page.language, Language::En);

    page.set_display_name_draft("  김개발 ");
    page.apply_profile(&mut identity);
    assert_eq!(identity.display_name(), "김개발");

    page.set_display_name_draft("");
    page.apply_profile(&mut identity);
    assert_eq!(identity.display_name, None);
}

#[cfg(feature = "tui")]
mod app {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use projecton::config::Config;
    use projecton::filter::StatusFilter;
    use projecton::model::ProjectStatus;
    use projecton::provider::MockProvider;
    use projecton::tui::action::Action;
    use projecton::tui::state::{AppState, Focus, InputMode};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn app(user: Option<Identity>) -> AppState {
        let config = Config {
            user,
            ..Config::default()
        };
        AppState::new(&config, Box::new(MockProvider), today())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        if let Some(action) = Action::from_key(key(code), state) {
            state.apply(action);
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_anonymous_start_lands_on_sign_in() {
        let mut state = app(None);
        assert_eq!(state.route, Route::Auth);
        assert_eq!(state.mode, InputMode::SigningIn);

        // 'q' is text while signing in.
        type_text(&mut state, "qa@company.com");
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Enter);

        assert!(state.session.is_authenticated());
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_sign_in_returns_to_requested_page() {
        let mut state = app(None);
        state.navigate("/calendar");
        assert_eq!(state.route, Route::Auth);
        type_text(&mut state, "kim.dev@company.com");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, Route::Calendar);
        assert_eq!(state.path, "/calendar");
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        assert_eq!(state.route, Route::Dashboard);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.route, Route::Projects);
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.route, Route::Calendar);
        press(&mut state, KeyCode::Char('o'));
        assert_eq!(state.route, Route::Auth);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_sidebar_activation_navigates() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.active_focus, Focus::Sidebar);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, Route::Team);
        assert_eq!(state.active_focus, Focus::Main);
    }

    #[test]
    fn test_live_search_and_status_filter() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.mode, InputMode::Searching);
        type_text(&mut state, "디자인");
        assert_eq!(state.team.visible().len(), 1);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.team.search(), "디자인");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.team.visible().len(), 5);

        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(
            state.projects.status_filter(),
            StatusFilter::Only(ProjectStatus::Active)
        );
        assert_eq!(state.projects.visible().len(), 3);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.list_state.selected(), Some(0), "selection wraps");
    }

    #[test]
    fn test_calendar_keys_move_selection() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.calendar.events().len(), 5);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.calendar.selected(), NaiveDate::from_ymd_opt(2024, 1, 1));
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.calendar.selected(), NaiveDate::from_ymd_opt(2024, 1, 16));

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.calendar.reference(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(state.calendar.month_events().is_empty());
        press(&mut state, KeyCode::Char('p'));
        assert_eq!(state.calendar.month_events().len(), 5);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.calendar.selected(), None);
    }

    #[test]
    fn test_settings_edit_display_name() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        press(&mut state, KeyCode::Char('5'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, InputMode::EditingName);
        type_text(&mut state, "김개발");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.identity().unwrap().display_name(), "김개발");

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.settings.notifications.push);
    }

    #[test]
    fn test_create_is_read_only() {
        let mut state = app(Some(Identity::new("kim.dev@company.com")));
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.message, state.strings().read_only);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }
}
