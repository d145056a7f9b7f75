use crate::auth::{Identity, Session};
use crate::calendar::CalendarState;
use crate::config::Config;
use crate::error::DashboardError;
use crate::i18n::{Language, Strings};
use crate::page::settings::SettingsRow;
use crate::page::{CalendarPage, DashboardPage, ProjectsPage, SettingsPage, TeamPage};
use crate::provider::DataProvider;
use crate::route::{self, Route};
use crate::tui::action::Action;
use chrono::{Local, NaiveDate};
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Sidebar,
    Main,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    Searching,
    EditingName,
    SigningIn,
}

pub struct AppState {
    provider: Box<dyn DataProvider>,
    pub session: Session,
    pub path: String,
    pub route: Route,
    /// Path requested before the sign-in redirect.
    pending_path: Option<String>,
    pub dashboard: DashboardPage,
    pub projects: ProjectsPage,
    pub team: TeamPage,
    pub calendar: CalendarPage,
    pub settings: SettingsPage,
    pub nav_state: ListState,
    pub list_state: ListState,
    pub settings_state: ListState,
    pub active_focus: Focus,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub message: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config, provider: Box<dyn DataProvider>, today: NaiveDate) -> Self {
        let session = Session::new(config.user.clone());
        let settings = SettingsPage::new(config.ui.theme, config.ui.language, config.user.as_ref());
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        let mut n_state = ListState::default();
        n_state.select(Some(0));
        let mut s_state = ListState::default();
        s_state.select(Some(0));

        let mut state = Self {
            calendar: CalendarPage::new(CalendarState::new(today), vec![]),
            provider,
            session,
            path: "/".to_string(),
            route: Route::Dashboard,
            pending_path: None,
            dashboard: DashboardPage::default(),
            projects: ProjectsPage::default(),
            team: TeamPage::default(),
            settings,
            nav_state: n_state,
            list_state: l_state,
            settings_state: s_state,
            active_focus: Focus::Main,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            message: String::new(),
            should_quit: false,
        };
        state.navigate(config.ui.start_page.path());
        state.reload();
        state
    }

    pub fn with_today(config: &Config, provider: Box<dyn DataProvider>) -> Self {
        Self::new(config, provider, Local::now().date_naive())
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn strings(&self) -> &'static Strings {
        self.settings.language.strings()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Loads every page from the provider. A failing source leaves its page
    /// empty and reports the error in the status line.
    pub fn reload(&mut self) {
        let mut errors = Vec::new();
        match DashboardPage::load(self.provider.as_ref()) {
            Ok(page) => self.dashboard = page,
            Err(e) => errors.push(e),
        }
        match ProjectsPage::load(self.provider.as_ref()) {
            Ok(page) => self.projects = page,
            Err(e) => errors.push(e),
        }
        match TeamPage::load(self.provider.as_ref()) {
            Ok(page) => self.team = page,
            Err(e) => errors.push(e),
        }
        if let Err(e) = self.calendar.refresh(self.provider.as_ref()) {
            errors.push(e);
        }
        self.report(errors);
    }

    fn report(&mut self, errors: Vec<DashboardError>) {
        if let Some(first) = errors.first() {
            for e in &errors {
                log::error!("event=provider_error error={}", e);
            }
            self.message = format!("Error: {}", first);
        }
    }

    fn refresh_calendar(&mut self) {
        if let Err(e) = self.calendar.refresh(self.provider.as_ref()) {
            self.report(vec![e]);
        }
    }

    pub fn navigate(&mut self, path: &str) {
        let target = route::resolve(path, &self.session);
        if target == Route::Auth && Route::from_path(path) != Route::Auth {
            self.pending_path = Some(path.to_string());
        }
        self.path = if target == Route::Auth {
            Route::Auth.path().to_string()
        } else {
            path.to_string()
        };
        self.route = target;
        log::info!("event=navigate path={} route={:?}", path, target);

        self.list_state.select(Some(0));
        self.mode = if target == Route::Auth {
            self.reset_input();
            InputMode::SigningIn
        } else {
            InputMode::Normal
        };
        if let Some(i) = route::nav_items().position(|r| r == target) {
            self.nav_state.select(Some(i));
        }
        self.message = self.help_text().to_string();
    }

    fn help_text(&self) -> &'static str {
        match (self.route, self.language()) {
            (Route::Projects, Language::Ko) => "/: 검색 | f: 상태 필터 | Esc: 초기화 | Tab: 메뉴",
            (Route::Projects, Language::En) => "/: Search | f: Status | Esc: Clear | Tab: Menu",
            (Route::Team, Language::Ko) => "/: 검색 | Esc: 초기화 | Tab: 메뉴",
            (Route::Team, Language::En) => "/: Search | Esc: Clear | Tab: Menu",
            (Route::Calendar, Language::Ko) => "←→↑↓: 날짜 | n/p: 다음/이전 달 | t: 오늘",
            (Route::Calendar, Language::En) => "Arrows: Date | n/p: Next/Prev month | t: Today",
            (Route::Settings, Language::Ko) => "Enter/Space: 변경 | Tab: 메뉴",
            (Route::Settings, Language::En) => "Enter/Space: Change | Tab: Menu",
            (Route::Auth, Language::Ko) => "Enter: 로그인 | Ctrl-C: 종료",
            (Route::Auth, Language::En) => "Enter: Sign in | Ctrl-C: Quit",
            (_, Language::Ko) => "1-5: 페이지 | Tab: 메뉴 | q: 종료",
            (_, Language::En) => "1-5: Pages | Tab: Menu | q: Quit",
        }
    }

    // --- Input buffer ---

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self.byte_index();
        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn set_input(&mut self, value: &str) {
        self.input_buffer = value.to_string();
        self.cursor_position = value.chars().count();
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }

    // --- Lists ---

    /// Number of rows in the list the current focus moves through.
    fn list_len(&self) -> usize {
        match (self.active_focus, self.route) {
            (Focus::Sidebar, _) => route::nav_items().count(),
            (Focus::Main, Route::Projects) => self.projects.visible().len(),
            (Focus::Main, Route::Team) => self.team.visible().len(),
            (Focus::Main, Route::Settings) => SettingsRow::ALL.len(),
            _ => 0,
        }
    }

    fn focused_list(&mut self) -> &mut ListState {
        match (self.active_focus, self.route) {
            (Focus::Sidebar, _) => &mut self.nav_state,
            (Focus::Main, Route::Settings) => &mut self.settings_state,
            _ => &mut self.list_state,
        }
    }

    /// Keeps the list selection inside the filtered view.
    pub fn recalculate_view(&mut self) {
        let len = match self.route {
            Route::Projects => self.projects.visible().len(),
            Route::Team => self.team.visible().len(),
            _ => return,
        };
        let sel = self.list_state.selected().unwrap_or(0);
        if len == 0 {
            self.list_state.select(Some(0));
        } else if sel >= len {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn next(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let list = self.focused_list();
        let i = match list.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        list.select(Some(i));
    }
    pub fn previous(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let list = self.focused_list();
        let i = match list.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        list.select(Some(i));
    }
    pub fn jump_forward(&mut self, step: usize) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let list = self.focused_list();
        let current = list.selected().unwrap_or(0);
        list.select(Some((current + step).min(len - 1)));
    }
    pub fn jump_backward(&mut self, step: usize) {
        if self.list_len() == 0 {
            return;
        }
        let list = self.focused_list();
        let current = list.selected().unwrap_or(0);
        list.select(Some(current.saturating_sub(step)));
    }
    pub fn toggle_focus(&mut self) {
        self.active_focus = match self.active_focus {
            Focus::Main => Focus::Sidebar,
            Focus::Sidebar => Focus::Main,
        }
    }

    pub fn selected_settings_row(&self) -> SettingsRow {
        let i = self.settings_state.selected().unwrap_or(0);
        SettingsRow::ALL[i.min(SettingsRow::ALL.len() - 1)]
    }

    // --- Actions ---

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(route) => {
                self.active_focus = Focus::Main;
                self.navigate(route.path());
            }
            Action::ToggleFocus => self.toggle_focus(),
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::JumpForward(step) => self.jump_forward(step),
            Action::JumpBackward(step) => self.jump_backward(step),
            Action::Activate => self.activate(),
            Action::StartSearch => {
                self.mode = InputMode::Searching;
                let current = match self.route {
                    Route::Team => self.team.search().to_string(),
                    _ => self.projects.search().to_string(),
                };
                self.set_input(&current);
            }
            Action::ClearSearch => {
                self.set_search("");
                self.reset_input();
            }
            Action::CycleStatusFilter => {
                self.projects.cycle_status_filter();
                self.recalculate_view();
            }
            Action::NextMonth => {
                self.calendar.next_month();
                self.refresh_calendar();
            }
            Action::PreviousMonth => {
                self.calendar.previous_month();
                self.refresh_calendar();
            }
            Action::MoveSelection(days) => {
                self.calendar.move_selection(days);
                self.refresh_calendar();
            }
            Action::Today => {
                self.calendar.go_to_today();
                self.refresh_calendar();
            }
            Action::ClearSelection => self.calendar.clear_selection(),
            Action::Create => {
                self.message = self.strings().read_only.to_string();
            }
            Action::SignOut => {
                self.session.sign_out();
                self.navigate("/");
            }
            Action::InputChar(c) => {
                self.enter_char(c);
                self.on_input_changed();
            }
            Action::InputBackspace => {
                self.delete_char();
                self.on_input_changed();
            }
            Action::CursorLeft => self.move_cursor_left(),
            Action::CursorRight => self.move_cursor_right(),
            Action::SubmitInput => self.submit_input(),
            Action::CancelInput => self.cancel_input(),
        }
    }

    fn activate(&mut self) {
        if self.active_focus == Focus::Sidebar {
            let i = self.nav_state.selected().unwrap_or(0);
            if let Some(route) = route::nav_items().nth(i) {
                self.active_focus = Focus::Main;
                self.navigate(route.path());
            }
            return;
        }
        if self.route == Route::Settings {
            match self.selected_settings_row() {
                SettingsRow::DisplayName => {
                    self.mode = InputMode::EditingName;
                    let draft = self.settings.display_name_draft().to_string();
                    self.set_input(&draft);
                }
                row => {
                    self.settings.toggle(row);
                    self.message = self.strings().not_persisted.to_string();
                }
            }
        }
    }

    fn set_search(&mut self, query: &str) {
        match self.route {
            Route::Projects => self.projects.set_search(query),
            Route::Team => self.team.set_search(query),
            _ => {}
        }
        self.recalculate_view();
    }

    // Searching filters as the user types.
    fn on_input_changed(&mut self) {
        if self.mode == InputMode::Searching {
            let query = self.input_buffer.clone();
            self.set_search(&query);
        }
    }

    fn submit_input(&mut self) {
        match self.mode {
            InputMode::Searching => {
                self.mode = InputMode::Normal;
            }
            InputMode::EditingName => {
                let draft = self.input_buffer.clone();
                self.settings.set_display_name_draft(&draft);
                if let Some(identity) = self.session.identity_mut() {
                    self.settings.apply_profile(identity);
                }
                self.mode = InputMode::Normal;
                self.reset_input();
                self.message = self.strings().not_persisted.to_string();
            }
            InputMode::SigningIn => {
                let email = self.input_buffer.clone();
                if self.session.sign_in(&email) {
                    self.reset_input();
                    let target = self.pending_path.take().unwrap_or_else(|| "/".to_string());
                    self.navigate(&target);
                } else {
                    self.message = self.strings().auth_prompt.to_string();
                }
            }
            InputMode::Normal => {}
        }
    }

    fn cancel_input(&mut self) {
        match self.mode {
            InputMode::Searching => {
                self.set_search("");
                self.mode = InputMode::Normal;
            }
            InputMode::EditingName => self.mode = InputMode::Normal,
            InputMode::SigningIn | InputMode::Normal => {}
        }
        self.reset_input();
    }
}
