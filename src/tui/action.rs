use crate::route::Route;
use crate::tui::state::{AppState, Focus, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    ToggleFocus,
    Next,
    Previous,
    JumpForward(usize),
    JumpBackward(usize),
    Activate,
    StartSearch,
    ClearSearch,
    CycleStatusFilter,
    NextMonth,
    PreviousMonth,
    MoveSelection(i64),
    Today,
    ClearSelection,
    Create,
    SignOut,
    InputChar(char),
    InputBackspace,
    CursorLeft,
    CursorRight,
    SubmitInput,
    CancelInput,
    Quit,
}

impl Action {
    /// Maps a key press to an action for the current page and mode.
    pub fn from_key(key: KeyEvent, state: &AppState) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Self::Quit);
        }

        if state.mode != InputMode::Normal {
            return match key.code {
                KeyCode::Enter => Some(Self::SubmitInput),
                KeyCode::Esc => Some(Self::CancelInput),
                KeyCode::Backspace => Some(Self::InputBackspace),
                KeyCode::Left => Some(Self::CursorLeft),
                KeyCode::Right => Some(Self::CursorRight),
                KeyCode::Char(c) => Some(Self::InputChar(c)),
                _ => None,
            };
        }

        let global = match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Tab => Some(Self::ToggleFocus),
            KeyCode::Char('1') => Some(Self::Navigate(Route::Dashboard)),
            KeyCode::Char('2') => Some(Self::Navigate(Route::Projects)),
            KeyCode::Char('3') => Some(Self::Navigate(Route::Team)),
            KeyCode::Char('4') => Some(Self::Navigate(Route::Calendar)),
            KeyCode::Char('5') => Some(Self::Navigate(Route::Settings)),
            KeyCode::Char('o') => Some(Self::SignOut),
            KeyCode::Char('a') => Some(Self::Create),
            _ => None,
        };
        if global.is_some() {
            return global;
        }

        if state.active_focus == Focus::Sidebar {
            return match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(Self::Next),
                KeyCode::Up | KeyCode::Char('k') => Some(Self::Previous),
                KeyCode::Enter | KeyCode::Right => Some(Self::Activate),
                _ => None,
            };
        }

        match state.route {
            Route::Calendar => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Some(Self::MoveSelection(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Self::MoveSelection(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(Self::MoveSelection(-7)),
                KeyCode::Down | KeyCode::Char('j') => Some(Self::MoveSelection(7)),
                KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => {
                    Some(Self::NextMonth)
                }
                KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => {
                    Some(Self::PreviousMonth)
                }
                KeyCode::Char('t') => Some(Self::Today),
                KeyCode::Esc => Some(Self::ClearSelection),
                _ => None,
            },
            Route::Projects | Route::Team => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(Self::Next),
                KeyCode::Up | KeyCode::Char('k') => Some(Self::Previous),
                KeyCode::PageDown => Some(Self::JumpForward(10)),
                KeyCode::PageUp => Some(Self::JumpBackward(10)),
                KeyCode::Char('/') => Some(Self::StartSearch),
                KeyCode::Char('f') if state.route == Route::Projects => {
                    Some(Self::CycleStatusFilter)
                }
                KeyCode::Esc => Some(Self::ClearSearch),
                _ => None,
            },
            Route::Settings => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(Self::Next),
                KeyCode::Up | KeyCode::Char('k') => Some(Self::Previous),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Activate),
                _ => None,
            },
            _ => None,
        }
    }
}
