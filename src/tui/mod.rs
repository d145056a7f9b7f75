// File: ./src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::provider::DataProvider;
use action::Action;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::AppState;
use std::{io, time::Duration};

pub fn run(config: &Config, provider: Box<dyn DataProvider>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::with_today(config, provider);
    let result = event_loop(&mut terminal, &mut app_state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    log::info!("event=app_exit");

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, app_state))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = Action::from_key(key, app_state) {
                        app_state.apply(action);
                    }
                }
                _ => {}
            }
        }

        if app_state.should_quit {
            return Ok(());
        }
    }
}
