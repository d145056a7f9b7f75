// File: ./src/tui/view/mod.rs
// Frame layout: sidebar, page body and footer
mod auth;
mod calendar;
mod dashboard;
mod projects;
mod settings;
mod team;

use crate::page::Theme;
use crate::route::{self, Route};
use crate::tui::state::{AppState, Focus, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

const SIDEBAR_WIDTH: u16 = 24;

/// Colours derived from the selected theme.
#[derive(Clone, Copy)]
pub(crate) struct Palette {
    pub base: Style,
    pub accent: Color,
    pub muted: Color,
    pub highlight: Style,
}

impl Palette {
    pub(crate) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Color::Blue,
                muted: Color::Gray,
                highlight: Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::LightBlue),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Color::Cyan,
                muted: Color::DarkGray,
                highlight: Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            },
            Theme::System => Self {
                base: Style::default(),
                accent: Color::Yellow,
                muted: Color::DarkGray,
                highlight: Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray),
            },
        }
    }

    pub(crate) fn block<'a>(&self, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
        let border = if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border)
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let palette = Palette::for_theme(state.settings.theme);
    f.render_widget(Block::default().style(palette.base), f.area());

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    if state.route == Route::Auth {
        auth::draw_auth(f, state, v_chunks[0], &palette);
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(v_chunks[0]);

        draw_sidebar(f, state, h_chunks[0], &palette);

        let body = h_chunks[1];
        match state.route {
            Route::Dashboard => dashboard::draw(f, state, body, &palette),
            Route::Projects => projects::draw(f, state, body, &palette),
            Route::Team => team::draw(f, state, body, &palette),
            Route::Calendar => calendar::draw(f, state, body, &palette),
            Route::Settings => settings::draw(f, state, body, &palette),
            Route::NotFound | Route::Auth => auth::draw_not_found(f, state, body, &palette),
        }
    }

    draw_footer(f, state, v_chunks[1], &palette);
}

/// Page title and subtitle lines shared by every page header.
pub(crate) fn header<'a>(title: &'a str, subtitle: &'a str, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(palette.muted))),
    ]
}

fn draw_sidebar(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            "[P] ProjectON",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(s.app_subtitle, Style::default().fg(palette.muted))),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(brand, chunks[0]);

    let items: Vec<ListItem> = route::nav_items()
        .map(|r| {
            let active = route::is_active(r, &state.path);
            let marker = if active { "● " } else { "  " };
            let style = if active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{}", marker, r.title(s))).style(style)
        })
        .collect();
    let nav = List::new(items)
        .block(palette.block(format!(" {} ", s.nav_main), state.active_focus == Focus::Sidebar))
        .highlight_style(palette.highlight);
    f.render_stateful_widget(nav, chunks[1], &mut state.nav_state);

    let email = state
        .identity()
        .map(|i| i.email.clone())
        .unwrap_or_default();
    let account = Paragraph::new(vec![
        Line::from(Span::styled(email, Style::default().fg(palette.muted))),
        Line::from(format!("o: {}", s.sign_out)),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(account, chunks[2]);
}

fn draw_footer(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    match state.mode {
        InputMode::Searching | InputMode::EditingName | InputMode::SigningIn => {
            let (title, prefix, color) = match state.mode {
                InputMode::Searching => {
                    let title = if state.route == Route::Team {
                        s.member_search
                    } else {
                        s.project_search
                    };
                    (title, "/ ", Color::Green)
                }
                InputMode::EditingName => (s.display_name, "> ", Color::Magenta),
                _ => (s.auth_prompt, "@ ", palette.accent),
            };
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", title)),
                );
            f.render_widget(input, area);
            let cursor_x = area.x
                + 1
                + prefix.chars().count() as u16
                + display_width(&state.input_buffer, state.cursor_position);
            let cursor_y = area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let status_color = if state.message.starts_with("Error") {
                Color::Red
            } else {
                Color::Cyan
            };
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(status_color))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help_text = "1-5:Page | Tab:Menu | a:New | o:Sign out | q:Quit";
            let help = Paragraph::new(help_text)
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}

/// Terminal columns taken by the first `chars` characters of `text`.
fn display_width(text: &str, chars: usize) -> u16 {
    text.chars()
        .take(chars)
        .map(|c| c.width().unwrap_or(0))
        .sum::<usize>() as u16
}

/// Text progress bar, `width` cells wide.
pub(crate) fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
