use super::Palette;
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rectangle of the given size centred inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(v[1])[1]
}

pub fn draw_auth(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            "[P] ProjectON",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(s.app_subtitle, Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(s.auth_prompt),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", s.auth_title)),
    );
    f.render_widget(card, centered(area, 44, 6));
}

pub fn draw_not_found(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(s.not_found),
        Line::from(Span::styled(
            state.path.clone(),
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(body, centered(area, 40, 3));
}
