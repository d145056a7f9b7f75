use super::{Palette, header};
use crate::model::MemberStatus;
use crate::tui::state::{AppState, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let lang = state.language();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut head = header(s.nav_team, s.team_subtitle, palette);
    if !state.team.search().is_empty() {
        head.push(Line::from(Span::styled(
            format!("/ {}", state.team.search()),
            Style::default().fg(palette.accent),
        )));
    }
    f.render_widget(Paragraph::new(head), rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let visible = state.team.visible();
    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Span::styled(
            s.no_matching_members,
            Style::default().fg(palette.muted),
        ))]
    } else {
        visible
            .iter()
            .map(|m| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("({}) ", m.avatar_initial()),
                        Style::default().fg(palette.accent),
                    ),
                    Span::raw(m.name.clone()),
                    Span::styled(format!("  {}", m.role), Style::default().fg(palette.muted)),
                ]))
            })
            .collect()
    };

    let detail = state
        .list_state
        .selected()
        .and_then(|i| visible.get(i))
        .map(|m| {
            let status_color = match m.status {
                MemberStatus::Active => Color::Green,
                MemberStatus::OnLeave => Color::Yellow,
                MemberStatus::Inactive => Color::Gray,
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    m.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(m.role.clone()),
                Line::from(Span::styled(
                    m.status.label(lang),
                    Style::default().fg(status_color),
                )),
                Line::from(""),
                Line::from(format!("{}: {}", s.email, m.email)),
            ];
            if !m.department.is_empty() {
                lines.push(Line::from(m.department.clone()));
            }
            lines.push(Line::from(lang.long_date(m.join_date)));
            lines
        })
        .unwrap_or_default();

    let list = List::new(items)
        .block(palette.block(
            format!(" {} ({}) ", s.nav_team, visible.len()),
            state.active_focus == Focus::Main,
        ))
        .highlight_style(palette.highlight)
        .highlight_symbol("> ");
    f.render_stateful_widget(list, cols[0], &mut state.list_state);

    let pane = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(palette.block("", false));
    f.render_widget(pane, cols[1]);
}
