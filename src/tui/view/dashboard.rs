use super::{Palette, header, progress_bar};
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let lang = state.language();
    let summary = state.dashboard.summary();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(header(s.nav_dashboard, s.dashboard_subtitle, palette)),
        rows[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(rows[1]);
    let stats = [
        (s.stat_total_projects, summary.total_projects.to_string(), ""),
        (s.stat_active_members, summary.active_members.to_string(), ""),
        (s.stat_completed, summary.completed_projects.to_string(), ""),
        (
            s.stat_progress,
            format!("{}%", summary.average_progress),
            s.stat_progress_hint,
        ),
    ];
    for (i, (title, value, hint)) in stats.into_iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(hint, Style::default().fg(palette.muted))),
        ])
        .block(palette.block(format!(" {} ", title), false));
        f.render_widget(card, cards[i]);
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let mut project_lines = Vec::new();
    for project in state.dashboard.in_flight() {
        project_lines.push(Line::from(vec![
            Span::styled(
                project.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status.label(lang)),
                Style::default().fg(palette.muted),
            ),
        ]));
        project_lines.push(Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(palette.muted),
        )));
        project_lines.push(Line::from(format!(
            "{} {:>3}%",
            progress_bar(project.progress, 20),
            project.progress
        )));
        project_lines.push(Line::from(format!(
            "{}: {}",
            s.due_prefix,
            lang.long_date(project.due_date)
        )));
        project_lines.push(Line::from(""));
    }
    let in_flight = Paragraph::new(project_lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", s.in_progress_title)),
        );
    f.render_widget(in_flight, lower[0]);

    let mut activity_lines = Vec::new();
    for entry in state.dashboard.activity() {
        activity_lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(palette.accent)),
            Span::raw(entry.sentence(lang)),
        ]));
        activity_lines.push(Line::from(Span::styled(
            format!("  {}", entry.when(lang)),
            Style::default().fg(palette.muted),
        )));
    }
    let activity = Paragraph::new(activity_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", s.recent_activity_title)),
        );
    f.render_widget(activity, lower[1]);
}
