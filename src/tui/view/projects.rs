use super::{Palette, header, progress_bar};
use crate::filter::StatusFilter;
use crate::model::Priority;
use crate::tui::state::{AppState, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let lang = state.language();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filter_label = match state.projects.status_filter() {
        StatusFilter::All => s.filter_all,
        StatusFilter::Only(status) => status.label(lang),
    };
    let mut head = header(s.nav_projects, s.projects_subtitle, palette);
    let search = state.projects.search();
    head.push(Line::from(vec![
        Span::styled("f ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("[{}]", filter_label),
            Style::default().fg(palette.accent),
        ),
        Span::raw(if search.is_empty() {
            String::new()
        } else {
            format!("  / {}", search)
        }),
    ]));
    f.render_widget(Paragraph::new(head), rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let visible = state.projects.visible();
    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Span::styled(
            s.no_matching_projects,
            Style::default().fg(palette.muted),
        ))]
    } else {
        visible
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(priority_color(p.priority))),
                    Span::raw(p.name.clone()),
                    Span::styled(
                        format!("  {}%", p.progress),
                        Style::default().fg(palette.muted),
                    ),
                ]))
            })
            .collect()
    };

    let detail = state
        .list_state
        .selected()
        .and_then(|i| visible.get(i))
        .map(|p| {
            vec![
                Line::from(Span::styled(
                    p.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    p.status.label(lang),
                    Style::default().fg(palette.accent),
                )),
                Line::from(""),
                Line::from(p.description.clone()),
                Line::from(""),
                Line::from(format!(
                    "{}: {} {}%",
                    s.progress,
                    progress_bar(p.progress, 20),
                    p.progress
                )),
                Line::from(format!("{}: {}", s.due_prefix, lang.long_date(p.due_date))),
                Line::from(format!("{}{}", p.team_size, s.people_suffix)),
                Line::from(Span::styled(
                    format!("{} {}", p.priority.label(lang), s.priority_suffix),
                    Style::default().fg(priority_color(p.priority)),
                )),
            ]
        })
        .unwrap_or_default();

    let list = List::new(items)
        .block(palette.block(
            format!(" {} ({}) ", s.nav_projects, visible.len()),
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
