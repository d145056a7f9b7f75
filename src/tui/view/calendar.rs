use super::{Palette, header};
use crate::i18n::Language;
use crate::model::{Event, EventCategory};
use crate::tui::state::AppState;
use chrono::{Datelike, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};

/// Titles drawn inside a day cell before collapsing into "+N more".
const PREVIEW_TITLES: usize = 2;

fn category_color(category: EventCategory) -> Color {
    match category {
        EventCategory::Meeting => Color::Blue,
        EventCategory::Review => Color::Magenta,
        EventCategory::Deadline => Color::Red,
    }
}

fn event_line(event: &Event, lang: Language, with_date: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("[{}] ", event.category.label(lang)),
        Style::default().fg(category_color(event.category)),
    )];
    if with_date {
        spans.push(Span::raw(format!("{}  ", lang.short_date(event.date))));
    }
    spans.push(Span::raw(event.title.clone()));
    Line::from(spans)
}

pub fn draw(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let lang = state.language();
    let page = &state.calendar;
    let reference = page.reference();
    let selected = page.selected();
    let today = Local::now().date_naive();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    f.render_widget(
        Paragraph::new(header(s.nav_calendar, s.calendar_subtitle, palette)),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    // --- Month grid ---
    let weeks = page.weeks();
    let inner_height = cols[0].height.saturating_sub(3);
    let row_height = (inner_height / weeks.len().max(1) as u16).clamp(2, 2 + PREVIEW_TITLES as u16);

    let grid_rows: Vec<Row> = weeks
        .iter()
        .map(|week| {
            let cells: Vec<Cell> = week
                .iter()
                .map(|cell| {
                    let mut day_style = Style::default();
                    if !cell.in_current_month {
                        day_style = day_style.fg(palette.muted);
                    }
                    if cell.date == today {
                        day_style = day_style.fg(palette.accent).add_modifier(Modifier::BOLD);
                    }
                    let mut lines = vec![Line::from(Span::styled(
                        cell.date.day().to_string(),
                        day_style,
                    ))];
                    let (shown, hidden) = cell.preview(PREVIEW_TITLES);
                    for (title, event) in shown.into_iter().zip(cell.events.iter()) {
                        lines.push(Line::from(Span::styled(
                            title.to_string(),
                            Style::default().fg(category_color(event.category)),
                        )));
                    }
                    if hidden > 0 {
                        lines.push(Line::from(Span::styled(
                            format!("+{} {}", hidden, s.more_suffix),
                            Style::default().fg(palette.muted),
                        )));
                    }
                    let mut out = Cell::from(Text::from(lines));
                    if Some(cell.date) == selected {
                        out = out.style(palette.highlight);
                    }
                    out
                })
                .collect();
            Row::new(cells).height(row_height)
        })
        .collect();

    let weekday_header = Row::new(s.weekdays.iter().enumerate().map(|(i, name)| {
        let color = match i {
            0 => Color::Red,
            6 => Color::Blue,
            _ => palette.muted,
        };
        Cell::from(Span::styled(*name, Style::default().fg(color)))
    }))
    .height(1);

    let grid = Table::new(grid_rows, [Constraint::Ratio(1, 7); 7])
        .header(weekday_header)
        .block(palette.block(format!(" {} ", lang.month_title(reference)), true));
    f.render_widget(grid, cols[0]);

    // --- Side panel ---
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(cols[1]);

    let (day_title, day_lines) = match (selected, page.selected_events()) {
        (Some(date), Some(events)) => {
            let lines = if events.is_empty() {
                vec![Line::from(Span::styled(
                    s.no_events_on_date,
                    Style::default().fg(palette.muted),
                ))]
            } else {
                events
                    .iter()
                    .flat_map(|e| {
                        let mut lines = vec![event_line(e, lang, false)];
                        if !e.description.is_empty() {
                            lines.push(Line::from(Span::styled(
                                format!("  {}", e.description),
                                Style::default().fg(palette.muted),
                            )));
                        }
                        lines
                    })
                    .collect()
            };
            (lang.long_date(date), lines)
        }
        _ => (
            s.day_events_title.to_string(),
            vec![Line::from(Span::styled(
                s.pick_a_date,
                Style::default().fg(palette.muted),
            ))],
        ),
    };
    f.render_widget(
        Paragraph::new(day_lines)
            .wrap(Wrap { trim: false })
            .block(palette.block(format!(" {} ", day_title), false)),
        side[0],
    );

    let month_lines: Vec<Line> = page
        .month_events()
        .into_iter()
        .map(|e| event_line(e, lang, true))
        .collect();
    f.render_widget(
        Paragraph::new(month_lines)
            .wrap(Wrap { trim: true })
            .block(palette.block(format!(" {} ", s.month_events_title), false)),
        side[1],
    );
}
