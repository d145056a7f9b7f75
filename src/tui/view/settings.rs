use super::{Palette, header};
use crate::page::settings::SettingsRow;
use crate::tui::state::{AppState, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

fn toggle(on: bool) -> Span<'static> {
    if on {
        Span::styled("[x]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ]", Style::default().fg(Color::DarkGray))
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState, area: Rect, palette: &Palette) {
    let s = state.strings();
    let settings = &state.settings;
    let n = settings.notifications;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(header(s.nav_settings, s.settings_subtitle, palette)),
        rows[0],
    );

    let email = state
        .identity()
        .map(|i| i.email.clone())
        .unwrap_or_default();
    let profile = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{}: ", s.email), Style::default().fg(palette.muted)),
            Span::raw(email),
        ]),
        Line::from(Span::styled(s.email_locked, Style::default().fg(palette.muted))),
    ])
    .block(palette.block(format!(" {} ", s.profile_title), false));
    f.render_widget(profile, rows[1]);

    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .map(|row| {
            let (label, value) = match row {
                SettingsRow::DisplayName => (
                    s.display_name,
                    Span::raw(settings.display_name_draft().to_string()),
                ),
                SettingsRow::NotifyEmail => (s.notify_email, toggle(n.email)),
                SettingsRow::NotifyPush => (s.notify_push, toggle(n.push)),
                SettingsRow::NotifyProjectUpdates => {
                    (s.notify_project_updates, toggle(n.project_updates))
                }
                SettingsRow::NotifyTaskAssignments => {
                    (s.notify_task_assignments, toggle(n.task_assignments))
                }
                SettingsRow::NotifyReminders => (s.notify_reminders, toggle(n.reminders)),
                SettingsRow::Theme => (
                    s.theme,
                    Span::styled(
                        settings.theme.label(s),
                        Style::default().fg(palette.accent),
                    ),
                ),
                SettingsRow::Language => (
                    s.language,
                    Span::styled(
                        settings.language.name(),
                        Style::default().fg(palette.accent),
                    ),
                ),
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", label)),
                value,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(palette.block(
            format!(" {} / {} ", s.notifications_title, s.appearance_title),
            state.active_focus == Focus::Main,
        ))
        .highlight_style(palette.highlight)
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[2], &mut state.settings_state);

    f.render_widget(
        Paragraph::new(Span::styled(s.not_persisted, Style::default().fg(palette.muted))),
        rows[3],
    );
}
