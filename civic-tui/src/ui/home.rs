//! Home dashboard

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::AppState;
use libciviclink::localization::translate;

pub fn render_home(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    // Greeting
    let name = state
        .profile
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("");
    let greeting = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{}, ", translate("welcome_back", language)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(name.to_string(), Style::default().fg(theme.accent)),
        ]),
        Line::from(Span::styled(
            translate("ready_to_help", language).to_string(),
            Style::default().fg(theme.muted),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(greeting, chunks[0]);

    // Stat tiles
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    let (points, reported, solved, rating) = match state.profile {
        Some(ref p) => (
            p.reward_points.to_string(),
            p.problems_reported.to_string(),
            p.problems_solved.to_string(),
            format!("{:.1}", p.rating),
        ),
        None => ("-".into(), "-".into(), "-".into(), "-".into()),
    };

    stat_tile(frame, tiles[0], theme, translate("reward_points", language), &points);
    stat_tile(frame, tiles[1], theme, translate("reported", language), &reported);
    stat_tile(frame, tiles[2], theme, translate("solved", language), &solved);
    stat_tile(frame, tiles[3], theme, translate("rating", language), &rating);

    // Primary actions
    let actions = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(theme.ok)),
            Span::raw(translate("report_problem", language).to_string()),
        ]),
        Line::from(vec![
            Span::styled("[h] ", Style::default().fg(theme.ok)),
            Span::raw(translate("view_reports", language).to_string()),
        ]),
        Line::from(vec![
            Span::styled("[m] ", Style::default().fg(theme.ok)),
            Span::raw(translate("map", language).to_string()),
        ]),
        Line::from(vec![
            Span::styled("[c] ", Style::default().fg(theme.ok)),
            Span::raw(translate("help_faq", language).to_string()),
        ]),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", translate("home", language)))
            .borders(Borders::ALL),
    )
    .alignment(Alignment::Left);
    frame.render_widget(actions, chunks[2]);
}

fn stat_tile(frame: &mut Frame, area: Rect, theme: Theme, label: &str, value: &str) {
    let tile = Paragraph::new(vec![Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ))])
    .block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL),
    )
    .alignment(Alignment::Center);
    frame.render_widget(tile, area);
}
