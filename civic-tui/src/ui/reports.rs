//! History and area map screens

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::AppState;
use libciviclink::localization::translate;
use libciviclink::types::{ReportRecord, ReportStatus};

/// History timeline stages, in order
const STAGES: [ReportStatus; 4] = [
    ReportStatus::Submitted,
    ReportStatus::UnderReview,
    ReportStatus::WorkAssigned,
    ReportStatus::Resolved,
];

pub fn render_history(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let mut lines = Vec::new();
    if state.history.is_empty() {
        lines.push(Line::from(Span::styled(
            translate("no_reports", language).to_string(),
            Style::default().fg(theme.muted),
        )));
    }

    for report in &state.history {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} > {}", report.category, report.subcategory),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", report.landmark),
                Style::default().fg(theme.muted),
            ),
        ]));

        // Four-stage timeline with the current stage highlighted
        let current = report.status.stage_index();
        let mut timeline = Vec::new();
        for (index, stage) in STAGES.iter().enumerate() {
            let style = if index < current {
                Style::default().fg(theme.ok)
            } else if index == current {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            let marker = if index <= current { "*" } else { "o" };
            timeline.push(Span::styled(
                format!("{} {}", marker, translate(stage.localization_key(), language)),
                style,
            ));
            if index < STAGES.len() - 1 {
                timeline.push(Span::styled(" -- ", Style::default().fg(theme.muted)));
            }
        }
        lines.push(Line::from(timeline));

        if let Some(ref note) = report.official_note {
            lines.push(Line::from(Span::styled(
                format!("  note: {}", note),
                Style::default().fg(theme.warn),
            )));
        }
        lines.push(Line::from(""));
    }

    let history = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", translate("history", language)))
            .borders(Borders::ALL),
    );
    frame.render_widget(history, area);
}

pub fn render_map(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let mut lines = vec![
        Line::from(Span::styled(
            "Recent reports in your area",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
    ];

    if state.nearby.is_empty() {
        lines.push(Line::from(Span::styled(
            translate("no_reports", language).to_string(),
            Style::default().fg(theme.muted),
        )));
    }

    for report in &state.nearby {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", status_marker(report.status)),
                Style::default().fg(status_color(report.status, theme)),
            ),
            Span::styled(
                format!("{}", report.subcategory),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", report.landmark),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                coordinates(report),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("# open  ", Style::default().fg(theme.err)),
        Span::styled("~ in progress  ", Style::default().fg(theme.warn)),
        Span::styled("+ resolved", Style::default().fg(theme.ok)),
    ]));

    let map = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", translate("map", language)))
            .borders(Borders::ALL),
    );
    frame.render_widget(map, area);
}

fn status_marker(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Submitted => "#",
        ReportStatus::UnderReview | ReportStatus::WorkAssigned => "~",
        ReportStatus::Resolved => "+",
    }
}

fn status_color(status: ReportStatus, theme: Theme) -> ratatui::style::Color {
    match status {
        ReportStatus::Submitted => theme.err,
        ReportStatus::UnderReview | ReportStatus::WorkAssigned => theme.warn,
        ReportStatus::Resolved => theme.ok,
    }
}

fn coordinates(report: &ReportRecord) -> String {
    match (report.latitude, report.longitude) {
        (Some(lat), Some(lng)) => format!("  [{:.4}, {:.4}]", lat, lng),
        _ => String::new(),
    }
}
