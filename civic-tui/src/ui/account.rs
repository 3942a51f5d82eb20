//! Profile and settings screens

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::AppState;
use libciviclink::localization::{translate, Language};

pub fn render_profile(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let lines = match state.profile {
        Some(ref profile) => vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            labeled(theme, translate("email_address", language), &profile.email),
            labeled(
                theme,
                translate("national_id", language),
                &profile.masked_national_id(),
            ),
            labeled(theme, translate("address", language), &profile.address),
            Line::from(""),
            labeled(
                theme,
                translate("reward_points", language),
                &profile.reward_points.to_string(),
            ),
            labeled(
                theme,
                translate("reported", language),
                &profile.problems_reported.to_string(),
            ),
            labeled(
                theme,
                translate("solved", language),
                &profile.problems_solved.to_string(),
            ),
            labeled(
                theme,
                translate("rating", language),
                &format!("{:.1}", profile.rating),
            ),
        ],
        None => vec![Line::from(Span::styled(
            "Loading profile...",
            Style::default().fg(theme.muted),
        ))],
    };

    let profile = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", translate("profile_details", language)))
            .borders(Borders::ALL),
    );
    frame.render_widget(profile, area);
}

pub fn render_settings(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let dark_value = if state.ui.dark_mode { "on" } else { "off" };
    let languages: Vec<Span> = Language::all()
        .iter()
        .map(|l| {
            let style = if *l == language {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            Span::styled(format!("{}  ", l.native_name()), style)
        })
        .collect();

    let mut language_line = vec![
        Span::styled("[l] ", Style::default().fg(theme.ok)),
        Span::raw(format!("{}: ", translate("language", language))),
    ];
    language_line.extend(languages);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("[d] ", Style::default().fg(theme.ok)),
            Span::raw(format!("{}: {}", translate("dark_mode", language), dark_value)),
        ]),
        Line::from(""),
        Line::from(language_line),
        Line::from(""),
        Line::from(Span::styled(
            "Changes are saved immediately",
            Style::default().fg(theme.muted),
        )),
    ];

    let settings = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", translate("settings", language)))
            .borders(Borders::ALL),
    );
    frame.render_widget(settings, area);
}

fn labeled(theme: Theme, label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(theme.muted)),
        Span::raw(value.to_string()),
    ])
}
