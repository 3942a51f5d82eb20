//! Report wizard screens
//!
//! One renderer per wizard phase, plus the shared step indicator. The
//! description editor is a stateful tui-textarea owned by the event loop.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use super::Theme;
use crate::app::state::LocationField;
use crate::app::AppState;
use libciviclink::localization::translate;
use libciviclink::types::{Category, MAX_PHOTOS};
use libciviclink::validation::{MAX_DESCRIPTION_LEN, MIN_DESCRIPTION_LEN};
use libciviclink::WizardState;

pub fn render_wizard(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: Theme,
    description_editor: &TextArea,
) {
    let language = state.ui.language;

    let outer = Block::default()
        .title(format!(" {} ", translate("report_problem", language)))
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    render_step_indicator(frame, chunks[0], state, theme);

    match state.form.draft.state() {
        WizardState::Location => render_location_step(frame, chunks[1], state, theme),
        WizardState::Category => render_category_step(frame, chunks[1], state, theme),
        WizardState::Description => {
            render_description_step(frame, chunks[1], state, theme, description_editor)
        }
        WizardState::Photos => render_photos_step(frame, chunks[1], state, theme),
        WizardState::Submitting => render_submitting(frame, chunks[1], state, theme),
        WizardState::Success => render_success(frame, chunks[1], state, theme),
    }
}

/// Status bar hints for the active wizard phase
pub fn step_hints(state: &AppState) -> String {
    match state.form.draft.state() {
        WizardState::Location => "Tab: switch field | Enter: next | Esc: exit".to_string(),
        WizardState::Category => {
            "Left/Right: category | Up/Down: highlight | Space: select | Enter: next | Esc: back"
                .to_string()
        }
        WizardState::Description => "Ctrl+N: next | Esc: back".to_string(),
        WizardState::Photos => {
            "Type a path + Enter: add photo | Ctrl+D: remove | Enter (empty): submit | Esc: back"
                .to_string()
        }
        WizardState::Submitting => "Submitting...".to_string(),
        WizardState::Success => "Enter: home".to_string(),
    }
}

fn render_step_indicator(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let current = state.form.draft.step_number();
    let mut spans = Vec::new();
    for step in 1..=4u8 {
        let style = if step == current {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else if step < current {
            Style::default().fg(theme.ok)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" ({}) ", step), style));
        if step < 4 {
            spans.push(Span::styled("--", Style::default().fg(theme.muted)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_location_step(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    text_field(
        frame,
        rows[0],
        theme,
        translate("location", language),
        &state.form.draft.location,
        state.form.location_focus == LocationField::Location,
        // Location is optional before leaving the step
        true,
    );

    text_field(
        frame,
        rows[1],
        theme,
        translate("landmark", language),
        &state.form.draft.landmark,
        state.form.location_focus == LocationField::Landmark,
        !state.form.draft.landmark.trim().is_empty(),
    );

    next_hint(frame, rows[2], state, theme);
}

fn render_category_step(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Category column
    let mut category_lines = Vec::new();
    for category in Category::all() {
        let selected = state.form.draft.category == Some(*category);
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        category_lines.push(Line::from(Span::styled(
            format!("{}{}", marker, translate(category.localization_key(), language)),
            style,
        )));
    }
    let categories = Paragraph::new(category_lines).block(
        Block::default()
            .title(format!(" {} ", translate("select_category", language)))
            .borders(Borders::ALL),
    );
    frame.render_widget(categories, columns[0]);

    // Subcategory column for the selected category
    let mut subcategory_lines = Vec::new();
    if let Some(category) = state.form.draft.category {
        for (index, subcategory) in category.subcategories().iter().enumerate() {
            let chosen = state.form.draft.subcategory == Some(*subcategory);
            let highlighted = index == state.form.subcategory_cursor;
            let marker = if chosen { "[x] " } else { "[ ] " };
            let style = if highlighted {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else if chosen {
                Style::default().fg(theme.ok)
            } else {
                Style::default().fg(theme.fg)
            };
            subcategory_lines.push(Line::from(Span::styled(
                format!("{}{}", marker, subcategory),
                style,
            )));
        }
    } else {
        subcategory_lines.push(Line::from(Span::styled(
            "Pick a category first",
            Style::default().fg(theme.muted),
        )));
    }
    let subcategories = Paragraph::new(subcategory_lines)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(subcategories, columns[1]);
}

fn render_description_step(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: Theme,
    description_editor: &TextArea,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    frame.render_widget(description_editor, rows[0]);

    let count = state.form.draft.description.chars().count();
    let counter_style = if count < MIN_DESCRIPTION_LEN {
        Style::default().fg(theme.err)
    } else {
        Style::default().fg(theme.ok)
    };
    let counter = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}/{}", count, MAX_DESCRIPTION_LEN), counter_style),
        Span::styled(
            format!("  (minimum {})", MIN_DESCRIPTION_LEN),
            Style::default().fg(theme.muted),
        ),
    ]));
    frame.render_widget(counter, rows[1]);
}

fn render_photos_step(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2 + MAX_PHOTOS as u16),
            Constraint::Min(1),
        ])
        .split(area);

    text_field(
        frame,
        rows[0],
        theme,
        translate("add_photos", language),
        &state.form.photo_input,
        true,
        true,
    );

    let mut slot_lines = Vec::new();
    for (index, photo) in state.form.draft.photos.iter().enumerate() {
        slot_lines.push(Line::from(vec![
            Span::styled(format!("{}. ", index + 1), Style::default().fg(theme.accent)),
            Span::raw(photo.path.clone()),
            Span::styled(
                format!("  ({})", photo.mime_type),
                Style::default().fg(theme.muted),
            ),
        ]));
    }
    for _ in state.form.draft.photos.len()..MAX_PHOTOS {
        slot_lines.push(Line::from(Span::styled(
            "-- empty slot --",
            Style::default().fg(theme.muted),
        )));
    }
    let slots = Paragraph::new(slot_lines).block(
        Block::default()
            .title(format!(
                " {}/{} ",
                state.form.draft.photos.len(),
                MAX_PHOTOS
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(slots, rows[1]);

    let footer = if let Some(ref error) = state.form.submit_error {
        Paragraph::new(Line::from(Span::styled(
            format!("{} - Enter to retry", error),
            Style::default().fg(theme.err),
        )))
        .wrap(Wrap { trim: false })
    } else {
        Paragraph::new(Line::from(Span::styled(
            translate("submit_report", language).to_string(),
            Style::default().fg(theme.ok).add_modifier(Modifier::BOLD),
        )))
    };
    frame.render_widget(footer, rows[2]);
}

fn render_submitting(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let mut lines = vec![
        Line::from(Span::styled(
            translate("submitting", language).to_string(),
            Style::default().fg(theme.warn).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for message in &state.form.progress {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.muted),
        )));
    }

    let progress = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(progress, area);
}

fn render_success(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            translate("report_submitted", language).to_string(),
            Style::default().fg(theme.ok).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(ref report_id) = state.form.submitted_report_id {
        lines.push(Line::from(Span::styled(
            format!("ID: {}", report_id),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Returning home shortly...",
        Style::default().fg(theme.muted),
    )));

    let success = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(success, area);
}

/// One labeled input row with a validity border
fn text_field(
    frame: &mut Frame,
    area: Rect,
    theme: Theme,
    label: &str,
    value: &str,
    focused: bool,
    valid: bool,
) {
    let border_color = if focused {
        theme.accent
    } else if valid {
        theme.ok
    } else {
        theme.err
    };

    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.muted)));
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(field, area);
}

fn next_hint(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;
    let enabled = state.form.draft.can_advance();
    let style = if enabled {
        Style::default().fg(theme.ok).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        format!("{} >", translate("next", language)),
        style,
    )));
    frame.render_widget(hint, area);
}
