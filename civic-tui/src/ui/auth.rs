//! Welcome, sign-in and sign-up screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::state::AuthField;
use crate::app::{AppState, Screen};
use libciviclink::localization::translate;
use libciviclink::validation;

pub fn render_welcome(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CivicLink",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(translate("ready_to_help", language).to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[i] ", Style::default().fg(theme.ok)),
            Span::raw(translate("sign_in", language).to_string()),
        ]),
        Line::from(vec![
            Span::styled("[u] ", Style::default().fg(theme.ok)),
            Span::raw(translate("create_account", language).to_string()),
        ]),
    ];

    let welcome = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(welcome, area);
}

pub fn render_auth_form(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;
    let signing_up = state.current_screen == Screen::SignUp;

    let (title, subtitle, fields) = if signing_up {
        (
            translate("create_account", language),
            translate("join_community", language),
            AuthField::sign_up_order(),
        )
    } else {
        (
            translate("sign_in", language),
            translate("sign_in_continue", language),
            AuthField::sign_in_order(),
        )
    };

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(fields.len()));
    constraints.push(Constraint::Min(1));

    let outer = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = if state.auth.busy {
        let key = if signing_up { "creating_account" } else { "signing_in" };
        Paragraph::new(translate(key, language).to_string())
            .style(Style::default().fg(theme.warn))
    } else {
        Paragraph::new(subtitle.to_string()).style(Style::default().fg(theme.muted))
    };
    frame.render_widget(header, rows[0]);

    for (index, field) in fields.iter().enumerate() {
        render_field(frame, rows[index + 1], state, theme, *field);
    }
}

/// One labeled input row with a validity border and inline error text
fn render_field(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme, field: AuthField) {
    let language = state.ui.language;
    let value = state.auth.field(field);
    let focused = state.auth.focus == field;

    let (label_key, error) = match field {
        AuthField::Identifier => ("email_or_national_id", None),
        AuthField::Name => ("full_name", validation::name_error(value)),
        AuthField::Email => ("email_address", validation::email_error(value)),
        AuthField::NationalId => ("national_id", validation::national_id_error(value)),
        AuthField::Address => ("address", validation::address_error(value)),
        AuthField::Password => ("password", validation::password_error(value)),
    };

    // On the sign-in form only emptiness matters; validation errors are
    // the store's to report
    let show_error = state.current_screen == Screen::SignUp && !value.is_empty();

    let border_color = if focused {
        theme.accent
    } else if value.is_empty() {
        theme.muted
    } else if show_error && error.is_some() {
        theme.err
    } else {
        theme.ok
    };

    let shown: String = if field == AuthField::Password {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::raw(shown)];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.muted)));
    }
    if show_error {
        if let Some(key) = error {
            spans.push(Span::styled(
                format!("  {}", translate(key, language)),
                Style::default().fg(theme.err),
            ));
        }
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", translate(label_key, language)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);
}
