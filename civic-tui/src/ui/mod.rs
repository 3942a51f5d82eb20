//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects and never mutate state.

pub mod account;
pub mod auth;
pub mod home;
pub mod reports;
pub mod wizard;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, ChatMessage, Screen};
use libciviclink::localization::translate;

/// Color palette derived from the dark mode setting
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub ok: Color,
    pub warn: Color,
    pub err: Color,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                ok: Color::Green,
                warn: Color::Yellow,
                err: Color::Red,
            }
        } else {
            Self {
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                ok: Color::Green,
                warn: Color::Magenta,
                err: Color::Red,
            }
        }
    }
}

/// Render the application UI
///
/// The description editor is a stateful widget owned by the event loop
/// and is passed in for the wizard's description step.
pub fn render(frame: &mut Frame, state: &AppState, description_editor: &TextArea) {
    let theme = Theme::new(state.ui.dark_mode);
    let area = frame.area();

    // Body + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    match state.current_screen {
        Screen::Welcome => auth::render_welcome(frame, chunks[0], state, theme),
        Screen::SignIn | Screen::SignUp => auth::render_auth_form(frame, chunks[0], state, theme),
        Screen::Home => home::render_home(frame, chunks[0], state, theme),
        Screen::Report => wizard::render_wizard(frame, chunks[0], state, theme, description_editor),
        Screen::History => reports::render_history(frame, chunks[0], state, theme),
        Screen::Map => reports::render_map(frame, chunks[0], state, theme),
        Screen::Settings => account::render_settings(frame, chunks[0], state, theme),
        Screen::Profile => account::render_profile(frame, chunks[0], state, theme),
    }

    render_status_bar(frame, chunks[1], state, theme);

    if state.chat.open {
        render_chat_overlay(frame, area, state, theme);
    }

    if state.help_visible {
        render_help_overlay(frame, area, theme);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, theme);
    }
}

/// Render the status bar with the current message or contextual hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;

    let line = if let Some(ref message) = state.status.message {
        Line::from(Span::styled(message.clone(), Style::default().fg(theme.warn)))
    } else {
        let hints = match state.current_screen {
            Screen::Welcome => "i: sign in | u: sign up | q: quit".to_string(),
            Screen::SignIn | Screen::SignUp => {
                "Tab: next field | Enter: submit | Esc: back".to_string()
            }
            Screen::Home => {
                "r: report | h: history | m: map | s: settings | p: profile | c: chat | o: sign out"
                    .to_string()
            }
            Screen::Report => wizard::step_hints(state),
            Screen::History | Screen::Map | Screen::Profile => "Esc: home | q: quit".to_string(),
            Screen::Settings => "d: dark mode | l: language | Esc: home".to_string(),
        };
        Line::from(vec![
            Span::styled(hints, Style::default().fg(theme.muted)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", language.native_name()),
                Style::default().fg(theme.accent),
            ),
        ])
    };

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Render the chat assistant overlay
fn render_chat_overlay(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let language = state.ui.language;
    let popup_area = centered_rect(70, 70, area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &state.chat.messages {
        match message {
            ChatMessage::User(text) => {
                lines.push(Line::from(vec![
                    Span::styled("You: ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
                    Span::raw(text.clone()),
                ]));
            }
            ChatMessage::Assistant(key) => {
                lines.push(Line::from(vec![
                    Span::styled("Assistant: ", Style::default().fg(theme.ok).add_modifier(Modifier::BOLD)),
                    Span::raw(translate(key, language).to_string()),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    if state.chat.awaiting_reply {
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            Style::default().fg(theme.muted),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::raw(state.chat.input.clone()),
            Span::styled("_", Style::default().fg(theme.muted)),
        ]));
    }

    let chat = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", translate("help_faq", language)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(chat, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, theme: Theme) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  F1       - Toggle help"),
        Line::from("  F2..F7   - Home / Report / History / Map / Settings / Profile"),
        Line::from("  F8       - Chat assistant"),
        Line::from("  Ctrl+Q   - Quit"),
        Line::from(""),
        Line::from("Report wizard:"),
        Line::from("  Enter    - Next step / submit"),
        Line::from("  Esc      - Previous step (exits from step 1)"),
        Line::from("  Tab      - Switch field (step 1)"),
        Line::from("  Arrows   - Pick category / subcategory (step 2)"),
        Line::from("  Space    - Select subcategory (step 2)"),
        Line::from("  Ctrl+N   - Next from the description editor"),
        Line::from("  Ctrl+D   - Remove last photo (step 4)"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, theme: Theme) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(theme.err).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.err)),
        )
        .wrap(Wrap { trim: false })
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
