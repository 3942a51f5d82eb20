//! civic-tui - Terminal UI for CivicLink
//!
//! Interactive terminal interface for reporting and tracking civic issues.
//! The event loop owns all side effects: store calls run on a background
//! runtime and report back over channels, while every state transition
//! goes through the pure reducer.

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use civic_tui::{
    app::{event::EventHandler, event::TuiEvent, map_key, reduce, Action, AppState, Screen},
    error::Result,
    services::{AuthOutcome, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libciviclink::localization::translate;
use libciviclink::service::Event;
use libciviclink::types::SignUpRequest;
use libciviclink::WizardState;
use secrecy::SecretString;

/// Delay before the success screen returns home on its own
const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(5);

/// How many area reports the map screen fetches
const MAP_REPORT_LIMIT: usize = 25;

fn main() -> Result<()> {
    libciviclink::logging::init_tui();
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    let services = ServiceHandle::new()?;
    let mut state = AppState::from_config(&services.config());

    // Pending async results
    let mut auth_rx: Option<Receiver<AuthOutcome>> = None;
    let mut submission_rx: Option<Receiver<Event>> = None;
    let mut chat_rx: Option<Receiver<&'static str>> = None;

    // Success screen auto-redirect deadline
    let mut redirect_at: Option<Instant> = None;

    // Description editor (stateful widget)
    let mut textarea = tui_textarea::TextArea::default();
    textarea.set_placeholder_text("Describe the problem... (Ctrl+N to continue)");

    let event_handler = EventHandler::new(state.ui.tick_rate_ms);

    loop {
        style_description_editor(&mut textarea, &state);

        terminal.draw(|frame| {
            ui::render(frame, &state, &textarea);
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => {
                if editing_description(&state) && !is_wizard_control_key(key) {
                    textarea.input(key);
                    Some(Action::DescriptionChanged(textarea.lines().join("\n")))
                } else {
                    map_key(&state, key)
                }
            }
            TuiEvent::Resize(_, _) | TuiEvent::Tick => None,
        };

        if let Some(action) = action {
            // Values the reducer consumes but side effects still need
            let chat_message = match action {
                Action::ChatSend => Some(state.chat.input.trim().to_string()),
                _ => None,
            };

            state = reduce(state, action.clone());

            // Side effects driven by the action just applied
            match action {
                Action::SignInRequested => {
                    auth_rx = Some(services.sign_in(
                        state.auth.identifier.clone(),
                        state.auth.password.clone(),
                    ));
                }

                Action::SignUpRequested => {
                    auth_rx = Some(services.sign_up(SignUpRequest {
                        name: state.auth.name.clone(),
                        email: state.auth.email.clone(),
                        national_id: state.auth.national_id.clone(),
                        address: state.auth.address.clone(),
                        password: SecretString::from(state.auth.password.clone()),
                    }));
                }

                Action::SignOutRequested => {
                    services.sign_out();
                    state = reduce(state, Action::SignedOut);
                }

                Action::SubmitRequested => {
                    if state.submitting() && submission_rx.is_none() {
                        // The session is guaranteed: the wizard is only
                        // reachable while signed in
                        if let Some(session) = state.session.clone() {
                            match services.submit(&state.form.draft, &session) {
                                Ok((_report_id, rx)) => submission_rx = Some(rx),
                                Err(e) => {
                                    state = reduce(
                                        state,
                                        Action::SubmissionFailed {
                                            error: e.to_string(),
                                        },
                                    );
                                }
                            }
                        }
                    }
                }

                Action::ChatSend => {
                    if state.chat.awaiting_reply && chat_rx.is_none() {
                        if let Some(message) = chat_message {
                            chat_rx = Some(services.ask_chat(message));
                        }
                    }
                }

                Action::ToggleDarkMode | Action::CycleLanguage => {
                    if services
                        .save_settings(state.ui.dark_mode, state.ui.language)
                        .is_err()
                    {
                        state = reduce(
                            state,
                            Action::SetStatus("Could not save settings".to_string()),
                        );
                    }
                }

                Action::NavigateTo(screen) => {
                    redirect_at = None;
                    state = refresh_for_screen(&services, state, screen);
                }

                Action::ReturnHome => {
                    redirect_at = None;
                    state = refresh_profile(&services, state);
                    state = refresh_history(&services, state);
                }

                _ => {}
            }
        }

        // Authentication result
        if let Some(rx) = &auth_rx {
            if let Ok(outcome) = rx.try_recv() {
                auth_rx = None;
                match outcome {
                    Ok(session) => {
                        state = reduce(state, Action::AuthSucceeded(session));
                        state = refresh_profile(&services, state);
                        state = refresh_history(&services, state);
                        state = refresh_nearby(&services, state);
                    }
                    Err(error) => {
                        state = reduce(state, Action::AuthFailed(error));
                    }
                }
            }
        }

        // Submission progress and outcome
        if let Some(rx) = &submission_rx {
            let mut finished = false;
            while let Ok(event) = rx.try_recv() {
                match event {
                    Event::SubmissionStarted { .. } => {}
                    Event::SubmissionProgress { status, .. } => {
                        state = reduce(state, Action::SubmissionProgress(status));
                    }
                    Event::SubmissionCompleted { report_id } => {
                        state = reduce(state, Action::SubmissionSucceeded { report_id });
                        redirect_at = Some(Instant::now() + SUCCESS_REDIRECT_DELAY);
                        state = refresh_profile(&services, state);
                        state = refresh_history(&services, state);
                        finished = true;
                    }
                    Event::SubmissionFailed { error, .. } => {
                        state = reduce(state, Action::SubmissionFailed { error });
                        finished = true;
                    }
                }
                if finished {
                    break;
                }
            }
            if finished {
                submission_rx = None;
            }
        }

        // Chat reply
        if let Some(rx) = &chat_rx {
            if let Ok(reply) = rx.try_recv() {
                chat_rx = None;
                state = reduce(state, Action::ChatReplyReceived(reply));
            }
        }

        // Success screen auto-redirect
        if let Some(deadline) = redirect_at {
            if Instant::now() >= deadline {
                redirect_at = None;
                state = reduce(state, Action::ReturnHome);
                state = refresh_profile(&services, state);
                state = refresh_history(&services, state);
            }
        }

        // Keep the editor in sync with the draft (hard cap truncation,
        // draft resets)
        let editor_content = textarea.lines().join("\n");
        if editor_content != state.form.draft.description {
            textarea = tui_textarea::TextArea::from(
                state
                    .form
                    .draft
                    .description
                    .lines()
                    .map(|l| l.to_string())
                    .collect::<Vec<_>>(),
            );
            textarea.set_placeholder_text("Describe the problem... (Ctrl+N to continue)");
            textarea.move_cursor(tui_textarea::CursorMove::Bottom);
            textarea.move_cursor(tui_textarea::CursorMove::End);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// The description editor receives raw keys on the wizard's third step
fn editing_description(state: &AppState) -> bool {
    state.current_screen == Screen::Report
        && state.form.draft.state() == WizardState::Description
        && !state.help_visible
        && !state.chat.open
        && state.error.is_none()
}

/// Keys the editor must not swallow on the description step
fn is_wizard_control_key(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _)
            | (KeyCode::F(_), _)
            | (KeyCode::Char('n'), KeyModifiers::CONTROL)
            | (KeyCode::Char('b'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
    )
}

fn style_description_editor(textarea: &mut tui_textarea::TextArea, state: &AppState) {
    use ratatui::style::{Color, Style};
    use ratatui::widgets::{Block, Borders};

    let valid = libciviclink::validation::is_valid_description(&state.form.draft.description);
    let border_color = if valid { Color::Green } else { Color::Red };

    textarea.set_block(
        Block::default()
            .title(format!(
                " {} ",
                translate("describe_problem", state.ui.language)
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
}

fn refresh_for_screen(services: &ServiceHandle, state: AppState, screen: Screen) -> AppState {
    match screen {
        Screen::Home | Screen::Profile => refresh_profile(services, state),
        Screen::History => refresh_history(services, state),
        Screen::Map => refresh_nearby(services, state),
        _ => state,
    }
}

fn refresh_profile(services: &ServiceHandle, state: AppState) -> AppState {
    if let Some(session) = state.session.clone() {
        if let Ok(profile) = services.load_profile(&session.user_id) {
            return reduce(state, Action::ProfileLoaded(profile));
        }
    }
    state
}

fn refresh_history(services: &ServiceHandle, state: AppState) -> AppState {
    if let Some(session) = state.session.clone() {
        if let Ok(reports) = services.load_history(&session.user_id) {
            return reduce(state, Action::HistoryLoaded(reports));
        }
    }
    state
}

fn refresh_nearby(services: &ServiceHandle, state: AppState) -> AppState {
    if state.session.is_some() {
        if let Ok(reports) = services.load_nearby(MAP_REPORT_LIMIT) {
            return reduce(state, Action::NearbyLoaded(reports));
        }
    }
    state
}
