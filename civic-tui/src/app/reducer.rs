//! Pure reducer function for state transitions
//!
//! Following functional programming principles, the reducer is a pure function:
//! `(State, Action) -> State`
//!
//! The reducer has NO side effects - it only computes new state values.
//! All I/O (store calls, config saves, timers) happens in the event loop,
//! which feeds results back in as actions.
//!
//! Raw key events are translated by [`map_key`], a separate pure function,
//! so keybindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libciviclink::draft::BackOutcome;
use libciviclink::types::Category;
use libciviclink::WizardState;

use super::actions::{Action, Screen};
use super::state::{
    AppState, AuthField, AuthFormState, ChatMessage, LocationField, ReportFormState,
    StatusBarState,
};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// This function is completely pure - no I/O, no side effects.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        // === Navigation ===
        Action::NavigateTo(screen) => navigate(state, screen),

        Action::Quit => {
            state.should_quit = true;
            state
        }

        Action::ShowHelp => {
            state.help_visible = true;
            state
        }

        Action::HideHelp => {
            state.help_visible = false;
            state
        }

        // === Authentication ===
        Action::AuthInput(c) => {
            if !state.auth.busy {
                state.auth.field_mut(state.auth.focus).push(c);
            }
            state
        }

        Action::AuthBackspace => {
            if !state.auth.busy {
                state.auth.field_mut(state.auth.focus).pop();
            }
            state
        }

        Action::AuthFocusNext => move_auth_focus(state, 1),
        Action::AuthFocusPrev => move_auth_focus(state, -1),

        Action::SignInRequested | Action::SignUpRequested => {
            // The store call is spawned by the event loop; the form is
            // locked until the result comes back as an action.
            state.auth.busy = true;
            state.error = None;
            state
        }

        Action::AuthSucceeded(session) => {
            state.session = Some(session);
            state.auth = AuthFormState::default();
            state.error = None;
            state.current_screen = Screen::Home;
            state.status = StatusBarState {
                message: Some("Signed in".to_string()),
            };
            state
        }

        Action::AuthFailed(error) => {
            // Form values survive so nothing has to be retyped
            state.auth.busy = false;
            state.error = Some(error);
            state
        }

        Action::SignOutRequested => state,

        Action::SignedOut => {
            state.session = None;
            state.profile = None;
            state.history.clear();
            state.nearby.clear();
            state.chat = Default::default();
            state.form = ReportFormState::default();
            state.current_screen = Screen::Welcome;
            state.status = StatusBarState {
                message: Some("Signed out".to_string()),
            };
            state
        }

        // === Report wizard ===
        Action::WizardNext => {
            state.form.draft.advance();
            state
        }

        Action::WizardBack => {
            match state.form.draft.back() {
                BackOutcome::ExitWizard => {
                    state.form = ReportFormState::default();
                    state.current_screen = Screen::Home;
                }
                BackOutcome::MovedBack | BackOutcome::Ignored => {}
            }
            state
        }

        Action::WizardInput(c) => {
            match state.form.draft.state() {
                WizardState::Location => match state.form.location_focus {
                    LocationField::Location => {
                        let mut location = state.form.draft.location.clone();
                        location.push(c);
                        state.form.draft.set_location(location);
                    }
                    LocationField::Landmark => {
                        let mut landmark = state.form.draft.landmark.clone();
                        landmark.push(c);
                        state.form.draft.set_landmark(landmark);
                    }
                },
                WizardState::Photos => state.form.photo_input.push(c),
                _ => {}
            }
            state
        }

        Action::WizardBackspace => {
            match state.form.draft.state() {
                WizardState::Location => match state.form.location_focus {
                    LocationField::Location => {
                        let mut location = state.form.draft.location.clone();
                        location.pop();
                        state.form.draft.set_location(location);
                    }
                    LocationField::Landmark => {
                        let mut landmark = state.form.draft.landmark.clone();
                        landmark.pop();
                        state.form.draft.set_landmark(landmark);
                    }
                },
                WizardState::Photos => {
                    state.form.photo_input.pop();
                }
                _ => {}
            }
            state
        }

        Action::WizardFocusNext => {
            state.form.location_focus = match state.form.location_focus {
                LocationField::Location => LocationField::Landmark,
                LocationField::Landmark => LocationField::Location,
            };
            state
        }

        Action::CategoryPrev => cycle_category(state, -1),
        Action::CategoryNext => cycle_category(state, 1),

        Action::SubcategoryPrev => {
            state.form.subcategory_cursor = state.form.subcategory_cursor.saturating_sub(1);
            state
        }

        Action::SubcategoryNext => {
            if let Some(category) = state.form.draft.category {
                let last = category.subcategories().len() - 1;
                state.form.subcategory_cursor = (state.form.subcategory_cursor + 1).min(last);
            }
            state
        }

        Action::SubcategorySelect => {
            if let Some(subcategory) = state.form.highlighted_subcategory() {
                state.form.draft.select_subcategory(subcategory);
            }
            state
        }

        Action::DescriptionChanged(text) => {
            // The draft truncates to the hard cap; the event loop syncs the
            // editor back when that happens.
            state.form.draft.set_description(&text);
            state
        }

        Action::PhotoAdd => add_photo(state),

        Action::PhotoRemoveLast => {
            let count = state.form.draft.photos.len();
            if count > 0 {
                state.form.draft.remove_photo(count - 1);
            }
            state
        }

        Action::SubmitRequested => {
            // A second trigger while already submitting is a no-op inside
            // begin_submission, so repeated keypresses cannot double-submit.
            if state.form.draft.begin_submission() {
                state.form.submit_error = None;
                state.form.progress.clear();
            }
            state
        }

        Action::SubmissionProgress(status) => {
            state.form.progress.push(status);
            state
        }

        Action::SubmissionSucceeded { report_id } => {
            state.form.draft.complete_submission();
            state.form.progress.clear();
            state.form.submitted_report_id = Some(report_id);
            state.status = StatusBarState {
                message: Some("Report submitted".to_string()),
            };
            state
        }

        Action::SubmissionFailed { error } => {
            // Back to the photos step with the full draft intact
            state.form.draft.fail_submission();
            state.form.progress.clear();
            state.form.submit_error = Some(error);
            state
        }

        Action::ReturnHome => {
            state.form = ReportFormState::default();
            state.current_screen = Screen::Home;
            state
        }

        // === Loaded data ===
        Action::ProfileLoaded(profile) => {
            state.profile = Some(profile);
            state
        }

        Action::HistoryLoaded(reports) => {
            state.history = reports;
            state
        }

        Action::NearbyLoaded(reports) => {
            state.nearby = reports;
            state
        }

        // === Chat assistant ===
        Action::ChatToggle => {
            state.chat.open = !state.chat.open;
            if state.chat.open && state.chat.messages.is_empty() {
                state.chat.messages.push(ChatMessage::Assistant("chat_greeting"));
            }
            state
        }

        Action::ChatInput(c) => {
            if !state.chat.awaiting_reply {
                state.chat.input.push(c);
            }
            state
        }

        Action::ChatBackspace => {
            state.chat.input.pop();
            state
        }

        Action::ChatSend => {
            let message = state.chat.input.trim().to_string();
            if !message.is_empty() && !state.chat.awaiting_reply {
                state.chat.messages.push(ChatMessage::User(message));
                state.chat.input.clear();
                state.chat.awaiting_reply = true;
            }
            state
        }

        Action::ChatReplyReceived(key) => {
            state.chat.messages.push(ChatMessage::Assistant(key));
            state.chat.awaiting_reply = false;
            state
        }

        // === Settings ===
        Action::ToggleDarkMode => {
            state.ui.dark_mode = !state.ui.dark_mode;
            state
        }

        Action::CycleLanguage => {
            state.ui.language = state.ui.language.next();
            state
        }

        // === Error handling ===
        Action::ShowError(error) => {
            state.error = Some(error);
            state
        }

        Action::DismissError => {
            state.error = None;
            state
        }

        // === Status bar ===
        Action::SetStatus(message) => {
            state.status = StatusBarState {
                message: Some(message),
            };
            state
        }

        Action::ClearStatus => {
            state.status = StatusBarState { message: None };
            state
        }
    }
}

/// Apply navigation, forcing the welcome screen for protected targets
/// without a session.
fn navigate(mut state: AppState, screen: Screen) -> AppState {
    if screen.requires_auth() && !state.authenticated() {
        state.current_screen = Screen::Welcome;
        return state;
    }

    // Navigation is ignored while a submission is in flight; the draft
    // must not be discarded under it.
    if state.submitting() {
        return state;
    }

    // Leaving the wizard discards the draft
    if state.current_screen == Screen::Report && screen != Screen::Report {
        state.form = ReportFormState::default();
    }

    // Each auth form starts on its first field
    match screen {
        Screen::SignIn => state.auth.focus = AuthField::Identifier,
        Screen::SignUp => state.auth.focus = AuthField::Name,
        _ => {}
    }

    state.current_screen = screen;
    state
}

fn move_auth_focus(mut state: AppState, delta: i32) -> AppState {
    let order = match state.current_screen {
        Screen::SignUp => AuthField::sign_up_order(),
        _ => AuthField::sign_in_order(),
    };
    let position = order
        .iter()
        .position(|f| *f == state.auth.focus)
        .unwrap_or(0);
    let next = (position as i32 + delta).rem_euclid(order.len() as i32) as usize;
    state.auth.focus = order[next];
    state
}

fn cycle_category(mut state: AppState, delta: i32) -> AppState {
    let all = Category::all();
    let next = match state.form.category_index() {
        Some(index) => (index as i32 + delta).rem_euclid(all.len() as i32) as usize,
        None => 0,
    };
    // Switching categories clears any chosen subcategory inside the draft
    state.form.draft.select_category(all[next]);
    state.form.subcategory_cursor = 0;
    state
}

fn add_photo(mut state: AppState) -> AppState {
    use libciviclink::types::{PhotoAttachment, MAX_PHOTOS};

    let path = state.form.photo_input.trim().to_string();
    if path.is_empty() {
        return state;
    }

    if state.form.draft.photos.len() >= MAX_PHOTOS {
        state.status = StatusBarState {
            message: Some(format!("At most {} photos per report", MAX_PHOTOS)),
        };
        return state;
    }

    match PhotoAttachment::from_path(&path) {
        Some(photo) => {
            state.form.draft.add_photo(photo);
            state.form.photo_input.clear();
            state.status = StatusBarState { message: None };
        }
        None => {
            state.status = StatusBarState {
                message: Some("Unsupported image type (jpg, png, gif, webp)".to_string()),
            };
        }
    }
    state
}

/// Map a raw key event to a semantic action
///
/// Pure function over the current state, so the same key can mean
/// different things on different screens. Returns `None` when the key
/// does nothing in the current state.
///
/// The description editor on the wizard's third step is handled by the
/// event loop (tui-textarea owns the cursor); this function only sees
/// the step's control keys.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Overlays swallow input first
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Action::HideHelp),
            _ => None,
        };
    }

    if state.chat.open {
        return match key.code {
            KeyCode::Esc => Some(Action::ChatToggle),
            KeyCode::Enter => Some(Action::ChatSend),
            KeyCode::Backspace => Some(Action::ChatBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ChatInput(c))
            }
            _ => None,
        };
    }

    // Global keys
    match (key.code, key.modifiers) {
        (KeyCode::F(1), _) => return Some(Action::ShowHelp),
        (KeyCode::Char('q'), KeyModifiers::CONTROL) if !state.submitting() => {
            return Some(Action::Quit)
        }
        (KeyCode::F(2), _) => return Some(Action::NavigateTo(Screen::Home)),
        (KeyCode::F(3), _) => return Some(Action::NavigateTo(Screen::Report)),
        (KeyCode::F(4), _) => return Some(Action::NavigateTo(Screen::History)),
        (KeyCode::F(5), _) => return Some(Action::NavigateTo(Screen::Map)),
        (KeyCode::F(6), _) => return Some(Action::NavigateTo(Screen::Settings)),
        (KeyCode::F(7), _) => return Some(Action::NavigateTo(Screen::Profile)),
        (KeyCode::F(8), _) if state.authenticated() => return Some(Action::ChatToggle),
        _ => {}
    }

    // Screen-specific keys
    match state.current_screen {
        Screen::Welcome => match key.code {
            KeyCode::Char('i') | KeyCode::Enter => Some(Action::NavigateTo(Screen::SignIn)),
            KeyCode::Char('u') => Some(Action::NavigateTo(Screen::SignUp)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        Screen::SignIn | Screen::SignUp => map_auth_key(state, key),

        Screen::Home => match key.code {
            KeyCode::Char('r') => Some(Action::NavigateTo(Screen::Report)),
            KeyCode::Char('h') => Some(Action::NavigateTo(Screen::History)),
            KeyCode::Char('m') => Some(Action::NavigateTo(Screen::Map)),
            KeyCode::Char('s') => Some(Action::NavigateTo(Screen::Settings)),
            KeyCode::Char('p') => Some(Action::NavigateTo(Screen::Profile)),
            KeyCode::Char('c') => Some(Action::ChatToggle),
            KeyCode::Char('o') => Some(Action::SignOutRequested),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        Screen::Report => map_wizard_key(state, key),

        Screen::History | Screen::Map | Screen::Profile => match key.code {
            KeyCode::Esc => Some(Action::NavigateTo(Screen::Home)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        Screen::Settings => match key.code {
            KeyCode::Char('d') => Some(Action::ToggleDarkMode),
            KeyCode::Char('l') => Some(Action::CycleLanguage),
            KeyCode::Esc => Some(Action::NavigateTo(Screen::Home)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn map_auth_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::NavigateTo(Screen::Welcome)),
        KeyCode::Tab | KeyCode::Down => Some(Action::AuthFocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::AuthFocusPrev),
        KeyCode::Backspace => Some(Action::AuthBackspace),
        KeyCode::Enter => match state.current_screen {
            Screen::SignUp if state.auth.can_sign_up() => Some(Action::SignUpRequested),
            Screen::SignIn if state.auth.can_sign_in() => Some(Action::SignInRequested),
            _ => None,
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::AuthInput(c))
        }
        _ => None,
    }
}

fn map_wizard_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match state.form.draft.state() {
        WizardState::Location => match key.code {
            KeyCode::Esc => Some(Action::WizardBack),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => Some(Action::WizardFocusNext),
            KeyCode::Backspace => Some(Action::WizardBackspace),
            KeyCode::Enter => state.form.draft.can_advance().then_some(Action::WizardNext),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::WizardInput(c))
            }
            _ => None,
        },

        WizardState::Category => match key.code {
            KeyCode::Esc => Some(Action::WizardBack),
            KeyCode::Left => Some(Action::CategoryPrev),
            KeyCode::Right => Some(Action::CategoryNext),
            KeyCode::Up => Some(Action::SubcategoryPrev),
            KeyCode::Down => Some(Action::SubcategoryNext),
            KeyCode::Char(' ') => Some(Action::SubcategorySelect),
            KeyCode::Enter => state.form.draft.can_advance().then_some(Action::WizardNext),
            _ => None,
        },

        // Text input goes to the textarea in the event loop
        WizardState::Description => match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                Some(Action::WizardBack)
            }
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                state.form.draft.can_advance().then_some(Action::WizardNext)
            }
            _ => None,
        },

        WizardState::Photos => match key.code {
            KeyCode::Esc => Some(Action::WizardBack),
            KeyCode::Backspace => Some(Action::WizardBackspace),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PhotoRemoveLast)
            }
            // Enter adds the typed photo, or submits once the input is empty
            KeyCode::Enter => {
                if state.form.photo_input.trim().is_empty() {
                    Some(Action::SubmitRequested)
                } else {
                    Some(Action::PhotoAdd)
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::WizardInput(c))
            }
            _ => None,
        },

        WizardState::Submitting => None,

        WizardState::Success => match key.code {
            KeyCode::Enter => Some(Action::ReturnHome),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libciviclink::types::{Session, Subcategory};

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state = reduce(
            state,
            Action::AuthSucceeded(Session {
                user_id: "mock-user".to_string(),
                email: "rajesh@example.com".to_string(),
            }),
        );
        state
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        // Original state unchanged
        assert!(state_clone.status.message.is_none());

        // New state has the change
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_protected_navigation_forces_welcome() {
        let state = AppState::new();
        let state = reduce(state, Action::NavigateTo(Screen::Home));
        assert_eq!(state.current_screen, Screen::Welcome);
    }

    #[test]
    fn test_auth_success_lands_on_home() {
        let state = signed_in();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.authenticated());
        assert!(state.auth.password.is_empty());
    }

    #[test]
    fn test_auth_failure_keeps_form_editable() {
        let mut state = AppState::new();
        state.current_screen = Screen::SignIn;
        state.auth.identifier = "rajesh@example.com".to_string();
        state.auth.password = "password123".to_string();

        let state = reduce(state, Action::SignInRequested);
        assert!(state.auth.busy);

        let state = reduce(state, Action::AuthFailed("Invalid credentials".to_string()));
        assert!(!state.auth.busy);
        assert_eq!(state.error, Some("Invalid credentials".to_string()));
        // No data lost
        assert_eq!(state.auth.identifier, "rajesh@example.com");
        assert_eq!(state.auth.password, "password123");
    }

    #[test]
    fn test_signed_out_drops_account_state() {
        let mut state = signed_in();
        state.history = vec![];
        let state = reduce(state, Action::SignedOut);
        assert!(!state.authenticated());
        assert_eq!(state.current_screen, Screen::Welcome);
        assert!(state.profile.is_none());
    }

    #[test]
    fn test_category_cycle_clears_subcategory() {
        let mut state = signed_in();
        state = reduce(state, Action::CategoryNext);
        let category = state.form.draft.category.unwrap();
        state = reduce(state, Action::SubcategorySelect);
        assert_eq!(
            state.form.draft.subcategory,
            Some(category.subcategories()[0])
        );

        state = reduce(state, Action::CategoryNext);
        assert!(state.form.draft.subcategory.is_none());
        assert_eq!(state.form.subcategory_cursor, 0);
    }

    #[test]
    fn test_subcategory_cursor_stays_in_bounds() {
        let mut state = signed_in();
        state = reduce(state, Action::CategoryNext);
        for _ in 0..10 {
            state = reduce(state, Action::SubcategoryNext);
        }
        assert_eq!(state.form.subcategory_cursor, 2);

        for _ in 0..10 {
            state = reduce(state, Action::SubcategoryPrev);
        }
        assert_eq!(state.form.subcategory_cursor, 0);
    }

    #[test]
    fn test_navigating_away_discards_draft() {
        let mut state = signed_in();
        state.current_screen = Screen::Report;
        state.form.draft.set_landmark("Near Metro");

        let state = reduce(state, Action::NavigateTo(Screen::Home));
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.form.draft.landmark.is_empty());
    }

    #[test]
    fn test_navigation_ignored_while_submitting() {
        let mut state = signed_in();
        state.current_screen = Screen::Report;
        state.form.draft.set_landmark("Near Metro");
        state.form.draft.advance();
        state.form.draft.select_category(Category::RoadsTransport);
        state.form.draft.select_subcategory(Subcategory::Potholes);
        state.form.draft.advance();
        state.form.draft.set_description("Large pothole blocking traffic");
        state.form.draft.advance();

        let state = reduce(state, Action::SubmitRequested);
        assert!(state.submitting());

        let state = reduce(state, Action::NavigateTo(Screen::Home));
        assert_eq!(state.current_screen, Screen::Report);
        assert!(state.submitting());
    }

    #[test]
    fn test_submission_failure_returns_to_photos_with_banner() {
        let mut state = signed_in();
        state.form.draft.set_landmark("Near Metro");
        state.form.draft.advance();
        state.form.draft.select_category(Category::RoadsTransport);
        state.form.draft.select_subcategory(Subcategory::Potholes);
        state.form.draft.advance();
        state.form.draft.set_description("Large pothole blocking traffic");
        state.form.draft.advance();

        let state = reduce(state, Action::SubmitRequested);
        let state = reduce(
            state,
            Action::SubmissionFailed {
                error: "Network error: reset".to_string(),
            },
        );

        assert_eq!(state.form.draft.state(), WizardState::Photos);
        assert_eq!(state.form.submit_error, Some("Network error: reset".to_string()));
        assert_eq!(state.form.draft.landmark, "Near Metro");
    }

    #[test]
    fn test_photo_add_rejects_unknown_extension() {
        let mut state = signed_in();
        state.form.draft.set_landmark("x");
        state.form.photo_input = "notes.txt".to_string();

        let state = reduce(state, Action::PhotoAdd);
        assert!(state.form.draft.photos.is_empty());
        assert!(state.status.message.is_some());
    }

    #[test]
    fn test_photo_add_and_remove() {
        let mut state = signed_in();
        state.form.photo_input = "site.jpg".to_string();

        let state = reduce(state, Action::PhotoAdd);
        assert_eq!(state.form.draft.photos.len(), 1);
        assert!(state.form.photo_input.is_empty());

        let state = reduce(state, Action::PhotoRemoveLast);
        assert!(state.form.draft.photos.is_empty());
    }

    #[test]
    fn test_chat_send_locks_input_until_reply() {
        let mut state = signed_in();
        state = reduce(state, Action::ChatToggle);
        assert_eq!(state.chat.messages.len(), 1); // greeting

        state.chat.input = "pothole near my house".to_string();
        state = reduce(state, Action::ChatSend);
        assert!(state.chat.awaiting_reply);
        assert_eq!(state.chat.messages.len(), 2);

        // A second send while awaiting does nothing
        state.chat.input = "hello?".to_string();
        let state = reduce(state, Action::ChatSend);
        assert_eq!(state.chat.messages.len(), 2);

        let state = reduce(state, Action::ChatReplyReceived("chat_reply_pothole"));
        assert!(!state.chat.awaiting_reply);
        assert_eq!(state.chat.messages.len(), 3);
    }

    #[test]
    fn test_settings_toggles() {
        let state = signed_in();
        assert!(state.ui.dark_mode);

        let state = reduce(state, Action::ToggleDarkMode);
        assert!(!state.ui.dark_mode);

        use libciviclink::localization::Language;
        let state = reduce(state, Action::CycleLanguage);
        assert_eq!(state.ui.language, Language::Hi);
    }
}
