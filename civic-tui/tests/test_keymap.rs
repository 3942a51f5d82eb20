//! Key-to-action mapping across screens and overlays
//!
//! Overlays swallow keys before the screens see them, and the same key
//! means different things depending on where the user is.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use civic_tui::app::{map_key, reduce, Action, AppState, Screen};
use libciviclink::types::Session;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn signed_in() -> AppState {
    reduce(
        AppState::new(),
        Action::AuthSucceeded(Session {
            user_id: "mock-user".to_string(),
            email: "rajesh@example.com".to_string(),
        }),
    )
}

#[test]
fn error_overlay_swallows_everything_but_dismiss() {
    let mut state = signed_in();
    state.error = Some("boom".to_string());

    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::DismissError)
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::Enter)),
        Some(Action::DismissError)
    ));
    // Navigation keys are blocked while the banner is up
    assert!(map_key(&state, key(KeyCode::F(4))).is_none());
    assert!(map_key(&state, key(KeyCode::Char('r'))).is_none());
}

#[test]
fn help_overlay_toggles_with_f1() {
    let state = signed_in();
    let action = map_key(&state, key(KeyCode::F(1))).expect("open help");
    let state = reduce(state, action);
    assert!(state.help_visible);

    // Keys other than Esc/F1 do nothing while help is up
    assert!(map_key(&state, key(KeyCode::Char('r'))).is_none());

    let action = map_key(&state, key(KeyCode::F(1))).expect("close help");
    let state = reduce(state, action);
    assert!(!state.help_visible);
}

#[test]
fn chat_overlay_captures_typing() {
    let mut state = signed_in();
    state = reduce(state, Action::ChatToggle);
    assert!(state.chat.open);

    // Characters go to the chat input, not the screen underneath
    for c in "water".chars() {
        let action = map_key(&state, key(KeyCode::Char(c))).expect("chat input");
        state = reduce(state, action);
    }
    assert_eq!(state.chat.input, "water");

    // 'r' must not navigate to the report wizard while chatting
    assert_eq!(state.current_screen, Screen::Home);

    let action = map_key(&state, key(KeyCode::Esc)).expect("close chat");
    let state = reduce(state, action);
    assert!(!state.chat.open);
}

#[test]
fn chat_requires_a_session() {
    let state = AppState::new();
    assert!(map_key(&state, key(KeyCode::F(8))).is_none());

    let state = signed_in();
    assert!(matches!(
        map_key(&state, key(KeyCode::F(8))),
        Some(Action::ChatToggle)
    ));
}

#[test]
fn ctrl_q_quits_except_mid_submission() {
    let state = signed_in();
    assert!(matches!(map_key(&state, ctrl('q')), Some(Action::Quit)));

    // Typing 'q' into a form field must not quit
    let state = reduce(state, Action::NavigateTo(Screen::SignIn));
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('q'))),
        Some(Action::AuthInput('q'))
    ));

    // Mid-submission the quit key is ignored
    let mut state = signed_in();
    state = reduce(state, Action::NavigateTo(Screen::Report));
    state = reduce(state, Action::WizardFocusNext);
    for c in "Near Metro".chars() {
        state = reduce(state, Action::WizardInput(c));
    }
    state.form.draft.advance();
    state
        .form
        .draft
        .select_category(libciviclink::types::Category::RoadsTransport);
    state
        .form
        .draft
        .select_subcategory(libciviclink::types::Subcategory::Potholes);
    state.form.draft.advance();
    state.form.draft.set_description("Deep pothole near the signal");
    state.form.draft.advance();
    let state = reduce(state, Action::SubmitRequested);
    assert!(state.submitting());
    assert!(map_key(&state, ctrl('q')).is_none());
}

#[test]
fn home_screen_shortcuts() {
    let state = signed_in();
    let cases = [
        ('r', Screen::Report),
        ('h', Screen::History),
        ('m', Screen::Map),
        ('s', Screen::Settings),
        ('p', Screen::Profile),
    ];
    for (c, screen) in cases {
        let action = map_key(&state, key(KeyCode::Char(c))).expect("home shortcut");
        assert!(matches!(action, Action::NavigateTo(s) if s == screen));
    }
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('c'))),
        Some(Action::ChatToggle)
    ));
}

#[test]
fn settings_keys_toggle_appearance() {
    let state = reduce(signed_in(), Action::NavigateTo(Screen::Settings));
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('d'))),
        Some(Action::ToggleDarkMode)
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('l'))),
        Some(Action::CycleLanguage)
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::NavigateTo(Screen::Home))
    ));
}

#[test]
fn photos_step_enter_adds_then_submits() {
    let mut state = signed_in();
    state = reduce(state, Action::NavigateTo(Screen::Report));
    state = reduce(state, Action::WizardFocusNext);
    for c in "Near Metro".chars() {
        state = reduce(state, Action::WizardInput(c));
    }
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);
    state = reduce(
        state,
        Action::DescriptionChanged("Deep pothole near the signal".to_string()),
    );
    state = reduce(state, Action::WizardNext);

    // Typed path pending: Enter adds the photo
    for c in "site.jpg".chars() {
        state = reduce(state, Action::WizardInput(c));
    }
    let action = map_key(&state, key(KeyCode::Enter)).expect("photos enter");
    assert!(matches!(action, Action::PhotoAdd));
    state = reduce(state, action);
    assert_eq!(state.form.draft.photos.len(), 1);

    // Input empty again: Enter submits
    let action = map_key(&state, key(KeyCode::Enter)).expect("photos enter");
    assert!(matches!(action, Action::SubmitRequested));

    // Ctrl+D removes the most recent photo
    let action = map_key(&state, ctrl('d')).expect("remove photo");
    assert!(matches!(action, Action::PhotoRemoveLast));
}

#[test]
fn description_step_only_maps_control_keys() {
    let mut state = signed_in();
    state = reduce(state, Action::NavigateTo(Screen::Report));
    state = reduce(state, Action::WizardFocusNext);
    for c in "Near Metro".chars() {
        state = reduce(state, Action::WizardInput(c));
    }
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);

    // Plain characters belong to the editor widget, not the keymap
    assert!(map_key(&state, key(KeyCode::Char('a'))).is_none());
    assert!(map_key(&state, key(KeyCode::Enter)).is_none());

    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::WizardBack)
    ));

    // Ctrl+N advances only once the description validates
    assert!(map_key(&state, ctrl('n')).is_none());
    let state = reduce(
        state,
        Action::DescriptionChanged("Deep pothole near the signal".to_string()),
    );
    assert!(matches!(
        map_key(&state, ctrl('n')),
        Some(Action::WizardNext)
    ));
}

#[test]
fn welcome_quit_key() {
    let state = AppState::new();
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('q'))),
        Some(Action::Quit)
    ));
    let state = reduce(state, Action::Quit);
    assert!(state.should_quit);
}
