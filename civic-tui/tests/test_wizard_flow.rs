//! Report wizard end-to-end flow through the reducer
//!
//! Drives the four-step wizard with semantic actions and key events the
//! same way the event loop does, without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use civic_tui::app::{map_key, reduce, Action, AppState, Screen};
use libciviclink::types::{Category, Session, Subcategory};
use libciviclink::validation::MAX_DESCRIPTION_LEN;
use libciviclink::WizardState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn signed_in_on_report() -> AppState {
    let state = reduce(
        AppState::new(),
        Action::AuthSucceeded(Session {
            user_id: "mock-user".to_string(),
            email: "rajesh@example.com".to_string(),
        }),
    );
    reduce(state, Action::NavigateTo(Screen::Report))
}

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = reduce(state, Action::WizardInput(c));
    }
    state
}

#[test]
fn happy_path_reaches_success() {
    let mut state = signed_in_on_report();
    assert_eq!(state.form.draft.state(), WizardState::Location);

    // Step 1: landmark is the required field
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "Opposite the old water tank");
    assert!(state.form.draft.can_advance());
    state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Category);

    // Step 2: category and subcategory
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    assert!(state.form.draft.subcategory.is_some());
    state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Description);

    // Step 3: description comes from the editor widget
    state = reduce(
        state,
        Action::DescriptionChanged("Streetlight has been out for a week".to_string()),
    );
    assert!(state.form.draft.can_advance());
    state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Photos);

    // Step 4: photos are optional, submit straight away
    state = reduce(state, Action::SubmitRequested);
    assert_eq!(state.form.draft.state(), WizardState::Submitting);

    state = reduce(
        state,
        Action::SubmissionSucceeded {
            report_id: "r-123".to_string(),
        },
    );
    assert_eq!(state.form.draft.state(), WizardState::Success);
    assert_eq!(state.form.submitted_report_id.as_deref(), Some("r-123"));
}

#[test]
fn advance_blocked_until_step_is_valid() {
    let state = signed_in_on_report();

    // Empty location step: Enter maps to nothing and advance is a no-op
    assert!(map_key(&state, key(KeyCode::Enter)).is_none());
    let state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Location);

    // Location text alone is not enough; the landmark is the required field
    let state = type_text(state, "some street");
    assert!(!state.form.draft.can_advance());

    let state = reduce(state, Action::WizardFocusNext);
    let state = type_text(state, "Near Metro");
    let mut state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Category);

    // Category without subcategory: still blocked
    state = reduce(state, Action::CategoryNext);
    assert!(!state.form.draft.can_advance());
    assert!(map_key(&state, key(KeyCode::Enter)).is_none());

    state = reduce(state, Action::SubcategorySelect);
    assert!(state.form.draft.can_advance());
    let state = reduce(state, Action::WizardNext);

    // Short description is rejected
    let state = reduce(state, Action::DescriptionChanged("too short".to_string()));
    assert!(!state.form.draft.can_advance());
    let state = reduce(state, Action::WizardNext);
    assert_eq!(state.form.draft.state(), WizardState::Description);
}

#[test]
fn back_preserves_earlier_steps() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "Ward 12 park gate");
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);

    state = reduce(state, Action::WizardBack);
    assert_eq!(state.form.draft.state(), WizardState::Category);
    assert!(state.form.draft.subcategory.is_some());

    state = reduce(state, Action::WizardBack);
    assert_eq!(state.form.draft.state(), WizardState::Location);
    assert_eq!(state.form.draft.landmark, "Ward 12 park gate");
}

#[test]
fn back_on_first_step_exits_to_home() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "discarded");

    let state = reduce(state, Action::WizardBack);
    assert_eq!(state.current_screen, Screen::Home);
    assert!(state.form.draft.landmark.is_empty());
}

#[test]
fn description_truncates_at_hard_cap() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "cap test");
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);

    let long = "x".repeat(MAX_DESCRIPTION_LEN + 60);
    let state = reduce(state, Action::DescriptionChanged(long));
    assert_eq!(
        state.form.draft.description.chars().count(),
        MAX_DESCRIPTION_LEN
    );
}

#[test]
fn repeated_submit_is_a_single_trigger() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "Near Metro");
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);
    state = reduce(
        state,
        Action::DescriptionChanged("Open manhole on the footpath".to_string()),
    );
    state = reduce(state, Action::WizardNext);

    let state = reduce(state, Action::SubmitRequested);
    assert_eq!(state.form.draft.state(), WizardState::Submitting);

    // Mashing Enter while in flight changes nothing; the keymap doesn't
    // even produce an action
    assert!(map_key(&state, key(KeyCode::Enter)).is_none());
    let state = reduce(state, Action::SubmitRequested);
    assert_eq!(state.form.draft.state(), WizardState::Submitting);
}

#[test]
fn failure_keeps_draft_for_retry() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "Bus stop 4");
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    state = reduce(state, Action::WizardNext);
    state = reduce(
        state,
        Action::DescriptionChanged("Garbage not collected for days".to_string()),
    );
    state = reduce(state, Action::WizardNext);
    state = reduce(state, Action::SubmitRequested);

    let state = reduce(
        state,
        Action::SubmissionFailed {
            error: "Network error: timed out".to_string(),
        },
    );
    assert_eq!(state.form.draft.state(), WizardState::Photos);
    assert!(state.form.submit_error.is_some());
    assert_eq!(state.form.draft.landmark, "Bus stop 4");

    // Retry works from where the user left off
    let state = reduce(state, Action::SubmitRequested);
    assert_eq!(state.form.draft.state(), WizardState::Submitting);
    assert!(state.form.submit_error.is_none());
}

#[test]
fn return_home_clears_everything() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::WizardFocusNext);
    state = type_text(state, "done");
    state.form.submitted_report_id = Some("r-1".to_string());

    let state = reduce(state, Action::ReturnHome);
    assert_eq!(state.current_screen, Screen::Home);
    assert_eq!(state.form.draft.state(), WizardState::Location);
    assert!(state.form.submitted_report_id.is_none());
    assert!(state.form.draft.landmark.is_empty());
}

#[test]
fn photo_limit_enforced() {
    let mut state = signed_in_on_report();
    for i in 0..4 {
        state.form.photo_input = format!("photo{}.jpg", i);
        state = reduce(state, Action::PhotoAdd);
    }
    assert_eq!(state.form.draft.photos.len(), 4);

    state.form.photo_input = "one-too-many.jpg".to_string();
    let state = reduce(state, Action::PhotoAdd);
    assert_eq!(state.form.draft.photos.len(), 4);
    assert!(state.status.message.is_some());
}

#[test]
fn category_switch_resets_subcategory_choice() {
    let mut state = signed_in_on_report();
    state = reduce(state, Action::CategoryNext);
    state = reduce(state, Action::SubcategoryNext);
    state = reduce(state, Action::SubcategorySelect);
    let first = state.form.draft.subcategory.unwrap();
    assert_ne!(state.form.draft.category, None);

    state = reduce(state, Action::CategoryNext);
    assert_eq!(state.form.draft.subcategory, None);

    // The new category's subcategory list starts from the top
    state = reduce(state, Action::SubcategorySelect);
    let second = state.form.draft.subcategory.unwrap();
    assert_ne!(first, second);
    assert!(state
        .form
        .draft
        .category
        .unwrap()
        .subcategories()
        .contains(&second));
}

#[test]
fn wizard_categories_cover_all_four() {
    // Left/right wraps across the full category list
    let mut state = signed_in_on_report();
    let mut seen = Vec::new();
    for _ in 0..Category::all().len() {
        state = reduce(state, Action::CategoryNext);
        seen.push(state.form.draft.category.unwrap());
    }
    assert_eq!(seen.len(), 4);
    assert!(seen.contains(&Category::RoadsTransport));
    assert!(seen.contains(&Category::WaterSanitation));

    // One more wraps back to the first
    state = reduce(state, Action::CategoryNext);
    assert_eq!(state.form.draft.category, Some(seen[0]));
}

#[test]
fn subcategory_select_requires_category() {
    let state = signed_in_on_report();
    let state = reduce(state, Action::SubcategorySelect);
    assert!(state.form.draft.subcategory.is_none());

    // Potholes belongs to roads; selecting via cursor keeps the pairing
    let mut state = reduce(state, Action::CategoryNext);
    while state.form.draft.category != Some(Category::RoadsTransport) {
        state = reduce(state, Action::CategoryNext);
    }
    let state = reduce(state, Action::SubcategorySelect);
    assert_eq!(state.form.draft.subcategory, Some(Subcategory::Potholes));
}
