//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Raw key events are
//! mapped to these semantic actions by `reducer::map_key`, so the reducer
//! itself only ever sees what should happen, never which key was pressed.

use libciviclink::types::{Profile, ReportRecord, Session};

/// Actions that trigger state transitions
///
/// Following functional programming principles, actions are immutable
/// data structures that describe what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying actions to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Authentication ===
    /// Type a character into the focused auth field
    AuthInput(char),

    /// Delete the last character of the focused auth field
    AuthBackspace,

    /// Move focus to the next auth field
    AuthFocusNext,

    /// Move focus to the previous auth field
    AuthFocusPrev,

    /// User requested sign-in with the current form values
    SignInRequested,

    /// User requested account creation with the current form values
    SignUpRequested,

    /// Authentication completed successfully
    AuthSucceeded(Session),

    /// Authentication was rejected
    AuthFailed(String),

    /// User requested sign-out
    SignOutRequested,

    /// Sign-out completed; drop all account-scoped state
    SignedOut,

    // === Report wizard ===
    /// Advance to the next wizard step (when the step guard holds)
    WizardNext,

    /// Go back one wizard step; exits the wizard from the first step
    WizardBack,

    /// Type a character into the active wizard text field
    WizardInput(char),

    /// Delete the last character of the active wizard text field
    WizardBackspace,

    /// Toggle focus between the location and landmark fields
    WizardFocusNext,

    /// Select the previous category
    CategoryPrev,

    /// Select the next category
    CategoryNext,

    /// Move the subcategory highlight up
    SubcategoryPrev,

    /// Move the subcategory highlight down
    SubcategoryNext,

    /// Choose the highlighted subcategory
    SubcategorySelect,

    /// Description editor content changed
    DescriptionChanged(String),

    /// Add the typed photo path as an attachment slot
    PhotoAdd,

    /// Remove the most recently added photo slot
    PhotoRemoveLast,

    /// User triggered submit from the photos step
    SubmitRequested,

    /// Submission progress update
    SubmissionProgress(String),

    /// Submission persisted successfully
    SubmissionSucceeded { report_id: String },

    /// Submission failed; the wizard returns to the photos step
    SubmissionFailed { error: String },

    /// Leave the success screen and return home, discarding the draft
    ReturnHome,

    // === Loaded data ===
    ProfileLoaded(Profile),
    HistoryLoaded(Vec<ReportRecord>),
    NearbyLoaded(Vec<ReportRecord>),

    // === Chat assistant ===
    /// Open or close the chat overlay
    ChatToggle,

    /// Type a character into the chat input
    ChatInput(char),

    /// Delete the last character of the chat input
    ChatBackspace,

    /// Send the typed chat message
    ChatSend,

    /// Assistant reply arrived (as a localization key)
    ChatReplyReceived(&'static str),

    // === Settings ===
    /// Toggle dark mode
    ToggleDarkMode,

    /// Switch to the next interface language
    CycleLanguage,

    // === Error handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with sign-in / sign-up choices
    Welcome,

    /// Sign-in form
    SignIn,

    /// Account creation form
    SignUp,

    /// Home dashboard
    Home,

    /// Report wizard
    Report,

    /// The citizen's own reports with status timelines
    History,

    /// Recent reports across the area
    Map,

    /// Dark mode and language settings
    Settings,

    /// Profile details
    Profile,
}

impl Screen {
    /// Screens only reachable with an active session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Welcome | Screen::SignIn | Screen::SignUp)
    }
}
