//! Application state
//!
//! Immutable state structure following functional programming principles.
//! All state transitions happen through the reducer (see `reducer.rs`).

use libciviclink::draft::ReportDraft;
use libciviclink::localization::Language;
use libciviclink::types::{Category, Profile, ReportRecord, Session};

use super::actions::Screen;

/// Root application state
///
/// This is the single source of truth for the entire application.
/// State transitions are pure functions that return new state values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Active session, if signed in
    pub session: Option<Session>,

    /// Sign-in / sign-up form state
    pub auth: AuthFormState,

    /// Report wizard state
    pub form: ReportFormState,

    /// Profile shown on the home dashboard and profile screen
    pub profile: Option<Profile>,

    /// The signed-in citizen's reports, newest first
    pub history: Vec<ReportRecord>,

    /// Recent reports from the whole area, for the map screen
    pub nearby: Vec<ReportRecord>,

    /// Chat assistant overlay state
    pub chat: ChatState,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub ui: UiConfig,
}

/// Which auth form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Identifier,
    Name,
    Email,
    NationalId,
    Address,
    Password,
}

impl AuthField {
    /// Focus order on the sign-in form
    pub fn sign_in_order() -> &'static [AuthField] {
        &[AuthField::Identifier, AuthField::Password]
    }

    /// Focus order on the sign-up form
    pub fn sign_up_order() -> &'static [AuthField] {
        &[
            AuthField::Name,
            AuthField::Email,
            AuthField::NationalId,
            AuthField::Address,
            AuthField::Password,
        ]
    }
}

/// Sign-in / sign-up form state
///
/// One struct serves both forms; the sign-in form only uses `identifier`
/// and `password`. The password stays here as plain text only for the
/// lifetime of the form and is wrapped in `SecretString` at the service
/// boundary.
#[derive(Debug, Clone)]
pub struct AuthFormState {
    pub identifier: String,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub password: String,
    pub focus: AuthField,
    /// An authentication call is in flight
    pub busy: bool,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            name: String::new(),
            email: String::new(),
            national_id: String::new(),
            address: String::new(),
            password: String::new(),
            focus: AuthField::Identifier,
            busy: false,
        }
    }
}

impl AuthFormState {
    pub fn field(&self, field: AuthField) -> &str {
        match field {
            AuthField::Identifier => &self.identifier,
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::NationalId => &self.national_id,
            AuthField::Address => &self.address,
            AuthField::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Identifier => &mut self.identifier,
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::NationalId => &mut self.national_id,
            AuthField::Address => &mut self.address,
            AuthField::Password => &mut self.password,
        }
    }

    /// Both sign-in fields are filled
    pub fn can_sign_in(&self) -> bool {
        !self.busy && !self.identifier.trim().is_empty() && !self.password.is_empty()
    }

    /// Every sign-up field passes its validation rule
    pub fn can_sign_up(&self) -> bool {
        use libciviclink::validation::*;
        !self.busy
            && is_valid_name(&self.name)
            && is_valid_email(&self.email)
            && is_valid_national_id(&self.national_id)
            && is_valid_address(&self.address)
            && is_valid_password(&self.password)
    }
}

/// Which of the two text fields on the location step has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    Location,
    Landmark,
}

/// Report wizard screen state
///
/// The draft itself (fields, step, guards) lives in the service layer's
/// `ReportDraft`; this adds the purely presentational bits: cursors,
/// the pending photo path, and submission feedback.
#[derive(Debug, Clone)]
pub struct ReportFormState {
    pub draft: ReportDraft,
    pub location_focus: LocationField,
    /// Highlight position in the current category's subcategory list
    pub subcategory_cursor: usize,
    /// Photo path being typed on the photos step
    pub photo_input: String,
    /// Progress messages for the in-flight submission
    pub progress: Vec<String>,
    /// Error banner shown on the photos step after a failed submission
    pub submit_error: Option<String>,
    /// Id of the report stored by the last successful submission
    pub submitted_report_id: Option<String>,
}

impl Default for ReportFormState {
    fn default() -> Self {
        Self {
            draft: ReportDraft::new(),
            location_focus: LocationField::Location,
            subcategory_cursor: 0,
            photo_input: String::new(),
            progress: Vec::new(),
            submit_error: None,
            submitted_report_id: None,
        }
    }
}

impl ReportFormState {
    /// The subcategory currently under the highlight, if a category is chosen
    pub fn highlighted_subcategory(&self) -> Option<libciviclink::types::Subcategory> {
        let category = self.draft.category?;
        category
            .subcategories()
            .get(self.subcategory_cursor)
            .copied()
    }

    /// Index of the selected category within `Category::all()`
    pub fn category_index(&self) -> Option<usize> {
        let selected = self.draft.category?;
        Category::all().iter().position(|c| *c == selected)
    }
}

/// Chat assistant overlay state
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
    /// The assistant is composing a reply; input is disabled so messages
    /// can never interleave out of order
    pub awaiting_reply: bool,
}

/// A single chat transcript entry
///
/// Assistant replies are stored as localization keys so switching the
/// language re-translates the whole transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMessage {
    User(String),
    Assistant(&'static str),
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Dark color theme?
    pub dark_mode: bool,

    /// Interface language
    pub language: Language,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let tick_rate_ms = std::env::var("CIVIC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            dark_mode: true,
            language: Language::En,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Welcome,
            help_visible: false,
            session: None,
            auth: AuthFormState::default(),
            form: ReportFormState::default(),
            profile: None,
            history: Vec::new(),
            nearby: Vec::new(),
            chat: ChatState::default(),
            status: StatusBarState::default(),
            error: None,
            ui: UiConfig::default(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state seeded from the saved configuration
    pub fn from_config(config: &libciviclink::Config) -> Self {
        let mut state = Self::default();
        state.ui.dark_mode = config.ui.dark_mode;
        state.ui.language = config.ui.language;
        state
    }

    pub fn authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// A submission is currently in flight
    pub fn submitting(&self) -> bool {
        self.form.draft.state() == libciviclink::WizardState::Submitting
    }
}
