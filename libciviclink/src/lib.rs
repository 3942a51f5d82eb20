//! CivicLink - report civic issues from the terminal
//!
//! This library provides the core functionality behind the CivicLink TUI:
//! accounts and sessions, the report wizard, report storage with offline
//! seed data, and a canned-reply assistant.

pub mod config;
pub mod draft;
pub mod error;
pub mod localization;
pub mod logging;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use draft::{BackOutcome, ReportDraft, WizardState};
pub use error::{CivicError, Result, StoreError};
pub use store::IdentityStore;
pub use types::{Category, Profile, ReportRecord, ReportStatus, Session, Subcategory};
