//! Identity store abstraction and implementations
//!
//! This module provides a unified trait for account, profile, and report
//! persistence. The production implementation is backed by SQLite; a
//! configurable mock is available for tests that need to script failures
//! and delays without touching disk.
//!
//! # Examples
//!
//! ```no_run
//! use libciviclink::store::{IdentityStore, sqlite::SqliteStore};
//! use secrecy::SecretString;
//!
//! # async fn example() -> libciviclink::error::Result<()> {
//! let store = SqliteStore::new("~/.local/share/civiclink/civiclink.db").await?;
//!
//! let session = store
//!     .sign_in("rajesh@example.com", &SecretString::from("correct horse"))
//!     .await?;
//!
//! let profile = store.profile(&session.user_id).await?;
//! println!("{} has {} reward points", profile.name, profile.reward_points);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::Result;
use crate::types::{NewReport, Profile, ProfileUpdate, ReportRecord, Session, SignUpRequest};

pub mod sqlite;

// Mock store is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Store trait for account, profile, and report persistence
///
/// All state flows through this interface so the UI layer never touches
/// storage directly. Implementations own the active session.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Create an account and profile, then establish a session
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` when a field fails validation and
    /// `StoreError::Conflict` when the email or national id is already
    /// registered.
    async fn sign_up(&self, request: SignUpRequest) -> Result<Session>;

    /// Establish a session from an email or 12-digit national id
    ///
    /// A 12-digit identifier is resolved through the profile registry to
    /// its account email before the password check.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Authentication` when the identifier is unknown
    /// or the password does not match. The error never reveals which.
    async fn sign_in(&self, identifier: &str, password: &SecretString) -> Result<Session>;

    /// Drop the active session
    async fn sign_out(&self) -> Result<()>;

    /// The active session, if any
    async fn session(&self) -> Option<Session>;

    /// Fetch the profile for a user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when no profile exists for the id.
    async fn profile(&self, user_id: &str) -> Result<Profile>;

    /// Apply a partial profile update and return the stored result
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile>;

    /// Persist a completed report
    ///
    /// Idempotent on `report.id`: re-submitting the same report (as the
    /// retry loop does) returns the already-stored record without awarding
    /// reward points a second time.
    async fn create_report(&self, report: &NewReport) -> Result<ReportRecord>;

    /// All reports submitted by a user, newest first
    async fn reports_for(&self, user_id: &str) -> Result<Vec<ReportRecord>>;

    /// Recent reports from all users for the area map, newest first
    ///
    /// Only reports carrying coordinates qualify; the map cannot place the
    /// rest.
    async fn nearby_reports(&self, limit: usize) -> Result<Vec<ReportRecord>>;
}
