//! Service layer adapter for TUI
//!
//! This module provides an adapter between the async CivicService and the
//! synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: Wraps CivicService and manages a tokio runtime
//! - Quick local reads (profile, history, nearby): `block_on`, cheap SQLite
//! - Authentication and submission: spawned tasks reporting back over
//!   crossbeam channels the event loop can poll without blocking
//! - Submission progress: the service EventBus is bridged to a crossbeam
//!   channel, filtered down to the one in-flight report

use crossbeam_channel::{unbounded, Receiver};
use std::sync::Arc;
use std::time::Duration;

use libciviclink::config::Config;
use libciviclink::draft::ReportDraft;
use libciviclink::service::{CivicService, Event};
use libciviclink::types::{Profile, ReportRecord, Session, SignUpRequest};
use libciviclink::IdentityStore;
use secrecy::SecretString;

use crate::error::{Result, TuiError};

/// Simulated assistant typing delay before a chat reply appears
const CHAT_TYPING_DELAY: Duration = Duration::from_millis(600);

/// Outcome of an authentication attempt, sent back over a channel
pub type AuthOutcome = std::result::Result<Session, String>;

/// Service handle for TUI operations
///
/// Wraps CivicService and provides sync/async bridges for the TUI event
/// loop. Uses a tokio runtime to handle async operations without blocking
/// the UI.
pub struct ServiceHandle {
    service: Arc<CivicService>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a new service handle with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the tokio runtime
    /// cannot be created.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let service = runtime.block_on(CivicService::new())?;

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// Create a service handle over an existing store (tests, demos)
    pub fn with_store(store: Arc<dyn IdentityStore>, config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let service = CivicService::with_store(store, config);

        Ok(Self {
            service: Arc::new(service),
            runtime,
        })
    }

    /// The configuration the service was created with
    pub fn config(&self) -> Config {
        self.service.config().clone()
    }

    /// Sign in with an email or 12-digit national id
    ///
    /// Spawns the store call and returns a channel carrying the outcome.
    pub fn sign_in(&self, identifier: String, password: String) -> Receiver<AuthOutcome> {
        let (tx, rx) = unbounded();
        let service = Arc::clone(&self.service);

        self.runtime.spawn(async move {
            let password = SecretString::from(password);
            let outcome = service
                .store()
                .sign_in(&identifier, &password)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(outcome);
        });

        rx
    }

    /// Create an account, establishing a session on success
    pub fn sign_up(&self, request: SignUpRequest) -> Receiver<AuthOutcome> {
        let (tx, rx) = unbounded();
        let service = Arc::clone(&self.service);

        self.runtime.spawn(async move {
            let outcome = service
                .store()
                .sign_up(request)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(outcome);
        });

        rx
    }

    /// Drop the active session
    pub fn sign_out(&self) {
        let result = self.runtime.block_on(self.service.store().sign_out());
        if let Err(e) = result {
            tracing::warn!("sign out failed: {}", e);
        }
    }

    /// Fetch the profile for the signed-in user
    pub fn load_profile(&self, user_id: &str) -> Result<Profile> {
        Ok(self.runtime.block_on(self.service.store().profile(user_id))?)
    }

    /// Fetch the user's own reports, newest first
    pub fn load_history(&self, user_id: &str) -> Result<Vec<ReportRecord>> {
        Ok(self
            .runtime
            .block_on(self.service.store().reports_for(user_id))?)
    }

    /// Fetch recent reports across the area for the map screen
    pub fn load_nearby(&self, limit: usize) -> Result<Vec<ReportRecord>> {
        Ok(self
            .runtime
            .block_on(self.service.store().nearby_reports(limit))?)
    }

    /// Submit a completed report draft
    ///
    /// Prepares the store-facing report synchronously (this is where the
    /// draft's completeness precondition is checked), then spawns the
    /// submission pipeline. Returns the client-generated report id and a
    /// receiver carrying this submission's progress events; the final
    /// event is `SubmissionCompleted` or `SubmissionFailed`.
    pub fn submit(
        &self,
        draft: &ReportDraft,
        session: &Session,
    ) -> Result<(String, Receiver<Event>)> {
        let report = self.service.submission().prepare(draft, session)?;
        let report_id = report.id.clone();

        let (tx, rx) = unbounded();
        let service = Arc::clone(&self.service);

        // Bridge the broadcast bus to the caller's channel, keeping only
        // this report's events
        let mut event_rx = self.service.subscribe();
        let id_filter = report_id.clone();
        self.runtime.spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        if event.report_id() != id_filter {
                            continue;
                        }
                        let done = matches!(
                            event,
                            Event::SubmissionCompleted { .. } | Event::SubmissionFailed { .. }
                        );
                        if tx.send(event).is_err() || done {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("submission event receiver lagged, skipped {}", skipped);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        self.runtime.spawn(async move {
            // The failure event is emitted by the pipeline itself
            if let Err(e) = service.submission().submit(report).await {
                tracing::warn!("submission failed: {}", e);
            }
        });

        Ok((report_id, rx))
    }

    /// Ask the chat assistant a question
    ///
    /// The reply key is resolved immediately but delivered after a short
    /// typing delay so the overlay reads like a remote assistant.
    pub fn ask_chat(&self, message: String) -> Receiver<&'static str> {
        let (tx, rx) = unbounded();
        let reply = self.service.chat().ask(&message);

        self.runtime.spawn(async move {
            tokio::time::sleep(CHAT_TYPING_DELAY).await;
            let _ = tx.send(reply);
        });

        rx
    }

    /// Persist changed UI settings to the config file
    pub fn save_settings(
        &self,
        dark_mode: bool,
        language: libciviclink::localization::Language,
    ) -> Result<()> {
        let mut config = self.config();
        config.ui.dark_mode = dark_mode;
        config.ui.language = language;
        config.save().map_err(TuiError::Service)?;
        Ok(())
    }
}
