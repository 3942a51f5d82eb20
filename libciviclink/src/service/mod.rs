//! Service layer for CivicLink
//!
//! This module provides a clean, testable API for business logic that can be
//! consumed by multiple interfaces (TUI today, others later) without code
//! duplication.
//!
//! # Architecture
//!
//! The service layer follows a facade pattern with `CivicService` as the
//! main entry point, coordinating specialized sub-services:
//!
//! - `SubmissionService`: Turns completed drafts into stored reports with
//!   retry logic
//! - `ChatService`: Canned-reply assistant over a keyword table
//! - `EventBus`: Progress event distribution
//!
//! Account and report storage sits behind the [`IdentityStore`] trait, so
//! the whole layer runs against the SQLite store in production and the mock
//! store in tests.
//!
//! # Example
//!
//! ```no_run
//! use libciviclink::service::CivicService;
//! use secrecy::SecretString;
//!
//! # async fn example() -> libciviclink::Result<()> {
//! let service = CivicService::new().await?;
//!
//! let session = service
//!     .store()
//!     .sign_in(
//!         "rajesh@example.com",
//!         &SecretString::from("hunter2hunter2".to_string()),
//!     )
//!     .await?;
//!
//! let reports = service.store().reports_for(&session.user_id).await?;
//! println!("You have filed {} reports", reports.len());
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod events;
pub mod submission;

// Re-export commonly used types
pub use events::Event;

use self::chat::ChatService;
use self::events::EventBus;
use self::submission::SubmissionService;
use crate::config::Config;
use crate::error::Result;
use crate::store::sqlite::SqliteStore;
use crate::store::IdentityStore;
use std::sync::Arc;

/// Main service facade that coordinates all sub-services
///
/// `CivicService` provides a single entry point for all service operations,
/// managing shared resources (store, config) and providing access to
/// specialized sub-services.
///
/// # Shared State
///
/// All sub-services share the same `Arc<dyn IdentityStore>` and
/// `Arc<Config>` instances, enabling efficient concurrent access without
/// duplication.
pub struct CivicService {
    store: Arc<dyn IdentityStore>,
    config: Arc<Config>,
    submission: SubmissionService,
    chat: ChatService,
    event_bus: EventBus,
}

impl CivicService {
    /// Create a new service with default configuration
    ///
    /// Loads configuration from the default location, falling back to
    /// built-in defaults when no config file exists yet, then opens the
    /// SQLite store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or its migrations
    /// fail.
    pub async fn new() -> Result<Self> {
        let config = Config::load_or_default();
        Self::from_config(config).await
    }

    /// Create a service with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or its migrations
    /// fail.
    pub async fn from_config(config: Config) -> Result<Self> {
        let store = SqliteStore::new(&config.database.resolve_path()).await?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Create a service over an existing store implementation
    ///
    /// Tests and demos use this with [`MockStore`](crate::store::mock::MockStore).
    pub fn with_store(store: Arc<dyn IdentityStore>, config: Config) -> Self {
        let config = Arc::new(config);
        let event_bus = EventBus::new(100);

        // Create sub-services with shared state
        let submission = SubmissionService::new(Arc::clone(&store), event_bus.clone());
        let chat = ChatService::default();

        Self {
            store,
            config,
            submission,
            chat,
            event_bus,
        }
    }

    /// Access the identity store directly
    ///
    /// Authentication, profile and report queries go straight to the store;
    /// only submission needs the service layer's retry and events.
    pub fn store(&self) -> &Arc<dyn IdentityStore> {
        &self.store
    }

    /// Access the submission service
    pub fn submission(&self) -> &SubmissionService {
        &self.submission
    }

    /// Access the chat assistant
    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    /// The configuration the service was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Subscribe to service events
    ///
    /// Returns a receiver that will receive progress events from service
    /// operations. Multiple subscribers are supported.
    pub fn subscribe(&self) -> events::EventReceiver {
        self.event_bus.subscribe()
    }
}
