//! Report submission pipeline
//!
//! This module turns a completed report draft into a stored report, with
//! retry logic for transient store failures and progress events along the
//! way.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use super::events::{Event, EventBus};
use crate::draft::ReportDraft;
use crate::error::{CivicError, Result, StoreError};
use crate::store::IdentityStore;
use crate::types::{NewReport, ReportRecord, Session};

/// Submission service
///
/// The report id is generated once per draft and reused across retry
/// attempts, so the store can deduplicate attempts that raced a lost
/// acknowledgement.
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn IdentityStore>,
    event_bus: EventBus,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn IdentityStore>, event_bus: EventBus) -> Self {
        Self { store, event_bus }
    }

    /// Build the store-facing report from a completed draft
    ///
    /// # Errors
    ///
    /// Returns `CivicError::InvalidInput` when the draft has not satisfied
    /// every step guard.
    pub fn prepare(&self, draft: &ReportDraft, session: &Session) -> Result<NewReport> {
        if !draft.is_complete() {
            return Err(CivicError::InvalidInput(
                "report draft is missing required fields".to_string(),
            ));
        }
        let (Some(category), Some(subcategory)) = (draft.category, draft.subcategory) else {
            return Err(CivicError::InvalidInput(
                "report draft is missing a category".to_string(),
            ));
        };

        let mut report = NewReport::new(session.user_id.clone());
        report.location = draft.location.clone();
        report.landmark = draft.landmark.clone();
        report.category = category;
        report.subcategory = subcategory;
        report.description = draft.description.clone();
        report.photos = draft.photos.iter().map(|p| p.path.clone()).collect();
        Ok(report)
    }

    /// Submit a prepared report, emitting progress events
    ///
    /// # Errors
    ///
    /// Returns the final store error once retries are exhausted or a
    /// non-transient error occurs. A `SubmissionFailed` event carries the
    /// same message to subscribers.
    pub async fn submit(&self, report: NewReport) -> Result<ReportRecord> {
        let report_id = report.id.clone();

        self.event_bus.emit(Event::SubmissionStarted {
            report_id: report_id.clone(),
        });

        let total = report.photos.len();
        for index in 0..total {
            self.event_bus.emit(Event::SubmissionProgress {
                report_id: report_id.clone(),
                status: format!("Attaching photo {}/{}", index + 1, total),
            });
        }

        self.event_bus.emit(Event::SubmissionProgress {
            report_id: report_id.clone(),
            status: "Saving report...".to_string(),
        });

        match self.submit_with_retry(&report).await {
            Ok(record) => {
                self.event_bus.emit(Event::SubmissionCompleted { report_id });
                Ok(record)
            }
            Err(e) => {
                self.event_bus.emit(Event::SubmissionFailed {
                    report_id,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Store a report with retry logic and exponential backoff
    async fn submit_with_retry(&self, report: &NewReport) -> Result<ReportRecord> {
        let max_attempts = 3;

        for attempt in 1..=max_attempts {
            match self.store.create_report(report).await {
                Ok(record) => {
                    if attempt > 1 {
                        info!(
                            "Successfully stored report {} on attempt {}",
                            report.id, attempt
                        );
                    }
                    return Ok(record);
                }
                Err(e) => {
                    if is_transient_error(&e) && attempt < max_attempts {
                        let delay_secs = 2_u64.pow(attempt - 1);
                        warn!(
                            "Transient error storing report {} (attempt {}/{}): {}. Retrying in {}s...",
                            report.id, attempt, max_attempts, e, delay_secs
                        );
                        self.event_bus.emit(Event::SubmissionProgress {
                            report_id: report.id.clone(),
                            status: format!(
                                "Retrying in {}s (attempt {} of {})",
                                delay_secs,
                                attempt + 1,
                                max_attempts
                            ),
                        });
                        sleep(Duration::from_secs(delay_secs)).await;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(StoreError::Rejected(format!(
            "Failed to store report {} after {} attempts",
            report.id, max_attempts
        ))
        .into())
    }
}

/// Check if an error is transient and should be retried
fn is_transient_error(error: &CivicError) -> bool {
    match error {
        CivicError::Store(store_error) => store_error.is_transient(),
        _ => false,
    }
}
