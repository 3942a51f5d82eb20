//! Mock identity store for testing
//!
//! This module provides a configurable mock store that can simulate
//! successes, failures, and delays. It's designed for use in integration
//! tests to verify submission and authentication logic without touching
//! a real database.

use async_trait::async_trait;
use secrecy::SecretString;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{Result, StoreError};
use crate::store::IdentityStore;
use crate::types::{
    NewReport, Profile, ProfileUpdate, ReportRecord, ReportStatus, Session, SignUpRequest,
    REPORT_REWARD_POINTS,
};

/// Configuration for mock store behavior
#[derive(Debug, Clone)]
pub struct MockStoreConfig {
    /// Whether sign-in and sign-up should succeed
    pub auth_succeeds: bool,

    /// Error to return on authentication failure
    pub auth_error: Option<String>,

    /// Delay before completing operations (simulates storage latency)
    pub delay: Duration,

    /// Errors to emit from `create_report`, one per attempt, before succeeding
    pub submit_errors: Arc<Mutex<VecDeque<StoreError>>>,

    /// Number of times sign_in has been called
    pub sign_in_call_count: Arc<Mutex<usize>>,

    /// Number of times create_report has been called
    pub create_report_call_count: Arc<Mutex<usize>>,
}

impl Default for MockStoreConfig {
    fn default() -> Self {
        Self {
            auth_succeeds: true,
            auth_error: None,
            delay: Duration::from_millis(0),
            submit_errors: Arc::new(Mutex::new(VecDeque::new())),
            sign_in_call_count: Arc::new(Mutex::new(0)),
            create_report_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// A profile with believable demo numbers
fn demo_profile() -> Profile {
    Profile {
        id: "profile-1".to_string(),
        user_id: "mock-user".to_string(),
        name: "Rajesh Kumar".to_string(),
        email: "rajesh@example.com".to_string(),
        national_id: "123456789012".to_string(),
        address: "12-4 Gandhi Nagar, Hyderabad".to_string(),
        photo_url: None,
        reward_points: 1250,
        problems_reported: 12,
        problems_solved: 8,
        rating: 4.2,
    }
}

/// Mock store for testing
pub struct MockStore {
    config: MockStoreConfig,
    profile: Mutex<Profile>,
    session: Mutex<Option<Session>>,
    reports: Mutex<Vec<ReportRecord>>,
}

impl MockStore {
    /// Create a new mock store with the given configuration
    pub fn new(config: MockStoreConfig) -> Self {
        Self {
            config,
            profile: Mutex::new(demo_profile()),
            session: Mutex::new(None),
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock store where everything succeeds
    pub fn success() -> Self {
        Self::new(MockStoreConfig::default())
    }

    /// Create a mock store with a specific profile behind it
    pub fn with_profile(profile: Profile) -> Self {
        let store = Self::success();
        *store.profile.lock().unwrap() = profile;
        store
    }

    /// Create a mock store that rejects all authentication
    pub fn auth_failure(error: &str) -> Self {
        Self::new(MockStoreConfig {
            auth_succeeds: false,
            auth_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock store whose next `create_report` calls fail with the
    /// given errors, in order, before succeeding
    pub fn submit_failures(errors: Vec<StoreError>) -> Self {
        let store = Self::success();
        *store.config.submit_errors.lock().unwrap() = errors.into();
        store
    }

    /// Create a mock store with a delay on every operation
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockStoreConfig {
            delay,
            ..Default::default()
        })
    }

    /// Get the number of times sign_in was called
    pub fn sign_in_call_count(&self) -> usize {
        *self.config.sign_in_call_count.lock().unwrap()
    }

    /// Get the number of times create_report was called
    pub fn create_report_call_count(&self) -> usize {
        *self.config.create_report_call_count.lock().unwrap()
    }

    /// All reports stored so far
    pub fn stored_reports(&self) -> Vec<ReportRecord> {
        self.reports.lock().unwrap().clone()
    }

    async fn simulate_delay(&self) {
        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }
    }

    fn auth_error(&self) -> StoreError {
        let message = self
            .config
            .auth_error
            .clone()
            .unwrap_or_else(|| "Mock authentication failed".to_string());
        StoreError::Authentication(message)
    }
}

#[async_trait]
impl IdentityStore for MockStore {
    async fn sign_up(&self, request: SignUpRequest) -> Result<Session> {
        self.simulate_delay().await;

        if !self.config.auth_succeeds {
            return Err(self.auth_error().into());
        }

        let session = {
            let mut profile = self.profile.lock().unwrap();
            profile.name = request.name;
            profile.email = request.email.to_lowercase();
            profile.national_id = request.national_id;
            profile.address = request.address;
            profile.reward_points = 0;
            profile.problems_reported = 0;
            profile.problems_solved = 0;

            Session {
                user_id: profile.user_id.clone(),
                email: profile.email.clone(),
            }
        };

        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_in(&self, identifier: &str, _password: &SecretString) -> Result<Session> {
        *self.config.sign_in_call_count.lock().unwrap() += 1;
        self.simulate_delay().await;

        if !self.config.auth_succeeds {
            return Err(self.auth_error().into());
        }

        let session = {
            let profile = self.profile.lock().unwrap();
            Session {
                user_id: profile.user_id.clone(),
                email: if identifier.contains('@') {
                    identifier.to_lowercase()
                } else {
                    profile.email.clone()
                },
            }
        };

        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn profile(&self, user_id: &str) -> Result<Profile> {
        self.simulate_delay().await;

        let profile = self.profile.lock().unwrap();
        if profile.user_id == user_id {
            Ok(profile.clone())
        } else {
            Err(StoreError::NotFound(format!("No profile for user {}", user_id)).into())
        }
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        self.simulate_delay().await;

        let mut profile = self.profile.lock().unwrap();
        if profile.user_id != user_id {
            return Err(StoreError::NotFound(format!("No profile for user {}", user_id)).into());
        }

        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(email) = update.email {
            profile.email = email.to_lowercase();
        }
        if let Some(address) = update.address {
            profile.address = address;
        }
        if let Some(photo_url) = update.photo_url {
            profile.photo_url = Some(photo_url);
        }

        Ok(profile.clone())
    }

    async fn create_report(&self, report: &NewReport) -> Result<ReportRecord> {
        *self.config.create_report_call_count.lock().unwrap() += 1;
        self.simulate_delay().await;

        if let Some(error) = self.config.submit_errors.lock().unwrap().pop_front() {
            return Err(error.into());
        }

        // Idempotent on the client-generated id, like the real store
        {
            let reports = self.reports.lock().unwrap();
            if let Some(existing) = reports.iter().find(|r| r.id == report.id) {
                return Ok(existing.clone());
            }
        }

        let now = chrono::Utc::now().timestamp();
        let record = ReportRecord {
            id: report.id.clone(),
            user_id: report.user_id.clone(),
            location: report.location.clone(),
            landmark: report.landmark.clone(),
            category: report.category,
            subcategory: report.subcategory,
            description: report.description.clone(),
            photos: report.photos.clone(),
            latitude: report.latitude,
            longitude: report.longitude,
            status: ReportStatus::Submitted,
            official_note: None,
            submitted_at: now,
            updated_at: now,
        };

        self.reports.lock().unwrap().push(record.clone());

        let mut profile = self.profile.lock().unwrap();
        if profile.user_id == report.user_id {
            profile.reward_points += REPORT_REWARD_POINTS;
            profile.problems_reported += 1;
        }

        Ok(record)
    }

    async fn reports_for(&self, user_id: &str) -> Result<Vec<ReportRecord>> {
        self.simulate_delay().await;

        let reports = self.reports.lock().unwrap();
        Ok(reports
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn nearby_reports(&self, limit: usize) -> Result<Vec<ReportRecord>> {
        self.simulate_delay().await;

        let reports = self.reports.lock().unwrap();
        Ok(reports
            .iter()
            .rev()
            .filter(|r| r.latitude.is_some() && r.longitude.is_some())
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Subcategory};

    fn sample_report(id: &str) -> NewReport {
        let mut report = NewReport::new("mock-user".to_string());
        report.id = id.to_string();
        report.landmark = "Near Metro".to_string();
        report.category = Category::RoadsTransport;
        report.subcategory = Subcategory::Potholes;
        report.description = "Large pothole blocking traffic for a week".to_string();
        report
    }

    #[tokio::test]
    async fn test_mock_sign_in_success() {
        let store = MockStore::success();
        let password = SecretString::from("whatever1".to_string());

        let session = store.sign_in("rajesh@example.com", &password).await.unwrap();
        assert_eq!(session.user_id, "mock-user");
        assert_eq!(store.sign_in_call_count(), 1);
        assert!(store.session().await.is_some());
    }

    #[tokio::test]
    async fn test_mock_auth_failure() {
        let store = MockStore::auth_failure("Invalid credentials");
        let password = SecretString::from("whatever1".to_string());

        let result = store.sign_in("rajesh@example.com", &password).await;
        assert!(result.is_err());
        assert_eq!(store.sign_in_call_count(), 1);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_mock_submit_failures_then_success() {
        let store = MockStore::submit_failures(vec![
            StoreError::Network("connection reset".to_string()),
            StoreError::Unavailable("busy".to_string()),
        ]);

        let report = sample_report("r-1");
        assert!(store.create_report(&report).await.is_err());
        assert!(store.create_report(&report).await.is_err());
        assert!(store.create_report(&report).await.is_ok());
        assert_eq!(store.create_report_call_count(), 3);
        assert_eq!(store.stored_reports().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_create_report_is_idempotent() {
        let store = MockStore::success();
        let report = sample_report("r-1");

        let first = store.create_report(&report).await.unwrap();
        let second = store.create_report(&report).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.stored_reports().len(), 1);

        let profile = store.profile("mock-user").await.unwrap();
        assert_eq!(profile.reward_points, REPORT_REWARD_POINTS);
        assert_eq!(profile.problems_reported, 1);
    }

    #[tokio::test]
    async fn test_mock_with_delay() {
        let store = MockStore::with_delay(Duration::from_millis(50));
        let password = SecretString::from("whatever1".to_string());

        let start = std::time::Instant::now();
        store.sign_in("rajesh@example.com", &password).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_mock_sign_up_resets_counters() {
        let store = MockStore::success();
        let session = store
            .sign_up(SignUpRequest {
                name: "Sita Devi".to_string(),
                email: "Sita@Example.com".to_string(),
                national_id: "234567890123".to_string(),
                address: "45 Lake View Road, Hyderabad".to_string(),
                password: SecretString::from("longenough".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(session.email, "sita@example.com");
        let profile = store.profile(&session.user_id).await.unwrap();
        assert_eq!(profile.name, "Sita Devi");
        assert_eq!(profile.reward_points, 0);
    }

    #[tokio::test]
    async fn test_mock_nearby_newest_first() {
        let store = MockStore::success();
        for id in ["r-1", "r-2", "r-3"] {
            let mut report = sample_report(id);
            report.latitude = Some(17.4);
            report.longitude = Some(78.5);
            store.create_report(&report).await.unwrap();
        }

        let nearby = store.nearby_reports(2).await.unwrap();
        assert_eq!(nearby.len(), 2);
        assert_eq!(nearby[0].id, "r-3");
        assert_eq!(nearby[1].id, "r-2");
    }

    #[tokio::test]
    async fn test_mock_nearby_skips_reports_without_coordinates() {
        let store = MockStore::success();
        let mut mapped = sample_report("mapped");
        mapped.latitude = Some(17.4);
        mapped.longitude = Some(78.5);
        store.create_report(&mapped).await.unwrap();
        store.create_report(&sample_report("unmapped")).await.unwrap();

        let nearby = store.nearby_reports(10).await.unwrap();
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].id, "mapped");
    }
}
