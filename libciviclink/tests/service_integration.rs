//! Integration tests for CivicService
//!
//! Tests the service layer as a whole over a real SQLite database,
//! including interactions between the store, submission pipeline, and
//! event bus.

use libciviclink::draft::ReportDraft;
use libciviclink::service::{CivicService, Event};
use libciviclink::types::{
    Category, PhotoAttachment, ProfileUpdate, SignUpRequest, Subcategory, REPORT_REWARD_POINTS,
};
use libciviclink::Config;
use secrecy::SecretString;
use tempfile::TempDir;

/// Setup test service with temporary database
async fn setup_test_service() -> (CivicService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let config = Config {
        database: libciviclink::config::DatabaseConfig {
            path: db_path.to_str().unwrap().to_string(),
        },
        ui: libciviclink::config::UiConfig {
            dark_mode: true,
            language: libciviclink::localization::Language::En,
        },
    };

    let service = CivicService::from_config(config).await.unwrap();

    (service, temp_dir)
}

fn sign_up_request() -> SignUpRequest {
    SignUpRequest {
        name: "Rajesh Kumar".to_string(),
        email: "rajesh@example.com".to_string(),
        national_id: "123456789012".to_string(),
        address: "12-4 Gandhi Road, Ward 7".to_string(),
        password: SecretString::from("hunter2hunter2".to_string()),
    }
}

fn complete_draft() -> ReportDraft {
    let mut draft = ReportDraft::new();
    draft.set_location("Hyderabad, Telangana");
    draft.set_landmark("Near Metro Pillar 117");
    draft.select_category(Category::RoadsTransport);
    draft.select_subcategory(Subcategory::Potholes);
    draft.set_description("Deep pothole slowing down traffic every morning");
    draft.add_photo(PhotoAttachment::from_path("pothole.jpg").unwrap());
    draft
}

#[tokio::test]
async fn test_service_initialization() {
    let (_service, _temp_dir) = setup_test_service().await;

    // If we got here, the store opened and migrations ran
}

#[tokio::test]
async fn test_service_accessor_methods() {
    let (service, _temp_dir) = setup_test_service().await;

    let _submission = service.submission();
    let _chat = service.chat();
    let _store = service.store();
    assert!(service.config().ui.dark_mode);

    let mut _receiver = service.subscribe();
}

#[tokio::test]
async fn test_sign_up_then_sign_in_by_email_and_national_id() {
    let (service, _temp_dir) = setup_test_service().await;

    let session = service.store().sign_up(sign_up_request()).await.unwrap();
    assert_eq!(session.email, "rajesh@example.com");

    service.store().sign_out().await.unwrap();
    assert!(service.store().session().await.is_none());

    // Email sign-in
    let password = SecretString::from("hunter2hunter2".to_string());
    let by_email = service
        .store()
        .sign_in("rajesh@example.com", &password)
        .await
        .unwrap();
    assert_eq!(by_email.user_id, session.user_id);

    // A 12-digit identifier resolves through the profile registry
    let by_national_id = service
        .store()
        .sign_in("123456789012", &password)
        .await
        .unwrap();
    assert_eq!(by_national_id.user_id, session.user_id);

    // Wrong password fails without revealing which part was wrong
    let wrong = SecretString::from("not the password".to_string());
    assert!(service
        .store()
        .sign_in("rajesh@example.com", &wrong)
        .await
        .is_err());
}

#[tokio::test]
async fn test_profile_read_and_update() {
    let (service, _temp_dir) = setup_test_service().await;
    let session = service.store().sign_up(sign_up_request()).await.unwrap();

    let profile = service.store().profile(&session.user_id).await.unwrap();
    assert_eq!(profile.name, "Rajesh Kumar");
    assert_eq!(profile.reward_points, 0);
    assert_eq!(profile.problems_reported, 0);

    let update = ProfileUpdate {
        address: Some("5-1 Nehru Street, Ward 2".to_string()),
        ..Default::default()
    };
    let updated = service
        .store()
        .update_profile(&session.user_id, update)
        .await
        .unwrap();
    assert_eq!(updated.address, "5-1 Nehru Street, Ward 2");
    // Untouched fields survive
    assert_eq!(updated.email, "rajesh@example.com");
}

#[tokio::test]
async fn test_submission_through_facade() {
    let (service, _temp_dir) = setup_test_service().await;
    let session = service.store().sign_up(sign_up_request()).await.unwrap();

    let report = service
        .submission()
        .prepare(&complete_draft(), &session)
        .unwrap();
    let stored = service.submission().submit(report).await.unwrap();

    assert_eq!(stored.landmark, "Near Metro Pillar 117");

    // One report filed, reward awarded once
    let profile = service.store().profile(&session.user_id).await.unwrap();
    assert_eq!(profile.problems_reported, 1);
    assert_eq!(profile.reward_points, REPORT_REWARD_POINTS);

    let history = service.store().reports_for(&session.user_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, stored.id);
}

#[tokio::test]
async fn test_resubmission_is_idempotent() {
    let (service, _temp_dir) = setup_test_service().await;
    let session = service.store().sign_up(sign_up_request()).await.unwrap();

    let report = service
        .submission()
        .prepare(&complete_draft(), &session)
        .unwrap();

    // The retry loop may hand the same prepared report to the store twice
    let first = service.submission().submit(report.clone()).await.unwrap();
    let second = service.submission().submit(report).await.unwrap();
    assert_eq!(first.id, second.id);

    let profile = service.store().profile(&session.user_id).await.unwrap();
    assert_eq!(profile.problems_reported, 1);
    assert_eq!(profile.reward_points, REPORT_REWARD_POINTS);
}

#[tokio::test]
async fn test_incomplete_draft_rejected_before_storage() {
    let (service, _temp_dir) = setup_test_service().await;
    let session = service.store().sign_up(sign_up_request()).await.unwrap();

    let mut draft = ReportDraft::new();
    draft.set_landmark("Somewhere");
    assert!(service.submission().prepare(&draft, &session).is_err());
}

#[tokio::test]
async fn test_submission_emits_lifecycle_events() {
    let (service, _temp_dir) = setup_test_service().await;
    let session = service.store().sign_up(sign_up_request()).await.unwrap();

    let mut receiver = service.subscribe();

    let report = service
        .submission()
        .prepare(&complete_draft(), &session)
        .unwrap();
    let expected_id = report.id.clone();
    service.submission().submit(report).await.unwrap();

    let mut saw_started = false;
    let mut saw_completed = false;
    while let Ok(event) = receiver.try_recv() {
        assert_eq!(event.report_id(), expected_id);
        match event {
            Event::SubmissionStarted { .. } => saw_started = true,
            Event::SubmissionCompleted { .. } => saw_completed = true,
            _ => {}
        }
    }
    assert!(saw_started);
    assert!(saw_completed);
}

#[tokio::test]
async fn test_nearby_reports_seeded_on_fresh_database() {
    let (service, _temp_dir) = setup_test_service().await;

    // A fresh database carries demo area reports so the map has content
    let nearby = service.store().nearby_reports(10).await.unwrap();
    assert_eq!(nearby.len(), 3);
    assert!(nearby.iter().all(|r| r.latitude.is_some()));

    // The limit is honored
    let limited = service.store().nearby_reports(2).await.unwrap();
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
async fn test_chat_assistant_keyword_replies() {
    let (service, _temp_dir) = setup_test_service().await;

    let reply = service.chat().ask("There is a huge pothole on my street");
    assert_eq!(reply, "chat_reply_pothole");

    // Unknown topics fall back to the default reply
    let fallback = service.chat().ask("zzz unrelated question");
    assert_eq!(fallback, "chat_default_reply");
}
