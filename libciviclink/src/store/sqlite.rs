//! SQLite-backed identity store

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::store::IdentityStore;
use crate::types::{
    NewReport, Profile, ProfileUpdate, ReportRecord, ReportStatus, Session, SignUpRequest,
    REPORT_REWARD_POINTS,
};
use crate::validation;

pub struct SqliteStore {
    pool: SqlitePool,
    session: Mutex<Option<Session>>,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and run migrations
    pub async fn new(db_path: &str) -> Result<Self> {
        // Expand path and create parent directories
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create data directory: {}", e))
            })?;
        }

        // Use forward slashes for SQLite URL (works on both Windows and Unix)
        // Use mode=rwc to allow creating the database file if it doesn't exist
        let db_url = format!("sqlite://{}?mode=rwc", expanded_path.replace('\\', "/"));

        let pool = SqlitePool::connect(&db_url)
            .await
            .map_err(StoreError::from)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StoreError::from)?;

        let store = Self {
            pool,
            session: Mutex::new(None),
        };
        store.seed_area_reports().await?;

        Ok(store)
    }

    /// Seed a few area reports on a fresh database so the map and nearby
    /// views have content before the first citizen submits anything.
    async fn seed_area_reports(&self) -> std::result::Result<(), StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM reports")
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.get("count");
        if count > 0 {
            return Ok(());
        }

        let now = chrono::Utc::now().timestamp();
        let seeds: &[(&str, &str, &str, &str, f64, f64, &str, Option<&str>, i64)] = &[
            (
                "roads_transport",
                "potholes",
                "Deep pothole near the bus stop slowing traffic",
                "KPHB Phase 3",
                17.4932,
                78.3915,
                "under_review",
                None,
                3 * 86_400,
            ),
            (
                "water_sanitation",
                "garbage_collection",
                "Garbage not collected for four days, bins overflowing",
                "Madhapur Main Road",
                17.4483,
                78.3908,
                "work_assigned",
                None,
                2 * 86_400,
            ),
            (
                "electricity",
                "street_lights",
                "Street light out for a week, the stretch is dark at night",
                "Gandhi Nagar Park",
                17.4375,
                78.4483,
                "resolved",
                Some("Fixture replaced by field crew"),
                7 * 86_400,
            ),
        ];

        for (category, subcategory, description, landmark, lat, lng, status, note, age) in seeds {
            sqlx::query(
                r#"
                INSERT INTO reports
                    (id, user_id, location, landmark, category, subcategory, description,
                     photos, latitude, longitude, status, official_note, submitted_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, '[]', ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind("civic-demo")
            .bind("Hyderabad, Telangana")
            .bind(landmark)
            .bind(category)
            .bind(subcategory)
            .bind(description)
            .bind(lat)
            .bind(lng)
            .bind(status)
            .bind(note)
            .bind(now - age)
            .bind(now - age / 2)
            .execute(&self.pool)
            .await?;
        }

        debug!(count = seeds.len(), "seeded area reports");
        Ok(())
    }

    async fn fetch_report(&self, report_id: &str) -> std::result::Result<ReportRecord, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, location, landmark, category, subcategory, description,
                   photos, latitude, longitude, status, official_note, submitted_at, updated_at
            FROM reports WHERE id = ?
            "#,
        )
        .bind(report_id)
        .fetch_one(&self.pool)
        .await?;

        report_from_row(&row)
    }
}

/// Random 16-byte salt, base64-encoded for TEXT storage
fn generate_salt() -> String {
    let salt: [u8; 16] = rand::thread_rng().gen();
    BASE64.encode(salt)
}

/// Salted SHA-256 password digest, base64-encoded
fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    BASE64.encode(hasher.finalize())
}

// Same error for unknown identifier and wrong password
fn invalid_credentials() -> StoreError {
    StoreError::Authentication("invalid email/national id or password".to_string())
}

fn map_unique_conflict(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.message().contains("UNIQUE constraint failed") => {
            StoreError::Conflict("email or national id already registered".to_string())
        }
        _ => StoreError::from(e),
    }
}

fn validate_sign_up(request: &SignUpRequest) -> std::result::Result<(), StoreError> {
    if !validation::is_valid_name(&request.name) {
        return Err(StoreError::Validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    if !validation::is_valid_email(request.email.trim()) {
        return Err(StoreError::Validation("Invalid email address".to_string()));
    }
    if !validation::is_valid_national_id(request.national_id.trim()) {
        return Err(StoreError::Validation(
            "National id must be exactly 12 digits".to_string(),
        ));
    }
    if !validation::is_valid_address(&request.address) {
        return Err(StoreError::Validation(
            "Address must be at least 10 characters".to_string(),
        ));
    }
    if !validation::is_valid_password(request.password.expose_secret()) {
        return Err(StoreError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

fn profile_from_row(row: &SqliteRow) -> Profile {
    Profile {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        email: row.get("email"),
        national_id: row.get("national_id"),
        address: row.get("address"),
        photo_url: row.get("photo_url"),
        reward_points: row.get("reward_points"),
        problems_reported: row.get("problems_reported"),
        problems_solved: row.get("problems_solved"),
        rating: row.get("rating"),
    }
}

fn report_from_row(row: &SqliteRow) -> std::result::Result<ReportRecord, StoreError> {
    let photos: Vec<String> = serde_json::from_str(&row.get::<String, _>("photos"))
        .map_err(|e| StoreError::Storage(format!("Corrupt photo list: {}", e)))?;

    Ok(ReportRecord {
        id: row.get("id"),
        user_id: row.get("user_id"),
        location: row.get("location"),
        landmark: row.get("landmark"),
        category: row.get::<String, _>("category").parse().map_err(StoreError::Storage)?,
        subcategory: row
            .get::<String, _>("subcategory")
            .parse()
            .map_err(StoreError::Storage)?,
        description: row.get("description"),
        photos,
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        status: row.get::<String, _>("status").parse().map_err(StoreError::Storage)?,
        official_note: row.get("official_note"),
        submitted_at: row.get("submitted_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl IdentityStore for SqliteStore {
    async fn sign_up(&self, request: SignUpRequest) -> Result<Session> {
        validate_sign_up(&request)?;

        let email = request.email.trim().to_lowercase();
        let national_id = request.national_id.trim().to_string();
        let user_id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().timestamp();

        let salt = generate_salt();
        let digest = hash_password(request.password.expose_secret(), &salt);

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;

        sqlx::query(
            r#"
            INSERT INTO accounts (user_id, email, password_salt, password_digest, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&email)
        .bind(&salt)
        .bind(&digest)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_conflict)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, name, email, national_id, address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&user_id)
        .bind(request.name.trim())
        .bind(&email)
        .bind(&national_id)
        .bind(request.address.trim())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_conflict)?;

        tx.commit().await.map_err(StoreError::from)?;

        info!(user_id = %user_id, "account created");

        let session = Session { user_id, email };
        *self.session.lock().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_in(&self, identifier: &str, password: &SecretString) -> Result<Session> {
        let identifier = identifier.trim();

        // A 12-digit identifier is a national id; resolve it through the
        // profile registry. Anything else is treated as an email.
        let row = if validation::is_valid_national_id(identifier) {
            sqlx::query(
                r#"
                SELECT a.user_id, a.email, a.password_salt, a.password_digest
                FROM accounts a
                JOIN profiles p ON p.user_id = a.user_id
                WHERE p.national_id = ?
                "#,
            )
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query(
                r#"
                SELECT user_id, email, password_salt, password_digest
                FROM accounts WHERE email = ?
                "#,
            )
            .bind(identifier.to_lowercase())
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(StoreError::from)?;

        let row = row.ok_or_else(invalid_credentials)?;

        let salt: String = row.get("password_salt");
        let digest: String = row.get("password_digest");
        if hash_password(password.expose_secret(), &salt) != digest {
            return Err(invalid_credentials().into());
        }

        let session = Session {
            user_id: row.get("user_id"),
            email: row.get("email"),
        };
        debug!(user_id = %session.user_id, "session established");
        *self.session.lock().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.lock().await = None;
        Ok(())
    }

    async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    async fn profile(&self, user_id: &str) -> Result<Profile> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, email, national_id, address, photo_url,
                   reward_points, problems_reported, problems_solved, rating
            FROM profiles WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)?
        .ok_or_else(|| StoreError::NotFound(format!("No profile for user {}", user_id)))?;

        Ok(profile_from_row(&row))
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        if update.is_empty() {
            return self.profile(user_id).await;
        }

        if let Some(name) = &update.name {
            if !validation::is_valid_name(name) {
                return Err(StoreError::Validation(
                    "Name must be at least 2 characters".to_string(),
                )
                .into());
            }
        }
        if let Some(email) = &update.email {
            if !validation::is_valid_email(email.trim()) {
                return Err(StoreError::Validation("Invalid email address".to_string()).into());
            }
        }
        if let Some(address) = &update.address {
            if !validation::is_valid_address(address) {
                return Err(StoreError::Validation(
                    "Address must be at least 10 characters".to_string(),
                )
                .into());
            }
        }

        let mut profile = self.profile(user_id).await?;
        let email_changed = update.email.is_some();
        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            profile.email = email.trim().to_lowercase();
        }
        if let Some(address) = update.address {
            profile.address = address.trim().to_string();
        }
        if let Some(photo_url) = update.photo_url {
            profile.photo_url = Some(photo_url);
        }

        let now = chrono::Utc::now().timestamp();
        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;

        sqlx::query(
            r#"
            UPDATE profiles SET name = ?, email = ?, address = ?, photo_url = ?, updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.address)
        .bind(&profile.photo_url)
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_conflict)?;

        // The account email is the sign-in identifier; keep it in step
        if email_changed {
            sqlx::query("UPDATE accounts SET email = ? WHERE user_id = ?")
                .bind(&profile.email)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(map_unique_conflict)?;
        }

        tx.commit().await.map_err(StoreError::from)?;

        info!(user_id = %user_id, "profile updated");
        Ok(profile)
    }

    async fn create_report(&self, report: &NewReport) -> Result<ReportRecord> {
        let now = chrono::Utc::now().timestamp();
        let photos = serde_json::to_string(&report.photos)
            .map_err(|e| StoreError::Storage(format!("Failed to encode photo list: {}", e)))?;

        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;

        // INSERT OR IGNORE keeps retried submissions idempotent on the
        // client-generated id
        let inserted = sqlx::query(
            r#"
            INSERT OR IGNORE INTO reports
                (id, user_id, location, landmark, category, subcategory, description,
                 photos, latitude, longitude, status, submitted_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.id)
        .bind(&report.user_id)
        .bind(&report.location)
        .bind(&report.landmark)
        .bind(report.category.as_str())
        .bind(report.subcategory.as_str())
        .bind(&report.description)
        .bind(&photos)
        .bind(report.latitude)
        .bind(report.longitude)
        .bind(ReportStatus::Submitted.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::from)?;

        if inserted.rows_affected() == 0 {
            // Stored by an earlier attempt; no second reward
            tx.rollback().await.map_err(StoreError::from)?;
            debug!(report_id = %report.id, "report already stored");
            return Ok(self.fetch_report(&report.id).await?);
        }

        sqlx::query(
            r#"
            UPDATE profiles
            SET reward_points = reward_points + ?,
                problems_reported = problems_reported + 1,
                updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(REPORT_REWARD_POINTS)
        .bind(now)
        .bind(&report.user_id)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::from)?;

        tx.commit().await.map_err(StoreError::from)?;

        info!(report_id = %report.id, subcategory = %report.subcategory, "report stored");

        Ok(ReportRecord {
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
        })
    }

    async fn reports_for(&self, user_id: &str) -> Result<Vec<ReportRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, location, landmark, category, subcategory, description,
                   photos, latitude, longitude, status, official_note, submitted_at, updated_at
            FROM reports
            WHERE user_id = ?
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)?;

        let reports = rows
            .iter()
            .map(report_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(reports)
    }

    async fn nearby_reports(&self, limit: usize) -> Result<Vec<ReportRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, location, landmark, category, subcategory, description,
                   photos, latitude, longitude, status, official_note, submitted_at, updated_at
            FROM reports
            WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            ORDER BY submitted_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)?;

        let reports = rows
            .iter()
            .map(report_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(reports)
    }
}
