//! Core types for CivicLink

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of photo slots on a report
pub const MAX_PHOTOS: usize = 4;

/// Reward points granted for a newly submitted report
pub const REPORT_REWARD_POINTS: i64 = 50;

/// Fixed category taxonomy for civic issues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RoadsTransport,
    WaterSanitation,
    Electricity,
    PublicSafety,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::RoadsTransport,
            Category::WaterSanitation,
            Category::Electricity,
            Category::PublicSafety,
        ]
    }

    /// The subcategories belonging to this category
    pub fn subcategories(&self) -> &'static [Subcategory] {
        match self {
            Category::RoadsTransport => &[
                Subcategory::Potholes,
                Subcategory::BrokenTrafficLights,
                Subcategory::MissingSigns,
            ],
            Category::WaterSanitation => &[
                Subcategory::WaterLeakage,
                Subcategory::DrainageIssues,
                Subcategory::GarbageCollection,
            ],
            Category::Electricity => &[
                Subcategory::StreetLights,
                Subcategory::PowerOutage,
                Subcategory::DamagedPoles,
            ],
            Category::PublicSafety => &[
                Subcategory::UnsafeAreas,
                Subcategory::Vandalism,
                Subcategory::MissingSecurity,
            ],
        }
    }

    /// Localization key for the category name
    pub fn localization_key(&self) -> &'static str {
        match self {
            Category::RoadsTransport => "category_roads",
            Category::WaterSanitation => "category_water",
            Category::Electricity => "category_electricity",
            Category::PublicSafety => "category_safety",
        }
    }

    /// Stable token used for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::RoadsTransport => "roads_transport",
            Category::WaterSanitation => "water_sanitation",
            Category::Electricity => "electricity",
            Category::PublicSafety => "public_safety",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roads_transport" => Ok(Category::RoadsTransport),
            "water_sanitation" => Ok(Category::WaterSanitation),
            "electricity" => Ok(Category::Electricity),
            "public_safety" => Ok(Category::PublicSafety),
            _ => Err(format!("Unknown category: '{}'", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::RoadsTransport => "Roads & Transport",
            Category::WaterSanitation => "Water & Sanitation",
            Category::Electricity => "Electricity",
            Category::PublicSafety => "Public Safety",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    Potholes,
    BrokenTrafficLights,
    MissingSigns,
    WaterLeakage,
    DrainageIssues,
    GarbageCollection,
    StreetLights,
    PowerOutage,
    DamagedPoles,
    UnsafeAreas,
    Vandalism,
    MissingSecurity,
}

impl Subcategory {
    /// The category this subcategory belongs to
    pub fn category(&self) -> Category {
        match self {
            Subcategory::Potholes
            | Subcategory::BrokenTrafficLights
            | Subcategory::MissingSigns => Category::RoadsTransport,
            Subcategory::WaterLeakage
            | Subcategory::DrainageIssues
            | Subcategory::GarbageCollection => Category::WaterSanitation,
            Subcategory::StreetLights
            | Subcategory::PowerOutage
            | Subcategory::DamagedPoles => Category::Electricity,
            Subcategory::UnsafeAreas
            | Subcategory::Vandalism
            | Subcategory::MissingSecurity => Category::PublicSafety,
        }
    }

    /// Stable token used for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcategory::Potholes => "potholes",
            Subcategory::BrokenTrafficLights => "broken_traffic_lights",
            Subcategory::MissingSigns => "missing_signs",
            Subcategory::WaterLeakage => "water_leakage",
            Subcategory::DrainageIssues => "drainage_issues",
            Subcategory::GarbageCollection => "garbage_collection",
            Subcategory::StreetLights => "street_lights",
            Subcategory::PowerOutage => "power_outage",
            Subcategory::DamagedPoles => "damaged_poles",
            Subcategory::UnsafeAreas => "unsafe_areas",
            Subcategory::Vandalism => "vandalism",
            Subcategory::MissingSecurity => "missing_security",
        }
    }
}

impl std::str::FromStr for Subcategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potholes" => Ok(Subcategory::Potholes),
            "broken_traffic_lights" => Ok(Subcategory::BrokenTrafficLights),
            "missing_signs" => Ok(Subcategory::MissingSigns),
            "water_leakage" => Ok(Subcategory::WaterLeakage),
            "drainage_issues" => Ok(Subcategory::DrainageIssues),
            "garbage_collection" => Ok(Subcategory::GarbageCollection),
            "street_lights" => Ok(Subcategory::StreetLights),
            "power_outage" => Ok(Subcategory::PowerOutage),
            "damaged_poles" => Ok(Subcategory::DamagedPoles),
            "unsafe_areas" => Ok(Subcategory::UnsafeAreas),
            "vandalism" => Ok(Subcategory::Vandalism),
            "missing_security" => Ok(Subcategory::MissingSecurity),
            _ => Err(format!("Unknown subcategory: '{}'", s)),
        }
    }
}

impl std::fmt::Display for Subcategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Subcategory::Potholes => "Potholes",
            Subcategory::BrokenTrafficLights => "Broken Traffic Lights",
            Subcategory::MissingSigns => "Missing Signs",
            Subcategory::WaterLeakage => "Water Leakage",
            Subcategory::DrainageIssues => "Drainage Issues",
            Subcategory::GarbageCollection => "Garbage Collection",
            Subcategory::StreetLights => "Street Lights",
            Subcategory::PowerOutage => "Power Outage",
            Subcategory::DamagedPoles => "Damaged Poles",
            Subcategory::UnsafeAreas => "Unsafe Areas",
            Subcategory::Vandalism => "Vandalism",
            Subcategory::MissingSecurity => "Missing Security",
        };
        write!(f, "{}", name)
    }
}

/// Lifecycle of a submitted report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    UnderReview,
    WorkAssigned,
    Resolved,
}

impl ReportStatus {
    /// Position on the four-stage history timeline (0-based)
    pub fn stage_index(&self) -> usize {
        match self {
            ReportStatus::Submitted => 0,
            ReportStatus::UnderReview => 1,
            ReportStatus::WorkAssigned => 2,
            ReportStatus::Resolved => 3,
        }
    }

    pub fn localization_key(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "status_submitted",
            ReportStatus::UnderReview => "status_under_review",
            ReportStatus::WorkAssigned => "status_work_assigned",
            ReportStatus::Resolved => "status_resolved",
        }
    }

    /// Stable token used for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::UnderReview => "under_review",
            ReportStatus::WorkAssigned => "work_assigned",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ReportStatus::Submitted),
            "under_review" => Ok(ReportStatus::UnderReview),
            "work_assigned" => Ok(ReportStatus::WorkAssigned),
            "resolved" => Ok(ReportStatus::Resolved),
            _ => Err(format!("Unknown report status: '{}'", s)),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::WorkAssigned => "Work Assigned",
            ReportStatus::Resolved => "Resolved",
        };
        write!(f, "{}", name)
    }
}

/// A citizen's profile as stored by the identity store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub photo_url: Option<String>,
    pub reward_points: i64,
    pub problems_reported: i64,
    pub problems_solved: i64,
    pub rating: f64,
}

impl Profile {
    /// National id with all but the last four digits masked
    pub fn masked_national_id(&self) -> String {
        mask_national_id(&self.national_id)
    }
}

/// Mask a 12-digit national id as `****-****-XXXX`.
///
/// Shorter values are masked entirely.
pub fn mask_national_id(id: &str) -> String {
    if id.chars().count() >= 4 {
        let last4: String = id.chars().skip(id.chars().count() - 4).collect();
        format!("****-****-{}", last4)
    } else {
        "****-****-****".to_string()
    }
}

/// An authenticated session held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// Everything required to create an account
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub password: SecretString,
}

/// Partial profile update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.photo_url.is_none()
    }
}

/// Supported image MIME types for report photos
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Gif,
    WebP,
}

impl ImageMimeType {
    /// Detect MIME type from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detect MIME type from a file path's extension
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = std::path::Path::new(path).extension()?.to_str()?;
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }
}

impl std::fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A photo slot on a report draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoAttachment {
    /// Path to the image file on disk
    pub path: String,
    pub mime_type: ImageMimeType,
}

impl PhotoAttachment {
    /// Build an attachment from a path, rejecting unknown image extensions
    pub fn from_path(path: &str) -> Option<Self> {
        let mime_type = ImageMimeType::from_path(path)?;
        Some(Self {
            path: path.to_string(),
            mime_type,
        })
    }
}

/// A completed report handed to the store for persistence.
///
/// `id` is generated client-side before the first submission attempt and
/// reused across retries, making `create_report` idempotent.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub id: String,
    pub user_id: String,
    pub location: String,
    pub landmark: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub description: String,
    pub photos: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewReport {
    pub fn new(user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            location: String::new(),
            landmark: String::new(),
            category: Category::RoadsTransport,
            subcategory: Subcategory::Potholes,
            description: String::new(),
            photos: Vec::new(),
            latitude: None,
            longitude: None,
        }
    }
}

/// A stored report as read back from the store
#[derive(Debug, Clone)]
pub struct ReportRecord {
    pub id: String,
    pub user_id: String,
    pub location: String,
    pub landmark: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub description: String,
    pub photos: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: ReportStatus,
    pub official_note: Option<String>,
    pub submitted_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subcategory_belongs_to_its_category() {
        for category in Category::all() {
            for subcategory in category.subcategories() {
                assert_eq!(subcategory.category(), *category);
            }
        }
    }

    #[test]
    fn test_taxonomy_is_three_per_category() {
        for category in Category::all() {
            assert_eq!(category.subcategories().len(), 3);
        }
    }

    #[test]
    fn test_taxonomy_has_twelve_distinct_subcategories() {
        let mut seen = Vec::new();
        for category in Category::all() {
            for subcategory in category.subcategories() {
                assert!(!seen.contains(subcategory), "duplicate {:?}", subcategory);
                seen.push(*subcategory);
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::RoadsTransport.to_string(), "Roads & Transport");
        assert_eq!(Category::WaterSanitation.to_string(), "Water & Sanitation");
        assert_eq!(Category::Electricity.to_string(), "Electricity");
        assert_eq!(Category::PublicSafety.to_string(), "Public Safety");
    }

    #[test]
    fn test_subcategory_display_names() {
        assert_eq!(Subcategory::Potholes.to_string(), "Potholes");
        assert_eq!(
            Subcategory::BrokenTrafficLights.to_string(),
            "Broken Traffic Lights"
        );
        assert_eq!(Subcategory::GarbageCollection.to_string(), "Garbage Collection");
    }

    #[test]
    fn test_status_stage_order() {
        assert_eq!(ReportStatus::Submitted.stage_index(), 0);
        assert_eq!(ReportStatus::UnderReview.stage_index(), 1);
        assert_eq!(ReportStatus::WorkAssigned.stage_index(), 2);
        assert_eq!(ReportStatus::Resolved.stage_index(), 3);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ReportStatus::UnderReview).unwrap();
        assert_eq!(json, r#""under_review""#);

        let back: ReportStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReportStatus::UnderReview);
    }

    #[test]
    fn test_storage_tokens_round_trip() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
            for subcategory in category.subcategories() {
                assert_eq!(
                    subcategory.as_str().parse::<Subcategory>().unwrap(),
                    *subcategory
                );
            }
        }
        for status in [
            ReportStatus::Submitted,
            ReportStatus::UnderReview,
            ReportStatus::WorkAssigned,
            ReportStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ReportStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!("pothole".parse::<Subcategory>().is_err());
        assert!("Submitted".parse::<ReportStatus>().is_err());
        assert!("roads".parse::<Category>().is_err());
    }

    #[test]
    fn test_new_report_generates_uuid() {
        let report = NewReport::new("user-1".to_string());
        assert!(uuid::Uuid::parse_str(&report.id).is_ok());

        let other = NewReport::new("user-1".to_string());
        assert_ne!(report.id, other.id);
    }

    #[test]
    fn test_mask_national_id() {
        assert_eq!(mask_national_id("123456789012"), "****-****-9012");
        assert_eq!(mask_national_id("9012"), "****-****-9012");
        assert_eq!(mask_national_id("12"), "****-****-****");
        assert_eq!(mask_national_id(""), "****-****-****");
    }

    #[test]
    fn test_profile_masked_national_id() {
        let profile = Profile {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: "rajesh@example.com".to_string(),
            national_id: "123456789012".to_string(),
            address: "12-4 Gandhi Nagar, Hyderabad".to_string(),
            photo_url: None,
            reward_points: 1250,
            problems_reported: 12,
            problems_solved: 8,
            rating: 4.2,
        };
        assert_eq!(profile.masked_national_id(), "****-****-9012");
    }

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(ImageMimeType::from_extension("jpg"), Some(ImageMimeType::Jpeg));
        assert_eq!(ImageMimeType::from_extension("JPEG"), Some(ImageMimeType::Jpeg));
        assert_eq!(ImageMimeType::from_extension("png"), Some(ImageMimeType::Png));
        assert_eq!(ImageMimeType::from_extension("webp"), Some(ImageMimeType::WebP));
        assert_eq!(ImageMimeType::from_extension("pdf"), None);
    }

    #[test]
    fn test_image_mime_from_path() {
        assert_eq!(
            ImageMimeType::from_path("/tmp/photos/pothole.jpg"),
            Some(ImageMimeType::Jpeg)
        );
        assert_eq!(ImageMimeType::from_path("/tmp/notes.txt"), None);
        assert_eq!(ImageMimeType::from_path("no_extension"), None);
    }

    #[test]
    fn test_photo_attachment_from_path() {
        let photo = PhotoAttachment::from_path("site.png").unwrap();
        assert_eq!(photo.mime_type, ImageMimeType::Png);
        assert_eq!(photo.path, "site.png");

        assert!(PhotoAttachment::from_path("document.docx").is_none());
    }

    #[test]
    fn test_profile_update_is_empty() {
        assert!(ProfileUpdate::default().is_empty());

        let update = ProfileUpdate {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
