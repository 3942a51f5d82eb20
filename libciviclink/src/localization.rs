//! Localized strings for the user interface
//!
//! Static English/Hindi/Telugu tables with an English fallback chain:
//! requested language, then English, then the key itself. Keys that only
//! exist in English (error messages, chat replies) resolve through the
//! fallback rather than holding machine-translated filler.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Te,
}

impl Language {
    /// All supported languages, in settings-screen order
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Te]
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// The language's name in itself, for the settings screen
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Te => "తెలుగు",
        }
    }

    /// The next language in settings-screen order, wrapping around
    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::Te,
            Language::Te => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "te" => Ok(Language::Te),
            _ => Err(format!(
                "Unknown language: '{}'. Valid options: en, hi, te",
                s
            )),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

struct Entry {
    en: &'static str,
    hi: Option<&'static str>,
    te: Option<&'static str>,
}

macro_rules! entry {
    ($en:expr, $hi:expr, $te:expr) => {
        Entry {
            en: $en,
            hi: Some($hi),
            te: Some($te),
        }
    };
    ($en:expr) => {
        Entry {
            en: $en,
            hi: None,
            te: None,
        }
    };
}

lazy_static! {
    static ref TRANSLATIONS: HashMap<&'static str, Entry> = {
        let mut t = HashMap::new();

        // Navigation
        t.insert("home", entry!("Home", "होम", "హోమ్"));
        t.insert("welcome_back", entry!("Welcome Back", "वापसी पर स्वागत", "తిరిగి స్వాగతం"));
        t.insert(
            "ready_to_help",
            entry!(
                "Ready to make Telangana better?",
                "तेलंगाना को बेहतर बनाने के लिए तैयार?",
                "తెలంగాణను మెరుగుపరచడానికి సిద్ధంగా ఉన్నారా?"
            ),
        );
        t.insert("settings", entry!("Settings", "सेटिंग्स", "సెట్టింగులు"));
        t.insert(
            "report_problem",
            entry!("Report a Problem", "समस्या की रिपोर्ट करें", "సమస్యను నివేదించండి"),
        );
        t.insert(
            "view_reports",
            entry!("View My Reports", "मेरी रिपोर्ट देखें", "నా నివేదికలను చూడండి"),
        );
        t.insert("history", entry!("History", "इतिहास", "చరిత్ర"));
        t.insert("map", entry!("Map", "नक्शा", "మ్యాప్"));
        t.insert("sign_out", entry!("Sign Out", "साइन आउट", "సైన్ అవుట్"));

        // Authentication
        t.insert("sign_in", entry!("Sign In", "साइन इन", "సైన్ ఇన్"));
        t.insert("sign_up", entry!("Sign Up", "साइन अप", "సైన్ అప్"));
        t.insert("create_account", entry!("Create Account", "खाता बनाएं", "ఖాతా సృష్టించండి"));
        t.insert(
            "sign_in_continue",
            entry!("Sign in to continue", "जारी रखने के लिए साइन इन करें", "కొనసాగించడానికి సైన్ ఇన్ చేయండి"),
        );
        t.insert(
            "join_community",
            entry!("Join the CivicLink community", "CivicLink समुदाय में शामिल हों", "CivicLink కమ్యూనిటీలో చేరండి"),
        );
        t.insert("full_name", entry!("Full Name", "पूरा नाम", "పూర్తి పేరు"));
        t.insert("address", entry!("Address", "पता", "చిరునామా"));
        t.insert("email_address", entry!("Email Address", "ईमेल पता", "ఇమెయిల్ చిరునామా"));
        t.insert("national_id", entry!("Aadhaar Number", "आधार संख्या", "ఆధార్ నంబర్"));
        t.insert(
            "email_or_national_id",
            entry!("Email or Aadhaar", "ईमेल या आधार", "ఇమెయిల్ లేదా ఆధార్"),
        );
        t.insert("password", entry!("Password", "पासवर्ड", "పాస్వర్డ్"));
        t.insert("already_account", entry!("Already have an account?", "पहले से खाता है?", "ఇప్పటికే ఖాతా ఉందా?"));
        t.insert("no_account", entry!("Don't have an account?", "खाता नहीं है?", "ఖాతా లేదా?"));
        t.insert("signing_in", entry!("Signing in..."));
        t.insert("creating_account", entry!("Creating account..."));

        // Authentication errors (English only, resolved via fallback)
        t.insert("invalid_credentials", entry!("Invalid email/Aadhaar or password"));
        t.insert("confirm_email", entry!("Please check your email and confirm your account"));
        t.insert("account_exists", entry!("An account with this email or Aadhaar already exists"));

        // Field validation errors
        t.insert("error_national_id", entry!("Aadhaar number must be exactly 12 digits"));
        t.insert("error_email", entry!("Enter a valid email address"));
        t.insert("error_mobile", entry!("Mobile number must be exactly 10 digits"));
        t.insert("error_password", entry!("Password must be at least 8 characters"));
        t.insert("error_name", entry!("Name must be at least 2 characters"));
        t.insert("error_address", entry!("Address must be at least 10 characters"));
        t.insert("error_description", entry!("Description must be at least 10 characters"));

        // Profile
        t.insert("profile_details", entry!("Profile details", "प्रोफ़ाइल विवरण", "ప్రొఫైల్ వివరాలు"));
        t.insert("reward_points", entry!("Reward Points", "रिवार्ड पॉइंट्स", "రివార్డ్ పాయింట్లు"));
        t.insert("reported", entry!("Reported", "रिपोर्ट की गई", "నివేదించబడింది"));
        t.insert("solved", entry!("Solved", "हल की गई", "పరిష్కరించబడింది"));
        t.insert("rating", entry!("Rating", "रेटिंग", "రేటింగ్"));

        // Settings
        t.insert("other_settings", entry!("Other settings", "अन्य सेटिंग्स", "ఇతర సెట్టింగులు"));
        t.insert("dark_mode", entry!("Dark mode", "डार्क मोड", "డార్క్ మోడ్"));
        t.insert("language", entry!("Language", "भाषा", "భాష"));
        t.insert("help_faq", entry!("Help/FAQ", "सहायता/FAQ", "సహాయం/FAQ"));

        // Report wizard
        t.insert("location", entry!("Location", "स्थान", "స్థానం"));
        t.insert("landmark", entry!("Nearby Landmark"));
        t.insert("select_category", entry!("Select Category", "श्रेणी चुनें", "వర్గాన్ని ఎంచుకోండి"));
        t.insert(
            "describe_problem",
            entry!("Describe the problem", "समस्या का वर्णन करें", "సమస్యను వివరించండి"),
        );
        t.insert("add_photos", entry!("Add Photos", "फोटो जोड़ें", "ఫోటోలను జోడించండి"));
        t.insert("submit_report", entry!("Submit Report", "रिपोर्ट जमा करें", "నివేదికను సమర్పించండి"));
        t.insert("submitting", entry!("Submitting...", "जमा किया जा रहा है...", "సమర్పిస్తోంది..."));
        t.insert(
            "report_submitted",
            entry!(
                "Report submitted successfully!",
                "रिपोर्ट सफलतापूर्वक जमा की गई!",
                "నివేదిక విజయవంతంగా సమర్పించబడింది!"
            ),
        );
        t.insert("next", entry!("Next"));
        t.insert("back", entry!("Back"));

        // Categories
        t.insert(
            "category_roads",
            entry!("Roads & Transport", "सड़क और बुनियादी ढांचा", "రోడ్ & ఇన్ఫ్రాస్ట్రక్చర్"),
        );
        t.insert(
            "category_water",
            entry!("Water & Sanitation", "पानी और स्वच्छता", "నీరు & పారిశుధ్యత"),
        );
        t.insert("category_electricity", entry!("Electricity", "बिजली", "విద్యుత్"));
        t.insert("category_safety", entry!("Public Safety", "सार्वजनिक सुरक्षा", "పబ్లిక్ సేఫ్టీ"));

        // Report statuses
        t.insert("status_submitted", entry!("Submitted"));
        t.insert("status_under_review", entry!("Under Review"));
        t.insert("status_work_assigned", entry!("Work Assigned"));
        t.insert("status_resolved", entry!("Resolved"));
        t.insert("no_reports", entry!("No reports yet"));

        // Chat widget
        t.insert(
            "chat_greeting",
            entry!("Hello! I'm your assistant. How can I help you report an issue today?"),
        );
        t.insert(
            "chat_default_reply",
            entry!("I understand you need help with that. You can report any civic issue from the home screen; I can answer questions about categories, report status, and reward points."),
        );
        t.insert(
            "chat_fallback",
            entry!("Sorry, I could not fetch an answer right now. Please try again in a moment."),
        );
        t.insert(
            "chat_reply_pothole",
            entry!("For road problems like potholes, pick Roads & Transport in the report wizard and add a photo if you can. Crews are dispatched based on severity."),
        );
        t.insert(
            "chat_reply_water",
            entry!("Water leaks and drainage issues go under Water & Sanitation. Mention the nearest landmark so the field team can find the spot."),
        );
        t.insert(
            "chat_reply_garbage",
            entry!("Missed garbage collection can be reported under Water & Sanitation > Garbage Collection. Collection routes are updated within two working days."),
        );
        t.insert(
            "chat_reply_electricity",
            entry!("Street light and power issues belong to the Electricity category. For live wires, call the emergency helpline first."),
        );
        t.insert(
            "chat_reply_status",
            entry!("You can track every report on the History screen. Each report moves through Submitted, Under Review, Work Assigned and Resolved."),
        );
        t.insert(
            "chat_reply_rewards",
            entry!("You earn 50 reward points for every report you submit. Points appear on your home dashboard."),
        );
        t.insert(
            "chat_reply_howto",
            entry!("To report an issue: open Report a Problem, confirm the location, pick a category, describe the problem in at least 10 characters, and optionally attach up to 4 photos."),
        );

        t
    };
}

/// Look up a localized string.
///
/// Falls back to English when the key has no translation in the requested
/// language, and to the key itself when the key is unknown.
pub fn translate(key: &str, language: Language) -> &str {
    match TRANSLATIONS.get(key) {
        Some(entry) => match language {
            Language::En => entry.en,
            Language::Hi => entry.hi.unwrap_or(entry.en),
            Language::Te => entry.te.unwrap_or(entry.en),
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!("te".parse::<Language>().unwrap(), Language::Te);

        // Case insensitive
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Hi".parse::<Language>().unwrap(), Language::Hi);
    }

    #[test]
    fn test_language_from_str_invalid() {
        let result = "fr".parse::<Language>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown language: 'fr'"));
    }

    #[test]
    fn test_language_display_is_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Hi.to_string(), "hi");
        assert_eq!(Language::Te.to_string(), "te");
    }

    #[test]
    fn test_language_native_names() {
        assert_eq!(Language::En.native_name(), "English");
        assert_eq!(Language::Hi.native_name(), "हिंदी");
        assert_eq!(Language::Te.native_name(), "తెలుగు");
    }

    #[test]
    fn test_language_next_wraps() {
        assert_eq!(Language::En.next(), Language::Hi);
        assert_eq!(Language::Hi.next(), Language::Te);
        assert_eq!(Language::Te.next(), Language::En);
    }

    #[test]
    fn test_language_serde_round_trip() {
        let json = serde_json::to_string(&Language::Te).unwrap();
        assert_eq!(json, "\"te\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Te);
    }

    #[test]
    fn test_translate_known_key_all_languages() {
        assert_eq!(translate("sign_in", Language::En), "Sign In");
        assert_eq!(translate("sign_in", Language::Hi), "साइन इन");
        assert_eq!(translate("sign_in", Language::Te), "సైన్ ఇన్");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate("nonexistent_key", Language::En), "nonexistent_key");
        assert_eq!(translate("nonexistent_key", Language::Hi), "nonexistent_key");
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        // English-only keys resolve in every language
        assert_eq!(
            translate("invalid_credentials", Language::Hi),
            "Invalid email/Aadhaar or password"
        );
        assert_eq!(
            translate("invalid_credentials", Language::Te),
            "Invalid email/Aadhaar or password"
        );
    }

    #[test]
    fn test_category_names_localized() {
        assert_eq!(translate("category_water", Language::En), "Water & Sanitation");
        assert_eq!(translate("category_water", Language::Hi), "पानी और स्वच्छता");
        assert_eq!(translate("category_electricity", Language::Te), "విద్యుత్");
    }

    #[test]
    fn test_no_entry_has_empty_english() {
        for (key, entry) in TRANSLATIONS.iter() {
            assert!(!entry.en.is_empty(), "empty English string for key {}", key);
        }
    }

    #[test]
    fn test_chat_strings_present() {
        for key in [
            "chat_greeting",
            "chat_default_reply",
            "chat_fallback",
            "chat_reply_pothole",
            "chat_reply_status",
        ] {
            assert_ne!(translate(key, Language::En), key);
        }
    }
}
