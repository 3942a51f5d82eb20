//! Canned-reply chat assistant
//!
//! The assistant matches keywords in the user's message against a fixed
//! table and answers with a localization key. The UI layer translates the
//! key and simulates a short typing delay, so replies read like a remote
//! assistant without any network dependency.

/// Resolves a user message to a localization key for the reply
///
/// Implementations must be deterministic; the UI may re-resolve the same
/// message when the language changes.
pub trait ReplyResolver: Send + Sync {
    /// Return the localization key for a reply, or `None` when the message
    /// matches nothing the resolver knows about.
    fn resolve(&self, message: &str) -> Option<&'static str>;
}

/// Keyword table resolver
///
/// The first row with a matching keyword wins, so more specific topics
/// (categories) sit above generic ones (how-to).
pub struct KeywordResolver;

const REPLY_TABLE: &[(&[&str], &str)] = &[
    (&["pothole", "road"], "chat_reply_pothole"),
    (&["water", "leak", "drain"], "chat_reply_water"),
    (&["garbage", "trash", "waste"], "chat_reply_garbage"),
    (&["electric", "power", "light"], "chat_reply_electricity"),
    (&["status", "track"], "chat_reply_status"),
    (&["reward", "point"], "chat_reply_rewards"),
    (&["report", "how"], "chat_reply_howto"),
];

impl ReplyResolver for KeywordResolver {
    fn resolve(&self, message: &str) -> Option<&'static str> {
        let message = message.to_lowercase();
        for (keywords, key) in REPLY_TABLE {
            if keywords.iter().any(|keyword| message.contains(keyword)) {
                return Some(key);
            }
        }
        None
    }
}

/// Chat service
pub struct ChatService {
    resolver: Box<dyn ReplyResolver>,
}

impl ChatService {
    pub fn new(resolver: Box<dyn ReplyResolver>) -> Self {
        Self { resolver }
    }

    /// Answer a user message with a reply localization key
    pub fn ask(&self, message: &str) -> &'static str {
        self.resolver
            .resolve(message)
            .unwrap_or("chat_default_reply")
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(Box::new(KeywordResolver))
    }
}
