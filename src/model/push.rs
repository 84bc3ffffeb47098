use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Website registered for web push sending
pub struct PushWebsite {
    /// Website identifier
    pub id: u64,
    /// Website URL
    #[serde(default)]
    pub url: String,
    /// Registration date as reported by the API
    #[serde(default)]
    pub add_date: String,
    /// Numeric status code
    #[serde(default)]
    pub status: i32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Subscriber count for a push website
pub struct SubscriptionsCount {
    /// Total number of subscribers
    #[serde(default)]
    pub total: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Parameters for creating a web push send task
pub struct PushTaskRequest {
    /// Notification title
    pub title: String,
    /// Target website
    pub website_id: u64,
    /// Notification body text
    pub body: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// Spread sending over this many minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretch_time: Option<u32>,
    /// Subscriber filter as an arbitrary JSON object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Web push send task as returned by the API
pub struct PushTask {
    /// Task identifier
    pub id: u64,
    /// Notification title
    #[serde(default)]
    pub title: String,
    /// Numeric status code
    #[serde(default)]
    pub status: i32,
    /// Send date as reported by the API
    #[serde(default)]
    pub send_date: String,
}
