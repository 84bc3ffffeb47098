use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Messenger bot registered on the account
pub struct Bot {
    /// Bot identifier
    pub id: String,
    /// Bot display name
    #[serde(default)]
    pub name: String,
    /// Numeric status code
    #[serde(default)]
    pub status: i32,
    /// Number of subscribed contacts
    #[serde(default)]
    pub followers_count: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Chat between a bot and one contact
pub struct BotChat {
    /// Contact identifier
    pub contact_id: String,
    /// Contact display name
    #[serde(default)]
    pub name: String,
    /// Timestamp of the last message
    #[serde(default)]
    pub last_message_at: String,
    /// Number of unread incoming messages
    #[serde(default)]
    pub unread_count: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for sending a text message to a contact
pub struct SendBotMessageRequest {
    /// Target contact
    pub contact_id: String,
    /// Message text
    pub text: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Result of a bot media upload
pub struct BotMediaUpload {
    /// Whether the upload succeeded
    #[serde(default)]
    pub result: bool,
    /// URL of the stored file, usable in subsequent messages
    #[serde(default)]
    pub url: String,
}
