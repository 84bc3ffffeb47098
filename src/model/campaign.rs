use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Parameters for creating an email campaign.
///
/// `body` is the plain HTML; the service base64-encodes it on the wire as the
/// API requires.
pub struct CreateCampaignRequest {
    /// Sender display name
    pub sender_name: String,
    /// Sender email address
    pub sender_email: String,
    /// Message subject
    pub subject: String,
    /// HTML body, not yet encoded
    pub body: String,
    /// Address book to send to
    pub list_id: u64,
    /// Optional campaign name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional scheduled send date, `YYYY-MM-DD HH:MM:SS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_date: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Email campaign as returned by the API
pub struct Campaign {
    /// Campaign identifier
    pub id: u64,
    /// Campaign name
    #[serde(default)]
    pub name: String,
    /// Message subject
    #[serde(default)]
    pub subject: String,
    /// Numeric status code
    #[serde(default)]
    pub status: i32,
    /// Total addresses targeted
    #[serde(default)]
    pub all_email_qty: u64,
    /// Send date as reported by the API
    #[serde(default)]
    pub send_date: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Delivery statistics for one recipient of a campaign
pub struct EmailStatistics {
    /// Recipient address
    #[serde(default)]
    pub email: String,
    /// Address book the recipient belongs to
    #[serde(rename = "abook_id", default)]
    pub address_book_id: u64,
    /// Delivery status code
    #[serde(default)]
    pub send_result: i32,
    /// Explanation of the delivery status
    #[serde(default)]
    pub send_result_explain: String,
    /// Whether the recipient opened the message
    #[serde(default)]
    pub is_read: bool,
    /// Whether the recipient clicked a link
    #[serde(default)]
    pub is_link_redirected: bool,
}
