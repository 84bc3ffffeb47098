use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for adding emails to the blacklist.
///
/// `emails` is the base64 encoding of the newline-joined address list, as the
/// API requires. The optional comment is attached to every added address.
pub struct AddToBlacklistRequest {
    /// Base64-encoded, newline-joined email addresses
    pub emails: String,
    /// Optional comment stored with the blacklisted addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for removing emails from the blacklist
pub struct RemoveFromBlacklistRequest {
    /// Base64-encoded, newline-joined email addresses
    pub emails: String,
}
