use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for adding phone numbers to an address book
pub struct AddPhonesRequest {
    /// Target address book
    #[serde(rename = "addressBookId")]
    pub address_book_id: u64,
    /// Phone numbers in international format
    pub phones: Vec<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for adding phone numbers to the SMS blacklist
pub struct SmsBlacklistRequest {
    /// Phone numbers in international format
    pub phones: Vec<String>,
    /// Optional comment stored with the blacklisted numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Parameters for sending an SMS campaign to a whole address book
pub struct SmsCampaignRequest {
    /// Registered sender name
    pub sender: String,
    /// Target address book
    #[serde(rename = "addressBookId")]
    pub address_book_id: u64,
    /// Message text; omitted to use the book's template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Transliterate the message to latin characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliterate: Option<u8>,
    /// Optional per-country delivery route, keyed by country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<HashMap<String, String>>,
    /// Optional scheduled send date, `YYYY-MM-DD HH:MM:SS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Parameters for sending an SMS to an explicit phone list
pub struct SendSmsRequest {
    /// Registered sender name
    pub sender: String,
    /// Phone numbers in international format
    pub phones: Vec<String>,
    /// Message text
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_request_serializes_route_when_set() {
        let mut route = HashMap::new();
        route.insert("UA".to_string(), "national".to_string());

        let request = SmsCampaignRequest {
            sender: "Shop".to_string(),
            address_book_id: 7,
            body: None,
            transliterate: None,
            route: Some(route),
            date: None,
        };

        let wire = serde_json::to_value(&request).expect("serialize");
        assert_eq!(wire["route"]["UA"], "national");
        assert!(wire.get("body").is_none());
        assert!(wire.get("date").is_none());
    }

    #[test]
    fn campaign_request_omits_unset_options() {
        let request = SmsCampaignRequest {
            sender: "Shop".to_string(),
            address_book_id: 7,
            body: Some("hello".to_string()),
            transliterate: None,
            route: None,
            date: None,
        };

        let wire = serde_json::to_value(&request).expect("serialize");
        assert!(wire.get("route").is_none());
        assert!(wire.get("transliterate").is_none());
        assert_eq!(wire["addressBookId"], 7);
    }
}
