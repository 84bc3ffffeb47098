use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Result of starting an Automation360 event
pub struct EventResponse {
    /// Whether the event was accepted
    #[serde(default)]
    pub result: bool,
    /// Optional explanation when the event was rejected
    #[serde(default)]
    pub message: Option<String>,
}
