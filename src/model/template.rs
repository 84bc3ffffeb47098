use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Email template as returned by the API
pub struct Template {
    /// Template identifier (the API uses string ids for system templates)
    pub id: String,
    /// Numeric identifier for user-owned templates
    #[serde(default)]
    pub real_id: u64,
    /// Template name
    #[serde(default)]
    pub name: String,
    /// Template language code
    #[serde(default)]
    pub lang: String,
    /// Whether the template belongs to the current user
    #[serde(default)]
    pub owner: String,
    /// Creation timestamp as reported by the API
    #[serde(default)]
    pub created: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wire format for template creation; `body` must already be base64-encoded
pub struct CreateTemplateRequest {
    /// Optional template name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base64-encoded HTML body
    pub body: String,
    /// Template language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}
