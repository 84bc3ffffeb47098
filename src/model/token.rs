use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Response of the OAuth2 client-credentials token endpoint
pub struct TokenResponse {
    /// Bearer token authorizing subsequent API calls
    pub access_token: String,
    /// Token type, normally "Bearer"
    #[serde(default)]
    pub token_type: String,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
}
