use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Mailing list ("address book") as returned by the API
pub struct AddressBook {
    /// Address book identifier
    pub id: u64,
    /// Address book name
    pub name: String,
    /// Total number of addresses in the book
    #[serde(default)]
    pub all_email_qty: u64,
    /// Number of active addresses
    #[serde(default)]
    pub active_email_qty: u64,
    /// Number of inactive addresses
    #[serde(default)]
    pub inactive_email_qty: u64,
    /// Creation date as reported by the API
    #[serde(rename = "creationdate", default)]
    pub created_at: String,
    /// Numeric status code
    #[serde(default)]
    pub status: i32,
    /// Human-readable status
    #[serde(default)]
    pub status_explain: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Subscriber to add to an address book, with optional variables
pub struct EmailToAdd {
    /// Email address
    pub email: String,
    /// Arbitrary subscriber variables keyed by variable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl EmailToAdd {
    /// Creates a subscriber entry without variables
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            variables: None,
        }
    }

    /// Attaches subscriber variables
    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Cost of sending one campaign to an address book
pub struct CampaignCost {
    /// Currency code
    #[serde(default)]
    pub cur: String,
    /// Number of addresses already covered by the plan
    #[serde(default)]
    pub sent_emails_qty: u64,
    /// Price for the addresses above the plan allowance
    #[serde(rename = "overdraftAllEmailsPrice", default)]
    pub overdraft_all_emails_price: f64,
    /// Addresses payable from the account balance
    #[serde(rename = "addressesDeltaFromBalance", default)]
    pub addresses_delta_from_balance: u64,
    /// Addresses payable from the tariff allowance
    #[serde(rename = "addressesDeltaFromTariff", default)]
    pub addresses_delta_from_tariff: u64,
    /// Maximum number of emails the balance can cover
    #[serde(rename = "maxEmailsPerTask", default)]
    pub max_emails_per_task: u64,
}
