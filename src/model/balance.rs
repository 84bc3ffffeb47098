use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Common account balance
pub struct Balance {
    /// Currency code
    #[serde(default)]
    pub currency: String,
    /// Balance in the requested currency
    #[serde(rename = "balance_currency", default)]
    pub amount: f64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Monetary portion of the detailed balance
pub struct BalanceMoney {
    /// Main balance
    #[serde(default)]
    pub main: f64,
    /// Bonus balance
    #[serde(default)]
    pub bonus: f64,
    /// Currency code
    #[serde(default)]
    pub currency: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Detailed account balance across services
pub struct BalanceDetailed {
    /// Monetary balances
    #[serde(default)]
    pub balance: Option<BalanceMoney>,
    /// Remaining email sends on the current plan
    #[serde(default)]
    pub email: Option<u64>,
    /// Remaining SMS sends on the current plan
    #[serde(default)]
    pub sms: Option<u64>,
    /// Remaining push sends on the current plan
    #[serde(default)]
    pub push: Option<u64>,
}
