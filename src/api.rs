//! High-level facade bundling every resource service over one shared client
//!
//! # Example
//! ```ignore
//! use sendpulse_client::api::SendPulse;
//! use sendpulse_client::config::Config;
//! use sendpulse_client::services::BalanceService;
//!
//! let api = SendPulse::new(Config::new());
//! let balance = api.balance.common(None).await?;
//! ```

use crate::client::HttpClient;
use crate::config::Config;
use crate::services::{
    AddressBookServiceImpl, AutomationServiceImpl, BalanceServiceImpl, BlacklistServiceImpl,
    BotServiceImpl, CampaignServiceImpl, PushServiceImpl, SmsServiceImpl, TemplateServiceImpl,
};
use std::sync::Arc;

/// Entry point bundling all resource services over one shared HTTP client.
///
/// All services share the same token cache and rate limiter; any number of
/// tasks may call them concurrently.
pub struct SendPulse {
    client: Arc<HttpClient>,
    /// Mailing list operations
    pub address_books: AddressBookServiceImpl<HttpClient>,
    /// Email campaign operations
    pub campaigns: CampaignServiceImpl<HttpClient>,
    /// Email template operations
    pub templates: TemplateServiceImpl<HttpClient>,
    /// Email blacklist operations
    pub blacklist: BlacklistServiceImpl<HttpClient>,
    /// SMS operations
    pub sms: SmsServiceImpl<HttpClient>,
    /// Web push operations
    pub push: PushServiceImpl<HttpClient>,
    /// Messenger bot operations
    pub bots: BotServiceImpl<HttpClient>,
    /// Automation360 event operations
    pub automation: AutomationServiceImpl<HttpClient>,
    /// Account balance operations
    pub balance: BalanceServiceImpl<HttpClient>,
}

impl SendPulse {
    /// Creates the facade from a configuration. No token is fetched until
    /// the first authenticated call.
    pub fn new(config: Config) -> Self {
        let client = Arc::new(HttpClient::new(config));

        Self {
            address_books: AddressBookServiceImpl::new(client.clone()),
            campaigns: CampaignServiceImpl::new(client.clone()),
            templates: TemplateServiceImpl::new(client.clone()),
            blacklist: BlacklistServiceImpl::new(client.clone()),
            sms: SmsServiceImpl::new(client.clone()),
            push: PushServiceImpl::new(client.clone()),
            bots: BotServiceImpl::new(client.clone()),
            automation: AutomationServiceImpl::new(client.clone()),
            balance: BalanceServiceImpl::new(client.clone()),
            client,
        }
    }

    /// Gets the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.client
    }
}

impl Default for SendPulse {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
