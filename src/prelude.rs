//! # SendPulse Client Prelude
//!
//! Imports the most commonly used types and traits of the library in one go.
//!
//! ## Usage
//!
//! ```rust
//! use sendpulse_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret");
//! let api = SendPulse::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the SendPulse API client
pub use crate::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Bearer-token cache and client-credentials grant
pub use crate::auth::TokenManager;

/// HTTP client and the transport trait services are generic over
pub use crate::client::{HttpClient, SendPulseTransport};

// ============================================================================
// FACADE
// ============================================================================

/// Entry point bundling all resource services
pub use crate::api::SendPulse;

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::services::{
    AddressBookService, AddressBookServiceImpl, AutomationService, AutomationServiceImpl,
    BalanceService, BalanceServiceImpl, BlacklistService, BlacklistServiceImpl, BotService,
    BotServiceImpl, CampaignService, CampaignServiceImpl, PushService, PushServiceImpl, SmsService,
    SmsServiceImpl, TemplateService, TemplateServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::address_book::{AddressBook, CampaignCost, EmailToAdd};
pub use crate::model::automation::EventResponse;
pub use crate::model::balance::{Balance, BalanceDetailed, BalanceMoney};
pub use crate::model::bot::{Bot, BotChat, BotMediaUpload, SendBotMessageRequest};
pub use crate::model::campaign::{Campaign, CreateCampaignRequest, EmailStatistics};
pub use crate::model::common::{OperationResult, Variable};
pub use crate::model::push::{PushTask, PushTaskRequest, PushWebsite, SubscriptionsCount};
pub use crate::model::sms::{AddPhonesRequest, SendSmsRequest, SmsBlacklistRequest, SmsCampaignRequest};
pub use crate::model::template::{CreateTemplateRequest, Template};
pub use crate::model::token::TokenResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::json;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
