//! Resource services for the SendPulse API
//!
//! One service per API resource family. Each service is generic over
//! [`crate::client::SendPulseTransport`] so the HTTP layer can be mocked in
//! tests; every method builds a path, optionally a typed body, and delegates
//! to the transport.

/// Mailing list operations
pub mod address_books;
/// Automation360 event operations
pub mod automation;
/// Account balance operations
pub mod balance;
/// Email blacklist operations
pub mod blacklist;
/// Messenger bot operations
pub mod bots;
/// Email campaign operations
pub mod campaigns;
/// Web push operations
pub mod push;
/// SMS operations
pub mod sms;
/// Email template operations
pub mod templates;

pub use address_books::{AddressBookService, AddressBookServiceImpl};
pub use automation::{AutomationService, AutomationServiceImpl};
pub use balance::{BalanceService, BalanceServiceImpl};
pub use blacklist::{BlacklistService, BlacklistServiceImpl};
pub use bots::{BotService, BotServiceImpl};
pub use campaigns::{CampaignService, CampaignServiceImpl};
pub use push::{PushService, PushServiceImpl};
pub use sms::{SmsService, SmsServiceImpl};
pub use templates::{TemplateService, TemplateServiceImpl};
