/// Mailing list ("address book") models
pub mod address_book;
/// Automation360 event models
pub mod automation;
/// Account balance models
pub mod balance;
/// Email blacklist models
pub mod blacklist;
/// Messenger bot models
pub mod bot;
/// Email campaign models
pub mod campaign;
/// Shared result models
pub mod common;
/// Web push models
pub mod push;
/// SMS models
pub mod sms;
/// Email template models
pub mod template;
/// OAuth token models
pub mod token;
