use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::common::OperationResult;
use crate::model::sms::{AddPhonesRequest, SendSmsRequest, SmsBlacklistRequest, SmsCampaignRequest};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// SMS operations
#[async_trait]
pub trait SmsService {
    /// Adds phone numbers to an address book
    async fn add_phones(&self, book_id: u64, phones: &[String])
    -> Result<OperationResult, AppError>;
    /// Removes phone numbers from an address book
    async fn remove_phones(
        &self,
        book_id: u64,
        phones: &[String],
    ) -> Result<OperationResult, AppError>;
    /// Adds phone numbers to the SMS blacklist with an optional comment
    async fn add_to_blacklist(
        &self,
        phones: &[String],
        comment: Option<&str>,
    ) -> Result<OperationResult, AppError>;
    /// Removes phone numbers from the SMS blacklist
    async fn remove_from_blacklist(&self, phones: &[String]) -> Result<OperationResult, AppError>;
    /// Sends an SMS campaign to a whole address book
    async fn send_campaign(&self, request: &SmsCampaignRequest)
    -> Result<OperationResult, AppError>;
    /// Sends an SMS to an explicit phone list
    async fn send(&self, request: &SendSmsRequest) -> Result<OperationResult, AppError>;
}

/// Implementation of the SMS service
pub struct SmsServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> SmsServiceImpl<T> {
    /// Creates a new instance of the SMS service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

fn require_phones(phones: &[String]) -> Result<(), AppError> {
    if phones.is_empty() {
        return Err(AppError::InvalidInput(
            "at least one phone number is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl<T: SendPulseTransport + 'static> SmsService for SmsServiceImpl<T> {
    async fn add_phones(
        &self,
        book_id: u64,
        phones: &[String],
    ) -> Result<OperationResult, AppError> {
        require_phones(phones)?;

        let body = AddPhonesRequest {
            address_book_id: book_id,
            phones: phones.to_vec(),
        };

        info!("Adding {} phones to address book {}", phones.len(), book_id);
        self.client
            .request::<_, OperationResult>(Method::POST, "sms/numbers", Some(&body), true)
            .await?
            .ensure("sms/numbers")
    }

    async fn remove_phones(
        &self,
        book_id: u64,
        phones: &[String],
    ) -> Result<OperationResult, AppError> {
        require_phones(phones)?;

        let body = AddPhonesRequest {
            address_book_id: book_id,
            phones: phones.to_vec(),
        };

        info!(
            "Removing {} phones from address book {}",
            phones.len(),
            book_id
        );
        self.client
            .request::<_, OperationResult>(Method::DELETE, "sms/numbers", Some(&body), true)
            .await?
            .ensure("sms/numbers")
    }

    async fn add_to_blacklist(
        &self,
        phones: &[String],
        comment: Option<&str>,
    ) -> Result<OperationResult, AppError> {
        require_phones(phones)?;

        let body = SmsBlacklistRequest {
            phones: phones.to_vec(),
            comment: comment.map(String::from),
        };

        info!("Adding {} phones to the SMS blacklist", phones.len());
        self.client
            .request::<_, OperationResult>(Method::POST, "sms/black_list", Some(&body), true)
            .await?
            .ensure("sms/black_list")
    }

    async fn remove_from_blacklist(&self, phones: &[String]) -> Result<OperationResult, AppError> {
        require_phones(phones)?;

        let body = json!({ "phones": phones });
        info!("Removing {} phones from the SMS blacklist", phones.len());
        self.client
            .request::<_, OperationResult>(Method::DELETE, "sms/black_list", Some(&body), true)
            .await?
            .ensure("sms/black_list")
    }

    async fn send_campaign(
        &self,
        request: &SmsCampaignRequest,
    ) -> Result<OperationResult, AppError> {
        if request.sender.is_empty() {
            return Err(AppError::InvalidInput(
                "sender must not be empty".to_string(),
            ));
        }

        info!(
            "Sending SMS campaign to address book {}",
            request.address_book_id
        );
        self.client
            .request::<_, OperationResult>(Method::POST, "sms/campaigns", Some(request), true)
            .await?
            .ensure("sms/campaigns")
    }

    async fn send(&self, request: &SendSmsRequest) -> Result<OperationResult, AppError> {
        require_phones(&request.phones)?;
        if request.body.is_empty() {
            return Err(AppError::InvalidInput(
                "message body must not be empty".to_string(),
            ));
        }

        info!("Sending SMS to {} phones", request.phones.len());
        self.client
            .request::<_, OperationResult>(Method::POST, "sms/send", Some(request), true)
            .await?
            .ensure("sms/send")
    }
}
