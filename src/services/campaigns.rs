use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::campaign::{Campaign, CreateCampaignRequest, EmailStatistics};
use crate::model::common::OperationResult;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Email campaign operations
#[async_trait]
pub trait CampaignService {
    /// Creates a campaign; the HTML body is base64-encoded on the wire
    async fn create(&self, request: &CreateCampaignRequest) -> Result<Campaign, AppError>;
    /// Gets a campaign by id
    async fn get(&self, id: u64) -> Result<Campaign, AppError>;
    /// Lists campaigns with pagination
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Campaign>, AppError>;
    /// Cancels a scheduled campaign
    async fn cancel(&self, id: u64) -> Result<OperationResult, AppError>;
    /// Gets delivery statistics for one recipient of a campaign
    async fn email_statistics(&self, id: u64, email: &str) -> Result<EmailStatistics, AppError>;
}

/// Implementation of the campaign service
pub struct CampaignServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> CampaignServiceImpl<T> {
    /// Creates a new instance of the campaign service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> CampaignService for CampaignServiceImpl<T> {
    async fn create(&self, request: &CreateCampaignRequest) -> Result<Campaign, AppError> {
        if request.sender_email.is_empty() {
            return Err(AppError::InvalidInput(
                "sender email must not be empty".to_string(),
            ));
        }
        if request.subject.is_empty() {
            return Err(AppError::InvalidInput(
                "subject must not be empty".to_string(),
            ));
        }

        // Wire shape with the body base64-encoded, as the API requires
        #[derive(Serialize)]
        struct CreateCampaignWire<'a> {
            sender_name: &'a str,
            sender_email: &'a str,
            subject: &'a str,
            body: String,
            list_id: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            send_date: Option<&'a str>,
        }

        let wire = CreateCampaignWire {
            sender_name: &request.sender_name,
            sender_email: &request.sender_email,
            subject: &request.subject,
            body: STANDARD.encode(&request.body),
            list_id: request.list_id,
            name: request.name.as_deref(),
            send_date: request.send_date.as_deref(),
        };

        info!("Creating campaign for list {}", request.list_id);
        self.client
            .request(Method::POST, "campaigns", Some(&wire), true)
            .await
    }

    async fn get(&self, id: u64) -> Result<Campaign, AppError> {
        let path = format!("campaigns/{id}");
        self.client
            .request::<(), Campaign>(Method::GET, &path, None, true)
            .await
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Campaign>, AppError> {
        let path = format!("campaigns?limit={limit}&offset={offset}");
        debug!("Listing campaigns");

        let result: Vec<Campaign> = self
            .client
            .request::<(), Vec<Campaign>>(Method::GET, &path, None, true)
            .await?;

        debug!("Campaigns obtained: {}", result.len());
        Ok(result)
    }

    async fn cancel(&self, id: u64) -> Result<OperationResult, AppError> {
        info!("Cancelling campaign {}", id);
        let path = format!("campaigns/{id}");
        self.client
            .request::<(), OperationResult>(Method::DELETE, &path, None, true)
            .await?
            .ensure(&path)
    }

    async fn email_statistics(&self, id: u64, email: &str) -> Result<EmailStatistics, AppError> {
        if email.is_empty() {
            return Err(AppError::InvalidInput(
                "email must not be empty".to_string(),
            ));
        }

        // Local parts may carry '+' and other reserved characters
        let path = format!("campaigns/{id}/email/{}", urlencoding::encode(email));
        self.client
            .request::<(), EmailStatistics>(Method::GET, &path, None, true)
            .await
    }
}
