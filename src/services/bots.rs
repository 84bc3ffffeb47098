use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::bot::{Bot, BotChat, BotMediaUpload, SendBotMessageRequest};
use crate::model::common::OperationResult;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Messenger bot operations
#[async_trait]
pub trait BotService {
    /// Lists bots registered on the account
    async fn bots(&self) -> Result<Vec<Bot>, AppError>;
    /// Lists chats of one bot
    async fn chats(&self, bot_id: &str) -> Result<Vec<BotChat>, AppError>;
    /// Sends a text message to a contact
    async fn send_message(
        &self,
        contact_id: &str,
        text: &str,
    ) -> Result<OperationResult, AppError>;
    /// Uploads a media file for later use in messages
    async fn upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BotMediaUpload, AppError>;
}

/// Implementation of the bot service
pub struct BotServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> BotServiceImpl<T> {
    /// Creates a new instance of the bot service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> BotService for BotServiceImpl<T> {
    async fn bots(&self) -> Result<Vec<Bot>, AppError> {
        debug!("Listing bots");
        self.client
            .request::<(), Vec<Bot>>(Method::GET, "telegram/bots", None, true)
            .await
    }

    async fn chats(&self, bot_id: &str) -> Result<Vec<BotChat>, AppError> {
        if bot_id.is_empty() {
            return Err(AppError::InvalidInput(
                "bot id must not be empty".to_string(),
            ));
        }

        let path = format!("telegram/chats?bot_id={bot_id}");
        self.client
            .request::<(), Vec<BotChat>>(Method::GET, &path, None, true)
            .await
    }

    async fn send_message(
        &self,
        contact_id: &str,
        text: &str,
    ) -> Result<OperationResult, AppError> {
        if contact_id.is_empty() {
            return Err(AppError::InvalidInput(
                "contact id must not be empty".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "message text must not be empty".to_string(),
            ));
        }

        let body = SendBotMessageRequest {
            contact_id: contact_id.to_string(),
            text: text.to_string(),
        };

        info!("Sending bot message to contact {}", contact_id);
        self.client
            .request::<_, OperationResult>(Method::POST, "telegram/contacts/sendText", Some(&body), true)
            .await?
            .ensure("telegram/contacts/sendText")
    }

    async fn upload_media(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BotMediaUpload, AppError> {
        if bytes.is_empty() {
            return Err(AppError::InvalidInput("file must not be empty".to_string()));
        }

        info!("Uploading bot media {} ({} bytes)", file_name, bytes.len());
        self.client
            .post_multipart("telegram/files", "file", file_name, bytes)
            .await
    }
}
