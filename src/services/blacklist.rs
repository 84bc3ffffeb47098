use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::blacklist::{AddToBlacklistRequest, RemoveFromBlacklistRequest};
use crate::model::common::OperationResult;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Email blacklist operations
#[async_trait]
pub trait BlacklistService {
    /// Adds emails to the blacklist with an optional comment.
    ///
    /// The comment is sent with the request. Earlier clients of this API
    /// computed the comment body but dropped it before sending; that was a
    /// defect, not intended semantics.
    async fn add(&self, emails: &[String], comment: Option<&str>)
    -> Result<OperationResult, AppError>;
    /// Removes emails from the blacklist
    async fn remove(&self, emails: &[String]) -> Result<OperationResult, AppError>;
    /// Lists blacklisted emails
    async fn list(&self) -> Result<Vec<String>, AppError>;
}

/// Implementation of the blacklist service
pub struct BlacklistServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> BlacklistServiceImpl<T> {
    /// Creates a new instance of the blacklist service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    fn encode_emails(emails: &[String]) -> String {
        STANDARD.encode(emails.join("\n"))
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> BlacklistService for BlacklistServiceImpl<T> {
    async fn add(
        &self,
        emails: &[String],
        comment: Option<&str>,
    ) -> Result<OperationResult, AppError> {
        if emails.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one email is required".to_string(),
            ));
        }

        let body = AddToBlacklistRequest {
            emails: Self::encode_emails(emails),
            comment: comment.map(String::from),
        };

        info!("Adding {} emails to the blacklist", emails.len());
        self.client
            .request::<_, OperationResult>(Method::POST, "blacklist", Some(&body), true)
            .await?
            .ensure("blacklist")
    }

    async fn remove(&self, emails: &[String]) -> Result<OperationResult, AppError> {
        if emails.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one email is required".to_string(),
            ));
        }

        let body = RemoveFromBlacklistRequest {
            emails: Self::encode_emails(emails),
        };

        info!("Removing {} emails from the blacklist", emails.len());
        self.client
            .request::<_, OperationResult>(Method::DELETE, "blacklist", Some(&body), true)
            .await?
            .ensure("blacklist")
    }

    async fn list(&self) -> Result<Vec<String>, AppError> {
        self.client
            .request::<(), Vec<String>>(Method::GET, "blacklist", None, true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_newline_joined_then_encoded() {
        let emails = vec!["a@x.example".to_string(), "b@x.example".to_string()];
        let encoded = BlacklistServiceImpl::<crate::client::HttpClient>::encode_emails(&emails);
        assert_eq!(encoded, STANDARD.encode("a@x.example\nb@x.example"));
    }
}
