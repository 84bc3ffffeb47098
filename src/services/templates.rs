use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::common::OperationResult;
use crate::model::template::{CreateTemplateRequest, Template};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Email template operations
#[async_trait]
pub trait TemplateService {
    /// Creates a template from plain HTML; encoding happens here
    async fn create(
        &self,
        name: Option<&str>,
        html: &str,
        lang: Option<&str>,
    ) -> Result<OperationResult, AppError>;
    /// Gets a template by id
    async fn get(&self, id: &str) -> Result<Template, AppError>;
    /// Lists templates with pagination
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Template>, AppError>;
}

/// Implementation of the template service
pub struct TemplateServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> TemplateServiceImpl<T> {
    /// Creates a new instance of the template service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> TemplateService for TemplateServiceImpl<T> {
    async fn create(
        &self,
        name: Option<&str>,
        html: &str,
        lang: Option<&str>,
    ) -> Result<OperationResult, AppError> {
        if html.is_empty() {
            return Err(AppError::InvalidInput(
                "template body must not be empty".to_string(),
            ));
        }

        let body = CreateTemplateRequest {
            name: name.map(String::from),
            body: STANDARD.encode(html),
            lang: lang.map(String::from),
        };

        info!("Creating template");
        self.client
            .request::<_, OperationResult>(Method::POST, "template", Some(&body), true)
            .await?
            .ensure("template")
    }

    async fn get(&self, id: &str) -> Result<Template, AppError> {
        let path = format!("template/{id}");
        self.client
            .request::<(), Template>(Method::GET, &path, None, true)
            .await
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Template>, AppError> {
        let path = format!("templates?limit={limit}&offset={offset}");
        debug!("Listing templates");

        let result: Vec<Template> = self
            .client
            .request::<(), Vec<Template>>(Method::GET, &path, None, true)
            .await?;

        debug!("Templates obtained: {}", result.len());
        Ok(result)
    }
}
