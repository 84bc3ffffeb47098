use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::common::{OperationResult, Variable};
use crate::model::push::{PushTask, PushTaskRequest, PushWebsite, SubscriptionsCount};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Web push operations
#[async_trait]
pub trait PushService {
    /// Lists websites registered for push sending
    async fn websites(&self, limit: u32, offset: u32) -> Result<Vec<PushWebsite>, AppError>;
    /// Lists the variables defined on a website
    async fn website_variables(&self, website_id: u64) -> Result<Vec<Variable>, AppError>;
    /// Gets the subscriber count for a website
    async fn subscriptions_count(&self, website_id: u64) -> Result<SubscriptionsCount, AppError>;
    /// Creates a push send task
    async fn create_task(&self, request: &PushTaskRequest) -> Result<OperationResult, AppError>;
    /// Lists push send tasks with pagination
    async fn tasks(&self, limit: u32, offset: u32) -> Result<Vec<PushTask>, AppError>;
}

/// Implementation of the push service
pub struct PushServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> PushServiceImpl<T> {
    /// Creates a new instance of the push service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> PushService for PushServiceImpl<T> {
    async fn websites(&self, limit: u32, offset: u32) -> Result<Vec<PushWebsite>, AppError> {
        let path = format!("push/websites?limit={limit}&offset={offset}");
        debug!("Listing push websites");

        let result: Vec<PushWebsite> = self
            .client
            .request::<(), Vec<PushWebsite>>(Method::GET, &path, None, true)
            .await?;

        debug!("Push websites obtained: {}", result.len());
        Ok(result)
    }

    async fn website_variables(&self, website_id: u64) -> Result<Vec<Variable>, AppError> {
        let path = format!("push/websites/{website_id}/variables");
        self.client
            .request::<(), Vec<Variable>>(Method::GET, &path, None, true)
            .await
    }

    async fn subscriptions_count(&self, website_id: u64) -> Result<SubscriptionsCount, AppError> {
        let path = format!("push/websites/{website_id}/subscriptions/total");
        self.client
            .request::<(), SubscriptionsCount>(Method::GET, &path, None, true)
            .await
    }

    async fn create_task(&self, request: &PushTaskRequest) -> Result<OperationResult, AppError> {
        if request.title.is_empty() {
            return Err(AppError::InvalidInput(
                "task title must not be empty".to_string(),
            ));
        }

        info!("Creating push task for website {}", request.website_id);
        self.client
            .request::<_, OperationResult>(Method::POST, "push/tasks", Some(request), true)
            .await?
            .ensure("push/tasks")
    }

    async fn tasks(&self, limit: u32, offset: u32) -> Result<Vec<PushTask>, AppError> {
        let path = format!("push/tasks?limit={limit}&offset={offset}");
        debug!("Listing push tasks");

        let result: Vec<PushTask> = self
            .client
            .request::<(), Vec<PushTask>>(Method::GET, &path, None, true)
            .await?;

        debug!("Push tasks obtained: {}", result.len());
        Ok(result)
    }
}
