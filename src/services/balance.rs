use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::balance::{Balance, BalanceDetailed};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Account balance operations
#[async_trait]
pub trait BalanceService {
    /// Gets the common balance, optionally in a specific currency
    async fn common(&self, currency: Option<&str>) -> Result<Balance, AppError>;
    /// Gets the detailed balance across services
    async fn detailed(&self) -> Result<BalanceDetailed, AppError>;
}

/// Implementation of the balance service
pub struct BalanceServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> BalanceServiceImpl<T> {
    /// Creates a new instance of the balance service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> BalanceService for BalanceServiceImpl<T> {
    async fn common(&self, currency: Option<&str>) -> Result<Balance, AppError> {
        let path = match currency {
            Some(cur) => format!("balance/{}", cur.to_uppercase()),
            None => "balance".to_string(),
        };

        debug!("Getting balance");
        self.client
            .request::<(), Balance>(Method::GET, &path, None, true)
            .await
    }

    async fn detailed(&self) -> Result<BalanceDetailed, AppError> {
        debug!("Getting detailed balance");
        self.client
            .request::<(), BalanceDetailed>(Method::GET, "user/balance/detail", None, true)
            .await
    }
}
