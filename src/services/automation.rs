use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::automation::EventResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Automation360 event operations
#[async_trait]
pub trait AutomationService {
    /// Starts an automation flow event by name.
    ///
    /// The payload must identify the contact: it needs a non-empty `email`
    /// or `phone` field. Payloads without either are rejected locally before
    /// any network call.
    async fn start_event(&self, event_name: &str, payload: &Value)
    -> Result<EventResponse, AppError>;
}

/// Implementation of the automation service
pub struct AutomationServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> AutomationServiceImpl<T> {
    /// Creates a new instance of the automation service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

fn identifies_contact(payload: &Value) -> bool {
    let has_email = payload
        .get("email")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());

    let has_phone = match payload.get("phone") {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    };

    has_email || has_phone
}

#[async_trait]
impl<T: SendPulseTransport + 'static> AutomationService for AutomationServiceImpl<T> {
    async fn start_event(
        &self,
        event_name: &str,
        payload: &Value,
    ) -> Result<EventResponse, AppError> {
        if event_name.is_empty() {
            return Err(AppError::InvalidInput(
                "event name must not be empty".to_string(),
            ));
        }
        if !identifies_contact(payload) {
            return Err(AppError::InvalidInput(
                "event payload must contain a non-empty email or phone".to_string(),
            ));
        }

        let path = format!("events/name/{event_name}");
        info!("Starting automation event {}", event_name);
        self.client
            .request(Method::POST, &path, Some(payload), true)
            .await
    }
}
