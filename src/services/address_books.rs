use crate::client::SendPulseTransport;
use crate::error::AppError;
use crate::model::address_book::{AddressBook, CampaignCost, EmailToAdd};
use crate::model::common::{OperationResult, Variable};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Mailing list ("address book") operations
#[async_trait]
pub trait AddressBookService {
    /// Creates an address book and returns its id
    async fn create(&self, name: &str) -> Result<OperationResult, AppError>;
    /// Lists address books with pagination
    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<AddressBook>, AppError>;
    /// Gets one address book by id
    async fn get(&self, id: u64) -> Result<AddressBook, AppError>;
    /// Renames an address book
    async fn update(&self, id: u64, name: &str) -> Result<OperationResult, AppError>;
    /// Deletes an address book
    async fn delete(&self, id: u64) -> Result<OperationResult, AppError>;
    /// Lists the variables defined on an address book
    async fn variables(&self, id: u64) -> Result<Vec<Variable>, AppError>;
    /// Adds subscribers, optionally with variables
    async fn add_emails(
        &self,
        id: u64,
        emails: &[EmailToAdd],
    ) -> Result<OperationResult, AppError>;
    /// Removes subscribers by address
    async fn remove_emails(&self, id: u64, emails: &[String])
    -> Result<OperationResult, AppError>;
    /// Gets the cost of sending a campaign to this address book
    async fn campaign_cost(&self, id: u64) -> Result<CampaignCost, AppError>;
}

/// Implementation of the address book service
pub struct AddressBookServiceImpl<T: SendPulseTransport> {
    client: Arc<T>,
}

impl<T: SendPulseTransport> AddressBookServiceImpl<T> {
    /// Creates a new instance of the address book service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SendPulseTransport + 'static> AddressBookService for AddressBookServiceImpl<T> {
    async fn create(&self, name: &str) -> Result<OperationResult, AppError> {
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "address book name must not be empty".to_string(),
            ));
        }

        info!("Creating address book {}", name);
        let body = json!({ "bookName": name });
        self.client
            .request::<_, OperationResult>(Method::POST, "addressbooks", Some(&body), true)
            .await?
            .ensure("addressbooks")
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Vec<AddressBook>, AppError> {
        let path = format!("addressbooks?limit={limit}&offset={offset}");
        debug!("Listing address books");

        let result: Vec<AddressBook> = self
            .client
            .request::<(), Vec<AddressBook>>(Method::GET, &path, None, true)
            .await?;

        debug!("Address books obtained: {}", result.len());
        Ok(result)
    }

    async fn get(&self, id: u64) -> Result<AddressBook, AppError> {
        let path = format!("addressbooks/{id}");
        self.client
            .request::<(), AddressBook>(Method::GET, &path, None, true)
            .await
    }

    async fn update(&self, id: u64, name: &str) -> Result<OperationResult, AppError> {
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "address book name must not be empty".to_string(),
            ));
        }

        let path = format!("addressbooks/{id}");
        let body = json!({ "name": name });
        self.client
            .request::<_, OperationResult>(Method::PUT, &path, Some(&body), true)
            .await?
            .ensure(&path)
    }

    async fn delete(&self, id: u64) -> Result<OperationResult, AppError> {
        info!("Deleting address book {}", id);
        let path = format!("addressbooks/{id}");
        self.client
            .request::<(), OperationResult>(Method::DELETE, &path, None, true)
            .await?
            .ensure(&path)
    }

    async fn variables(&self, id: u64) -> Result<Vec<Variable>, AppError> {
        let path = format!("addressbooks/{id}/variables");
        self.client
            .request::<(), Vec<Variable>>(Method::GET, &path, None, true)
            .await
    }

    async fn add_emails(
        &self,
        id: u64,
        emails: &[EmailToAdd],
    ) -> Result<OperationResult, AppError> {
        if emails.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one email is required".to_string(),
            ));
        }

        info!("Adding {} emails to address book {}", emails.len(), id);
        let path = format!("addressbooks/{id}/emails");
        let body = json!({ "emails": emails });
        self.client
            .request::<_, OperationResult>(Method::POST, &path, Some(&body), true)
            .await?
            .ensure(&path)
    }

    async fn remove_emails(
        &self,
        id: u64,
        emails: &[String],
    ) -> Result<OperationResult, AppError> {
        if emails.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one email is required".to_string(),
            ));
        }

        info!("Removing {} emails from address book {}", emails.len(), id);
        let path = format!("addressbooks/{id}/emails");
        let body = json!({ "emails": emails });
        self.client
            .request::<_, OperationResult>(Method::DELETE, &path, Some(&body), true)
            .await?
            .ensure(&path)
    }

    async fn campaign_cost(&self, id: u64) -> Result<CampaignCost, AppError> {
        let path = format!("addressbooks/{id}/cost");
        self.client
            .request::<(), CampaignCost>(Method::GET, &path, None, true)
            .await
    }
}
