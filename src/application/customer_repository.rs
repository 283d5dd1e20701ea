// Repository trait for customer data access
use crate::domain::customer::{Customer, NewCustomer};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request to customer store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("customer store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode customer store response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers, newest first
    async fn list(&self) -> Result<Vec<Customer>, StoreError>;

    /// Persist one customer. Generated fields are not returned; callers refetch.
    async fn insert(&self, record: &NewCustomer) -> Result<(), StoreError>;
}
