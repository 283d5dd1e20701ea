// Supabase (PostgREST) repository implementation
use crate::application::customer_repository::{CustomerRepository, StoreError};
use crate::domain::customer::{Customer, NewCustomer};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct SupabaseRepository {
    client: reqwest::Client,
    base_url: String,
    key: String,
    table: String,
}

impl SupabaseRepository {
    pub fn new(base_url: &str, key: &str, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            table: table.to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, urlencoding::encode(&self.table))
    }

    fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.collection_url())
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Accept", "application/json")
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status { status, body })
    }
}

#[async_trait]
impl CustomerRepository for SupabaseRepository {
    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let url = self.list_url();
        tracing::debug!("Fetching customers: {}", url);

        let response = self.request(reqwest::Method::GET, &url).send().await?;
        let body = Self::ensure_success(response).await?.text().await?;

        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn insert(&self, record: &NewCustomer) -> Result<(), StoreError> {
        let url = self.collection_url();
        tracing::debug!("Inserting customer {} into {}", record.company_name, url);

        let response = self
            .request(reqwest::Method::POST, &url)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
