// Dashboard service - Owns the customer set and applies the store fallbacks
use crate::application::customer_repository::CustomerRepository;
use crate::application::mock_data::mock_customers;
use crate::domain::customer::Customer;
use crate::domain::dashboard::{DashboardSnapshot, DataSource};
use crate::domain::registration::RegistrationForm;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_ONLY_NOTICE: &str =
    "The customer store is unavailable. The registration was kept for this session only and will be lost on restart.";

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Stored remotely; the set has been refetched.
    Persisted,
    /// Held in memory only.
    SessionOnly { customer: Customer, notice: String },
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn CustomerRepository>,
    snapshot: Arc<RwLock<DashboardSnapshot>>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository,
            snapshot: Arc::new(RwLock::new(DashboardSnapshot::empty())),
        }
    }

    /// Fetch the customer set and replace the current one wholesale. An
    /// unreachable or empty store yields the mock dataset.
    pub async fn load(&self) -> DataSource {
        let (customers, source) = match self.repository.list().await {
            Ok(customers) if !customers.is_empty() => {
                tracing::info!("Loaded {} customers from store", customers.len());
                (customers, DataSource::Remote)
            }
            Ok(_) => {
                tracing::warn!("Customer store is empty, showing mock data");
                (mock_customers(), DataSource::Mock)
            }
            Err(e) => {
                tracing::warn!("Error fetching customers, showing mock data: {}", e);
                (mock_customers(), DataSource::Mock)
            }
        };

        self.replace(source, customers).await;
        source
    }

    pub async fn register(&self, form: RegistrationForm) -> RegistrationOutcome {
        let record = form.into_new_customer();

        match self.repository.insert(&record).await {
            Ok(()) => {
                tracing::info!("Registered {} in {}", record.company_name, record.city);
                self.load().await;
                RegistrationOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(
                    "Error inserting {}, keeping it for this session: {}",
                    record.company_name,
                    e
                );
                let customer = Customer::from_new(record, Uuid::new_v4().to_string(), Utc::now());
                self.prepend(customer.clone()).await;
                RegistrationOutcome::SessionOnly {
                    customer,
                    notice: SESSION_ONLY_NOTICE.to_string(),
                }
            }
        }
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot.read().await.clone()
    }

    async fn replace(&self, source: DataSource, customers: Vec<Customer>) {
        let rebuilt = DashboardSnapshot::build(source, customers);
        *self.snapshot.write().await = rebuilt;
    }

    async fn prepend(&self, customer: Customer) {
        let mut guard = self.snapshot.write().await;
        let mut customers = Vec::with_capacity(guard.customers.len() + 1);
        customers.push(customer);
        customers.append(&mut guard.customers);
        *guard = DashboardSnapshot::build(DataSource::Session, customers);
    }
}
