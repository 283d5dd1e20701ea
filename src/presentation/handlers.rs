// HTTP request handlers
use crate::domain::region::{ChartDataPoint, RegionStat};
use crate::domain::registration::RegistrationForm;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{customer_views, CustomerView, DashboardView, RegistrationView};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard snapshot
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard_service.snapshot().await.into())
}

pub async fn list_customers(State(state): State<Arc<AppState>>) -> Json<Vec<CustomerView>> {
    let snapshot = state.dashboard_service.snapshot().await;
    Json(customer_views(&snapshot.customers))
}

pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<Vec<RegionStat>> {
    Json(state.dashboard_service.snapshot().await.regions)
}

pub async fn chart_data(State(state): State<Arc<AppState>>) -> Json<Vec<ChartDataPoint>> {
    Json(state.dashboard_service.snapshot().await.chart)
}

/// Register a new resource site. Store failures still succeed from the
/// operator's point of view; the response says the record is session-local.
pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegistrationForm>,
) -> impl IntoResponse {
    let view = RegistrationView::from(state.dashboard_service.register(form).await);
    let status = match view {
        RegistrationView::Persisted => StatusCode::CREATED,
        RegistrationView::SessionLocal { .. } => StatusCode::ACCEPTED,
    };
    (status, Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::customer_repository::{CustomerRepository, StoreError};
    use crate::application::dashboard_service::{DashboardService, SESSION_ONLY_NOTICE};
    use crate::domain::customer::{Customer, NewCustomer};
    use crate::domain::dashboard::DataSource;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct StubRepository {
        rows: Mutex<Vec<Customer>>,
        healthy: bool,
    }

    #[async_trait]
    impl CustomerRepository for StubRepository {
        async fn list(&self) -> Result<Vec<Customer>, StoreError> {
            if !self.healthy {
                return Err(StoreError::Decode("offline".to_string()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, record: &NewCustomer) -> Result<(), StoreError> {
            if !self.healthy {
                return Err(StoreError::Status {
                    status: 500,
                    body: "offline".to_string(),
                });
            }
            let mut rows = self.rows.lock().unwrap();
            let id = format!("row-{}", rows.len() + 1);
            rows.insert(0, Customer::from_new(record.clone(), id, chrono::Utc::now()));
            Ok(())
        }
    }

    async fn app_state(healthy: bool) -> Arc<AppState> {
        let repository = Arc::new(StubRepository {
            rows: Mutex::new(Vec::new()),
            healthy,
        });
        let dashboard_service = DashboardService::new(repository);
        dashboard_service.load().await;
        Arc::new(AppState { dashboard_service })
    }

    fn registration() -> RegistrationForm {
        serde_json::from_value(json!({
            "company_name": "嘉兴充电站",
            "province": "浙江",
            "city": "嘉兴",
            "capacity": "4.2",
            "demand_type": "充电",
            "contact_name": "吴九",
            "contact_phone": "13912345678"
        }))
        .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_while_store_down_is_accepted() {
        let state = app_state(false).await;

        let response = register_customer(State(state.clone()), Json(registration()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let body = json_body(response).await;
        assert_eq!(body["status"], "session_local");
        assert_eq!(body["notice"], SESSION_ONLY_NOTICE);
        assert_eq!(body["customer"]["contact_phone"], "139****5678");
        assert_eq!(body["customer"]["contact_name"], "吴**");
        assert_eq!(body["customer"]["city"], "嘉兴");

        let Json(dashboard) = get_dashboard(State(state)).await;
        assert_eq!(dashboard.source, DataSource::Session);
        assert_eq!(dashboard.customers[0].city, "嘉兴");
    }

    #[tokio::test]
    async fn test_register_with_healthy_store_is_created() {
        let state = app_state(true).await;

        let response = register_customer(State(state.clone()), Json(registration()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await, json!({"status": "persisted"}));

        let Json(regions) = list_regions(State(state)).await;
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].ev_mw, 4.2);
    }

    #[tokio::test]
    async fn test_customer_listings_are_masked() {
        let state = app_state(false).await;

        let Json(customers) = list_customers(State(state.clone())).await;
        assert!(!customers.is_empty());
        let first = &customers[0];
        assert_eq!(first.contact_name.as_deref(), Some("张**"));
        assert_eq!(first.contact_phone.as_deref(), Some("138****8000"));

        let Json(dashboard) = get_dashboard(State(state.clone())).await;
        assert_eq!(dashboard.source, DataSource::Mock);
        assert_eq!(dashboard.customers[0].contact_phone.as_deref(), Some("138****8000"));

        // stored set keeps the raw contact details
        let snapshot = state.dashboard_service.snapshot().await;
        assert_eq!(snapshot.customers[0].contact_phone.as_deref(), Some("13800138000"));
    }
}
