// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::supabase_repository::SupabaseRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_data, get_dashboard, health_check, list_customers, list_regions, register_customer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SupabaseRepository::new(
        config.store.endpoint(),
        config.store.access_key(),
        &config.store.table,
    ));

    // Create service (application layer) and fetch the customer set once
    let dashboard_service = DashboardService::new(repository);
    let source = dashboard_service.load().await;
    tracing::info!("Initial customer set loaded from {:?}", source);

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/customers", get(list_customers).post(register_customer))
        .route("/regions", get(list_regions))
        .route("/chart", get(chart_data))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting vpp-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
