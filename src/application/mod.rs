// Application layer - Use cases and ports
pub mod customer_repository;
pub mod dashboard_service;
pub mod mock_data;
