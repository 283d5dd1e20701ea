// Domain layer - Pure types and functions, no I/O
pub mod customer;
pub mod dashboard;
pub mod masking;
pub mod region;
pub mod registration;
