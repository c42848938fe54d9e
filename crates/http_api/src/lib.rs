//! Inventory service HTTP layer
//!
//! This crate provides the HTTP API for the inventory service.

pub mod config;
pub mod handlers;
pub mod propagation;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
