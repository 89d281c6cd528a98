// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;

// Message store
pub mod store;
