// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// Data access layer
pub mod store;
