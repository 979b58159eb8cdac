pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod telemetry;
