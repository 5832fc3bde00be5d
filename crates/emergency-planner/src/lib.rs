pub mod assistant;
pub mod auth;
pub mod config;
pub mod error;
pub mod plans;
pub mod telemetry;
