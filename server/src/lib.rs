// catalog_server/src/lib.rs

//! HTTP front end for the product catalog: configuration, shared state,
//! error-to-response mapping and the actix-web routes.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
