//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: validation policy + journal storage behind one handle
//! - `store.rs`: journal storage trait and the in-memory implementation
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and request-schema checks
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod store;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::in_memory(config.strict_lines));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
