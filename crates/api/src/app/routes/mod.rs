use axum::Router;

pub mod system;
pub mod transactions;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/transactions", transactions::router())
}
