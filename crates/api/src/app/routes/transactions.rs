use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use ledgerline_core::{DomainResult, TransactionId};

use crate::app::dto::{self, NewTransaction};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_transaction).get(list_transactions))
        .route("/validate", post(validate_transaction))
        .route("/income", post(record_income))
        .route("/expense", post(record_expense))
        .route("/transfer", post(record_transfer))
        .route("/:id", get(get_transaction))
}

/// Dry run: report the validation result without recording anything.
pub async fn validate_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ValidateTransactionRequest>,
) -> axum::response::Response {
    let result = match services.validate(&body.lines, body.transaction_type) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if !result.is_valid() {
        return errors::rejected_entry(result);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "data": result })),
    )
        .into_response()
}

pub async fn create_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateTransactionRequest>,
) -> axum::response::Response {
    record(&services, Ok(body.into()))
}

pub async fn record_income(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordIncomeRequest>,
) -> axum::response::Response {
    record(&services, body.into_transaction())
}

pub async fn record_expense(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordExpenseRequest>,
) -> axum::response::Response {
    record(&services, body.into_transaction())
}

pub async fn record_transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RecordTransferRequest>,
) -> axum::response::Response {
    record(&services, body.into_transaction())
}

pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.transactions_list();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "success": true, "data": items })),
    )
        .into_response()
}

pub async fn get_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: TransactionId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.transaction_get(id) {
        Some(tx) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "data": tx })),
        )
            .into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "transaction not found"),
    }
}

fn record(services: &AppServices, tx: DomainResult<NewTransaction>) -> axum::response::Response {
    let tx = match tx {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.record(tx) {
        Ok(posted) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "success": true, "data": posted })),
        )
            .into_response(),
        Err(e) => errors::record_error_to_response(e),
    }
}
