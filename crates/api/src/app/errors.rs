use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ledgerline_accounting::{ValidationErrorKind, ValidationResult};
use ledgerline_core::DomainError;

use crate::app::services::RecordError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "success": false,
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

/// 400 carrying the validator's message plus the full result for the client.
pub fn rejected_entry(result: ValidationResult) -> axum::response::Response {
    let code = match result.kind {
        Some(ValidationErrorKind::Unbalanced) => "unbalanced",
        Some(ValidationErrorKind::MissingDebitSide) => "missing_debit_side",
        Some(ValidationErrorKind::MissingCreditSide) => "missing_credit_side",
        None => "invalid_entry",
    };
    let message = result
        .error
        .clone()
        .unwrap_or_else(|| "journal entry is invalid".to_string());

    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "error": message,
            "code": code,
            "result": result,
        })),
    )
        .into_response()
}

pub fn record_error_to_response(err: RecordError) -> axum::response::Response {
    match err {
        RecordError::Rejected(result) => rejected_entry(result),
        RecordError::Domain(e) => domain_error_to_response(e),
    }
}
