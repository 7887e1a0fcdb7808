//! Double-entry balance and transaction-shape validation.
//!
//! Failures are reported as [`ValidationResult`] values, never as errors or
//! panics: the caller decides how to surface them.

use serde::{Deserialize, Serialize};

use ledgerline_core::{DomainError, DomainResult, ValueObject};

use crate::currency::format_currency;
use crate::line::JournalLine;
use crate::transaction_type::TransactionType;

/// Absolute tolerance when comparing debit and credit totals (one cent).
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Why a validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Debit and credit totals differ by more than [`BALANCE_TOLERANCE`].
    Unbalanced,
    /// Balanced, but no line carries a positive debit.
    MissingDebitSide,
    /// Balanced, but no line carries a positive credit.
    MissingCreditSide,
}

/// Outcome of validating a candidate set of journal lines.
///
/// `total_debits` / `total_credits` always hold the literal sums, whatever the
/// outcome. `kind` is set exactly when `error` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_balanced: bool,
    pub total_debits: f64,
    pub total_credits: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValidationErrorKind>,
}

impl ValueObject for ValidationResult {}

impl ValidationResult {
    /// True when the entry is balanced and passed any shape check.
    pub fn is_valid(&self) -> bool {
        self.is_balanced && self.error.is_none()
    }

    fn shape_failure(mut self, kind: ValidationErrorKind, message: &str) -> Self {
        self.error = Some(message.to_string());
        self.kind = Some(kind);
        self
    }
}

/// Check that total debits equal total credits within [`BALANCE_TOLERANCE`].
///
/// Absent amounts count as zero. Lines carrying both amounts, or negative
/// amounts, are summed as-is; rejecting them is the caller's job (or use
/// [`validate_journal_entry_strict`]). An empty slice balances at zero.
pub fn validate_journal_entry(lines: &[JournalLine]) -> ValidationResult {
    let total_debits = ordered_sum(lines.iter().filter_map(|l| l.debit));
    let total_credits = ordered_sum(lines.iter().filter_map(|l| l.credit));

    let is_balanced = (total_debits - total_credits).abs() <= BALANCE_TOLERANCE;

    let (error, kind) = if is_balanced {
        (None, None)
    } else {
        (
            Some(format!(
                "Debits ({}) must equal credits ({})",
                format_currency(total_debits),
                format_currency(total_credits)
            )),
            Some(ValidationErrorKind::Unbalanced),
        )
    };

    ValidationResult {
        is_balanced,
        total_debits,
        total_credits,
        error,
        kind,
    }
}

/// Balance check followed by the directional check for `expected`.
///
/// A balance failure is returned unchanged. Otherwise the entry needs at least
/// one positive debit line and one positive credit line; the debit side is
/// checked first. Transfers use the same rule (no account-type lookup).
pub fn validate_transaction_type(
    lines: &[JournalLine],
    expected: TransactionType,
) -> ValidationResult {
    let result = validate_journal_entry(lines);
    if !result.is_balanced {
        return result;
    }

    if !lines.iter().any(JournalLine::has_debit) {
        let message = match expected {
            TransactionType::Income => {
                "Income transactions require a debit line for the receiving account"
            }
            TransactionType::Expense => {
                "Expense transactions require a debit line for the expense account"
            }
            TransactionType::Transfer => {
                "Transfer transactions require a debit line for the destination account"
            }
        };
        return result.shape_failure(ValidationErrorKind::MissingDebitSide, message);
    }

    if !lines.iter().any(JournalLine::has_credit) {
        let message = match expected {
            TransactionType::Income => {
                "Income transactions require a credit line for the revenue account"
            }
            TransactionType::Expense => {
                "Expense transactions require a credit line for the paying account"
            }
            TransactionType::Transfer => {
                "Transfer transactions require a credit line for the source account"
            }
        };
        return result.shape_failure(ValidationErrorKind::MissingCreditSide, message);
    }

    result
}

/// Like [`validate_journal_entry`], but every line must resolve to exactly one
/// positive, finite side first.
///
/// Structural problems are errors (with the 1-based line number); balance
/// problems are still reported through the returned result.
pub fn validate_journal_entry_strict(lines: &[JournalLine]) -> DomainResult<ValidationResult> {
    for (idx, line) in lines.iter().enumerate() {
        line.side()
            .map_err(|e| DomainError::validation(format!("line {}: {}", idx + 1, e.detail())))?;
    }
    Ok(validate_journal_entry(lines))
}

// Sorted so the total does not depend on line order.
fn ordered_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}
