//! Accounting module (double-entry journal validation).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod currency;
pub mod line;
pub mod template;
pub mod transaction_type;
pub mod validation;

pub use currency::format_currency;
pub use line::{AccountId, JournalLine, LineSide};
pub use template::JournalTemplate;
pub use transaction_type::TransactionType;
pub use validation::{
    BALANCE_TOLERANCE, ValidationErrorKind, ValidationResult, validate_journal_entry,
    validate_journal_entry_strict, validate_transaction_type,
};
