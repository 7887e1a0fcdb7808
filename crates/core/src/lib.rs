//! `ledgerline-core` — shared domain building blocks.
//!
//! Pure primitives only (error model, identifiers, value-object marker). No IO.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::TransactionId;
pub use value_object::ValueObject;
