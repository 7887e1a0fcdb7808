use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use ledgerline_accounting::{
    JournalLine, TransactionType, ValidationResult, validate_journal_entry,
    validate_journal_entry_strict, validate_transaction_type,
};
use ledgerline_core::{DomainError, DomainResult, TransactionId};

use crate::app::dto::{self, NewTransaction};
use crate::app::store::{InMemoryJournalStore, JournalStore, PostedTransaction};

/// Why a transaction was not recorded.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Structurally invalid request (schema or strict line checks).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Lines were well-formed but the entry failed validation.
    #[error("journal entry rejected")]
    Rejected(ValidationResult),
}

pub struct AppServices {
    store: Arc<dyn JournalStore>,
    strict_lines: bool,
}

impl AppServices {
    pub fn new(store: Arc<dyn JournalStore>, strict_lines: bool) -> Self {
        Self {
            store,
            strict_lines,
        }
    }

    pub fn in_memory(strict_lines: bool) -> Self {
        Self::new(Arc::new(InMemoryJournalStore::new()), strict_lines)
    }

    /// Run the validator the way this deployment is configured.
    ///
    /// Strict mode turns malformed lines into an error before balancing.
    pub fn validate(
        &self,
        lines: &[JournalLine],
        transaction_type: Option<TransactionType>,
    ) -> DomainResult<ValidationResult> {
        if self.strict_lines {
            validate_journal_entry_strict(lines)?;
        }
        Ok(match transaction_type {
            Some(ty) => validate_transaction_type(lines, ty),
            None => validate_journal_entry(lines),
        })
    }

    /// Check, validate and store a transaction.
    pub fn record(&self, tx: NewTransaction) -> Result<PostedTransaction, RecordError> {
        dto::check_lines(&tx.lines)?;

        let result = self.validate(&tx.lines, tx.transaction_type)?;
        if !result.is_valid() {
            tracing::info!(
                kind = ?result.kind,
                total_debits = result.total_debits,
                total_credits = result.total_credits,
                "journal entry rejected"
            );
            return Err(RecordError::Rejected(result));
        }

        let now = Utc::now();
        let posted = PostedTransaction {
            id: TransactionId::new(),
            date: tx.date.unwrap_or_else(|| now.date_naive()),
            description: tx.description,
            transaction_type: tx.transaction_type,
            lines: tx.lines,
            amount: result.total_debits,
            recorded_at: now,
        };
        self.store.insert(posted.clone())?;

        tracing::info!(
            transaction_id = %posted.id,
            lines = posted.lines.len(),
            amount = posted.amount,
            "journal transaction recorded"
        );
        Ok(posted)
    }

    pub fn transactions_list(&self) -> Vec<PostedTransaction> {
        self.store.list()
    }

    pub fn transaction_get(&self, id: TransactionId) -> Option<PostedTransaction> {
        self.store.get(id)
    }
}
