use std::sync::{Arc, RwLock};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use ledgerline_accounting::{JournalLine, TransactionType};
use ledgerline_core::{DomainError, DomainResult, TransactionId};

/// A journal transaction that passed validation and was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedTransaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    pub lines: Vec<JournalLine>,
    /// Total debited (equal to total credited within tolerance).
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Storage for recorded journal transactions.
pub trait JournalStore: Send + Sync {
    /// Store a transaction; fails with `Conflict` if the id is taken.
    fn insert(&self, tx: PostedTransaction) -> DomainResult<()>;
    fn get(&self, id: TransactionId) -> Option<PostedTransaction>;
    /// All transactions in recording order.
    fn list(&self) -> Vec<PostedTransaction>;
}

impl<S> JournalStore for Arc<S>
where
    S: JournalStore + ?Sized,
{
    fn insert(&self, tx: PostedTransaction) -> DomainResult<()> {
        (**self).insert(tx)
    }

    fn get(&self, id: TransactionId) -> Option<PostedTransaction> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<PostedTransaction> {
        (**self).list()
    }
}

/// In-memory journal for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryJournalStore {
    inner: RwLock<Vec<PostedTransaction>>,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JournalStore for InMemoryJournalStore {
    fn insert(&self, tx: PostedTransaction) -> DomainResult<()> {
        let mut txs = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("journal store lock poisoned"))?;
        if txs.iter().any(|t| t.id == tx.id) {
            return Err(DomainError::conflict(format!("transaction {} already exists", tx.id)));
        }
        txs.push(tx);
        Ok(())
    }

    fn get(&self, id: TransactionId) -> Option<PostedTransaction> {
        let txs = self.inner.read().ok()?;
        txs.iter().find(|t| t.id == id).cloned()
    }

    fn list(&self) -> Vec<PostedTransaction> {
        match self.inner.read() {
            Ok(txs) => txs.clone(),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted(amount: f64) -> PostedTransaction {
        PostedTransaction {
            id: TransactionId::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: None,
            transaction_type: None,
            lines: vec![JournalLine::debit("A", amount), JournalLine::credit("B", amount)],
            amount,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn keeps_recording_order() {
        let store = InMemoryJournalStore::new();
        let first = posted(1.0);
        let second = posted(2.0);
        store.insert(first.clone()).unwrap();
        store.insert(second.clone()).unwrap();

        assert_eq!(store.list(), vec![first.clone(), second]);
        assert_eq!(store.get(first.id), Some(first));
        assert_eq!(store.get(TransactionId::new()), None);
    }

    #[test]
    fn duplicate_id_is_a_conflict() {
        let store = Arc::new(InMemoryJournalStore::new());
        let tx = posted(5.0);
        store.insert(tx.clone()).unwrap();

        assert!(matches!(store.insert(tx), Err(DomainError::Conflict(_))));
        assert_eq!(store.list().len(), 1);
    }
}
