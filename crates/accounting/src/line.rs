use serde::{Deserialize, Serialize};

use ledgerline_core::{DomainError, DomainResult, ValueObject};

/// Opaque ledger account identifier (e.g. "1000" or an external ledger id).
///
/// Existence and account type are resolved by the external ledger, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One leg of a journal entry, as submitted by a client.
///
/// Both amounts are optional and may be set together; the balance check sums
/// whatever is present. Use [`JournalLine::side`] to get the unambiguous form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValueObject for JournalLine {}

impl JournalLine {
    pub fn debit(account_id: impl Into<AccountId>, amount: f64) -> Self {
        Self {
            account_id: account_id.into(),
            debit: Some(amount),
            credit: None,
            description: None,
        }
    }

    pub fn credit(account_id: impl Into<AccountId>, amount: f64) -> Self {
        Self {
            account_id: account_id.into(),
            debit: None,
            credit: Some(amount),
            description: None,
        }
    }

    pub fn from_side(account_id: impl Into<AccountId>, side: LineSide) -> Self {
        match side {
            LineSide::Debit(amount) => Self::debit(account_id, amount),
            LineSide::Credit(amount) => Self::credit(account_id, amount),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the line carries a positive debit amount.
    pub fn has_debit(&self) -> bool {
        self.debit.is_some_and(|v| v > 0.0)
    }

    /// True when the line carries a positive credit amount.
    pub fn has_credit(&self) -> bool {
        self.credit.is_some_and(|v| v > 0.0)
    }

    /// Resolve the line into exactly one side.
    ///
    /// An explicit zero on the other side is treated as unset, so
    /// `{debit: 100, credit: 0}` is a debit line.
    pub fn side(&self) -> DomainResult<LineSide> {
        let debit = self.debit.filter(|v| *v != 0.0);
        let credit = self.credit.filter(|v| *v != 0.0);

        match (debit, credit) {
            (Some(d), None) => LineSide::debit(d),
            (None, Some(c)) => LineSide::credit(c),
            (Some(_), Some(_)) => Err(DomainError::validation(format!(
                "account {} sets both debit and credit",
                self.account_id
            ))),
            (None, None) => Err(DomainError::validation(format!(
                "account {} sets neither debit nor credit",
                self.account_id
            ))),
        }
    }
}

/// Direction and amount of a well-formed journal line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "side", content = "amount")]
pub enum LineSide {
    Debit(f64),
    Credit(f64),
}

impl ValueObject for LineSide {}

impl LineSide {
    pub fn debit(amount: f64) -> DomainResult<Self> {
        check_amount(amount).map(Self::Debit)
    }

    pub fn credit(amount: f64) -> DomainResult<Self> {
        check_amount(amount).map(Self::Credit)
    }

    pub fn amount(&self) -> f64 {
        match self {
            LineSide::Debit(a) | LineSide::Credit(a) => *a,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, LineSide::Debit(_))
    }
}

fn check_amount(amount: f64) -> DomainResult<f64> {
    if !amount.is_finite() {
        return Err(DomainError::validation("amount must be a finite number"));
    }
    if amount <= 0.0 {
        return Err(DomainError::validation("amount must be positive"));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_client_shape() {
        let line: JournalLine = serde_json::from_value(serde_json::json!({
            "accountId": "cash",
            "debit": 12.5,
            "description": "float top-up"
        }))
        .unwrap();

        assert_eq!(line.account_id.as_str(), "cash");
        assert_eq!(line.debit, Some(12.5));
        assert_eq!(line.credit, None);
        assert_eq!(line.description.as_deref(), Some("float top-up"));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_value(JournalLine::credit("rev", 40.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "accountId": "rev", "credit": 40.0 }));
    }

    #[test]
    fn side_of_single_value_lines() {
        assert_eq!(JournalLine::debit("A", 5.0).side().unwrap(), LineSide::Debit(5.0));
        assert_eq!(JournalLine::credit("B", 7.0).side().unwrap(), LineSide::Credit(7.0));
    }

    #[test]
    fn explicit_zero_counts_as_unset() {
        let mut line = JournalLine::debit("A", 100.0);
        line.credit = Some(0.0);
        assert_eq!(line.side().unwrap(), LineSide::Debit(100.0));
    }

    #[test]
    fn dual_value_line_has_no_side() {
        let mut line = JournalLine::debit("A", 100.0);
        line.credit = Some(100.0);
        match line.side().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("both debit and credit") => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_line_has_no_side() {
        let line = JournalLine {
            account_id: "A".into(),
            debit: None,
            credit: Some(0.0),
            description: None,
        };
        assert!(matches!(line.side(), Err(DomainError::Validation(msg)) if msg.contains("neither")));
    }

    #[test]
    fn negative_and_non_finite_amounts_are_rejected() {
        assert!(JournalLine::debit("A", -3.0).side().is_err());
        assert!(JournalLine::credit("A", f64::NAN).side().is_err());
        assert!(LineSide::debit(f64::INFINITY).is_err());
    }

    #[test]
    fn from_side_round_trips_direction() {
        let line = JournalLine::from_side("bank", LineSide::Credit(9.99));
        assert!(line.has_credit());
        assert!(!line.has_debit());
    }
}
