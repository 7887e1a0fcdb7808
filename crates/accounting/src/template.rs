//! Two-line journal entries for the simple income / expense / transfer forms.

use ledgerline_core::{DomainError, DomainResult};

use crate::line::{AccountId, JournalLine, LineSide};
use crate::transaction_type::TransactionType;

/// Builder for the balanced two-line entry behind each transaction form.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalTemplate {
    pub transaction_type: TransactionType,
    /// Account receiving the debit.
    pub debit_account: AccountId,
    /// Account receiving the credit.
    pub credit_account: AccountId,
    pub amount: f64,
    pub description: Option<String>,
}

impl JournalTemplate {
    /// Money received: debit the deposit account, credit the revenue account.
    pub fn income(
        deposit_account: impl Into<AccountId>,
        revenue_account: impl Into<AccountId>,
        amount: f64,
    ) -> Self {
        Self::new(TransactionType::Income, deposit_account, revenue_account, amount)
    }

    /// Money spent: debit the expense account, credit the paying account.
    pub fn expense(
        expense_account: impl Into<AccountId>,
        paying_account: impl Into<AccountId>,
        amount: f64,
    ) -> Self {
        Self::new(TransactionType::Expense, expense_account, paying_account, amount)
    }

    /// Money moved between accounts: debit `to`, credit `from`.
    pub fn transfer(
        from_account: impl Into<AccountId>,
        to_account: impl Into<AccountId>,
        amount: f64,
    ) -> Self {
        Self::new(TransactionType::Transfer, to_account, from_account, amount)
    }

    fn new(
        transaction_type: TransactionType,
        debit_account: impl Into<AccountId>,
        credit_account: impl Into<AccountId>,
        amount: f64,
    ) -> Self {
        Self {
            transaction_type,
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Expand into journal lines (debit first).
    pub fn lines(&self) -> DomainResult<Vec<JournalLine>> {
        if self.debit_account.as_str().trim().is_empty()
            || self.credit_account.as_str().trim().is_empty()
        {
            return Err(DomainError::validation("account id must not be empty"));
        }
        if self.transaction_type == TransactionType::Transfer
            && self.debit_account == self.credit_account
        {
            return Err(DomainError::validation(
                "transfer source and destination must differ",
            ));
        }

        let debit = LineSide::debit(self.amount)?;
        let credit = LineSide::credit(self.amount)?;

        let mut lines = vec![
            JournalLine::from_side(self.debit_account.clone(), debit),
            JournalLine::from_side(self.credit_account.clone(), credit),
        ];
        if let Some(desc) = &self.description {
            for line in &mut lines {
                line.description = Some(desc.clone());
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_transaction_type;

    #[test]
    fn income_debits_deposit_and_credits_revenue() {
        let lines = JournalTemplate::income("bank", "sales", 120.0).lines().unwrap();

        assert_eq!(lines[0], JournalLine::debit("bank", 120.0));
        assert_eq!(lines[1], JournalLine::credit("sales", 120.0));
    }

    #[test]
    fn transfer_debits_destination() {
        let lines = JournalTemplate::transfer("checking", "savings", 75.0)
            .with_description("monthly savings")
            .lines()
            .unwrap();

        assert_eq!(lines[0].account_id.as_str(), "savings");
        assert_eq!(lines[0].debit, Some(75.0));
        assert_eq!(lines[1].account_id.as_str(), "checking");
        assert_eq!(lines[1].credit, Some(75.0));
        assert!(lines.iter().all(|l| l.description.as_deref() == Some("monthly savings")));
    }

    #[test]
    fn every_template_passes_its_own_type_check() {
        let templates = [
            JournalTemplate::income("bank", "sales", 10.0),
            JournalTemplate::expense("rent", "bank", 950.0),
            JournalTemplate::transfer("bank", "petty-cash", 0.01),
        ];

        for t in templates {
            let lines = t.lines().unwrap();
            assert!(validate_transaction_type(&lines, t.transaction_type).is_valid());
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(JournalTemplate::expense("rent", "bank", 0.0).lines().is_err());
        assert!(JournalTemplate::income("bank", "sales", -1.0).lines().is_err());
        assert!(JournalTemplate::income("bank", "sales", f64::NAN).lines().is_err());
    }

    #[test]
    fn rejects_self_transfer_and_blank_accounts() {
        assert!(matches!(
            JournalTemplate::transfer("bank", "bank", 5.0).lines(),
            Err(DomainError::Validation(msg)) if msg.contains("must differ")
        ));
        assert!(JournalTemplate::expense(" ", "bank", 5.0).lines().is_err());
    }
}
