use chrono::NaiveDate;
use serde::Deserialize;

use ledgerline_accounting::{JournalLine, JournalTemplate, TransactionType};
use ledgerline_core::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ValidateTransactionRequest {
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub lines: Vec<JournalLine>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub lines: Vec<JournalLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordIncomeRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub deposit_account_id: String,
    pub revenue_account_id: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordExpenseRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub expense_account_id: String,
    pub paying_account_id: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransferRequest {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: f64,
}

/// Transaction ready for validation and recording.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub lines: Vec<JournalLine>,
}

impl From<CreateTransactionRequest> for NewTransaction {
    fn from(body: CreateTransactionRequest) -> Self {
        Self {
            date: body.date,
            description: body.description,
            transaction_type: body.transaction_type,
            lines: body.lines,
        }
    }
}

impl NewTransaction {
    pub fn from_template(
        template: JournalTemplate,
        date: Option<NaiveDate>,
        description: Option<String>,
    ) -> DomainResult<Self> {
        let template = match &description {
            Some(d) => template.with_description(d.clone()),
            None => template,
        };
        Ok(Self {
            date,
            description,
            transaction_type: Some(template.transaction_type),
            lines: template.lines()?,
        })
    }
}

impl RecordIncomeRequest {
    pub fn into_transaction(self) -> DomainResult<NewTransaction> {
        let template =
            JournalTemplate::income(self.deposit_account_id, self.revenue_account_id, self.amount);
        NewTransaction::from_template(template, self.date, self.description)
    }
}

impl RecordExpenseRequest {
    pub fn into_transaction(self) -> DomainResult<NewTransaction> {
        let template =
            JournalTemplate::expense(self.expense_account_id, self.paying_account_id, self.amount);
        NewTransaction::from_template(template, self.date, self.description)
    }
}

impl RecordTransferRequest {
    pub fn into_transaction(self) -> DomainResult<NewTransaction> {
        let template =
            JournalTemplate::transfer(self.from_account_id, self.to_account_id, self.amount);
        NewTransaction::from_template(template, self.date, self.description)
    }
}

// -------------------------
// Request-schema checks
// -------------------------

/// Schema-level checks applied before the balance validator sees the lines:
/// at least two lines, non-empty account ids, finite non-negative amounts.
pub fn check_lines(lines: &[JournalLine]) -> DomainResult<()> {
    if lines.len() < 2 {
        return Err(DomainError::validation(
            "a journal entry needs at least two lines",
        ));
    }

    for (idx, line) in lines.iter().enumerate() {
        let n = idx + 1;
        if line.account_id.as_str().trim().is_empty() {
            return Err(DomainError::validation(format!("line {n}: accountId is required")));
        }
        for (field, value) in [("debit", line.debit), ("credit", line.credit)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(DomainError::validation(format!(
                        "line {n}: {field} must be a non-negative number"
                    )));
                }
            }
        }
    }

    Ok(())
}
