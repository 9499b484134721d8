use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::aggregate::{derive_spent, total_expenses, total_income};
use super::form::{QuickAddForm, MAX_AMOUNT};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Transaction, TransactionDraft};

/// Figures shown on the balance card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BalanceSummary {
    pub(crate) balance: Decimal,
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
}

/// The authoritative in-memory ledger for a session.
///
/// Updates never mutate in place: [`LedgerState::add_transaction`] returns a
/// new state and leaves `self` as it was.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LedgerState {
    balance: Decimal,
    /// Newest first.
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    next_id: u64,
}

impl LedgerState {
    pub(crate) fn new(
        balance: Decimal,
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
    ) -> Self {
        let next_id = transactions
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let categories = derive_spent(&categories, &transactions);

        Self {
            balance,
            transactions,
            categories,
            next_id,
        }
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn summary(&self) -> BalanceSummary {
        BalanceSummary {
            balance: self.balance,
            total_income: total_income(&self.transactions),
            total_expenses: total_expenses(&self.transactions),
        }
    }

    /// Record a draft: assign the next id, prepend it, and move the balance by
    /// its signed amount. Category spending is recomputed from the new list.
    pub(crate) fn add_transaction(&self, draft: TransactionDraft) -> LedgerResult<LedgerState> {
        if draft.description.trim().is_empty() {
            warn!("Rejected transaction draft with empty description");
            return Err(LedgerError::Validation("Description is required".into()));
        }
        let too_large = || LedgerError::Validation("Amount is too large".into());
        if draft.amount.abs() > MAX_AMOUNT {
            warn!(amount = %draft.amount, "Rejected transaction draft over the amount limit");
            return Err(too_large());
        }

        let txn = draft.into_transaction(self.next_id.to_string());
        let balance = self.balance.checked_add(txn.amount).ok_or_else(too_large)?;
        info!(
            id = %txn.id,
            amount = %txn.amount,
            category = %txn.category,
            "Transaction added"
        );

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(txn);
        transactions.extend(self.transactions.iter().cloned());
        let categories = derive_spent(&self.categories, &transactions);

        Ok(Self {
            balance,
            transactions,
            categories,
            next_id: self.next_id + 1,
        })
    }

    /// Validate a quick-add form and apply it.
    pub(crate) fn submit(&self, form: &QuickAddForm, today: NaiveDate) -> LedgerResult<LedgerState> {
        let draft = form.to_draft(today).inspect_err(|e| {
            warn!(error = %e, "Rejected quick-add form");
        })?;
        self.add_transaction(draft)
    }
}
