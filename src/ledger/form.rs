use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::sample::CATEGORY_CHOICES;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionDraft, TransactionKind};

/// Raw quick-add field values as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QuickAddForm {
    pub(crate) kind: TransactionKind,
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) category: String,
}

impl Default for QuickAddForm {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: String::new(),
            description: String::new(),
            category: CATEGORY_CHOICES[0].to_string(),
        }
    }
}

impl QuickAddForm {
    /// Validate the form and build a draft dated `today`.
    ///
    /// The typed sign is ignored; the magnitude takes the sign of `kind`.
    pub(crate) fn to_draft(&self, today: NaiveDate) -> LedgerResult<TransactionDraft> {
        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(LedgerError::Validation("Amount is required".into()));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation("Description is required".into()));
        }

        let amount = parse_amount(amount_text)?;

        Ok(TransactionDraft {
            amount: self.kind.signed(amount),
            description: description.to_string(),
            category: self.category.trim().to_string(),
            date: today,
            kind: self.kind,
        })
    }

    /// Clear the free-text fields, keeping the selected kind and category.
    pub(crate) fn clear_text(&mut self) {
        self.amount.clear();
        self.description.clear();
    }

    /// Step through `CATEGORY_CHOICES`, wrapping at both ends.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = CATEGORY_CHOICES.len() as i32;
        let current = CATEGORY_CHOICES
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&self.category))
            .unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len) as usize;
        self.category = CATEGORY_CHOICES[next].to_string();
    }
}

/// Largest magnitude a single transaction may carry (one trillion). Keeps the
/// balance and every running total far from `Decimal::MAX`.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Parse a user-typed amount. Accepts an optional sign, a leading `$`, and
/// thousands separators.
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let cleaned: String = rest
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() || cleaned.starts_with(['-', '+']) {
        return Err(LedgerError::Validation(format!("Invalid amount: {input}")));
    }

    let value = Decimal::from_str(&cleaned)
        .map_err(|_| LedgerError::Validation(format!("Invalid amount: {input}")))?;
    if value > MAX_AMOUNT {
        return Err(LedgerError::Validation("Amount is too large".into()));
    }
    Ok(if negative { -value } else { value })
}
