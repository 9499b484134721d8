use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Category, Transaction};

/// Sum of all income amounts.
pub(crate) fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of expense magnitudes, reported as a non-negative number.
pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.abs_amount())
        .sum()
}

/// How much of a category's budget has been used.
///
/// `percent` is the true ratio and may exceed 100. A category with no budget
/// (zero or negative) reports 0% instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Utilization {
    pub(crate) percent: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) over_budget: bool,
}

impl Utilization {
    pub(crate) fn of(category: &Category) -> Self {
        let percent = if category.budget > Decimal::ZERO {
            category
                .spent
                .checked_div(category.budget)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        Self {
            percent,
            remaining: category.remaining(),
            over_budget: category.is_over_budget(),
        }
    }

    /// Fraction of the progress bar to fill, clamped to `0.0..=1.0`.
    pub(crate) fn progress_ratio(&self) -> f64 {
        (self.percent / Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

/// A run of transactions that share a relative date label.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DateBucket<'a> {
    pub(crate) label: String,
    pub(crate) transactions: Vec<&'a Transaction>,
}

/// Label a date relative to `today`: "Today", "Yesterday", or e.g. "Friday, May 23".
pub(crate) fn bucket_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        date.format("%A, %b %-d").to_string()
    }
}

/// Partition transactions into date buckets. Buckets appear in the order their
/// label is first seen; transactions keep their input order within a bucket.
pub(crate) fn group_by_date_bucket(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<DateBucket<'_>> {
    let mut buckets: Vec<DateBucket<'_>> = Vec::new();

    for txn in transactions {
        let label = bucket_label(txn.date, today);
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.transactions.push(txn),
            None => buckets.push(DateBucket {
                label,
                transactions: vec![txn],
            }),
        }
    }

    buckets
}

/// Expense magnitudes per category name, in first-seen order.
pub(crate) fn spending_by_category(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut spending: Vec<(String, Decimal)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let key = txn.category.to_lowercase();
        match spending.iter_mut().find(|(name, _)| name.to_lowercase() == key) {
            Some((_, total)) => *total += txn.abs_amount(),
            None => spending.push((txn.category.clone(), txn.abs_amount())),
        }
    }

    spending
}

/// Return copies of `categories` whose `spent` is recomputed from the expense
/// transactions filed under each category name.
pub(crate) fn derive_spent(categories: &[Category], transactions: &[Transaction]) -> Vec<Category> {
    let spending = spending_by_category(transactions);
    categories
        .iter()
        .map(|cat| {
            let lower = cat.name.to_lowercase();
            let spent = spending
                .iter()
                .find(|(name, _)| name.to_lowercase() == lower)
                .map(|(_, amt)| *amt)
                .unwrap_or(Decimal::ZERO);
            Category {
                spent,
                ..cat.clone()
            }
        })
        .collect()
}

/// Total budget and total spent across all categories.
pub(crate) fn budget_totals(categories: &[Category]) -> (Decimal, Decimal) {
    categories.iter().fold((Decimal::ZERO, Decimal::ZERO), |(b, s), c| {
        (b + c.budget, s + c.spent)
    })
}

/// Category with the highest `spent`. Ties go to the earliest category.
pub(crate) fn top_spending_category(categories: &[Category]) -> Option<&Category> {
    categories.iter().fold(None, |best: Option<&Category>, cat| match best {
        Some(b) if b.spent >= cat.spent => Some(b),
        _ => Some(cat),
    })
}
