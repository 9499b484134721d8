use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::state::LedgerState;
use crate::models::{Category, Transaction, TransactionKind};

/// Categories offered by the quick-add form, in display order.
pub(crate) const CATEGORY_CHOICES: [&str; 6] = [
    "Food",
    "Transport",
    "Bills",
    "Entertainment",
    "Shopping",
    "Income",
];

const OPENING_BALANCE: Decimal = Decimal::from_parts(245_075, 0, 0, false, 2);

/// The session's starting data.
pub(crate) fn seed_state() -> LedgerState {
    LedgerState::new(OPENING_BALANCE, seed_transactions(), seed_categories())
}

pub(crate) fn seed_transactions() -> Vec<Transaction> {
    vec![
        txn("1", -8550, "Grocery Shopping", "Food", (2025, 5, 23), TransactionKind::Expense),
        txn("2", 250000, "Monthly Salary", "Income", (2025, 5, 20), TransactionKind::Income),
        txn("3", -4500, "Gas Station", "Transport", (2025, 5, 22), TransactionKind::Expense),
        txn("4", -12000, "Electric Bill", "Bills", (2025, 5, 21), TransactionKind::Expense),
    ]
}

pub(crate) fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("Food", Decimal::from(400), "#FF6B6B"),
        Category::new("Transport", Decimal::from(200), "#4ECDC4"),
        Category::new("Bills", Decimal::from(800), "#45B7D1"),
        Category::new("Entertainment", Decimal::from(300), "#96CEB4"),
        Category::new("Shopping", Decimal::from(250), "#FFEAA7"),
    ]
}

fn txn(
    id: &str,
    cents: i64,
    description: &str,
    category: &str,
    (y, m, d): (i32, u32, u32),
    kind: TransactionKind,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::new(cents, 2),
        description: description.to_string(),
        category: category.to_string(),
        // An invalid literal lands on the epoch; the seed date test catches it.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        kind,
    }
}
