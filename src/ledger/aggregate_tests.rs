#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::*;
use super::sample::{seed_categories, seed_transactions};
use crate::models::{Category, Transaction, TransactionKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_txn(id: &str, amount: Decimal, kind: TransactionKind, day: NaiveDate) -> Transaction {
    Transaction {
        id: id.into(),
        amount,
        description: format!("txn {id}"),
        category: "Food".into(),
        date: day,
        kind,
    }
}

fn make_category(name: &str, budget: Decimal, spent: Decimal) -> Category {
    Category {
        spent,
        ..Category::new(name, budget, "#FFFFFF")
    }
}

// ── totals ────────────────────────────────────────────────────

#[test]
fn test_totals_mixed_list() {
    let day = date(2025, 5, 23);
    let txns = vec![
        make_txn("1", dec!(-85.50), TransactionKind::Expense, day),
        make_txn("2", dec!(2500.00), TransactionKind::Income, day),
    ];
    assert_eq!(total_income(&txns), dec!(2500.00));
    assert_eq!(total_expenses(&txns), dec!(85.50));
}

#[test]
fn test_totals_empty_list() {
    assert_eq!(total_income(&[]), Decimal::ZERO);
    assert_eq!(total_expenses(&[]), Decimal::ZERO);
}

#[test]
fn test_totals_never_negative() {
    let day = date(2025, 5, 23);
    let txns = vec![
        make_txn("1", dec!(-10), TransactionKind::Expense, day),
        make_txn("2", dec!(-0.01), TransactionKind::Expense, day),
    ];
    assert_eq!(total_income(&txns), Decimal::ZERO);
    assert_eq!(total_expenses(&txns), dec!(10.01));
}

#[test]
fn test_totals_are_pure() {
    let txns = seed_transactions();
    let before = txns.clone();
    assert_eq!(total_income(&txns), total_income(&txns));
    assert_eq!(total_expenses(&txns), total_expenses(&txns));
    assert_eq!(txns, before);
}

#[test]
fn test_totals_seed_data() {
    let txns = seed_transactions();
    assert_eq!(total_income(&txns), dec!(2500.00));
    assert_eq!(total_expenses(&txns), dec!(250.50));
}

// ── Utilization ───────────────────────────────────────────────

#[test]
fn test_utilization_under_budget() {
    let u = Utilization::of(&make_category("Food", dec!(400), dec!(85.50)));
    assert_eq!(u.percent, dec!(21.375));
    assert_eq!(u.remaining, dec!(314.50));
    assert!(!u.over_budget);
    assert!((u.progress_ratio() - 0.21375).abs() < 1e-9);
}

#[test]
fn test_utilization_over_budget_caps_progress() {
    let u = Utilization::of(&make_category("Transport", dec!(200), dec!(250)));
    assert_eq!(u.percent, dec!(125));
    assert_eq!(u.remaining, dec!(-50));
    assert!(u.over_budget);
    assert_eq!(u.progress_ratio(), 1.0);
}

#[test]
fn test_utilization_zero_budget() {
    let u = Utilization::of(&make_category("Gifts", Decimal::ZERO, dec!(20)));
    assert_eq!(u.percent, Decimal::ZERO);
    assert_eq!(u.progress_ratio(), 0.0);
    assert_eq!(u.remaining, dec!(-20));
    assert!(u.over_budget);
}

#[test]
fn test_utilization_zero_budget_nothing_spent() {
    let u = Utilization::of(&make_category("Gifts", Decimal::ZERO, Decimal::ZERO));
    assert_eq!(u.percent, Decimal::ZERO);
    assert!(!u.over_budget);
}

#[test]
fn test_utilization_exactly_at_budget() {
    let u = Utilization::of(&make_category("Bills", dec!(800), dec!(800)));
    assert_eq!(u.percent, dec!(100));
    assert!(!u.over_budget);
    assert_eq!(u.progress_ratio(), 1.0);
}

// ── Date buckets ──────────────────────────────────────────────

#[test]
fn test_bucket_label_relative_days() {
    let today = date(2025, 5, 23);
    assert_eq!(bucket_label(today, today), "Today");
    assert_eq!(bucket_label(date(2025, 5, 22), today), "Yesterday");
    assert_eq!(bucket_label(date(2025, 5, 21), today), "Wednesday, May 21");
}

#[test]
fn test_bucket_label_crosses_month_and_year() {
    assert_eq!(bucket_label(date(2024, 12, 31), date(2025, 1, 1)), "Yesterday");
    assert_eq!(bucket_label(date(2024, 2, 29), date(2024, 3, 1)), "Yesterday");
    assert_eq!(bucket_label(date(2024, 12, 30), date(2025, 1, 1)), "Monday, Dec 30");
}

#[test]
fn test_bucket_label_future_date_is_named() {
    assert_eq!(bucket_label(date(2025, 5, 24), date(2025, 5, 23)), "Saturday, May 24");
}

#[test]
fn test_group_preserves_first_seen_bucket_order() {
    let today = date(2025, 5, 23);
    let txns = vec![
        make_txn("1", dec!(-1), TransactionKind::Expense, today),
        make_txn("2", dec!(-2), TransactionKind::Expense, date(2025, 5, 20)),
        make_txn("3", dec!(-3), TransactionKind::Expense, date(2025, 5, 22)),
        make_txn("4", dec!(-4), TransactionKind::Expense, today),
    ];

    let buckets = group_by_date_bucket(&txns, today);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Today", "Tuesday, May 20", "Yesterday"]);

    let today_ids: Vec<&str> = buckets[0].transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(today_ids, vec!["1", "4"]);
}

#[test]
fn test_group_membership_stable_under_reordering() {
    let today = date(2025, 5, 23);
    let mut txns = vec![
        make_txn("1", dec!(-1), TransactionKind::Expense, today),
        make_txn("2", dec!(5), TransactionKind::Income, date(2025, 5, 22)),
        make_txn("3", dec!(-3), TransactionKind::Expense, date(2025, 5, 1)),
        make_txn("4", dec!(-4), TransactionKind::Expense, date(2025, 5, 22)),
    ];

    let membership = |txns: &[Transaction]| {
        let mut pairs: Vec<(String, String)> = group_by_date_bucket(txns, today)
            .into_iter()
            .flat_map(|DateBucket { label, transactions }| {
                transactions
                    .into_iter()
                    .map(move |t| (label.clone(), t.id.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        pairs.sort();
        pairs
    };

    let forward = membership(&txns);
    txns.reverse();
    assert_eq!(membership(&txns), forward);
}

#[test]
fn test_group_empty() {
    assert!(group_by_date_bucket(&[], date(2025, 5, 23)).is_empty());
}

// ── Category spending ─────────────────────────────────────────

#[test]
fn test_derive_spent_matches_seed_figures() {
    let cats = derive_spent(&seed_categories(), &seed_transactions());
    let spent: Vec<Decimal> = cats.iter().map(|c| c.spent).collect();
    assert_eq!(
        spent,
        vec![dec!(85.50), dec!(45.00), dec!(120.00), dec!(0), dec!(0)]
    );
}

#[test]
fn test_derive_spent_ignores_income_and_case() {
    let day = date(2025, 5, 23);
    let mut refund = make_txn("1", dec!(30), TransactionKind::Income, day);
    refund.category = "Food".into();
    let mut lunch = make_txn("2", dec!(-12), TransactionKind::Expense, day);
    lunch.category = "food".into();

    let cats = derive_spent(&[make_category("Food", dec!(100), dec!(999))], &[refund, lunch]);
    assert_eq!(cats[0].spent, dec!(12));
}

#[test]
fn test_budget_totals() {
    let cats = vec![
        make_category("A", dec!(100), dec!(25)),
        make_category("B", dec!(300), dec!(75)),
    ];
    assert_eq!(budget_totals(&cats), (dec!(400), dec!(100)));
}

#[test]
fn test_top_spending_category_tie_goes_to_first() {
    let cats = vec![
        make_category("A", dec!(100), dec!(50)),
        make_category("B", dec!(100), dec!(50)),
        make_category("C", dec!(100), dec!(10)),
    ];
    assert_eq!(top_spending_category(&cats).unwrap().name, "A");
}

#[test]
fn test_top_spending_category_empty() {
    assert!(top_spending_category(&[]).is_none());
}
