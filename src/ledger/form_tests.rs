#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::form::*;
use crate::error::LedgerError;
use crate::models::TransactionKind;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 23).unwrap()
}

fn form(kind: TransactionKind, amount: &str, description: &str) -> QuickAddForm {
    QuickAddForm {
        kind,
        amount: amount.into(),
        description: description.into(),
        ..QuickAddForm::default()
    }
}

#[test]
fn test_default_form() {
    let f = QuickAddForm::default();
    assert_eq!(f.kind, TransactionKind::Expense);
    assert_eq!(f.category, "Food");
    assert!(f.amount.is_empty());
}

#[test]
fn test_expense_amount_is_negated() {
    let draft = form(TransactionKind::Expense, "50", "Coffee").to_draft(today()).unwrap();
    assert_eq!(draft.amount, dec!(-50));
    assert_eq!(draft.date, today());
    assert_eq!(draft.description, "Coffee");
}

#[test]
fn test_typed_sign_is_ignored() {
    let draft = form(TransactionKind::Expense, "-50", "Coffee").to_draft(today()).unwrap();
    assert_eq!(draft.amount, dec!(-50));

    let draft = form(TransactionKind::Income, "-1200.5", "Refund").to_draft(today()).unwrap();
    assert_eq!(draft.amount, dec!(1200.5));
}

#[test]
fn test_description_is_trimmed() {
    let draft = form(TransactionKind::Income, "10", "  Gift  ").to_draft(today()).unwrap();
    assert_eq!(draft.description, "Gift");
}

#[test]
fn test_missing_amount_rejected() {
    let err = form(TransactionKind::Expense, "  ", "Coffee").to_draft(today()).unwrap_err();
    assert_eq!(err, LedgerError::Validation("Amount is required".into()));
}

#[test]
fn test_missing_description_rejected() {
    let err = form(TransactionKind::Expense, "5", "   ").to_draft(today()).unwrap_err();
    assert_eq!(err, LedgerError::Validation("Description is required".into()));
}

#[test]
fn test_unparseable_amount_rejected() {
    for bad in ["abc", "1.2.3", "NaN", "inf", "$", "--5", "5e"] {
        let result = form(TransactionKind::Expense, bad, "Coffee").to_draft(today());
        assert!(
            matches!(result, Err(LedgerError::Validation(_))),
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn test_parse_amount_limit() {
    assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
    assert_eq!(parse_amount("-1000000000000").unwrap(), -MAX_AMOUNT);
    for big in ["1000000000000.01", "-1000000000001", "79228162514264337593543950335"] {
        assert_eq!(
            parse_amount(big).unwrap_err(),
            LedgerError::Validation("Amount is too large".into()),
            "expected limit rejection for {big:?}"
        );
    }
}

#[test]
fn test_parse_amount_accepts_currency_formatting() {
    assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("-$4.50").unwrap(), dec!(-4.50));
    assert_eq!(parse_amount("+7").unwrap(), dec!(7));
    assert_eq!(parse_amount("0").unwrap(), dec!(0));
}

#[test]
fn test_cycle_category_wraps() {
    let mut f = QuickAddForm::default();
    f.cycle_category(-1);
    assert_eq!(f.category, "Income");
    f.cycle_category(1);
    assert_eq!(f.category, "Food");
    f.cycle_category(2);
    assert_eq!(f.category, "Bills");
}

#[test]
fn test_clear_text_keeps_selection() {
    let mut f = form(TransactionKind::Income, "10", "Gift");
    f.category = "Shopping".into();
    f.clear_text();
    assert!(f.amount.is_empty());
    assert!(f.description.is_empty());
    assert_eq!(f.kind, TransactionKind::Income);
    assert_eq!(f.category, "Shopping");
}
