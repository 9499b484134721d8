#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::app::{App, FormField, InputMode};
use super::commands::{handle_command, parse_quick_add};
use crate::error::InsightError;
use crate::insight::{InsightProvider, InsightStatus, Insights};
use crate::ledger::sample::seed_state;
use crate::models::{Category, TransactionKind};

struct EchoInsight {
    gate: Mutex<()>,
}

impl InsightProvider for EchoInsight {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn generate(&self, categories: &[Category]) -> Result<String, InsightError> {
        let _guard = self.gate.lock().unwrap();
        Ok(format!("{} categories reviewed", categories.len()))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 23).unwrap()
}

fn app_with(provider: Arc<EchoInsight>) -> App {
    App::new(seed_state(), Insights::new(provider), Some(today()))
}

fn app() -> App {
    app_with(Arc::new(EchoInsight {
        gate: Mutex::new(()),
    }))
}

fn wait_for_insight(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.insights.is_pending() && Instant::now() < deadline {
        app.tick();
        std::thread::sleep(Duration::from_millis(5));
    }
}

// ── Clock ──────────────────────────────────────────────────

#[test]
fn test_pinned_today_survives_tick() {
    let mut app = app();
    app.tick();
    assert_eq!(app.today, today());
}

// ── Quick add form ─────────────────────────────────────────

#[test]
fn test_submit_form_success_clears_text_and_closes() {
    let mut app = app();
    app.open_form();
    for c in "12.50".chars() {
        app.form_push_char(c);
    }
    app.form_next_field();
    for c in "Coffee".chars() {
        app.form_push_char(c);
    }
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.ledger.balance(), dec!(2438.25));
    assert!(app.form.amount.is_empty());
    assert!(app.form.description.is_empty());
    let first = &app.ledger.transactions()[0];
    assert_eq!(first.description, "Coffee");
    assert_eq!(first.amount, dec!(-12.50));
    assert_eq!(first.date, today());
    assert!(app.status_message.starts_with("Added expense: Coffee"));
}

#[test]
fn test_submit_form_failure_keeps_form_open() {
    let mut app = app();
    app.open_form();
    for c in "20".chars() {
        app.form_push_char(c);
    }
    app.submit_form();

    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.amount, "20");
    assert_eq!(app.ledger.transactions().len(), 4);
    assert_eq!(app.ledger.balance(), dec!(2450.75));
    assert_eq!(app.status_message, "Description is required");
}

#[test]
fn test_selections_persist_after_submit() {
    let mut app = app();
    app.open_form();
    app.form_field = FormField::Kind;
    app.form_adjust(1);
    app.form_field = FormField::Category;
    app.form_adjust(2);
    app.form.amount = "300".into();
    app.form.description = "Freelance".into();
    app.submit_form();

    assert_eq!(app.form.kind, TransactionKind::Income);
    assert_eq!(app.form.category, "Bills");
    assert_eq!(app.ledger.balance(), dec!(2750.75));
}

#[test]
fn test_cancel_form_keeps_text() {
    let mut app = app();
    app.open_form();
    app.form_push_char('5');
    app.cancel_form();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form.amount, "5");
}

#[test]
fn test_form_field_cycle_wraps() {
    let mut app = app();
    app.open_form();
    assert_eq!(app.form_field, FormField::Amount);
    app.form_next_field();
    app.form_next_field();
    assert_eq!(app.form_field, FormField::Category);
    app.form_next_field();
    assert_eq!(app.form_field, FormField::Kind);
    app.form_prev_field();
    assert_eq!(app.form_field, FormField::Category);
}

#[test]
fn test_amount_field_filters_chars() {
    let mut app = app();
    app.open_form();
    for c in "$1,2a3.4x5".chars() {
        app.form_push_char(c);
    }
    assert_eq!(app.form.amount, "$1,23.45");
    app.form_backspace();
    assert_eq!(app.form.amount, "$1,23.4");
}

#[test]
fn test_space_toggles_kind_selector() {
    let mut app = app();
    app.open_form();
    app.form_field = FormField::Kind;
    app.form_push_char(' ');
    assert_eq!(app.form.kind, TransactionKind::Income);
}

// ── Commands ───────────────────────────────────────────────

#[test]
fn test_parse_quick_add_with_tag() {
    let form = parse_quick_add("4.50 Morning coffee #transport", TransactionKind::Expense);
    assert_eq!(form.amount, "4.50");
    assert_eq!(form.description, "Morning coffee");
    assert_eq!(form.category, "Transport");
}

#[test]
fn test_parse_quick_add_defaults() {
    let expense = parse_quick_add("9 Lunch", TransactionKind::Expense);
    assert_eq!(expense.category, "Food");
    let income = parse_quick_add("2500 Salary", TransactionKind::Income);
    assert_eq!(income.category, "Income");
}

#[test]
fn test_parse_quick_add_unknown_tag_kept() {
    let form = parse_quick_add("15 Gift #Travel", TransactionKind::Expense);
    assert_eq!(form.category, "Travel");
}

#[test]
fn test_expense_command_adds_transaction() {
    let mut app = app();
    handle_command("e 85.50 Groceries #Food", &mut app).unwrap();
    assert_eq!(app.ledger.balance(), dec!(2365.25));
    let food = app
        .ledger
        .categories()
        .iter()
        .find(|c| c.name == "Food")
        .unwrap();
    assert_eq!(food.spent, dec!(171.00));
}

#[test]
fn test_income_command_invalid_amount_rejected() {
    let mut app = app();
    handle_command("income abc Bonus", &mut app).unwrap();
    assert_eq!(app.ledger.transactions().len(), 4);
    assert!(app.status_message.starts_with("Invalid amount"));
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("insigt", &mut app).unwrap();
    assert!(app.status_message.contains(":insight"));
}

#[test]
fn test_empty_command_is_noop() {
    let mut app = app();
    app.set_status("Added expense: Coffee ($12.50)");
    for input in ["", "   "] {
        handle_command(input, &mut app).unwrap();
    }
    assert_eq!(app.status_message, "Added expense: Coffee ($12.50)");
    assert_eq!(app.ledger.transactions().len(), 4);
    assert!(app.running);
}

#[test]
fn test_today_command_pins_and_rejects() {
    let mut app = app();
    handle_command("today 2025-06-01", &mut app).unwrap();
    assert_eq!(app.today, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    handle_command("today soon", &mut app).unwrap();
    assert_eq!(app.today, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    assert!(app.status_message.starts_with("Invalid date"));
}

#[test]
fn test_quit_command() {
    let mut app = app();
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

// ── Insight ────────────────────────────────────────────────

#[test]
fn test_insight_request_completes() {
    let mut app = app();
    app.request_insight();
    assert_eq!(app.status_message, "Analyzing your spending...");
    wait_for_insight(&mut app);
    assert_eq!(
        app.insights.status(),
        &InsightStatus::Ready("5 categories reviewed".into())
    );
    assert_eq!(app.status_message, "Insight ready");
}

#[test]
fn test_duplicate_insight_request_ignored() {
    let provider = Arc::new(EchoInsight {
        gate: Mutex::new(()),
    });
    let mut app = app_with(Arc::clone(&provider));

    let guard = provider.gate.lock().unwrap();
    app.request_insight();
    app.request_insight();
    assert_eq!(app.status_message, "An insight is already being generated");
    assert!(app.insights.is_pending());
    drop(guard);

    wait_for_insight(&mut app);
    assert!(matches!(app.insights.status(), InsightStatus::Ready(_)));
}

// ── Feed ───────────────────────────────────────────────────

#[test]
fn test_feed_line_count_includes_headings() {
    let app = app();
    // Four seed transactions on four distinct days.
    assert_eq!(app.feed_line_count(), 8);
    assert_eq!(app.transaction_count_label(), "4 txns");
}
