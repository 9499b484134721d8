use anyhow::Result;

use crate::config::Config;
use crate::insight::{build_provider, InsightStatus, InsightTask};
use crate::ledger::group_by_date_bucket;
use crate::ledger::sample::{seed_state, CATEGORY_CHOICES};
use crate::ledger::{LedgerState, QuickAddForm, Utilization};
use crate::models::{Category, TransactionKind};
use crate::ui::util::{
    category_icon, format_amount, format_signed_amount, progress_bar, short_date,
};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => {
            print_summary(&seed_state());
            Ok(())
        }
        "budgets" | "b" => {
            print_budgets(&seed_state());
            Ok(())
        }
        "feed" | "f" => {
            print_feed(&seed_state(), config);
            Ok(())
        }
        "insight" | "i" => cli_insight(config),
        "add" => cli_add(&args[2..], config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Fintrack - in-memory personal finance dashboard");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print balance, income and expenses");
    println!("  budgets                       Print budget utilization per category");
    println!("  feed                          Print transactions grouped by day");
    println!("  insight                       Generate a budget insight");
    println!("  add <amount> <description>    Add a transaction to the session and print the result");
    println!("    --income                    Record as income (default: expense)");
    println!("    --kind <income|expense>     Same, spelled out");
    println!("    --category <name>           Category (default: Food, or Income with --income)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Nothing is saved: every run starts from the sample session.");
}

fn print_summary(state: &LedgerState) {
    let summary = state.summary();
    println!("Finance Tracker");
    println!("{}", "─".repeat(40));
    println!("  Balance:    {}", format_amount(summary.balance));
    println!("  Income:     +{}", format_amount(summary.total_income));
    println!("  Expenses:   -{}", format_amount(summary.total_expenses));
    println!("  Txns:       {}", state.transactions().len());
}

fn print_budgets(state: &LedgerState) {
    println!("Budget Overview");
    println!("{}", "─".repeat(72));
    for cat in state.categories() {
        let usage = Utilization::of(cat);
        let flag = if usage.over_budget { "  OVER" } else { "" };
        println!(
            "  {:<15} {:>11} / {:<11} {} {:>6.1}% used  {} left{flag}",
            cat.name,
            format_amount(cat.spent),
            format_amount(cat.budget),
            progress_bar(usage.progress_ratio(), 10),
            usage.percent,
            format_amount(usage.remaining),
        );
    }
}

fn print_feed(state: &LedgerState, config: &Config) {
    let today = config.today();
    println!("Recent Transactions");
    println!("{}", "─".repeat(60));
    for bucket in group_by_date_bucket(state.transactions(), today) {
        println!("{}", bucket.label);
        for txn in bucket.transactions {
            println!(
                "  {} {:<24} {:<14} {:>12}  {}",
                category_icon(&txn.category),
                txn.description,
                txn.category,
                format_signed_amount(txn.amount),
                short_date(txn.date),
            );
        }
    }
}

fn cli_insight(config: &Config) -> Result<()> {
    let provider = build_provider(config)?;
    let state = seed_state();
    println!("Analyzing your spending ({})...", provider.name());

    match InsightTask::spawn(provider, state.categories().to_vec()).wait() {
        InsightStatus::Ready(text) | InsightStatus::Failed(text) => println!("{text}"),
        InsightStatus::Idle | InsightStatus::Pending => {}
    }
    Ok(())
}

fn cli_add(args: &[String], config: &Config) -> Result<()> {
    let form = parse_add_args(args)?;
    let next = seed_state()
        .submit(&form, config.today())
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    if let Some(txn) = next.transactions().first() {
        println!(
            "Added {} #{}: {} {} ({})",
            txn.kind.as_str().to_lowercase(),
            txn.id,
            txn.description,
            format_signed_amount(txn.amount),
            txn.category
        );
        if Category::find_by_name(next.categories(), &txn.category).is_none() {
            println!("Note: no budget line named {}", txn.category);
        }
        println!();
    }
    print_summary(&next);
    Ok(())
}

pub(crate) fn parse_add_args(args: &[String]) -> Result<QuickAddForm> {
    if args.is_empty() {
        anyhow::bail!("Usage: fintrack add <amount> <description> [--income] [--category <name>]");
    }

    let mut kind = TransactionKind::Expense;
    let mut category: Option<String> = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--income" => kind = TransactionKind::Income,
            "--expense" => kind = TransactionKind::Expense,
            "--kind" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--kind needs a value"))?;
                kind = TransactionKind::parse(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown kind: {value} (use income or expense)"))?;
            }
            "--category" => {
                let name = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--category needs a value"))?;
                category = Some(name.clone());
            }
            other => positional.push(other),
        }
    }

    let category = category.unwrap_or_else(|| match kind {
        TransactionKind::Income => "Income".to_string(),
        TransactionKind::Expense => CATEGORY_CHOICES[0].to_string(),
    });

    Ok(QuickAddForm {
        kind,
        amount: positional.first().map(|s| s.to_string()).unwrap_or_default(),
        description: positional.get(1..).map(|rest| rest.join(" ")).unwrap_or_default(),
        category,
    })
}
