use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::App;
use crate::ledger::sample::CATEGORY_CHOICES;
use crate::ledger::QuickAddForm;
use crate::models::TransactionKind;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("a", "Open the quick-add form", cmd_add, r);
    register_command!("add", "Open the quick-add form", cmd_add, r);
    register_command!(
        "e",
        "Add an expense (e.g. :e 4.50 Coffee #Food)",
        cmd_expense,
        r
    );
    register_command!(
        "expense",
        "Add an expense (e.g. :expense 4.50 Coffee #Food)",
        cmd_expense,
        r
    );
    register_command!(
        "income",
        "Add income (e.g. :income 2500 Monthly Salary)",
        cmd_income,
        r
    );
    register_command!("i", "Generate a budget insight", cmd_insight, r);
    register_command!("insight", "Generate a budget insight", cmd_insight, r);
    register_command!(
        "today",
        "Pin the calendar date (e.g. :today 2025-05-23, empty to unpin)",
        cmd_today,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();
    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `<amount> <description...> [#Category]` into a form of `kind`.
///
/// Validation of the amount and description is left to the ledger; this only
/// splits the text.
pub(crate) fn parse_quick_add(args: &str, kind: TransactionKind) -> QuickAddForm {
    let mut words: Vec<&str> = args.split_whitespace().collect();

    let category = match words.last() {
        Some(last) if last.starts_with('#') && last.len() > 1 => {
            let tag = &last[1..];
            let name = CATEGORY_CHOICES
                .iter()
                .find(|c| c.eq_ignore_ascii_case(tag))
                .map(|c| c.to_string())
                .unwrap_or_else(|| tag.to_string());
            words.pop();
            name
        }
        _ if kind == TransactionKind::Income => "Income".to_string(),
        _ => CATEGORY_CHOICES[0].to_string(),
    };

    let amount = words.first().map(|w| w.to_string()).unwrap_or_default();
    let description = words.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();

    QuickAddForm {
        kind,
        amount,
        description,
        category,
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
    } else {
        let form = parse_quick_add(args, app.form.kind);
        app.apply(&form);
    }
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :expense <amount> <description> [#category]");
        return Ok(());
    }
    let form = parse_quick_add(args, TransactionKind::Expense);
    app.apply(&form);
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount> <description> [#category]");
        return Ok(());
    }
    let form = parse_quick_add(args, TransactionKind::Income);
    app.apply(&form);
    Ok(())
}

fn cmd_insight(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.request_insight();
    Ok(())
}

fn cmd_today(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.pinned_today = None;
        app.refresh_today();
        app.set_status(format!("Following the system clock ({})", app.today));
        return Ok(());
    }

    match NaiveDate::parse_from_str(args, "%Y-%m-%d") {
        Ok(date) => {
            app.pinned_today = Some(date);
            app.refresh_today();
            app.feed_scroll = 0;
            app.set_status(format!("Today is now {date}"));
        }
        Err(_) => app.set_status("Invalid date. Use YYYY-MM-DD (e.g. 2025-05-23)"),
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
