use chrono::{Local, NaiveDate};

use crate::insight::{InsightStatus, Insights};
use crate::ledger::group_by_date_bucket;
use crate::ledger::{BalanceSummary, LedgerState, QuickAddForm};
use crate::ui::util::format_signed_amount;

/// Which scrollable panel receives j/k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Budgets,
    Feed,
}

impl Focus {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Budgets => Self::Feed,
            Self::Feed => Self::Budgets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "ADD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Kind,
    Amount,
    Description,
    Category,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Kind, Self::Amount, Self::Description, Self::Category]
    }

    fn step(self, delta: i32) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0) as i32;
        let len = fields.len() as i32;
        fields[(idx + delta).rem_euclid(len) as usize]
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Focus,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) ledger: LedgerState,
    pub(crate) today: NaiveDate,
    pub(crate) pinned_today: Option<NaiveDate>,

    // Quick add
    pub(crate) form: QuickAddForm,
    pub(crate) form_field: FormField,

    pub(crate) insights: Insights,

    // Scrolling (page sizes updated each render frame)
    pub(crate) feed_scroll: usize,
    pub(crate) budget_scroll: usize,
    pub(crate) feed_rows: usize,
    pub(crate) budget_rows: usize,

    pub(crate) tick_count: usize,
}

impl App {
    pub(crate) fn new(ledger: LedgerState, insights: Insights, pinned_today: Option<NaiveDate>) -> Self {
        let mut app = Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Feed,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            ledger,
            today: NaiveDate::default(),
            pinned_today,

            form: QuickAddForm::default(),
            form_field: FormField::Amount,

            insights,

            feed_scroll: 0,
            budget_scroll: 0,
            feed_rows: 10,
            budget_rows: 3,

            tick_count: 0,
        };
        app.refresh_today();
        app
    }

    /// Read the calendar date from the one clock the app uses.
    pub(crate) fn refresh_today(&mut self) {
        self.today = self
            .pinned_today
            .unwrap_or_else(|| Local::now().date_naive());
    }

    pub(crate) fn summary(&self) -> BalanceSummary {
        self.ledger.summary()
    }

    /// Called on every event-loop wakeup: advance the clock and collect a
    /// finished insight, if any.
    pub(crate) fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.refresh_today();
        if self.insights.poll() {
            match self.insights.status() {
                InsightStatus::Ready(_) => self.set_status("Insight ready"),
                InsightStatus::Failed(_) => self.set_status("Insight unavailable"),
                InsightStatus::Idle | InsightStatus::Pending => {}
            }
        }
    }

    // ── Quick add ────────────────────────────────────────────

    pub(crate) fn open_form(&mut self) {
        self.input_mode = InputMode::Form;
        self.form_field = FormField::Amount;
        self.status_message.clear();
    }

    pub(crate) fn cancel_form(&mut self) {
        self.input_mode = InputMode::Normal;
        self.set_status("Cancelled");
    }

    /// Submit the open form. On a validation error the form stays open and
    /// the ledger is untouched.
    pub(crate) fn submit_form(&mut self) {
        let form = self.form.clone();
        if self.apply(&form) {
            self.form.clear_text();
            self.input_mode = InputMode::Normal;
        }
    }

    /// Apply a filled-in form to the ledger. Returns whether it was accepted.
    pub(crate) fn apply(&mut self, form: &QuickAddForm) -> bool {
        match self.ledger.submit(form, self.today) {
            Ok(next) => {
                self.ledger = next;
                self.feed_scroll = 0;
                if let Some(txn) = self.ledger.transactions().first() {
                    let msg = format!(
                        "Added {}: {} ({})",
                        txn.kind.as_str().to_lowercase(),
                        txn.description,
                        format_signed_amount(txn.amount)
                    );
                    self.set_status(msg);
                }
                true
            }
            Err(e) => {
                self.set_status(e.to_string());
                false
            }
        }
    }

    pub(crate) fn form_next_field(&mut self) {
        self.form_field = self.form_field.step(1);
    }

    pub(crate) fn form_prev_field(&mut self) {
        self.form_field = self.form_field.step(-1);
    }

    /// Left/Right on a selector field.
    pub(crate) fn form_adjust(&mut self, delta: i32) {
        match self.form_field {
            FormField::Kind => self.form.kind = self.form.kind.toggle(),
            FormField::Category => self.form.cycle_category(delta),
            FormField::Amount | FormField::Description => {}
        }
    }

    pub(crate) fn form_push_char(&mut self, c: char) {
        match self.form_field {
            FormField::Amount => {
                if c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | '$') {
                    self.form.amount.push(c);
                }
            }
            FormField::Description => self.form.description.push(c),
            FormField::Kind if c == ' ' => self.form.kind = self.form.kind.toggle(),
            FormField::Category if c == ' ' => self.form.cycle_category(1),
            FormField::Kind | FormField::Category => {}
        }
    }

    pub(crate) fn form_backspace(&mut self) {
        match self.form_field {
            FormField::Amount => {
                self.form.amount.pop();
            }
            FormField::Description => {
                self.form.description.pop();
            }
            FormField::Kind | FormField::Category => {}
        }
    }

    // ── Insight ──────────────────────────────────────────────

    pub(crate) fn request_insight(&mut self) {
        let categories = self.ledger.categories().to_vec();
        if self.insights.request(&categories) {
            self.set_status("Analyzing your spending...");
        } else {
            self.set_status("An insight is already being generated");
        }
    }

    // ── Scrolling ────────────────────────────────────────────

    /// Lines in the transaction feed: one heading per date bucket plus one
    /// per transaction.
    pub(crate) fn feed_line_count(&self) -> usize {
        let buckets = group_by_date_bucket(self.ledger.transactions(), self.today);
        buckets.len() + self.ledger.transactions().len()
    }

    pub(crate) fn budget_count(&self) -> usize {
        self.ledger.categories().len()
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn transaction_count_label(&self) -> String {
        let count = self.ledger.transactions().len();
        format!("{count} txn{}", if count == 1 { "" } else { "s" })
    }
}
