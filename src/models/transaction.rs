use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" | "+" => Some(Self::Income),
            "expense" | "out" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Apply this kind's sign to a magnitude: expenses are negative, income positive.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded transaction. `amount` carries the sign of `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}

/// A transaction payload before an id has been assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            amount: self.kind.signed(self.amount),
            description: self.description,
            category: self.category,
            date: self.date,
            kind: self.kind,
        }
    }
}
