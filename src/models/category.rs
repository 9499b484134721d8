use rust_decimal::Decimal;

/// A budget line. `color` is a `#RRGGBB` display hint and is never interpreted
/// by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, budget: Decimal, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget,
            spent: Decimal::ZERO,
            color: color.into(),
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    pub fn remaining(&self) -> Decimal {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Parse `color` into RGB components. Returns `None` for anything that is
    /// not a six-digit hex triplet.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
