use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Feed amount: `+$2,500.00` for money in, `$85.50` for money out.
pub(crate) fn format_signed_amount(val: Decimal) -> String {
    let magnitude = format_amount(val.abs());
    if val > Decimal::ZERO {
        format!("+{magnitude}")
    } else {
        magnitude
    }
}

/// e.g. `"May 23"`
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub(crate) fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍕",
        "Transport" => "🚗",
        "Bills" => "⚡",
        "Entertainment" => "🎬",
        "Shopping" => "🛍",
        "Income" => "💰",
        _ => "💳",
    }
}

/// A fixed-width bar filled to `ratio` (clamped to `0.0..=1.0`).
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let empty = width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a scroll offset down by one, never past the last full page.
pub(crate) fn scroll_down(scroll: &mut usize, len: usize, page: usize) {
    let max = len.saturating_sub(page.max(1));
    if *scroll < max {
        *scroll += 1;
    }
}

pub(crate) fn scroll_up(scroll: &mut usize) {
    *scroll = scroll.saturating_sub(1);
}

pub(crate) fn scroll_to_bottom(scroll: &mut usize, len: usize, page: usize) {
    *scroll = len.saturating_sub(page.max(1));
}
