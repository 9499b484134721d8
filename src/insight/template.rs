use rust_decimal::Decimal;

use crate::ledger::aggregate::{budget_totals, top_spending_category};
use crate::models::Category;

/// Render the budget summary for a category snapshot. Returns `None` when
/// there is nothing to summarize.
pub(crate) fn summarize(categories: &[Category]) -> Option<String> {
    let top = top_spending_category(categories)?;
    let (budget, spent) = budget_totals(categories);

    let rate = if budget > Decimal::ZERO {
        (spent / budget * Decimal::ONE_HUNDRED).round_dp(1)
    } else {
        Decimal::ZERO
    };

    // Both thresholds are strict: exactly 50% or 90% falls in the band below.
    let advice = if rate > Decimal::from(90) {
        "You're close to your overall limit, so consider pausing discretionary spending.".to_string()
    } else if rate > Decimal::from(50) {
        format!("You're on track, but keep an eye on {}.", top.name)
    } else {
        "Great job staying well within your budget!".to_string()
    };

    Some(format!(
        "You've used {rate:.1}% of your total budget (${spent:.2} of ${budget:.2}). \
         Your highest spending is in {} at ${:.2}. {advice}",
        top.name, top.spent
    ))
}
