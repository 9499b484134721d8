pub(crate) mod aggregate;
pub(crate) mod form;
pub(crate) mod sample;
pub(crate) mod state;

pub(crate) use aggregate::{group_by_date_bucket, Utilization};
pub(crate) use form::QuickAddForm;
pub(crate) use state::{BalanceSummary, LedgerState};

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;

#[cfg(test)]
#[path = "form_tests.rs"]
mod form_tests;
