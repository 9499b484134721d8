use thiserror::Error;

/// Errors raised while applying user intents to the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure modes of an insight provider. These never reach the caller of an
/// insight request; they are folded into a fallback message.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Insight service error: {0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed insight response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Insight service returned an empty response")]
    EmptyResponse,

    #[error("Insight worker disconnected before replying")]
    Disconnected,
}
