mod remote;
mod simulated;
mod task;
mod template;

use std::sync::Arc;

use anyhow::Result;

pub(crate) use remote::RemoteInsight;
pub(crate) use simulated::SimulatedInsight;
pub(crate) use task::{InsightStatus, InsightTask, Insights};
pub(crate) use template::summarize;

use crate::config::{Config, InsightBackend};
use crate::error::InsightError;
use crate::models::Category;

/// Shown whenever a provider fails.
pub(crate) const FALLBACK_MESSAGE: &str = "Unable to generate insights right now. Please try again later.";

/// Something that can turn a snapshot of budget categories into a short
/// human-readable summary. Calls may block; they run on a worker thread.
pub(crate) trait InsightProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, categories: &[Category]) -> Result<String, InsightError>;
}

pub(crate) fn build_provider(config: &Config) -> Result<Arc<dyn InsightProvider>> {
    match config.insight_backend {
        InsightBackend::Simulated => Ok(Arc::new(SimulatedInsight::new(config.insight_delay))),
        InsightBackend::Remote => {
            let api_key = config.insight_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!("FINTRACK_INSIGHT_API_KEY is required for the remote insight backend")
            })?;
            let provider = RemoteInsight::new(
                config.insight_url.clone(),
                config.insight_model.clone(),
                api_key,
            )?;
            Ok(Arc::new(provider))
        }
    }
}
