use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::{summarize, InsightProvider};
use crate::error::InsightError;
use crate::models::Category;

/// Stand-in for a text-generation service: waits a little, then fills in the
/// local summary template.
pub(crate) struct SimulatedInsight {
    base_delay: Duration,
}

impl SimulatedInsight {
    pub(crate) fn new(base_delay: Duration) -> Self {
        Self { base_delay }
    }

    /// Base delay plus up to half of it again, so the pending state is visible
    /// for a varying amount of time.
    fn delay(&self) -> Duration {
        let spread = self.base_delay.as_millis() as u64 / 2;
        if spread == 0 {
            return self.base_delay;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64)
            .unwrap_or(0);
        self.base_delay + Duration::from_millis(nanos % spread)
    }
}

impl InsightProvider for SimulatedInsight {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn generate(&self, categories: &[Category]) -> Result<String, InsightError> {
        let delay = self.delay();
        debug!(delay_ms = delay.as_millis() as u64, "Simulating insight request");
        std::thread::sleep(delay);

        summarize(categories)
            .ok_or_else(|| InsightError::Service("No budget categories to analyze".into()))
    }
}
