use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one completed mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub rule_count: usize,
}

impl RunSummary {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
