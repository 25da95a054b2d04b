//! Telemetry fan-out and focus settings

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{ObjectiveKind, QueueMode, Side};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Upper bound for the five-way sub-query join (default: 2000 ms)
    #[validate(range(min = 1, max = 60000))]
    pub fetch_timeout_ms: u64,
    /// Team the engine coaches
    pub side: Side,
    /// Objective judged by `get_recommendation` (default: Baron)
    pub focus_objective: ObjectiveKind,
    pub queue_mode: QueueMode,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 2000,
            side: Side::Blue,
            focus_objective: ObjectiveKind::Baron,
            queue_mode: QueueMode::Solo,
        }
    }
}
