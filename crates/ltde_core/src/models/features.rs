//! Feature record produced by the live feature extractor.

use serde::{Deserialize, Serialize};

/// Fixed-shape numeric view of one live moment of a match.
///
/// Built once per extraction call and never mutated afterwards; the estimator
/// and the state builder only borrow it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct FeatureRecord {
    /// Team gold minus enemy gold
    pub gold_diff: f32,
    /// Team experience minus enemy experience
    pub exp_diff: f32,
    /// Friendly champions near the focus objective
    pub ally_count_near: u8,
    /// Enemy champions near the focus objective
    pub enemy_count_near: u8,
    /// Vision score differential
    pub vision_score_diff: f32,
    /// Towers destroyed by us minus towers destroyed by them
    pub tower_count_diff: i32,
    /// Minor objectives (drakes) secured, net of the enemy's
    pub drake_count_diff: i32,
    /// Major objective buff (baron) currently owned
    pub baron_owned: bool,
    /// Elapsed match time in minutes
    pub match_time_minutes: f32,
    /// Health fraction (0-1) per friendly player
    pub player_hp_pct: Vec<f32>,
    /// Friendly ultimates off cooldown
    pub ultimates_up: u8,
    /// Friendly teleports available
    pub tp_available: u8,
    /// Friendly smite ready
    pub smite_ready: bool,
    /// Lane priority in [0, 1]
    pub lane_priority_index: f32,
    /// Gold swing of the last teamfight
    pub last_teamfight_gold_delta: f32,
}

impl FeatureRecord {
    /// Mean of `player_hp_pct`, as a percentage (0-100).
    pub fn avg_hp_percent(&self) -> f32 {
        if self.player_hp_pct.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.player_hp_pct.iter().map(|hp| hp.clamp(0.0, 1.0)).sum();
        sum / self.player_hp_pct.len() as f32 * 100.0
    }
}

/// Side information about the focus objective fetched alongside the features.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectiveContext {
    pub friendly_wards_near: u8,
    pub enemy_wards_near: u8,
    pub enemy_ultimates_up: u8,
    pub enemy_smite_ready: bool,
}

/// Output of one extraction fan-out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub match_id: String,
    pub timestamp: f32,
    pub features: FeatureRecord,
    pub context: ObjectiveContext,
}
