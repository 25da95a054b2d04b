//! Priority ranker weights, phase boundaries and call bands

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Strategic weights on a 0-100 scale (divided by 100 for `strategic_value`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StrategicWeights {
    pub baron: f32,
    /// Baron multiplier in the LATE phase
    pub baron_late_multiplier: f32,
    pub elder: f32,
    pub soul: f32,
    pub infernal: f32,
    pub ocean: f32,
    pub cloud: f32,
    pub mountain: f32,
    pub normal_dragon: f32,
    pub herald: f32,
    pub herald_early_multiplier: f32,
    pub herald_late_multiplier: f32,
    pub inhibitor_tower: f32,
    pub inner_tower: f32,
    pub outer_tower: f32,
}

impl Default for StrategicWeights {
    fn default() -> Self {
        Self {
            baron: 22.0,
            baron_late_multiplier: 1.4,
            elder: 35.0,
            soul: 28.0,
            infernal: 18.0,
            ocean: 14.0,
            cloud: 12.0,
            mountain: 10.0,
            normal_dragon: 12.0,
            herald: 15.0,
            herald_early_multiplier: 1.3,
            herald_late_multiplier: 0.8,
            inhibitor_tower: 18.0,
            inner_tower: 12.0,
            outer_tower: 8.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PriorityConfig {
    #[validate]
    pub weights: StrategicWeights,

    // === Timing (seconds) ===
    /// EARLY ends, Herald leaves the candidate list (default: 840)
    pub mid_phase_from: f32,
    /// LATE starts (default: 1500)
    pub late_phase_from: f32,
    /// Baron joins the candidate list; matches `objectives.baron.min_match_time` (default: 900)
    pub baron_after: f32,
    /// Next dragon is elder (default: 2100)
    pub elder_after: f32,

    // === Feasibility ===
    /// Positional factor without live positions (default: 0.9)
    #[validate(range(min = 0.0, max = 1.0))]
    pub positional_factor: f32,
    /// Assumed enemy rotation time (default: 15 s)
    pub enemy_response_secs: f32,

    // === Action ===
    #[validate(range(min = 0.0, max = 1.0))]
    pub secure_feasibility: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub contest_feasibility: f32,
    /// Gold deficit under which a lost fight is traded cross-map (default: -5000)
    pub trade_gold_below: f32,

    // === Call bands on priority_score ===
    pub now_call_above: f32,
    pub location_call_above: f32,
    pub setup_call_above: f32,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            weights: StrategicWeights::default(),

            mid_phase_from: 840.0,
            late_phase_from: 1500.0,
            baron_after: 900.0,
            elder_after: 2100.0,

            positional_factor: 0.9,
            enemy_response_secs: 15.0,

            secure_feasibility: 0.7,
            contest_feasibility: 0.4,
            trade_gold_below: -5000.0,

            now_call_above: 25.0,
            location_call_above: 15.0,
            setup_call_above: 8.0,
        }
    }
}
