//! Per-objective decision profiles
//!
//! | kind   | base | failure | baseline | threshold |
//! |--------|------|---------|----------|-----------|
//! | Dragon | 0.06 | 0.08    | 0.02     | 0.60      |
//! | Baron  | 0.12 | 0.15    | 0.01     | 0.65      |
//! | Herald | 0.04 | 0.04    | 0.01     | 0.55      |
//! | Tower  | 0.03 | 0.03    | 0.00     | 0.60      |

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ObjectiveKind;

/// Value model for one objective kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ObjectiveProfile {
    /// Win-rate gain if secured (fraction)
    #[validate(range(min = 0.0, max = 1.0))]
    pub base_value: f32,
    /// Win-rate loss if the attempt fails
    #[validate(range(min = 0.0, max = 1.0))]
    pub failure_cost: f32,
    /// EV of simply playing safe
    #[validate(range(min = 0.0, max = 1.0))]
    pub safe_baseline: f32,
    /// Minimum success probability for SECURE
    #[validate(range(min = 0.0, max = 1.0))]
    pub threshold: f32,
    /// Objective cannot be attempted before this match time (seconds)
    pub min_match_time: Option<f32>,
    /// Subtracted from the success probability (pit difficulty)
    #[validate(range(min = 0.0, max = 1.0))]
    pub difficulty_penalty: f32,
}

impl ObjectiveProfile {
    fn new(base_value: f32, failure_cost: f32, safe_baseline: f32, threshold: f32) -> Self {
        Self {
            base_value,
            failure_cost,
            safe_baseline,
            threshold,
            min_match_time: None,
            difficulty_penalty: 0.0,
        }
    }

    /// `p·base − (1−p)·failure`
    pub fn expected_value(&self, base_value: f32, success_probability: f32) -> f32 {
        success_probability * base_value - (1.0 - success_probability) * self.failure_cost
    }
}

/// Closed strategy table keyed by [`ObjectiveKind`]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObjectiveTable {
    #[validate]
    pub dragon: ObjectiveProfile,
    #[validate]
    pub baron: ObjectiveProfile,
    #[validate]
    pub herald: ObjectiveProfile,
    #[validate]
    pub tower: ObjectiveProfile,

    // === Dragon ===
    /// Dragon becomes elder after this match time (default: 2100 s)
    pub elder_after_secs: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub elder_base_value: f32,

    // === Baron eligibility ===
    pub baron_min_allies: u8,
    pub baron_max_enemies: u8,
    pub baron_min_wards: u8,
    pub baron_max_enemy_wards: u8,

    // === Tower eligibility ===
    /// Average health required before diving a structure (default: 70)
    #[validate(range(min = 0.0, max = 100.0))]
    pub tower_min_hp_percent: f32,

    // === Rationale ===
    pub gold_lead_note: f32,
    pub gold_deficit_note: f32,
}

impl Default for ObjectiveTable {
    fn default() -> Self {
        Self {
            dragon: ObjectiveProfile::new(0.06, 0.08, 0.02, 0.60),
            baron: ObjectiveProfile {
                min_match_time: Some(900.0),
                difficulty_penalty: 0.10,
                ..ObjectiveProfile::new(0.12, 0.15, 0.01, 0.65)
            },
            herald: ObjectiveProfile::new(0.04, 0.04, 0.01, 0.55),
            tower: ObjectiveProfile::new(0.03, 0.03, 0.0, 0.60),

            elder_after_secs: 2100.0,
            elder_base_value: 0.15,

            baron_min_allies: 4,
            baron_max_enemies: 3,
            baron_min_wards: 3,
            baron_max_enemy_wards: 1,

            tower_min_hp_percent: 70.0,

            gold_lead_note: 2000.0,
            gold_deficit_note: -2500.0,
        }
    }
}

impl ObjectiveTable {
    pub fn profile(&self, kind: ObjectiveKind) -> &ObjectiveProfile {
        match kind {
            ObjectiveKind::Dragon => &self.dragon,
            ObjectiveKind::Baron => &self.baron,
            ObjectiveKind::Herald => &self.herald,
            ObjectiveKind::Tower => &self.tower,
        }
    }
}
