//! Success-probability term weights per queue mode

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::QueueMode;

/// Caps and slopes of the additive success-probability terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScoringWeights {
    /// Numbers advantage weight; half of it is earned per extra body
    #[validate(range(min = 0.0, max = 1.0))]
    pub numbers: f32,
    /// Cap of the vision term (both directions)
    #[validate(range(min = 0.0, max = 1.0))]
    pub vision_max: f32,
    /// Vision slope per net ward before the ward divisor
    #[validate(range(min = 0.0, max = 1.0))]
    pub vision_per_ward: f32,
    /// Cap of the ultimate differential term
    #[validate(range(min = 0.0, max = 1.0))]
    pub ult_max: f32,
    /// Weight of average friendly health
    #[validate(range(min = 0.0, max = 1.0))]
    pub hp: f32,
    /// Execute edge (smite) swing
    #[validate(range(min = 0.0, max = 1.0))]
    pub smite: f32,
    /// Cap of the gold term
    #[validate(range(min = 0.0, max = 1.0))]
    pub gold_max: f32,
}

impl ScoringWeights {
    pub fn solo() -> Self {
        Self {
            numbers: 0.25,
            vision_max: 0.18,
            vision_per_ward: 0.09,
            ult_max: 0.20,
            hp: 0.12,
            smite: 0.10,
            gold_max: 0.15,
        }
    }

    /// Group queues lean harder on numbers and vision, less on raw health.
    pub fn flex() -> Self {
        Self {
            numbers: 0.275,
            vision_max: 0.25,
            vision_per_ward: 0.125,
            ult_max: 0.22,
            hp: 0.08,
            smite: 0.10,
            gold_max: 0.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScoringConfig {
    #[validate]
    pub solo: ScoringWeights,
    #[validate]
    pub flex: ScoringWeights,
    /// Gold differential that earns the full gold cap (default: 10000)
    #[validate(range(min = 1.0))]
    pub gold_scale: f32,
    /// Net wards are divided by this before the vision slope (default: 1.25)
    #[validate(range(min = 0.01))]
    pub ward_divisor: f32,
    /// Final success probability clamp (default: 0.02 .. 0.98)
    #[validate(range(min = 0.0, max = 0.5))]
    pub min_success: f32,
    #[validate(range(min = 0.5, max = 1.0))]
    pub max_success: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            solo: ScoringWeights::solo(),
            flex: ScoringWeights::flex(),
            gold_scale: 10_000.0,
            ward_divisor: 1.25,
            min_success: 0.02,
            max_success: 0.98,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self, mode: QueueMode) -> &ScoringWeights {
        match mode {
            QueueMode::Solo => &self.solo,
            QueueMode::Flex => &self.flex,
        }
    }
}
