//! Win-probability estimator and decision integrator constants

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Linear placeholder estimator parameters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Prior win probability with no information (default: 0.5)
    #[validate(range(min = 0.0, max = 1.0))]
    pub base_probability: f32,
    /// Gold differential worth +1.0 probability (default: 15000)
    #[validate(range(min = 1.0))]
    pub gold_normalizer: f32,
    /// Experience differential worth +1.0 probability (default: 10000)
    #[validate(range(min = 1.0))]
    pub exp_normalizer: f32,
    /// Per-tower contribution (default: 0.05)
    pub tower_weight: f32,
    /// Baron buff contribution (default: 0.10)
    pub baron_weight: f32,

    /// Output clamp (default: 0.02 .. 0.98)
    #[validate(range(min = 0.0, max = 0.5))]
    pub min_probability: f32,
    #[validate(range(min = 0.5, max = 1.0))]
    pub max_probability: f32,

    /// Confidence at p = 0.5 (default: 0.7)
    pub confidence_floor: f32,
    /// Confidence gained from p = 0.5 to p = 0 or 1 (default: 0.25)
    pub confidence_span: f32,
    /// Confidence cap (default: 0.95)
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_cap: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_probability: 0.5,
            gold_normalizer: 15_000.0,
            exp_normalizer: 10_000.0,
            tower_weight: 0.05,
            baron_weight: 0.10,

            min_probability: 0.02,
            max_probability: 0.98,

            confidence_floor: 0.7,
            confidence_span: 0.25,
            confidence_cap: 0.95,
        }
    }
}

/// Risk-tier bands and adjustment sizes for the decision integrator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IntegratorConfig {
    // === Risk tiers ===
    /// Above this: AGGRESSIVE (default: 0.65)
    #[validate(range(min = 0.0, max = 1.0))]
    pub aggressive_above: f32,
    /// Above this: BALANCED, else CONSERVATIVE (default: 0.45)
    #[validate(range(min = 0.0, max = 1.0))]
    pub balanced_above: f32,

    // === Adjustments ===
    /// Confidence bonus when CONTEST escalates to SECURE (default: 0.08)
    pub escalate_bonus: f32,
    /// Gold lead that keeps SECURE even when losing (default: 2000)
    pub gold_lead_guard: f32,
    /// Below this probability confidence is penalized (default: 0.4)
    pub low_probability: f32,
    /// Penalty applied under `low_probability` (default: 0.12)
    pub low_probability_penalty: f32,
    /// Forced SECURE window (default: p > 0.75 and EV > 0.5)
    pub force_probability: f32,
    pub force_expected_value: f32,
    /// Confidence bonus of a forced SECURE (default: 0.15)
    pub force_bonus: f32,

    /// Confidence clamp (default: 0.3 .. 0.98)
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_confidence: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub max_confidence: f32,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            aggressive_above: 0.65,
            balanced_above: 0.45,

            escalate_bonus: 0.08,
            gold_lead_guard: 2000.0,
            low_probability: 0.4,
            low_probability_penalty: 0.12,
            force_probability: 0.75,
            force_expected_value: 0.5,
            force_bonus: 0.15,

            min_confidence: 0.3,
            max_confidence: 0.98,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DecisionConfig {
    #[validate]
    pub estimator: EstimatorConfig,
    #[validate]
    pub integrator: IntegratorConfig,
}
