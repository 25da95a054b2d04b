//! Win-probability estimate and the top-level coach recommendation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::objective::{ObjectiveDecision, Recommendation};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WinProbabilityEstimate {
    /// Team win probability in [0, 1]
    pub probability: f32,
    /// Model certainty in [0, 1]
    pub confidence: f32,
    /// Relative, non-negative feature importances (not a distribution)
    pub attribution: BTreeMap<String, f32>,
}

/// Risk appetite derived from the current win probability.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Aggressive,
    Balanced,
    Conservative,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RiskTier::Aggressive => "AGGRESSIVE",
            RiskTier::Balanced => "BALANCED",
            RiskTier::Conservative => "CONSERVATIVE",
        })
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Immediate,
    High,
    Medium,
}

impl Urgency {
    /// IMMEDIATE for a confident SECURE, HIGH for any go call, MEDIUM otherwise.
    pub fn for_decision(decision: &ObjectiveDecision) -> Self {
        match decision.recommendation {
            Recommendation::Secure if decision.confidence > 0.8 => Urgency::Immediate,
            Recommendation::Secure | Recommendation::Contest => Urgency::High,
            _ => Urgency::Medium,
        }
    }
}

/// Consolidated answer to "should we contest this objective now".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CoachRecommendation {
    pub decision: ObjectiveDecision,
    pub win_probability: f32,
    /// Human-readable explanations of the most important features
    pub top_features: Vec<String>,
    pub risk_tier: RiskTier,
    pub urgency: Urgency,
}
