//! Objective state and decision records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Contestable objective types handled by the decision scorer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveKind {
    /// Area-control minor objective (drake pit)
    Dragon,
    /// Area-control major objective, time gated
    Baron,
    /// Escort event
    Herald,
    /// Structure
    Tower,
}

impl ObjectiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectiveKind::Dragon => "Dragon",
            ObjectiveKind::Baron => "Baron",
            ObjectiveKind::Herald => "Herald",
            ObjectiveKind::Tower => "Tower",
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectiveKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dragon" | "drake" | "minor" | "area-control-minor" => Ok(ObjectiveKind::Dragon),
            "baron" | "major" | "area-control-major" => Ok(ObjectiveKind::Baron),
            "herald" | "escort" | "escort-event" => Ok(ObjectiveKind::Herald),
            "tower" | "structure" | "turret" => Ok(ObjectiveKind::Tower),
            _ => Err(EngineError::unknown_key("objective", s)),
        }
    }
}

/// Queue mode; group-oriented queues weight numbers and vision higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueMode {
    #[default]
    Solo,
    Flex,
}

/// Categorical call on an objective.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Secure,
    Contest,
    Avoid,
    Trade,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Secure => "SECURE",
            Recommendation::Contest => "CONTEST",
            Recommendation::Avoid => "AVOID",
            Recommendation::Trade => "TRADE",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the scorer needs to judge one candidate objective.
///
/// Built fresh per decision call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveState {
    pub objective: ObjectiveKind,
    pub queue_mode: QueueMode,
    /// Seconds until the objective spawns (0 when up)
    pub time_to_spawn: f32,
    /// Elapsed match time in seconds
    pub match_time: f32,
    pub team_gold_diff: f32,
    pub ally_count_near: u8,
    pub enemy_count_near: u8,
    /// Friendly wards covering the objective
    pub vision_in_pit: u8,
    /// Enemy wards covering the objective
    pub enemy_vision_in_pit: u8,
    pub ultimates_up: u8,
    pub enemy_ultimates_up: u8,
    pub smite_ready: bool,
    pub enemy_smite_ready: bool,
    /// Side lanes can be pressured safely
    pub sidelane_pressure: bool,
    /// Average friendly health percentage (0-100)
    pub player_hp_percent: f32,
}

impl Default for ObjectiveState {
    fn default() -> Self {
        Self {
            objective: ObjectiveKind::Dragon,
            queue_mode: QueueMode::Solo,
            time_to_spawn: 0.0,
            match_time: 0.0,
            team_gold_diff: 0.0,
            ally_count_near: 0,
            enemy_count_near: 0,
            vision_in_pit: 0,
            enemy_vision_in_pit: 0,
            ultimates_up: 0,
            enemy_ultimates_up: 0,
            smite_ready: false,
            enemy_smite_ready: false,
            sidelane_pressure: false,
            player_hp_percent: 0.0,
        }
    }
}

impl ObjectiveState {
    pub fn for_objective(objective: ObjectiveKind) -> Self {
        Self { objective, ..Default::default() }
    }
}

/// Scorer output, optionally re-stamped by the decision integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ObjectiveDecision {
    pub objective: ObjectiveKind,
    pub recommendation: Recommendation,
    pub confidence: f32,
    pub expected_value: f32,
    pub success_probability: f32,
    /// Expected win-rate gain in percentage points if secured
    pub win_probability_delta_percent: f32,
    pub rationale: Vec<String>,
    /// One to three word call for comms
    pub short_call: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_prob_context: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_impact: Option<BTreeMap<String, f32>>,
    #[serde(default)]
    pub win_prob_adjusted: bool,
    /// Scorer recommendation before win-probability adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_recommendation: Option<Recommendation>,
    /// Scorer confidence before win-probability adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_confidence: Option<f32>,
}

impl ObjectiveDecision {
    /// Zero-scored decision without win-probability context.
    pub fn new(
        objective: ObjectiveKind,
        recommendation: Recommendation,
        short_call: impl Into<String>,
    ) -> Self {
        Self {
            objective,
            recommendation,
            confidence: 0.0,
            expected_value: 0.0,
            success_probability: 0.0,
            win_probability_delta_percent: 0.0,
            rationale: Vec::new(),
            short_call: short_call.into(),
            win_prob_context: None,
            model_confidence: None,
            feature_impact: None,
            win_prob_adjusted: false,
            base_recommendation: None,
            base_confidence: None,
        }
    }

    pub fn is_go(&self) -> bool {
        matches!(self.recommendation, Recommendation::Secure | Recommendation::Contest)
    }
}
