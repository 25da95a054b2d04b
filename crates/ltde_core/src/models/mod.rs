//! # Data model
//!
//! Records exchanged between the engine stages. Everything here is plain data:
//! serde-serializable, cheap to clone, and free of engine logic beyond small
//! parsing and display helpers.

pub mod features;
pub mod objective;
pub mod playstyle;
pub mod priority;
pub mod recommendation;

pub use features::{FeatureRecord, ObjectiveContext, TelemetrySnapshot};
pub use objective::{ObjectiveDecision, ObjectiveKind, ObjectiveState, QueueMode, Recommendation};
pub use playstyle::{
    CounterScript, Game, LolPlayerTelemetry, OpponentAnalysis, PlaystyleProfile, Playstyle,
    TeamPlaystyleSummary, TelemetryBatch, ValorantPlayerTelemetry,
};
pub use priority::{
    DragonKind, GamePhase, LiveGameSnapshot, ObjectivePriority, PriorityCandidate, TowerCounts,
};
pub use recommendation::{CoachRecommendation, RiskTier, Urgency, WinProbabilityEstimate};

use serde::{Deserialize, Serialize};

/// Which team a telemetry query is answered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Blue,
    Red,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

/// Replaces NaN and infinities with zero before they reach a scoring formula.
#[inline]
pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
