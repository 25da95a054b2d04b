//! Priority ranker input and output records.

use serde::{Deserialize, Serialize};

use super::objective::{ObjectiveKind, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TowerCounts {
    pub team: u8,
    pub enemy: u8,
}

/// Dragon variants with distinct strategic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragonKind {
    Infernal,
    Ocean,
    Mountain,
    Cloud,
    Soul,
    Elder,
    #[default]
    Normal,
}

/// Live state consumed by the priority ranker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveGameSnapshot {
    /// Elapsed match time in seconds
    pub match_time: f32,
    pub gold_diff: f32,
    pub towers_left: TowerCounts,
    /// Seconds until each dead enemy respawns
    pub enemy_respawn_timers: Vec<f32>,
    /// Safe pressure per lane (top, mid, bot)
    pub sidelane_pressure: Vec<bool>,
    pub ally_count_near: Option<u8>,
    pub enemy_count_near: Option<u8>,
    pub vision_in_pit: Option<u8>,
    /// Element of the next dragon when telemetry knows it
    pub next_dragon: Option<DragonKind>,
}

/// Coarse match phase used for strategic multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// One objective currently on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityCandidate {
    pub kind: ObjectiveKind,
    pub location: String,
    pub time_to_spawn: f32,
    pub dragon: Option<DragonKind>,
}

/// Ranked entry returned by the priority ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ObjectivePriority {
    pub kind: ObjectiveKind,
    pub location: String,
    /// Display score in [0, 100]
    pub priority_score: f32,
    pub feasibility: f32,
    pub strategic_value: f32,
    pub estimated_enemy_response_secs: f32,
    pub recommended_action: Recommendation,
    pub short_call: String,
}
