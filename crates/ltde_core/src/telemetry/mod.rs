//! # Telemetry sources
//!
//! The engine never talks to a game client directly. Everything it knows about
//! a live match arrives through [`TelemetrySource`], one async query per
//! concern so the feature extractor can fan them out concurrently.
//!
//! - [`FixtureTelemetry`]: recorded timelines loaded from JSON
//! - [`SimulatedTelemetry`]: deterministic seeded generator for demos and benches

mod fixture;
mod simulated;

pub use fixture::{FixtureFrame, FixtureTelemetry};
pub use simulated::SimulatedTelemetry;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{LiveGameSnapshot, ObjectiveKind, Side};

/// Key of every telemetry query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryQuery {
    pub match_id: String,
    /// Match time in seconds
    pub timestamp: f32,
    pub side: Side,
    /// Objective used for proximity and vision counts
    pub objective: ObjectiveKind,
}

impl TelemetryQuery {
    pub fn new(match_id: impl Into<String>, timestamp: f32, side: Side, objective: ObjectiveKind) -> Self {
        Self { match_id: match_id.into(), timestamp, side, objective }
    }
}

/// Economy differentials, from `side`'s point of view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceState {
    pub gold_diff: f32,
    pub exp_diff: f32,
    pub last_teamfight_gold_delta: f32,
}

/// Map control: structures and neutral objectives already taken.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancementState {
    pub tower_count_diff: i32,
    pub drake_count_diff: i32,
    pub baron_owned: bool,
    pub lane_priority_index: f32,
}

/// Bodies near the queried objective.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityCounts {
    pub ally_count_near: u8,
    pub enemy_count_near: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionState {
    pub vision_score_diff: f32,
    /// Wards covering the queried objective
    pub friendly_wards_near: u8,
    pub enemy_wards_near: u8,
}

/// Cooldowns and health of both teams.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityState {
    /// Health fraction (0-1) per friendly player
    pub player_hp_pct: Vec<f32>,
    pub ultimates_up: u8,
    pub enemy_ultimates_up: u8,
    pub tp_available: u8,
    pub smite_ready: bool,
    pub enemy_smite_ready: bool,
}

/// Outbound telemetry port.
///
/// Implementations must be safe to share across tasks; the engine issues
/// several queries for the same key concurrently.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn resource_state(&self, query: &TelemetryQuery) -> Result<ResourceState>;

    async fn advancement_state(&self, query: &TelemetryQuery) -> Result<AdvancementState>;

    async fn proximity(&self, query: &TelemetryQuery) -> Result<ProximityCounts>;

    async fn vision_state(&self, query: &TelemetryQuery) -> Result<VisionState>;

    async fn ability_state(&self, query: &TelemetryQuery) -> Result<AbilityState>;

    /// Board-wide view consumed by the priority ranker.
    async fn live_snapshot(&self, query: &TelemetryQuery) -> Result<LiveGameSnapshot>;
}
