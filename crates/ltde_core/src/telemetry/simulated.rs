//! Deterministic synthetic telemetry.
//!
//! Every query re-derives its own RNG from `(seed, match_id, second, side,
//! concern)`, so concurrent sub-queries for one key always agree and a replay
//! with the same seed yields identical recommendations.

// FxHasher is stable across Rust releases, unlike DefaultHasher.
use fxhash::FxHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use super::{
    AbilityState, AdvancementState, ProximityCounts, ResourceState, TelemetryQuery,
    TelemetrySource, VisionState,
};
use crate::error::Result;
use crate::models::{DragonKind, LiveGameSnapshot, Side, TowerCounts};

/// Per-concern salt so sub-queries draw from unrelated streams.
mod concern {
    pub const RESOURCE: u32 = 0x0100;
    pub const ADVANCEMENT: u32 = 0x0200;
    pub const PROXIMITY: u32 = 0x0300;
    pub const VISION: u32 = 0x0400;
    pub const ABILITY: u32 = 0x0500;
    pub const SNAPSHOT: u32 = 0x0600;
}

const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedTelemetry {
    seed: u64,
}

impl SimulatedTelemetry {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng(&self, query: &TelemetryQuery, concern: u32) -> ChaCha8Rng {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        query.match_id.hash(&mut hasher);
        // whole seconds; sub-second jitter must not reshuffle the board
        (query.timestamp.max(0.0) as u64).hash(&mut hasher);
        (query.side == Side::Red).hash(&mut hasher);
        concern.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }

    /// Gold swings grow with match length.
    fn gold_sigma(query: &TelemetryQuery) -> f32 {
        let minutes = query.timestamp.max(0.0) / 60.0;
        300.0 + minutes * 120.0
    }

    fn normal(rng: &mut ChaCha8Rng) -> f32 {
        let z: f64 = StandardNormal.sample(rng);
        z as f32
    }
}

impl Default for SimulatedTelemetry {
    fn default() -> Self {
        Self::new(42)
    }
}

#[async_trait]
impl TelemetrySource for SimulatedTelemetry {
    async fn resource_state(&self, query: &TelemetryQuery) -> Result<ResourceState> {
        let mut rng = self.rng(query, concern::RESOURCE);
        let sigma = Self::gold_sigma(query);
        let gold_diff = Self::normal(&mut rng) * sigma;
        Ok(ResourceState {
            gold_diff,
            exp_diff: gold_diff * 0.6 + Self::normal(&mut rng) * sigma * 0.3,
            last_teamfight_gold_delta: Self::normal(&mut rng) * 600.0,
        })
    }

    async fn advancement_state(&self, query: &TelemetryQuery) -> Result<AdvancementState> {
        let mut rng = self.rng(query, concern::ADVANCEMENT);
        let minutes = query.timestamp.max(0.0) / 60.0;
        let max_towers = ((minutes / 5.0) as i32).min(9);
        Ok(AdvancementState {
            tower_count_diff: rng.gen_range(-max_towers..=max_towers),
            drake_count_diff: rng.gen_range(-2..=2).clamp(-((minutes / 5.0) as i32), (minutes / 5.0) as i32),
            baron_owned: query.timestamp > 1200.0 && rng.gen_bool(0.15),
            lane_priority_index: rng.gen_range(0.0..=1.0),
        })
    }

    async fn proximity(&self, query: &TelemetryQuery) -> Result<ProximityCounts> {
        let mut rng = self.rng(query, concern::PROXIMITY);
        Ok(ProximityCounts {
            ally_count_near: rng.gen_range(0..=TEAM_SIZE as u8),
            enemy_count_near: rng.gen_range(0..=TEAM_SIZE as u8),
        })
    }

    async fn vision_state(&self, query: &TelemetryQuery) -> Result<VisionState> {
        let mut rng = self.rng(query, concern::VISION);
        Ok(VisionState {
            vision_score_diff: Self::normal(&mut rng) * 10.0,
            friendly_wards_near: rng.gen_range(0..=4),
            enemy_wards_near: rng.gen_range(0..=4),
        })
    }

    async fn ability_state(&self, query: &TelemetryQuery) -> Result<AbilityState> {
        let mut rng = self.rng(query, concern::ABILITY);
        let player_hp_pct = (0..TEAM_SIZE).map(|_| rng.gen_range(0.3..=1.0)).collect();
        Ok(AbilityState {
            player_hp_pct,
            ultimates_up: rng.gen_range(0..=TEAM_SIZE as u8),
            enemy_ultimates_up: rng.gen_range(0..=TEAM_SIZE as u8),
            tp_available: rng.gen_range(0..=2),
            smite_ready: rng.gen_bool(0.6),
            enemy_smite_ready: rng.gen_bool(0.6),
        })
    }

    async fn live_snapshot(&self, query: &TelemetryQuery) -> Result<LiveGameSnapshot> {
        // Shares the resource stream so ranker and scorer see the same gold.
        let gold_diff = self.resource_state(query).await?.gold_diff;
        let mut rng = self.rng(query, concern::SNAPSHOT);

        let enemy_respawn_timers = (0..rng.gen_range(0..=2))
            .map(|_| rng.gen_range(5.0..=40.0))
            .collect();
        let sidelane_pressure = (0..3).map(|_| rng.gen_bool(0.5)).collect();
        let next_dragon = match rng.gen_range(0..5) {
            0 => DragonKind::Infernal,
            1 => DragonKind::Ocean,
            2 => DragonKind::Mountain,
            3 => DragonKind::Cloud,
            _ => DragonKind::Normal,
        };

        Ok(LiveGameSnapshot {
            match_time: query.timestamp,
            gold_diff,
            towers_left: TowerCounts { team: rng.gen_range(3..=11), enemy: rng.gen_range(3..=11) },
            enemy_respawn_timers,
            sidelane_pressure,
            ally_count_near: Some(rng.gen_range(0..=TEAM_SIZE as u8)),
            enemy_count_near: Some(rng.gen_range(0..=TEAM_SIZE as u8)),
            vision_in_pit: Some(rng.gen_range(0..=4)),
            next_dragon: Some(next_dragon),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectiveKind;

    fn query(timestamp: f32) -> TelemetryQuery {
        TelemetryQuery::new("sim-1", timestamp, Side::Blue, ObjectiveKind::Baron)
    }

    #[tokio::test]
    async fn test_same_key_same_answer() {
        let source = SimulatedTelemetry::new(7);
        let a = source.ability_state(&query(1000.0)).await.unwrap();
        let b = source.ability_state(&query(1000.4)).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_seed_changes_stream() {
        let a = SimulatedTelemetry::new(1).resource_state(&query(1500.0)).await.unwrap();
        let b = SimulatedTelemetry::new(2).resource_state(&query(1500.0)).await.unwrap();
        assert_ne!(a.gold_diff, b.gold_diff);
    }

    #[tokio::test]
    async fn test_values_stay_in_game_ranges() {
        let source = SimulatedTelemetry::default();
        for t in [60.0, 600.0, 1200.0, 2400.0] {
            let prox = source.proximity(&query(t)).await.unwrap();
            assert!(prox.ally_count_near <= 5 && prox.enemy_count_near <= 5);
            let abilities = source.ability_state(&query(t)).await.unwrap();
            assert_eq!(abilities.player_hp_pct.len(), 5);
            assert!(abilities.player_hp_pct.iter().all(|hp| (0.0..=1.0).contains(hp)));
            let snapshot = source.live_snapshot(&query(t)).await.unwrap();
            assert_eq!(snapshot.sidelane_pressure.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_snapshot_gold_matches_resource_stream() {
        let source = SimulatedTelemetry::new(99);
        let resource = source.resource_state(&query(1300.0)).await.unwrap();
        let snapshot = source.live_snapshot(&query(1300.0)).await.unwrap();
        assert_eq!(resource.gold_diff, snapshot.gold_diff);
    }
}
