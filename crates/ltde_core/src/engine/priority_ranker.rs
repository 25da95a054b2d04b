//! Board-wide objective ranking
//!
//! Every candidate on the map gets `priority_score = strategic_value ×
//! feasibility × 100`. Strategic value depends on the objective and the game
//! phase; feasibility only on the live snapshot, so all candidates of one
//! call share it.

use crate::engine::config::PriorityConfig;
use crate::models::{
    finite_or_zero, DragonKind, GamePhase, LiveGameSnapshot, ObjectiveKind, ObjectivePriority,
    PriorityCandidate, Recommendation,
};

const LANES: [&str; 3] = ["top", "mid", "bot"];
const TOWER_TIERS: [&str; 3] = ["outer", "inner", "inhib"];
const DRAGON_RESPAWN_SECS: f32 = 300.0;
const HERALD_SPAWN_SECS: f32 = 480.0;

#[derive(Debug, Clone, Default)]
pub struct PriorityRanker {
    config: PriorityConfig,
}

impl PriorityRanker {
    pub fn new(config: PriorityConfig) -> Self {
        Self { config }
    }

    /// All candidates, highest priority first. Ties keep candidate order.
    pub fn rank(&self, snapshot: &LiveGameSnapshot) -> Vec<ObjectivePriority> {
        let snapshot = &LiveGameSnapshot {
            match_time: finite_or_zero(snapshot.match_time),
            ..snapshot.clone()
        };
        let feasibility = self.feasibility(snapshot);
        let mut ranked: Vec<ObjectivePriority> = self
            .candidates(snapshot)
            .into_iter()
            .map(|candidate| self.score(&candidate, snapshot, feasibility))
            .collect();
        // stable: equal scores keep insertion order
        ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        tracing::debug!(
            candidates = ranked.len(),
            feasibility,
            match_time = snapshot.match_time,
            "objectives ranked"
        );
        ranked
    }

    pub fn top(&self, snapshot: &LiveGameSnapshot, limit: usize) -> Vec<ObjectivePriority> {
        let mut ranked = self.rank(snapshot);
        ranked.truncate(limit);
        ranked
    }

    /// Non-finite times count as the start of the game.
    pub fn phase(&self, match_time: f32) -> GamePhase {
        let match_time = finite_or_zero(match_time);
        if match_time < self.config.mid_phase_from {
            GamePhase::Early
        } else if match_time < self.config.late_phase_from {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }

    /// Towers first (lane by lane, outer to inhibitor), then timed spawns.
    pub fn candidates(&self, snapshot: &LiveGameSnapshot) -> Vec<PriorityCandidate> {
        let t = finite_or_zero(snapshot.match_time);
        let mut candidates = Vec::with_capacity(12);

        for lane in LANES {
            for tier in TOWER_TIERS {
                candidates.push(PriorityCandidate {
                    kind: ObjectiveKind::Tower,
                    location: format!("{lane}-{tier}"),
                    time_to_spawn: 0.0,
                    dragon: None,
                });
            }
        }

        if t >= self.config.baron_after {
            candidates.push(PriorityCandidate {
                kind: ObjectiveKind::Baron,
                location: "pit".to_string(),
                time_to_spawn: 0.0,
                dragon: None,
            });
        }

        if t < self.config.mid_phase_from {
            candidates.push(PriorityCandidate {
                kind: ObjectiveKind::Herald,
                location: "top".to_string(),
                time_to_spawn: (HERALD_SPAWN_SECS - t).max(0.0),
                dragon: None,
            });
        }

        let dragon = if t > self.config.elder_after {
            DragonKind::Elder
        } else {
            snapshot.next_dragon.unwrap_or_default()
        };
        candidates.push(PriorityCandidate {
            kind: ObjectiveKind::Dragon,
            location: "pit".to_string(),
            time_to_spawn: DRAGON_RESPAWN_SECS,
            dragon: Some(dragon),
        });

        candidates
    }

    /// Strategic weight on the 0-100 scale, before normalization.
    pub fn strategic_weight(&self, candidate: &PriorityCandidate, phase: GamePhase) -> f32 {
        let w = &self.config.weights;
        match candidate.kind {
            ObjectiveKind::Baron => {
                let late = if phase == GamePhase::Late { w.baron_late_multiplier } else { 1.0 };
                w.baron * late
            }
            ObjectiveKind::Dragon => match candidate.dragon.unwrap_or_default() {
                DragonKind::Elder => w.elder,
                DragonKind::Soul => w.soul,
                DragonKind::Infernal => w.infernal,
                DragonKind::Ocean => w.ocean,
                DragonKind::Cloud => w.cloud,
                DragonKind::Mountain => w.mountain,
                DragonKind::Normal => w.normal_dragon,
            },
            ObjectiveKind::Herald => {
                let factor = if phase == GamePhase::Early {
                    w.herald_early_multiplier
                } else {
                    w.herald_late_multiplier
                };
                w.herald * factor
            }
            ObjectiveKind::Tower => {
                if candidate.location.contains("inhib") {
                    w.inhibitor_tower
                } else if candidate.location.contains("inner") {
                    w.inner_tower
                } else {
                    w.outer_tower
                }
            }
        }
    }

    /// Product of numbers, vision, gold, respawn and positional factors.
    pub fn feasibility(&self, snapshot: &LiveGameSnapshot) -> f32 {
        let allies = snapshot.ally_count_near.unwrap_or(0) as f32;
        let enemies = snapshot.enemy_count_near.unwrap_or(0) as f32;
        let numbers = (0.4 + (allies - enemies).max(0.0) * 0.15).clamp(0.4, 1.0);

        let wards = snapshot.vision_in_pit.unwrap_or(0) as f32;
        let vision = (0.5 + wards * 0.15).clamp(0.5, 1.2);

        let gold = (0.8 + finite_or_zero(snapshot.gold_diff) / 10_000.0).clamp(0.3, 1.2);

        let timers: Vec<f32> = snapshot
            .enemy_respawn_timers
            .iter()
            .map(|t| finite_or_zero(*t).max(0.0))
            .collect();
        let avg_timer = if timers.is_empty() {
            0.0
        } else {
            timers.iter().sum::<f32>() / timers.len() as f32
        };
        let respawn = 0.7 + avg_timer.min(20.0) / 100.0;

        (numbers * vision * gold * respawn * self.config.positional_factor).clamp(0.1, 0.98)
    }

    fn score(
        &self,
        candidate: &PriorityCandidate,
        snapshot: &LiveGameSnapshot,
        feasibility: f32,
    ) -> ObjectivePriority {
        let phase = self.phase(snapshot.match_time);
        let strategic_value = (self.strategic_weight(candidate, phase) / 100.0).clamp(0.0, 1.0);
        let priority_score = strategic_value * feasibility * 100.0;
        let action = self.action(snapshot, feasibility);

        ObjectivePriority {
            kind: candidate.kind,
            location: candidate.location.clone(),
            priority_score,
            feasibility,
            strategic_value,
            estimated_enemy_response_secs: self.config.enemy_response_secs,
            recommended_action: action,
            short_call: self.call(candidate, priority_score, action),
        }
    }

    fn action(&self, snapshot: &LiveGameSnapshot, feasibility: f32) -> Recommendation {
        let cfg = &self.config;
        if feasibility > cfg.secure_feasibility {
            Recommendation::Secure
        } else if feasibility > cfg.contest_feasibility {
            Recommendation::Contest
        } else if finite_or_zero(snapshot.gold_diff) < cfg.trade_gold_below {
            Recommendation::Trade
        } else {
            Recommendation::Avoid
        }
    }

    fn call(&self, candidate: &PriorityCandidate, score: f32, action: Recommendation) -> String {
        let kind = candidate.kind.name().to_uppercase();
        let cfg = &self.config;
        if score > cfg.now_call_above {
            format!("{kind} NOW {action}")
        } else if score > cfg.location_call_above {
            format!("{} → {kind}", candidate.location.to_uppercase())
        } else if score > cfg.setup_call_above {
            format!("{kind} setup")
        } else {
            "Low priority".to_string()
        }
    }
}
