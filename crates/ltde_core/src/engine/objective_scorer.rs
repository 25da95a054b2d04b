//! Per-objective success probability and SECURE / CONTEST / AVOID calls
//!
//! `success_probability = clamp(0.5 + Σ terms, 0.02, 0.98)` where the terms are
//! numbers, vision, gold, ultimates, execute edge (smite) and health. Term
//! weights come from [`ScoringConfig`] per queue mode; value, failure cost and
//! thresholds per objective come from [`ObjectiveTable`].

use crate::engine::config::{ObjectiveTable, ScoringConfig};
use crate::models::{
    finite_or_zero, ObjectiveDecision, ObjectiveKind, ObjectiveState, Recommendation,
};

#[derive(Debug, Clone, Default)]
pub struct ObjectiveScorer {
    scoring: ScoringConfig,
    table: ObjectiveTable,
}

impl ObjectiveScorer {
    pub fn new(scoring: ScoringConfig, table: ObjectiveTable) -> Self {
        Self { scoring, table }
    }

    pub fn table(&self) -> &ObjectiveTable {
        &self.table
    }

    /// Chance a committed attempt on the objective succeeds, before any
    /// per-objective difficulty penalty.
    pub fn success_probability(&self, state: &ObjectiveState) -> f32 {
        let w = self.scoring.weights(state.queue_mode);

        let net_bodies = state.ally_count_near as f32 - state.enemy_count_near as f32;
        let numbers = (net_bodies * w.numbers / 2.0).max(0.0);

        let net_wards = state.vision_in_pit as f32 - state.enemy_vision_in_pit as f32;
        let vision = (net_wards * w.vision_per_ward / self.scoring.ward_divisor)
            .clamp(-w.vision_max, w.vision_max);

        let gold = (finite_or_zero(state.team_gold_diff) / self.scoring.gold_scale * w.gold_max)
            .clamp(-w.gold_max, w.gold_max);

        let net_ults = state.ultimates_up as f32 - state.enemy_ultimates_up as f32;
        let ultimates = (net_ults * w.ult_max / 2.0).clamp(-w.ult_max, w.ult_max);

        let smite = match (state.smite_ready, state.enemy_smite_ready) {
            (true, false) => w.smite,
            (false, true) => -w.smite,
            _ => 0.0,
        };

        let health = finite_or_zero(state.player_hp_percent).clamp(0.0, 100.0) / 100.0 * w.hp;

        (0.5 + numbers + vision + gold + ultimates + smite + health)
            .clamp(self.scoring.min_success, self.scoring.max_success)
    }

    pub fn decide(&self, state: &ObjectiveState) -> ObjectiveDecision {
        let decision = match state.objective {
            ObjectiveKind::Dragon => self.decide_dragon(state),
            ObjectiveKind::Baron => self.decide_baron(state),
            ObjectiveKind::Herald => self.decide_herald(state),
            ObjectiveKind::Tower => self.decide_tower(state),
        };
        tracing::debug!(
            objective = %decision.objective,
            recommendation = %decision.recommendation,
            p = decision.success_probability,
            ev = decision.expected_value,
            "objective scored"
        );
        decision
    }

    /// String-keyed entry; unknown keys yield a generic AVOID instead of an error.
    pub fn decide_key(&self, key: &str, state: &ObjectiveState) -> ObjectiveDecision {
        match key.parse::<ObjectiveKind>() {
            Ok(objective) => self.decide(&ObjectiveState { objective, ..state.clone() }),
            Err(err) => {
                tracing::warn!(key, %err, "unknown objective, holding");
                self.hold(state, key)
            }
        }
    }

    fn decide_dragon(&self, state: &ObjectiveState) -> ObjectiveDecision {
        let profile = &self.table.dragon;
        let p = self.success_probability(state);
        let elder = state.match_time > self.table.elder_after_secs;
        let base_value = if elder { self.table.elder_base_value } else { profile.base_value };
        let ev = profile.expected_value(base_value, p);

        let recommendation = if ev > profile.safe_baseline && p >= profile.threshold {
            Recommendation::Secure
        } else {
            Recommendation::Avoid
        };
        let call = match (recommendation, elder) {
            (Recommendation::Secure, true) => "Elder now",
            (Recommendation::Secure, false) => "Drake now",
            _ => "Skip drake",
        };
        self.assemble(state, base_value, p, ev, recommendation, p.min(0.95), call)
    }

    fn decide_baron(&self, state: &ObjectiveState) -> ObjectiveDecision {
        let profile = &self.table.baron;
        if let Some(gate) = profile.min_match_time {
            if state.match_time < gate {
                return self.too_early(state, gate);
            }
        }

        let p = (self.success_probability(state) - profile.difficulty_penalty)
            .max(self.scoring.min_success);
        let ev = profile.expected_value(profile.base_value, p);

        let t = &self.table;
        let numbers_edge =
            state.ally_count_near >= t.baron_min_allies && state.enemy_count_near <= t.baron_max_enemies;
        let vision_secure = state.vision_in_pit >= t.baron_min_wards
            && state.enemy_vision_in_pit <= t.baron_max_enemy_wards;

        let recommendation = if (numbers_edge || vision_secure)
            && p >= profile.threshold
            && ev > profile.safe_baseline
        {
            Recommendation::Secure
        } else if state.ally_count_near >= state.enemy_count_near {
            Recommendation::Contest
        } else {
            Recommendation::Avoid
        };
        let call = match recommendation {
            Recommendation::Secure => "Baron start",
            Recommendation::Contest => "Baron contest",
            _ => "Baron risky",
        };
        self.assemble(state, profile.base_value, p, ev, recommendation, p.min(0.95), call)
    }

    fn decide_herald(&self, state: &ObjectiveState) -> ObjectiveDecision {
        let profile = &self.table.herald;
        let p = self.success_probability(state);
        let ev = profile.expected_value(profile.base_value, p);
        let recommendation = if ev > profile.safe_baseline && p >= profile.threshold {
            Recommendation::Secure
        } else {
            Recommendation::Avoid
        };
        let call = if recommendation == Recommendation::Secure { "Herald now" } else { "Skip Herald" };
        self.assemble(state, profile.base_value, p, ev, recommendation, p, call)
    }

    fn decide_tower(&self, state: &ObjectiveState) -> ObjectiveDecision {
        let profile = &self.table.tower;
        let p = self.success_probability(state);
        let ev = profile.expected_value(profile.base_value, p);
        let healthy = state.player_hp_percent > self.table.tower_min_hp_percent;

        let recommendation = if state.sidelane_pressure
            && healthy
            && p > profile.threshold
            && ev > profile.safe_baseline
        {
            Recommendation::Secure
        } else {
            Recommendation::Avoid
        };
        let call = if recommendation == Recommendation::Secure { "Push Tower" } else { "Back off" };
        self.assemble(state, profile.base_value, p, ev, recommendation, p, call)
    }

    fn too_early(&self, state: &ObjectiveState, gate: f32) -> ObjectiveDecision {
        ObjectiveDecision {
            confidence: 1.0,
            // range floor; the attempt is not possible yet
            success_probability: self.scoring.min_success,
            rationale: vec![format!(
                "Too early for {} (<{} min)",
                state.objective,
                (gate / 60.0).round() as u32
            )],
            ..ObjectiveDecision::new(
                state.objective,
                Recommendation::Avoid,
                format!("Wait {}", state.objective),
            )
        }
    }

    fn hold(&self, state: &ObjectiveState, key: &str) -> ObjectiveDecision {
        ObjectiveDecision {
            confidence: 0.5,
            success_probability: self.scoring.min_success,
            rationale: vec![format!("Unknown objective '{key}', not scored")],
            ..ObjectiveDecision::new(state.objective, Recommendation::Avoid, "Hold")
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        state: &ObjectiveState,
        base_value: f32,
        p: f32,
        ev: f32,
        recommendation: Recommendation,
        confidence: f32,
        call: &str,
    ) -> ObjectiveDecision {
        ObjectiveDecision {
            confidence,
            expected_value: ev,
            success_probability: p,
            win_probability_delta_percent: p * base_value * 100.0,
            rationale: self.rationale(state),
            ..ObjectiveDecision::new(state.objective, recommendation, call)
        }
    }

    /// One clause per term that actually leans the fight.
    fn rationale(&self, state: &ObjectiveState) -> Vec<String> {
        let mut rationale = Vec::new();

        let (ally, enemy) = (state.ally_count_near, state.enemy_count_near);
        if ally > enemy {
            rationale.push(format!("{ally}v{enemy} numerical advantage"));
        } else if enemy > ally {
            rationale.push("Outnumbered near objective".to_string());
        }

        let (wards, enemy_wards) = (state.vision_in_pit, state.enemy_vision_in_pit);
        if wards > enemy_wards {
            rationale.push(format!("Vision control ({wards} friendly vs {enemy_wards} enemy)"));
        } else if enemy_wards > wards {
            rationale.push("Poor vision control".to_string());
        }

        match (state.smite_ready, state.enemy_smite_ready) {
            (true, false) => rationale.push("Smite advantage (Enemy down)".to_string()),
            (false, true) => rationale.push("Enemy smite advantage".to_string()),
            _ => {}
        }

        if state.ultimates_up > state.enemy_ultimates_up {
            rationale.push(format!(
                "Ultimate advantage (+{})",
                state.ultimates_up - state.enemy_ultimates_up
            ));
        } else if state.enemy_ultimates_up > state.ultimates_up {
            rationale.push(format!(
                "Enemy ultimates up (+{})",
                state.enemy_ultimates_up - state.ultimates_up
            ));
        }

        if state.sidelane_pressure {
            rationale.push("Sidelanes are pressured".to_string());
        }

        let gold = finite_or_zero(state.team_gold_diff);
        if gold > self.table.gold_lead_note {
            rationale.push("Gold lead".to_string());
        } else if gold < self.table.gold_deficit_note {
            rationale.push("Significant gold deficit".to_string());
        }

        rationale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueueMode;

    fn baron_fight(match_time: f32) -> ObjectiveState {
        ObjectiveState {
            objective: ObjectiveKind::Baron,
            match_time,
            ally_count_near: 4,
            enemy_count_near: 3,
            vision_in_pit: 3,
            enemy_vision_in_pit: 1,
            smite_ready: true,
            enemy_smite_ready: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_baron_with_numbers_and_vision_is_secured() {
        let decision = ObjectiveScorer::default().decide(&baron_fight(1000.0));
        assert_eq!(decision.recommendation, Recommendation::Secure);
        assert!(decision.success_probability >= 0.65);
        assert_eq!(decision.short_call, "Baron start");
        assert!(decision.rationale.iter().any(|r| r == "4v3 numerical advantage"));
        assert!(decision.rationale.iter().any(|r| r == "Smite advantage (Enemy down)"));
    }

    #[test]
    fn test_baron_before_gate() {
        let decision = ObjectiveScorer::default().decide(&baron_fight(600.0));
        assert_eq!(decision.recommendation, Recommendation::Avoid);
        assert_eq!(decision.confidence, 1.0);
        assert_eq!(decision.expected_value, 0.0);
        assert_eq!(decision.win_probability_delta_percent, 0.0);
        assert_eq!(decision.short_call, "Wait Baron");
    }

    #[test]
    fn test_baron_without_edge_is_contested() {
        let state = ObjectiveState {
            objective: ObjectiveKind::Baron,
            match_time: 1500.0,
            ally_count_near: 3,
            enemy_count_near: 3,
            ..Default::default()
        };
        let decision = ObjectiveScorer::default().decide(&state);
        assert_eq!(decision.recommendation, Recommendation::Contest);
        assert_eq!(decision.short_call, "Baron contest");

        let outnumbered = ObjectiveState { ally_count_near: 2, ..state };
        let decision = ObjectiveScorer::default().decide(&outnumbered);
        assert_eq!(decision.recommendation, Recommendation::Avoid);
        assert!(decision.rationale.contains(&"Outnumbered near objective".to_string()));
    }

    #[test]
    fn test_neutral_dragon_is_skipped() {
        let state = ObjectiveState::for_objective(ObjectiveKind::Dragon);
        let decision = ObjectiveScorer::default().decide(&state);
        assert_eq!(decision.recommendation, Recommendation::Avoid);
        assert_eq!(decision.short_call, "Skip drake");
        assert!(decision.rationale.is_empty());
    }

    #[test]
    fn test_elder_uses_higher_value() {
        let state = ObjectiveState {
            objective: ObjectiveKind::Dragon,
            match_time: 2200.0,
            ally_count_near: 5,
            enemy_count_near: 3,
            player_hp_percent: 90.0,
            ..Default::default()
        };
        let decision = ObjectiveScorer::default().decide(&state);
        assert_eq!(decision.recommendation, Recommendation::Secure);
        assert_eq!(decision.short_call, "Elder now");
        let expected_delta = decision.success_probability * 0.15 * 100.0;
        assert!((decision.win_probability_delta_percent - expected_delta).abs() < 1e-4);
    }

    #[test]
    fn test_tower_needs_pressure_and_health() {
        let strong = ObjectiveState {
            objective: ObjectiveKind::Tower,
            ally_count_near: 3,
            enemy_count_near: 1,
            player_hp_percent: 85.0,
            sidelane_pressure: true,
            ..Default::default()
        };
        let scorer = ObjectiveScorer::default();
        assert_eq!(scorer.decide(&strong).short_call, "Push Tower");

        let no_pressure = ObjectiveState { sidelane_pressure: false, ..strong.clone() };
        assert_eq!(scorer.decide(&no_pressure).recommendation, Recommendation::Avoid);

        let hurt = ObjectiveState { player_hp_percent: 60.0, ..strong };
        assert_eq!(scorer.decide(&hurt).short_call, "Back off");
    }

    #[test]
    fn test_tower_threshold_is_strict() {
        let push = ObjectiveState {
            objective: ObjectiveKind::Tower,
            ally_count_near: 3,
            enemy_count_near: 1,
            player_hp_percent: 85.0,
            sidelane_pressure: true,
            ..Default::default()
        };
        let mut table = ObjectiveTable::default();
        let p = ObjectiveScorer::default().success_probability(&push);
        table.tower.threshold = p;
        let at_threshold = ObjectiveScorer::new(ScoringConfig::default(), table.clone());
        assert_eq!(at_threshold.decide(&push).recommendation, Recommendation::Avoid);

        table.tower.threshold = p - 0.01;
        let below = ObjectiveScorer::new(ScoringConfig::default(), table);
        assert_eq!(below.decide(&push).recommendation, Recommendation::Secure);
    }

    #[test]
    fn test_flex_weights_vision_more() {
        let solo = ObjectiveState {
            objective: ObjectiveKind::Herald,
            vision_in_pit: 2,
            ..Default::default()
        };
        let flex = ObjectiveState { queue_mode: QueueMode::Flex, ..solo.clone() };
        let scorer = ObjectiveScorer::default();
        assert!(scorer.success_probability(&flex) > scorer.success_probability(&solo));
    }

    #[test]
    fn test_gold_term_is_capped() {
        let scorer = ObjectiveScorer::default();
        let rich = ObjectiveState { team_gold_diff: 50_000.0, ..Default::default() };
        // 0.5 + 0.15 gold cap
        assert!((scorer.success_probability(&rich) - 0.65).abs() < 1e-5);
        let broke = ObjectiveState { team_gold_diff: -50_000.0, ..Default::default() };
        assert!((scorer.success_probability(&broke) - 0.35).abs() < 1e-5);
    }

    #[test]
    fn test_gold_rationale_bands() {
        let scorer = ObjectiveScorer::default();
        let lead = ObjectiveState { team_gold_diff: 2500.0, ..Default::default() };
        assert!(scorer.decide(&lead).rationale.contains(&"Gold lead".to_string()));
        let deficit = ObjectiveState { team_gold_diff: -3000.0, ..Default::default() };
        assert!(scorer
            .decide(&deficit)
            .rationale
            .contains(&"Significant gold deficit".to_string()));
    }

    #[test]
    fn test_unknown_key_holds() {
        let decision = ObjectiveScorer::default().decide_key("atakhan", &ObjectiveState::default());
        assert_eq!(decision.recommendation, Recommendation::Avoid);
        assert_eq!(decision.short_call, "Hold");
        assert_eq!(decision.confidence, 0.5);
        assert_eq!(decision.rationale, vec!["Unknown objective 'atakhan', not scored".to_string()]);
    }

    #[test]
    fn test_key_alias_routes_to_kind() {
        let decision = ObjectiveScorer::default().decide_key("major", &baron_fight(1000.0));
        assert_eq!(decision.objective, ObjectiveKind::Baron);
        assert_eq!(decision.recommendation, Recommendation::Secure);
    }
}
