//! Range, ordering and idempotence properties over generated inputs.

use proptest::prelude::*;

use super::config::EstimatorConfig;
use super::*;
use crate::models::{
    FeatureRecord, LiveGameSnapshot, ObjectiveKind, ObjectiveState, QueueMode, Recommendation,
    WinProbabilityEstimate,
};

fn any_kind() -> impl Strategy<Value = ObjectiveKind> {
    prop_oneof![
        Just(ObjectiveKind::Dragon),
        Just(ObjectiveKind::Baron),
        Just(ObjectiveKind::Herald),
        Just(ObjectiveKind::Tower),
    ]
}

fn any_recommendation() -> impl Strategy<Value = Recommendation> {
    prop_oneof![
        Just(Recommendation::Secure),
        Just(Recommendation::Contest),
        Just(Recommendation::Avoid),
        Just(Recommendation::Trade),
    ]
}

fn any_features() -> impl Strategy<Value = FeatureRecord> {
    (
        prop_oneof![-50_000.0f32..50_000.0, Just(f32::NAN), Just(f32::INFINITY)],
        -30_000.0f32..30_000.0,
        -11i32..=11,
        any::<bool>(),
        0u8..=5,
        0u8..=5,
    )
        .prop_map(|(gold_diff, exp_diff, tower_count_diff, baron_owned, allies, enemies)| {
            FeatureRecord {
                gold_diff,
                exp_diff,
                tower_count_diff,
                baron_owned,
                ally_count_near: allies,
                enemy_count_near: enemies,
                ..Default::default()
            }
        })
}

prop_compose! {
    fn any_state()(
        objective in any_kind(),
        flags in (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        match_time in 0.0f32..3600.0,
        team_gold_diff in -40_000.0f32..40_000.0,
        counts in (0u8..=5, 0u8..=5, 0u8..=10, 0u8..=10, 0u8..=5, 0u8..=5),
        player_hp_percent in 0.0f32..=100.0,
    ) -> ObjectiveState {
        let (flex, smite_ready, enemy_smite_ready, sidelane_pressure) = flags;
        let (ally_count_near, enemy_count_near, vision_in_pit, enemy_vision_in_pit, ultimates_up, enemy_ultimates_up) = counts;
        ObjectiveState {
            objective,
            queue_mode: if flex { QueueMode::Flex } else { QueueMode::Solo },
            time_to_spawn: 0.0,
            match_time,
            team_gold_diff,
            ally_count_near,
            enemy_count_near,
            vision_in_pit,
            enemy_vision_in_pit,
            ultimates_up,
            enemy_ultimates_up,
            smite_ready,
            enemy_smite_ready,
            sidelane_pressure,
            player_hp_percent,
        }
    }
}

prop_compose! {
    fn any_snapshot()(
        match_time in 0.0f32..3600.0,
        gold_diff in -30_000.0f32..30_000.0,
        enemy_respawn_timers in prop::collection::vec(0.0f32..60.0, 0..5),
        ally in prop::option::of(0u8..=5),
        enemy in prop::option::of(0u8..=5),
        vision in prop::option::of(0u8..=8),
    ) -> LiveGameSnapshot {
        LiveGameSnapshot {
            match_time,
            gold_diff,
            enemy_respawn_timers,
            ally_count_near: ally,
            enemy_count_near: enemy,
            vision_in_pit: vision,
            ..Default::default()
        }
    }
}

proptest! {
    /// Property: estimates stay inside the documented bands for any input
    #[test]
    fn prop_estimate_in_range(features in any_features()) {
        let estimate = LinearWinModel::default().estimate(&features);
        prop_assert!((0.02..=0.98).contains(&estimate.probability));
        prop_assert!((0.7..=0.95).contains(&estimate.confidence));
    }

    /// Property: every decision carries a success probability in [0.02, 0.98]
    #[test]
    fn prop_success_probability_in_range(state in any_state()) {
        let decision = ObjectiveScorer::default().decide(&state);
        prop_assert!((0.02..=0.98).contains(&decision.success_probability));
        prop_assert!(decision.confidence.is_finite());
    }

    /// Property: one more ally near the objective never lowers success probability
    #[test]
    fn prop_monotonic_in_allies(state in any_state()) {
        prop_assume!(state.ally_count_near < 5);
        let scorer = ObjectiveScorer::default();
        let more = ObjectiveState { ally_count_near: state.ally_count_near + 1, ..state.clone() };
        prop_assert!(scorer.success_probability(&more) >= scorer.success_probability(&state));
    }

    /// Property: Baron is always avoided with full confidence before its gate
    #[test]
    fn prop_baron_gate(state in any_state(), t in 0.0f32..900.0) {
        let early = ObjectiveState { objective: ObjectiveKind::Baron, match_time: t, ..state };
        let decision = ObjectiveScorer::default().decide(&early);
        prop_assert_eq!(decision.recommendation, Recommendation::Avoid);
        prop_assert_eq!(decision.confidence, 1.0);
        prop_assert_eq!(decision.expected_value, 0.0);
    }

    /// Property: ranked output is sorted by descending score within [0, 100]
    #[test]
    fn prop_ranking_sorted(snapshot in any_snapshot()) {
        let ranked = PriorityRanker::default().rank(&snapshot);
        prop_assert!(ranked.windows(2).all(|w| w[0].priority_score >= w[1].priority_score));
        prop_assert!(ranked.iter().all(|p| (0.0..=100.0).contains(&p.priority_score)));
        prop_assert!(ranked.iter().all(|p| (0.1..=0.98).contains(&p.feasibility)));
    }

    /// Property: integrating an already integrated decision changes nothing
    #[test]
    fn prop_integrator_idempotent(
        state in any_state(),
        base in any_recommendation(),
        p in 0.02f32..=0.98,
        gold in -10_000.0f32..10_000.0,
    ) {
        let mut decision = ObjectiveScorer::default().decide(&state);
        decision.recommendation = base;
        let estimate = WinProbabilityEstimate { probability: p, confidence: 0.8, ..Default::default() };
        let integrator = DecisionIntegrator::default();
        let once = integrator.integrate(&decision, &estimate, gold);
        let twice = integrator.integrate(&once, &estimate, gold);
        prop_assert_eq!(once.recommendation, twice.recommendation);
        prop_assert_eq!(once.confidence, twice.confidence);
        prop_assert!((0.3..=0.98).contains(&once.confidence));
    }
}

#[test]
fn test_all_zero_features_is_coin_flip() {
    let model = LinearWinModel::new(EstimatorConfig::default());
    let estimate = model.estimate(&FeatureRecord::default());
    assert!((estimate.probability - 0.5).abs() < 1e-6);
    assert!((estimate.confidence - 0.7).abs() < 1e-6);
}
