use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ltde_core::engine::{
    DecisionIntegrator, LinearWinModel, ObjectiveScorer, PriorityRanker, WinProbabilityModel,
};
use ltde_core::models::{
    FeatureRecord, LiveGameSnapshot, ObjectiveKind, ObjectiveState, TowerCounts,
};

fn baron_fight() -> ObjectiveState {
    ObjectiveState {
        objective: ObjectiveKind::Baron,
        match_time: 1500.0,
        team_gold_diff: 2500.0,
        ally_count_near: 4,
        enemy_count_near: 3,
        vision_in_pit: 3,
        enemy_vision_in_pit: 1,
        ultimates_up: 4,
        enemy_ultimates_up: 2,
        smite_ready: true,
        player_hp_percent: 75.0,
        ..Default::default()
    }
}

fn bench_decision(c: &mut Criterion) {
    let scorer = ObjectiveScorer::default();
    let estimator = LinearWinModel::default();
    let integrator = DecisionIntegrator::default();
    let state = baron_fight();
    let features = FeatureRecord {
        gold_diff: 2500.0,
        exp_diff: 1200.0,
        tower_count_diff: 2,
        ally_count_near: 4,
        enemy_count_near: 3,
        ..Default::default()
    };

    c.bench_function("ltde/scorer.decide(baron)", |b| {
        b.iter(|| black_box(scorer.decide(black_box(&state))))
    });

    c.bench_function("ltde/estimate+integrate", |b| {
        b.iter(|| {
            let estimate = estimator.estimate(black_box(&features));
            let decision = scorer.decide(&state);
            black_box(integrator.integrate(&decision, &estimate, features.gold_diff))
        })
    });
}

fn bench_ranker(c: &mut Criterion) {
    let ranker = PriorityRanker::default();
    let snapshot = LiveGameSnapshot {
        match_time: 1600.0,
        gold_diff: 3000.0,
        towers_left: TowerCounts { team: 9, enemy: 6 },
        enemy_respawn_timers: vec![18.0, 25.0],
        sidelane_pressure: vec![true, false, true],
        ally_count_near: Some(4),
        enemy_count_near: Some(3),
        vision_in_pit: Some(2),
        next_dragon: None,
    };

    c.bench_function("ltde/ranker.rank(late)", |b| {
        b.iter(|| black_box(ranker.rank(black_box(&snapshot)).len()))
    });
}

criterion_group!(benches, bench_decision, bench_ranker);
criterion_main!(benches);
