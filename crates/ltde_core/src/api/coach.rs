//! Recommendation aggregator
//!
//! One façade over the whole pipeline: telemetry fan-out, win probability,
//! objective scoring, integration and priority ranking for the objective
//! question; classification and counter scripts for the opponent question.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;

use crate::analysis::counter_scripts;
use crate::analysis::playstyle::{coach_call, summarize_team, worst_case_action};
use crate::analysis::{LiveTracker, PlaystyleClassifier};
use crate::engine::config::EngineConfig;
use crate::engine::{
    build_objective_state, DecisionIntegrator, FeatureExtractor, LinearWinModel, ObjectiveScorer,
    PriorityRanker, WinProbabilityModel,
};
use crate::error::Result;
use crate::models::{
    CoachRecommendation, FeatureRecord, ObjectiveKind, ObjectivePriority, OpponentAnalysis,
    TelemetryBatch, Urgency, WinProbabilityEstimate,
};
use crate::telemetry::TelemetrySource;

pub const DEFAULT_PRIORITY_LIMIT: usize = 5;

const FALLBACK_FEATURES: [&str; 2] = ["Vision secure (+2.8%)", "Ult advantage (+1.9%)"];

pub struct CoachEngine {
    config: EngineConfig,
    extractor: FeatureExtractor,
    estimator: Box<dyn WinProbabilityModel>,
    scorer: ObjectiveScorer,
    integrator: DecisionIntegrator,
    ranker: PriorityRanker,
    classifier: PlaystyleClassifier,
}

impl std::fmt::Debug for CoachEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachEngine")
            .field("extractor", &self.extractor)
            .field("focus_objective", &self.config.telemetry.focus_objective)
            .field("queue_mode", &self.config.telemetry.queue_mode)
            .finish_non_exhaustive()
    }
}

impl CoachEngine {
    pub fn new(config: EngineConfig, source: Arc<dyn TelemetrySource>) -> Self {
        let telemetry = &config.telemetry;
        let extractor = FeatureExtractor::new(
            source,
            telemetry.side,
            Duration::from_millis(telemetry.fetch_timeout_ms),
        );
        Self {
            extractor,
            estimator: Box::new(LinearWinModel::new(config.decision.estimator.clone())),
            scorer: ObjectiveScorer::new(config.scoring.clone(), config.objectives.clone()),
            integrator: DecisionIntegrator::new(config.decision.integrator.clone()),
            ranker: PriorityRanker::new(config.priority.clone()),
            classifier: PlaystyleClassifier::new(config.classifier.clone()),
            config,
        }
    }

    /// Swaps the win-probability model, keeping everything else.
    pub fn with_estimator(mut self, estimator: impl WinProbabilityModel + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommendation for the configured focus objective.
    pub async fn get_recommendation(
        &self,
        match_id: &str,
        timestamp: f32,
    ) -> Result<CoachRecommendation> {
        self.get_recommendation_for(match_id, timestamp, self.config.telemetry.focus_objective)
            .await
    }

    pub async fn get_recommendation_for(
        &self,
        match_id: &str,
        timestamp: f32,
        objective: ObjectiveKind,
    ) -> Result<CoachRecommendation> {
        let snapshot = self.extractor.snapshot(match_id, timestamp, objective).await?;
        let state =
            build_objective_state(&snapshot, objective, self.config.telemetry.queue_mode);

        let estimate = self.estimator.estimate(&snapshot.features);
        let scored = self.scorer.decide(&state);
        let decision = self.integrator.integrate(&scored, &estimate, snapshot.features.gold_diff);

        let recommendation = CoachRecommendation {
            win_probability: estimate.probability,
            top_features: top_features(&snapshot.features, &estimate),
            risk_tier: self.integrator.risk_tier(estimate.probability),
            urgency: Urgency::for_decision(&decision),
            decision,
        };
        tracing::info!(
            match_id,
            timestamp,
            objective = %objective,
            recommendation = %recommendation.decision.recommendation,
            risk_tier = %recommendation.risk_tier,
            "recommendation ready"
        );
        Ok(recommendation)
    }

    /// One recommendation per objective, in the order given. Fails as a whole
    /// when any extraction fails.
    pub async fn get_recommendations(
        &self,
        match_id: &str,
        timestamp: f32,
        objectives: &[ObjectiveKind],
    ) -> Result<Vec<CoachRecommendation>> {
        try_join_all(
            objectives
                .iter()
                .map(|objective| self.get_recommendation_for(match_id, timestamp, *objective)),
        )
        .await
    }

    /// Highest-priority objectives on the board, at most `limit`.
    pub async fn get_top_priorities(
        &self,
        match_id: &str,
        timestamp: f32,
        limit: usize,
    ) -> Result<Vec<ObjectivePriority>> {
        let snapshot = self.extractor.live_snapshot(match_id, timestamp).await?;
        Ok(self.ranker.top(&snapshot, limit))
    }

    pub fn analyze_opponents(&self, batch: &TelemetryBatch) -> OpponentAnalysis {
        opponent_analysis(&self.classifier, batch)
    }

    /// Analyses the batch and records every identified player in `tracker`.
    pub fn track_opponents(
        &self,
        tracker: &mut LiveTracker,
        batch: &TelemetryBatch,
    ) -> OpponentAnalysis {
        let analysis = self.analyze_opponents(batch);
        tracker.track(&analysis.enemy_playstyles);
        analysis
    }
}

pub(crate) fn opponent_analysis(
    classifier: &PlaystyleClassifier,
    batch: &TelemetryBatch,
) -> OpponentAnalysis {
    let game = batch.game();
    let enemy_playstyles = classifier.classify_batch(batch);
    let team_counter = summarize_team(game, &enemy_playstyles);
    let dominant = team_counter.dominant_style;

    let counter_script = match dominant {
        Some(style) => counter_scripts::lookup(game, style),
        None => counter_scripts::fallback(),
    };
    tracing::debug!(%game, players = batch.len(), ?dominant, "opponents analysed");

    OpponentAnalysis {
        game,
        enemy_playstyles,
        team_counter,
        counter_script,
        coach_call: coach_call(dominant).to_string(),
        worst_case_action: worst_case_action(dominant).to_string(),
    }
}

/// Readable lines for the attributed features, with a stock pair when the
/// attribution names neither gold nor numbers.
fn top_features(features: &FeatureRecord, estimate: &WinProbabilityEstimate) -> Vec<String> {
    let weight = |name: &str| estimate.attribution.get(name).copied().filter(|w| *w > 0.0);

    let mut lines = Vec::new();
    if let Some(w) = weight("gold_diff") {
        lines.push(format!("Gold diff: {:.0} ({:.1}%)", features.gold_diff, w * 100.0));
    }
    if let Some(w) = weight("ally_count_near") {
        lines.push(format!(
            "Numbers {}v{} ({:.1}%)",
            features.ally_count_near,
            features.enemy_count_near,
            w * 100.0
        ));
    }
    if lines.is_empty() {
        lines = FALLBACK_FEATURES.iter().map(|s| s.to_string()).collect();
    }
    lines
}
