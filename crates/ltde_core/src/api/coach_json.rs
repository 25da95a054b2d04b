// Coach JSON API Layer
// String-in, string-out entry points over the stateless engine stages

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::analysis::PlaystyleClassifier;
use crate::engine::config::EngineConfig;
use crate::engine::{
    DecisionIntegrator, LinearWinModel, ObjectiveScorer, PriorityRanker, WinProbabilityModel,
};
use crate::models::{
    FeatureRecord, LiveGameSnapshot, ObjectiveDecision, ObjectivePriority, ObjectiveState,
    OpponentAnalysis, RiskTier, TelemetryBatch, Urgency,
};

use super::coach::{opponent_analysis, DEFAULT_PRIORITY_LIMIT};

const SERIALIZATION_FAILED: &str = r#"{"success":false,"error":"Serialization failed"}"#;

// ========== Request/Response Structures ==========

#[derive(Debug, Serialize, Deserialize)]
pub struct DecideObjectiveRequest {
    /// Objective key, e.g. "BARON", "drake", "structure"
    pub objective: String,
    #[serde(default)]
    pub state: ObjectiveState,
    /// When present the decision is adjusted for win probability
    pub features: Option<FeatureRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecideObjectiveResponse {
    pub success: bool,
    pub decision: Option<ObjectiveDecision>,
    pub win_probability: Option<f32>,
    pub risk_tier: Option<RiskTier>,
    pub urgency: Option<Urgency>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankPrioritiesRequest {
    pub snapshot: LiveGameSnapshot,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankPrioritiesResponse {
    pub success: bool,
    pub priorities: Vec<ObjectivePriority>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeOpponentsResponse {
    pub success: bool,
    pub analysis: Option<OpponentAnalysis>,
    pub error: Option<String>,
}

// ========== Shared Engine Stages ==========

struct JsonStages {
    estimator: LinearWinModel,
    scorer: ObjectiveScorer,
    integrator: DecisionIntegrator,
    ranker: PriorityRanker,
    classifier: PlaystyleClassifier,
}

static STAGES: Lazy<JsonStages> = Lazy::new(|| {
    let config = EngineConfig::from_env_or_default().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default engine config");
        EngineConfig::default()
    });
    JsonStages {
        estimator: LinearWinModel::new(config.decision.estimator.clone()),
        scorer: ObjectiveScorer::new(config.scoring.clone(), config.objectives.clone()),
        integrator: DecisionIntegrator::new(config.decision.integrator.clone()),
        ranker: PriorityRanker::new(config.priority.clone()),
        classifier: PlaystyleClassifier::new(config.classifier.clone()),
    }
});

fn to_json<T: Serialize>(response: &T) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| SERIALIZATION_FAILED.to_string())
}

// ========== Public API Functions ==========

/// Scores one objective; an unknown objective key yields the generic AVOID.
pub fn decide_objective_json(request_json: &str) -> String {
    let request: DecideObjectiveRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            return to_json(&DecideObjectiveResponse {
                success: false,
                decision: None,
                win_probability: None,
                risk_tier: None,
                urgency: None,
                error: Some(format!("Invalid request format: {}", e)),
            });
        }
    };

    let stages = &*STAGES;
    let mut decision = stages.scorer.decide_key(&request.objective, &request.state);
    let mut win_probability = None;
    let mut risk_tier = None;

    if let Some(features) = &request.features {
        let estimate = stages.estimator.estimate(features);
        decision = stages.integrator.integrate(&decision, &estimate, features.gold_diff);
        risk_tier = Some(stages.integrator.risk_tier(estimate.probability));
        win_probability = Some(estimate.probability);
    }

    to_json(&DecideObjectiveResponse {
        success: true,
        urgency: Some(Urgency::for_decision(&decision)),
        decision: Some(decision),
        win_probability,
        risk_tier,
        error: None,
    })
}

/// Ranks the board; `limit` defaults to five entries.
pub fn rank_priorities_json(request_json: &str) -> String {
    let request: RankPrioritiesRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            return to_json(&RankPrioritiesResponse {
                success: false,
                priorities: vec![],
                error: Some(format!("Invalid request format: {}", e)),
            });
        }
    };

    let limit = request.limit.unwrap_or(DEFAULT_PRIORITY_LIMIT);
    to_json(&RankPrioritiesResponse {
        success: true,
        priorities: STAGES.ranker.top(&request.snapshot, limit),
        error: None,
    })
}

/// Classifies a tagged roster batch and attaches the team counter script.
pub fn analyze_opponents_json(request_json: &str) -> String {
    let batch: TelemetryBatch = match serde_json::from_str(request_json) {
        Ok(batch) => batch,
        Err(e) => {
            return to_json(&AnalyzeOpponentsResponse {
                success: false,
                analysis: None,
                error: Some(format!("Invalid request format: {}", e)),
            });
        }
    };

    to_json(&AnalyzeOpponentsResponse {
        success: true,
        analysis: Some(opponent_analysis(&STAGES.classifier, &batch)),
        error: None,
    })
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObjectiveKind, Playstyle, Recommendation};

    #[test]
    fn test_decide_objective_baron() {
        let request = r#"{
            "objective": "BARON",
            "state": {
                "match_time": 1000.0, "ally_count_near": 4, "enemy_count_near": 3,
                "vision_in_pit": 3, "enemy_vision_in_pit": 1, "smite_ready": true
            }
        }"#;
        let response: DecideObjectiveResponse =
            serde_json::from_str(&decide_objective_json(request)).unwrap();
        assert!(response.success);
        let decision = response.decision.unwrap();
        assert_eq!(decision.objective, ObjectiveKind::Baron);
        assert_eq!(decision.recommendation, Recommendation::Secure);
        assert!(response.win_probability.is_none());
        assert!(!decision.win_prob_adjusted);
    }

    #[test]
    fn test_decide_objective_with_features() {
        let request = r#"{
            "objective": "dragon",
            "state": { "match_time": 700.0, "ally_count_near": 3, "enemy_count_near": 3 },
            "features": { "gold_diff": -6000.0, "exp_diff": -3000.0 }
        }"#;
        let response: DecideObjectiveResponse =
            serde_json::from_str(&decide_objective_json(request)).unwrap();
        assert_eq!(response.risk_tier, Some(RiskTier::Conservative));
        let decision = response.decision.unwrap();
        assert!(decision.win_prob_adjusted);
        assert!(decision.rationale.iter().any(|r| r.starts_with("WinProb: ")));
    }

    #[test]
    fn test_unknown_objective_is_generic_avoid() {
        let response: DecideObjectiveResponse =
            serde_json::from_str(&decide_objective_json(r#"{"objective":"rift_scuttler"}"#))
                .unwrap();
        assert!(response.success);
        assert_eq!(response.decision.unwrap().recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_invalid_request() {
        let response: DecideObjectiveResponse =
            serde_json::from_str(&decide_objective_json("not json")).unwrap();
        assert!(!response.success);
        assert!(response.error.unwrap().starts_with("Invalid request format"));
    }

    #[test]
    fn test_rank_priorities_default_limit() {
        let request = r#"{"snapshot": {"match_time": 1300.0, "gold_diff": 2000.0}}"#;
        let response: RankPrioritiesResponse =
            serde_json::from_str(&rank_priorities_json(request)).unwrap();
        assert!(response.success);
        assert_eq!(response.priorities.len(), DEFAULT_PRIORITY_LIMIT);
    }

    #[test]
    fn test_rank_priorities_missing_snapshot() {
        let response: RankPrioritiesResponse =
            serde_json::from_str(&rank_priorities_json(r#"{"limit": 3}"#)).unwrap();
        assert!(!response.success);
        assert!(response.priorities.is_empty());
    }

    #[test]
    fn test_analyze_opponents() {
        let request = r#"{"game":"LEAGUE","players":[
            {"id":"top","duration":1800.0,"cs":{"0-10":102.0},"deaths":{"0-10":1.0}},
            {"id":"mid","duration":1800.0,"cs":{"0-10":98.0},"deaths":{"0-10":0.0}}
        ]}"#;
        let response: AnalyzeOpponentsResponse =
            serde_json::from_str(&analyze_opponents_json(request)).unwrap();
        let analysis = response.analysis.unwrap();
        assert_eq!(analysis.team_counter.dominant_style, Some(Playstyle::EarlySnowball));
        assert_eq!(analysis.counter_script.headline_action, "Freeze T1 → Farm 1v2");
        assert_eq!(analysis.coach_call, "FARM SAFE → FREEZE → SCALE");
    }

    #[test]
    fn test_analyze_opponents_unknown_game() {
        let response: AnalyzeOpponentsResponse =
            serde_json::from_str(&analyze_opponents_json(r#"{"game":"DOTA","players":[]}"#))
                .unwrap();
        assert!(!response.success);
    }
}
