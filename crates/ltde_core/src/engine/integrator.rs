//! Win-probability-aware adjustment of scorer decisions
//!
//! Rules, in order:
//! 1. AGGRESSIVE tier escalates CONTEST to SECURE.
//! 2. CONSERVATIVE tier downgrades SECURE to CONTEST unless the gold lead
//!    covers the risk; very low probability also costs confidence.
//! 3. A near-won game with strongly positive EV forces SECURE.
//!
//! The adjustment always starts from the scorer's own recommendation and
//! confidence, so integrating twice equals integrating once.

use crate::engine::config::IntegratorConfig;
use crate::models::{
    finite_or_zero, ObjectiveDecision, Recommendation, RiskTier, WinProbabilityEstimate,
};

const WIN_PROB_PREFIX: &str = "WinProb: ";

#[derive(Debug, Clone, Default)]
pub struct DecisionIntegrator {
    config: IntegratorConfig,
}

impl DecisionIntegrator {
    pub fn new(config: IntegratorConfig) -> Self {
        Self { config }
    }

    pub fn risk_tier(&self, probability: f32) -> RiskTier {
        if probability > self.config.aggressive_above {
            RiskTier::Aggressive
        } else if probability > self.config.balanced_above {
            RiskTier::Balanced
        } else {
            RiskTier::Conservative
        }
    }

    pub fn integrate(
        &self,
        decision: &ObjectiveDecision,
        estimate: &WinProbabilityEstimate,
        gold_diff: f32,
    ) -> ObjectiveDecision {
        let cfg = &self.config;
        let p = estimate.probability;
        let base_recommendation = decision.base_recommendation.unwrap_or(decision.recommendation);
        let base_confidence = decision.base_confidence.unwrap_or(decision.confidence);

        let mut recommendation = base_recommendation;
        let mut adjust = 0.0;

        match (self.risk_tier(p), base_recommendation) {
            (RiskTier::Aggressive, Recommendation::Contest) => {
                recommendation = Recommendation::Secure;
                adjust = cfg.escalate_bonus;
            }
            (RiskTier::Conservative, Recommendation::Secure) => {
                if finite_or_zero(gold_diff) <= cfg.gold_lead_guard {
                    recommendation = Recommendation::Contest;
                }
                if p < cfg.low_probability {
                    adjust = -cfg.low_probability_penalty;
                }
            }
            _ => {}
        }

        if p > cfg.force_probability && decision.expected_value > cfg.force_expected_value {
            recommendation = Recommendation::Secure;
            adjust = cfg.force_bonus;
        }

        let mut rationale: Vec<String> = decision
            .rationale
            .iter()
            .filter(|line| !line.starts_with(WIN_PROB_PREFIX))
            .cloned()
            .collect();
        rationale.push(format!("{WIN_PROB_PREFIX}{:.0}%", p * 100.0));

        if recommendation != base_recommendation {
            tracing::debug!(
                objective = %decision.objective,
                from = %base_recommendation,
                to = %recommendation,
                p,
                "decision adjusted for win probability"
            );
        }

        ObjectiveDecision {
            recommendation,
            confidence: (base_confidence + adjust).clamp(cfg.min_confidence, cfg.max_confidence),
            rationale,
            win_prob_context: Some(p),
            model_confidence: Some(estimate.confidence),
            feature_impact: Some(estimate.attribution.clone()),
            win_prob_adjusted: true,
            base_recommendation: Some(base_recommendation),
            base_confidence: Some(base_confidence),
            ..decision.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectiveKind;

    fn base(recommendation: Recommendation, confidence: f32) -> ObjectiveDecision {
        ObjectiveDecision {
            confidence,
            expected_value: 0.05,
            success_probability: confidence,
            rationale: vec!["4v3 numerical advantage".to_string()],
            ..ObjectiveDecision::new(ObjectiveKind::Baron, recommendation, "Baron contest")
        }
    }

    fn estimate(probability: f32) -> WinProbabilityEstimate {
        WinProbabilityEstimate { probability, confidence: 0.8, ..Default::default() }
    }

    #[test]
    fn test_risk_tiers() {
        let integrator = DecisionIntegrator::default();
        assert_eq!(integrator.risk_tier(0.7), RiskTier::Aggressive);
        assert_eq!(integrator.risk_tier(0.65), RiskTier::Balanced);
        assert_eq!(integrator.risk_tier(0.5), RiskTier::Balanced);
        assert_eq!(integrator.risk_tier(0.45), RiskTier::Conservative);
    }

    #[test]
    fn test_aggressive_escalates_contest() {
        let out = DecisionIntegrator::default().integrate(&base(Recommendation::Contest, 0.6), &estimate(0.7), 0.0);
        assert_eq!(out.recommendation, Recommendation::Secure);
        assert!((out.confidence - 0.68).abs() < 1e-5);
        assert!(out.win_prob_adjusted);
        assert_eq!(out.base_recommendation, Some(Recommendation::Contest));
    }

    #[test]
    fn test_conservative_downgrades_secure() {
        let out = DecisionIntegrator::default().integrate(&base(Recommendation::Secure, 0.7), &estimate(0.35), 0.0);
        assert_eq!(out.recommendation, Recommendation::Contest);
        assert!((out.confidence - 0.58).abs() < 1e-5);
    }

    #[test]
    fn test_gold_lead_keeps_secure() {
        let out = DecisionIntegrator::default().integrate(&base(Recommendation::Secure, 0.7), &estimate(0.42), 2500.0);
        assert_eq!(out.recommendation, Recommendation::Secure);
        assert!((out.confidence - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_gold_is_no_lead() {
        let integrator = DecisionIntegrator::default();
        let secure = base(Recommendation::Secure, 0.7);
        let nan = integrator.integrate(&secure, &estimate(0.02), f32::NAN);
        let zero = integrator.integrate(&secure, &estimate(0.02), 0.0);
        assert_eq!(nan.recommendation, Recommendation::Contest);
        assert_eq!(nan.recommendation, zero.recommendation);
        let inf = integrator.integrate(&secure, &estimate(0.35), f32::INFINITY);
        assert_eq!(inf.recommendation, Recommendation::Contest);
    }

    #[test]
    fn test_forced_secure_window() {
        let mut decision = base(Recommendation::Avoid, 0.5);
        decision.expected_value = 0.6;
        let out = DecisionIntegrator::default().integrate(&decision, &estimate(0.8), 0.0);
        assert_eq!(out.recommendation, Recommendation::Secure);
        assert!((out.confidence - 0.65).abs() < 1e-5);
    }

    #[test]
    fn test_confidence_clamped() {
        let out = DecisionIntegrator::default().integrate(&base(Recommendation::Secure, 0.35), &estimate(0.2), 0.0);
        assert!((out.confidence - 0.3).abs() < 1e-6);
        let high = DecisionIntegrator::default().integrate(&base(Recommendation::Contest, 0.95), &estimate(0.9), 0.0);
        assert!((high.confidence - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_context_and_rationale() {
        let out = DecisionIntegrator::default().integrate(&base(Recommendation::Contest, 0.6), &estimate(0.734), 0.0);
        assert_eq!(out.rationale.last().map(String::as_str), Some("WinProb: 73%"));
        assert_eq!(out.win_prob_context, Some(0.734));
        assert_eq!(out.model_confidence, Some(0.8));
        assert!(out.feature_impact.is_some());
    }

    #[test]
    fn test_reapplication_is_idempotent() {
        let integrator = DecisionIntegrator::default();
        let once = integrator.integrate(&base(Recommendation::Contest, 0.6), &estimate(0.7), 0.0);
        let twice = integrator.integrate(&once, &estimate(0.7), 0.0);
        assert_eq!(once, twice);
        assert_eq!(twice.rationale.iter().filter(|r| r.starts_with("WinProb")).count(), 1);
    }
}
