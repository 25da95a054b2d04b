//! Win-probability estimation
//!
//! The shipped estimator is a linear placeholder over the economy and map
//! features; attribution comes from a static importance prior. Both sit behind
//! traits so a trained model can replace either without touching callers.

use std::collections::BTreeMap;

use crate::engine::config::EstimatorConfig;
use crate::models::{finite_or_zero, FeatureRecord, WinProbabilityEstimate};

/// Produces relative feature importances for one estimate.
pub trait AttributionPrior: Send + Sync {
    fn attribution(&self, features: &FeatureRecord) -> BTreeMap<String, f32>;
}

/// Maps a feature record to a win probability.
pub trait WinProbabilityModel: Send + Sync {
    fn estimate(&self, features: &FeatureRecord) -> WinProbabilityEstimate;
}

/// Fixed importance table, independent of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPrior;

impl StaticPrior {
    pub const WEIGHTS: [(&'static str, f32); 6] = [
        ("gold_diff", 0.35),
        ("exp_diff", 0.25),
        ("tower_count_diff", 0.15),
        ("ally_count_near", 0.10),
        ("vision_score_diff", 0.10),
        ("others", 0.05),
    ];
}

impl AttributionPrior for StaticPrior {
    fn attribution(&self, _features: &FeatureRecord) -> BTreeMap<String, f32> {
        Self::WEIGHTS
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect()
    }
}

/// `p = base + gold/Ng + exp/Ne + towers·wt + baron·wb`, clamped.
#[derive(Debug, Clone)]
pub struct LinearWinModel<P = StaticPrior> {
    config: EstimatorConfig,
    prior: P,
}

impl LinearWinModel<StaticPrior> {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config, prior: StaticPrior }
    }
}

impl Default for LinearWinModel<StaticPrior> {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

impl<P: AttributionPrior> LinearWinModel<P> {
    pub fn with_prior(config: EstimatorConfig, prior: P) -> Self {
        Self { config, prior }
    }

    pub fn probability(&self, features: &FeatureRecord) -> f32 {
        let cfg = &self.config;
        let baron = if features.baron_owned { 1.0 } else { 0.0 };
        let raw = cfg.base_probability
            + finite_or_zero(features.gold_diff) / cfg.gold_normalizer
            + finite_or_zero(features.exp_diff) / cfg.exp_normalizer
            + features.tower_count_diff as f32 * cfg.tower_weight
            + baron * cfg.baron_weight;
        finite_or_zero(raw).clamp(cfg.min_probability, cfg.max_probability)
    }

    /// Grows with distance from a coin flip.
    pub fn confidence(&self, probability: f32) -> f32 {
        let cfg = &self.config;
        let spread = (probability - 0.5).abs() * 2.0;
        (cfg.confidence_floor + spread * cfg.confidence_span).min(cfg.confidence_cap)
    }
}

impl<P: AttributionPrior> WinProbabilityModel for LinearWinModel<P> {
    fn estimate(&self, features: &FeatureRecord) -> WinProbabilityEstimate {
        let probability = self.probability(features);
        WinProbabilityEstimate {
            probability,
            confidence: self.confidence(probability),
            attribution: self.prior.attribution(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_record() {
        let estimate = LinearWinModel::default().estimate(&FeatureRecord::default());
        assert!((estimate.probability - 0.5).abs() < 1e-6);
        assert!((estimate.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_linear_terms() {
        let features = FeatureRecord {
            gold_diff: 1500.0,
            exp_diff: 800.0,
            tower_count_diff: 1,
            ..Default::default()
        };
        // 0.5 + 0.1 + 0.08 + 0.05
        let p = LinearWinModel::default().probability(&features);
        assert!((p - 0.73).abs() < 1e-5);
    }

    #[test]
    fn test_clamped_and_capped() {
        let features = FeatureRecord {
            gold_diff: 40_000.0,
            baron_owned: true,
            ..Default::default()
        };
        let estimate = LinearWinModel::default().estimate(&features);
        assert!((estimate.probability - 0.98).abs() < 1e-6);
        assert!((estimate.confidence - 0.94).abs() < 1e-5);

        let losing = FeatureRecord { gold_diff: -40_000.0, ..Default::default() };
        assert!((LinearWinModel::default().probability(&losing) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_inputs_read_as_zero() {
        let features = FeatureRecord {
            gold_diff: f32::NAN,
            exp_diff: f32::INFINITY,
            ..Default::default()
        };
        let p = LinearWinModel::default().probability(&features);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_static_attribution() {
        let estimate = LinearWinModel::default().estimate(&FeatureRecord::default());
        assert_eq!(estimate.attribution.len(), 6);
        assert!((estimate.attribution["gold_diff"] - 0.35).abs() < 1e-6);
        assert!(estimate.attribution.values().all(|w| *w >= 0.0));
    }

    struct GoldOnly;

    impl AttributionPrior for GoldOnly {
        fn attribution(&self, _features: &FeatureRecord) -> BTreeMap<String, f32> {
            BTreeMap::from([("gold_diff".to_string(), 1.0)])
        }
    }

    #[test]
    fn test_prior_is_pluggable() {
        let model = LinearWinModel::with_prior(EstimatorConfig::default(), GoldOnly);
        let estimate = model.estimate(&FeatureRecord::default());
        assert_eq!(estimate.attribution.len(), 1);
    }
}
