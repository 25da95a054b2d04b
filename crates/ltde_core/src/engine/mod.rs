//! # Decision engine
//!
//! Pipeline stages, each usable on its own:
//!
//! 1. [`feature_extractor`]: telemetry fan-out into a [`crate::models::FeatureRecord`]
//! 2. [`win_probability`]: feature record to win probability and attribution
//! 3. [`state_builder`] + [`objective_scorer`]: per-objective SECURE / CONTEST / AVOID
//! 4. [`integrator`]: re-weights the objective call by win probability
//! 5. [`priority_ranker`]: ranks every objective on the board

pub mod config;
pub mod feature_extractor;
pub mod integrator;
pub mod objective_scorer;
pub mod priority_ranker;
pub mod state_builder;
pub mod win_probability;

#[cfg(test)]
mod property_tests;

pub use feature_extractor::FeatureExtractor;
pub use integrator::DecisionIntegrator;
pub use objective_scorer::ObjectiveScorer;
pub use priority_ranker::PriorityRanker;
pub use state_builder::build_objective_state;
pub use win_probability::{AttributionPrior, LinearWinModel, StaticPrior, WinProbabilityModel};
