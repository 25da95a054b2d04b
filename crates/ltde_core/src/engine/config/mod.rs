//! # Engine Configuration
//!
//! Every tuning constant of the decision pipeline lives here so balance
//! changes never touch scoring code.
//!
//! ## Presets
//! - [`EngineConfig::default`]: solo queue, standard thresholds
//! - [`EngineConfig::flex`]: group-queue weights
//! - [`EngineConfig::cautious`]: higher SECURE thresholds, earlier risk damping
//!
//! ## Loading
//! ```rust
//! use ltde_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml_str("telemetry:\n  fetch_timeout_ms: 500\n").unwrap();
//! assert_eq!(config.telemetry.fetch_timeout_ms, 500);
//! ```
//!
//! ## Environment Variables
//!
//! - `LTDE_CONFIG_PATH`: YAML file loaded by [`EngineConfig::from_env_or_default`]

mod classifier_config;
mod decision_config;
mod objective_config;
mod priority_config;
mod scoring_config;
mod telemetry_config;

pub use classifier_config::{ClassifierConfig, LeagueThresholds, ValorantThresholds};
pub use decision_config::{DecisionConfig, EstimatorConfig, IntegratorConfig};
pub use objective_config::{ObjectiveProfile, ObjectiveTable};
pub use priority_config::{PriorityConfig, StrategicWeights};
pub use scoring_config::{ScoringConfig, ScoringWeights};
pub use telemetry_config::TelemetryConfig;

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{EngineError, Result};
use crate::models::QueueMode;

pub const CONFIG_PATH_ENV: &str = "LTDE_CONFIG_PATH";

/// Full engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EngineConfig {
    /// Win-probability estimator and integrator
    #[validate]
    pub decision: DecisionConfig,
    /// Success-probability weights
    #[validate]
    pub scoring: ScoringConfig,
    /// Per-objective value profiles
    #[validate]
    pub objectives: ObjectiveTable,
    /// Priority ranker
    #[validate]
    pub priority: PriorityConfig,
    /// Play-style trees
    #[validate]
    pub classifier: ClassifierConfig,
    /// Telemetry fan-out
    #[validate]
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    /// Group queue (numbers and vision weigh more)
    pub fn flex() -> Self {
        let mut cfg = Self::default();
        cfg.telemetry.queue_mode = QueueMode::Flex;
        cfg
    }

    /// Demands more certainty before committing
    pub fn cautious() -> Self {
        let mut cfg = Self::default();
        cfg.objectives.dragon.threshold = 0.65;
        cfg.objectives.baron.threshold = 0.72;
        cfg.objectives.herald.threshold = 0.60;
        cfg.objectives.tower.threshold = 0.65;
        cfg.decision.integrator.aggressive_above = 0.70;
        cfg.decision.integrator.balanced_above = 0.50;
        cfg.priority.secure_feasibility = 0.8;
        cfg
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| EngineError::Config(format!("failed to parse config YAML: {e}")))?;
        config.check()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("failed to read config file '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| EngineError::Config(format!("failed to serialize config: {e}")))
    }

    /// Loads the file named by `LTDE_CONFIG_PATH`, or defaults when unset.
    pub fn from_env_or_default() -> Result<Self> {
        Self::from_env_var(CONFIG_PATH_ENV)
    }

    pub(crate) fn from_env_var(var: &str) -> Result<Self> {
        Self::from_path_setting(var, env::var(var).ok().as_deref())
    }

    /// `value` is the raw setting named `var`; unset or blank means defaults.
    fn from_path_setting(var: &str, value: Option<&str>) -> Result<Self> {
        let path = value.map(str::trim).unwrap_or_default();
        if path.is_empty() {
            return Ok(Self::default());
        }

        tracing::info!(path, "loading engine config from {var}");
        Self::from_yaml_file(path)
            .map_err(|e| EngineError::Config(format!("{var}='{path}': {e}")))
    }

    /// Field ranges plus the orderings a range check cannot express.
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| EngineError::Config(format!("invalid config: {e}")))?;

        let integrator = &self.decision.integrator;
        if integrator.balanced_above >= integrator.aggressive_above {
            return Err(EngineError::Config(
                "decision.integrator.balanced_above must be below aggressive_above".to_string(),
            ));
        }
        if integrator.min_confidence > integrator.max_confidence {
            return Err(EngineError::Config(
                "decision.integrator.min_confidence exceeds max_confidence".to_string(),
            ));
        }
        let priority = &self.priority;
        if priority.mid_phase_from >= priority.late_phase_from {
            return Err(EngineError::Config(
                "priority.mid_phase_from must be below late_phase_from".to_string(),
            ));
        }
        if let Some(gate) = self.objectives.baron.min_match_time {
            if (gate - priority.baron_after).abs() > f32::EPSILON {
                return Err(EngineError::Config(format!(
                    "priority.baron_after ({}) must equal objectives.baron.min_match_time ({gate})",
                    priority.baron_after
                )));
            }
        }
        if priority.contest_feasibility > priority.secure_feasibility {
            return Err(EngineError::Config(
                "priority.contest_feasibility exceeds secure_feasibility".to_string(),
            ));
        }
        Ok(())
    }
}

// ========== Tests ==========
