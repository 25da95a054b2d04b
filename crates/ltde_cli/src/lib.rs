//! ltde command-line support
//!
//! Config and telemetry wiring shared by the `ltde` binary, plus roster
//! parsing for opponent analysis.

pub mod roster;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use ltde_core::{EngineConfig, FixtureTelemetry, SimulatedTelemetry, TelemetrySource};

pub use roster::{load_roster, parse_csv_roster, ParseStats};

/// Explicit `--config` file, else `LTDE_CONFIG_PATH`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => EngineConfig::from_env_or_default().context("Failed to load config from environment"),
    }
}

/// Fixture timeline when a file is given, otherwise the seeded simulator.
pub fn telemetry_source(fixture: Option<&Path>, seed: u64) -> Result<Arc<dyn TelemetrySource>> {
    match fixture {
        Some(path) => {
            let fixture = FixtureTelemetry::from_json_file(path)
                .with_context(|| format!("Failed to load fixture: {}", path.display()))?;
            tracing::info!(path = %path.display(), matches = fixture.match_ids().count(), "fixture telemetry");
            Ok(Arc::new(fixture))
        }
        None => {
            tracing::info!(seed, "simulated telemetry");
            Ok(Arc::new(SimulatedTelemetry::new(seed)))
        }
    }
}
