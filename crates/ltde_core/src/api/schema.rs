//! JSON schemas of the output records.

use schemars::schema::RootSchema;

use crate::error::{EngineError, Result};
use crate::models::{
    CoachRecommendation, CounterScript, ObjectiveDecision, ObjectivePriority, OpponentAnalysis,
    PlaystyleProfile,
};

/// Record names accepted by [`output_schema`].
pub const SCHEMA_NAMES: [&str; 6] =
    ["recommendation", "decision", "priority", "opponents", "playstyle", "counter_script"];

pub fn output_schema(name: &str) -> Result<RootSchema> {
    let schema = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "recommendation" => schemars::schema_for!(CoachRecommendation),
        "decision" => schemars::schema_for!(ObjectiveDecision),
        "priority" => schemars::schema_for!(Vec<ObjectivePriority>),
        "opponents" => schemars::schema_for!(OpponentAnalysis),
        "playstyle" => schemars::schema_for!(PlaystyleProfile),
        "counter_script" => schemars::schema_for!(CounterScript),
        _ => return Err(EngineError::unknown_key("schema", name)),
    };
    Ok(schema)
}
