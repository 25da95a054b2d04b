//! # Public API
//!
//! - `coach` - async façade over the full pipeline
//! - `coach_json` - string-in, string-out entry points for embedding hosts
//! - `schema` - JSON schemas of the output records

pub mod coach;
pub mod coach_json;
pub mod schema;

pub use coach::{CoachEngine, DEFAULT_PRIORITY_LIMIT};
pub use coach_json::{analyze_opponents_json, decide_objective_json, rank_priorities_json};
pub use schema::{output_schema, SCHEMA_NAMES};
