//! Recorded match timelines served as telemetry.
//!
//! ```json
//! {
//!   "side": "blue",
//!   "matches": {
//!     "m1": [
//!       { "timestamp": 1000.0,
//!         "resource": { "gold_diff": 1500.0, "exp_diff": 800.0 },
//!         "proximity": { "BARON": { "ally_count_near": 4, "enemy_count_near": 3 } } }
//!     ]
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    AbilityState, AdvancementState, ProximityCounts, ResourceState, TelemetryQuery,
    TelemetrySource, VisionState,
};
use crate::error::{EngineError, Result};
use crate::models::{LiveGameSnapshot, ObjectiveKind, Side};

/// One recorded moment of a match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureFrame {
    pub timestamp: f32,
    pub resource: ResourceState,
    pub advancement: AdvancementState,
    /// Per objective; missing objectives read as nobody near
    pub proximity: BTreeMap<ObjectiveKind, ProximityCounts>,
    pub vision: VisionState,
    pub abilities: AbilityState,
    pub snapshot: LiveGameSnapshot,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct FixtureFile {
    side: Side,
    matches: HashMap<String, Vec<FixtureFrame>>,
}

/// Serves the latest recorded frame at or before the queried timestamp.
#[derive(Debug, Clone, Default)]
pub struct FixtureTelemetry {
    side: Side,
    matches: HashMap<String, Vec<FixtureFrame>>,
}

impl FixtureTelemetry {
    pub fn new(side: Side) -> Self {
        Self { side, matches: HashMap::new() }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: FixtureFile = serde_json::from_str(content)?;
        let mut fixture = Self::new(file.side);
        for (match_id, frames) in file.matches {
            fixture.insert_match(match_id, frames);
        }
        Ok(fixture)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("failed to read fixture '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    /// Replaces the timeline of `match_id`. Frames are kept sorted by time.
    pub fn insert_match(&mut self, match_id: impl Into<String>, mut frames: Vec<FixtureFrame>) {
        frames.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        self.matches.insert(match_id.into(), frames);
    }

    pub fn match_ids(&self) -> impl Iterator<Item = &str> {
        self.matches.keys().map(String::as_str)
    }

    fn frame(&self, query: &TelemetryQuery) -> Result<&FixtureFrame> {
        if query.side != self.side {
            return Err(EngineError::data_unavailable(
                &query.match_id,
                query.timestamp,
                format!("fixture recorded for {:?} side", self.side),
            ));
        }
        let frames = self.matches.get(&query.match_id).ok_or_else(|| {
            EngineError::data_unavailable(&query.match_id, query.timestamp, "unknown match")
        })?;
        frames
            .iter()
            .rev()
            .find(|frame| frame.timestamp <= query.timestamp)
            .ok_or_else(|| {
                EngineError::data_unavailable(
                    &query.match_id,
                    query.timestamp,
                    "no frame at or before timestamp",
                )
            })
    }
}

#[async_trait]
impl TelemetrySource for FixtureTelemetry {
    async fn resource_state(&self, query: &TelemetryQuery) -> Result<ResourceState> {
        Ok(self.frame(query)?.resource)
    }

    async fn advancement_state(&self, query: &TelemetryQuery) -> Result<AdvancementState> {
        Ok(self.frame(query)?.advancement)
    }

    async fn proximity(&self, query: &TelemetryQuery) -> Result<ProximityCounts> {
        let frame = self.frame(query)?;
        Ok(frame.proximity.get(&query.objective).copied().unwrap_or_default())
    }

    async fn vision_state(&self, query: &TelemetryQuery) -> Result<VisionState> {
        Ok(self.frame(query)?.vision)
    }

    async fn ability_state(&self, query: &TelemetryQuery) -> Result<AbilityState> {
        Ok(self.frame(query)?.abilities.clone())
    }

    async fn live_snapshot(&self, query: &TelemetryQuery) -> Result<LiveGameSnapshot> {
        let frame = self.frame(query)?;
        let mut snapshot = frame.snapshot.clone();
        snapshot.match_time = query.timestamp;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMELINE: &str = r#"{
        "side": "blue",
        "matches": {
            "m1": [
                { "timestamp": 1200.0, "resource": { "gold_diff": 2500.0 } },
                { "timestamp": 600.0, "resource": { "gold_diff": 500.0 },
                  "proximity": { "BARON": { "ally_count_near": 4, "enemy_count_near": 3 } } }
            ]
        }
    }"#;

    fn query(match_id: &str, timestamp: f32) -> TelemetryQuery {
        TelemetryQuery::new(match_id, timestamp, Side::Blue, ObjectiveKind::Baron)
    }

    #[tokio::test]
    async fn test_latest_frame_at_or_before() {
        let fixture = FixtureTelemetry::from_json_str(TIMELINE).unwrap();
        let early = fixture.resource_state(&query("m1", 900.0)).await.unwrap();
        assert_eq!(early.gold_diff, 500.0);
        let late = fixture.resource_state(&query("m1", 1200.0)).await.unwrap();
        assert_eq!(late.gold_diff, 2500.0);
    }

    #[tokio::test]
    async fn test_before_first_frame_is_unavailable() {
        let fixture = FixtureTelemetry::from_json_str(TIMELINE).unwrap();
        let err = fixture.resource_state(&query("m1", 10.0)).await.unwrap_err();
        assert!(matches!(err, EngineError::DataUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_unknown_match_is_unavailable() {
        let fixture = FixtureTelemetry::from_json_str(TIMELINE).unwrap();
        let err = fixture.vision_state(&query("nope", 900.0)).await.unwrap_err();
        assert!(err.to_string().contains("unknown match"));
    }

    #[tokio::test]
    async fn test_proximity_defaults_for_unrecorded_objective() {
        let fixture = FixtureTelemetry::from_json_str(TIMELINE).unwrap();
        let baron = fixture.proximity(&query("m1", 700.0)).await.unwrap();
        assert_eq!(baron.ally_count_near, 4);
        let mut dragon_query = query("m1", 700.0);
        dragon_query.objective = ObjectiveKind::Dragon;
        assert_eq!(fixture.proximity(&dragon_query).await.unwrap(), ProximityCounts::default());
    }

    #[tokio::test]
    async fn test_other_side_is_unavailable() {
        let fixture = FixtureTelemetry::from_json_str(TIMELINE).unwrap();
        let mut red = query("m1", 900.0);
        red.side = Side::Red;
        assert!(fixture.ability_state(&red).await.is_err());
    }

    #[test]
    fn test_malformed_fixture() {
        let err = FixtureTelemetry::from_json_str("{\"matches\": 3}").unwrap_err();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
