//! Live feature extraction
//!
//! Five independent telemetry sub-queries are issued together and joined;
//! the first failure aborts the whole extraction. No partial records.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::models::{
    FeatureRecord, LiveGameSnapshot, ObjectiveContext, ObjectiveKind, Side, TelemetrySnapshot,
};
use crate::telemetry::{TelemetryQuery, TelemetrySource};

#[derive(Clone)]
pub struct FeatureExtractor {
    source: Arc<dyn TelemetrySource>,
    side: Side,
    timeout: Duration,
}

impl std::fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("side", &self.side)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl FeatureExtractor {
    pub fn new(source: Arc<dyn TelemetrySource>, side: Side, timeout: Duration) -> Self {
        Self { source, side, timeout }
    }

    pub fn source(&self) -> &Arc<dyn TelemetrySource> {
        &self.source
    }

    pub fn query(&self, match_id: &str, timestamp: f32, objective: ObjectiveKind) -> TelemetryQuery {
        TelemetryQuery::new(match_id, timestamp, self.side, objective)
    }

    /// Feature record for the default focus objective (Baron).
    pub async fn extract(&self, match_id: &str, timestamp: f32) -> Result<FeatureRecord> {
        Ok(self.snapshot(match_id, timestamp, ObjectiveKind::Baron).await?.features)
    }

    /// Features plus objective-side context, proximity and vision measured
    /// around `objective`.
    pub async fn snapshot(
        &self,
        match_id: &str,
        timestamp: f32,
        objective: ObjectiveKind,
    ) -> Result<TelemetrySnapshot> {
        let query = self.query(match_id, timestamp, objective);
        let source = self.source.as_ref();

        let fan_out = async {
            tokio::try_join!(
                source.resource_state(&query),
                source.advancement_state(&query),
                source.proximity(&query),
                source.vision_state(&query),
                source.ability_state(&query),
            )
        };

        let (resource, advancement, proximity, vision, abilities) =
            match tokio::time::timeout(self.timeout, fan_out).await {
                Ok(joined) => joined.map_err(|err| {
                    tracing::warn!(match_id, timestamp, %err, "feature extraction failed");
                    err
                })?,
                Err(_) => {
                    tracing::warn!(
                        match_id,
                        timestamp,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "feature extraction timed out"
                    );
                    return Err(EngineError::data_unavailable(match_id, timestamp, "timed out"));
                }
            };

        let features = FeatureRecord {
            gold_diff: resource.gold_diff,
            exp_diff: resource.exp_diff,
            ally_count_near: proximity.ally_count_near,
            enemy_count_near: proximity.enemy_count_near,
            vision_score_diff: vision.vision_score_diff,
            tower_count_diff: advancement.tower_count_diff,
            drake_count_diff: advancement.drake_count_diff,
            baron_owned: advancement.baron_owned,
            match_time_minutes: timestamp / 60.0,
            player_hp_pct: abilities.player_hp_pct,
            ultimates_up: abilities.ultimates_up,
            tp_available: abilities.tp_available,
            smite_ready: abilities.smite_ready,
            lane_priority_index: advancement.lane_priority_index,
            last_teamfight_gold_delta: resource.last_teamfight_gold_delta,
        };
        let context = ObjectiveContext {
            friendly_wards_near: vision.friendly_wards_near,
            enemy_wards_near: vision.enemy_wards_near,
            enemy_ultimates_up: abilities.enemy_ultimates_up,
            enemy_smite_ready: abilities.enemy_smite_ready,
        };

        Ok(TelemetrySnapshot { match_id: match_id.to_string(), timestamp, features, context })
    }

    /// Board state for the priority ranker, under the same timeout.
    pub async fn live_snapshot(&self, match_id: &str, timestamp: f32) -> Result<LiveGameSnapshot> {
        let query = self.query(match_id, timestamp, ObjectiveKind::Baron);
        match tokio::time::timeout(self.timeout, self.source.live_snapshot(&query)).await {
            Ok(snapshot) => snapshot,
            Err(_) => {
                tracing::warn!(match_id, timestamp, "live snapshot timed out");
                Err(EngineError::data_unavailable(match_id, timestamp, "timed out"))
            }
        }
    }
}
