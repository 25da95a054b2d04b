//! Feature record to scorer input.

use crate::models::{ObjectiveKind, ObjectiveState, QueueMode, TelemetrySnapshot};

/// Lane priority above this counts as safe side-lane pressure.
const SIDELANE_PRESSURE_ABOVE: f32 = 0.5;

pub fn build_objective_state(
    snapshot: &TelemetrySnapshot,
    objective: ObjectiveKind,
    queue_mode: QueueMode,
) -> ObjectiveState {
    let features = &snapshot.features;
    let context = &snapshot.context;
    ObjectiveState {
        objective,
        queue_mode,
        time_to_spawn: 0.0,
        match_time: snapshot.timestamp,
        team_gold_diff: features.gold_diff,
        ally_count_near: features.ally_count_near,
        enemy_count_near: features.enemy_count_near,
        vision_in_pit: context.friendly_wards_near,
        enemy_vision_in_pit: context.enemy_wards_near,
        ultimates_up: features.ultimates_up,
        enemy_ultimates_up: context.enemy_ultimates_up,
        smite_ready: features.smite_ready,
        enemy_smite_ready: context.enemy_smite_ready,
        sidelane_pressure: features.lane_priority_index > SIDELANE_PRESSURE_ABOVE,
        player_hp_percent: features.avg_hp_percent(),
    }
}
