//! Valorant round statistics to play-style.

use crate::engine::config::ValorantThresholds;
use crate::models::{Game, PlaystyleProfile, Playstyle, ValorantPlayerTelemetry};

use super::counter_hints;

/// Per-round rates backing the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValorantRates {
    /// First deaths per round
    pub fdpr: f32,
    /// Assists per round
    pub apr: f32,
    /// First kills per round
    pub fkpr: f32,
    /// Clutches per pressure round
    pub clutch: f32,
    /// Share of kills made with utility
    pub util_share: f32,
}

impl ValorantRates {
    pub fn from_telemetry(t: &ValorantPlayerTelemetry) -> Self {
        let rounds = t.rounds.max(1) as f32;
        Self {
            fdpr: t.first_deaths as f32 / rounds,
            apr: t.assists as f32 / rounds,
            fkpr: t.first_kills as f32 / rounds,
            clutch: t.clutches as f32 / t.pressure_rounds.max(1) as f32,
            util_share: t.util_kills as f32 / t.total_kills.max(1) as f32,
        }
    }
}

/// First matching branch wins: space taker, utility entry, rush entry,
/// aggressive push, anchor.
pub fn classify(t: &ValorantPlayerTelemetry, th: &ValorantThresholds) -> PlaystyleProfile {
    let r = ValorantRates::from_telemetry(t);

    let (primary, secondary, confidence, key_metrics) = if r.fdpr > th.space_taker_fdpr {
        (Playstyle::SpaceTaker, Playstyle::AggressivePush, th.space_taker_confidence, vec![r.fdpr, r.apr])
    } else if r.util_share > th.utility_share {
        (Playstyle::UtilityEntry, Playstyle::Anchor, th.utility_confidence, vec![r.util_share, r.apr])
    } else if r.fkpr > th.rush_fkpr {
        (Playstyle::RushEntry, Playstyle::AggressivePush, th.rush_confidence, vec![r.fdpr, r.fkpr])
    } else if r.apr > th.aggressive_apr {
        (Playstyle::AggressivePush, Playstyle::RushEntry, th.aggressive_confidence, vec![r.apr, r.fkpr])
    } else {
        (Playstyle::Anchor, Playstyle::Lurk, th.anchor_confidence, vec![r.apr])
    };

    PlaystyleProfile {
        subject_id: t.id.clone(),
        game: Game::Valorant,
        primary_style: primary,
        secondary_style: Some(secondary),
        confidence,
        key_metrics,
        counter_hints: counter_hints(primary).iter().map(|h| h.to_string()).collect(),
    }
}
