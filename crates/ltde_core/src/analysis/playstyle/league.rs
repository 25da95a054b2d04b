//! League laning statistics to play-style.

use crate::engine::config::LeagueThresholds;
use crate::models::{Game, LolPlayerTelemetry, PlaystyleProfile, Playstyle};

use super::counter_hints;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeagueRates {
    /// CS per minute over the first ten minutes
    pub cs_early: f32,
    /// CS per minute late (25+ bucket, else 20-30)
    pub cs_late: f32,
    pub deaths_before_10: f32,
    /// Share of kills taken alone
    pub solo_share: f32,
    /// Teleports per early death
    pub tp_usage: f32,
    pub vision_per_min: f32,
}

impl LeagueRates {
    pub fn from_telemetry(t: &LolPlayerTelemetry) -> Self {
        let bucket = |map: &std::collections::BTreeMap<String, f32>, key: &str| {
            map.get(key).copied().filter(|v| v.is_finite())
        };
        let cs_early = bucket(&t.cs, "0-10").unwrap_or(0.0);
        let cs_late = bucket(&t.cs, "25+").or_else(|| bucket(&t.cs, "20-30")).unwrap_or(0.0);
        let deaths_before_10 = bucket(&t.deaths, "0-10").unwrap_or(0.0);

        let solo_share = if t.total_kills > 0 {
            t.solo_kills as f32 / t.total_kills as f32
        } else {
            0.0
        };
        let tp_usage = if deaths_before_10 > 0.0 {
            t.tp_casts as f32 / deaths_before_10.max(1.0)
        } else {
            0.0
        };
        let vision_per_min = if t.duration > 0.0 { t.vision / (t.duration / 60.0) } else { 0.0 };

        Self {
            cs_early: cs_early / 10.0,
            cs_late: cs_late / 10.0,
            deaths_before_10,
            solo_share,
            tp_usage,
            vision_per_min,
        }
    }
}

/// Early snowball, then scaler, otherwise split pusher.
pub fn classify(t: &LolPlayerTelemetry, th: &LeagueThresholds) -> PlaystyleProfile {
    let r = LeagueRates::from_telemetry(t);

    let (primary, secondary, confidence, key_metrics) =
        if r.cs_early > th.snowball_early_cs && r.deaths_before_10 < th.snowball_max_deaths {
            (
                Playstyle::EarlySnowball,
                Playstyle::Teamfight,
                th.snowball_confidence,
                vec![r.cs_early, r.deaths_before_10, r.solo_share],
            )
        } else if r.cs_late > th.scaler_late_cs && r.cs_early < th.scaler_max_early_cs {
            (Playstyle::Scaler, Playstyle::Teamfight, th.scaler_confidence, vec![r.cs_late, r.cs_early])
        } else {
            (
                Playstyle::SplitPusher,
                Playstyle::PickComposition,
                th.split_pusher_confidence,
                vec![r.tp_usage, r.vision_per_min],
            )
        };

    PlaystyleProfile {
        subject_id: t.id.clone(),
        game: Game::League,
        primary_style: primary,
        secondary_style: Some(secondary),
        confidence,
        key_metrics,
        counter_hints: counter_hints(primary).iter().map(|h| h.to_string()).collect(),
    }
}
