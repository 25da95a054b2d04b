//! # Play-style classification
//!
//! Per-game decision trees over aggregated player statistics, plus the team
//! roll-up used for opponent briefings.

pub mod league;
pub mod team;
pub mod valorant;

pub use league::LeagueRates;
pub use team::{coach_call, summarize_team, worst_case_action};
pub use valorant::ValorantRates;

use crate::engine::config::ClassifierConfig;
use crate::models::{PlaystyleProfile, Playstyle, TelemetryBatch};

#[derive(Debug, Clone, Default)]
pub struct PlaystyleClassifier {
    config: ClassifierConfig,
}

impl PlaystyleClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// One profile per player, in roster order.
    pub fn classify_batch(&self, batch: &TelemetryBatch) -> Vec<PlaystyleProfile> {
        match batch {
            TelemetryBatch::Valorant(players) => players
                .iter()
                .map(|p| valorant::classify(p, &self.config.valorant))
                .collect(),
            TelemetryBatch::League(players) => players
                .iter()
                .map(|p| league::classify(p, &self.config.league))
                .collect(),
        }
    }
}

/// Authored counter-play advice per style; empty where none is written.
pub fn counter_hints(style: Playstyle) -> &'static [&'static str] {
    match style {
        Playstyle::RushEntry => &[
            "Stack sites immediately (5v3)",
            "Aggressive default holds",
            "Bait over-rotations",
            "Force pistol rounds",
        ],
        Playstyle::AggressivePush => &[
            "Play deep angles",
            "Utility denial on entries",
            "Punish mid-round rotates",
            "Flank their flankers",
        ],
        Playstyle::Lurk => &[
            "Sound-only positioning",
            "Clear lurks before executes",
            "Mirror their lurk",
            "Play crossfires",
        ],
        Playstyle::UtilityEntry => &[
            "Bait utility first",
            "Retake focus",
            "Spread utility usage",
            "Play off timings",
        ],
        Playstyle::Anchor => &[
            "0:35 fake push → Full rotate",
            "Smoke their deep angles early",
            "1v1 duelists vs anchors",
        ],
        Playstyle::SpaceTaker => &[
            "3 players collapse space taker position",
            "Smoke their wide angles immediately",
            "Clear crossfires before execute",
        ],
        Playstyle::EarlySnowball => &[
            "Ward tri-bush at 4:30",
            "Farm under tower only",
            "Freeze T1 → Call jungler",
            "Respect level 2 all-ins",
        ],
        Playstyle::Scaler => &[
            "Trade HP for CS safely",
            "Track jungle pathing to avoid dives",
            "Stack wave to crash and reset",
            "Ping jungler for anti-dive wards",
        ],
        Playstyle::SplitPusher => &[
            "Deep ward flank TPs",
            "Keep wave near tower",
            "Call jungler to break freeze",
            "Don't chase, cross-map punish",
        ],
        Playstyle::Teamfight | Playstyle::Poke | Playstyle::PickComposition => &[],
    }
}
