//! Play-style labels, per-player telemetry and counter-play records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Supported game titles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Game {
    /// First-person tactical shooter
    Valorant,
    /// Multiplayer online battle arena
    League,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Valorant => "VALORANT",
            Game::League => "LEAGUE",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "valorant" | "val" => Ok(Game::Valorant),
            "league" | "lol" | "league_of_legends" => Ok(Game::League),
            _ => Err(EngineError::unknown_key("game", s)),
        }
    }
}

/// Behavioural archetypes. The first six belong to Valorant, the rest to League.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    schemars::JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Playstyle {
    #[serde(alias = "rush_wq")]
    RushEntry,
    AggressivePush,
    #[serde(alias = "lurker")]
    Lurk,
    UtilityEntry,
    Anchor,
    SpaceTaker,

    EarlySnowball,
    Scaler,
    SplitPusher,
    Teamfight,
    Poke,
    #[serde(alias = "pick_comp")]
    PickComposition,
}

impl Playstyle {
    pub fn game(&self) -> Game {
        match self {
            Playstyle::RushEntry
            | Playstyle::AggressivePush
            | Playstyle::Lurk
            | Playstyle::UtilityEntry
            | Playstyle::Anchor
            | Playstyle::SpaceTaker => Game::Valorant,
            Playstyle::EarlySnowball
            | Playstyle::Scaler
            | Playstyle::SplitPusher
            | Playstyle::Teamfight
            | Playstyle::Poke
            | Playstyle::PickComposition => Game::League,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Playstyle::RushEntry => "rush_entry",
            Playstyle::AggressivePush => "aggressive_push",
            Playstyle::Lurk => "lurk",
            Playstyle::UtilityEntry => "utility_entry",
            Playstyle::Anchor => "anchor",
            Playstyle::SpaceTaker => "space_taker",
            Playstyle::EarlySnowball => "early_snowball",
            Playstyle::Scaler => "scaler",
            Playstyle::SplitPusher => "split_pusher",
            Playstyle::Teamfight => "teamfight",
            Playstyle::Poke => "poke",
            Playstyle::PickComposition => "pick_composition",
        }
    }
}

impl fmt::Display for Playstyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Playstyle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rush_entry" | "rush_wq" => Ok(Playstyle::RushEntry),
            "aggressive_push" => Ok(Playstyle::AggressivePush),
            "lurk" | "lurker" => Ok(Playstyle::Lurk),
            "utility_entry" => Ok(Playstyle::UtilityEntry),
            "anchor" => Ok(Playstyle::Anchor),
            "space_taker" => Ok(Playstyle::SpaceTaker),
            "early_snowball" => Ok(Playstyle::EarlySnowball),
            "scaler" => Ok(Playstyle::Scaler),
            "split_pusher" => Ok(Playstyle::SplitPusher),
            "teamfight" => Ok(Playstyle::Teamfight),
            "poke" => Ok(Playstyle::Poke),
            "pick_composition" | "pick_comp" => Ok(Playstyle::PickComposition),
            _ => Err(EngineError::unknown_key("playstyle", s)),
        }
    }
}

/// Aggregated round statistics for one Valorant player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValorantPlayerTelemetry {
    pub id: Option<String>,
    pub rounds: u32,
    pub first_deaths: u32,
    pub first_kills: u32,
    pub assists: u32,
    pub clutches: u32,
    /// Rounds tagged high pressure (1vX, post-plant)
    pub pressure_rounds: u32,
    pub util_kills: u32,
    pub total_kills: u32,
}

/// Aggregated game statistics for one League player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LolPlayerTelemetry {
    pub id: Option<String>,
    /// Game duration in seconds
    pub duration: f32,
    /// Creep score per time bucket, e.g. `"0-10"`, `"20-30"`, `"25+"`
    pub cs: BTreeMap<String, f32>,
    /// Deaths per time bucket
    pub deaths: BTreeMap<String, f32>,
    pub solo_kills: u32,
    pub total_kills: u32,
    pub tp_casts: u32,
    /// Total vision score
    pub vision: f32,
}

/// Roster telemetry for one opponent team, tagged with its game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", content = "players", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TelemetryBatch {
    Valorant(Vec<ValorantPlayerTelemetry>),
    League(Vec<LolPlayerTelemetry>),
}

impl TelemetryBatch {
    pub fn game(&self) -> Game {
        match self {
            TelemetryBatch::Valorant(_) => Game::Valorant,
            TelemetryBatch::League(_) => Game::League,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TelemetryBatch::Valorant(players) => players.len(),
            TelemetryBatch::League(players) => players.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PlaystyleProfile {
    pub subject_id: Option<String>,
    pub game: Game,
    pub primary_style: Playstyle,
    pub secondary_style: Option<Playstyle>,
    pub confidence: f32,
    /// Backing rates, in classifier order
    pub key_metrics: Vec<f32>,
    pub counter_hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TeamPlaystyleSummary {
    /// None for an empty roster
    pub dominant_style: Option<Playstyle>,
    pub counter_strategy: Vec<String>,
    /// Short comms calls, highest-confidence players first
    pub priority_targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CounterScript {
    pub timing: String,
    pub headline_action: String,
    /// Agents, champions or a role hint
    pub composition: String,
    pub execution_steps: Vec<String>,
    pub historical_success_rate: Option<f32>,
    /// Gold or objective outcome the script aims for
    pub expected_outcome: Option<String>,
}

/// Response of an opponent analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct OpponentAnalysis {
    pub game: Game,
    pub enemy_playstyles: Vec<PlaystyleProfile>,
    pub team_counter: TeamPlaystyleSummary,
    pub counter_script: CounterScript,
    /// Voice line for the in-game leader
    pub coach_call: String,
    /// Most punishing enemy action to prepare for
    pub worst_case_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_playstyle_key_round_trip() {
        for style in Playstyle::iter() {
            assert_eq!(style.key().parse::<Playstyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("rush_wq".parse::<Playstyle>().unwrap(), Playstyle::RushEntry);
        assert_eq!("lurker".parse::<Playstyle>().unwrap(), Playstyle::Lurk);
        let style: Playstyle = serde_json::from_str("\"pick_comp\"").unwrap();
        assert_eq!(style, Playstyle::PickComposition);
    }

    #[test]
    fn test_six_styles_per_game() {
        let valorant = Playstyle::iter().filter(|s| s.game() == Game::Valorant).count();
        let league = Playstyle::iter().filter(|s| s.game() == Game::League).count();
        assert_eq!(valorant, 6);
        assert_eq!(league, 6);
    }

    #[test]
    fn test_batch_is_tagged_by_game() {
        let json = r#"{"game":"VALORANT","players":[{"id":"p1","rounds":24,"first_kills":12}]}"#;
        let batch: TelemetryBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.game(), Game::Valorant);
        assert_eq!(batch.len(), 1);
    }
}
