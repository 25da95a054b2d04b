//! Scripted counter-plays keyed by (game, enemy play-style).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{EngineError, Result};
use crate::models::{CounterScript, Game, Playstyle};

struct Entry {
    game: Game,
    style: Playstyle,
    timing: &'static str,
    headline: &'static str,
    composition: &'static str,
    steps: [&'static str; 4],
    success_rate: Option<f32>,
    outcome: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        game: Game::Valorant,
        style: Playstyle::RushEntry,
        timing: "0:32",
        headline: "5v3 A → B plant",
        composition: "Cypher+Jett",
        steps: [
            "Stack A 5v3 (2 pixel + 3 ready)",
            "Enemy entry → IMMEDIATE B rotate",
            "2 flashes + 1 molly B default",
            "Plant B link (0:52) → Force retake",
        ],
        success_rate: Some(0.68),
        outcome: None,
    },
    Entry {
        game: Game::Valorant,
        style: Playstyle::AggressivePush,
        timing: "0:47",
        headline: "Mid flank collapse",
        composition: "Reyna+Raze",
        steps: [
            "2v2 A default hold (bait)",
            "Enemy deep → Sova recon mid",
            "2x Duelist mid flank (0:55)",
            "Cut A ramp → Trap enemy",
        ],
        success_rate: Some(0.62),
        outcome: None,
    },
    Entry {
        game: Game::Valorant,
        style: Playstyle::Lurk,
        timing: "1:05",
        headline: "Fake A → Heaven collapse",
        composition: "Killjoy+Fade",
        steps: [
            "Fake A util (0:40) → Full B stack",
            "Sova recon heaven → Cypher cage",
            "3v1 heaven collapse (1:05)",
            "Entry B while lurker dead",
        ],
        success_rate: Some(0.71),
        outcome: None,
    },
    Entry {
        game: Game::Valorant,
        style: Playstyle::UtilityEntry,
        timing: "1:25",
        headline: "Post-plant 4v3 retake",
        composition: "Chamber+Skye",
        steps: [
            "1 bait per site (no trades)",
            "Wait 3s post-util → Reposition",
            "Plant anyway → Force retake fight",
            "4v3 post-plant → Utility advantage",
        ],
        success_rate: Some(0.65),
        outcome: None,
    },
    Entry {
        game: Game::Valorant,
        style: Playstyle::Anchor,
        timing: "0:35",
        headline: "Fake B → A speed plant",
        composition: "Omen+Viper",
        steps: [
            "0:35 B fake util → Full A rotate",
            "Entry util A (0:48)",
            "Plant default (0:58) → Collapse",
            "Force anchor retake 3v2",
        ],
        success_rate: Some(0.59),
        outcome: None,
    },
    Entry {
        game: Game::Valorant,
        style: Playstyle::SpaceTaker,
        timing: "Immediate",
        headline: "3-man collapse → Execute",
        composition: "Sova+Brim",
        steps: [
            "Identify space position (minimap)",
            "3 players collapse (molotovs)",
            "Entry 2v4 → Plant fast",
            "Space taker dead → Numbers even",
        ],
        success_rate: Some(0.63),
        outcome: None,
    },
    Entry {
        game: Game::League,
        style: Playstyle::EarlySnowball,
        timing: "3:45",
        headline: "Freeze T1 → Farm 1v2",
        composition: "Aatrox+KSante",
        steps: [
            "Ward tri-bush → /mute all",
            "Freeze wave T1 (7 CS ahead)",
            "Farm sidelane → Call jungler top",
            "Steraks spike → Duel 1v1",
        ],
        success_rate: None,
        outcome: Some("+800g by 12min"),
    },
    Entry {
        game: Game::League,
        style: Playstyle::Scaler,
        timing: "8:00",
        headline: "Herald → T1 bot crash",
        composition: "Sylas+Qiyana",
        steps: [
            "Ping jungler Herald path",
            "8:00 Herald → Bot T1 crash",
            "Kassadin level 11 → Still weaker",
            "Force T2 before scaling spike",
        ],
        success_rate: None,
        outcome: Some("Enemy T1 down"),
    },
    Entry {
        game: Game::League,
        style: Playstyle::SplitPusher,
        timing: "Late Game",
        headline: "TP mid → Bot 4v3",
        composition: "Shen+Ornn",
        steps: [
            "Ward enemy jungle → Track split",
            "Fiora T2 → TP mid 4v4",
            "Bot T1 crash → 4v3 drake",
            "Fiora 1v1 vs turret → Lose race",
        ],
        success_rate: None,
        outcome: Some("Drake soul point"),
    },
    Entry {
        game: Game::League,
        style: Playstyle::Teamfight,
        timing: "14:30",
        headline: "Vision trap → Baron steal",
        composition: "Pyke+Lee Sin",
        steps: [
            "Deep wards enemy jungle",
            "Flank pick → 4v4 Baron setup",
            "Enemy commits teamfight → Baron buff",
            "Split 4v4 → Enemy base race lost",
        ],
        success_rate: None,
        outcome: Some("+4k Baron"),
    },
    Entry {
        game: Game::League,
        style: Playstyle::Poke,
        timing: "Immediate",
        headline: "Flash engage → Ace",
        composition: "Malph+Nautilus",
        steps: [
            "Bait poke range → Flash all-in",
            "3-man engage combo → Ace",
            "Clean drake/baron uncontested",
            "Poke comp no engage → Snowball",
        ],
        success_rate: Some(0.78),
        outcome: None,
    },
    Entry {
        game: Game::League,
        style: Playstyle::PickComposition,
        timing: "Immediate",
        headline: "Vision choke → Group 5v5",
        composition: "Bard+Yuumi",
        steps: [
            "Oracle + sweep river",
            "Group mid → Vision advantage",
            "Pick comp no vision → 5v5 fights",
            "Force even fights → Win macro",
        ],
        success_rate: None,
        outcome: Some("Vision Score +12"),
    },
];

static COUNTER_SCRIPTS: Lazy<HashMap<(Game, Playstyle), CounterScript>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|e| {
            let script = CounterScript {
                timing: e.timing.to_string(),
                headline_action: e.headline.to_string(),
                composition: e.composition.to_string(),
                execution_steps: e.steps.iter().map(|s| s.to_string()).collect(),
                historical_success_rate: e.success_rate,
                expected_outcome: e.outcome.map(str::to_string),
            };
            ((e.game, e.style), script)
        })
        .collect()
});

static FALLBACK: Lazy<CounterScript> = Lazy::new(|| CounterScript {
    timing: "Immediate".to_string(),
    headline_action: "Default counter".to_string(),
    composition: "Flex picks".to_string(),
    execution_steps: vec![
        "Identify enemy commitment".to_string(),
        "Coordinate with team".to_string(),
        "Execute standard counter".to_string(),
    ],
    historical_success_rate: None,
    expected_outcome: None,
});

/// Generic script used when no authored one exists.
pub fn fallback() -> CounterScript {
    FALLBACK.clone()
}

/// Strict lookup; a pair without an authored script is an error.
pub fn try_lookup(game: Game, style: Playstyle) -> Result<&'static CounterScript> {
    COUNTER_SCRIPTS
        .get(&(game, style))
        .ok_or_else(|| EngineError::unknown_key("counter script", &format!("{game}/{style}")))
}

/// Never fails; missing pairs get [`fallback`].
pub fn lookup(game: Game, style: Playstyle) -> CounterScript {
    match try_lookup(game, style) {
        Ok(script) => script.clone(),
        Err(err) => {
            tracing::warn!(%err, "using default counter script");
            fallback()
        }
    }
}

/// String-keyed variant of [`lookup`] for external callers.
pub fn lookup_str(game: &str, style: &str) -> CounterScript {
    match (game.parse::<Game>(), style.parse::<Playstyle>()) {
        (Ok(game), Ok(style)) => lookup(game, style),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(%err, "using default counter script");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_style_has_a_script_for_its_game() {
        for style in Playstyle::iter() {
            let script = try_lookup(style.game(), style).unwrap();
            assert_eq!(script.execution_steps.len(), 4);
        }
    }

    #[test]
    fn test_rush_script() {
        let script = lookup(Game::Valorant, Playstyle::RushEntry);
        assert_eq!(script.timing, "0:32");
        assert_eq!(script.composition, "Cypher+Jett");
        assert_eq!(script.historical_success_rate, Some(0.68));
    }

    #[test]
    fn test_outcome_instead_of_rate() {
        let script = lookup(Game::League, Playstyle::Scaler);
        assert_eq!(script.historical_success_rate, None);
        assert_eq!(script.expected_outcome.as_deref(), Some("Enemy T1 down"));
    }

    #[test]
    fn test_cross_game_pair_is_strict_error() {
        let err = try_lookup(Game::Valorant, Playstyle::Scaler).unwrap_err();
        assert!(matches!(err, EngineError::UnknownKey { kind: "counter script", .. }));
        assert_eq!(lookup(Game::Valorant, Playstyle::Scaler), fallback());
    }

    #[test]
    fn test_string_keys() {
        assert_eq!(lookup_str("VALORANT", "rush_wq").timing, "0:32");
        assert_eq!(lookup_str("lol", "pick_comp").headline_action, "Vision choke → Group 5v5");
        let unknown = lookup_str("dota", "rush_entry");
        assert_eq!(unknown.headline_action, "Default counter");
        assert_eq!(lookup_str("league", "jungle_diff"), fallback());
    }
}
