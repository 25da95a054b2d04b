//! Team-level roll-up of individual play-style profiles.

use crate::models::{Game, PlaystyleProfile, Playstyle, TeamPlaystyleSummary};

use super::counter_hints;

const PRIORITY_TARGETS: usize = 3;

/// Majority style; ties go to the higher summed confidence, then to the style
/// seen first.
pub fn dominant_style(profiles: &[PlaystyleProfile]) -> Option<Playstyle> {
    // (style, votes, confidence sum) in first-appearance order
    let mut tally: Vec<(Playstyle, usize, f32)> = Vec::new();
    for profile in profiles {
        match tally.iter_mut().find(|(style, _, _)| *style == profile.primary_style) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 += profile.confidence;
            }
            None => tally.push((profile.primary_style, 1, profile.confidence)),
        }
    }

    let mut best: Option<(Playstyle, usize, f32)> = None;
    for entry in tally {
        let better = match best {
            None => true,
            Some((_, votes, confidence)) => {
                entry.1 > votes || (entry.1 == votes && entry.2 > confidence)
            }
        };
        if better {
            best = Some(entry);
        }
    }
    best.map(|(style, _, _)| style)
}

fn default_counter(game: Game) -> [&'static str; 3] {
    match game {
        Game::Valorant => ["Default safe setups", "Trade-heavy fights", "Late round executes"],
        Game::League => ["Ward deep objectives", "Play for numbers advantage", "Avoid coin-flip fights"],
    }
}

fn target_call(style: Playstyle) -> &'static str {
    match style {
        Playstyle::RushEntry => "STACK NOW",
        Playstyle::UtilityEntry => "BAIT FLASH",
        Playstyle::Lurk => "CLEAR LURK",
        Playstyle::EarlySnowball => "GANK TOP",
        Playstyle::SplitPusher => "BREAK FREEZE",
        _ => "SAFE PLAN",
    }
}

pub fn summarize_team(game: Game, profiles: &[PlaystyleProfile]) -> TeamPlaystyleSummary {
    let dominant = dominant_style(profiles);

    let authored = dominant.map(counter_hints).unwrap_or_default();
    let counter_strategy: Vec<String> = if authored.is_empty() {
        default_counter(game).iter().map(|s| s.to_string()).collect()
    } else {
        authored.iter().map(|s| s.to_string()).collect()
    };

    let mut by_confidence: Vec<&PlaystyleProfile> = profiles.iter().collect();
    // stable: equal confidence keeps roster order
    by_confidence.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    let priority_targets = by_confidence
        .into_iter()
        .take(PRIORITY_TARGETS)
        .map(|p| target_call(p.primary_style).to_string())
        .collect();

    TeamPlaystyleSummary { dominant_style: dominant, counter_strategy, priority_targets }
}

/// Voice line for the in-game leader.
pub fn coach_call(dominant: Option<Playstyle>) -> &'static str {
    match dominant {
        Some(Playstyle::RushEntry) => "STACK A → FAKE B → COLLAPSE",
        Some(Playstyle::EarlySnowball) => "FARM SAFE → FREEZE → SCALE",
        _ => "TRADE SMART → CONTROL VISION",
    }
}

/// Most punishing enemy play to prepare for.
pub fn worst_case_action(dominant: Option<Playstyle>) -> &'static str {
    match dominant {
        Some(Playstyle::RushEntry) => "FAST_HIT",
        _ => "DEFAULT_HOLD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(style: Playstyle, confidence: f32) -> PlaystyleProfile {
        PlaystyleProfile {
            subject_id: None,
            game: style.game(),
            primary_style: style,
            secondary_style: None,
            confidence,
            key_metrics: vec![],
            counter_hints: vec![],
        }
    }

    #[test]
    fn test_majority_wins() {
        let profiles = [
            profile(Playstyle::Anchor, 0.72),
            profile(Playstyle::RushEntry, 0.87),
            profile(Playstyle::Anchor, 0.72),
        ];
        assert_eq!(dominant_style(&profiles), Some(Playstyle::Anchor));
    }

    #[test]
    fn test_tie_goes_to_confidence_then_first_seen() {
        let profiles = [profile(Playstyle::Anchor, 0.72), profile(Playstyle::RushEntry, 0.87)];
        assert_eq!(dominant_style(&profiles), Some(Playstyle::RushEntry));

        let even = [profile(Playstyle::Lurk, 0.8), profile(Playstyle::Anchor, 0.8)];
        assert_eq!(dominant_style(&even), Some(Playstyle::Lurk));
    }

    #[test]
    fn test_empty_roster() {
        let summary = summarize_team(Game::League, &[]);
        assert_eq!(summary.dominant_style, None);
        assert_eq!(summary.counter_strategy[0], "Ward deep objectives");
        assert!(summary.priority_targets.is_empty());
        assert_eq!(coach_call(None), "TRADE SMART → CONTROL VISION");
        assert_eq!(worst_case_action(None), "DEFAULT_HOLD");
    }

    #[test]
    fn test_rush_team_summary() {
        let profiles = [
            profile(Playstyle::RushEntry, 0.87),
            profile(Playstyle::UtilityEntry, 0.84),
            profile(Playstyle::RushEntry, 0.87),
            profile(Playstyle::Anchor, 0.72),
            profile(Playstyle::Lurk, 0.9),
        ];
        let summary = summarize_team(Game::Valorant, &profiles);
        assert_eq!(summary.dominant_style, Some(Playstyle::RushEntry));
        assert_eq!(summary.counter_strategy[0], "Stack sites immediately (5v3)");
        assert_eq!(summary.priority_targets, vec!["CLEAR LURK", "STACK NOW", "STACK NOW"]);
        assert_eq!(coach_call(summary.dominant_style), "STACK A → FAKE B → COLLAPSE");
        assert_eq!(worst_case_action(summary.dominant_style), "FAST_HIT");
    }

    #[test]
    fn test_unauthored_style_uses_game_default() {
        let summary = summarize_team(Game::League, &[profile(Playstyle::Poke, 0.7)]);
        assert_eq!(summary.counter_strategy.len(), 3);
        assert_eq!(summary.priority_targets, vec!["SAFE PLAN"]);
    }
}
