//! Play-style decision-tree thresholds

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValorantThresholds {
    /// First deaths per round above this: space taker
    pub space_taker_fdpr: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub space_taker_confidence: f32,
    /// Utility share of kills above this: utility entry
    pub utility_share: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub utility_confidence: f32,
    /// First kills per round above this: rush entry
    pub rush_fkpr: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub rush_confidence: f32,
    /// Assists per round above this: aggressive push
    pub aggressive_apr: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub aggressive_confidence: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub anchor_confidence: f32,
}

impl Default for ValorantThresholds {
    fn default() -> Self {
        Self {
            space_taker_fdpr: 0.7,
            space_taker_confidence: 0.82,
            utility_share: 0.6,
            utility_confidence: 0.84,
            rush_fkpr: 0.45,
            rush_confidence: 0.87,
            aggressive_apr: 0.35,
            aggressive_confidence: 0.78,
            anchor_confidence: 0.72,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LeagueThresholds {
    /// CS per minute over 0-10 above this (with few deaths): early snowball
    pub snowball_early_cs: f32,
    pub snowball_max_deaths: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub snowball_confidence: f32,
    /// Late CS per minute above this with a weak early game: scaler
    pub scaler_late_cs: f32,
    pub scaler_max_early_cs: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub scaler_confidence: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub split_pusher_confidence: f32,
}

impl Default for LeagueThresholds {
    fn default() -> Self {
        Self {
            snowball_early_cs: 9.5,
            snowball_max_deaths: 1.5,
            snowball_confidence: 0.92,
            scaler_late_cs: 11.0,
            scaler_max_early_cs: 7.5,
            scaler_confidence: 0.88,
            split_pusher_confidence: 0.81,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClassifierConfig {
    #[validate]
    pub valorant: ValorantThresholds,
    #[validate]
    pub league: LeagueThresholds,
}
