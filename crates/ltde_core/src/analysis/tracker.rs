//! Running record of opponent profiles during a series.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{Game, PlaystyleProfile, TeamPlaystyleSummary};

use super::playstyle::summarize_team;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedProfile {
    pub profile: PlaystyleProfile,
    pub updated_at: DateTime<Utc>,
}

/// Latest profile per subject id. Later updates replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct LiveTracker {
    profiles: HashMap<String, TrackedProfile>,
}

impl LiveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `profile` under `subject_id`, stamped now.
    pub fn update(&mut self, subject_id: impl Into<String>, profile: PlaystyleProfile) {
        self.update_at(subject_id, profile, Utc::now());
    }

    pub fn update_at(
        &mut self,
        subject_id: impl Into<String>,
        profile: PlaystyleProfile,
        updated_at: DateTime<Utc>,
    ) {
        let subject_id = subject_id.into();
        tracing::debug!(subject = %subject_id, style = %profile.primary_style, "tracked profile updated");
        self.profiles.insert(subject_id, TrackedProfile { profile, updated_at });
    }

    /// Tracks every profile that carries a subject id; anonymous ones are skipped.
    pub fn track(&mut self, profiles: &[PlaystyleProfile]) -> usize {
        let now = Utc::now();
        let mut tracked = 0;
        for profile in profiles {
            if let Some(id) = &profile.subject_id {
                self.update_at(id.clone(), profile.clone(), now);
                tracked += 1;
            }
        }
        tracked
    }

    pub fn get(&self, subject_id: &str) -> Option<&TrackedProfile> {
        self.profiles.get(subject_id)
    }

    pub fn remove(&mut self, subject_id: &str) -> Option<TrackedProfile> {
        self.profiles.remove(subject_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Team summary over the listed subjects of `game`. Unknown ids are ignored.
    pub fn summarize(&self, game: Game, subject_ids: &[&str]) -> TeamPlaystyleSummary {
        let profiles: Vec<PlaystyleProfile> = subject_ids
            .iter()
            .filter_map(|id| self.profiles.get(*id))
            .filter(|tracked| tracked.profile.game == game)
            .map(|tracked| tracked.profile.clone())
            .collect();
        summarize_team(game, &profiles)
    }
}
