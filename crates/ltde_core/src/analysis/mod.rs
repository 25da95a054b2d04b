//! # Analysis Module
//!
//! Opponent modelling between and during rounds.
//!
//! ## Submodules
//!
//! - `playstyle` - per-player classifiers and the team roll-up
//! - `counter_scripts` - authored counter-plays per enemy style
//! - `tracker` - latest profile per tracked opponent

pub mod counter_scripts;
pub mod playstyle;
pub mod tracker;

pub use playstyle::{coach_call, summarize_team, worst_case_action, PlaystyleClassifier};
pub use tracker::{LiveTracker, TrackedProfile};
