//! Placeholder frequency encodings.
//!
//! A real model would frequency-encode the categorical inputs from its
//! training set. No trained model exists here, so these are fixed lookup
//! tables with constant fallbacks for unknown names. They are shown in
//! the UI as the model-input vector and are not learned parameters.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::predictor::{MatchFeatures, Venue};

/// Appearances over a full Premier League season, used for any opponent
/// the table knows about.
const KNOWN_OPPONENT_FREQ: f64 = 38.0;
pub const DEFAULT_OPPONENT_FREQ: f64 = 20.0;
pub const DEFAULT_FORMATION_FREQ: f64 = 50.0;
pub const NAMED_CAPTAIN_FREQ: f64 = 15.0;
pub const UNNAMED_CAPTAIN_FREQ: f64 = 5.0;
pub const NAMED_TEAM_FREQ: f64 = 38.0;
pub const UNNAMED_TEAM_FREQ: f64 = 20.0;

static OPPONENT_FREQ: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        "Liverpool",
        "Manchester City",
        "Arsenal",
        "Chelsea",
        "Tottenham",
        "Manchester United",
        "Newcastle",
    ]
    .into_iter()
    .map(|name| (name, KNOWN_OPPONENT_FREQ))
    .collect()
});

static FORMATION_FREQ: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("4-3-3", 150.0),
        ("4-4-2", 120.0),
        ("3-5-2", 80.0),
        ("4-2-3-1", 100.0),
        ("3-4-3", 90.0),
        ("5-3-2", 60.0),
    ])
});

pub fn opponent_frequency(name: &str) -> f64 {
    OPPONENT_FREQ
        .get(name.trim())
        .copied()
        .unwrap_or(DEFAULT_OPPONENT_FREQ)
}

pub fn captain_frequency(name: &str) -> f64 {
    if name.trim().is_empty() {
        UNNAMED_CAPTAIN_FREQ
    } else {
        NAMED_CAPTAIN_FREQ
    }
}

pub fn formation_frequency(formation: &str) -> f64 {
    FORMATION_FREQ
        .get(formation.trim())
        .copied()
        .unwrap_or(DEFAULT_FORMATION_FREQ)
}

pub fn team_frequency(name: &str) -> f64 {
    if name.trim().is_empty() {
        UNNAMED_TEAM_FREQ
    } else {
        NAMED_TEAM_FREQ
    }
}

/// The feature layout the absent model would consume, in training order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub opponent_freq: f64,
    pub venue_home: u8,
    pub xg: f64,
    pub xga: f64,
    pub captain_freq: f64,
    pub formation_freq: f64,
    pub team_freq: f64,
}

pub fn encode(features: &MatchFeatures) -> FeatureVector {
    FeatureVector {
        opponent_freq: opponent_frequency(&features.opponent),
        venue_home: match features.venue {
            Venue::Home => 1,
            Venue::Away => 0,
        },
        xg: features.xg,
        xga: features.xga,
        captain_freq: captain_frequency(&features.captain),
        formation_freq: formation_frequency(&features.formation),
        team_freq: team_frequency(&features.team),
    }
}
