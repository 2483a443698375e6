//! Heuristic outcome estimator.
//!
//! This stands in for the absent trained model: three base probabilities
//! nudged by a handful of rules and renormalized. Both the form path and
//! the JSON boundary call `estimate`; there is exactly one copy of the
//! heuristic.

const BASE_LOSS: f64 = 0.34;
const BASE_DRAW: f64 = 0.33;
const BASE_WIN: f64 = 0.33;

const HOME_WIN_BOOST: f64 = 0.15;
const AWAY_LOSS_BOOST: f64 = 0.10;

// An xG edge only counts once it clears this margin.
const XG_EDGE_MARGIN: f64 = 0.5;
const XG_EDGE_BOOST: f64 = 0.20;

const FORMATION_BOOST: f64 = 0.05;
const ATTACKING_FORMATIONS: [&str; 2] = ["4-3-3", "4-2-3-1"];
const DEFENSIVE_FORMATIONS: [&str; 2] = ["5-3-2", "3-5-2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn label(self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

/// Predicted class. The integer codes are part of the wire contract and
/// must not change: 0 = Loss, 1 = Draw, 2 = Win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 1,
            Outcome::Win => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Loss => "Loss",
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Outcome::Loss => "L",
            Outcome::Draw => "D",
            Outcome::Win => "W",
        }
    }
}

/// Raw match parameters as entered, one per prediction call. The name
/// fields only feed the placeholder frequency encoding; the heuristic
/// itself reads venue, the xG numbers, and the formation label.
#[derive(Debug, Clone)]
pub struct MatchFeatures {
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
    pub xg: f64,
    pub xga: f64,
    pub formation: String,
    pub captain: String,
}

/// Normalized 3-way distribution; the fields sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeDistribution {
    pub loss: f64,
    pub draw: f64,
    pub win: f64,
}

impl OutcomeDistribution {
    pub fn max(&self) -> f64 {
        self.loss.max(self.draw).max(self.win)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub outcome: Outcome,
    pub probs: OutcomeDistribution,
    /// Equals `probs.max()`.
    pub confidence: f64,
}

impl PredictionResult {
    pub fn confidence_percent(&self) -> u8 {
        percent(self.confidence)
    }
}

/// Pure and total: any finite inputs produce a normalized distribution.
/// Out-of-range xG values are taken as-is; rejecting malformed input is
/// the caller's job.
pub fn estimate(features: &MatchFeatures) -> PredictionResult {
    let mut loss = BASE_LOSS;
    let mut draw = BASE_DRAW;
    let mut win = BASE_WIN;

    match features.venue {
        Venue::Home => win += HOME_WIN_BOOST,
        Venue::Away => loss += AWAY_LOSS_BOOST,
    }

    if features.xg - features.xga > XG_EDGE_MARGIN {
        win += XG_EDGE_BOOST;
    } else if features.xga - features.xg > XG_EDGE_MARGIN {
        loss += XG_EDGE_BOOST;
    }

    let formation = features.formation.trim();
    if ATTACKING_FORMATIONS.contains(&formation) {
        win += FORMATION_BOOST;
    }
    if DEFENSIVE_FORMATIONS.contains(&formation) {
        draw += FORMATION_BOOST;
    }

    let sum = loss + draw + win;
    let probs = OutcomeDistribution {
        loss: loss / sum,
        draw: draw / sum,
        win: win / sum,
    };

    let confidence = probs.max();
    PredictionResult {
        outcome: predicted_outcome(&probs),
        probs,
        confidence,
    }
}

/// Class with the maximum probability. Exact ties resolve draw first,
/// then loss, then win.
pub fn predicted_outcome(probs: &OutcomeDistribution) -> Outcome {
    let max = probs.max();
    if probs.draw == max {
        Outcome::Draw
    } else if probs.loss == max {
        Outcome::Loss
    } else {
        Outcome::Win
    }
}

/// Integer percentage, rounded half away from zero. Per-outcome
/// percentages are rounded independently and may not sum to 100.
pub fn percent(p: f64) -> u8 {
    (p * 100.0).round() as u8
}
