//! Static sample of recent predictions.
//!
//! Demo data only; there is no ingestion of real historical matches.

use crate::predictor::{Outcome, Venue, percent};

#[derive(Debug, Clone, Copy)]
pub struct HistoryRow {
    pub date: &'static str,
    pub opponent: &'static str,
    pub venue: Venue,
    pub score: &'static str,
    pub result: Outcome,
    pub predicted: Outcome,
    pub confidence: u8,
}

pub static SAMPLE_HISTORY: &[HistoryRow] = &[
    HistoryRow {
        date: "2024-01-15",
        opponent: "Liverpool",
        venue: Venue::Home,
        score: "2-1",
        result: Outcome::Win,
        predicted: Outcome::Win,
        confidence: 78,
    },
    HistoryRow {
        date: "2024-01-08",
        opponent: "Arsenal",
        venue: Venue::Away,
        score: "1-1",
        result: Outcome::Draw,
        predicted: Outcome::Draw,
        confidence: 65,
    },
    HistoryRow {
        date: "2024-01-01",
        opponent: "Chelsea",
        venue: Venue::Home,
        score: "0-2",
        result: Outcome::Loss,
        predicted: Outcome::Win,
        confidence: 72,
    },
    HistoryRow {
        date: "2023-12-28",
        opponent: "Tottenham",
        venue: Venue::Away,
        score: "3-1",
        result: Outcome::Win,
        predicted: Outcome::Win,
        confidence: 85,
    },
];

/// Share of rows where the prediction matched the result, as a rounded
/// integer percentage. Empty input reports 0.
pub fn accuracy_percent(rows: &[HistoryRow]) -> u8 {
    if rows.is_empty() {
        return 0;
    }
    let correct = rows.iter().filter(|r| r.result == r.predicted).count();
    percent(correct as f64 / rows.len() as f64)
}
