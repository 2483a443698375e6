//! Form model and app state for the terminal front-end.
//!
//! All state is owned by the running app; nothing is shared or
//! persisted between sessions.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use chrono::Local;

use crate::encoding::{self, FeatureVector};
use crate::predictor::{MatchFeatures, PredictionResult, Venue, estimate};

/// The formation options the form offers.
pub const FORMATIONS: [&str; 6] = ["4-3-3", "4-4-2", "3-5-2", "4-2-3-1", "3-4-3", "5-3-2"];

const MAX_LOGS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Team,
    Opponent,
    Venue,
    Date,
    Time,
    Xg,
    Xga,
    Formation,
    Captain,
}

impl FormField {
    pub const ORDER: [FormField; 9] = [
        FormField::Team,
        FormField::Opponent,
        FormField::Venue,
        FormField::Date,
        FormField::Time,
        FormField::Xg,
        FormField::Xga,
        FormField::Formation,
        FormField::Captain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Team => "Team",
            FormField::Opponent => "Opponent",
            FormField::Venue => "Venue",
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::Xg => "xG",
            FormField::Xga => "xGA",
            FormField::Formation => "Formation",
            FormField::Captain => "Captain",
        }
    }

    /// Venue and formation cycle through fixed options instead of
    /// taking typed text.
    pub fn is_choice(self) -> bool {
        matches!(self, FormField::Venue | FormField::Formation)
    }
}

#[derive(Debug, Clone)]
pub struct MatchForm {
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
    // Date and time are display-only context; the model never sees them.
    pub date: String,
    pub time: String,
    pub xg: String,
    pub xga: String,
    pub formation: usize,
    pub captain: String,
}

impl MatchForm {
    pub fn new() -> Self {
        Self {
            team: String::new(),
            opponent: String::new(),
            venue: Venue::Home,
            date: Local::now().format("%Y-%m-%d").to_string(),
            time: "15:00".to_string(),
            xg: "1.5".to_string(),
            xga: "1.2".to_string(),
            formation: 0,
            captain: String::new(),
        }
    }

    pub fn formation_label(&self) -> &'static str {
        FORMATIONS[self.formation % FORMATIONS.len()]
    }

    /// The predict action is unavailable until both sides are named.
    pub fn is_complete(&self) -> bool {
        !self.team.trim().is_empty() && !self.opponent.trim().is_empty()
    }

    /// Parses the numeric text fields; the only way a prediction fails.
    pub fn features(&self) -> Result<MatchFeatures> {
        let xg = self
            .xg
            .trim()
            .parse::<f64>()
            .with_context(|| format!("xG must be a number, got {:?}", self.xg))?;
        let xga = self
            .xga
            .trim()
            .parse::<f64>()
            .with_context(|| format!("xGA must be a number, got {:?}", self.xga))?;
        Ok(MatchFeatures {
            team: self.team.clone(),
            opponent: self.opponent.clone(),
            venue: self.venue,
            xg,
            xga,
            formation: self.formation_label().to_string(),
            captain: self.captain.clone(),
        })
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Team => Some(&mut self.team),
            FormField::Opponent => Some(&mut self.opponent),
            FormField::Date => Some(&mut self.date),
            FormField::Time => Some(&mut self.time),
            FormField::Xg => Some(&mut self.xg),
            FormField::Xga => Some(&mut self.xga),
            FormField::Captain => Some(&mut self.captain),
            FormField::Venue | FormField::Formation => None,
        }
    }

    pub fn value_text(&self, field: FormField) -> String {
        match field {
            FormField::Team => self.team.clone(),
            FormField::Opponent => self.opponent.clone(),
            FormField::Venue => format!("< {} >", self.venue.label()),
            FormField::Date => self.date.clone(),
            FormField::Time => self.time.clone(),
            FormField::Xg => self.xg.clone(),
            FormField::Xga => self.xga.clone(),
            FormField::Formation => format!("< {} >", self.formation_label()),
            FormField::Captain => self.captain.clone(),
        }
    }
}

impl Default for MatchForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub form: MatchForm,
    pub focus: FormField,
    pub prediction: Option<PredictionResult>,
    /// Encoded inputs of the last prediction, for the model-inputs panel.
    pub features: Option<FeatureVector>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            form: MatchForm::new(),
            focus: FormField::Team,
            prediction: None,
            features: None,
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Self::neighbor(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Self::neighbor(self.focus, FormField::ORDER.len() - 1);
    }

    fn neighbor(focus: FormField, step: usize) -> FormField {
        let idx = FormField::ORDER
            .iter()
            .position(|f| *f == focus)
            .unwrap_or(0);
        FormField::ORDER[(idx + step) % FormField::ORDER.len()]
    }

    pub fn edit_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.form.text_field_mut(self.focus) {
            text.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(text) = self.form.text_field_mut(self.focus) {
            text.pop();
        }
    }

    /// Left/right on the choice fields; no-op elsewhere.
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focus {
            FormField::Venue => {
                self.form.venue = match self.form.venue {
                    Venue::Home => Venue::Away,
                    Venue::Away => Venue::Home,
                };
            }
            FormField::Formation => {
                let len = FORMATIONS.len();
                self.form.formation = if forward {
                    (self.form.formation + 1) % len
                } else {
                    (self.form.formation + len - 1) % len
                };
            }
            _ => {}
        }
    }

    pub fn reset_form(&mut self) {
        self.form = MatchForm::new();
        self.focus = FormField::Team;
        self.prediction = None;
        self.features = None;
        self.push_log("[INFO] Form reset");
    }

    /// Validates the form, then runs the shared estimator. The whole
    /// operation either succeeds or leaves the previous result intact.
    pub fn submit(&mut self) {
        if !self.form.is_complete() {
            self.push_log("[WARN] Team and opponent are required");
            return;
        }
        match self.form.features() {
            Ok(features) => {
                let result = estimate(&features);
                self.push_log(format!(
                    "[INFO] {} vs {}: {} ({}%)",
                    features.team,
                    features.opponent,
                    result.outcome.label(),
                    result.confidence_percent()
                ));
                self.features = Some(encoding::encode(&features));
                self.prediction = Some(result);
            }
            Err(err) => self.push_log(format!("[WARN] {err}")),
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.push_back(line.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
