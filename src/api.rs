//! JSON predict boundary.
//!
//! Pure request-in / response-out functions with no transport attached;
//! any HTTP handler can wrap `handle_predict` directly. The class codes
//! (0 = Loss, 1 = Draw, 2 = Win) and the payload field names are a wire
//! contract.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::predictor::{MatchFeatures, PredictionResult, Venue, estimate, percent};

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub opponent: String,
    pub venue: String,
    // The form posts these as strings, API clients as numbers.
    pub xg: Value,
    pub xga: Value,
    #[serde(default)]
    pub captain: String,
    #[serde(default)]
    pub formation: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbabilityBreakdown {
    pub loss: u8,
    pub draw: u8,
    pub win: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: u8,
    pub probabilities: ProbabilityBreakdown,
    pub confidence: u8,
}

#[derive(Debug, Serialize)]
struct PredictFailure {
    success: bool,
    error: String,
}

pub fn parse_predict_request(raw: &str) -> Result<PredictRequest> {
    serde_json::from_str(raw.trim()).context("invalid predict request json")
}

pub fn features_from_request(req: &PredictRequest) -> Result<MatchFeatures> {
    Ok(MatchFeatures {
        team: req.team.clone(),
        opponent: req.opponent.clone(),
        venue: parse_venue(&req.venue)?,
        xg: numeric_field(&req.xg, "xg")?,
        xga: numeric_field(&req.xga, "xga")?,
        formation: req.formation.clone(),
        captain: req.captain.clone(),
    })
}

pub fn predict_response(result: &PredictionResult) -> PredictResponse {
    PredictResponse {
        success: true,
        prediction: result.outcome.code(),
        probabilities: ProbabilityBreakdown {
            loss: percent(result.probs.loss),
            draw: percent(result.probs.draw),
            win: percent(result.probs.win),
        },
        confidence: result.confidence_percent(),
    }
}

pub fn predict_from_json(raw: &str) -> Result<PredictResponse> {
    let req = parse_predict_request(raw)?;
    let features = features_from_request(&req)?;
    Ok(predict_response(&estimate(&features)))
}

/// Total boundary: every failure collapses into the generic
/// `{"success":false,"error":...}` payload.
pub fn handle_predict(raw: &str) -> String {
    let body = match predict_from_json(raw) {
        Ok(resp) => serde_json::to_string(&resp),
        Err(err) => serde_json::to_string(&PredictFailure {
            success: false,
            error: err.to_string(),
        }),
    };
    body.unwrap_or_else(|_| r#"{"success":false,"error":"response serialization failed"}"#.to_string())
}

fn parse_venue(raw: &str) -> Result<Venue> {
    let cleaned = raw.trim();
    if cleaned.eq_ignore_ascii_case("home") {
        Ok(Venue::Home)
    } else if cleaned.eq_ignore_ascii_case("away") {
        Ok(Venue::Away)
    } else {
        bail!("venue must be Home or Away, got {raw:?}")
    }
}

fn numeric_field(value: &Value, name: &str) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .with_context(|| format!("{name} is not a finite number")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{name} must be a number, got {s:?}")),
        other => bail!("{name} must be a number, got {other}"),
    }
}
