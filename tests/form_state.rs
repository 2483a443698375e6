use matchday_terminal::predictor::{Outcome, Venue};
use matchday_terminal::state::{AppState, FORMATIONS, FormField, MatchForm};

fn filled_form() -> MatchForm {
    let mut form = MatchForm::new();
    form.team = "Manchester United".to_string();
    form.opponent = "Liverpool".to_string();
    form
}

#[test]
fn defaults_match_the_original_form() {
    let form = MatchForm::new();
    assert_eq!(form.venue, Venue::Home);
    assert_eq!(form.xg, "1.5");
    assert_eq!(form.xga, "1.2");
    assert_eq!(form.formation_label(), "4-3-3");
    assert_eq!(form.time, "15:00");
    assert!(!form.is_complete());
}

#[test]
fn formation_options_cover_the_original_select() {
    assert_eq!(
        FORMATIONS,
        ["4-3-3", "4-4-2", "3-5-2", "4-2-3-1", "3-4-3", "5-3-2"]
    );
}

#[test]
fn features_parse_the_numeric_text_fields() {
    let mut form = filled_form();
    form.xg = " 2.4 ".to_string();
    form.xga = "0.6".to_string();
    let features = form.features().expect("valid form derives features");
    assert_eq!(features.xg, 2.4);
    assert_eq!(features.xga, 0.6);
    assert_eq!(features.formation, "4-3-3");
}

#[test]
fn features_reject_non_numeric_metrics() {
    let mut form = filled_form();
    form.xga = "1,2".to_string();
    let err = form.features().expect_err("comma decimal should fail");
    assert!(err.to_string().contains("xGA"));
}

#[test]
fn submitting_a_valid_form_stores_prediction_and_encoding() {
    let mut state = AppState::new();
    state.form = filled_form();
    state.form.venue = Venue::Away;
    state.form.xg = "0.5".to_string();
    state.form.xga = "1.7".to_string();
    state.submit();

    let result = state.prediction.expect("prediction stored");
    assert_eq!(result.outcome, Outcome::Loss);
    let vector = state.features.expect("encoding stored");
    assert_eq!(vector.venue_home, 0);
    assert_eq!(vector.formation_freq, 150.0);
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[INFO]")));
}

#[test]
fn failed_submit_keeps_the_previous_prediction() {
    let mut state = AppState::new();
    state.form = filled_form();
    state.submit();
    let first = state.prediction.expect("first prediction stored");

    state.form.xg = "??".to_string();
    state.submit();
    assert_eq!(state.prediction, Some(first));
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));
}

#[test]
fn reset_restores_defaults_and_clears_results() {
    let mut state = AppState::new();
    state.form = filled_form();
    state.focus = FormField::Captain;
    state.submit();
    assert!(state.prediction.is_some());

    state.reset_form();
    assert!(state.prediction.is_none());
    assert!(state.features.is_none());
    assert_eq!(state.focus, FormField::Team);
    assert!(state.form.team.is_empty());
}
