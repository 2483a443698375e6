pub mod api;
pub mod encoding;
pub mod history;
pub mod predictor;
pub mod state;
