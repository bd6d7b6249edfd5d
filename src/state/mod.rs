//! Application state and its pure transition methods.

mod app_state;

pub use app_state::{AppState, SortProgress, SortSession, StepHighlight};
