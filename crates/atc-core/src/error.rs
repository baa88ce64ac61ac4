//! Error type for the engine boundary.
//!
//! Only conditions the caller must handle are errors. Scored conditions
//! (blocked runway, empty slot, crash) are `StepEvent`s instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Action index outside `0..=10`. The step is rejected and state is untouched.
    #[error("invalid action {0}: expected an integer in 0..=10")]
    InvalidAction(i64),
    /// `step` was called after the episode ended without an intervening `reset`.
    #[error("episode finished at step {step_count}; call reset() before stepping again")]
    EpisodeOver { step_count: u64 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
