//! Engine configuration.
//!
//! Every field has a default from `constants`, so a partial JSON document is
//! a valid config.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::EngineError;

/// Reward contribution per event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub landing: f64,
    pub emergency_landing: f64,
    pub crash: f64,
    pub emergency_crash: f64,
    pub blocked_runway: f64,
    pub invalid_flight: f64,
    pub high_wait: f64,
    pub idle: f64,
    /// Per-flight shaping bonus for short waits. Zero disables it.
    pub low_wait_bonus: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            landing: REWARD_LANDING,
            emergency_landing: REWARD_EMERGENCY_LANDING,
            crash: PENALTY_CRASH,
            emergency_crash: PENALTY_EMERGENCY_CRASH,
            blocked_runway: PENALTY_BLOCKED_RUNWAY,
            invalid_flight: PENALTY_INVALID_FLIGHT,
            high_wait: PENALTY_HIGH_WAIT,
            idle: PENALTY_IDLE,
            low_wait_bonus: BONUS_LOW_WAIT,
        }
    }
}

/// Configuration for a simulation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same episode.
    pub seed: u64,
    /// Steps between arrival batches.
    pub spawn_interval: u64,
    /// Inclusive bounds on flights per batch.
    pub spawn_batch: (u32, u32),
    /// Inclusive bounds on initial fuel.
    pub fuel_range: (u32, u32),
    pub emergency_probability: f64,
    /// Inclusive bounds on the cooldown drawn after each landing.
    pub cooldown_range: (u32, u32),
    /// Flights waiting longer than this are penalized every step.
    pub high_wait_threshold: u32,
    /// Flights waiting less than this earn `rewards.low_wait_bonus`.
    pub low_wait_threshold: u32,
    pub max_flights_served: u32,
    pub max_steps: u64,
    pub rewards: RewardTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_interval: SPAWN_INTERVAL_STEPS,
            spawn_batch: (SPAWN_BATCH_MIN, SPAWN_BATCH_MAX),
            fuel_range: (FUEL_MIN, FUEL_MAX),
            emergency_probability: EMERGENCY_PROBABILITY,
            cooldown_range: (RUNWAY_COOLDOWN_MIN, RUNWAY_COOLDOWN_MAX),
            high_wait_threshold: HIGH_WAIT_THRESHOLD,
            low_wait_threshold: LOW_WAIT_THRESHOLD,
            max_flights_served: MAX_FLIGHTS_SERVED,
            max_steps: MAX_STEPS,
            rewards: RewardTable::default(),
        }
    }
}

impl SimConfig {
    /// Default config with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the engine cannot run.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_range("spawn_batch", self.spawn_batch)?;
        check_range("fuel_range", self.fuel_range)?;
        check_range("cooldown_range", self.cooldown_range)?;
        if self.spawn_batch.0 == 0 {
            return Err(EngineError::InvalidConfig(
                "spawn_batch must spawn at least one flight".into(),
            ));
        }
        // A flight spawned with no fuel would crash before it could be seen.
        if self.fuel_range.0 == 0 {
            return Err(EngineError::InvalidConfig("fuel_range must start above 0".into()));
        }
        // A zero draw would leave the runway available right after a landing.
        if self.cooldown_range.0 == 0 {
            return Err(EngineError::InvalidConfig(
                "cooldown_range must start above 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.emergency_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "emergency_probability {} is outside [0, 1]",
                self.emergency_probability
            )));
        }
        if self.spawn_interval == 0 {
            return Err(EngineError::InvalidConfig("spawn_interval must be positive".into()));
        }
        if self.max_steps == 0 || self.max_flights_served == 0 {
            return Err(EngineError::InvalidConfig(
                "episode limits must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, (lo, hi): (u32, u32)) -> Result<(), EngineError> {
    if lo > hi {
        return Err(EngineError::InvalidConfig(format!(
            "{name} is inverted: {lo} > {hi}"
        )));
    }
    Ok(())
}
