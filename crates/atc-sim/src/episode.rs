//! Controller seam and a simple episode runner.
//!
//! The engine does not care where actions come from; anything implementing
//! `Policy` can drive it. Two baseline policies are provided for evaluation
//! harnesses and tests.

use serde::{Deserialize, Serialize};

use atc_core::actions::Action;
use atc_core::constants::ACTION_DO_NOTHING;
use atc_core::enums::{EndReason, RunwayId};
use atc_core::error::EngineError;
use atc_core::state::Observation;

use crate::engine::AtcEngine;

/// Chooses a raw action index from an observation.
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> i64;
}

/// Always holds. Useful as a worst-case baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn act(&mut self, _observation: &Observation) -> i64 {
        ACTION_DO_NOTHING
    }
}

/// Lands the most urgent flight on the first free runway, holds otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn act(&mut self, observation: &Observation) -> i64 {
        if !observation.slot_occupied(0) {
            return ACTION_DO_NOTHING;
        }
        RunwayId::ALL
            .into_iter()
            .find(|&runway| observation.runway_available(runway))
            .and_then(|runway| Action::Land { slot: 0, runway }.encode())
            .unwrap_or(ACTION_DO_NOTHING)
    }
}

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub total_reward: f64,
    pub steps: u64,
    pub served_count: u32,
    pub crash_occurred: bool,
    /// `None` when `max_steps` cut the run short before the engine finished.
    pub end_reason: Option<EndReason>,
}

/// Reset the engine and drive it with `policy` until the episode ends or
/// `max_steps` steps have run.
pub fn run_episode(
    engine: &mut AtcEngine,
    policy: &mut impl Policy,
    seed: Option<u64>,
    max_steps: Option<u64>,
) -> Result<EpisodeSummary, EngineError> {
    let mut observation = engine.reset(seed);
    let mut total_reward = 0.0;
    let mut steps = 0;

    while !engine.is_done() && max_steps.map_or(true, |limit| steps < limit) {
        let outcome = engine.step(policy.act(&observation))?;
        total_reward += outcome.reward;
        observation = outcome.observation;
        steps += 1;
    }

    tracing::debug!(steps, total_reward, served = engine.served_count(), "episode run complete");

    Ok(EpisodeSummary {
        total_reward,
        steps,
        served_count: engine.served_count(),
        crash_occurred: engine.crash_occurred(),
        end_reason: engine.end_reason(),
    })
}
