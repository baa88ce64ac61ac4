//! Observation, step result, and scene snapshot types — everything the engine
//! hands to a controller or renderer.

use serde::{Deserialize, Serialize};

use crate::components::FlightId;
use crate::constants::*;
use crate::enums::*;
use crate::events::StepEvent;

/// Fixed-length state vector consumed by a controller.
///
/// Layout: `[runway1_available, runway2_available,` then for each of the top
/// 5 waiting flights `fuel, wait_time, priority]`. Empty slots are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f32; OBSERVATION_LEN]);

impl Observation {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn runway_available(&self, runway: RunwayId) -> bool {
        self.0[runway.index()] > 0.5
    }

    /// `(fuel, wait_time, priority)` for a slot of the top-5 view.
    /// Returns `None` past the window.
    pub fn slot(&self, slot: usize) -> Option<[f32; FLIGHT_FEATURES]> {
        if slot >= TOP_FLIGHTS {
            return None;
        }
        let base = RUNWAY_COUNT + slot * FLIGHT_FEATURES;
        Some([self.0[base], self.0[base + 1], self.0[base + 2]])
    }

    /// Whether a slot holds a flight. Waiting flights always have fuel > 0,
    /// so a zero fuel value marks padding.
    pub fn slot_occupied(&self, slot: usize) -> bool {
        self.slot(slot).is_some_and(|[fuel, _, _]| fuel > 0.0)
    }
}

/// Counters reported with every step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub served_count: u32,
    pub crash_occurred: bool,
    /// Steps completed in this episode, including this one.
    pub step_count: u64,
    /// Flights still waiting after this step (including new arrivals).
    pub waiting_flights: usize,
    /// The episode ended on the step limit rather than a terminal event.
    pub truncated: bool,
    pub end_reason: Option<EndReason>,
    /// Everything that contributed to this step's reward.
    pub events: Vec<StepEvent>,
}

/// Result of one `step` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// The most recent successful landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingRecord {
    pub flight: FlightId,
    pub runway: RunwayId,
}

/// A waiting flight as shown to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightView {
    pub id: FlightId,
    pub callsign: String,
    pub fuel: u32,
    pub wait_time: u32,
    pub priority: Priority,
    pub status: FlightStatus,
    /// Position in the controller's top-5 view, if visible.
    pub slot: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayView {
    pub id: RunwayId,
    pub cooldown: u32,
    pub available: bool,
}

/// Complete read-only scene, built after each `reset`/`step`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub step: u64,
    pub runways: Vec<RunwayView>,
    /// Waiting flights in urgency order.
    pub flights: Vec<FlightView>,
    pub served_count: u32,
    pub crash_occurred: bool,
    pub done: bool,
    pub last_action: Option<i64>,
    pub last_reward: f64,
    pub last_landing: Option<LandingRecord>,
}
