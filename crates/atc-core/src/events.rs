//! Events emitted by the engine during a step.
//!
//! Each event carries exactly one reward contribution; the step reward is
//! their sum.

use serde::{Deserialize, Serialize};

use crate::components::FlightId;
use crate::enums::{Priority, RunwayId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StepEvent {
    /// A flight touched down.
    Landed {
        flight: FlightId,
        runway: RunwayId,
        priority: Priority,
        /// Cooldown drawn for the runway.
        cooldown: u32,
    },
    /// A flight ran out of fuel.
    Crashed { flight: FlightId, priority: Priority },
    /// Landing attempted on a runway still cooling down.
    BlockedRunway { runway: RunwayId, cooldown: u32 },
    /// Landing attempted on an empty slot of the top-5 view.
    InvalidFlight { slot: usize },
    /// A flight is still waiting past the high-wait threshold.
    HighWait { flight: FlightId, wait_time: u32 },
    /// A flight is still waiting below the low-wait threshold.
    LowWait { flight: FlightId, wait_time: u32 },
    /// DO_NOTHING while flights were waiting.
    Idle { waiting: usize },
}
