//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Transitions live in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Unique flight identifier. Monotonic within an episode, so id order is
/// arrival order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlightId(pub u32);

/// A flight in the landing queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: FlightId,
    /// Steps of fuel left. Never negative; zero while waiting means crashed.
    pub fuel: u32,
    /// Steps spent waiting so far.
    pub wait_time: u32,
    pub priority: Priority,
    pub status: FlightStatus,
}

impl Flight {
    pub fn new(id: FlightId, fuel: u32, priority: Priority) -> Self {
        Self {
            id,
            fuel,
            wait_time: 0,
            priority,
            status: FlightStatus::Waiting,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.status == FlightStatus::Waiting
    }

    pub fn is_emergency(&self) -> bool {
        self.priority.is_emergency()
    }
}

/// Display call-sign, e.g. `"LH417"`. Cosmetic; never used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callsign(pub String);

/// Runway state. Owned by the engine for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub id: RunwayId,
    /// Steps until the runway accepts another landing.
    pub cooldown: u32,
}

impl Runway {
    pub fn new(id: RunwayId) -> Self {
        Self { id, cooldown: 0 }
    }

    pub fn is_available(&self) -> bool {
        self.cooldown == 0
    }
}
