//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Flight lifecycle status. `Landed` and `Crashed` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Holding, burning fuel, eligible for landing.
    #[default]
    Waiting,
    /// Assigned to a runway and served.
    Landed,
    /// Ran out of fuel while holding.
    Crashed,
}

impl FlightStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Landed | Self::Crashed)
    }
}

/// Priority class, fixed at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    Emergency,
}

impl Priority {
    pub fn is_emergency(self) -> bool {
        self == Self::Emergency
    }

    /// Observation encoding: 1.0 for emergency, 0.0 otherwise.
    pub fn as_feature(self) -> f32 {
        match self {
            Self::Normal => 0.0,
            Self::Emergency => 1.0,
        }
    }
}

/// One of the two runways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RunwayId {
    One,
    Two,
}

impl RunwayId {
    pub const ALL: [RunwayId; 2] = [RunwayId::One, RunwayId::Two];

    /// Zero-based index into runway arrays.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Runway number as painted on the threshold (1 or 2).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The served-flight target was reached.
    Served,
    /// A flight ran out of fuel.
    Crash,
    /// The step limit was reached (truncation rather than termination).
    StepLimit,
}
