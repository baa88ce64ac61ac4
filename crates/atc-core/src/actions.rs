//! Controller actions and the discrete action-space encoding.
//!
//! Actions `0..=9` address the slot x runway grid as
//! `action = slot * 2 + (runway - 1)`, so even actions target runway 1 and
//! odd actions runway 2. Action `10` is DO_NOTHING. Anything else is
//! rejected with `EngineError::InvalidAction`.

use serde::{Deserialize, Serialize};

use crate::constants::{ACTION_DO_NOTHING, RUNWAY_COUNT, TOP_FLIGHTS};
use crate::enums::RunwayId;
use crate::error::EngineError;

/// A decoded controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Land the flight in `slot` of the current top-5 view on `runway`.
    Land { slot: usize, runway: RunwayId },
    /// Let the queue hold for one step.
    DoNothing,
}

impl Action {
    /// Decode a raw action index.
    pub fn decode(raw: i64) -> Result<Self, EngineError> {
        if raw == ACTION_DO_NOTHING {
            return Ok(Self::DoNothing);
        }
        if !(0..ACTION_DO_NOTHING).contains(&raw) {
            return Err(EngineError::InvalidAction(raw));
        }
        let index = raw as usize;
        let runway = match index % RUNWAY_COUNT {
            0 => RunwayId::One,
            _ => RunwayId::Two,
        };
        Ok(Self::Land {
            slot: index / RUNWAY_COUNT,
            runway,
        })
    }

    /// Encode back to the raw action index. Returns `None` for a slot outside
    /// the visible window.
    pub fn encode(self) -> Option<i64> {
        match self {
            Self::DoNothing => Some(ACTION_DO_NOTHING),
            Self::Land { slot, runway } if slot < TOP_FLIGHTS => {
                Some((slot * RUNWAY_COUNT + runway.index()) as i64)
            }
            Self::Land { .. } => None,
        }
    }
}
