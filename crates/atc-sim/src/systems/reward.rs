//! Reward scoring — maps step events to reward contributions.

use atc_core::config::RewardTable;
use atc_core::events::StepEvent;

/// Reward contribution of a single event.
pub fn contribution(event: &StepEvent, table: &RewardTable) -> f64 {
    match event {
        StepEvent::Landed { priority, .. } if priority.is_emergency() => table.emergency_landing,
        StepEvent::Landed { .. } => table.landing,
        StepEvent::Crashed { priority, .. } if priority.is_emergency() => table.emergency_crash,
        StepEvent::Crashed { .. } => table.crash,
        StepEvent::BlockedRunway { .. } => table.blocked_runway,
        StepEvent::InvalidFlight { .. } => table.invalid_flight,
        StepEvent::HighWait { .. } => table.high_wait,
        StepEvent::LowWait { .. } => table.low_wait_bonus,
        StepEvent::Idle { .. } => table.idle,
    }
}

/// Total reward for a step.
pub fn score(events: &[StepEvent], table: &RewardTable) -> f64 {
    events.iter().map(|event| contribution(event, table)).sum()
}
