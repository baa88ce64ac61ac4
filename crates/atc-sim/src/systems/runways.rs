//! Runway cooldown decay.

use atc_core::components::Runway;
use atc_core::constants::RUNWAY_COUNT;

/// Decrement every cooldown (floor 0) except on runways assigned this step.
pub fn run(runways: &mut [Runway; RUNWAY_COUNT], assigned: &[bool; RUNWAY_COUNT]) {
    for (runway, &just_assigned) in runways.iter_mut().zip(assigned) {
        if !just_assigned {
            runway.cooldown = runway.cooldown.saturating_sub(1);
        }
    }
}
