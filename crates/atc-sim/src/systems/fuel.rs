//! Fuel system — advances time for every waiting flight.
//!
//! Burns one unit of fuel, adds one step of waiting, and crashes flights
//! that hit zero. Crashed flights are only marked here; cleanup despawns
//! them after the step is scored.

use hecs::World;

use atc_core::components::Flight;
use atc_core::config::SimConfig;
use atc_core::enums::FlightStatus;
use atc_core::events::StepEvent;

/// Run the fuel system. Returns the number of flights that crashed.
pub fn run(world: &mut World, config: &SimConfig, events: &mut Vec<StepEvent>) -> usize {
    let mut step_events = Vec::new();
    let mut crashes = 0;

    for (_entity, flight) in world.query_mut::<&mut Flight>() {
        if !flight.is_waiting() {
            continue;
        }

        flight.fuel = flight.fuel.saturating_sub(1);
        flight.wait_time += 1;

        if flight.fuel == 0 {
            flight.status = FlightStatus::Crashed;
            crashes += 1;
            tracing::debug!(
                flight = flight.id.0,
                wait_time = flight.wait_time,
                emergency = flight.is_emergency(),
                "flight out of fuel"
            );
            step_events.push((
                flight.id,
                StepEvent::Crashed {
                    flight: flight.id,
                    priority: flight.priority,
                },
            ));
            continue;
        }

        if flight.wait_time > config.high_wait_threshold {
            step_events.push((
                flight.id,
                StepEvent::HighWait {
                    flight: flight.id,
                    wait_time: flight.wait_time,
                },
            ));
        }
        if config.rewards.low_wait_bonus != 0.0 && flight.wait_time < config.low_wait_threshold {
            step_events.push((
                flight.id,
                StepEvent::LowWait {
                    flight: flight.id,
                    wait_time: flight.wait_time,
                },
            ));
        }
    }

    // Report in arrival order regardless of storage order.
    step_events.sort_by_key(|(id, _)| *id);
    events.extend(step_events.into_iter().map(|(_, event)| event));
    crashes
}
