//! Observation encoding and the urgency ranking behind the top-5 view.
//!
//! Read-only: never modifies the world.

use hecs::{Entity, World};

use atc_core::components::{Flight, Runway};
use atc_core::constants::{FLIGHT_FEATURES, OBSERVATION_LEN, RUNWAY_COUNT, TOP_FLIGHTS};
use atc_core::state::Observation;

/// Sort key: emergencies first, then least fuel, then oldest id.
fn urgency_key(flight: &Flight) -> (bool, u32, u32) {
    (!flight.is_emergency(), flight.fuel, flight.id.0)
}

/// All waiting flights, most urgent first.
pub fn rank_waiting(world: &World) -> Vec<(Entity, Flight)> {
    let mut ranked: Vec<(Entity, Flight)> = world
        .query::<&Flight>()
        .iter()
        .filter(|(_, flight)| flight.is_waiting())
        .map(|(entity, flight)| (entity, *flight))
        .collect();

    ranked.sort_by_key(|(_, flight)| urgency_key(flight));
    ranked
}

/// The top-5 view addressed by landing actions.
pub fn top_view(world: &World) -> Vec<(Entity, Flight)> {
    let mut ranked = rank_waiting(world);
    ranked.truncate(TOP_FLIGHTS);
    ranked
}

/// Encode runway availability and the top-5 view into the state vector.
pub fn encode(world: &World, runways: &[Runway; RUNWAY_COUNT]) -> Observation {
    let mut values = [0.0; OBSERVATION_LEN];

    for runway in runways {
        values[runway.id.index()] = if runway.is_available() { 1.0 } else { 0.0 };
    }

    for (slot, (_, flight)) in top_view(world).iter().enumerate() {
        let base = RUNWAY_COUNT + slot * FLIGHT_FEATURES;
        values[base] = flight.fuel as f32;
        values[base + 1] = flight.wait_time as f32;
        values[base + 2] = flight.priority.as_feature();
    }

    Observation(values)
}
