//! Arrival generation — spawns a batch of flights every `spawn_interval` steps.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use atc_core::components::{Callsign, Flight, FlightId};
use atc_core::config::SimConfig;
use atc_core::constants::{AIRLINE_CODES, CALLSIGN_NUMBER_MAX, CALLSIGN_NUMBER_MIN};
use atc_core::enums::Priority;

/// Hands out flight ids. Ids only grow within an episode, so id order is
/// arrival order.
#[derive(Debug, Clone, Default)]
pub struct FlightGenerator {
    next_id: u32,
}

impl FlightGenerator {
    pub fn reset(&mut self) {
        self.next_id = 0;
    }

    /// Id the next spawned flight will receive.
    pub fn next_id(&self) -> FlightId {
        FlightId(self.next_id)
    }

    fn allocate_id(&mut self) -> FlightId {
        let id = FlightId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Spawn a batch if `step` falls on the arrival cadence. Returns the number
/// of flights spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    generator: &mut FlightGenerator,
    config: &SimConfig,
    step: u64,
) -> usize {
    if step % config.spawn_interval != 0 {
        return 0;
    }

    let (min, max) = config.spawn_batch;
    let count = rng.gen_range(min..=max) as usize;
    for _ in 0..count {
        spawn_flight(world, rng, generator, config);
    }
    tracing::debug!(step, count, "arrival batch spawned");
    count
}

/// Spawn one flight with freshly drawn attributes.
pub fn spawn_flight(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    generator: &mut FlightGenerator,
    config: &SimConfig,
) -> hecs::Entity {
    let airline = AIRLINE_CODES[rng.gen_range(0..AIRLINE_CODES.len())];
    let number = rng.gen_range(CALLSIGN_NUMBER_MIN..=CALLSIGN_NUMBER_MAX);
    let (fuel_min, fuel_max) = config.fuel_range;
    let fuel = rng.gen_range(fuel_min..=fuel_max);
    let priority = if rng.gen_bool(config.emergency_probability) {
        Priority::Emergency
    } else {
        Priority::Normal
    };

    let flight = Flight::new(generator.allocate_id(), fuel, priority);
    world.spawn((flight, Callsign(format!("{airline}{number}"))))
}
