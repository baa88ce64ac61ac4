//! Snapshot system: builds the read-only `SceneSnapshot` for renderers.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use atc_core::components::{Callsign, Runway};
use atc_core::constants::{RUNWAY_COUNT, TOP_FLIGHTS};
use atc_core::state::*;

use crate::systems::observation::rank_waiting;

/// Episode bookkeeping the snapshot reports alongside the world.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeView {
    pub step: u64,
    pub served_count: u32,
    pub crash_occurred: bool,
    pub done: bool,
    pub last_action: Option<i64>,
    pub last_reward: f64,
    pub last_landing: Option<LandingRecord>,
}

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    runways: &[Runway; RUNWAY_COUNT],
    episode: EpisodeView,
) -> SceneSnapshot {
    SceneSnapshot {
        step: episode.step,
        runways: build_runways(runways),
        flights: build_flights(world),
        served_count: episode.served_count,
        crash_occurred: episode.crash_occurred,
        done: episode.done,
        last_action: episode.last_action,
        last_reward: episode.last_reward,
        last_landing: episode.last_landing,
    }
}

fn build_runways(runways: &[Runway; RUNWAY_COUNT]) -> Vec<RunwayView> {
    runways
        .iter()
        .map(|runway| RunwayView {
            id: runway.id,
            cooldown: runway.cooldown,
            available: runway.is_available(),
        })
        .collect()
}

/// Waiting flights in urgency order, tagged with their top-5 slot.
fn build_flights(world: &World) -> Vec<FlightView> {
    rank_waiting(world)
        .into_iter()
        .enumerate()
        .map(|(rank, (entity, flight))| FlightView {
            id: flight.id,
            callsign: world
                .get::<&Callsign>(entity)
                .map(|callsign| callsign.0.clone())
                .unwrap_or_default(),
            fuel: flight.fuel,
            wait_time: flight.wait_time,
            priority: flight.priority,
            status: flight.status,
            slot: (rank < TOP_FLIGHTS).then_some(rank),
        })
        .collect()
}
