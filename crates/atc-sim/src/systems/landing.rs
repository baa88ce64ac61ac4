//! Landing system — applies the controller's action to the current queue.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use atc_core::actions::Action;
use atc_core::components::{Flight, Runway};
use atc_core::config::SimConfig;
use atc_core::constants::RUNWAY_COUNT;
use atc_core::enums::FlightStatus;
use atc_core::events::StepEvent;
use atc_core::state::LandingRecord;

/// Apply `action` against `ranked` (waiting flights, most urgent first).
///
/// A successful landing marks the flight `Landed` (cleanup despawns it),
/// draws a fresh cooldown for the runway, and flags the runway in `assigned`
/// so this step's cooldown decay skips it.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    runways: &mut [Runway; RUNWAY_COUNT],
    assigned: &mut [bool; RUNWAY_COUNT],
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    ranked: &[(Entity, Flight)],
    action: Action,
    events: &mut Vec<StepEvent>,
) -> Option<LandingRecord> {
    let (slot, runway_id) = match action {
        Action::DoNothing => {
            if !ranked.is_empty() {
                events.push(StepEvent::Idle {
                    waiting: ranked.len(),
                });
            }
            return None;
        }
        Action::Land { slot, runway } => (slot, runway),
    };

    // Slot is checked before the runway.
    let Some(&(entity, flight)) = ranked.get(slot) else {
        events.push(StepEvent::InvalidFlight { slot });
        return None;
    };

    let runway = &mut runways[runway_id.index()];
    if !runway.is_available() {
        events.push(StepEvent::BlockedRunway {
            runway: runway_id,
            cooldown: runway.cooldown,
        });
        return None;
    }

    let Ok(target) = world.query_one_mut::<&mut Flight>(entity) else {
        events.push(StepEvent::InvalidFlight { slot });
        return None;
    };
    target.status = FlightStatus::Landed;

    let (min, max) = config.cooldown_range;
    runway.cooldown = rng.gen_range(min..=max);
    assigned[runway_id.index()] = true;

    tracing::debug!(
        flight = flight.id.0,
        runway = runway_id.number(),
        cooldown = runway.cooldown,
        emergency = flight.is_emergency(),
        "flight landed"
    );
    events.push(StepEvent::Landed {
        flight: flight.id,
        runway: runway_id,
        priority: flight.priority,
        cooldown: runway.cooldown,
    });

    Some(LandingRecord {
        flight: flight.id,
        runway: runway_id,
    })
}
