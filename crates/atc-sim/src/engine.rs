//! Simulation engine — the landing-queue environment.
//!
//! `AtcEngine` owns the hecs world of flights, both runways, and the seeded
//! RNG. Controllers drive it through `reset` and `step`; renderers read it
//! through `snapshot`. Nothing outside `reset`/`step` mutates engine state.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use atc_core::actions::Action;
use atc_core::components::{Flight, Runway};
use atc_core::config::SimConfig;
use atc_core::constants::RUNWAY_COUNT;
use atc_core::enums::{EndReason, RunwayId};
use atc_core::error::EngineError;
use atc_core::events::StepEvent;
use atc_core::state::{LandingRecord, Observation, SceneSnapshot, StepInfo, StepOutcome};

use crate::systems;
use crate::systems::arrivals::FlightGenerator;
use crate::systems::snapshot::EpisodeView;

/// The simulation engine. Owns the flight world and all episode state.
pub struct AtcEngine {
    world: World,
    runways: [Runway; RUNWAY_COUNT],
    config: SimConfig,
    rng: ChaCha8Rng,
    generator: FlightGenerator,
    step_count: u64,
    served_count: u32,
    crash_occurred: bool,
    end_reason: Option<EndReason>,
    despawn_buffer: Vec<Entity>,
    events: Vec<StepEvent>,
    last_action: Option<i64>,
    last_reward: f64,
    last_landing: Option<LandingRecord>,
}

impl AtcEngine {
    /// Create an engine and start its first episode from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut engine = Self {
            world: World::new(),
            runways: fresh_runways(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            generator: FlightGenerator::default(),
            step_count: 0,
            served_count: 0,
            crash_occurred: false,
            end_reason: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_action: None,
            last_reward: 0.0,
            last_landing: None,
        };
        engine.reset(None);
        Ok(engine)
    }

    /// Start a new episode and return its first observation.
    ///
    /// `Some(seed)` reseeds the RNG; `None` continues the current stream, so
    /// consecutive episodes differ while the whole run stays reproducible.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        self.world.clear();
        self.runways = fresh_runways();
        self.generator.reset();
        self.step_count = 0;
        self.served_count = 0;
        self.crash_occurred = false;
        self.end_reason = None;
        self.events.clear();
        self.last_action = None;
        self.last_reward = 0.0;
        self.last_landing = None;

        let spawned = systems::arrivals::run(
            &mut self.world,
            &mut self.rng,
            &mut self.generator,
            &self.config,
            0,
        );
        tracing::info!(?seed, flights = spawned, "episode reset");

        self.observation()
    }

    /// Advance the simulation by one step.
    ///
    /// Out-of-range actions are rejected before any state or RNG change.
    /// Stepping a finished episode is a caller bug and returns
    /// `EngineError::EpisodeOver` until `reset` is called.
    pub fn step(&mut self, raw_action: i64) -> Result<StepOutcome, EngineError> {
        if self.end_reason.is_some() {
            tracing::error!(
                step_count = self.step_count,
                "step called on a finished episode"
            );
            return Err(EngineError::EpisodeOver {
                step_count: self.step_count,
            });
        }
        let action = Action::decode(raw_action).inspect_err(|_| {
            tracing::warn!(action = raw_action, "rejected out-of-range action");
        })?;

        self.events.clear();
        self.run_systems(action);

        let next_step = self.step_count + 1;
        systems::arrivals::run(
            &mut self.world,
            &mut self.rng,
            &mut self.generator,
            &self.config,
            next_step,
        );

        let reward = systems::reward::score(&self.events, &self.config.rewards);
        self.step_count = next_step;
        self.end_reason = self.check_end();
        self.last_action = Some(raw_action);
        self.last_reward = reward;

        if let Some(reason) = self.end_reason {
            tracing::info!(
                ?reason,
                steps = self.step_count,
                served = self.served_count,
                "episode finished"
            );
        }

        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            done: self.end_reason.is_some(),
            info: StepInfo {
                served_count: self.served_count,
                crash_occurred: self.crash_occurred,
                step_count: self.step_count,
                waiting_flights: self.waiting_count(),
                truncated: self.end_reason == Some(EndReason::StepLimit),
                end_reason: self.end_reason,
                events: self.events.clone(),
            },
        })
    }

    /// Current observation. Pure read of engine state.
    pub fn observation(&self) -> Observation {
        systems::observation::encode(&self.world, &self.runways)
    }

    /// Read-only scene for renderers.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.runways,
            EpisodeView {
                step: self.step_count,
                served_count: self.served_count,
                crash_occurred: self.crash_occurred,
                done: self.is_done(),
                last_action: self.last_action,
                last_reward: self.last_reward,
                last_landing: self.last_landing,
            },
        )
    }

    /// Active flights in arrival order.
    pub fn flights(&self) -> Vec<Flight> {
        let mut flights: Vec<Flight> = self
            .world
            .query::<&Flight>()
            .iter()
            .map(|(_, flight)| *flight)
            .collect();
        flights.sort_by_key(|flight| flight.id);
        flights
    }

    pub fn runway(&self, id: RunwayId) -> &Runway {
        &self.runways[id.index()]
    }

    pub fn runways(&self) -> &[Runway; RUNWAY_COUNT] {
        &self.runways
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn served_count(&self) -> u32 {
        self.served_count
    }

    pub fn crash_occurred(&self) -> bool {
        self.crash_occurred
    }

    pub fn is_done(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Get a read-only reference to the flight world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a flight with fixed attributes (for tests needing a known queue).
    #[cfg(test)]
    pub fn spawn_test_flight(
        &mut self,
        fuel: u32,
        priority: atc_core::enums::Priority,
    ) -> atc_core::components::FlightId {
        let id = self.generator.next_id();
        systems::arrivals::spawn_flight(
            &mut self.world,
            &mut self.rng,
            &mut self.generator,
            &self.config,
        );
        for (_entity, flight) in self.world.query_mut::<&mut Flight>() {
            if flight.id == id {
                flight.fuel = fuel;
                flight.priority = priority;
            }
        }
        id
    }

    /// Remove every flight (for tests needing an empty queue).
    #[cfg(test)]
    pub fn clear_flights(&mut self) {
        self.world.clear();
    }

    /// Force a runway cooldown (for tests).
    #[cfg(test)]
    pub fn set_cooldown(&mut self, id: RunwayId, cooldown: u32) {
        self.runways[id.index()].cooldown = cooldown;
    }

    /// Run the per-step systems in order: action, time, cooldowns, cleanup.
    fn run_systems(&mut self, action: Action) {
        let ranked = systems::observation::rank_waiting(&self.world);
        let mut assigned = [false; RUNWAY_COUNT];

        // 1. Landing (uses the pre-step urgency ranking)
        let landing = systems::landing::run(
            &mut self.world,
            &mut self.runways,
            &mut assigned,
            &mut self.rng,
            &self.config,
            &ranked,
            action,
            &mut self.events,
        );
        if let Some(record) = landing {
            self.served_count += 1;
            self.last_landing = Some(record);
        }
        // 2. Fuel burn, waiting, crashes
        let crashes = systems::fuel::run(&mut self.world, &self.config, &mut self.events);
        if crashes > 0 {
            self.crash_occurred = true;
        }
        // 3. Cooldown decay
        systems::runways::run(&mut self.runways, &assigned);
        // 4. Despawn landed and crashed flights
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn check_end(&self) -> Option<EndReason> {
        if self.crash_occurred {
            Some(EndReason::Crash)
        } else if self.served_count >= self.config.max_flights_served {
            Some(EndReason::Served)
        } else if self.step_count >= self.config.max_steps {
            Some(EndReason::StepLimit)
        } else {
            None
        }
    }

    fn waiting_count(&self) -> usize {
        self.world
            .query::<&Flight>()
            .iter()
            .filter(|(_, flight)| flight.is_waiting())
            .count()
    }
}

fn fresh_runways() -> [Runway; RUNWAY_COUNT] {
    RunwayId::ALL.map(Runway::new)
}
