//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind `SimConfig`; the engine reads tunables from
//! the config, never from here directly.

// --- Runways ---

/// Number of runways. Fixed for the lifetime of the engine.
pub const RUNWAY_COUNT: usize = 2;

/// Shortest cooldown drawn after a landing (steps).
pub const RUNWAY_COOLDOWN_MIN: u32 = 3;

/// Longest cooldown drawn after a landing (steps, inclusive).
pub const RUNWAY_COOLDOWN_MAX: u32 = 5;

// --- Arrivals ---

/// Steps between arrival batches. Step 0 always spawns.
pub const SPAWN_INTERVAL_STEPS: u64 = 5;

/// Fewest flights in one arrival batch.
pub const SPAWN_BATCH_MIN: u32 = 1;

/// Most flights in one arrival batch (inclusive).
pub const SPAWN_BATCH_MAX: u32 = 3;

/// Lowest initial fuel (steps of holding).
pub const FUEL_MIN: u32 = 5;

/// Highest initial fuel (inclusive).
pub const FUEL_MAX: u32 = 20;

/// Probability that a new flight declares an emergency.
pub const EMERGENCY_PROBABILITY: f64 = 0.05;

/// Airline prefixes used for generated call-signs.
pub const AIRLINE_CODES: [&str; 20] = [
    "AF", "DL", "UA", "AA", "BA", "LH", "EK", "QF", "JL", "SQ", "AI", "KL", "VS", "IB", "AZ",
    "TK", "EY", "QR", "CX", "NH",
];

/// Lowest call-sign flight number.
pub const CALLSIGN_NUMBER_MIN: u32 = 100;

/// Highest call-sign flight number (inclusive).
pub const CALLSIGN_NUMBER_MAX: u32 = 999;

// --- Observation / action space ---

/// Number of waiting flights visible to a controller.
pub const TOP_FLIGHTS: usize = 5;

/// Values contributed per visible flight: fuel, wait time, priority.
pub const FLIGHT_FEATURES: usize = 3;

/// Length of the observation vector.
pub const OBSERVATION_LEN: usize = RUNWAY_COUNT + TOP_FLIGHTS * FLIGHT_FEATURES;

/// Number of landing actions (slot x runway grid).
pub const LANDING_ACTIONS: usize = TOP_FLIGHTS * RUNWAY_COUNT;

/// The DO_NOTHING action index.
pub const ACTION_DO_NOTHING: i64 = LANDING_ACTIONS as i64;

/// Size of the discrete action space.
pub const ACTION_COUNT: usize = LANDING_ACTIONS + 1;

// --- Episode limits ---

/// Landings after which the episode is complete.
pub const MAX_FLIGHTS_SERVED: u32 = 200;

/// Steps after which the episode is truncated.
pub const MAX_STEPS: u64 = 2000;

// --- Reward shaping ---

/// Wait time above which a waiting flight is penalized every step.
pub const HIGH_WAIT_THRESHOLD: u32 = 10;

/// Wait time below which a waiting flight earns the low-wait bonus.
pub const LOW_WAIT_THRESHOLD: u32 = 5;

pub const REWARD_LANDING: f64 = 10.0;
pub const REWARD_EMERGENCY_LANDING: f64 = 20.0;
pub const PENALTY_CRASH: f64 = -50.0;
pub const PENALTY_EMERGENCY_CRASH: f64 = -100.0;
pub const PENALTY_BLOCKED_RUNWAY: f64 = -15.0;
pub const PENALTY_INVALID_FLIGHT: f64 = -5.0;
pub const PENALTY_HIGH_WAIT: f64 = -2.0;
pub const PENALTY_IDLE: f64 = -10.0;

/// Per-flight bonus for short waits. Off by default.
pub const BONUS_LOW_WAIT: f64 = 0.0;
