//! Simulation engine for the two-runway landing queue.
//!
//! Owns the hecs world of flights, the runways, and the seeded RNG; runs the
//! per-step systems in a fixed order and produces observations, rewards, and
//! scene snapshots. Completely headless, so every episode is reproducible
//! from its seed.

pub mod engine;
pub mod episode;
pub mod systems;

pub use atc_core as core;
pub use atc_core::config::SimConfig;
pub use engine::AtcEngine;
