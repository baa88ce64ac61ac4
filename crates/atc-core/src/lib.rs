//! Core types and definitions for the landing-queue simulation.
//!
//! This crate defines the vocabulary shared by the engine and any controller
//! or renderer: components, actions, events, observation and snapshot types,
//! configuration, errors, and constants. It has no dependency on the ECS or
//! the random number source.

pub mod actions;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;

#[cfg(test)]
mod tests;
