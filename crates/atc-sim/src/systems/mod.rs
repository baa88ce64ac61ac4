//! Systems that operate on the flight world each step.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). They hold no state of their own apart from the arrival
//! generator's id counter.

pub mod arrivals;
pub mod cleanup;
pub mod fuel;
pub mod landing;
pub mod observation;
pub mod reward;
pub mod runways;
pub mod snapshot;
