//! Alignment checking and solving for the needlewheel puzzle.
//!
//! - [`AlignmentReport`] / [`evaluate`]: decide whether a set of wheels shows
//!   a full row of circular holes and no full row of triangular holes.
//! - [`Odometer`]: mixed-radix counter used to walk rotation space.
//! - [`solve`]: exhaustive search for winning rotations of the playable wheels.
//! - [`plan_rotation`]: shortest way to turn a wheel onto a target index.

pub use self::{alignment::*, error::*, odometer::*, rotation::*, search::*};

mod alignment;
mod error;
mod odometer;
mod rotation;
mod search;

#[cfg(test)]
mod testing;
