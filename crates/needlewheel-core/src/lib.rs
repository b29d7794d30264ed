//! Core data structures for the needlewheel puzzle.
//!
//! The puzzle is a stack of rotating wheels. Each wheel is engraved with a
//! repeating [`Pattern`] of symbols and holes, and all wheels are compared on a
//! common ring of [`RING_SLOTS`] angular slots.
//!
//! # Overview
//!
//! 1. **Hole kinds** - [`hole`]: what is cut out at one slot of a pattern
//!    ([`HoleKind::None`], [`HoleKind::Circle`] or [`HoleKind::Triangle`]).
//! 2. **Patterns** - [`pattern`]: immutable symbol/hole templates whose length
//!    evenly tiles the ring.
//! 3. **Wheels** - [`wheel`]: a shared pattern plus the current rotation.
//! 4. **Catalog** - [`catalog`]: the twelve playable patterns and the 4x3
//!    bonus pattern table.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use needlewheel_core::{HoleKind, Pattern, Wheel};
//!
//! let pattern = Arc::new(Pattern::from_strs("+-]!<0#<", "O.^^^.OO")?);
//! let mut wheel = Wheel::new(pattern, 0)?;
//! assert_eq!(wheel.label(), '+');
//! assert_eq!(wheel.hole_at(0), HoleKind::Circle);
//!
//! wheel.rotate_up();
//! assert_eq!(wheel.label(), '-');
//! assert_eq!(wheel.hole_at(0), HoleKind::None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod error;
pub mod hole;
pub mod pattern;
pub mod wheel;

pub use self::{
    error::{PatternError, WheelError},
    hole::HoleKind,
    pattern::Pattern,
    wheel::Wheel,
};

/// Number of angular slots on the common comparison ring.
///
/// Every pattern length must evenly divide this value.
pub const RING_SLOTS: usize = 8;

/// Number of wheels the player rotates.
pub const PLAYABLE_WHEELS: usize = 5;

/// Number of wheels taking part in an alignment: the playable wheels plus the bonus wheel.
pub const WHEEL_COUNT: usize = PLAYABLE_WHEELS + 1;
