//! Helpers for building wheel sets in tests.

use std::sync::Arc;

use needlewheel_core::{Pattern, WHEEL_COUNT, Wheel};

/// Builds an 8-slot pattern from a hole string, with placeholder symbols.
#[track_caller]
pub(crate) fn pattern(holes: &str) -> Arc<Pattern> {
    Arc::new(Pattern::from_strs("abcdefgh", holes).unwrap())
}

/// Builds the six wheels of a puzzle from `(holes, index)` pairs.
#[track_caller]
pub(crate) fn wheels(spec: [(&str, usize); WHEEL_COUNT]) -> [Wheel; WHEEL_COUNT] {
    spec.map(|(holes, index)| Wheel::new(pattern(holes), index).unwrap())
}
