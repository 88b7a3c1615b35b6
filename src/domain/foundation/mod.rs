//! Foundation module - Shared numeric primitives.
//!
//! Named clamp helpers for every bounded quantity, plus guarded division
//! and rounding, so range invariants hold uniformly across the domain.

mod bounds;

pub use bounds::{
    clamp_confidence, clamp_finite, clamp_priority, clamp_score, clamp_unit, round_to, safe_div,
    CONFIDENCE_MAX, CONFIDENCE_MIN, PRIORITY_MAX, PRIORITY_MIN, SCORE_MAX, SCORE_MIN,
};
