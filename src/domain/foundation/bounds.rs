//! Clamp helpers for bounded quantities.
//!
//! Every score, confidence and priority produced by the engine passes through
//! one of these helpers so that the published ranges hold uniformly.
//! Non-finite inputs collapse to the lower bound.

/// Recommendation scores live on a 0-100 scale.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Confidence is reported as a percentage.
pub const CONFIDENCE_MIN: f64 = 0.0;
pub const CONFIDENCE_MAX: f64 = 100.0;

/// Opportunity priority uses a 1-10 scale.
pub const PRIORITY_MIN: f64 = 1.0;
pub const PRIORITY_MAX: f64 = 10.0;

/// Clamps `value` into `[min, max]`, mapping NaN and infinities to `min`.
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

/// Clamps a membership degree or fraction into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    clamp_finite(value, 0.0, 1.0)
}

/// Clamps a recommendation score into `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    clamp_finite(value, SCORE_MIN, SCORE_MAX)
}

/// Clamps a confidence percentage into `[0, 100]`.
pub fn clamp_confidence(value: f64) -> f64 {
    clamp_finite(value, CONFIDENCE_MIN, CONFIDENCE_MAX)
}

/// Clamps an opportunity priority into `[1, 10]`.
pub fn clamp_priority(value: f64) -> f64 {
    clamp_finite(value, PRIORITY_MIN, PRIORITY_MAX)
}

/// Divides `numerator` by `denominator`, returning 0 when the denominator is
/// zero or the quotient is not finite.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        quotient
    } else {
        0.0
    }
}

/// Rounds to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds_values() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(250.0), 100.0);
    }

    #[test]
    fn clamp_priority_has_floor_of_one() {
        assert_eq!(clamp_priority(0.0), 1.0);
        assert_eq!(clamp_priority(7.3), 7.3);
        assert_eq!(clamp_priority(11.0), 10.0);
    }

    #[test]
    fn clamp_helpers_map_non_finite_to_lower_bound() {
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 0.0);
        assert_eq!(clamp_priority(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn safe_div_returns_zero_for_zero_denominator() {
        assert_eq!(safe_div(8000.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
    }

    #[test]
    fn safe_div_divides_normally() {
        assert!((safe_div(8000.0, 500.0) - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_to_keeps_requested_places() {
        assert!((round_to(7.346, 1) - 7.3).abs() < 1e-9);
        assert!((round_to(7.35, 0) - 7.0).abs() < 1e-9);
    }
}
