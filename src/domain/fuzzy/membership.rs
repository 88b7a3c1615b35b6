//! Membership Functions - Map a crisp value to a degree of truth in [0, 1].
//!
//! Shape parameters are validated when a function is built, so evaluation is
//! total: any `f64` (including NaN) yields a value in `[0, 1]`.

use serde::{Deserialize, Serialize};

use super::FuzzyError;
use crate::domain::foundation::clamp_unit;

/// Number of standard deviations treated as the support of a gaussian.
const GAUSSIAN_SUPPORT_SIGMAS: f64 = 3.0;

/// The shape of a membership function together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { center: f64, sigma: f64 },
    Sigmoid { steepness: f64, center: f64 },
}

/// A validated membership function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MembershipFunction {
    shape: Shape,
}

impl MembershipFunction {
    /// Triangle rising from `a` to a peak of 1 at `b`, falling to 0 at `c`.
    ///
    /// `a == b` or `b == c` produce a vertical edge (step) at the peak.
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        let params = [a, b, c];
        if !all_finite(&params) {
            return Err(FuzzyError::invalid_shape("triangular", &params, "parameters must be finite"));
        }
        if !(a <= b && b <= c) {
            return Err(FuzzyError::invalid_shape("triangular", &params, "requires a <= b <= c"));
        }
        if a == c {
            return Err(FuzzyError::invalid_shape("triangular", &params, "support must not be empty"));
        }
        Ok(Self {
            shape: Shape::Triangular { a, b, c },
        })
    }

    /// Trapezoid with a plateau of 1 on `[b, c]` and linear ramps on
    /// `[a, b]` and `[c, d]`.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self, FuzzyError> {
        let params = [a, b, c, d];
        if !all_finite(&params) {
            return Err(FuzzyError::invalid_shape("trapezoidal", &params, "parameters must be finite"));
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::invalid_shape("trapezoidal", &params, "requires a <= b <= c <= d"));
        }
        if a == d {
            return Err(FuzzyError::invalid_shape("trapezoidal", &params, "support must not be empty"));
        }
        Ok(Self {
            shape: Shape::Trapezoidal { a, b, c, d },
        })
    }

    /// Bell curve `exp(-0.5 * ((x - center) / sigma)^2)`.
    pub fn gaussian(center: f64, sigma: f64) -> Result<Self, FuzzyError> {
        let params = [center, sigma];
        if !all_finite(&params) {
            return Err(FuzzyError::invalid_shape("gaussian", &params, "parameters must be finite"));
        }
        if sigma <= 0.0 {
            return Err(FuzzyError::invalid_shape("gaussian", &params, "sigma must be positive"));
        }
        Ok(Self {
            shape: Shape::Gaussian { center, sigma },
        })
    }

    /// Logistic curve `1 / (1 + exp(-steepness * (x - center)))`.
    ///
    /// Negative steepness yields a falling curve.
    pub fn sigmoid(steepness: f64, center: f64) -> Result<Self, FuzzyError> {
        let params = [steepness, center];
        if !all_finite(&params) {
            return Err(FuzzyError::invalid_shape("sigmoid", &params, "parameters must be finite"));
        }
        Ok(Self {
            shape: Shape::Sigmoid { steepness, center },
        })
    }

    /// Returns the validated shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Evaluates the membership degree of `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let degree = match self.shape {
            Shape::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.0
                } else if x == b {
                    1.0
                } else if x < b {
                    // a < x < b here, so b - a > 0
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            Shape::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
            Shape::Gaussian { center, sigma } => {
                let z = (x - center) / sigma;
                (-0.5 * z * z).exp()
            }
            Shape::Sigmoid { steepness, center } => {
                1.0 / (1.0 + (-steepness * (x - center)).exp())
            }
        };

        clamp_unit(degree)
    }

    /// Interval outside of which the function is zero, if it has one.
    ///
    /// Gaussians report `center ± 3σ`; sigmoids have no bounded support.
    pub fn support(&self) -> Option<(f64, f64)> {
        match self.shape {
            Shape::Triangular { a, c, .. } => Some((a, c)),
            Shape::Trapezoidal { a, d, .. } => Some((a, d)),
            Shape::Gaussian { center, sigma } => Some((
                center - GAUSSIAN_SUPPORT_SIGMAS * sigma,
                center + GAUSSIAN_SUPPORT_SIGMAS * sigma,
            )),
            Shape::Sigmoid { .. } => None,
        }
    }
}

fn all_finite(params: &[f64]) -> bool {
    params.iter().all(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn triangular_peaks_at_b() {
        let mf = MembershipFunction::triangular(1.0, 2.5, 4.0).unwrap();
        assert!((mf.evaluate(2.5) - 1.0).abs() < EPS);
    }

    #[test]
    fn triangular_ramps_linearly() {
        let mf = MembershipFunction::triangular(0.0, 10.0, 20.0).unwrap();
        assert!((mf.evaluate(5.0) - 0.5).abs() < EPS);
        assert!((mf.evaluate(15.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn triangular_is_zero_outside_support() {
        let mf = MembershipFunction::triangular(1.0, 2.0, 3.0).unwrap();
        assert_eq!(mf.evaluate(0.5), 0.0);
        assert_eq!(mf.evaluate(3.5), 0.0);
        assert_eq!(mf.evaluate(1.0), 0.0);
    }

    #[test]
    fn triangular_degenerate_left_edge_is_a_step() {
        let mf = MembershipFunction::triangular(0.0, 0.0, 10.0).unwrap();
        assert_eq!(mf.evaluate(0.0), 1.0);
        assert!((mf.evaluate(5.0) - 0.5).abs() < EPS);
        assert_eq!(mf.evaluate(-0.1), 0.0);
    }

    #[test]
    fn triangular_degenerate_right_edge_is_a_step() {
        let mf = MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap();
        assert_eq!(mf.evaluate(10.0), 1.0);
        assert_eq!(mf.evaluate(10.1), 0.0);
        assert!((mf.evaluate(5.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn triangular_rejects_misordered_parameters() {
        let result = MembershipFunction::triangular(3.0, 1.0, 2.0);
        assert!(matches!(result, Err(FuzzyError::InvalidShape { shape: "triangular", .. })));
    }

    #[test]
    fn triangular_rejects_empty_support() {
        assert!(MembershipFunction::triangular(2.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn trapezoidal_plateau_is_one() {
        let mf = MembershipFunction::trapezoidal(0.0, 2.0, 4.0, 6.0).unwrap();
        for x in [2.0, 2.5, 3.0, 3.9, 4.0] {
            assert_eq!(mf.evaluate(x), 1.0, "x = {}", x);
        }
    }

    #[test]
    fn trapezoidal_ramps_on_both_sides() {
        let mf = MembershipFunction::trapezoidal(0.0, 2.0, 4.0, 8.0).unwrap();
        assert!((mf.evaluate(1.0) - 0.5).abs() < EPS);
        assert!((mf.evaluate(6.0) - 0.5).abs() < EPS);
        assert_eq!(mf.evaluate(9.0), 0.0);
    }

    #[test]
    fn trapezoidal_shoulder_includes_left_edge() {
        let mf = MembershipFunction::trapezoidal(0.0, 0.0, 10.0, 25.0).unwrap();
        assert_eq!(mf.evaluate(0.0), 1.0);
    }

    #[test]
    fn trapezoidal_rejects_misordered_parameters() {
        assert!(MembershipFunction::trapezoidal(0.0, 5.0, 4.0, 6.0).is_err());
    }

    #[test]
    fn gaussian_peaks_at_center() {
        let mf = MembershipFunction::gaussian(45.0, 12.0).unwrap();
        assert!((mf.evaluate(45.0) - 1.0).abs() < EPS);
        assert!(mf.evaluate(57.0) < 1.0);
        assert!((mf.evaluate(57.0) - (-0.5f64).exp()).abs() < EPS);
    }

    #[test]
    fn gaussian_rejects_non_positive_sigma() {
        assert!(MembershipFunction::gaussian(0.0, 0.0).is_err());
        assert!(MembershipFunction::gaussian(0.0, -1.0).is_err());
    }

    #[test]
    fn sigmoid_is_half_at_center() {
        let mf = MembershipFunction::sigmoid(0.5, 10.0).unwrap();
        assert!((mf.evaluate(10.0) - 0.5).abs() < EPS);
        assert!(mf.evaluate(20.0) > 0.9);
        assert!(mf.evaluate(0.0) < 0.1);
    }

    #[test]
    fn sigmoid_with_negative_steepness_falls() {
        let mf = MembershipFunction::sigmoid(-1.0, 0.0).unwrap();
        assert!(mf.evaluate(-5.0) > mf.evaluate(5.0));
    }

    #[test]
    fn evaluate_nan_is_zero() {
        let mf = MembershipFunction::gaussian(0.0, 1.0).unwrap();
        assert_eq!(mf.evaluate(f64::NAN), 0.0);
    }

    #[test]
    fn support_reports_bounds() {
        let tri = MembershipFunction::triangular(1.0, 2.0, 3.0).unwrap();
        assert_eq!(tri.support(), Some((1.0, 3.0)));
        let sig = MembershipFunction::sigmoid(1.0, 0.0).unwrap();
        assert_eq!(sig.support(), None);
    }

    #[test]
    fn shape_serializes_with_tag() {
        let mf = MembershipFunction::triangular(1.0, 2.0, 3.0).unwrap();
        let json = serde_json::to_string(&mf).unwrap();
        assert!(json.contains("\"shape\":\"triangular\""));
    }

    proptest! {
        #[test]
        fn triangular_output_is_in_unit_interval(
            a in -100.0f64..100.0,
            width_left in 0.0f64..50.0,
            width_right in 0.1f64..50.0,
            x in -500.0f64..500.0,
        ) {
            let b = a + width_left;
            let c = b + width_right;
            let mf = MembershipFunction::triangular(a, b, c).unwrap();
            let y = mf.evaluate(x);
            prop_assert!((0.0..=1.0).contains(&y));
            if x < a || x > c {
                prop_assert_eq!(y, 0.0);
            }
        }

        #[test]
        fn trapezoidal_plateau_holds(
            a in -100.0f64..100.0,
            ramp in 0.0f64..20.0,
            plateau in 0.0f64..20.0,
            tail in 0.1f64..20.0,
            t in 0.0f64..=1.0,
        ) {
            let b = a + ramp;
            let c = b + plateau;
            let d = c + tail;
            let mf = MembershipFunction::trapezoidal(a, b, c, d).unwrap();
            let x = (b + t * (c - b)).clamp(b, c);
            prop_assert_eq!(mf.evaluate(x), 1.0);
        }

        #[test]
        fn gaussian_and_sigmoid_stay_in_unit_interval(
            center in -100.0f64..100.0,
            spread in 0.01f64..50.0,
            x in -1e6f64..1e6,
        ) {
            let g = MembershipFunction::gaussian(center, spread).unwrap().evaluate(x);
            let s = MembershipFunction::sigmoid(spread, center).unwrap().evaluate(x);
            prop_assert!((0.0..=1.0).contains(&g));
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
