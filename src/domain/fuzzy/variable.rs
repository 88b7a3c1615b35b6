//! Linguistic variables and the fuzzy sets that partition them.

use serde::Serialize;
use std::collections::HashSet;

use super::{FuzzyError, MembershipFunction};

/// A named band of a variable's range with its membership function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzySet {
    pub name: String,
    pub membership: MembershipFunction,
    /// Declared support. Membership is 0 outside of it.
    pub range: (f64, f64),
}

impl FuzzySet {
    /// Creates a set whose range is the membership function's support.
    ///
    /// Functions without bounded support (sigmoids) must use [`FuzzySet::with_range`].
    pub fn new(name: impl Into<String>, membership: MembershipFunction) -> Result<Self, FuzzyError> {
        let name = name.into();
        let range = membership.support().ok_or_else(|| FuzzyError::InvalidRange {
            variable: name.clone(),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        })?;
        Ok(Self {
            name,
            membership,
            range,
        })
    }

    /// Creates a set with an explicit range.
    pub fn with_range(
        name: impl Into<String>,
        membership: MembershipFunction,
        min: f64,
        max: f64,
    ) -> Result<Self, FuzzyError> {
        let name = name.into();
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(FuzzyError::InvalidRange {
                variable: name,
                min,
                max,
            });
        }
        Ok(Self {
            name,
            membership,
            range: (min, max),
        })
    }

    /// Membership degree of `x`, zero outside the declared range.
    pub fn degree(&self, x: f64) -> f64 {
        let (min, max) = self.range;
        if x.is_nan() || x < min || x > max {
            return 0.0;
        }
        self.membership.evaluate(x)
    }

    /// Midpoint of the declared range, used for centroid defuzzification.
    pub fn centroid(&self) -> f64 {
        (self.range.0 + self.range.1) / 2.0
    }
}

/// A named linguistic variable with an ordered list of fuzzy sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyVariable {
    pub name: String,
    pub range: (f64, f64),
    pub sets: Vec<FuzzySet>,
}

impl FuzzyVariable {
    /// Creates a variable, clipping each set's range to the variable's range.
    ///
    /// # Errors
    /// - Range is empty or not finite
    /// - No sets, or duplicate set names
    /// - A set whose range does not intersect the variable's range
    pub fn new(
        name: impl Into<String>,
        min: f64,
        max: f64,
        sets: Vec<FuzzySet>,
    ) -> Result<Self, FuzzyError> {
        let name = name.into();
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(FuzzyError::InvalidRange {
                variable: name,
                min,
                max,
            });
        }
        if sets.is_empty() {
            return Err(FuzzyError::EmptyVariable(name));
        }

        let mut seen = HashSet::new();
        let mut clipped = Vec::with_capacity(sets.len());
        for mut set in sets {
            if !seen.insert(set.name.clone()) {
                return Err(FuzzyError::DuplicateSet {
                    variable: name,
                    set: set.name,
                });
            }
            let lo = set.range.0.max(min);
            let hi = set.range.1.min(max);
            if lo >= hi {
                return Err(FuzzyError::InvalidRange {
                    variable: format!("{}.{}", name, set.name),
                    min: set.range.0,
                    max: set.range.1,
                });
            }
            set.range = (lo, hi);
            clipped.push(set);
        }

        Ok(Self {
            name,
            range: (min, max),
            sets: clipped,
        })
    }

    /// Looks up a set by name.
    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Clamps a crisp value into the variable's range.
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.range.0, self.range.1)
    }

    /// Membership degree of `x` in the named set, after clamping to range.
    pub fn degree(&self, set_name: &str, x: f64) -> Option<f64> {
        self.set(set_name).map(|s| s.degree(self.clamp(x)))
    }

    /// Degrees of `x` in every set, in declaration order.
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        let x = self.clamp(x);
        self.sets
            .iter()
            .map(|s| (s.name.as_str(), s.degree(x)))
            .collect()
    }
}
