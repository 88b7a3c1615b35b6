//! Error types for fuzzy knowledge-base construction.

use thiserror::Error;

/// Errors raised while building membership functions, variables, and rules.
///
/// These are programmer errors in calibration tables. Evaluation itself never
/// fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("Invalid {shape} shape parameters {params:?}: {reason}")]
    InvalidShape {
        shape: &'static str,
        params: Vec<f64>,
        reason: &'static str,
    },

    #[error("Variable '{variable}' has invalid range [{min}, {max}]")]
    InvalidRange { variable: String, min: f64, max: f64 },

    #[error("Variable '{0}' is defined more than once")]
    DuplicateVariable(String),

    #[error("Variable '{variable}' defines set '{set}' more than once")]
    DuplicateSet { variable: String, set: String },

    #[error("Variable '{0}' has no fuzzy sets")]
    EmptyVariable(String),

    #[error("Unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("Variable '{variable}' has no set named '{set}'")]
    UnknownSet { variable: String, set: String },

    #[error("Rule '{rule}' has no conditions")]
    EmptyRule { rule: String },

    #[error("Rule '{rule}' has non-positive condition weight {weight}")]
    InvalidWeight { rule: String, weight: f64 },

    #[error("Rule '{rule}' has confidence {confidence} outside [0, 1]")]
    InvalidConfidence { rule: String, confidence: f64 },

    #[error("Rule '{rule}' concludes into '{variable}' instead of the output variable '{expected}'")]
    ConclusionNotOutput {
        rule: String,
        variable: String,
        expected: String,
    },

    #[error("Rule id '{0}' is defined more than once")]
    DuplicateRule(String),
}

impl FuzzyError {
    pub(crate) fn invalid_shape(
        shape: &'static str,
        params: &[f64],
        reason: &'static str,
    ) -> Self {
        FuzzyError::InvalidShape {
            shape,
            params: params.to_vec(),
            reason,
        }
    }
}
