//! Knowledge Base - The immutable variable registry and rule base.
//!
//! Built once and shared read-only across inference calls. All validation
//! happens here so that inference never has to handle malformed rules.

use serde::Serialize;
use std::collections::HashSet;

use super::{FuzzyError, FuzzyRule, FuzzyVariable};

/// Rules activating at or below this strength are treated as noise.
pub const DEFAULT_ACTIVATION_THRESHOLD: f64 = 0.1;

/// Validated linguistic variables plus the rules that reference them.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    variables: Vec<FuzzyVariable>,
    output_variable: String,
    rules: Vec<FuzzyRule>,
    activation_threshold: f64,
}

impl KnowledgeBase {
    /// Creates a knowledge base.
    ///
    /// # Errors
    /// - Duplicate variable names or rule ids
    /// - `output_variable` is not among `variables`
    /// - A rule references an unknown variable or set, has no conditions,
    ///   a non-positive weight, a confidence outside `[0, 1]`, or a
    ///   conclusion that does not target the output variable
    pub fn new(
        variables: Vec<FuzzyVariable>,
        output_variable: impl Into<String>,
        rules: Vec<FuzzyRule>,
    ) -> Result<Self, FuzzyError> {
        let output_variable = output_variable.into();

        let mut names = HashSet::new();
        for var in &variables {
            if !names.insert(var.name.as_str()) {
                return Err(FuzzyError::DuplicateVariable(var.name.clone()));
            }
        }
        if !names.contains(output_variable.as_str()) {
            return Err(FuzzyError::UnknownVariable(output_variable));
        }

        let kb = Self {
            variables,
            output_variable,
            rules: Vec::new(),
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
        };

        let mut ids = HashSet::new();
        for rule in &rules {
            if !ids.insert(rule.id.as_str()) {
                return Err(FuzzyError::DuplicateRule(rule.id.clone()));
            }
            kb.validate_rule(rule)?;
        }

        Ok(Self { rules, ..kb })
    }

    /// Overrides the activation noise floor.
    pub fn with_activation_threshold(mut self, threshold: f64) -> Self {
        self.activation_threshold = threshold;
        self
    }

    fn validate_rule(&self, rule: &FuzzyRule) -> Result<(), FuzzyError> {
        if rule.conditions.is_empty() {
            return Err(FuzzyError::EmptyRule {
                rule: rule.id.clone(),
            });
        }
        for condition in &rule.conditions {
            if !(condition.weight.is_finite() && condition.weight > 0.0) {
                return Err(FuzzyError::InvalidWeight {
                    rule: rule.id.clone(),
                    weight: condition.weight,
                });
            }
            self.require_set(&condition.variable, &condition.set)?;
        }
        if !(0.0..=1.0).contains(&rule.confidence) {
            return Err(FuzzyError::InvalidConfidence {
                rule: rule.id.clone(),
                confidence: rule.confidence,
            });
        }
        if rule.conclusion.variable != self.output_variable {
            return Err(FuzzyError::ConclusionNotOutput {
                rule: rule.id.clone(),
                variable: rule.conclusion.variable.clone(),
                expected: self.output_variable.clone(),
            });
        }
        self.require_set(&rule.conclusion.variable, &rule.conclusion.set)
    }

    fn require_set(&self, variable: &str, set: &str) -> Result<(), FuzzyError> {
        let var = self
            .variable(variable)
            .ok_or_else(|| FuzzyError::UnknownVariable(variable.to_string()))?;
        if var.set(set).is_none() {
            return Err(FuzzyError::UnknownSet {
                variable: variable.to_string(),
                set: set.to_string(),
            });
        }
        Ok(())
    }

    /// Looks up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&FuzzyVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// All variables in declaration order.
    pub fn variables(&self) -> &[FuzzyVariable] {
        &self.variables
    }

    /// Variables other than the output variable.
    pub fn input_variables(&self) -> impl Iterator<Item = &FuzzyVariable> {
        self.variables
            .iter()
            .filter(move |v| v.name != self.output_variable)
    }

    /// The variable every rule concludes into.
    pub fn output_variable(&self) -> &FuzzyVariable {
        // validated in `new`
        self.variables
            .iter()
            .find(|v| v.name == self.output_variable)
            .unwrap_or(&self.variables[0])
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    /// Rules scoped to the given activity key.
    pub fn rules_for<'a>(&'a self, activity_key: &'a str) -> impl Iterator<Item = &'a FuzzyRule> {
        self.rules.iter().filter(move |r| r.applies_to(activity_key))
    }

    /// The activation noise floor.
    pub fn activation_threshold(&self) -> f64 {
        self.activation_threshold
    }
}
