//! Inference Engine - Rule activation and centroid defuzzification.
//!
//! # Algorithm
//! 1. Activation strength of a rule = Σ(membership × weight) / Σ(weight) over
//!    conditions whose input variable is present.
//! 2. Rules at or below the knowledge base's activation threshold are dropped.
//! 3. Each output set is weighted by max(strength × rule confidence) over the
//!    activated rules concluding into it; the crisp output is the weighted mean
//!    of the sets' range midpoints.
//! 4. Confidence is the mean of strength × rule confidence, as a percentage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{FuzzyRule, KnowledgeBase};
use crate::domain::foundation::{clamp_confidence, clamp_unit, round_to};

/// Crisp inputs keyed by variable name.
pub type FuzzyInputs = BTreeMap<String, f64>;

/// A rule that survived the activation threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivatedRule {
    pub rule_id: String,
    pub conclusion_set: String,
    /// Activation strength in `(threshold, 1]`.
    pub strength: f64,
    /// The rule's certainty factor.
    pub confidence: f64,
}

impl ActivatedRule {
    /// Strength scaled by the rule's certainty factor.
    pub fn weighted_strength(&self) -> f64 {
        self.strength * self.confidence
    }
}

/// Result of evaluating all rules scoped to one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyInferenceResult {
    /// Defuzzified value within the output variable's range.
    pub output_value: f64,
    /// Confidence percentage in `[0, 100]`.
    pub confidence: f64,
    pub activated_rules: Vec<ActivatedRule>,
    pub reasoning: Vec<String>,
}

impl FuzzyInferenceResult {
    /// The "no evidence" result.
    pub fn empty() -> Self {
        Self {
            output_value: 0.0,
            confidence: 0.0,
            activated_rules: Vec::new(),
            reasoning: Vec::new(),
        }
    }

    /// Returns true if no rule activated.
    pub fn is_empty(&self) -> bool {
        self.activated_rules.is_empty()
    }
}

/// Computes the activation strength of a rule.
///
/// Conditions whose variable is absent (or non-finite) are skipped. A rule
/// with no evaluable condition has strength 0.
pub fn activation_strength(kb: &KnowledgeBase, rule: &FuzzyRule, inputs: &FuzzyInputs) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for condition in &rule.conditions {
        let Some(value) = inputs.get(&condition.variable).copied() else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        let Some(degree) = kb
            .variable(&condition.variable)
            .and_then(|v| v.degree(&condition.set, value))
        else {
            continue;
        };
        weighted += degree * condition.weight;
        total_weight += condition.weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    clamp_unit(weighted / total_weight)
}

/// Runs inference for the rules scoped to `activity_key`.
///
/// No activated rule yields [`FuzzyInferenceResult::empty`].
pub fn infer(kb: &KnowledgeBase, inputs: &FuzzyInputs, activity_key: &str) -> FuzzyInferenceResult {
    let threshold = kb.activation_threshold();

    let mut activated: Vec<(&FuzzyRule, ActivatedRule)> = kb
        .rules_for(activity_key)
        .filter_map(|rule| {
            let strength = activation_strength(kb, rule, inputs);
            (strength > threshold).then(|| {
                (
                    rule,
                    ActivatedRule {
                        rule_id: rule.id.clone(),
                        conclusion_set: rule.conclusion.set.clone(),
                        strength,
                        confidence: rule.confidence,
                    },
                )
            })
        })
        .collect();

    if activated.is_empty() {
        debug!(activity = activity_key, "No fuzzy rules activated");
        return FuzzyInferenceResult::empty();
    }

    let output = kb.output_variable();
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for set in &output.sets {
        let weight = activated
            .iter()
            .filter(|(_, a)| a.conclusion_set == set.name)
            .map(|(_, a)| a.weighted_strength())
            .fold(0.0, f64::max);
        numerator += set.centroid() * weight;
        denominator += weight;
    }
    let output_value = if denominator > 0.0 {
        output.clamp(numerator / denominator)
    } else {
        0.0
    };

    let mean_weighted = activated
        .iter()
        .map(|(_, a)| a.weighted_strength())
        .sum::<f64>()
        / activated.len() as f64;
    let confidence = clamp_confidence(mean_weighted * 100.0);

    // Strongest evidence first; stable so ties keep declaration order.
    activated.sort_by(|(_, x), (_, y)| y.strength.total_cmp(&x.strength));

    let reasoning = activated
        .iter()
        .map(|(rule, a)| {
            format!(
                "{} ({:.0}% activation)",
                rule.reasoning,
                round_to(a.strength * 100.0, 0)
            )
        })
        .collect();

    debug!(
        activity = activity_key,
        activated = activated.len(),
        output_value,
        confidence,
        "Fuzzy inference complete"
    );

    FuzzyInferenceResult {
        output_value,
        confidence,
        activated_rules: activated.into_iter().map(|(_, a)| a).collect(),
        reasoning,
    }
}
