//! Fuzzy Rules - Weighted condition → conclusion statements scoped to an activity.

use serde::{Deserialize, Serialize};

/// One weighted clause of a rule: "`variable` is `set`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCondition {
    pub variable: String,
    pub set: String,
    pub weight: f64,
}

/// The output set a rule concludes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConclusion {
    pub variable: String,
    pub set: String,
}

/// A weighted-AND rule.
///
/// `applies_to` names the activity key the rule is scoped to. Matching is
/// exact; a rule never fires for any other key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyRule {
    pub id: String,
    pub applies_to: String,
    pub conditions: Vec<RuleCondition>,
    pub conclusion: RuleConclusion,
    /// Certainty factor in `[0, 1]`.
    pub confidence: f64,
    /// Human-readable rationale surfaced when the rule activates.
    pub reasoning: String,
}

impl FuzzyRule {
    /// Creates a builder for a rule scoped to `applies_to`.
    pub fn builder(id: impl Into<String>, applies_to: impl Into<String>) -> FuzzyRuleBuilder {
        FuzzyRuleBuilder::new(id, applies_to)
    }

    /// Returns true if the rule is scoped to the given activity key.
    pub fn applies_to(&self, activity_key: &str) -> bool {
        self.applies_to == activity_key
    }

    /// Sum of the condition weights.
    pub fn total_weight(&self) -> f64 {
        self.conditions.iter().map(|c| c.weight).sum()
    }
}

/// Builder for [`FuzzyRule`]. Validation happens when the rule is added to a
/// knowledge base.
#[derive(Debug, Clone)]
pub struct FuzzyRuleBuilder {
    id: String,
    applies_to: String,
    conditions: Vec<RuleCondition>,
    conclusion: Option<RuleConclusion>,
    confidence: f64,
    reasoning: String,
}

impl FuzzyRuleBuilder {
    /// Creates a new builder with full confidence and no conditions.
    pub fn new(id: impl Into<String>, applies_to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            applies_to: applies_to.into(),
            conditions: Vec::new(),
            conclusion: None,
            confidence: 1.0,
            reasoning: String::new(),
        }
    }

    /// Adds a weighted condition.
    pub fn when(mut self, variable: impl Into<String>, set: impl Into<String>, weight: f64) -> Self {
        self.conditions.push(RuleCondition {
            variable: variable.into(),
            set: set.into(),
            weight,
        });
        self
    }

    /// Sets the conclusion.
    pub fn then(mut self, variable: impl Into<String>, set: impl Into<String>) -> Self {
        self.conclusion = Some(RuleConclusion {
            variable: variable.into(),
            set: set.into(),
        });
        self
    }

    /// Sets the certainty factor.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the rationale.
    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Builds the rule. A missing conclusion leaves both fields empty, which
    /// the knowledge base rejects.
    pub fn build(self) -> FuzzyRule {
        FuzzyRule {
            id: self.id,
            applies_to: self.applies_to,
            conditions: self.conditions,
            conclusion: self.conclusion.unwrap_or(RuleConclusion {
                variable: String::new(),
                set: String::new(),
            }),
            confidence: self.confidence,
            reasoning: self.reasoning,
        }
    }
}
