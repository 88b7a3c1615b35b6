//! Fuzzy Module - A small Mamdani-style inference system.
//!
//! # Components
//!
//! - `MembershipFunction` - Triangular, trapezoidal, gaussian and sigmoid shapes
//! - `FuzzyVariable` / `FuzzySet` - Linguistic variables partitioned into named bands
//! - `FuzzyRule` - Weighted-AND rules scoped to an activity key
//! - `KnowledgeBase` - Validated, immutable variable registry plus rule base
//! - `infer` - Rule activation and centroid defuzzification
//!
//! The knowledge base is passed explicitly to [`infer`]; nothing here holds
//! global state. Evaluation is pure and safe to run concurrently.

mod errors;
mod inference;
mod knowledge_base;
mod membership;
mod rule;
mod variable;

pub use errors::FuzzyError;
pub use inference::{activation_strength, infer, ActivatedRule, FuzzyInferenceResult, FuzzyInputs};
pub use knowledge_base::{KnowledgeBase, DEFAULT_ACTIVATION_THRESHOLD};
pub use membership::{MembershipFunction, Shape};
pub use rule::{FuzzyRule, FuzzyRuleBuilder, RuleConclusion, RuleCondition};
pub use variable::{FuzzySet, FuzzyVariable};
