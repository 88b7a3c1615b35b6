//! Recommendation engine tunables

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::fuzzy::DEFAULT_ACTIVATION_THRESHOLD;
use crate::domain::marketing::{PlanLimits, RecommendationOptions};

/// Engine configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Rules at or below this activation strength are discarded
    #[serde(default = "default_activation_threshold")]
    pub activation_threshold: f64,

    /// Recommendations must score strictly above this
    #[serde(default = "default_min_recommendation_score")]
    pub min_recommendation_score: f64,

    /// Maximum number of recommendations returned
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Number of top recommendations turned into activation tasks
    #[serde(default = "default_activation_task_count")]
    pub activation_task_count: usize,

    #[serde(default = "default_bucket_cap")]
    pub max_immediate_tasks: usize,

    #[serde(default = "default_bucket_cap")]
    pub max_short_term_tasks: usize,

    /// Short-term bucket is back-filled with medium tasks below this
    #[serde(default = "default_min_short_term_tasks")]
    pub min_short_term_tasks: usize,

    #[serde(default = "default_bucket_cap")]
    pub max_long_term_tasks: usize,

    #[serde(default = "default_critical_path_length")]
    pub critical_path_length: usize,
}

impl EngineConfig {
    /// Options for the recommendation aggregator
    pub fn recommendation_options(&self) -> RecommendationOptions {
        RecommendationOptions {
            min_score: self.min_recommendation_score,
            max_results: self.max_recommendations,
        }
    }

    /// Bucket limits for the next-steps planner
    pub fn plan_limits(&self) -> PlanLimits {
        PlanLimits {
            activation_task_count: self.activation_task_count,
            max_immediate_tasks: self.max_immediate_tasks,
            max_short_term_tasks: self.max_short_term_tasks,
            min_short_term_tasks: self.min_short_term_tasks,
            max_long_term_tasks: self.max_long_term_tasks,
            critical_path_length: self.critical_path_length,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..1.0).contains(&self.activation_threshold) {
            return Err(ValidationError::InvalidActivationThreshold(self.activation_threshold));
        }
        if !(0.0..100.0).contains(&self.min_recommendation_score) {
            return Err(ValidationError::InvalidMinimumScore(self.min_recommendation_score));
        }
        let limits = [
            ("max_recommendations", self.max_recommendations),
            ("activation_task_count", self.activation_task_count),
            ("max_immediate_tasks", self.max_immediate_tasks),
            ("max_short_term_tasks", self.max_short_term_tasks),
            ("max_long_term_tasks", self.max_long_term_tasks),
            ("critical_path_length", self.critical_path_length),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == 0) {
            return Err(ValidationError::ZeroLimit(name));
        }
        if self.min_short_term_tasks > self.max_short_term_tasks {
            return Err(ValidationError::InvalidShortTermBounds);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation_threshold: default_activation_threshold(),
            min_recommendation_score: default_min_recommendation_score(),
            max_recommendations: default_max_recommendations(),
            activation_task_count: default_activation_task_count(),
            max_immediate_tasks: default_bucket_cap(),
            max_short_term_tasks: default_bucket_cap(),
            min_short_term_tasks: default_min_short_term_tasks(),
            max_long_term_tasks: default_bucket_cap(),
            critical_path_length: default_critical_path_length(),
        }
    }
}

fn default_activation_threshold() -> f64 {
    DEFAULT_ACTIVATION_THRESHOLD
}

fn default_min_recommendation_score() -> f64 {
    10.0
}

fn default_max_recommendations() -> usize {
    8
}

fn default_activation_task_count() -> usize {
    3
}

fn default_bucket_cap() -> usize {
    4
}

fn default_min_short_term_tasks() -> usize {
    2
}

fn default_critical_path_length() -> usize {
    5
}
