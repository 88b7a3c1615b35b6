//! Recommendation Aggregator - Fuzzy scores joined with opportunity costs.
//!
//! For every activity the tenant does not run yet, the standard inference is
//! evaluated and cross-referenced with the activity's opportunity cost to
//! build an implementation plan, prerequisites and risks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::benchmarks::get_intelligent_defaults;
use super::catalog::{activity_profile, prerequisites_for, risks_for};
use super::fuzzy_inputs::calculate_fuzzy_inputs;
use super::maturity::assess_company_maturity;
use super::opportunity_cost::{calculate_opportunity_costs, OpportunityCost};
use super::roi_metrics::{fill_costs, fill_kpis};
use super::{CurrentCosts, CurrentKpis, MarketingActivity, SalesActivities};
use crate::domain::foundation::{clamp_confidence, clamp_score, round_to};
use crate::domain::fuzzy::{infer, KnowledgeBase};

/// Priority bucket derived from a recommendation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    NotRecommended,
    Low,
    Medium,
    High,
    Critical,
}

impl RecommendationPriority {
    /// Buckets a score at thresholds 90 / 70 / 45 / 25.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            RecommendationPriority::Critical
        } else if score >= 70.0 {
            RecommendationPriority::High
        } else if score >= 45.0 {
            RecommendationPriority::Medium
        } else if score >= 25.0 {
            RecommendationPriority::Low
        } else {
            RecommendationPriority::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationPriority::Critical => "critical",
            RecommendationPriority::High => "high",
            RecommendationPriority::Medium => "medium",
            RecommendationPriority::Low => "low",
            RecommendationPriority::NotRecommended => "not_recommended",
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How and when to roll out a recommended activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationPlan {
    pub phase: String,
    pub timeframe: String,
    pub resources: Vec<String>,
    /// ROI percentage from the opportunity-cost model.
    pub expected_roi: f64,
    pub estimated_cost: f64,
}

/// A scored recommendation for one inactive activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyLogicRecommendation {
    pub activity: MarketingActivity,
    /// Defuzzified score in `[0, 100]`.
    pub score: f64,
    /// Inference confidence in `[0, 100]`.
    pub confidence: f64,
    pub priority: RecommendationPriority,
    pub reasoning: Vec<String>,
    pub implementation_plan: ImplementationPlan,
    pub prerequisites: Vec<String>,
    pub risks: Vec<String>,
}

/// Filtering and truncation applied to the scored list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOptions {
    /// Recommendations must score strictly above this.
    pub min_score: f64,
    pub max_results: usize,
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            min_score: 10.0,
            max_results: 8,
        }
    }
}

/// Human-readable rollout window for an implementation time.
pub fn timeframe_for(months: f64) -> &'static str {
    if months <= 1.0 {
        "2-4 weeks"
    } else if months <= 3.0 {
        "1-3 months"
    } else if months <= 6.0 {
        "3-6 months"
    } else {
        "6-12 months"
    }
}

fn phase_for(priority: RecommendationPriority) -> &'static str {
    match priority {
        RecommendationPriority::Critical | RecommendationPriority::High => "Phase 1: Immediate",
        RecommendationPriority::Medium => "Phase 2: Short-term",
        RecommendationPriority::Low | RecommendationPriority::NotRecommended => "Phase 3: Long-term",
    }
}

fn implementation_plan(
    activity: MarketingActivity,
    priority: RecommendationPriority,
    cost: Option<&OpportunityCost>,
) -> ImplementationPlan {
    let profile = activity_profile(activity);
    let months = cost
        .map(|c| c.time_to_implement_months)
        .unwrap_or(profile.months_to_implement);

    let mut resources: Vec<String> = profile.resources.iter().map(|r| r.to_string()).collect();
    if let Some(validation) = cost.and_then(|c| c.tool_validation.as_ref()) {
        resources.extend(
            profile
                .tools
                .iter()
                .filter(|t| validation.missing_tools.iter().any(|k| k == t.key))
                .map(|t| format!("Tool: {}", t.name)),
        );
    }

    ImplementationPlan {
        phase: phase_for(priority).to_string(),
        timeframe: timeframe_for(months).to_string(),
        resources,
        expected_roi: cost.map(|c| c.estimated_roi).unwrap_or(profile.baseline_roi),
        estimated_cost: cost
            .map(|c| c.implementation_cost)
            .unwrap_or(profile.implementation_cost),
    }
}

/// Scores every inactive activity and returns the strongest candidates.
///
/// Ordering is priority bucket descending, then score descending, then
/// activity order, so the result is deterministic.
#[allow(clippy::too_many_arguments)]
pub fn generate_fuzzy_logic_recommendations(
    kb: &KnowledgeBase,
    options: &RecommendationOptions,
    activities: &SalesActivities,
    kpis: &CurrentKpis,
    costs: &CurrentCosts,
    industry: &str,
    company_size: &str,
    available_tools: Option<&BTreeMap<String, bool>>,
) -> Vec<FuzzyLogicRecommendation> {
    let defaults = get_intelligent_defaults(industry, company_size);
    let mut flags = BTreeMap::new();
    let filled_kpis = fill_kpis(kpis, &defaults, &mut flags);
    let filled_costs = fill_costs(costs, &defaults, &mut flags);

    let maturity = assess_company_maturity(&filled_kpis, &filled_costs, industry, available_tools);
    let inputs = calculate_fuzzy_inputs(&filled_kpis, &filled_costs, &maturity);

    let opportunity_costs: BTreeMap<MarketingActivity, OpportunityCost> =
        calculate_opportunity_costs(activities, kpis, costs, industry, company_size, available_tools)
            .into_iter()
            .map(|c| (c.activity, c))
            .collect();

    let mut recommendations: Vec<FuzzyLogicRecommendation> = activities
        .inactive()
        .into_iter()
        .filter_map(|activity| {
            let result = infer(kb, &inputs, activity.key());
            let score = clamp_score(round_to(result.output_value, 1));
            if score <= options.min_score {
                debug!(activity = activity.key(), score, "Recommendation below minimum score");
                return None;
            }
            let priority = RecommendationPriority::from_score(score);

            Some(FuzzyLogicRecommendation {
                activity,
                score,
                confidence: clamp_confidence(round_to(result.confidence, 1)),
                priority,
                reasoning: result.reasoning,
                implementation_plan: implementation_plan(activity, priority, opportunity_costs.get(&activity)),
                prerequisites: prerequisites_for(activity, maturity.stage),
                risks: risks_for(activity, maturity.stage),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
            .then_with(|| a.activity.index().cmp(&b.activity.index()))
    });
    recommendations.truncate(options.max_results);
    recommendations
}
