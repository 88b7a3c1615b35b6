//! Opportunity-Cost Model - Revenue forgone by not adopting an activity.
//!
//! # Priority
//!
//! ```text
//! priority = 0.4 × min(roi / 50, 10)
//!          + 0.3 × min(roi / cost × 100, 10)
//!          + 0.2 × (12 − min(months, 12)) / 12 × 10
//!          + 0.1 × safety(risk)
//! ```
//!
//! clamped to `[1, 10]` and rounded to one decimal.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use super::benchmarks::get_intelligent_defaults;
use super::catalog::{activity_profile, industry_multiplier, size_multiplier, RiskLevel};
use super::roi_metrics::{fill_costs, fill_kpis};
use super::tools::{validate_tools, ToolValidation};
use super::{CompanySize, CurrentCosts, CurrentKpis, Industry, MarketingActivity, SalesActivities};
use crate::domain::foundation::{clamp_priority, round_to, safe_div};

/// Estimated cost of not running an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCost {
    pub activity: MarketingActivity,
    /// Expected ROI in percent after multipliers.
    pub estimated_roi: f64,
    /// Implementation cost after multipliers, plus any missing tooling.
    pub implementation_cost: f64,
    pub time_to_implement_months: f64,
    pub risk_level: RiskLevel,
    /// Revenue forgone over the implementation period.
    pub opportunity_cost: f64,
    /// 1-10, higher is more attractive.
    pub priority: f64,
    pub reasoning: String,
    /// Present only when the caller supplied its tool inventory.
    pub tool_validation: Option<ToolValidation>,
}

/// Weighted priority score in `[1, 10]`.
pub fn priority_score(roi: f64, cost: f64, months: f64, risk: RiskLevel) -> f64 {
    let roi_score = (roi / 50.0).min(10.0);
    let efficiency_score = (safe_div(roi, cost) * 100.0).min(10.0);
    let time_score = (12.0 - months.min(12.0)) / 12.0 * 10.0;
    let raw = 0.4 * roi_score + 0.3 * efficiency_score + 0.2 * time_score + 0.1 * risk.safety_score();
    round_to(clamp_priority(raw), 1)
}

/// Estimates opportunity costs for every activity the tenant does not run.
///
/// Unreported KPIs are filled from benchmarks first. Results are sorted by
/// priority descending, ties broken by activity order.
pub fn calculate_opportunity_costs(
    activities: &SalesActivities,
    kpis: &CurrentKpis,
    costs: &CurrentCosts,
    industry: &str,
    company_size: &str,
    available_tools: Option<&BTreeMap<String, bool>>,
) -> Vec<OpportunityCost> {
    let defaults = get_intelligent_defaults(industry, company_size);
    let mut flags = BTreeMap::new();
    let kpis = fill_kpis(kpis, &defaults, &mut flags);
    let costs = fill_costs(costs, &defaults, &mut flags);

    let parsed_industry = Industry::from_label(industry);
    let size = size_multiplier(CompanySize::from_label(company_size));
    let monthly_value_per_customer = safe_div(kpis.customer_lifetime_value, kpis.customer_lifetime_span);

    let mut results: Vec<OpportunityCost> = activities
        .inactive()
        .into_iter()
        .map(|activity| {
            let profile = activity_profile(activity);
            let ind = industry_multiplier(parsed_industry, activity);

            let estimated_roi = profile.baseline_roi * ind.roi * size.roi;
            let mut implementation_cost = profile.implementation_cost * ind.cost * size.cost;
            let months = profile.months_to_implement;

            let tool_validation = available_tools.map(|tools| validate_tools(activity, tools, months));
            if let Some(validation) = &tool_validation {
                implementation_cost += validation.additional_cost;
            }

            let opportunity_cost =
                kpis.converted_customers * monthly_value_per_customer * (estimated_roi / 100.0) * months;
            let priority = priority_score(estimated_roi, implementation_cost, months, profile.risk_level);

            debug!(
                activity = activity.key(),
                estimated_roi,
                implementation_cost,
                priority,
                "Computed opportunity cost"
            );

            OpportunityCost {
                activity,
                estimated_roi: round_to(estimated_roi, 1),
                implementation_cost: round_to(implementation_cost, 2),
                time_to_implement_months: months,
                risk_level: profile.risk_level,
                opportunity_cost: round_to(opportunity_cost, 2),
                priority,
                reasoning: format!(
                    "{} could return about {:.0}% ROI within {} month(s) at {} risk, costing {:.0}% of the monthly marketing budget",
                    activity.label(),
                    estimated_roi,
                    months,
                    profile.risk_level,
                    safe_div(implementation_cost, costs.marketing_budget) * 100.0
                ),
                tool_validation,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.activity.index().cmp(&b.activity.index()))
    });
    results
}
