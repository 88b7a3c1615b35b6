//! ROI Metrics - Fills missing KPIs/costs and computes headline ROI figures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::benchmarks::{get_intelligent_defaults, BenchmarkDefaults};
use super::{CurrentCosts, CurrentKpis, Goals};
use crate::domain::foundation::{round_to, safe_div};

/// Headline ROI figures plus the filled-in inputs they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ROIMetrics {
    /// (revenue - costs) / costs, in percent.
    pub current_roi: f64,
    /// ROI at goal revenue (or benchmark growth when no goal is set).
    pub projected_roi: f64,
    pub ltv_cac_ratio: f64,
    /// Months of per-customer revenue needed to recover CAC.
    pub payback_period_months: f64,
    pub total_monthly_costs: f64,
    pub monthly_profit: f64,
    pub kpis: CurrentKpis,
    pub costs: CurrentCosts,
    /// Field name → true when the value was synthesized.
    pub is_using_defaults: BTreeMap<String, bool>,
}

impl ROIMetrics {
    /// Returns true if any field was synthesized.
    pub fn uses_any_defaults(&self) -> bool {
        self.is_using_defaults.values().any(|v| *v)
    }
}

fn reported(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Records which fields were synthesized while filling.
struct Filler<'a> {
    flags: &'a mut BTreeMap<String, bool>,
}

impl Filler<'_> {
    /// Keeps `value` when reported, otherwise takes the first positive
    /// derived candidate, then the benchmark.
    fn fill(&mut self, field: &str, value: f64, derived: Option<f64>, benchmark: f64) -> f64 {
        if reported(value) {
            self.flags.insert(field.to_string(), false);
            return value;
        }
        self.flags.insert(field.to_string(), true);
        match derived.filter(|d| reported(*d)) {
            Some(d) => {
                debug!(field, value = d, "Derived missing field from reported KPIs");
                d
            }
            None => {
                debug!(field, value = benchmark, "Using benchmark default");
                benchmark
            }
        }
    }
}

/// Fills every unreported KPI, deriving from reported fields where possible.
pub fn fill_kpis(
    kpis: &CurrentKpis,
    defaults: &BenchmarkDefaults,
    flags: &mut BTreeMap<String, bool>,
) -> CurrentKpis {
    let b = &defaults.kpis;
    let mut f = Filler { flags };

    let conversion_rate = f.fill(
        "conversion_rate",
        kpis.conversion_rate,
        Some(safe_div(kpis.converted_customers, kpis.monthly_leads) * 100.0),
        b.conversion_rate,
    );
    let monthly_leads = f.fill(
        "monthly_leads",
        kpis.monthly_leads,
        Some(safe_div(kpis.converted_customers * 100.0, conversion_rate)),
        b.monthly_leads,
    );
    let converted_customers = f.fill(
        "converted_customers",
        kpis.converted_customers,
        Some(monthly_leads * conversion_rate / 100.0),
        b.converted_customers,
    );
    let average_order_value = f.fill(
        "average_order_value",
        kpis.average_order_value,
        None,
        b.average_order_value,
    );
    let monthly_revenue = f.fill(
        "monthly_revenue",
        kpis.monthly_revenue,
        None,
        b.monthly_revenue,
    );
    let customer_lifetime_span = f.fill(
        "customer_lifetime_span",
        kpis.customer_lifetime_span,
        Some(safe_div(100.0, kpis.churn_rate)),
        b.customer_lifetime_span,
    );
    let churn_rate = f.fill(
        "churn_rate",
        kpis.churn_rate,
        Some(safe_div(100.0, kpis.customer_lifetime_span)),
        b.churn_rate,
    );
    let customer_acquisition_cost = f.fill(
        "customer_acquisition_cost",
        kpis.customer_acquisition_cost,
        None,
        b.customer_acquisition_cost,
    );
    let customer_lifetime_value = f.fill(
        "customer_lifetime_value",
        kpis.customer_lifetime_value,
        None,
        b.customer_lifetime_value,
    );
    let sales_cycle_length = f.fill(
        "sales_cycle_length",
        kpis.sales_cycle_length,
        None,
        b.sales_cycle_length,
    );

    CurrentKpis {
        monthly_revenue,
        customer_acquisition_cost,
        customer_lifetime_value,
        conversion_rate,
        monthly_leads,
        converted_customers,
        customer_lifetime_span,
        churn_rate,
        sales_cycle_length,
        average_order_value,
    }
}

/// Fills every unreported cost bucket from benchmarks.
pub fn fill_costs(
    costs: &CurrentCosts,
    defaults: &BenchmarkDefaults,
    flags: &mut BTreeMap<String, bool>,
) -> CurrentCosts {
    let b = &defaults.costs;
    let mut f = Filler { flags };
    CurrentCosts {
        marketing_budget: f.fill("marketing_budget", costs.marketing_budget, None, b.marketing_budget),
        sales_team_cost: f.fill("sales_team_cost", costs.sales_team_cost, None, b.sales_team_cost),
        technology_cost: f.fill("technology_cost", costs.technology_cost, None, b.technology_cost),
        other_costs: f.fill("other_costs", costs.other_costs, None, b.other_costs),
    }
}

/// Computes ROI metrics, synthesizing any unreported input.
///
/// # Edge Cases
/// - All inputs zero: every `is_using_defaults` flag is true and all
///   figures come from benchmarks
/// - Unknown industry / size: fallback benchmark constants
/// - Zero denominators: the affected ratio is 0, never NaN
pub fn calculate_roi_metrics(
    kpis: &CurrentKpis,
    costs: &CurrentCosts,
    goals: &Goals,
    industry: &str,
    company_size: &str,
) -> ROIMetrics {
    let defaults = get_intelligent_defaults(industry, company_size);
    let mut flags = BTreeMap::new();
    let kpis = fill_kpis(kpis, &defaults, &mut flags);
    let costs = fill_costs(costs, &defaults, &mut flags);

    let total_monthly_costs = costs.total_monthly();
    let monthly_profit = kpis.monthly_revenue - total_monthly_costs;
    let current_roi = safe_div(monthly_profit, total_monthly_costs) * 100.0;

    let projected_revenue = if reported(goals.target_monthly_revenue) {
        goals.target_monthly_revenue
    } else {
        kpis.monthly_revenue * (1.0 + defaults.expected_growth)
    };
    let projected_roi = safe_div(projected_revenue - total_monthly_costs, total_monthly_costs) * 100.0;

    let monthly_value_per_customer = safe_div(kpis.customer_lifetime_value, kpis.customer_lifetime_span);
    let payback_period_months = safe_div(kpis.customer_acquisition_cost, monthly_value_per_customer);

    ROIMetrics {
        current_roi: round_to(current_roi, 2),
        projected_roi: round_to(projected_roi, 2),
        ltv_cac_ratio: round_to(kpis.ltv_cac_ratio(), 2),
        payback_period_months: round_to(payback_period_months, 2),
        total_monthly_costs,
        monthly_profit,
        kpis,
        costs,
        is_using_defaults: flags,
    }
}
