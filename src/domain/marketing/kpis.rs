//! Business-state input records supplied by the caller.
//!
//! A zero field means "not reported"; the benchmark layer fills it in.

use serde::{Deserialize, Serialize};

/// Current business KPIs. Monetary values are monthly, in the tenant currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentKpis {
    pub monthly_revenue: f64,
    pub customer_acquisition_cost: f64,
    pub customer_lifetime_value: f64,
    /// Lead-to-customer conversion, in percent.
    pub conversion_rate: f64,
    pub monthly_leads: f64,
    pub converted_customers: f64,
    /// Average customer lifetime, in months.
    pub customer_lifetime_span: f64,
    /// Monthly churn, in percent.
    pub churn_rate: f64,
    /// Average sales cycle, in days.
    pub sales_cycle_length: f64,
    pub average_order_value: f64,
}

impl CurrentKpis {
    /// LTV divided by CAC, or 0 when CAC is unknown.
    pub fn ltv_cac_ratio(&self) -> f64 {
        crate::domain::foundation::safe_div(self.customer_lifetime_value, self.customer_acquisition_cost)
    }
}

/// Current monthly cost buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentCosts {
    pub marketing_budget: f64,
    pub sales_team_cost: f64,
    pub technology_cost: f64,
    pub other_costs: f64,
}

impl CurrentCosts {
    /// Sum of all cost buckets.
    pub fn total_monthly(&self) -> f64 {
        self.marketing_budget + self.sales_team_cost + self.technology_cost + self.other_costs
    }
}

/// Growth targets. Zero means "no goal set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    /// Replaces the benchmark growth estimate in the projected ROI.
    pub target_monthly_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_deserialize_from_revenue_target() {
        let goals: Goals = serde_json::from_str(r#"{"target_monthly_revenue": 120000}"#).unwrap();
        assert_eq!(goals.target_monthly_revenue, 120_000.0);

        let empty: Goals = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Goals::default());
    }

    #[test]
    fn ltv_cac_ratio_guards_zero_cac() {
        let kpis = CurrentKpis {
            customer_lifetime_value: 8000.0,
            ..Default::default()
        };
        assert_eq!(kpis.ltv_cac_ratio(), 0.0);
    }

    #[test]
    fn ltv_cac_ratio_divides() {
        let kpis = CurrentKpis {
            customer_lifetime_value: 8000.0,
            customer_acquisition_cost: 500.0,
            ..Default::default()
        };
        assert!((kpis.ltv_cac_ratio() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn total_monthly_sums_buckets() {
        let costs = CurrentCosts {
            marketing_budget: 10_000.0,
            sales_team_cost: 20_000.0,
            technology_cost: 3_000.0,
            other_costs: 2_000.0,
        };
        assert_eq!(costs.total_monthly(), 35_000.0);
    }

    #[test]
    fn partial_json_fills_zeros() {
        let kpis: CurrentKpis = serde_json::from_str(r#"{"monthly_revenue": 1200.5}"#).unwrap();
        assert_eq!(kpis.monthly_revenue, 1200.5);
        assert_eq!(kpis.churn_rate, 0.0);
    }
}
