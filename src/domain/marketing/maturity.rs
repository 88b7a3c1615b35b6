//! Company maturity assessment derived from filled KPIs and costs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{CurrentCosts, CurrentKpis, Industry};
use crate::domain::foundation::{clamp_finite, round_to, safe_div};

/// Monthly revenue at which a company leaves the startup stage.
pub const GROWTH_REVENUE_THRESHOLD: f64 = 50_000.0;
/// Monthly revenue at which a company is considered mature.
pub const MATURE_REVENUE_THRESHOLD: f64 = 250_000.0;
/// Monthly revenue at which a company is considered an enterprise.
pub const ENTERPRISE_REVENUE_THRESHOLD: f64 = 1_000_000.0;

/// Assumed fully-loaded monthly cost of one sales rep.
const MONTHLY_COST_PER_REP: f64 = 6_000.0;

/// Coarse growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityStage {
    Startup,
    Growth,
    Mature,
    Enterprise,
}

impl MaturityStage {
    /// Classifies by monthly revenue.
    pub fn from_monthly_revenue(revenue: f64) -> Self {
        if revenue >= ENTERPRISE_REVENUE_THRESHOLD {
            MaturityStage::Enterprise
        } else if revenue >= MATURE_REVENUE_THRESHOLD {
            MaturityStage::Mature
        } else if revenue >= GROWTH_REVENUE_THRESHOLD {
            MaturityStage::Growth
        } else {
            MaturityStage::Startup
        }
    }

    /// Representative position of the stage on the 0-10 maturity scale.
    pub fn base_index(&self) -> f64 {
        match self {
            MaturityStage::Startup => 2.0,
            MaturityStage::Growth => 4.5,
            MaturityStage::Mature => 7.0,
            MaturityStage::Enterprise => 9.0,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityStage::Startup => "Startup",
            MaturityStage::Growth => "Growth",
            MaturityStage::Mature => "Mature",
            MaturityStage::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived per-request maturity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMaturity {
    pub stage: MaturityStage,
    /// 1 (manual, spreadsheet-driven) to 10 (fully instrumented).
    pub digital_maturity: f64,
    pub sales_team_size: u32,
    pub marketing_budget: f64,
    /// Tool keys the tenant reports having.
    pub tech_stack: Vec<String>,
    pub industry_type: String,
    pub target_market: String,
}

impl CompanyMaturity {
    /// Blend of stage and digital maturity on a 0-10 scale, used as the
    /// `company_maturity` fuzzy input.
    pub fn maturity_index(&self) -> f64 {
        round_to(self.stage.base_index() * 0.6 + self.digital_maturity * 0.4, 2)
    }
}

/// Digital maturity from the technology-to-marketing spend ratio.
///
/// A ratio of 0 maps to 1; 45% or more of the marketing budget spent on
/// technology maps to 10.
pub fn digital_maturity(costs: &CurrentCosts) -> f64 {
    let ratio = safe_div(costs.technology_cost, costs.marketing_budget);
    round_to(clamp_finite(1.0 + ratio * 20.0, 1.0, 10.0), 1)
}

/// Assesses company maturity from already-filled KPIs and costs.
pub fn assess_company_maturity(
    kpis: &CurrentKpis,
    costs: &CurrentCosts,
    industry: &str,
    available_tools: Option<&BTreeMap<String, bool>>,
) -> CompanyMaturity {
    let parsed = Industry::from_label(industry);
    let tech_stack = available_tools
        .map(|tools| {
            tools
                .iter()
                .filter(|(_, present)| **present)
                .map(|(key, _)| key.clone())
                .collect()
        })
        .unwrap_or_default();

    let reps = safe_div(costs.sales_team_cost, MONTHLY_COST_PER_REP).round();

    CompanyMaturity {
        stage: MaturityStage::from_monthly_revenue(kpis.monthly_revenue),
        digital_maturity: digital_maturity(costs),
        sales_team_size: reps.max(1.0) as u32,
        marketing_budget: costs.marketing_budget,
        tech_stack,
        industry_type: parsed.map(|i| i.label().to_string()).unwrap_or_else(|| industry.to_string()),
        target_market: parsed.unwrap_or(Industry::Other).target_market().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(marketing: f64, tech: f64, sales: f64) -> CurrentCosts {
        CurrentCosts {
            marketing_budget: marketing,
            sales_team_cost: sales,
            technology_cost: tech,
            other_costs: 0.0,
        }
    }

    #[test]
    fn stage_thresholds() {
        assert_eq!(MaturityStage::from_monthly_revenue(0.0), MaturityStage::Startup);
        assert_eq!(MaturityStage::from_monthly_revenue(49_999.0), MaturityStage::Startup);
        assert_eq!(MaturityStage::from_monthly_revenue(50_000.0), MaturityStage::Growth);
        assert_eq!(MaturityStage::from_monthly_revenue(80_000.0), MaturityStage::Growth);
        assert_eq!(MaturityStage::from_monthly_revenue(250_000.0), MaturityStage::Mature);
        assert_eq!(MaturityStage::from_monthly_revenue(1_000_000.0), MaturityStage::Enterprise);
    }

    #[test]
    fn digital_maturity_scales_with_tech_share() {
        assert_eq!(digital_maturity(&costs(25_000.0, 5_000.0, 0.0)), 5.0);
        assert_eq!(digital_maturity(&costs(10_000.0, 0.0, 0.0)), 1.0);
        assert_eq!(digital_maturity(&costs(1_000.0, 5_000.0, 0.0)), 10.0);
    }

    #[test]
    fn digital_maturity_with_zero_budget_is_minimum() {
        let value = digital_maturity(&costs(0.0, 5_000.0, 0.0));
        assert_eq!(value, 1.0);
    }

    #[test]
    fn assess_collects_reported_tools() {
        let mut tools = BTreeMap::new();
        tools.insert("crm".to_string(), true);
        tools.insert("analytics".to_string(), false);
        let kpis = CurrentKpis {
            monthly_revenue: 80_000.0,
            ..Default::default()
        };
        let maturity = assess_company_maturity(&kpis, &costs(25_000.0, 5_000.0, 45_000.0), "Technology", Some(&tools));
        assert_eq!(maturity.stage, MaturityStage::Growth);
        assert_eq!(maturity.tech_stack, vec!["crm".to_string()]);
        assert_eq!(maturity.sales_team_size, 8);
        assert_eq!(maturity.industry_type, "Technology");
        assert_eq!(maturity.target_market, "B2B");
    }

    #[test]
    fn assess_keeps_unknown_industry_label() {
        let maturity = assess_company_maturity(&CurrentKpis::default(), &CurrentCosts::default(), "Space Mining", None);
        assert_eq!(maturity.industry_type, "Space Mining");
        assert_eq!(maturity.sales_team_size, 1);
        assert!(maturity.tech_stack.is_empty());
    }

    #[test]
    fn maturity_index_blends_stage_and_digital() {
        let kpis = CurrentKpis {
            monthly_revenue: 80_000.0,
            ..Default::default()
        };
        let maturity = assess_company_maturity(&kpis, &costs(25_000.0, 5_000.0, 0.0), "Technology", None);
        assert!((maturity.maturity_index() - 4.7).abs() < 1e-9);
    }
}
