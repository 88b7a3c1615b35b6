//! Benchmarks - Industry and company-size reference figures.
//!
//! Used to synthesize "intelligent defaults" for KPIs and costs the tenant did
//! not report. Unknown industries or sizes fall back to fixed constants.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{CompanySize, CurrentCosts, CurrentKpis, Industry};

/// Unit-economics benchmarks for an industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub conversion_rate: f64,
    pub customer_acquisition_cost: f64,
    pub customer_lifetime_value: f64,
    pub churn_rate: f64,
    pub sales_cycle_length: f64,
    pub average_order_value: f64,
    pub customer_lifetime_span: f64,
    /// Expected revenue uplift when no revenue goal is set, as a fraction.
    pub expected_growth: f64,
}

/// Scale benchmarks for a company-size band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBenchmark {
    pub monthly_revenue: f64,
    pub monthly_leads: f64,
    pub marketing_budget: f64,
    pub sales_team_cost: f64,
    pub technology_cost: f64,
    pub other_costs: f64,
}

/// Used when the industry label is unknown or has no row.
pub const FALLBACK_INDUSTRY: IndustryBenchmark = IndustryBenchmark {
    conversion_rate: 2.5,
    customer_acquisition_cost: 300.0,
    customer_lifetime_value: 1500.0,
    churn_rate: 5.0,
    sales_cycle_length: 30.0,
    average_order_value: 250.0,
    customer_lifetime_span: 24.0,
    expected_growth: 0.2,
};

/// Used when the company-size label is unknown.
pub const FALLBACK_SIZE: SizeBenchmark = SizeBenchmark {
    monthly_revenue: 50_000.0,
    monthly_leads: 200.0,
    marketing_budget: 5_000.0,
    sales_team_cost: 8_000.0,
    technology_cost: 1_500.0,
    other_costs: 2_000.0,
};

#[allow(clippy::too_many_arguments)]
const fn industry(
    conversion_rate: f64,
    customer_acquisition_cost: f64,
    customer_lifetime_value: f64,
    churn_rate: f64,
    sales_cycle_length: f64,
    average_order_value: f64,
    customer_lifetime_span: f64,
    expected_growth: f64,
) -> IndustryBenchmark {
    IndustryBenchmark {
        conversion_rate,
        customer_acquisition_cost,
        customer_lifetime_value,
        churn_rate,
        sales_cycle_length,
        average_order_value,
        customer_lifetime_span,
        expected_growth,
    }
}

const fn size(
    monthly_revenue: f64,
    monthly_leads: f64,
    marketing_budget: f64,
    sales_team_cost: f64,
    technology_cost: f64,
    other_costs: f64,
) -> SizeBenchmark {
    SizeBenchmark {
        monthly_revenue,
        monthly_leads,
        marketing_budget,
        sales_team_cost,
        technology_cost,
        other_costs,
    }
}

//                                      conv%  CAC    LTV      churn cycle  AOV     span growth
static INDUSTRY_BENCHMARKS: &[(Industry, IndustryBenchmark)] = &[
    (Industry::Technology, industry(3.0, 400.0, 4_800.0, 3.0, 45.0, 1_200.0, 36.0, 0.25)),
    (Industry::Saas, industry(3.5, 350.0, 4_200.0, 4.0, 30.0, 150.0, 28.0, 0.30)),
    (Industry::Ecommerce, industry(2.5, 45.0, 250.0, 8.0, 3.0, 85.0, 12.0, 0.20)),
    (Industry::Healthcare, industry(2.0, 600.0, 7_500.0, 2.0, 90.0, 2_500.0, 48.0, 0.15)),
    (Industry::Finance, industry(2.2, 700.0, 9_000.0, 2.0, 60.0, 3_000.0, 60.0, 0.15)),
    (Industry::Manufacturing, industry(1.8, 900.0, 15_000.0, 1.5, 120.0, 8_000.0, 72.0, 0.10)),
    (Industry::ProfessionalServices, industry(4.0, 500.0, 6_000.0, 3.0, 45.0, 2_500.0, 30.0, 0.20)),
    (Industry::Retail, industry(2.0, 30.0, 180.0, 10.0, 1.0, 60.0, 12.0, 0.15)),
    (Industry::Education, industry(3.0, 250.0, 1_800.0, 5.0, 30.0, 500.0, 18.0, 0.20)),
    (Industry::RealEstate, industry(1.5, 800.0, 6_000.0, 1.0, 90.0, 5_000.0, 24.0, 0.10)),
];

//                                       revenue       leads    marketing   sales        tech       other
static SIZE_BENCHMARKS: &[(CompanySize, SizeBenchmark)] = &[
    (CompanySize::Micro, size(15_000.0, 60.0, 1_500.0, 3_000.0, 300.0, 1_000.0)),
    (CompanySize::Small, size(60_000.0, 200.0, 6_000.0, 12_000.0, 1_200.0, 4_000.0)),
    (CompanySize::Medium, size(250_000.0, 600.0, 25_000.0, 45_000.0, 5_000.0, 15_000.0)),
    (CompanySize::Large, size(800_000.0, 1_500.0, 80_000.0, 140_000.0, 16_000.0, 45_000.0)),
    (CompanySize::Enterprise, size(2_000_000.0, 3_500.0, 200_000.0, 350_000.0, 40_000.0, 110_000.0)),
    (CompanySize::Corporate, size(6_000_000.0, 9_000.0, 600_000.0, 1_000_000.0, 120_000.0, 300_000.0)),
];

/// Looks up the industry benchmark row, if one exists.
pub fn industry_benchmark(industry: Industry) -> Option<&'static IndustryBenchmark> {
    INDUSTRY_BENCHMARKS
        .iter()
        .find(|(i, _)| *i == industry)
        .map(|(_, b)| b)
}

/// Looks up the size benchmark row.
pub fn size_benchmark(company_size: CompanySize) -> Option<&'static SizeBenchmark> {
    SIZE_BENCHMARKS
        .iter()
        .find(|(s, _)| *s == company_size)
        .map(|(_, b)| b)
}

/// Fully populated KPI and cost records for an industry and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDefaults {
    pub kpis: CurrentKpis,
    pub costs: CurrentCosts,
    pub expected_growth: f64,
    /// True when neither label matched a benchmark row.
    pub is_fallback: bool,
}

/// Builds benchmark-based defaults for the given labels.
///
/// Unknown labels fall back to [`FALLBACK_INDUSTRY`] / [`FALLBACK_SIZE`].
pub fn get_intelligent_defaults(industry_label: &str, company_size_label: &str) -> BenchmarkDefaults {
    let industry_row = Industry::from_label(industry_label).and_then(industry_benchmark);
    let size_row = CompanySize::from_label(company_size_label).and_then(size_benchmark);

    if industry_row.is_none() {
        warn!(industry = industry_label, "No industry benchmark, using fallback constants");
    }
    if size_row.is_none() {
        warn!(company_size = company_size_label, "No company-size benchmark, using fallback constants");
    }

    let ind = industry_row.copied().unwrap_or(FALLBACK_INDUSTRY);
    let sz = size_row.copied().unwrap_or(FALLBACK_SIZE);

    let kpis = CurrentKpis {
        monthly_revenue: sz.monthly_revenue,
        customer_acquisition_cost: ind.customer_acquisition_cost,
        customer_lifetime_value: ind.customer_lifetime_value,
        conversion_rate: ind.conversion_rate,
        monthly_leads: sz.monthly_leads,
        converted_customers: sz.monthly_leads * ind.conversion_rate / 100.0,
        customer_lifetime_span: ind.customer_lifetime_span,
        churn_rate: ind.churn_rate,
        sales_cycle_length: ind.sales_cycle_length,
        average_order_value: ind.average_order_value,
    };
    let costs = CurrentCosts {
        marketing_budget: sz.marketing_budget,
        sales_team_cost: sz.sales_team_cost,
        technology_cost: sz.technology_cost,
        other_costs: sz.other_costs,
    };

    BenchmarkDefaults {
        kpis,
        costs,
        expected_growth: ind.expected_growth,
        is_fallback: industry_row.is_none() && size_row.is_none(),
    }
}
