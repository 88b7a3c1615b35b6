//! Crisp fuzzy inputs derived from the filled business state.

use super::rule_base::{
    COMPANY_MATURITY, CONVERSION_RATE, CUSTOMER_ACQUISITION_COST, LTV_CAC_RATIO, MARKETING_EFFICIENCY,
};
use super::{CompanyMaturity, CurrentCosts, CurrentKpis};
use crate::domain::foundation::{clamp_finite, clamp_score, safe_div};
use crate::domain::fuzzy::FuzzyInputs;

/// Revenue-to-marketing-spend multiple that maps to full efficiency.
const EFFICIENCY_SCALE: f64 = 10.0;

/// Marketing efficiency on a 0-100 scale: revenue per unit of marketing
/// spend, where 10x maps to 100.
pub fn marketing_efficiency(kpis: &CurrentKpis, costs: &CurrentCosts) -> f64 {
    clamp_score(safe_div(kpis.monthly_revenue, costs.marketing_budget) * EFFICIENCY_SCALE)
}

/// Builds the five input values consumed by the standard knowledge base.
///
/// Every value is finite and within its variable's declared range. Zero
/// inputs stay zero so they carry no evidence.
pub fn calculate_fuzzy_inputs(
    kpis: &CurrentKpis,
    costs: &CurrentCosts,
    maturity: &CompanyMaturity,
) -> FuzzyInputs {
    let mut inputs = FuzzyInputs::new();
    inputs.insert(
        CONVERSION_RATE.to_string(),
        clamp_finite(kpis.conversion_rate, 0.0, 20.0),
    );
    inputs.insert(
        CUSTOMER_ACQUISITION_COST.to_string(),
        clamp_finite(kpis.customer_acquisition_cost, 0.0, 2000.0),
    );
    inputs.insert(
        LTV_CAC_RATIO.to_string(),
        clamp_finite(kpis.ltv_cac_ratio(), 0.0, 20.0),
    );
    inputs.insert(
        COMPANY_MATURITY.to_string(),
        clamp_finite(maturity.maturity_index(), 0.0, 10.0),
    );
    inputs.insert(MARKETING_EFFICIENCY.to_string(), marketing_efficiency(kpis, costs));
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marketing::assess_company_maturity;
    use proptest::prelude::*;

    fn scenario() -> (CurrentKpis, CurrentCosts) {
        let kpis = CurrentKpis {
            monthly_revenue: 80_000.0,
            customer_acquisition_cost: 500.0,
            customer_lifetime_value: 8_000.0,
            conversion_rate: 6.0,
            ..Default::default()
        };
        let costs = CurrentCosts {
            marketing_budget: 25_000.0,
            sales_team_cost: 45_000.0,
            technology_cost: 5_000.0,
            other_costs: 15_000.0,
        };
        (kpis, costs)
    }

    #[test]
    fn inputs_cover_all_five_variables() {
        let (kpis, costs) = scenario();
        let maturity = assess_company_maturity(&kpis, &costs, "Technology", None);
        let inputs = calculate_fuzzy_inputs(&kpis, &costs, &maturity);

        assert_eq!(inputs.len(), 5);
        assert_eq!(inputs[CONVERSION_RATE], 6.0);
        assert_eq!(inputs[CUSTOMER_ACQUISITION_COST], 500.0);
        assert!((inputs[LTV_CAC_RATIO] - 16.0).abs() < 1e-9);
        assert!((inputs[COMPANY_MATURITY] - 4.7).abs() < 1e-9);
        assert!((inputs[MARKETING_EFFICIENCY] - 32.0).abs() < 1e-9);
    }

    #[test]
    fn zero_state_yields_zero_evidence() {
        let kpis = CurrentKpis::default();
        let costs = CurrentCosts::default();
        let maturity = assess_company_maturity(&kpis, &costs, "Technology", None);
        let inputs = calculate_fuzzy_inputs(&kpis, &costs, &maturity);

        assert_eq!(inputs[CONVERSION_RATE], 0.0);
        assert_eq!(inputs[LTV_CAC_RATIO], 0.0);
        assert_eq!(inputs[MARKETING_EFFICIENCY], 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let kpis = CurrentKpis {
            monthly_revenue: 1_000_000.0,
            customer_acquisition_cost: 10.0,
            customer_lifetime_value: 50_000.0,
            conversion_rate: 45.0,
            ..Default::default()
        };
        let costs = CurrentCosts {
            marketing_budget: 1_000.0,
            ..Default::default()
        };
        let maturity = assess_company_maturity(&kpis, &costs, "SaaS", None);
        let inputs = calculate_fuzzy_inputs(&kpis, &costs, &maturity);

        assert_eq!(inputs[CONVERSION_RATE], 20.0);
        assert_eq!(inputs[LTV_CAC_RATIO], 20.0);
        assert_eq!(inputs[MARKETING_EFFICIENCY], 100.0);
    }

    proptest! {
        #[test]
        fn inputs_are_always_finite(
            revenue in prop::num::f64::ANY,
            cac in prop::num::f64::ANY,
            ltv in prop::num::f64::ANY,
            conv in prop::num::f64::ANY,
            marketing in prop::num::f64::ANY,
        ) {
            let kpis = CurrentKpis {
                monthly_revenue: revenue,
                customer_acquisition_cost: cac,
                customer_lifetime_value: ltv,
                conversion_rate: conv,
                ..Default::default()
            };
            let costs = CurrentCosts {
                marketing_budget: marketing,
                ..Default::default()
            };
            let maturity = assess_company_maturity(&kpis, &costs, "Finance", None);
            for value in calculate_fuzzy_inputs(&kpis, &costs, &maturity).values() {
                prop_assert!(value.is_finite());
            }
        }
    }
}
