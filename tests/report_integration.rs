//! Integration tests for the ROI report pipeline.
//!
//! These tests drive the public API end to end:
//! 1. Benchmark defaults fill unreported KPIs and costs
//! 2. Opportunity costs rank the inactive activities
//! 3. Fuzzy inference scores and ranks recommendations
//! 4. The next-steps planner buckets the resulting tasks

use proptest::prelude::*;
use std::collections::BTreeMap;

use roi_advisor::application::{GenerateRoiReportCommand, GenerateRoiReportHandler};
use roi_advisor::config::EngineConfig;
use roi_advisor::domain::fuzzy::{infer, FuzzyInputs};
use roi_advisor::domain::marketing::{
    assess_company_maturity, calculate_fuzzy_inputs, calculate_roi_metrics, generate_fuzzy_logic_recommendations,
    get_intelligent_defaults, CurrentCosts, CurrentKpis, Goals, MarketingActivity, RecommendationOptions,
    SalesActivities, STANDARD_KNOWLEDGE_BASE,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn technology_kpis() -> CurrentKpis {
    CurrentKpis {
        monthly_revenue: 80_000.0,
        customer_acquisition_cost: 500.0,
        customer_lifetime_value: 8_000.0,
        conversion_rate: 6.0,
        monthly_leads: 300.0,
        converted_customers: 18.0,
        customer_lifetime_span: 24.0,
        churn_rate: 4.0,
        sales_cycle_length: 60.0,
        average_order_value: 1_500.0,
    }
}

fn technology_command() -> GenerateRoiReportCommand {
    GenerateRoiReportCommand {
        kpis: technology_kpis(),
        activities: SalesActivities::with_active(&[MarketingActivity::ColdCalls]),
        industry: "Technology".to_string(),
        company_size: "51-200".to_string(),
        ..Default::default()
    }
}

// =============================================================================
// Technology / 51-200 scenario
// =============================================================================

#[test]
fn technology_scenario_returns_sorted_bounded_recommendations() {
    let handler = GenerateRoiReportHandler::standard(EngineConfig::default());
    let report = handler.handle(technology_command());
    let recs = &report.recommendations;

    assert!(!recs.is_empty());
    assert!(recs.len() <= 8);
    for rec in recs {
        assert!((0.0..=100.0).contains(&rec.score));
        assert!((0.0..=100.0).contains(&rec.confidence));
    }
    for pair in recs.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
        if pair[0].priority == pair[1].priority {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn technology_scenario_prefers_content_and_seo_over_trade_shows() {
    let cmd = technology_command();
    let metrics = calculate_roi_metrics(&cmd.kpis, &cmd.costs, &cmd.goals, &cmd.industry, &cmd.company_size);
    let maturity = assess_company_maturity(&metrics.kpis, &metrics.costs, &cmd.industry, None);
    let inputs = calculate_fuzzy_inputs(&metrics.kpis, &metrics.costs, &maturity);

    let score = |a: MarketingActivity| infer(&STANDARD_KNOWLEDGE_BASE, &inputs, a.key()).output_value;
    let content = score(MarketingActivity::ContentMarketing);
    let seo = score(MarketingActivity::SeoContent);
    let trade_shows = score(MarketingActivity::TradeShows);

    assert!(content > trade_shows, "content {} vs trade shows {}", content, trade_shows);
    assert!(seo > trade_shows, "seo {} vs trade shows {}", seo, trade_shows);

    let handler = GenerateRoiReportHandler::standard(EngineConfig {
        max_recommendations: MarketingActivity::ALL.len(),
        ..Default::default()
    });
    let report = handler.handle(cmd);
    let position = |a: MarketingActivity| {
        report
            .recommendations
            .iter()
            .position(|r| r.activity == a)
            .unwrap_or_else(|| panic!("{} missing from full ranking", a.key()))
    };
    assert!(position(MarketingActivity::ContentMarketing) < position(MarketingActivity::TradeShows));
    assert!(position(MarketingActivity::SeoContent) < position(MarketingActivity::TradeShows));
}

#[test]
fn technology_scenario_excludes_active_channels() {
    let handler = GenerateRoiReportHandler::standard(EngineConfig::default());
    let report = handler.handle(technology_command());

    assert!(report
        .recommendations
        .iter()
        .all(|r| r.activity != MarketingActivity::ColdCalls));
    assert!(report
        .opportunity_costs
        .iter()
        .all(|c| c.activity != MarketingActivity::ColdCalls));
    assert!(report
        .opportunity_costs
        .windows(2)
        .all(|w| w[0].priority >= w[1].priority));
}

#[test]
fn reports_are_deterministic() {
    let handler = GenerateRoiReportHandler::standard(EngineConfig::default());
    let first = handler.handle(technology_command());
    let second = handler.handle(technology_command());
    assert_eq!(first, second);
}

#[test]
fn handler_is_shareable_across_threads() {
    let handler = std::sync::Arc::new(GenerateRoiReportHandler::standard(EngineConfig::default()));
    let expected = handler.handle(technology_command());

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handler = handler.clone();
            std::thread::spawn(move || handler.handle(technology_command()))
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

// =============================================================================
// All-zero scenario
// =============================================================================

#[test]
fn all_zero_inputs_are_filled_from_benchmarks() {
    let metrics = calculate_roi_metrics(
        &CurrentKpis::default(),
        &CurrentCosts::default(),
        &Goals::default(),
        "Technology",
        "51-200",
    );

    assert!(!metrics.is_using_defaults.is_empty());
    assert!(metrics.is_using_defaults.values().all(|flag| *flag));
    assert!(metrics.current_roi.is_finite());
    assert!(metrics.projected_roi.is_finite());

    let defaults = get_intelligent_defaults("Technology", "51-200");
    assert_eq!(metrics.kpis, defaults.kpis);
    assert_eq!(metrics.costs, defaults.costs);
}

#[test]
fn all_zero_report_is_complete() {
    let handler = GenerateRoiReportHandler::standard(EngineConfig::default());
    let report = handler.handle(GenerateRoiReportCommand {
        industry: "Unknown".to_string(),
        company_size: "Unknown".to_string(),
        ..Default::default()
    });

    assert!(report.metrics.uses_any_defaults());
    assert_eq!(report.opportunity_costs.len(), MarketingActivity::ALL.len());
    assert!(report.metrics.current_roi.is_finite());
    assert!(report
        .next_steps
        .immediate
        .iter()
        .any(|t| t.id == "setup-first-channel"));
}

#[test]
fn all_zero_inference_returns_no_evidence() {
    let kb = &*STANDARD_KNOWLEDGE_BASE;
    let inputs: FuzzyInputs = kb
        .input_variables()
        .map(|v| (v.name.clone(), 0.0))
        .collect();

    for activity in MarketingActivity::ALL {
        let result = infer(kb, &inputs, activity.key());
        assert_eq!(result.output_value, 0.0, "{}", activity.key());
        assert_eq!(result.confidence, 0.0);
        assert!(result.reasoning.is_empty());
    }
}

#[test]
fn zero_denominators_never_produce_nan_inputs() {
    let kpis = CurrentKpis {
        customer_lifetime_value: 5_000.0,
        monthly_revenue: 10_000.0,
        ..Default::default()
    };
    let costs = CurrentCosts::default();
    let maturity = assess_company_maturity(&kpis, &costs, "SaaS", None);
    let inputs = calculate_fuzzy_inputs(&kpis, &costs, &maturity);
    assert!(inputs.values().all(|v| v.is_finite()));
}

#[test]
fn tool_inventory_flows_into_opportunity_costs() {
    let mut tools = BTreeMap::new();
    tools.insert("crm".to_string(), true);
    tools.insert("analytics".to_string(), true);

    let handler = GenerateRoiReportHandler::standard(EngineConfig::default());
    let report = handler.handle(GenerateRoiReportCommand {
        available_tools: Some(tools),
        ..technology_command()
    });

    assert!(report.opportunity_costs.iter().all(|c| c.tool_validation.is_some()));
    let partnerships = report
        .opportunity_costs
        .iter()
        .find(|c| c.activity == MarketingActivity::Partnerships)
        .unwrap();
    assert!(partnerships.tool_validation.as_ref().unwrap().has_all_required);
    assert!(report
        .next_steps
        .tasks()
        .all(|t| t.id != "setup-crm" && t.id != "setup-tracking"));
}

// =============================================================================
// Properties
// =============================================================================

/// Missing, negative and non-finite values mixed with a realistic range.
fn edge_or(range: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-1.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        range,
    ]
}

proptest! {
    #[test]
    fn recommendations_stay_in_range(
        revenue in 0.0f64..5_000_000.0,
        cac in 0.0f64..5_000.0,
        ltv in 0.0f64..100_000.0,
        conversion in 0.0f64..40.0,
        marketing in 0.0f64..500_000.0,
        technology in 0.0f64..100_000.0,
    ) {
        let kpis = CurrentKpis {
            monthly_revenue: revenue,
            customer_acquisition_cost: cac,
            customer_lifetime_value: ltv,
            conversion_rate: conversion,
            ..Default::default()
        };
        let costs = CurrentCosts {
            marketing_budget: marketing,
            technology_cost: technology,
            ..Default::default()
        };
        let recs = generate_fuzzy_logic_recommendations(
            &STANDARD_KNOWLEDGE_BASE,
            &RecommendationOptions::default(),
            &SalesActivities::none(),
            &kpis,
            &costs,
            "Ecommerce",
            "11-50",
            None,
        );
        prop_assert!(recs.len() <= 8);
        for rec in &recs {
            prop_assert!(rec.score > 10.0 && rec.score <= 100.0);
            prop_assert!((0.0..=100.0).contains(&rec.confidence));
        }
    }

    #[test]
    fn roi_metrics_are_always_finite(
        revenue in edge_or(0.0..1e12),
        marketing in edge_or(0.0..1e9),
        cac in edge_or(0.0..1e6),
    ) {
        let kpis = CurrentKpis {
            monthly_revenue: revenue,
            customer_acquisition_cost: cac,
            ..Default::default()
        };
        let costs = CurrentCosts {
            marketing_budget: marketing,
            ..Default::default()
        };
        let metrics = calculate_roi_metrics(&kpis, &costs, &Goals::default(), "Retail", "1-10");
        prop_assert!(metrics.current_roi.is_finite());
        prop_assert!(metrics.projected_roi.is_finite());
        prop_assert!(metrics.ltv_cac_ratio.is_finite());
        prop_assert!(metrics.payback_period_months.is_finite());
    }
}
