//! Marketing Module - ROI analysis and channel recommendations.
//!
//! # Components
//!
//! - `benchmarks` / `roi_metrics` - Intelligent defaults and headline ROI figures
//! - `maturity` / `fuzzy_inputs` - Company profile and crisp fuzzy inputs
//! - `rule_base` - Calibrated variables and per-activity rules
//! - `catalog` / `tools` - Static per-activity reference data
//! - `opportunity_cost` - Revenue forgone per inactive activity
//! - `recommendations` - Fuzzy-scored, ranked recommendations
//! - `next_steps` - Bucketed task plan built from recommendations
//!
//! Every function here is pure and deterministic. The knowledge base is an
//! explicit argument, so alternate rule sets can be swapped in for tests.

mod activity;
mod benchmarks;
mod catalog;
mod fuzzy_inputs;
mod industry;
mod kpis;
mod maturity;
mod next_steps;
mod opportunity_cost;
mod recommendations;
mod roi_metrics;
mod rule_base;
mod tools;

pub use activity::{MarketingActivity, SalesActivities};
pub use benchmarks::{
    get_intelligent_defaults, industry_benchmark, size_benchmark, BenchmarkDefaults, IndustryBenchmark,
    SizeBenchmark, FALLBACK_INDUSTRY, FALLBACK_SIZE,
};
pub use catalog::{
    activity_profile, industry_multiplier, prerequisites_for, risks_for, size_multiplier, ActivityProfile,
    Multiplier, RiskLevel,
};
pub use fuzzy_inputs::{calculate_fuzzy_inputs, marketing_efficiency};
pub use industry::{CompanySize, Industry};
pub use kpis::{CurrentCosts, CurrentKpis, Goals};
pub use maturity::{assess_company_maturity, digital_maturity, CompanyMaturity, MaturityStage};
pub use next_steps::{
    generate_next_steps_plan, market_fit_score, readiness_level, NextStepTask, NextStepsPlan, PlanLimits,
    ReadinessLevel, TaskCategory, TaskPriority,
};
pub use opportunity_cost::{calculate_opportunity_costs, priority_score, OpportunityCost};
pub use recommendations::{
    generate_fuzzy_logic_recommendations, timeframe_for, FuzzyLogicRecommendation, ImplementationPlan,
    RecommendationOptions, RecommendationPriority,
};
pub use roi_metrics::{calculate_roi_metrics, fill_costs, fill_kpis, ROIMetrics};
pub use rule_base::{
    standard_knowledge_base, standard_rules, standard_variables, COMPANY_MATURITY, CONVERSION_RATE,
    CUSTOMER_ACQUISITION_COST, LTV_CAC_RATIO, MARKETING_EFFICIENCY, RECOMMENDATION_SCORE,
    STANDARD_KNOWLEDGE_BASE,
};
pub use tools::{validate_tools, ToolRequirement, ToolValidation};
