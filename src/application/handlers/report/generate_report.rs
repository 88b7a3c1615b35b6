//! GenerateRoiReportHandler - Produces the full ROI report for one tenant state.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineConfig;
use crate::domain::fuzzy::KnowledgeBase;
use crate::domain::marketing::{
    calculate_opportunity_costs, calculate_roi_metrics, generate_fuzzy_logic_recommendations,
    generate_next_steps_plan, CurrentCosts, CurrentKpis, FuzzyLogicRecommendation, Goals, NextStepsPlan,
    OpportunityCost, ROIMetrics, SalesActivities, STANDARD_KNOWLEDGE_BASE,
};

/// Command to generate an ROI report.
///
/// Zero or absent numeric fields are treated as "not reported".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRoiReportCommand {
    pub kpis: CurrentKpis,
    pub costs: CurrentCosts,
    pub goals: Goals,
    pub activities: SalesActivities,
    pub industry: String,
    pub company_size: String,
    /// Tool key → whether the tenant has it. `None` skips tool validation.
    pub available_tools: Option<BTreeMap<String, bool>>,
}

/// Everything the engine produces for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ROIReport {
    pub metrics: ROIMetrics,
    pub opportunity_costs: Vec<OpportunityCost>,
    pub recommendations: Vec<FuzzyLogicRecommendation>,
    pub next_steps: NextStepsPlan,
}

/// Handler for generating ROI reports.
///
/// Holds an immutable knowledge base; safe to share across threads.
pub struct GenerateRoiReportHandler {
    knowledge_base: Arc<KnowledgeBase>,
    config: EngineConfig,
}

impl GenerateRoiReportHandler {
    /// Uses `knowledge_base` as given, including its activation threshold.
    pub fn new(knowledge_base: Arc<KnowledgeBase>, config: EngineConfig) -> Self {
        Self {
            knowledge_base,
            config,
        }
    }

    /// Uses the standard knowledge base with the configured activation threshold.
    pub fn standard(config: EngineConfig) -> Self {
        let knowledge_base = STANDARD_KNOWLEDGE_BASE
            .clone()
            .with_activation_threshold(config.activation_threshold);
        Self::new(Arc::new(knowledge_base), config)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn handle(&self, cmd: GenerateRoiReportCommand) -> ROIReport {
        let tools = cmd.available_tools.as_ref();

        let metrics = calculate_roi_metrics(&cmd.kpis, &cmd.costs, &cmd.goals, &cmd.industry, &cmd.company_size);

        let opportunity_costs = calculate_opportunity_costs(
            &cmd.activities,
            &cmd.kpis,
            &cmd.costs,
            &cmd.industry,
            &cmd.company_size,
            tools,
        );

        let recommendations = generate_fuzzy_logic_recommendations(
            &self.knowledge_base,
            &self.config.recommendation_options(),
            &cmd.activities,
            &cmd.kpis,
            &cmd.costs,
            &cmd.industry,
            &cmd.company_size,
            tools,
        );

        let next_steps = generate_next_steps_plan(
            &recommendations,
            &cmd.activities,
            &cmd.kpis,
            &cmd.costs,
            &cmd.industry,
            &cmd.company_size,
            tools,
            &self.config.plan_limits(),
        );

        info!(
            industry = %cmd.industry,
            company_size = %cmd.company_size,
            current_roi = metrics.current_roi,
            uses_defaults = metrics.uses_any_defaults(),
            opportunities = opportunity_costs.len(),
            recommendations = recommendations.len(),
            readiness = %next_steps.readiness_level,
            "Generated ROI report"
        );

        ROIReport {
            metrics,
            opportunity_costs,
            recommendations,
            next_steps,
        }
    }
}
