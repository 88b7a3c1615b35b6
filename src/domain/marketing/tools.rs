//! Tooling requirements per activity and validation against the tenant's stack.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::activity_profile;
use super::MarketingActivity;

/// A tool an activity needs (or benefits from).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolRequirement {
    /// Key matched against the tenant's `available_tools` map.
    pub key: &'static str,
    pub name: &'static str,
    pub optional: bool,
    pub setup_cost: f64,
    pub monthly_cost: f64,
}

const fn required(key: &'static str, name: &'static str, setup_cost: f64, monthly_cost: f64) -> ToolRequirement {
    ToolRequirement {
        key,
        name,
        optional: false,
        setup_cost,
        monthly_cost,
    }
}

/// Marks a tool as nice-to-have.
pub(crate) const fn optional(tool: ToolRequirement) -> ToolRequirement {
    ToolRequirement {
        optional: true,
        ..tool
    }
}

pub const CRM: ToolRequirement = required("crm", "CRM", 500.0, 150.0);
pub const ANALYTICS: ToolRequirement = required("analytics", "Web analytics", 200.0, 50.0);
pub const EMAIL_PLATFORM: ToolRequirement = required("email_platform", "Email platform", 100.0, 100.0);
pub const MARKETING_AUTOMATION: ToolRequirement =
    required("marketing_automation", "Marketing automation", 1_000.0, 400.0);
pub const DIALER: ToolRequirement = required("dialer", "Sales dialer", 200.0, 120.0);
pub const SALES_NAVIGATOR: ToolRequirement = required("sales_navigator", "LinkedIn Sales Navigator", 0.0, 100.0);
pub const CMS: ToolRequirement = required("cms", "Content management system", 500.0, 50.0);
pub const SEO_TOOL: ToolRequirement = required("seo_tool", "SEO research tool", 0.0, 130.0);
pub const AD_PLATFORM: ToolRequirement = required("ad_platform", "Ad account and tracking", 300.0, 0.0);
pub const SOCIAL_SCHEDULER: ToolRequirement = required("social_scheduler", "Social scheduler", 0.0, 60.0);
pub const WEBINAR_PLATFORM: ToolRequirement = required("webinar_platform", "Webinar platform", 100.0, 150.0);
pub const VIDEO_EDITING: ToolRequirement = required("video_editing", "Video editing suite", 300.0, 55.0);
pub const DESIGN_TOOL: ToolRequirement = required("design_tool", "Design tool", 0.0, 30.0);
pub const EVENT_MANAGEMENT: ToolRequirement = required("event_management", "Event management", 500.0, 200.0);
pub const REFERRAL_SOFTWARE: ToolRequirement = required("referral_software", "Referral software", 300.0, 100.0);
pub const AFFILIATE_PLATFORM: ToolRequirement = required("affiliate_platform", "Affiliate platform", 500.0, 300.0);
pub const PR_DATABASE: ToolRequirement = required("pr_database", "Media contact database", 0.0, 250.0);
pub const PODCAST_HOSTING: ToolRequirement = required("podcast_hosting", "Podcast hosting", 0.0, 20.0);
pub const PRINT_VENDOR: ToolRequirement = required("print_vendor", "Print and mail vendor", 250.0, 0.0);

/// Result of checking an activity's tooling against the tenant's stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolValidation {
    /// Keys of the non-optional tools the activity needs.
    pub required_tools: Vec<String>,
    /// Required tools the tenant does not have.
    pub missing_tools: Vec<String>,
    /// Optional tools the tenant does not have. These add no cost.
    pub missing_optional: Vec<String>,
    pub has_all_required: bool,
    /// Setup plus running cost of the missing required tools over the
    /// implementation period.
    pub additional_cost: f64,
}

/// Validates `activity`'s tooling against `available_tools`.
///
/// A tool counts as present only when its key maps to `true`.
pub fn validate_tools(
    activity: MarketingActivity,
    available_tools: &BTreeMap<String, bool>,
    months_to_implement: f64,
) -> ToolValidation {
    let has = |key: &str| available_tools.get(key).copied().unwrap_or(false);
    let tools = activity_profile(activity).tools;

    let mut validation = ToolValidation {
        required_tools: Vec::new(),
        missing_tools: Vec::new(),
        missing_optional: Vec::new(),
        has_all_required: true,
        additional_cost: 0.0,
    };

    for tool in tools {
        if tool.optional {
            if !has(tool.key) {
                validation.missing_optional.push(tool.key.to_string());
            }
            continue;
        }
        validation.required_tools.push(tool.key.to_string());
        if !has(tool.key) {
            validation.missing_tools.push(tool.key.to_string());
            validation.additional_cost += tool.setup_cost + tool.monthly_cost * months_to_implement.max(1.0);
        }
    }
    validation.has_all_required = validation.missing_tools.is_empty();
    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools(keys: &[&str]) -> BTreeMap<String, bool> {
        keys.iter().map(|k| (k.to_string(), true)).collect()
    }

    #[test]
    fn complete_stack_adds_no_cost() {
        let validation = validate_tools(MarketingActivity::SeoContent, &tools(&["cms", "seo_tool", "analytics"]), 6.0);
        assert!(validation.has_all_required);
        assert!(validation.missing_tools.is_empty());
        assert_eq!(validation.additional_cost, 0.0);
    }

    #[test]
    fn missing_required_tool_adds_setup_and_running_cost() {
        let validation = validate_tools(MarketingActivity::SeoContent, &tools(&["cms", "analytics"]), 6.0);
        assert!(!validation.has_all_required);
        assert_eq!(validation.missing_tools, vec!["seo_tool".to_string()]);
        assert_eq!(validation.additional_cost, SEO_TOOL.setup_cost + SEO_TOOL.monthly_cost * 6.0);
    }

    #[test]
    fn missing_optional_tool_does_not_block() {
        let validation = validate_tools(MarketingActivity::ColdCalls, &tools(&["crm"]), 1.0);
        assert!(validation.has_all_required);
        assert_eq!(validation.missing_optional, vec!["dialer".to_string()]);
        assert_eq!(validation.additional_cost, 0.0);
    }

    #[test]
    fn false_flag_counts_as_missing() {
        let mut available = tools(&[]);
        available.insert("crm".to_string(), false);
        let validation = validate_tools(MarketingActivity::ColdCalls, &available, 1.0);
        assert_eq!(validation.missing_tools, vec!["crm".to_string()]);
    }

    #[test]
    fn every_activity_lists_at_least_one_tool() {
        for activity in MarketingActivity::ALL {
            assert!(!activity_profile(activity).tools.is_empty(), "{}", activity.key());
        }
    }
}
