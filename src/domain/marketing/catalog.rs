//! Activity Catalog - Static per-activity reference data.
//!
//! Baseline economics, tooling, prerequisites, risks and resources for each
//! [`MarketingActivity`], plus industry and company-size multipliers. Adding
//! an activity means adding rows here, not branches elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tools::*;
use super::{CompanySize, Industry, MarketingActivity, MaturityStage};

/// Execution risk of adopting an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Inverse-risk score used in priority weighting (higher is safer).
    pub fn safety_score(&self) -> f64 {
        match self {
            RiskLevel::Low => 10.0,
            RiskLevel::Medium => 6.0,
            RiskLevel::High => 3.0,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Static reference data for one activity.
#[derive(Debug, Clone, Copy)]
pub struct ActivityProfile {
    pub activity: MarketingActivity,
    /// Expected ROI in percent before multipliers.
    pub baseline_roi: f64,
    /// Up-front plus first-period cost before multipliers.
    pub implementation_cost: f64,
    pub months_to_implement: f64,
    pub risk_level: RiskLevel,
    pub tools: &'static [ToolRequirement],
    pub prerequisites: &'static [&'static str],
    pub risks: &'static [&'static str],
    pub resources: &'static [&'static str],
}

use MarketingActivity::*;
use RiskLevel::{High, Low, Medium};

/// Indexed by [`MarketingActivity::index`].
static PROFILES: [ActivityProfile; 18] = [
    ActivityProfile {
        activity: ColdCalls,
        baseline_roi: 150.0,
        implementation_cost: 3_000.0,
        months_to_implement: 1.0,
        risk_level: Medium,
        tools: &[CRM, optional(DIALER)],
        prerequisites: &["Targeted prospect list", "Call script and objection handling guide"],
        risks: &["Low connect rates", "Rep burnout"],
        resources: &["1 SDR", "Prospect data source"],
    },
    ActivityProfile {
        activity: ColdEmails,
        baseline_roi: 200.0,
        implementation_cost: 1_500.0,
        months_to_implement: 1.0,
        risk_level: Medium,
        tools: &[CRM, EMAIL_PLATFORM],
        prerequisites: &["Verified contact list", "Warmed-up sending domain"],
        risks: &["Deliverability problems", "Spam complaints"],
        resources: &["Copywriter", "Outbound sequence templates"],
    },
    ActivityProfile {
        activity: LinkedinOutreach,
        baseline_roi: 180.0,
        implementation_cost: 2_000.0,
        months_to_implement: 1.0,
        risk_level: Low,
        tools: &[SALES_NAVIGATOR, optional(CRM)],
        prerequisites: &["Optimized team LinkedIn profiles", "Defined ideal customer profile"],
        risks: &["Account restrictions from over-automation"],
        resources: &["Part-time SDR", "Connection message templates"],
    },
    ActivityProfile {
        activity: ContentMarketing,
        baseline_roi: 300.0,
        implementation_cost: 5_000.0,
        months_to_implement: 6.0,
        risk_level: Low,
        tools: &[CMS, ANALYTICS, optional(DESIGN_TOOL)],
        prerequisites: &["Documented buyer personas", "Editorial calendar"],
        risks: &["Slow time to results", "Inconsistent publishing cadence"],
        resources: &["Content writer", "Editor", "Distribution checklist"],
    },
    ActivityProfile {
        activity: SeoContent,
        baseline_roi: 350.0,
        implementation_cost: 6_000.0,
        months_to_implement: 6.0,
        risk_level: Low,
        tools: &[CMS, SEO_TOOL, ANALYTICS],
        prerequisites: &["Keyword research", "Technically sound website"],
        risks: &["Search algorithm changes", "Competitive keywords"],
        resources: &["SEO specialist", "Content writer"],
    },
    ActivityProfile {
        activity: SocialMediaAds,
        baseline_roi: 150.0,
        implementation_cost: 8_000.0,
        months_to_implement: 1.0,
        risk_level: Medium,
        tools: &[AD_PLATFORM, ANALYTICS, optional(DESIGN_TOOL)],
        prerequisites: &["Conversion tracking pixel", "Landing pages per audience"],
        risks: &["Rising ad costs", "Creative fatigue"],
        resources: &["Paid social manager", "Creative budget"],
    },
    ActivityProfile {
        activity: GoogleAds,
        baseline_roi: 200.0,
        implementation_cost: 10_000.0,
        months_to_implement: 1.0,
        risk_level: Medium,
        tools: &[AD_PLATFORM, ANALYTICS],
        prerequisites: &["Conversion tracking", "Negative keyword list"],
        risks: &["Bid inflation on competitive terms", "Wasted spend on broad match"],
        resources: &["PPC specialist", "Monthly media budget"],
    },
    ActivityProfile {
        activity: EmailMarketing,
        baseline_roi: 400.0,
        implementation_cost: 2_000.0,
        months_to_implement: 1.0,
        risk_level: Low,
        tools: &[EMAIL_PLATFORM, optional(MARKETING_AUTOMATION)],
        prerequisites: &["Opt-in subscriber list", "Segmentation by lifecycle stage"],
        risks: &["List fatigue", "Unsubscribes from over-sending"],
        resources: &["Email marketer", "Nurture sequence templates"],
    },
    ActivityProfile {
        activity: Webinars,
        baseline_roi: 250.0,
        implementation_cost: 4_000.0,
        months_to_implement: 2.0,
        risk_level: Medium,
        tools: &[WEBINAR_PLATFORM, EMAIL_PLATFORM],
        prerequisites: &["Subject-matter expert presenter", "Registration landing page"],
        risks: &["Low attendance", "Weak follow-up after the event"],
        resources: &["Presenter", "Event coordinator"],
    },
    ActivityProfile {
        activity: TradeShows,
        baseline_roi: 120.0,
        implementation_cost: 25_000.0,
        months_to_implement: 4.0,
        risk_level: High,
        tools: &[CRM, optional(EVENT_MANAGEMENT), optional(DESIGN_TOOL)],
        prerequisites: &["Booth materials", "Lead capture process"],
        risks: &["High fixed cost", "Poor lead follow-up"],
        resources: &["Event team", "Travel budget", "Booth staff"],
    },
    ActivityProfile {
        activity: ReferralProgram,
        baseline_roi: 350.0,
        implementation_cost: 3_000.0,
        months_to_implement: 2.0,
        risk_level: Low,
        tools: &[CRM, optional(REFERRAL_SOFTWARE)],
        prerequisites: &["Satisfied customer base", "Referral incentive structure"],
        risks: &["Low participation", "Incentive abuse"],
        resources: &["Customer success owner", "Incentive budget"],
    },
    ActivityProfile {
        activity: Partnerships,
        baseline_roi: 280.0,
        implementation_cost: 5_000.0,
        months_to_implement: 4.0,
        risk_level: Medium,
        tools: &[CRM],
        prerequisites: &["Partner value proposition", "Co-marketing agreement template"],
        risks: &["Misaligned partner incentives", "Slow partner onboarding"],
        resources: &["Partnership manager", "Enablement materials"],
    },
    ActivityProfile {
        activity: InfluencerMarketing,
        baseline_roi: 180.0,
        implementation_cost: 10_000.0,
        months_to_implement: 2.0,
        risk_level: High,
        tools: &[ANALYTICS, optional(SOCIAL_SCHEDULER)],
        prerequisites: &["Influencer shortlist", "Trackable discount codes or links"],
        risks: &["Brand safety", "Hard-to-measure attribution"],
        resources: &["Influencer manager", "Campaign budget"],
    },
    ActivityProfile {
        activity: Podcasts,
        baseline_roi: 160.0,
        implementation_cost: 6_000.0,
        months_to_implement: 3.0,
        risk_level: Medium,
        tools: &[PODCAST_HOSTING, optional(VIDEO_EDITING)],
        prerequisites: &["Show format and guest pipeline", "Recording setup"],
        risks: &["Slow audience growth", "Production overhead"],
        resources: &["Host", "Audio editor"],
    },
    ActivityProfile {
        activity: VideoMarketing,
        baseline_roi: 220.0,
        implementation_cost: 8_000.0,
        months_to_implement: 3.0,
        risk_level: Medium,
        tools: &[VIDEO_EDITING, optional(SOCIAL_SCHEDULER)],
        prerequisites: &["Video content plan", "Brand guidelines for video"],
        risks: &["High production cost", "Low view-through"],
        resources: &["Videographer", "Editor"],
    },
    ActivityProfile {
        activity: DirectMail,
        baseline_roi: 110.0,
        implementation_cost: 7_000.0,
        months_to_implement: 2.0,
        risk_level: High,
        tools: &[PRINT_VENDOR, CRM],
        prerequisites: &["Verified postal addresses", "Offer with a trackable response path"],
        risks: &["High cost per touch", "Outdated address data"],
        resources: &["Designer", "Print budget"],
    },
    ActivityProfile {
        activity: AffiliateMarketing,
        baseline_roi: 250.0,
        implementation_cost: 4_000.0,
        months_to_implement: 2.0,
        risk_level: Medium,
        tools: &[AFFILIATE_PLATFORM, ANALYTICS],
        prerequisites: &["Commission structure", "Affiliate terms and policies"],
        risks: &["Affiliate fraud", "Margin erosion"],
        resources: &["Affiliate manager", "Creative assets for partners"],
    },
    ActivityProfile {
        activity: PublicRelations,
        baseline_roi: 150.0,
        implementation_cost: 12_000.0,
        months_to_implement: 6.0,
        risk_level: High,
        tools: &[optional(PR_DATABASE)],
        prerequisites: &["Newsworthy company story", "Press kit"],
        risks: &["Unpredictable coverage", "Difficult attribution"],
        resources: &["PR agency or specialist", "Spokesperson"],
    },
];

/// Returns the static profile for `activity`.
pub fn activity_profile(activity: MarketingActivity) -> &'static ActivityProfile {
    &PROFILES[activity.index()]
}

/// ROI and cost multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multiplier {
    pub roi: f64,
    pub cost: f64,
}

impl Multiplier {
    pub const NEUTRAL: Multiplier = Multiplier { roi: 1.0, cost: 1.0 };

    const fn new(roi: f64, cost: f64) -> Self {
        Self { roi, cost }
    }
}

static INDUSTRY_MULTIPLIERS: &[(Industry, MarketingActivity, Multiplier)] = &[
    (Industry::Technology, LinkedinOutreach, Multiplier::new(1.3, 1.0)),
    (Industry::Technology, ContentMarketing, Multiplier::new(1.2, 1.0)),
    (Industry::Technology, SeoContent, Multiplier::new(1.2, 1.0)),
    (Industry::Technology, Webinars, Multiplier::new(1.3, 1.0)),
    (Industry::Technology, TradeShows, Multiplier::new(0.9, 1.1)),
    (Industry::Saas, ContentMarketing, Multiplier::new(1.3, 1.0)),
    (Industry::Saas, SeoContent, Multiplier::new(1.3, 1.0)),
    (Industry::Saas, EmailMarketing, Multiplier::new(1.2, 1.0)),
    (Industry::Saas, Webinars, Multiplier::new(1.2, 1.0)),
    (Industry::Saas, AffiliateMarketing, Multiplier::new(1.2, 1.0)),
    (Industry::Ecommerce, SocialMediaAds, Multiplier::new(1.4, 1.0)),
    (Industry::Ecommerce, GoogleAds, Multiplier::new(1.3, 1.0)),
    (Industry::Ecommerce, InfluencerMarketing, Multiplier::new(1.5, 0.9)),
    (Industry::Ecommerce, EmailMarketing, Multiplier::new(1.4, 1.0)),
    (Industry::Ecommerce, ColdCalls, Multiplier::new(0.4, 1.0)),
    (Industry::Healthcare, ContentMarketing, Multiplier::new(1.2, 1.0)),
    (Industry::Healthcare, ColdEmails, Multiplier::new(0.7, 1.0)),
    (Industry::Healthcare, InfluencerMarketing, Multiplier::new(0.6, 1.0)),
    (Industry::Finance, PublicRelations, Multiplier::new(1.3, 1.0)),
    (Industry::Finance, Webinars, Multiplier::new(1.2, 1.0)),
    (Industry::Finance, SocialMediaAds, Multiplier::new(0.8, 1.2)),
    (Industry::Manufacturing, TradeShows, Multiplier::new(1.5, 1.0)),
    (Industry::Manufacturing, DirectMail, Multiplier::new(1.2, 1.0)),
    (Industry::Manufacturing, InfluencerMarketing, Multiplier::new(0.5, 1.0)),
    (Industry::ProfessionalServices, ReferralProgram, Multiplier::new(1.5, 1.0)),
    (Industry::ProfessionalServices, Partnerships, Multiplier::new(1.3, 1.0)),
    (Industry::ProfessionalServices, LinkedinOutreach, Multiplier::new(1.3, 1.0)),
    (Industry::Retail, SocialMediaAds, Multiplier::new(1.3, 1.0)),
    (Industry::Retail, DirectMail, Multiplier::new(1.2, 1.0)),
    (Industry::Retail, InfluencerMarketing, Multiplier::new(1.3, 1.0)),
    (Industry::Education, Webinars, Multiplier::new(1.4, 1.0)),
    (Industry::Education, ContentMarketing, Multiplier::new(1.2, 1.0)),
    (Industry::RealEstate, DirectMail, Multiplier::new(1.3, 1.0)),
    (Industry::RealEstate, ReferralProgram, Multiplier::new(1.4, 1.0)),
    (Industry::RealEstate, VideoMarketing, Multiplier::new(1.2, 1.0)),
];

static SIZE_MULTIPLIERS: &[(CompanySize, Multiplier)] = &[
    (CompanySize::Micro, Multiplier::new(0.8, 0.6)),
    (CompanySize::Small, Multiplier::new(0.9, 0.8)),
    (CompanySize::Medium, Multiplier::new(1.0, 1.0)),
    (CompanySize::Large, Multiplier::new(1.1, 1.3)),
    (CompanySize::Enterprise, Multiplier::new(1.15, 1.6)),
    (CompanySize::Corporate, Multiplier::new(1.2, 2.0)),
];

/// Industry override for `activity`, neutral when none is defined.
pub fn industry_multiplier(industry: Option<Industry>, activity: MarketingActivity) -> Multiplier {
    industry
        .and_then(|ind| {
            INDUSTRY_MULTIPLIERS
                .iter()
                .find(|(i, a, _)| *i == ind && *a == activity)
                .map(|(_, _, m)| *m)
        })
        .unwrap_or(Multiplier::NEUTRAL)
}

/// Company-size multiplier, neutral for unknown sizes.
pub fn size_multiplier(company_size: Option<CompanySize>) -> Multiplier {
    company_size
        .and_then(|size| SIZE_MULTIPLIERS.iter().find(|(s, _)| *s == size).map(|(_, m)| *m))
        .unwrap_or(Multiplier::NEUTRAL)
}

/// Stage-specific additions to an activity's prerequisites and risks.
struct StageNotes {
    prerequisite: &'static str,
    risk: &'static str,
}

fn stage_notes(stage: MaturityStage) -> StageNotes {
    match stage {
        MaturityStage::Startup => StageNotes {
            prerequisite: "Validate a repeatable sales message with early customers",
            risk: "Limited budget may not sustain the channel long enough to see results",
        },
        MaturityStage::Growth => StageNotes {
            prerequisite: "Document the ideal customer profile",
            risk: "Scaling too many channels at once can dilute focus",
        },
        MaturityStage::Mature => StageNotes {
            prerequisite: "Connect the channel to existing attribution reporting",
            risk: "Incremental returns may be lower in saturated markets",
        },
        MaturityStage::Enterprise => StageNotes {
            prerequisite: "Secure brand and compliance sign-off",
            risk: "Approval cycles can delay launch",
        },
    }
}

/// Activity prerequisites followed by the stage-specific prerequisite.
pub fn prerequisites_for(activity: MarketingActivity, stage: MaturityStage) -> Vec<String> {
    activity_profile(activity)
        .prerequisites
        .iter()
        .copied()
        .chain(std::iter::once(stage_notes(stage).prerequisite))
        .map(String::from)
        .collect()
}

/// Activity risks followed by the stage-specific risk.
pub fn risks_for(activity: MarketingActivity, stage: MaturityStage) -> Vec<String> {
    activity_profile(activity)
        .risks
        .iter()
        .copied()
        .chain(std::iter::once(stage_notes(stage).risk))
        .map(String::from)
        .collect()
}
