//! Standard Knowledge Base - Calibrated variables and per-activity rules.
//!
//! Input sets are calibrated so that every set has membership 0 at its
//! variable's minimum. Zero therefore carries no evidence, and an all-zero
//! input map activates nothing.

use once_cell::sync::Lazy;

use super::MarketingActivity;
use super::MarketingActivity::*;
use crate::domain::fuzzy::{FuzzyError, FuzzyRule, FuzzySet, FuzzyVariable, KnowledgeBase, MembershipFunction};

pub const CONVERSION_RATE: &str = "conversion_rate";
pub const CUSTOMER_ACQUISITION_COST: &str = "customer_acquisition_cost";
pub const LTV_CAC_RATIO: &str = "ltv_cac_ratio";
pub const COMPANY_MATURITY: &str = "company_maturity";
pub const MARKETING_EFFICIENCY: &str = "marketing_efficiency";
pub const RECOMMENDATION_SCORE: &str = "recommendation_score";

/// Process-wide standard knowledge base, built on first use.
pub static STANDARD_KNOWLEDGE_BASE: Lazy<KnowledgeBase> = Lazy::new(|| {
    standard_knowledge_base().expect("standard fuzzy knowledge base must be well-formed")
});

fn tri(a: f64, b: f64, c: f64) -> Result<MembershipFunction, FuzzyError> {
    MembershipFunction::triangular(a, b, c)
}

fn trap(a: f64, b: f64, c: f64, d: f64) -> Result<MembershipFunction, FuzzyError> {
    MembershipFunction::trapezoidal(a, b, c, d)
}

/// The six linguistic variables, output variable last.
pub fn standard_variables() -> Result<Vec<FuzzyVariable>, FuzzyError> {
    Ok(vec![
        FuzzyVariable::new(
            CONVERSION_RATE,
            0.0,
            20.0,
            vec![
                FuzzySet::new("very_low", trap(0.0, 0.5, 1.0, 2.0)?)?,
                FuzzySet::new("low", tri(1.0, 2.5, 4.0)?)?,
                FuzzySet::new("medium", tri(3.0, 5.0, 7.0)?)?,
                FuzzySet::new("high", tri(6.0, 9.0, 12.0)?)?,
                FuzzySet::new("very_high", trap(10.0, 14.0, 20.0, 20.0)?)?,
            ],
        )?,
        FuzzyVariable::new(
            CUSTOMER_ACQUISITION_COST,
            0.0,
            2000.0,
            vec![
                FuzzySet::new("very_low", trap(0.0, 25.0, 75.0, 150.0)?)?,
                FuzzySet::new("low", tri(75.0, 200.0, 350.0)?)?,
                FuzzySet::new("medium", tri(250.0, 450.0, 700.0)?)?,
                FuzzySet::new("high", tri(600.0, 900.0, 1200.0)?)?,
                FuzzySet::new("very_high", trap(1000.0, 1500.0, 2000.0, 2000.0)?)?,
            ],
        )?,
        FuzzyVariable::new(
            LTV_CAC_RATIO,
            0.0,
            20.0,
            vec![
                FuzzySet::new("poor", trap(0.0, 0.25, 1.0, 2.0)?)?,
                FuzzySet::new("fair", tri(1.0, 2.5, 4.0)?)?,
                FuzzySet::new("good", tri(3.0, 4.5, 6.0)?)?,
                FuzzySet::new("excellent", trap(5.0, 8.0, 20.0, 20.0)?)?,
            ],
        )?,
        FuzzyVariable::new(
            COMPANY_MATURITY,
            0.0,
            10.0,
            vec![
                FuzzySet::new("startup", trap(0.0, 1.0, 2.5, 4.0)?)?,
                FuzzySet::new("growth", tri(2.5, 4.5, 6.5)?)?,
                FuzzySet::new("mature", tri(5.0, 7.0, 9.0)?)?,
                FuzzySet::new("enterprise", trap(8.0, 9.5, 10.0, 10.0)?)?,
            ],
        )?,
        FuzzyVariable::new(
            MARKETING_EFFICIENCY,
            0.0,
            100.0,
            vec![
                FuzzySet::new("low", trap(0.0, 5.0, 15.0, 35.0)?)?,
                FuzzySet::with_range("medium", MembershipFunction::gaussian(45.0, 12.0)?, 20.0, 70.0)?,
                FuzzySet::new("high", tri(55.0, 75.0, 90.0)?)?,
                FuzzySet::with_range("very_high", MembershipFunction::sigmoid(0.3, 88.0)?, 80.0, 100.0)?,
            ],
        )?,
        FuzzyVariable::new(
            RECOMMENDATION_SCORE,
            0.0,
            100.0,
            vec![
                FuzzySet::new("not_recommended", trap(0.0, 0.0, 10.0, 25.0)?)?,
                FuzzySet::new("low", tri(20.0, 35.0, 50.0)?)?,
                FuzzySet::new("medium", tri(40.0, 55.0, 70.0)?)?,
                FuzzySet::new("high", tri(60.0, 75.0, 90.0)?)?,
                FuzzySet::new("very_high", trap(80.0, 92.0, 100.0, 100.0)?)?,
            ],
        )?,
    ])
}

/// One row of the rule table.
struct RuleRow {
    id: &'static str,
    activity: MarketingActivity,
    when: &'static [(&'static str, &'static str, f64)],
    then: &'static str,
    confidence: f64,
    reasoning: &'static str,
}

const fn row(
    id: &'static str,
    activity: MarketingActivity,
    when: &'static [(&'static str, &'static str, f64)],
    then: &'static str,
    confidence: f64,
    reasoning: &'static str,
) -> RuleRow {
    RuleRow {
        id,
        activity,
        when,
        then,
        confidence,
        reasoning,
    }
}

const CONV: &str = CONVERSION_RATE;
const CAC: &str = CUSTOMER_ACQUISITION_COST;
const LTV: &str = LTV_CAC_RATIO;
const MAT: &str = COMPANY_MATURITY;
const EFF: &str = MARKETING_EFFICIENCY;

static RULE_TABLE: &[RuleRow] = &[
    // Cold calls
    row("cold-calls-high-ltv", ColdCalls, &[(LTV, "excellent", 0.6), (MAT, "growth", 0.4)], "high", 0.75,
        "High customer value justifies personal outbound calling"),
    row("cold-calls-low-conversion", ColdCalls, &[(CONV, "very_low", 0.7), (CAC, "high", 0.3)], "low", 0.7,
        "Very low conversion suggests cold calls will struggle to land"),
    // Cold emails
    row("cold-emails-efficient-scale", ColdEmails, &[(CAC, "low", 0.5), (CONV, "medium", 0.5)], "high", 0.75,
        "Affordable acquisition and steady conversion favour scalable email outreach"),
    row("cold-emails-startup", ColdEmails, &[(MAT, "startup", 0.6), (EFF, "low", 0.4)], "medium", 0.7,
        "Early-stage teams can test messaging cheaply with cold email"),
    row("cold-emails-good-ltv", ColdEmails, &[(LTV, "good", 0.5), (CONV, "medium", 0.5)], "medium", 0.65,
        "Healthy unit economics leave room for volume outbound"),
    // LinkedIn outreach
    row("linkedin-b2b-value", LinkedinOutreach, &[(LTV, "excellent", 0.5), (CAC, "medium", 0.5)], "high", 0.8,
        "Valuable customers reward targeted LinkedIn prospecting"),
    row("linkedin-early-stage", LinkedinOutreach, &[(MAT, "startup", 0.5), (LTV, "fair", 0.5)], "medium", 0.65,
        "Founder-led LinkedIn outreach is a low-cost way to find early customers"),
    // Content marketing
    row("content-excellent-ltv", ContentMarketing, &[(LTV, "excellent", 0.7), (MAT, "growth", 0.3)], "very_high", 0.9,
        "Excellent LTV:CAC supports long-horizon content investment"),
    row("content-high-cac", ContentMarketing, &[(CAC, "high", 0.6), (CONV, "medium", 0.4)], "high", 0.8,
        "Content lowers blended acquisition cost when paid channels get expensive"),
    row("content-startup-efficiency", ContentMarketing, &[(MAT, "startup", 0.5), (EFF, "low", 0.5)], "medium", 0.7,
        "Content builds an audience before paid budgets are available"),
    // SEO content
    row("seo-excellent-ltv", SeoContent, &[(LTV, "excellent", 0.7), (MAT, "growth", 0.3)], "very_high", 0.85,
        "Strong unit economics justify compounding organic search traffic"),
    row("seo-good-ltv", SeoContent, &[(LTV, "good", 0.6), (EFF, "medium", 0.4)], "high", 0.75,
        "Organic search reduces dependence on paid acquisition"),
    row("seo-poor-efficiency", SeoContent, &[(EFF, "low", 0.6), (CONV, "very_low", 0.4)], "medium", 0.6,
        "Low marketing efficiency calls for cheaper, durable traffic sources"),
    // Social media ads
    row("social-ads-efficient", SocialMediaAds, &[(EFF, "high", 0.5), (CONV, "high", 0.5)], "high", 0.75,
        "Efficient spend and strong conversion make paid social scalable"),
    row("social-ads-cheap-cac", SocialMediaAds, &[(CAC, "low", 0.6), (LTV, "fair", 0.4)], "medium", 0.7,
        "Low acquisition cost leaves room to test paid social"),
    row("social-ads-poor-ltv", SocialMediaAds, &[(LTV, "poor", 1.0)], "not_recommended", 0.85,
        "Paid social will burn cash while LTV:CAC is below break-even"),
    // Google ads
    row("google-ads-converting", GoogleAds, &[(CONV, "high", 0.6), (LTV, "good", 0.4)], "very_high", 0.8,
        "High-intent search traffic converts well at current rates"),
    row("google-ads-excellent-ltv", GoogleAds, &[(LTV, "excellent", 0.6), (CAC, "medium", 0.4)], "high", 0.75,
        "Customer value comfortably covers search click costs"),
    row("google-ads-poor-ltv", GoogleAds, &[(LTV, "poor", 0.7), (CAC, "very_high", 0.3)], "not_recommended", 0.85,
        "Search ads would deepen losses on already expensive customers"),
    // Email marketing
    row("email-nurture-medium-conversion", EmailMarketing, &[(CONV, "medium", 0.6), (EFF, "medium", 0.4)], "high", 0.8,
        "Nurture sequences can move average conversion higher"),
    row("email-low-conversion", EmailMarketing, &[(CONV, "low", 0.6), (LTV, "good", 0.4)], "very_high", 0.85,
        "Email nurturing lifts weak conversion cheaply"),
    // Webinars
    row("webinars-complex-sale", Webinars, &[(LTV, "excellent", 0.5), (MAT, "growth", 0.5)], "high", 0.75,
        "Webinars educate buyers in high-value, considered purchases"),
    row("webinars-startup", Webinars, &[(MAT, "startup", 0.7), (EFF, "low", 0.3)], "low", 0.65,
        "Webinars need an audience that early-stage companies rarely have"),
    // Trade shows
    row("trade-shows-enterprise", TradeShows, &[(MAT, "enterprise", 0.6), (LTV, "excellent", 0.4)], "high", 0.75,
        "Established brands with valuable customers recoup trade show costs"),
    row("trade-shows-mature", TradeShows, &[(MAT, "mature", 0.5), (LTV, "good", 0.5)], "medium", 0.7,
        "Mature companies can use trade shows to deepen existing markets"),
    row("trade-shows-early-stage", TradeShows, &[(MAT, "growth", 0.5), (EFF, "medium", 0.5)], "low", 0.8,
        "Trade show budgets rarely pay back before the sales motion is proven at scale"),
    row("trade-shows-startup", TradeShows, &[(MAT, "startup", 0.7), (CAC, "high", 0.3)], "not_recommended", 0.85,
        "Trade shows are too expensive for startups with costly acquisition"),
    // Referral program
    row("referral-happy-customers", ReferralProgram, &[(LTV, "excellent", 0.5), (CONV, "medium", 0.5)], "very_high", 0.85,
        "Valuable, converting customers are the best source of referrals"),
    row("referral-startup", ReferralProgram, &[(MAT, "startup", 0.6), (CONV, "high", 0.4)], "high", 0.7,
        "Early customers who convert well tend to refer peers"),
    // Partnerships
    row("partnerships-mature", Partnerships, &[(MAT, "mature", 0.6), (LTV, "good", 0.4)], "high", 0.75,
        "Mature companies can offer partners proven, valuable products"),
    row("partnerships-growth-ltv", Partnerships, &[(MAT, "growth", 0.5), (LTV, "excellent", 0.5)], "high", 0.7,
        "Partner channels extend reach while unit economics are strong"),
    // Influencer marketing
    row("influencer-efficient", InfluencerMarketing, &[(EFF, "high", 0.5), (CAC, "low", 0.5)], "high", 0.7,
        "Efficient marketing and cheap acquisition suit influencer campaigns"),
    row("influencer-high-cac", InfluencerMarketing, &[(CAC, "very_high", 0.6), (LTV, "fair", 0.4)], "low", 0.7,
        "Influencer reach rarely converts when acquisition is already expensive"),
    row("influencer-moderate", InfluencerMarketing, &[(EFF, "medium", 0.6), (CONV, "medium", 0.4)], "medium", 0.6,
        "Moderate efficiency makes influencer tests a reasonable experiment"),
    // Podcasts
    row("podcasts-authority", Podcasts, &[(LTV, "excellent", 0.5), (MAT, "mature", 0.5)], "high", 0.7,
        "Podcasts build authority with high-value audiences"),
    row("podcasts-early", Podcasts, &[(MAT, "startup", 0.6), (EFF, "low", 0.4)], "low", 0.7,
        "Podcast audiences take longer to build than early budgets allow"),
    // Video marketing
    row("video-engagement", VideoMarketing, &[(EFF, "medium", 0.5), (CONV, "medium", 0.5)], "high", 0.7,
        "Video improves engagement at moderate efficiency and conversion"),
    row("video-low-efficiency", VideoMarketing, &[(EFF, "low", 0.6), (MAT, "startup", 0.4)], "low", 0.65,
        "Video production costs outweigh returns at low efficiency"),
    // Direct mail
    row("direct-mail-high-value", DirectMail, &[(LTV, "excellent", 0.5), (CAC, "high", 0.5)], "medium", 0.7,
        "High-value accounts can justify tangible outreach"),
    row("direct-mail-low-value", DirectMail, &[(LTV, "fair", 0.6), (CAC, "low", 0.4)], "not_recommended", 0.8,
        "Direct mail costs exceed the value of low-LTV customers"),
    // Affiliate marketing
    row("affiliate-performance", AffiliateMarketing, &[(CAC, "high", 0.5), (EFF, "high", 0.5)], "high", 0.7,
        "Pay-for-performance affiliates cap acquisition cost"),
    row("affiliate-low-ltv", AffiliateMarketing, &[(LTV, "poor", 0.6), (CONV, "low", 0.4)], "not_recommended", 0.8,
        "Affiliate commissions erase margin at poor LTV:CAC"),
    row("affiliate-good-ltv", AffiliateMarketing, &[(LTV, "good", 0.5), (CONV, "medium", 0.5)], "medium", 0.65,
        "Healthy margins leave room for affiliate commissions"),
    // Public relations
    row("pr-enterprise", PublicRelations, &[(MAT, "enterprise", 0.6), (EFF, "high", 0.4)], "high", 0.75,
        "Established companies benefit from earned media credibility"),
    row("pr-growth", PublicRelations, &[(MAT, "growth", 0.5), (LTV, "excellent", 0.5)], "medium", 0.7,
        "Growing companies with strong economics can start building press coverage"),
    row("pr-startup", PublicRelations, &[(MAT, "startup", 0.7), (EFF, "low", 0.3)], "low", 0.7,
        "PR rarely drives measurable pipeline for early-stage companies"),
];

/// The per-activity rule base.
pub fn standard_rules() -> Vec<FuzzyRule> {
    RULE_TABLE
        .iter()
        .map(|r| {
            r.when
                .iter()
                .fold(FuzzyRule::builder(r.id, r.activity.key()), |b, (var, set, weight)| {
                    b.when(*var, *set, *weight)
                })
                .then(RECOMMENDATION_SCORE, r.then)
                .confidence(r.confidence)
                .reasoning(r.reasoning)
                .build()
        })
        .collect()
}

/// Builds and validates the standard knowledge base.
pub fn standard_knowledge_base() -> Result<KnowledgeBase, FuzzyError> {
    KnowledgeBase::new(standard_variables()?, RECOMMENDATION_SCORE, standard_rules())
}
