//! Marketing activities and the tenant's current adoption flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A marketing or sales channel the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketingActivity {
    ColdCalls,
    ColdEmails,
    LinkedinOutreach,
    ContentMarketing,
    SeoContent,
    SocialMediaAds,
    GoogleAds,
    EmailMarketing,
    Webinars,
    TradeShows,
    ReferralProgram,
    Partnerships,
    InfluencerMarketing,
    Podcasts,
    VideoMarketing,
    DirectMail,
    AffiliateMarketing,
    PublicRelations,
}

impl MarketingActivity {
    /// Every activity, in declaration order.
    pub const ALL: [MarketingActivity; 18] = [
        MarketingActivity::ColdCalls,
        MarketingActivity::ColdEmails,
        MarketingActivity::LinkedinOutreach,
        MarketingActivity::ContentMarketing,
        MarketingActivity::SeoContent,
        MarketingActivity::SocialMediaAds,
        MarketingActivity::GoogleAds,
        MarketingActivity::EmailMarketing,
        MarketingActivity::Webinars,
        MarketingActivity::TradeShows,
        MarketingActivity::ReferralProgram,
        MarketingActivity::Partnerships,
        MarketingActivity::InfluencerMarketing,
        MarketingActivity::Podcasts,
        MarketingActivity::VideoMarketing,
        MarketingActivity::DirectMail,
        MarketingActivity::AffiliateMarketing,
        MarketingActivity::PublicRelations,
    ];

    /// Stable key used to scope fuzzy rules and look up catalog data.
    pub fn key(&self) -> &'static str {
        match self {
            MarketingActivity::ColdCalls => "cold_calls",
            MarketingActivity::ColdEmails => "cold_emails",
            MarketingActivity::LinkedinOutreach => "linkedin_outreach",
            MarketingActivity::ContentMarketing => "content_marketing",
            MarketingActivity::SeoContent => "seo_content",
            MarketingActivity::SocialMediaAds => "social_media_ads",
            MarketingActivity::GoogleAds => "google_ads",
            MarketingActivity::EmailMarketing => "email_marketing",
            MarketingActivity::Webinars => "webinars",
            MarketingActivity::TradeShows => "trade_shows",
            MarketingActivity::ReferralProgram => "referral_program",
            MarketingActivity::Partnerships => "partnerships",
            MarketingActivity::InfluencerMarketing => "influencer_marketing",
            MarketingActivity::Podcasts => "podcasts",
            MarketingActivity::VideoMarketing => "video_marketing",
            MarketingActivity::DirectMail => "direct_mail",
            MarketingActivity::AffiliateMarketing => "affiliate_marketing",
            MarketingActivity::PublicRelations => "public_relations",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MarketingActivity::ColdCalls => "Cold Calls",
            MarketingActivity::ColdEmails => "Cold Emails",
            MarketingActivity::LinkedinOutreach => "LinkedIn Outreach",
            MarketingActivity::ContentMarketing => "Content Marketing",
            MarketingActivity::SeoContent => "SEO Content",
            MarketingActivity::SocialMediaAds => "Social Media Ads",
            MarketingActivity::GoogleAds => "Google Ads",
            MarketingActivity::EmailMarketing => "Email Marketing",
            MarketingActivity::Webinars => "Webinars",
            MarketingActivity::TradeShows => "Trade Shows",
            MarketingActivity::ReferralProgram => "Referral Program",
            MarketingActivity::Partnerships => "Partnerships",
            MarketingActivity::InfluencerMarketing => "Influencer Marketing",
            MarketingActivity::Podcasts => "Podcasts",
            MarketingActivity::VideoMarketing => "Video Marketing",
            MarketingActivity::DirectMail => "Direct Mail",
            MarketingActivity::AffiliateMarketing => "Affiliate Marketing",
            MarketingActivity::PublicRelations => "Public Relations",
        }
    }

    /// Parses an activity from its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.key() == key)
    }

    /// Position in [`MarketingActivity::ALL`], used to index catalog tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MarketingActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which activities the tenant currently performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesActivities {
    pub cold_calls: bool,
    pub cold_emails: bool,
    pub linkedin_outreach: bool,
    pub content_marketing: bool,
    pub seo_content: bool,
    pub social_media_ads: bool,
    pub google_ads: bool,
    pub email_marketing: bool,
    pub webinars: bool,
    pub trade_shows: bool,
    pub referral_program: bool,
    pub partnerships: bool,
    pub influencer_marketing: bool,
    pub podcasts: bool,
    pub video_marketing: bool,
    pub direct_mail: bool,
    pub affiliate_marketing: bool,
    pub public_relations: bool,
}

impl SalesActivities {
    /// No activities adopted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds flags from a list of adopted activities.
    pub fn with_active(active: &[MarketingActivity]) -> Self {
        let mut flags = Self::none();
        for activity in active {
            flags.set(*activity, true);
        }
        flags
    }

    /// Returns true if the tenant currently performs `activity`.
    pub fn is_active(&self, activity: MarketingActivity) -> bool {
        *self.flag(activity)
    }

    /// Sets the flag for `activity`.
    pub fn set(&mut self, activity: MarketingActivity, active: bool) {
        *self.flag_mut(activity) = active;
    }

    /// Adopted activities in declaration order.
    pub fn active(&self) -> Vec<MarketingActivity> {
        MarketingActivity::ALL
            .iter()
            .copied()
            .filter(|a| self.is_active(*a))
            .collect()
    }

    /// Activities not yet adopted, in declaration order.
    pub fn inactive(&self) -> Vec<MarketingActivity> {
        MarketingActivity::ALL
            .iter()
            .copied()
            .filter(|a| !self.is_active(*a))
            .collect()
    }

    /// Number of adopted activities.
    pub fn active_count(&self) -> usize {
        MarketingActivity::ALL
            .iter()
            .filter(|a| self.is_active(**a))
            .count()
    }

    fn flag(&self, activity: MarketingActivity) -> &bool {
        match activity {
            MarketingActivity::ColdCalls => &self.cold_calls,
            MarketingActivity::ColdEmails => &self.cold_emails,
            MarketingActivity::LinkedinOutreach => &self.linkedin_outreach,
            MarketingActivity::ContentMarketing => &self.content_marketing,
            MarketingActivity::SeoContent => &self.seo_content,
            MarketingActivity::SocialMediaAds => &self.social_media_ads,
            MarketingActivity::GoogleAds => &self.google_ads,
            MarketingActivity::EmailMarketing => &self.email_marketing,
            MarketingActivity::Webinars => &self.webinars,
            MarketingActivity::TradeShows => &self.trade_shows,
            MarketingActivity::ReferralProgram => &self.referral_program,
            MarketingActivity::Partnerships => &self.partnerships,
            MarketingActivity::InfluencerMarketing => &self.influencer_marketing,
            MarketingActivity::Podcasts => &self.podcasts,
            MarketingActivity::VideoMarketing => &self.video_marketing,
            MarketingActivity::DirectMail => &self.direct_mail,
            MarketingActivity::AffiliateMarketing => &self.affiliate_marketing,
            MarketingActivity::PublicRelations => &self.public_relations,
        }
    }

    fn flag_mut(&mut self, activity: MarketingActivity) -> &mut bool {
        match activity {
            MarketingActivity::ColdCalls => &mut self.cold_calls,
            MarketingActivity::ColdEmails => &mut self.cold_emails,
            MarketingActivity::LinkedinOutreach => &mut self.linkedin_outreach,
            MarketingActivity::ContentMarketing => &mut self.content_marketing,
            MarketingActivity::SeoContent => &mut self.seo_content,
            MarketingActivity::SocialMediaAds => &mut self.social_media_ads,
            MarketingActivity::GoogleAds => &mut self.google_ads,
            MarketingActivity::EmailMarketing => &mut self.email_marketing,
            MarketingActivity::Webinars => &mut self.webinars,
            MarketingActivity::TradeShows => &mut self.trade_shows,
            MarketingActivity::ReferralProgram => &mut self.referral_program,
            MarketingActivity::Partnerships => &mut self.partnerships,
            MarketingActivity::InfluencerMarketing => &mut self.influencer_marketing,
            MarketingActivity::Podcasts => &mut self.podcasts,
            MarketingActivity::VideoMarketing => &mut self.video_marketing,
            MarketingActivity::DirectMail => &mut self.direct_mail,
            MarketingActivity::AffiliateMarketing => &mut self.affiliate_marketing,
            MarketingActivity::PublicRelations => &mut self.public_relations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_round_trip() {
        for activity in MarketingActivity::ALL {
            assert_eq!(MarketingActivity::from_key(activity.key()), Some(activity));
        }
        assert_eq!(MarketingActivity::from_key("carrier_pigeons"), None);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, activity) in MarketingActivity::ALL.iter().enumerate() {
            assert_eq!(activity.index(), i);
        }
    }

    #[test]
    fn serde_uses_key() {
        let json = serde_json::to_string(&MarketingActivity::SeoContent).unwrap();
        assert_eq!(json, "\"seo_content\"");
    }

    #[test]
    fn with_active_sets_only_listed_flags() {
        let flags = SalesActivities::with_active(&[MarketingActivity::ColdCalls]);
        assert!(flags.cold_calls);
        assert!(flags.is_active(MarketingActivity::ColdCalls));
        assert_eq!(flags.active_count(), 1);
        assert_eq!(flags.inactive().len(), 17);
        assert!(!flags.inactive().contains(&MarketingActivity::ColdCalls));
    }

    #[test]
    fn active_preserves_declaration_order() {
        let flags = SalesActivities::with_active(&[
            MarketingActivity::Webinars,
            MarketingActivity::ColdEmails,
        ]);
        assert_eq!(
            flags.active(),
            vec![MarketingActivity::ColdEmails, MarketingActivity::Webinars]
        );
    }

    #[test]
    fn missing_fields_deserialize_as_false() {
        let flags: SalesActivities = serde_json::from_str(r#"{"google_ads": true}"#).unwrap();
        assert!(flags.google_ads);
        assert_eq!(flags.active_count(), 1);
    }
}
