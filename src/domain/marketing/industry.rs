//! Industry and company-size classifications parsed from caller labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry vertical used to select benchmarks and multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Saas,
    Ecommerce,
    Healthcare,
    Finance,
    Manufacturing,
    ProfessionalServices,
    Retail,
    Education,
    RealEstate,
    Other,
}

impl Industry {
    /// Parses a free-form label leniently (case and punctuation insensitive).
    ///
    /// Returns `None` for labels that match no known vertical.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let industry = match normalized.as_str() {
            "technology" | "tech" | "software" | "it" => Industry::Technology,
            "saas" | "softwareasaservice" => Industry::Saas,
            "ecommerce" | "onlineretail" => Industry::Ecommerce,
            "healthcare" | "health" | "medical" => Industry::Healthcare,
            "finance" | "financialservices" | "fintech" | "banking" => Industry::Finance,
            "manufacturing" | "industrial" => Industry::Manufacturing,
            "professionalservices" | "consulting" | "services" | "agency" => {
                Industry::ProfessionalServices
            }
            "retail" => Industry::Retail,
            "education" | "edtech" => Industry::Education,
            "realestate" | "property" => Industry::RealEstate,
            "other" => Industry::Other,
            _ => return None,
        };
        Some(industry)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Saas => "SaaS",
            Industry::Ecommerce => "E-commerce",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Manufacturing => "Manufacturing",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Retail => "Retail",
            Industry::Education => "Education",
            Industry::RealEstate => "Real Estate",
            Industry::Other => "Other",
        }
    }

    /// Predominant target market for the vertical.
    pub fn target_market(&self) -> &'static str {
        match self {
            Industry::Ecommerce | Industry::Retail => "B2C",
            Industry::Healthcare | Industry::Education | Industry::RealEstate => "B2B2C",
            _ => "B2B",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Headcount band of the tenant company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// 1-10 employees
    Micro,
    /// 11-50 employees
    Small,
    /// 51-200 employees
    Medium,
    /// 201-500 employees
    Large,
    /// 501-1000 employees
    Enterprise,
    /// More than 1000 employees
    Corporate,
}

impl CompanySize {
    /// Parses a headcount label such as `"51-200"` or `"1000+"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
        let size = match compact.to_ascii_lowercase().as_str() {
            "1-10" | "micro" | "solo" => CompanySize::Micro,
            "11-50" | "small" => CompanySize::Small,
            "51-200" | "medium" => CompanySize::Medium,
            "201-500" | "large" => CompanySize::Large,
            "501-1000" | "500+" | "enterprise" => CompanySize::Enterprise,
            "1000+" | "1001+" | "corporate" => CompanySize::Corporate,
            _ => return None,
        };
        Some(size)
    }

    /// Returns the headcount label.
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Micro => "1-10",
            CompanySize::Small => "11-50",
            CompanySize::Medium => "51-200",
            CompanySize::Large => "201-500",
            CompanySize::Enterprise => "501-1000",
            CompanySize::Corporate => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
