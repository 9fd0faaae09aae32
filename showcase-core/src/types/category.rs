//! The closed set of showcase categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A showcase category.
///
/// The declaration order is the canonical order: scoring iterates it when
/// breaking ties, and the aggregator pre-seeds its statistics from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Games,
    Nft,
    Ipfs,
    Mobile,
    Apps,
    Components,
    Sites,
    Starters,
    Defi,
    Security,
    Analytics,
    Tools,
    Design,
    Education,
    Marketing,
    Integration,
    Experimental,
    Enterprise,
    Entertainment,
    Health,
    RealEstate,
    Transportation,
    Finance,
    Academic,
    Government,
    Sustainability,
    Creative,
    Competitions,
    AiMl,
    Web3,
    Iot,
    Events,
    ECommerce,
    Media,
    NonProfit,
    Productivity,
    Custom,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 37;

    /// All categories in canonical order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::Games,
        Self::Nft,
        Self::Ipfs,
        Self::Mobile,
        Self::Apps,
        Self::Components,
        Self::Sites,
        Self::Starters,
        Self::Defi,
        Self::Security,
        Self::Analytics,
        Self::Tools,
        Self::Design,
        Self::Education,
        Self::Marketing,
        Self::Integration,
        Self::Experimental,
        Self::Enterprise,
        Self::Entertainment,
        Self::Health,
        Self::RealEstate,
        Self::Transportation,
        Self::Finance,
        Self::Academic,
        Self::Government,
        Self::Sustainability,
        Self::Creative,
        Self::Competitions,
        Self::AiMl,
        Self::Web3,
        Self::Iot,
        Self::Events,
        Self::ECommerce,
        Self::Media,
        Self::NonProfit,
        Self::Productivity,
        Self::Custom,
    ];

    /// The "not yet classified" sentinel.
    pub const UNCLASSIFIED: Category = Category::Custom;

    /// Category assigned when no score clears the minimum threshold.
    pub const FALLBACK: Category = Category::Apps;

    /// Position of this category in canonical order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The wire name shared with metadata records and the showcase index.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Nft => "nft",
            Self::Ipfs => "ipfs",
            Self::Mobile => "mobile",
            Self::Apps => "apps",
            Self::Components => "components",
            Self::Sites => "sites",
            Self::Starters => "starters",
            Self::Defi => "defi",
            Self::Security => "security",
            Self::Analytics => "analytics",
            Self::Tools => "tools",
            Self::Design => "design",
            Self::Education => "education",
            Self::Marketing => "marketing",
            Self::Integration => "integration",
            Self::Experimental => "experimental",
            Self::Enterprise => "enterprise",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::RealEstate => "real-estate",
            Self::Transportation => "transportation",
            Self::Finance => "finance",
            Self::Academic => "academic",
            Self::Government => "government",
            Self::Sustainability => "sustainability",
            Self::Creative => "creative",
            Self::Competitions => "competitions",
            Self::AiMl => "ai-ml",
            Self::Web3 => "web3",
            Self::Iot => "iot",
            Self::Events => "events",
            Self::ECommerce => "e-commerce",
            Self::Media => "media",
            Self::NonProfit => "non-profit",
            Self::Productivity => "productivity",
            Self::Custom => "custom",
        }
    }

    /// Whether this category counts as an authoritative assignment.
    pub fn is_assigned(self) -> bool {
        self != Self::UNCLASSIFIED
    }

    /// Comma-separated list of every wire name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
