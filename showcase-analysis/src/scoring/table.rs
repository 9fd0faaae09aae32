//! The static scoring table.
//!
//! Immutable compiled-in data, kept apart from the scoring algorithm. Weights
//! are tuned for substring keyword matching.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use showcase_core::types::{Category, Sdk};
use Category::*;

use crate::scanner::FileEntry;

/// One keyword and the category weights it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub weights: &'static [(Category, u32)],
}

const fn rule(keyword: &'static str, weights: &'static [(Category, u32)]) -> KeywordRule {
    KeywordRule { keyword, weights }
}

/// Keyword weights. Keywords absent from this table score nothing.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    // Games
    rule("game", &[(Games, 10), (Entertainment, 5)]),
    rule("gaming", &[(Games, 10), (Entertainment, 5)]),
    rule("play", &[(Games, 8), (Entertainment, 4)]),
    rule("player", &[(Games, 8)]),
    rule("score", &[(Games, 6)]),
    rule("level", &[(Games, 6)]),
    rule("rpg", &[(Games, 12)]),
    rule("strategy", &[(Games, 8)]),
    rule("arcade", &[(Games, 10)]),
    // NFT
    rule("nft", &[(Nft, 15), (Web3, 8)]),
    rule("token", &[(Nft, 8), (Defi, 6), (Web3, 6)]),
    rule("collection", &[(Nft, 10)]),
    rule("marketplace", &[(Nft, 8), (ECommerce, 6)]),
    rule("mint", &[(Nft, 8)]),
    rule("trade", &[(Nft, 6), (Defi, 6)]),
    rule("auction", &[(Nft, 8)]),
    // Mobile
    rule("mobile", &[(Mobile, 15)]),
    rule("ios", &[(Mobile, 12)]),
    rule("android", &[(Mobile, 12)]),
    rule("react native", &[(Mobile, 12)]),
    rule("flutter", &[(Mobile, 12)]),
    rule("dart", &[(Mobile, 8)]),
    // DeFi
    rule("defi", &[(Defi, 15), (Finance, 8)]),
    rule("finance", &[(Defi, 8), (Finance, 10)]),
    rule("lending", &[(Defi, 10)]),
    rule("staking", &[(Defi, 10)]),
    rule("yield", &[(Defi, 10)]),
    rule("swap", &[(Defi, 8)]),
    rule("dex", &[(Defi, 12)]),
    // Security
    rule("security", &[(Security, 15)]),
    rule("wallet", &[(Security, 10), (Web3, 6)]),
    rule("authentication", &[(Security, 10)]),
    rule("encryption", &[(Security, 12)]),
    rule("audit", &[(Security, 8)]),
    // Analytics
    rule("analytics", &[(Analytics, 15)]),
    rule("dashboard", &[(Analytics, 10)]),
    rule("chart", &[(Analytics, 8)]),
    rule("metrics", &[(Analytics, 8)]),
    rule("data", &[(Analytics, 6)]),
    rule("visualization", &[(Analytics, 10)]),
    // Tools
    rule("tool", &[(Tools, 12)]),
    rule("cli", &[(Tools, 10)]),
    rule("api", &[(Tools, 8), (Integration, 6)]),
    rule("sdk", &[(Tools, 8)]),
    rule("library", &[(Tools, 8)]),
    rule("utility", &[(Tools, 8)]),
    // Design
    rule("design", &[(Design, 15)]),
    rule("ui", &[(Design, 12)]),
    rule("ux", &[(Design, 12)]),
    rule("component", &[(Components, 12), (Design, 6)]),
    rule("theme", &[(Design, 8)]),
    rule("style", &[(Design, 6)]),
    // Education
    rule("education", &[(Education, 15)]),
    rule("tutorial", &[(Education, 12)]),
    rule("course", &[(Education, 12)]),
    rule("learning", &[(Education, 10)]),
    rule("documentation", &[(Education, 4)]),
    // Marketing
    rule("marketing", &[(Marketing, 15)]),
    rule("seo", &[(Marketing, 10)]),
    rule("social", &[(Marketing, 8)]),
    rule("email", &[(Marketing, 6)]),
    rule("campaign", &[(Marketing, 8)]),
    // Integration
    rule("integration", &[(Integration, 15)]),
    rule("payment", &[(Integration, 8), (Finance, 6)]),
    rule("cloud", &[(Integration, 6)]),
    rule("database", &[(Integration, 6)]),
    rule("external", &[(Integration, 6)]),
    // Experimental
    rule("experimental", &[(Experimental, 15)]),
    rule("research", &[(Experimental, 12), (Academic, 8)]),
    rule("prototype", &[(Experimental, 10)]),
    rule("beta", &[(Experimental, 8)]),
    rule("alpha", &[(Experimental, 8)]),
    // Enterprise
    rule("enterprise", &[(Enterprise, 15)]),
    rule("business", &[(Enterprise, 8)]),
    rule("saas", &[(Enterprise, 10)]),
    rule("b2b", &[(Enterprise, 10)]),
    rule("corporate", &[(Enterprise, 8)]),
    // Entertainment
    rule("entertainment", &[(Entertainment, 15)]),
    rule("media", &[(Entertainment, 8), (Media, 10)]),
    rule("streaming", &[(Entertainment, 10)]),
    rule("music", &[(Entertainment, 8), (Creative, 6)]),
    rule("video", &[(Entertainment, 8), (Media, 6)]),
    // Health
    rule("health", &[(Health, 15)]),
    rule("medical", &[(Health, 12)]),
    rule("fitness", &[(Health, 10)]),
    rule("wellness", &[(Health, 8)]),
    rule("telemedicine", &[(Health, 12)]),
    // Real estate
    rule("real estate", &[(RealEstate, 15)]),
    rule("property", &[(RealEstate, 12)]),
    rule("housing", &[(RealEstate, 10)]),
    rule("investment", &[(RealEstate, 6), (Finance, 6)]),
    // Transportation
    rule("transportation", &[(Transportation, 15)]),
    rule("logistics", &[(Transportation, 12)]),
    rule("delivery", &[(Transportation, 10)]),
    rule("tracking", &[(Transportation, 8)]),
    // Finance
    rule("banking", &[(Finance, 12)]),
    rule("insurance", &[(Finance, 10)]),
    // Academic
    rule("academic", &[(Academic, 15)]),
    rule("publishing", &[(Academic, 10), (Media, 6)]),
    rule("collaboration", &[(Academic, 8), (Productivity, 6)]),
    // Government
    rule("government", &[(Government, 15)]),
    rule("civic", &[(Government, 12)]),
    rule("voting", &[(Government, 10)]),
    rule("public service", &[(Government, 12)]),
    // Sustainability
    rule("sustainability", &[(Sustainability, 15)]),
    rule("environment", &[(Sustainability, 12)]),
    rule("carbon", &[(Sustainability, 10)]),
    rule("green", &[(Sustainability, 8)]),
    // Creative
    rule("creative", &[(Creative, 15)]),
    rule("art", &[(Creative, 12)]),
    rule("writing", &[(Creative, 10)]),
    rule("photography", &[(Creative, 10)]),
    // Competitions
    rule("competition", &[(Competitions, 15)]),
    rule("hackathon", &[(Competitions, 15)]),
    rule("contest", &[(Competitions, 12)]),
    rule("challenge", &[(Competitions, 10)]),
    // AI/ML
    rule("ai", &[(AiMl, 15)]),
    rule("ml", &[(AiMl, 15)]),
    rule("machine learning", &[(AiMl, 15)]),
    rule("artificial intelligence", &[(AiMl, 15)]),
    rule("tensorflow", &[(AiMl, 12)]),
    rule("pytorch", &[(AiMl, 12)]),
    // Web3
    rule("web3", &[(Web3, 15)]),
    rule("blockchain", &[(Web3, 12)]),
    rule("crypto", &[(Web3, 10)]),
    rule("decentralized", &[(Web3, 8)]),
    rule("ethers", &[(Web3, 8)]),
    rule("solidity", &[(Web3, 10)]),
    // IoT
    rule("iot", &[(Iot, 15)]),
    rule("internet of things", &[(Iot, 15)]),
    rule("smart home", &[(Iot, 12)]),
    rule("sensor", &[(Iot, 10)]),
    // Events
    rule("event", &[(Events, 15)]),
    rule("ticketing", &[(Events, 12)]),
    rule("conference", &[(Events, 10)]),
    rule("meetup", &[(Events, 8)]),
    // E-commerce
    rule("ecommerce", &[(ECommerce, 15)]),
    rule("shopping", &[(ECommerce, 12)]),
    rule("retail", &[(ECommerce, 10)]),
    // Media
    rule("news", &[(Media, 12)]),
    rule("blog", &[(Media, 10)]),
    rule("podcast", &[(Media, 10)]),
    // Non-profit
    rule("nonprofit", &[(NonProfit, 15)]),
    rule("charity", &[(NonProfit, 12)]),
    rule("donation", &[(NonProfit, 10)]),
    rule("fundraising", &[(NonProfit, 10)]),
    // Productivity
    rule("productivity", &[(Productivity, 15)]),
    rule("workflow", &[(Productivity, 10)]),
    rule("automation", &[(Productivity, 8)]),
];

static RULE_INDEX: LazyLock<FxHashMap<&'static str, &'static KeywordRule>> =
    LazyLock::new(|| KEYWORD_RULES.iter().map(|r| (r.keyword, r)).collect());

/// Look up the rule for an extracted keyword.
pub fn rule_for(keyword: &str) -> Option<&'static KeywordRule> {
    RULE_INDEX.get(keyword).copied()
}

/// Bonuses granted for each declared SDK.
pub static SDK_BONUSES: &[(Sdk, Category, u32)] = &[
    (Sdk::SatoxGameSdk, Games, 20),
    (Sdk::SatoxMobileSdk, Mobile, 20),
    (Sdk::SatoxSdk, Web3, 10),
];

/// A file-tree existence check. Fires at most once per project when any file
/// has a listed extension or a lowercased name containing a listed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralRule {
    pub name: &'static str,
    pub name_markers: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub category: Category,
    pub bonus: u32,
}

impl StructuralRule {
    pub fn matches(&self, file: &FileEntry) -> bool {
        if self.extensions.iter().any(|ext| *ext == file.extension) {
            return true;
        }
        let name = file.file_name.to_lowercase();
        self.name_markers.iter().any(|m| name.contains(m))
    }

    pub fn fires(&self, files: &[FileEntry]) -> bool {
        files.iter().any(|f| self.matches(f))
    }
}

pub static STRUCTURAL_RULES: &[StructuralRule] = &[
    StructuralRule {
        name: "react",
        name_markers: &["react"],
        extensions: &[".jsx", ".tsx"],
        category: Apps,
        bonus: 5,
    },
    StructuralRule {
        name: "vue",
        name_markers: &["vue"],
        extensions: &[".vue"],
        category: Apps,
        bonus: 5,
    },
    StructuralRule {
        name: "mobile",
        name_markers: &["android", "ios"],
        extensions: &[".kt", ".swift"],
        category: Mobile,
        bonus: 10,
    },
    StructuralRule {
        name: "smart-contract",
        name_markers: &["contract"],
        extensions: &[".sol"],
        category: Web3,
        bonus: 10,
    },
];
