//! Static keyword sources.
//!
//! Every keyword the extractor can emit originates here, so keyword sets
//! hold `&'static str` and never allocate.

/// Phrases matched as substrings of the lowercased `"{name} {description}"`.
/// Multi-word phrases match across a space.
pub const TEXT_VOCABULARY: &[&str] = &[
    // Games
    "game", "gaming", "play", "player", "score", "level", "rpg", "strategy", "arcade",
    // NFT
    "nft", "token", "collection", "marketplace", "mint", "trade", "auction",
    // Mobile
    "mobile", "app", "ios", "android", "react native", "flutter",
    // DeFi
    "defi", "finance", "lending", "staking", "yield", "swap", "dex",
    // Security
    "security", "wallet", "authentication", "encryption", "audit",
    // Analytics
    "analytics", "dashboard", "chart", "metrics", "data", "visualization",
    // Tools
    "tool", "cli", "api", "sdk", "library", "utility",
    // Design
    "design", "ui", "ux", "component", "theme", "style",
    // Education
    "education", "tutorial", "course", "learning", "documentation",
    // Marketing
    "marketing", "seo", "social", "email", "campaign",
    // Integration
    "integration", "payment", "cloud", "database", "external",
    // Experimental
    "experimental", "research", "prototype", "beta", "alpha",
    // Enterprise
    "enterprise", "business", "saas", "b2b", "corporate",
    // Entertainment
    "entertainment", "media", "streaming", "music", "video",
    // Health
    "health", "medical", "fitness", "wellness", "telemedicine",
    // Real estate
    "real estate", "property", "housing", "investment",
    // Transportation
    "transportation", "logistics", "delivery", "tracking",
    // Finance
    "banking", "insurance",
    // Academic
    "academic", "publishing", "collaboration",
    // Government
    "government", "civic", "voting", "public service",
    // Sustainability
    "sustainability", "environment", "carbon", "green",
    // Creative
    "creative", "art", "writing", "photography",
    // Competitions
    "competition", "hackathon", "contest", "challenge",
    // AI/ML
    "ai", "ml", "machine learning", "artificial intelligence",
    // Web3
    "web3", "blockchain", "crypto", "decentralized",
    // IoT
    "iot", "internet of things", "smart home", "sensor",
    // Events
    "event", "ticketing", "conference", "meetup",
    // E-commerce
    "ecommerce", "shopping", "retail",
    // Media
    "news", "blog", "podcast",
    // Non-profit
    "nonprofit", "charity", "donation", "fundraising",
    // Productivity
    "productivity", "workflow", "automation",
];

/// Keywords implied by a lowercased file extension (leading dot included).
pub const EXTENSION_KEYWORDS: &[(&str, &[&str])] = &[
    (".js", &["javascript", "web", "frontend"]),
    (".ts", &["typescript", "web", "frontend"]),
    (".jsx", &["react", "frontend"]),
    (".tsx", &["react", "typescript", "frontend"]),
    (".vue", &["vue", "frontend"]),
    (".py", &["python", "backend", "ai", "ml"]),
    (".go", &["golang", "backend"]),
    (".rs", &["rust", "backend"]),
    (".java", &["java", "backend"]),
    (".kt", &["kotlin", "android", "mobile"]),
    (".swift", &["swift", "ios", "mobile"]),
    (".dart", &["dart", "flutter", "mobile"]),
    (".sol", &["solidity", "blockchain", "smart contract"]),
    (".html", &["web", "frontend"]),
    (".css", &["web", "frontend", "design"]),
    (".scss", &["web", "frontend", "design"]),
    (".json", &["data", "configuration"]),
    (".yaml", &["data", "configuration"]),
    (".md", &["documentation"]),
    (".sh", &["script", "automation"]),
    (".dockerfile", &["container", "deployment"]),
    (".yml", &["configuration", "deployment"]),
];

/// Ecosystem markers: a dependency name containing the marker contributes
/// the paired keyword.
pub const DEPENDENCY_MARKERS: &[(&str, &str)] = &[
    ("react", "react"),
    ("vue", "vue"),
    ("angular", "angular"),
    ("next", "nextjs"),
    ("nuxt", "nuxt"),
    ("express", "express"),
    ("fastapi", "fastapi"),
    ("django", "django"),
    ("flask", "flask"),
    ("tensorflow", "ai"),
    ("pytorch", "ai"),
    ("ethers", "blockchain"),
    ("web3", "blockchain"),
];

/// Keywords for a lowercased extension, or an empty slice.
pub fn extension_keywords(extension: &str) -> &'static [&'static str] {
    EXTENSION_KEYWORDS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, keywords)| *keywords)
        .unwrap_or_default()
}
