//! Complex Legacy site core
//!
//! Platform-agnostic logic for the Complex Legacy landing site: the static site
//! configuration, the rules index (anchors, search, rich text) and the small
//! state machines behind the hero banner and team roster.
//! This crate has no browser or UI dependencies.

pub mod audit;
pub mod config;
pub mod hero;
pub mod rich_text;
pub mod rules;
pub mod slug;
pub mod team;

pub use audit::{ConfigIssue, Severity};
pub use config::{
    ConfigError, Feature, Gallery, GalleryImage, Job, Jobs, ServerInfo, SiteConfig, Social,
    TeamMember, Whitelist,
};
pub use hero::{
    COUNTER_TICK_MS, HeroStat, HeroStats, LOADING_TICK_MS, LoadingProgress, PlayerCounter,
    TIP_ROTATE_MS, TipRotation, feature_pills, mini_gallery,
};
pub use rich_text::{Block, split_blocks};
pub use rules::{IndexedRule, Rule, anchor_url, display_number, duplicate_anchors};
pub use slug::slugify;
pub use team::{TeamCard, TeamRole};

/// Trait for abstracting how the site configuration is obtained.
/// Platform-specific implementations should provide this
pub trait ConfigLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and parse the site configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_site_config(&self) -> Result<SiteConfig, Self::Error>;
}

/// Site content derived once from a loaded configuration.
///
/// Holds the configuration together with its rules index so views receive a
/// single value instead of reaching for global state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    pub config: SiteConfig,
    pub rules: Vec<IndexedRule>,
}

impl SiteContent {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let rules = rules::build(&config.rules);
        Self { config, rules }
    }

    /// Load through a platform loader and index the rules.
    ///
    /// # Errors
    ///
    /// Returns the loader error when the configuration cannot be produced.
    pub fn load<L: ConfigLoader>(loader: &L) -> Result<Self, L::Error> {
        loader.load_site_config().map(Self::new)
    }

    /// Rules matching the search query, in configuration order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<IndexedRule> {
        rules::filter(&self.rules, query)
    }
}
