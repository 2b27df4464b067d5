//! Site configuration bundled into the web build.

pub use legacy_core::{ConfigLoader, SiteConfig, SiteContent};

const SITE_CONFIG_JSON: &str = include_str!("../static/assets/data/site.config.json");

#[derive(Debug, thiserror::Error)]
pub enum WebConfigError {
    #[error("Embedded site configuration is invalid: {0}")]
    Parse(#[from] legacy_core::ConfigError),
}

/// Loads `site.config.json` compiled into the bundle with `include_str!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConfigLoader;

impl ConfigLoader for WebConfigLoader {
    type Error = WebConfigError;

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::from_json(SITE_CONFIG_JSON)?)
    }
}

/// Loader over an arbitrary JSON document; used for previews and tests.
#[derive(Debug, Clone, Copy)]
pub struct JsonConfigLoader<'a>(pub &'a str);

impl ConfigLoader for JsonConfigLoader<'_> {
    type Error = WebConfigError;

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::from_json(self.0)?)
    }
}
