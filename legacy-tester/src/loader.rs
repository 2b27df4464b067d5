use legacy_core::{ConfigError, ConfigLoader, SiteConfig};
use std::path::{Path, PathBuf};

/// Repository-relative location of the configuration shipped with the site.
pub const DEFAULT_CONFIG_PATH: &str = "legacy-web/static/assets/data/site.config.json";

/// Reads `site.config.json` from disk on every load.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigLoader for FileConfigLoader {
    type Error = ConfigError;

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        log::debug!("Loading site configuration from {}", self.path.display());
        SiteConfig::from_path(&self.path)
    }
}
