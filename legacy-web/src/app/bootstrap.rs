use crate::site::{ConfigLoader, SiteConfig, SiteContent, WebConfigLoader};
use legacy_core::Severity;

/// Load the embedded configuration and index its rules.
///
/// Never fails: a broken configuration is logged and the site renders with
/// empty defaults.
#[must_use]
pub fn load_content() -> SiteContent {
    load_content_with(&WebConfigLoader)
}

pub fn load_content_with<L: ConfigLoader>(loader: &L) -> SiteContent {
    let content = SiteContent::load(loader).unwrap_or_else(|err| {
        log::error!("Falling back to an empty site configuration: {err}");
        SiteContent::new(SiteConfig::default())
    });
    for issue in content.config.audit() {
        match issue.severity {
            Severity::Error => log::error!("{issue}"),
            Severity::Warning => log::warn!("{issue}"),
        }
    }
    log::debug!("Indexed {} rules", content.rules.len());
    content
}
