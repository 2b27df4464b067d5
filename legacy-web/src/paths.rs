//! URLs for static assets and in-site routes that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/legacy` for GitHub Pages),
/// generated URLs are prefixed accordingly. Absolute URLs from the site
/// configuration (CDN images, `data:` URIs) are returned untouched.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_base())
}

/// Link to an in-site route such as `/normativas`.
#[must_use]
pub fn route_href(route: &str) -> String {
    asset_path(route)
}

/// Base path for the router (e.g., `/legacy` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_base())
}

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn is_absolute(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("//")
        || lower.starts_with("data:")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    if is_absolute(relative) {
        return relative.to_string();
    }
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path_with_base("images/hero/legacyf.png", ""), "/images/hero/legacyf.png");
        assert_eq!(asset_path_with_base("/images/hero/legacyf.png", ""), "/images/hero/legacyf.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("images/team/owner.webp", "/legacy"),
            "/legacy/images/team/owner.webp"
        );
        assert_eq!(
            asset_path_with_base("/normativas", "/legacy/"),
            "/legacy/normativas"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let cdn = "https://r2.fivemanage.com/kMtLpNIqKRhMGpzrcZnQY/imagen1.png";
        assert_eq!(asset_path_with_base(cdn, "/legacy"), cdn);
        assert_eq!(asset_path_with_base("//cdn.example/x.png", "/legacy"), "//cdn.example/x.png");
        assert_eq!(asset_path_with_base("data:image/png;base64,AA", ""), "data:image/png;base64,AA");
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(router_base_with_base("/legacy/"), Some(String::from("/legacy")));
        assert_eq!(router_base_with_base("  "), None);
    }
}
