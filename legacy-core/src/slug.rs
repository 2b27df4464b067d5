use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug filter pattern is valid"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Combining diacritical marks stripped after canonical decomposition.
const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Turn free text into a URL-fragment-safe slug.
///
/// Lower-cases, folds accents to their base letter, drops anything that is not
/// an ASCII letter, digit, whitespace or hyphen, trims and joins words with `-`.
/// Never fails; empty input yields an empty slug.
#[must_use]
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let kept = DISALLOWED.replace_all(&folded, "");
    WHITESPACE_RUN.replace_all(kept.trim(), "-").into_owned()
}
