use serde_json::Value;

pub const DEFAULT_LANG: &str = "es";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
    },
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("es", include_str!("../../i18n/es.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

/// Parsed translations for `lang`, or the default locale when unknown.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
