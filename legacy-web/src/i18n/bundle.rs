use crate::i18n::locales::{DEFAULT_LANG, is_rtl_lang, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "legacy.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl: is_rtl_lang(lang),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang()).unwrap_or_else(fallback_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language
///
/// Unknown codes are ignored. In the browser this also updates the
/// `<html lang dir>` attributes and remembers the choice in localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("Ignoring unsupported locale {lang:?}");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
                let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
            });
        }
        if let Some(storage) = crate::dom::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.rtl)
}
