mod bundle;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, is_rtl, set_lang};
pub use locales::{DEFAULT_LANG, LocaleMeta, locales};
pub use render::{t, tr};

use yew::prelude::*;

/// Active locale code shared through a Yew context
pub type LocaleContext = AttrValue;

/// Subscribe the calling component to locale changes.
///
/// Translations are read from a thread-local bundle, so components re-render on
/// a language switch only when they depend on the context. Outside a provider
/// (server-side rendering in tests) the current bundle language is returned.
#[hook]
pub fn use_locale() -> AttrValue {
    use_context::<LocaleContext>().unwrap_or_else(|| AttrValue::from(current_lang()))
}
