use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(root, |node, part| node.get(part))
        .and_then(Value::as_str)
}

fn interpolate(template: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
            .replace(&format!("{{{name}}}"), value)
    })
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .or_else(|| lookup(&bundle.fallback, key))
            .map(|template| interpolate(template, args))
    })
}

/// Translate a key to the current language
///
/// Falls back to the default locale, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` / `{{name}}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
