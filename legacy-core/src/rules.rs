//! Rules index: stable anchors, search and link helpers for the rules section.

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Prefix shared by every rule anchor.
pub const ANCHOR_PREFIX: &str = "regla-";

/// Anchor base used when a rule has neither id nor title.
pub const FALLBACK_TITLE: &str = "regla";

/// A server rule as written in the configuration
///
/// Decoded leniently: any JSON value is accepted and fields are converted to
/// text, falsy values reading as empty, so a malformed entry renders instead
/// of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "Value")]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Base of the anchor: the id when usable, otherwise the slugged title.
    #[must_use]
    pub fn anchor_base(&self) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => slugify(self.title.as_deref().unwrap_or(FALLBACK_TITLE)),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Script-style string conversion: integral floats drop `.0`, arrays join with `,`.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_f64() => n.as_f64().map(|v| v.to_string()).unwrap_or_default(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Absent or `null` stays `None`; any other falsy value reads as empty text.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        v if is_truthy(v) => Some(display_text(v)),
        _ => Some(String::new()),
    }
}

fn identifier(value: Option<&Value>) -> Option<String> {
    value.filter(|v| is_truthy(v)).map(display_text)
}

impl From<Value> for Rule {
    fn from(value: Value) -> Self {
        Self {
            id: identifier(value.get("id")),
            title: scalar_text(value.get("title")),
            description: scalar_text(value.get("description")),
        }
    }
}

/// A rule paired with its URL-fragment anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedRule {
    #[serde(flatten)]
    pub rule: Rule,
    pub anchor: String,
}

impl IndexedRule {
    #[must_use]
    pub fn title(&self) -> &str {
        self.rule.title.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.rule.description.as_deref().unwrap_or_default()
    }

    /// Same-page link target for navigation lists.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }

    fn matches(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
            || self.description().to_lowercase().contains(needle)
    }
}

/// Derive an anchor for every rule, keeping configuration order.
///
/// Anchors are not deduplicated; see [`duplicate_anchors`].
#[must_use]
pub fn build(rules: &[Rule]) -> Vec<IndexedRule> {
    rules
        .iter()
        .map(|rule| IndexedRule {
            anchor: format!("{ANCHOR_PREFIX}{}", rule.anchor_base()),
            rule: rule.clone(),
        })
        .collect()
}

/// Case-insensitive substring search over title and description.
///
/// A blank query returns every rule unchanged.
#[must_use]
pub fn filter(indexed: &[IndexedRule], query: &str) -> Vec<IndexedRule> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return indexed.to_vec();
    }
    indexed
        .iter()
        .filter(|rule| rule.matches(&needle))
        .cloned()
        .collect()
}

/// Anchors used by more than one rule, in first-seen order.
#[must_use]
pub fn duplicate_anchors(indexed: &[IndexedRule]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rule in indexed {
        *counts.entry(rule.anchor.as_str()).or_default() += 1;
    }
    let mut seen = Vec::new();
    for rule in indexed {
        let anchor = rule.anchor.as_str();
        if counts.get(anchor).copied().unwrap_or_default() > 1 && !seen.iter().any(|s| s == anchor)
        {
            seen.push(anchor.to_string());
        }
    }
    seen
}

/// Two-digit, one-based label for a list position (`0` -> `"01"`).
#[must_use]
pub fn display_number(position: usize) -> String {
    format!("{:02}", position + 1)
}

/// Absolute link to a rule: `<origin><path>#<anchor>`.
#[must_use]
pub fn anchor_url(origin: &str, path: &str, anchor: &str) -> String {
    format!("{origin}{path}#{anchor}")
}
