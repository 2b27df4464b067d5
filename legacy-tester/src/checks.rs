use legacy_core::{ConfigIssue, ConfigLoader, IndexedRule, Severity, SiteContent, rules};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Fail,
    Skip,
}

impl Status {
    /// Whether this status fails the run.
    pub const fn is_failure(self, strict: bool) -> bool {
        match self {
            Self::Fail => true,
            Self::Warn => strict,
            Self::Pass | Self::Skip => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: Status,
    pub details: Vec<String>,
}

impl CheckResult {
    fn from_findings(name: &'static str, failing: Status, details: Vec<String>) -> Self {
        let status = if details.is_empty() { Status::Pass } else { failing };
        Self {
            name,
            status,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub anchors: Vec<String>,
}

/// Everything one tester run produced.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRun {
    pub checks: Vec<CheckResult>,
    pub issues: Vec<ConfigIssue>,
    pub queries: Vec<QueryResult>,
}

impl CheckRun {
    pub fn passed(&self, strict: bool) -> bool {
        !self
            .checks
            .iter()
            .any(|check| check.status.is_failure(strict))
    }
}

pub const CONFIG_PARSES: &str = "config-parses";
pub const ANCHORS_UNIQUE: &str = "anchors-unique";
pub const ANCHORS_FRAGMENT_SAFE: &str = "anchors-fragment-safe";
pub const RULES_TITLED: &str = "rules-titled";
pub const LINKS_PRESENT: &str = "links-present";
pub const SEARCH_ROUNDTRIP: &str = "search-roundtrip";

pub fn list_checks() -> Vec<(&'static str, &'static str)> {
    vec![
        (CONFIG_PARSES, "site.config.json can be read and parsed"),
        (ANCHORS_UNIQUE, "no two rules share an anchor"),
        (
            ANCHORS_FRAGMENT_SAFE,
            "anchors only use letters, digits, '-' and '_' and are not bare",
        ),
        (RULES_TITLED, "every rule has a non-blank title"),
        (
            LINKS_PRESENT,
            "Discord and whitelist links are set where the page shows them",
        ),
        (
            SEARCH_ROUNDTRIP,
            "searching a rule's own title finds that rule",
        ),
    ]
}

const LINK_CODES: [&str; 3] = ["server-discord", "social-discord", "whitelist-url"];

/// Load the configuration and run every check against it.
pub fn run_checks<L: ConfigLoader>(loader: &L, queries: &[String]) -> CheckRun {
    let content = match SiteContent::load(loader) {
        Ok(content) => content,
        Err(err) => {
            log::error!("Configuration failed to load: {err}");
            let mut checks = vec![CheckResult {
                name: CONFIG_PARSES,
                status: Status::Fail,
                details: vec![err.to_string()],
            }];
            checks.extend(list_checks().into_iter().skip(1).map(|(name, _)| CheckResult {
                name,
                status: Status::Skip,
                details: Vec::new(),
            }));
            return CheckRun {
                checks,
                issues: Vec::new(),
                queries: Vec::new(),
            };
        }
    };

    let issues = content.config.audit();
    let checks = vec![
        CheckResult::from_findings(CONFIG_PARSES, Status::Fail, Vec::new()),
        check_anchors_unique(&content.rules),
        check_anchors_fragment_safe(&content.rules),
        check_rules_titled(&content.rules),
        check_links_present(&issues),
        check_search_roundtrip(&content),
    ];
    let queries = queries
        .iter()
        .map(|query| QueryResult {
            query: query.clone(),
            anchors: content
                .search(query)
                .into_iter()
                .map(|rule| rule.anchor)
                .collect(),
        })
        .collect();

    CheckRun {
        checks,
        issues,
        queries,
    }
}

fn check_anchors_unique(indexed: &[IndexedRule]) -> CheckResult {
    let details = rules::duplicate_anchors(indexed)
        .into_iter()
        .map(|anchor| format!("{anchor} is used by more than one rule"))
        .collect();
    CheckResult::from_findings(ANCHORS_UNIQUE, Status::Warn, details)
}

static FRAGMENT_SAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^regla-[A-Za-z0-9_-]+$").expect("fragment regex is valid"));

fn check_anchors_fragment_safe(indexed: &[IndexedRule]) -> CheckResult {
    let details = indexed
        .iter()
        .filter(|rule| !FRAGMENT_SAFE.is_match(&rule.anchor))
        .map(|rule| format!("{:?} is not a clean URL fragment", rule.anchor))
        .collect();
    CheckResult::from_findings(ANCHORS_FRAGMENT_SAFE, Status::Warn, details)
}

fn check_rules_titled(indexed: &[IndexedRule]) -> CheckResult {
    let details = indexed
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.title().trim().is_empty())
        .map(|(position, rule)| {
            format!(
                "rule {} ({}) has no title",
                rules::display_number(position),
                rule.anchor
            )
        })
        .collect();
    CheckResult::from_findings(RULES_TITLED, Status::Warn, details)
}

fn check_links_present(issues: &[ConfigIssue]) -> CheckResult {
    let relevant: Vec<&ConfigIssue> = issues
        .iter()
        .filter(|issue| LINK_CODES.contains(&issue.code))
        .collect();
    let failing = if relevant
        .iter()
        .any(|issue| issue.severity == Severity::Error)
    {
        Status::Fail
    } else {
        Status::Warn
    };
    let details = relevant.iter().map(|issue| issue.message.clone()).collect();
    CheckResult::from_findings(LINKS_PRESENT, failing, details)
}

fn check_search_roundtrip(content: &SiteContent) -> CheckResult {
    let details = content
        .rules
        .iter()
        .filter(|rule| !rule.title().trim().is_empty())
        .filter(|rule| {
            !content
                .search(rule.title())
                .iter()
                .any(|hit| hit.anchor == rule.anchor)
        })
        .map(|rule| format!("{} is not found by its own title", rule.anchor))
        .collect();
    CheckResult::from_findings(SEARCH_ROUNDTRIP, Status::Fail, details)
}
