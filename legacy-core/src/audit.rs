//! Non-fatal configuration findings.
//!
//! The site renders whatever the configuration holds; the audit only reports
//! what a maintainer probably wants to fix.

use crate::config::SiteConfig;
use crate::rules::{self, ANCHOR_PREFIX};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

impl SiteConfig {
    /// Collect findings about the configuration. Never fails.
    #[must_use]
    pub fn audit(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        self.audit_server(&mut issues);
        self.audit_links(&mut issues);
        self.audit_rules(&mut issues);
        issues
    }

    fn audit_server(&self, issues: &mut Vec<ConfigIssue>) {
        if self.server.name.trim().is_empty() {
            issues.push(ConfigIssue::error("server-name", "server.name is empty"));
        }
        if self.server.max_players == 0 {
            issues.push(ConfigIssue::warning(
                "max-players",
                "server.maxPlayers is 0; the player counter will stay at 0",
            ));
        }
    }

    fn audit_links(&self, issues: &mut Vec<ConfigIssue>) {
        if self.server.discord.trim().is_empty() {
            issues.push(ConfigIssue::warning("server-discord", "server.discord is empty"));
        }
        if self.social.discord.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "social-discord",
                "social.discord is empty",
            ));
        }
        if self.whitelist.enabled && self.whitelist.application_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "whitelist-url",
                "whitelist is enabled but whitelist.applicationUrl is empty",
            ));
        }
    }

    fn audit_rules(&self, issues: &mut Vec<ConfigIssue>) {
        let indexed = rules::build(&self.rules);
        for (position, rule) in indexed.iter().enumerate() {
            let number = rules::display_number(position);
            if rule.title().trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    "rule-title",
                    format!("rule {number} has no title"),
                ));
            }
            if rule.anchor.len() == ANCHOR_PREFIX.len() {
                issues.push(ConfigIssue::warning(
                    "rule-anchor",
                    format!("rule {number} produces the bare anchor \"{}\"", rule.anchor),
                ));
            }
        }
        for anchor in rules::duplicate_anchors(&indexed) {
            issues.push(ConfigIssue::warning(
                "duplicate-anchor",
                format!("anchor \"{anchor}\" is shared by several rules; links will jump to the first"),
            ));
        }
    }
}
