use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::checks::{CheckRun, Status};

/// Serialized form of a run, used by the JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    config_path: &'a str,
    strict: bool,
    passed: bool,
    #[serde(flatten)]
    run: &'a CheckRun,
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pass => "PASS",
        Status::Warn => "WARN",
        Status::Fail => "FAIL",
        Status::Skip => "SKIP",
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    run: &CheckRun,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📋 Configuration Checks".bright_cyan().bold())?;
    writeln!(out, "{}", "=======================".cyan())?;

    for check in &run.checks {
        let status = match check.status {
            Status::Pass => "✅ PASS".green(),
            Status::Warn => "⚠️  WARN".yellow(),
            Status::Fail => "❌ FAIL".red(),
            Status::Skip => "⏭️  SKIP".dimmed(),
        };
        writeln!(out, "{status} {}", check.name.bold())?;
        if check.status != Status::Pass || verbose {
            for detail in &check.details {
                writeln!(out, "     • {detail}")?;
            }
        }
    }

    if !run.issues.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🔎 Audit Findings".bright_yellow().bold())?;
        writeln!(out, "{}", "=================".yellow())?;
        for issue in &run.issues {
            writeln!(out, "{issue}")?;
        }
    }

    for query in &run.queries {
        writeln!(out)?;
        writeln!(
            out,
            "🔍 {:?}: {} match(es)",
            query.query,
            query.anchors.len()
        )?;
        for anchor in &query.anchors {
            writeln!(out, "   #{anchor}")?;
        }
    }

    writeln!(out)?;
    let passed = run.checks.iter().filter(|c| c.status == Status::Pass).count();
    writeln!(out, "Passed: {}/{}", passed.to_string().green(), run.checks.len())?;
    if run.passed(strict) {
        writeln!(out, "{}", "Result: OK".green().bold())?;
    } else {
        writeln!(out, "{}", "Result: FAILED".red().bold())?;
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    run: &CheckRun,
    config_path: &str,
    strict: bool,
) -> Result<()> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        config_path,
        strict,
        passed: run.passed(strict),
        run,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    run: &CheckRun,
    config_path: &str,
    strict: bool,
) -> Result<()> {
    writeln!(out, "# Complex Legacy Configuration Report\n")?;
    writeln!(out, "- **Config**: `{config_path}`")?;
    writeln!(
        out,
        "- **Generated**: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        out,
        "- **Result**: {}\n",
        if run.passed(strict) { "✅ OK" } else { "❌ FAILED" }
    )?;

    writeln!(out, "## Checks\n")?;
    writeln!(out, "| Check | Status | Details |")?;
    writeln!(out, "| --- | --- | --- |")?;
    for check in &run.checks {
        writeln!(
            out,
            "| {} | {} | {} |",
            check.name,
            status_label(check.status),
            check.details.join("; ").replace('|', "\\|")
        )?;
    }

    if !run.issues.is_empty() {
        writeln!(out, "\n## Audit Findings\n")?;
        for issue in &run.issues {
            writeln!(out, "- **{}** `{}`: {}", issue.severity, issue.code, issue.message)?;
        }
    }

    if !run.queries.is_empty() {
        writeln!(out, "\n## Queries\n")?;
        for query in &run.queries {
            let anchors: Vec<String> = query.anchors.iter().map(|a| format!("`#{a}`")).collect();
            writeln!(out, "- `{}` → {}", query.query, anchors.join(", "))?;
        }
    }
    Ok(())
}
