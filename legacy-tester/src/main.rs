mod checks;
mod loader;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use checks::{CheckRun, list_checks, run_checks};
use loader::{DEFAULT_CONFIG_PATH, FileConfigLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for terminals
    Console,
    /// Machine-readable report with a timestamp
    Json,
    /// Markdown table for pull requests and wikis
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "legacy-tester", version)]
#[command(about = "Validate the Complex Legacy site configuration before publishing")]
struct Args {
    /// Path to site.config.json
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Search queries to run against the rules index (repeatable)
    #[arg(long = "query", short = 'q')]
    queries: Vec<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,

    /// List all available checks and exit
    #[arg(long)]
    list_checks: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_checks(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console && args.output.is_none() {
        announce_banner();
    }

    let loader = FileConfigLoader::new(args.config.clone());
    let run = run_checks(&loader, &args.queries);
    write_report(&args, &run, &loader.path().display().to_string())?;

    if !run.passed(args.strict) {
        log::info!("Configuration checks failed");
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn maybe_list_checks(args: &Args) -> Result<bool> {
    if !args.list_checks {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available checks:")?;
    for (key, description) in list_checks() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏙️  Complex Legacy Config Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn write_report(args: &Args, run: &CheckRun, config_path: &str) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => reports::generate_console_report(
            output_target.writer(),
            run,
            args.strict,
            args.verbose,
        )?,
        ReportFormat::Json => {
            reports::generate_json_report(output_target.writer(), run, config_path, args.strict)?;
        }
        ReportFormat::Markdown => reports::generate_markdown_report(
            output_target.writer(),
            run,
            config_path,
            args.strict,
        )?,
    }
    output_target
        .flush_inner()
        .context("failed to flush report")?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_config() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join(DEFAULT_CONFIG_PATH)
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "legacy-tester-unit-{label}-{}",
            std::process::id()
        ))
    }

    fn base_args() -> Args {
        Args::parse_from(["legacy-tester"])
    }

    #[test]
    fn defaults_match_cli_contract() {
        let args = base_args();
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(args.report, ReportFormat::Console);
        assert!(args.queries.is_empty());
        assert!(!args.strict);
    }

    #[test]
    fn queries_are_repeatable() {
        let args = Args::parse_from([
            "legacy-tester",
            "--query",
            "pvp",
            "-q",
            "zonas",
            "--report",
            "markdown",
        ]);
        assert_eq!(args.queries, ["pvp", "zonas"]);
        assert_eq!(args.report, ReportFormat::Markdown);
    }

    #[test]
    fn maybe_list_checks_returns_false_when_disabled() {
        assert!(!maybe_list_checks(&base_args()).unwrap());
    }

    #[test]
    fn maybe_list_checks_writes_output() {
        let path = temp_path("list");
        let mut args = base_args();
        args.list_checks = true;
        args.output = Some(path.clone());
        assert!(maybe_list_checks(&args).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Available checks"));
        assert!(content.contains("search-roundtrip"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn write_report_emits_json_for_shipped_config() {
        let path = temp_path("json");
        let mut args = base_args();
        args.config = shipped_config();
        args.report = ReportFormat::Json;
        args.output = Some(path.clone());
        let loader = FileConfigLoader::new(args.config.clone());
        let run = run_checks(&loader, &["respeto".to_string()]);
        assert!(run.passed(true));
        write_report(&args, &run, "site.config.json").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["passed"], true);
        assert_eq!(value["queries"][0]["anchors"][0], "regla-1");
        let _ = std::fs::remove_file(path);
    }
}
