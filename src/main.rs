//! Redline: content quality analyzer CLI

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use redline::orchestrator::Orchestrator;
use redline::reporter::{ConsoleReporter, JsonReporter};
use redline::router::{is_comprehensive, IntentRouter};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Redline: content quality analyzer for prose
#[derive(Parser, Debug)]
#[command(name = "redline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to analyze (reads stdin when omitted or "-")
    path: Option<PathBuf>,

    /// What to analyze, in plain words (e.g. "check grammar and readability").
    /// Vague or comprehensive requests run all four analyzers.
    #[arg(long, short, default_value = "")]
    request: String,

    /// Output the report as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Quiet mode (findings and recommendations only)
    #[arg(long, short)]
    quiet: bool,

    /// Record an execution audit trail and attach it to the report
    #[arg(long)]
    audit: bool,

    /// Also append audit entries to this JSON-lines file (implies --audit)
    #[arg(long, value_name = "FILE")]
    audit_file: Option<PathBuf>,

    /// Per-analyzer timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,
}

fn read_text(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let text = read_text(&args.path)?;

    let mut orchestrator = Orchestrator::new().with_timeout(Duration::from_secs(args.timeout));
    if let Some(path) = args.audit_file.clone() {
        orchestrator = orchestrator.with_audit_file(path);
    } else if args.audit {
        orchestrator = orchestrator.with_audit();
    }

    if !args.json && !args.quiet {
        let selected = IntentRouter::new().route(&args.request);
        let names: Vec<String> = selected.iter().map(|k| k.to_string()).collect();
        let note = if args.request.trim().is_empty() {
            " (no request given - running everything)"
        } else if is_comprehensive(&args.request) {
            " (comprehensive request)"
        } else {
            ""
        };
        println!(
            "{} {}{}",
            "Running:".dimmed(),
            names.join(", ").dimmed(),
            note.dimmed()
        );
    }

    let report = orchestrator.run(&args.request, &text);

    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report(&report));
    } else {
        let reporter = if args.quiet {
            ConsoleReporter::new().quiet()
        } else {
            ConsoleReporter::new()
        };
        reporter.report(&report);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
