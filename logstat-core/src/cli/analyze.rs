use crate::analysis::{AnalysisReport, analyze_batch, render_report};
use crate::cli::input::read_batch;
use crate::config::AnalyzerConfig;
use crate::logging::{OutputMode, default_output_mode};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Log batch: a JSON array or newline-delimited JSON. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Records folded per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    /// Print a human-readable summary
    #[arg(long)]
    pub pretty: bool,
}

pub fn run_analyze(args: AnalyzeArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let batch = match &args.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            read_batch(file).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => read_batch(io::stdin().lock()).context("failed to read stdin")?,
    };

    let page_size = args.page_size.unwrap_or(cfg.page_size);
    let report = analyze_batch(&batch, page_size)?;

    let mode = if args.json {
        OutputMode::Json
    } else if args.pretty {
        OutputMode::Pretty
    } else {
        default_output_mode()
    };

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    write_report(&report, mode, color, &mut stdout.lock())
}

pub fn write_report(
    report: &AnalysisReport,
    mode: OutputMode,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    match mode {
        OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
        OutputMode::Pretty => write!(out, "{}", render_report(report, color))?,
    }
    out.flush()?;
    Ok(())
}
