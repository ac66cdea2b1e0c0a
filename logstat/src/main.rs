use clap::{Parser, Subcommand};
use logstat_core::cli::{self, AnalyzeArgs, InvokeArgs};
use logstat_core::config::AnalyzerConfig;
use logstat_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: HTTP access log analyzer"
)]
struct Cli {
    /// Optional TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a batch of access-log records and print the report
    Analyze(AnalyzeArgs),

    /// Run one invocation on an event document and print the response envelope
    Invoke(InvokeArgs),
}

fn main() {
    let cli = Cli::parse();

    let cfg = match AnalyzerConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(cfg.log_format);

    let result = match cli.command {
        Command::Analyze(args) => cli::run_analyze(args, &cfg),
        Command::Invoke(args) => cli::run_invoke(args, &cfg),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("logstat error: {e:#}");
        std::process::exit(1);
    }
}
