use crate::config::AnalyzerConfig;
use crate::handler::handle_event;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Event document (JSON). Reads stdin when omitted; empty input is `{}`.
    pub event: Option<PathBuf>,
}

/// Runs the invocation wrapper once and prints the response envelope. The
/// envelope carries analysis failures itself, so only unreadable events fail
/// the command.
pub fn run_invoke(args: InvokeArgs, cfg: &AnalyzerConfig) -> Result<()> {
    let contents = match &args.event {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let event = parse_event(&contents)?;
    let response = handle_event(&event, cfg);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn parse_event(contents: &str) -> Result<Value> {
    if contents.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(contents).context("event is not valid JSON")
}
