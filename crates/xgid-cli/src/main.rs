//! XGID inspector
//!
//! Runs the `xgid` block processor over files (or stdin) and prints the
//! decoded position and analysis as JSON, one document per input.

mod config;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xgid_core::{process_block, BlockOutcome};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "xgid-inspect")]
#[command(about = "Decode XGID blocks and their XG analysis into JSON")]
struct Args {
    /// Block bodies to decode (stdin when none are given)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Decode this XGID string instead of reading files
    #[arg(long, conflicts_with = "files")]
    xgid: Option<String>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Exit with status 1 if any block fails to parse
    #[arg(long)]
    strict: bool,
}

fn read_inputs(args: &Args) -> anyhow::Result<Vec<(String, String)>> {
    if let Some(xgid) = &args.xgid {
        return Ok(vec![("--xgid".to_string(), xgid.clone())]);
    }

    if args.files.is_empty() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), source)]);
    }

    args.files
        .iter()
        .map(|path| {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), source))
        })
        .collect()
}

fn render(outcome: &BlockOutcome, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let pretty = config.pretty && !args.compact;
    let strict = config.strict || args.strict;

    let inputs = read_inputs(&args)?;
    info!(inputs = inputs.len(), "Decoding XGID blocks");

    let mut failures = 0;
    for (name, source) in &inputs {
        let outcome = process_block(source);
        if outcome.is_error() {
            warn!(input = %name, "Block did not decode");
            failures += 1;
        }
        println!("{}", render(&outcome, pretty)?);
    }

    if failures > 0 {
        info!(failures, "Some blocks failed to decode");
    }

    if strict && failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["xgid-inspect", "--compact", "a.txt", "b.txt"]);
        assert!(args.compact);
        assert_eq!(args.files.len(), 2);
        assert!(args.xgid.is_none());
    }

    #[test]
    fn test_xgid_conflicts_with_files() {
        let result = Args::try_parse_from(["xgid-inspect", "--xgid", "x", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_compact() {
        let outcome = process_block("");
        let json = render(&outcome, false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"kind\":\"error\""));
    }
}
