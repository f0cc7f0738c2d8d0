// SPDX-License-Identifier: MIT
//! Merge the exported assets of JSON-decoded SWF movies into a base movie

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swf_merge::{json, merge_with_config, FailurePolicy, MergeConfig, Movie};

#[derive(Parser)]
#[command(name = "swf-merge", version, about)]
struct Cli {
    /// Base movie (JSON)
    base: PathBuf,

    /// Movies whose exports are imported, in order
    extras: Vec<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// abort | skip (defaults to SWF_MERGE_FAILURE_POLICY, then abort)
    #[arg(long)]
    failure_policy: Option<FailurePolicy>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_movie(path: &PathBuf) -> anyhow::Result<Movie> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    json::read_movie(file).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MergeConfig::from_env().map_err(|e| anyhow!(e))?;
    if let Some(policy) = cli.failure_policy {
        config.failure_policy = policy;
    }

    let base = read_movie(&cli.base)?;
    let extras = cli
        .extras
        .iter()
        .map(read_movie)
        .collect::<anyhow::Result<Vec<_>>>()?;
    info!(
        "Merging {} extra movie(s) into {} (failure policy: {})",
        extras.len(),
        cli.base.display(),
        config.failure_policy
    );

    let merged = merge_with_config(&base, extras, &config).context("Merge failed")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            json::write_movie(BufWriter::new(file), &merged, cli.pretty)?;
            info!("Wrote {}", path.display());
        }
        None => json::write_movie(io::stdout().lock(), &merged, cli.pretty)?,
    }

    Ok(())
}
