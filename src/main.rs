// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docrank::{load_directory, load_fixtures, load_payload_path, rank_scored, tokenize, Document};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            query,
            dir,
            ids,
            payload,
            limit,
            scores,
            json,
        } => {
            let documents = match (dir, payload) {
                (Some(dir), _) => load_from_dir(&dir, &ids)?,
                (None, Some(payload)) => load_payload_path(&payload)
                    .with_context(|| format!("Failed to load payload {}", payload.display()))?,
                (None, None) => anyhow::bail!("either --dir or --payload is required"),
            };
            run_rank(&documents, &query, limit, scores, json)
        }
        Commands::Tokens { text } => {
            let mut out = std::io::stdout().lock();
            for term in tokenize(&text) {
                writeln!(out, "{}", term)?;
            }
            Ok(())
        }
    }
}

/// Log to stderr so stdout carries only results. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_from_dir(dir: &Path, ids: &[String]) -> Result<Vec<Document>> {
    if ids.is_empty() {
        load_directory(dir).with_context(|| format!("Failed to load documents from {}", dir.display()))
    } else {
        load_fixtures(dir, ids).with_context(|| format!("Failed to load documents from {}", dir.display()))
    }
}

fn run_rank(
    documents: &[Document],
    query: &str,
    limit: Option<usize>,
    scores: bool,
    json: bool,
) -> Result<()> {
    let mut ranked = rank_scored(documents, query);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &ranked).context("Failed to write JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    if ranked.is_empty() {
        eprintln!("{}", display::no_results(query));
        return Ok(());
    }

    if scores {
        for line in display::render_scored(&ranked) {
            writeln!(out, "{}", line)?;
        }
    } else {
        for doc in &ranked {
            writeln!(out, "{}", doc.id)?;
        }
    }
    Ok(())
}
