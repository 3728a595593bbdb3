// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docrank command-line interface.
//!
//! Two subcommands: `rank` to order documents by relevance to a query, and
//! `tokens` to show how a piece of text is normalized into terms. Documents
//! come either from a directory (one file per document, file name as id) or
//! from a JSON payload.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docrank",
    about = "Rank text documents by TF-IDF relevance to a query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents against a query and print matching ids, best first
    Rank {
        /// Free-text query
        query: String,

        /// Directory with one plain-text file per document (file name = id)
        #[arg(short, long, conflicts_with = "payload", required_unless_present = "payload")]
        dir: Option<PathBuf>,

        /// Only rank these files from --dir, in this order (repeatable)
        ///
        /// Input order is the tie-break for equal scores. Without --id every
        /// file in the directory is used, sorted by name.
        #[arg(long = "id", requires = "dir")]
        ids: Vec<String>,

        /// JSON payload `{"documents": [{"id", "text"}]}`; `-` reads stdin
        #[arg(short, long)]
        payload: Option<PathBuf>,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print scores and relevance bars next to ids
        #[arg(long, conflicts_with = "json")]
        scores: bool,

        /// Print results as a JSON array of {id, score}
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized terms of a text
    Tokens {
        /// Text to tokenize
        text: String,
    },
}
