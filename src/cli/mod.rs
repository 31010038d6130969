// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Three subcommands: `search` runs one query straight through the pipeline,
//! `inspect` validates an index file, and `interactive` feeds stdin lines
//! through a debounced session the way keystrokes reach the search modal.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Debounced site search over a static content index",
    version
)]
pub struct Cli {
    /// Optional JSON config file (e.g. {"debounceMs": 250})
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single query and print grouped results
    Search {
        /// Path to the content index JSON file
        index: String,

        /// Search query
        query: String,

        /// Print the outcome as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show each result's score and the rules that matched
        #[arg(long)]
        explain: bool,
    },

    /// Validate a content index and print per-type counts
    Inspect {
        /// Path to the content index JSON file
        index: String,
    },

    /// Read queries from stdin, one line per keystroke, through the debouncer
    Interactive {
        /// Path to the content index JSON file
        index: String,

        /// Debounce delay in milliseconds (overrides config and environment)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print each settled outcome as a JSON line
        #[arg(long)]
        json: bool,
    },
}
