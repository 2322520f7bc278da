//! # CLI Structure and Argument Parsing
//!
//! Defines the command-line interface for `scriptref` using `clap`
//! derive macros.
//!
//! ```bash
//! # Generate maps for two documentation versions
//! scriptref generate 2021.3 2022.1 --metadata-root metadata --output-dir site
//!
//! # Dry-run without network probes
//! scriptref generate 2021.3 --offline
//!
//! # Resolve one symbol while debugging the URL heuristics
//! scriptref resolve UnityEngine.Transform.position \
//!     --comment-id P:UnityEngine.Transform.position --docs-version 2021.3
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main CLI structure for the `scriptref` command.
#[derive(Debug, Parser)]
#[command(
    name = "scriptref",
    version,
    about = "Generate cross-reference maps for Unity ScriptReference documentation"
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build one cross-reference map per documentation version
    Generate {
        /// Documentation versions to process (e.g. 2021.3)
        #[arg(required = true)]
        versions: Vec<String>,

        /// Root directory holding one metadata directory per version
        #[arg(long, default_value = "metadata")]
        metadata_root: PathBuf,

        /// Directory receiving `<version>/xrefmap.yml` files
        #[arg(long, default_value = "site")]
        output_dir: PathBuf,

        /// Override the documentation site root URL
        #[arg(long)]
        base_url: Option<String>,

        /// Override the probe concurrency cap
        #[arg(long)]
        concurrency: Option<usize>,

        /// Skip existence probes and emit primary candidates unverified
        #[arg(long)]
        offline: bool,
    },

    /// Resolve a single symbol identifier to its page URL
    Resolve {
        /// Symbol uid (e.g. UnityEngine.Transform.position)
        uid: String,

        /// Doc-comment ID; defaults to `T:<uid>`
        #[arg(long)]
        comment_id: Option<String>,

        /// Documentation version the URL should point at
        #[arg(long)]
        docs_version: String,

        /// Override the documentation site root URL
        #[arg(long)]
        base_url: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}
