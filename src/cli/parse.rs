//! CLI parse: clap types for factprune. No behavior; definitions only.

use crate::filters::CLEAN_FACTS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// factprune - strip dynamic values from host fact snapshots
#[derive(Parser)]
#[command(name = "factprune")]
#[command(about = "Strip dynamic values from host fact snapshots for deterministic comparison")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Clean one fact dump and print or write the result
    Clean {
        /// Fact dump (JSON), or "-" for stdin
        input: String,
        /// Write the cleaned facts here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Emit compact JSON regardless of config
        #[arg(long)]
        compact: bool,
        /// Registered filter to apply
        #[arg(long, default_value = CLEAN_FACTS)]
        filter: String,
    },
    /// Print the BLAKE3 fingerprint of a cleaned fact dump
    Fingerprint {
        /// Fact dump (JSON), or "-" for stdin
        input: String,
    },
    /// Clean two fact dumps and report whether they match
    Compare {
        /// First fact dump (JSON)
        left: String,
        /// Second fact dump (JSON)
        right: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Clean every fact dump under a directory
    Batch {
        /// Directory to scan for fact dumps
        dir: PathBuf,
        /// Directory to write cleaned dumps to, mirroring relative paths
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// List registered filter names
    Filters,
    /// Print the cleanup rules as JSON (null marks a removed key)
    Spec,
    /// Print the effective configuration as TOML
    ShowConfig,
}
