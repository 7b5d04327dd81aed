use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// Quantity and pod-state views for mkube clusters
///
/// Reads pod and node documents (JSON or YAML, a file or `-` for stdin) and
/// prints the READY, STATUS and RESTARTS columns and humanized quantities
/// the console shows.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mkube-insight", version, arg_required_else_help = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format, overriding the config file
    #[arg(short, long, global = true, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List pods with READY, STATUS and RESTARTS
    Pods {
        /// Pod document, or `-` for stdin
        #[arg(value_name = "FILE")]
        source: String,

        /// Keep pods whose coarse status matches
        #[arg(long, value_name = "STATUS")]
        filter: Option<String>,
    },

    /// Show pods in detail
    Pod {
        /// Pod document, or `-` for stdin
        #[arg(value_name = "FILE")]
        source: String,
    },

    /// List nodes with humanized capacity
    Nodes {
        /// Node document, or `-` for stdin
        #[arg(value_name = "FILE")]
        source: String,
    },

    /// Humanize a raw number
    Humanize {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit system name
        #[arg(long, default_value = "numeric")]
        units: String,

        /// Keep the full precision
        #[arg(long)]
        raw: bool,
    },

    /// Turn a humanized string back into a number
    Dehumanize {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit system name
        #[arg(long, default_value = "binaryBytesWithoutB")]
        units: String,
    },

    /// Check a user-entered quantity
    Validate {
        #[arg(value_enum)]
        kind: QuantityKind,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Convert a CPU or memory quantity to a plain number
    Base {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QuantityKind {
    Memory,
    Cpu,
    Time,
}
