//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scan;

/// Top-level CLI parser for `otto`.
#[derive(Debug, Parser)]
#[command(name = "otto", version, about = "Suggest automations for repetitive work")]
pub struct Cli {
    /// Model identifier override (defaults to OTTO_MODEL or the built-in default).
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Suggest automations for a described repetitive task.
    Task {
        /// Free-text description of the task.
        description: String,
    },
    /// Scan a project folder and suggest DevOps/workflow automations.
    Project {
        /// Path to the project folder.
        path: PathBuf,
        /// Maximum traversal depth (root is depth 0).
        #[arg(long, default_value_t = scan::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Scan a folder of learning materials and suggest study automations.
    Learn {
        /// Path to the materials folder.
        path: PathBuf,
        /// Maximum traversal depth (root is depth 0).
        #[arg(long, default_value_t = scan::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}
