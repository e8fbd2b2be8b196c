//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site into the output directory
    Build {
        /// Clear the output directory completely before building
        #[arg(long)]
        clear: bool,
    },

    /// Load and validate all content without writing output
    Check,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }

    /// Whether the build should clear the output directory first.
    pub const fn clear_output(&self) -> bool {
        matches!(self.command, Commands::Build { clear: true })
    }
}
