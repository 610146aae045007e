//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the
//! `clap` crate. It specifies the available subcommands, arguments, and flags
//! for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "armyforge")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Static unit-card site generator for wargame factions")]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Render every registered faction page plus the site index
    Build {
        /// Restrict the build to a single registered faction slug
        #[arg(short, long)]
        faction: Option<String>,

        /// Override the faction data directory
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the registered faction slugs
    List {},
}
