//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BrandCommand, CategoryCommand, CompletionsCommand, ImageCommand, InitCommand, ProductCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line administration for an encanto catalog.
#[derive(Parser)]
#[command(name = "encanto")]
#[command(version, about = "Manage a product catalog with hierarchical categories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ENCANTO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLISECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Separator for category paths given on the command line
    #[arg(long, value_name = "SEPARATOR", global = true)]
    pub separator: Option<String>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "ENCANTO_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and catalog database
    Init(InitCommand),

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Manage brands
    #[command(subcommand)]
    Brand(BrandCommand),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Manage product images
    #[command(subcommand)]
    Image(ImageCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
