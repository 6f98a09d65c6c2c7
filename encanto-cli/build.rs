//! Build script for encanto-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("encanto")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a product catalog with hierarchical categories")
        .long_about(
            "Command-line administration for an encanto catalog: categories arranged by \
             hierarchical path, brands, products and product images",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ENCANTO_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in milliseconds)")
                .value_name("MILLISECONDS")
                .global(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator for category paths given on the command line")
                .value_name("SEPARATOR")
                .global(true),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("ENCANTO_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and catalog database")
                .long_about("Create the data directory, the catalog database and optionally a configuration file"),
            Command::new("category")
                .about("Manage categories")
                .long_about("Add, list, show, move and delete categories; a category needs its parent to exist"),
            Command::new("brand")
                .about("Manage brands")
                .long_about("Add, list, show and delete brands"),
            Command::new("product")
                .about("Manage products")
                .long_about("Add, list, show and delete products; `show` prints the nested JSON view"),
            Command::new("image")
                .about("Manage product images")
                .long_about("Attach, list and remove product images"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("encanto.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
