//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the encanto data directory and catalog database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Parser;
use encanto::config::USER_CONFIG_FILE;
use encanto::database::DATABASE_FILE_NAME;
use encanto::operations::init::{init_database, InitOptions};

/// Initialize the data directory and catalog database.
#[derive(Parser)]
#[command(about = "Initialize the encanto data directory and catalog database")]
pub struct InitCommand {
    /// Replace an existing catalog database
    #[arg(long)]
    overwrite: bool,

    /// Create a commented configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` does not apply here; creating the catalog is the
    /// point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize encanto in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            let db_path = data_dir.join(DATABASE_FILE_NAME);
            if !db_path.exists() {
                println!("  - Create database: {}", db_path.display());
            } else if self.overwrite {
                println!("  - Replace existing database: {}", db_path.display());
            } else {
                println!(
                    "  - ERROR: Database already exists (use --overwrite to replace): {}",
                    db_path.display()
                );
            }

            if self.with_config {
                let config_path = data_dir.join(USER_CONFIG_FILE);
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        let options = InitOptions::new(data_dir.clone())
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_database(&options)?;

        println!("Initialized encanto in: {}", data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_replaced {
            println!("  - Replaced database");
        } else {
            println!("  - Created database");
        }

        if result.config_created {
            println!("  - Created configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
