//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "encanto";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Enable with:");
                    eprintln!(
                        "#   encanto completions bash > ~/.local/share/bash-completion/completions/encanto"
                    );
                }
                Shell::Zsh => {
                    eprintln!("# Enable with:");
                    eprintln!("#   encanto completions zsh > ~/.zsh/completions/_encanto");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!("# Enable with:");
                    eprintln!(
                        "#   encanto completions fish > ~/.config/fish/completions/encanto.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!("# Enable with:");
                    eprintln!("#   encanto completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
