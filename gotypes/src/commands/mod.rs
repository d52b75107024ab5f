mod check;
mod completions;
mod export;
mod generate;
mod imports;
mod list;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use export::ExportCommand;
use generate::GenerateCommand;
use gotypes_core::{TypeRegistry, TypesToml};
use imports::ImportsCommand;
use list::ListCommand;

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gotypes_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the type table from `config`, or the built-in table when absent.
pub(crate) fn load_registry(config: Option<&Path>) -> TypeRegistry {
    match config {
        Some(path) => TypesToml::open(path).unwrap_or_exit().into_registry(),
        None => {
            tracing::debug!("using built-in type table");
            TypeRegistry::builtin().clone()
        }
    }
}

/// Display name of where the table came from.
pub(crate) fn source_name(config: Option<&Path>) -> String {
    config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in table".to_string())
}

#[derive(Parser)]
#[command(name = "gotypes")]
#[command(version)]
#[command(about = "Generate Go flag value types from a primitive type table")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Imports(cmd) => cmd.run(),
            Commands::Export(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered types
    List(ListCommand),

    /// Validate a type table without generating code
    Check(CheckCommand),

    /// Print the imports generated code needs
    Imports(ImportsCommand),

    /// Write the built-in type table as TOML
    Export(ExportCommand),

    /// Generate Go value and flag sources
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Shared `--config` argument.
#[derive(clap::Args, Debug)]
pub(crate) struct ConfigArg {
    /// Path to a gotypes.toml type table (defaults to the built-in table)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArg {
    pub fn registry(&self) -> TypeRegistry {
        load_registry(self.config.as_deref())
    }

    pub fn source_name(&self) -> String {
        source_name(self.config.as_deref())
    }
}
