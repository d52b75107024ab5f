use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use gotypes_core::TypeRegistry;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ExportCommand {
    /// File to write (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self) -> Result<()> {
        let content = TypeRegistry::builtin().to_toml_string().unwrap_or_exit();

        match &self.output {
            Some(path) => {
                fs::write(path, &content)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{}", content),
        }
        Ok(())
    }
}
