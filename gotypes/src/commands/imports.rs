use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit};

#[derive(Args)]
pub struct ImportsCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Include the packages zero checks need
    #[arg(long)]
    pub zero_check: bool,
}

impl ImportsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = self.config.registry();
        let imports = registry.required_imports(self.zero_check).unwrap_or_exit();

        for package in imports {
            println!("{}", package);
        }
        Ok(())
    }
}
