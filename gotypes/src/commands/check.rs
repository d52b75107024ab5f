use clap::Args;
use eyre::Result;

use super::{ConfigArg, UnwrapOrExit};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArg,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        // `--config` tables are validated on load.
        let registry = self.config.registry();
        registry.validate().unwrap_or_exit();

        CheckReport::new(self.config.source_name(), &registry).render(&mut TerminalOutput::new());
        Ok(())
    }
}
