use clap::Args;
use eyre::{Context, Result};
use gotypes_core::Variant;

use super::ConfigArg;
use crate::reports::{Report, TerminalOutput, TypesReport};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Variant to list (extended or stringer)
    #[arg(long, default_value = "extended")]
    pub variant: Variant,

    /// Print the types as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = self.config.registry();
        let report = TypesReport::new(self.config.source_name(), &registry, self.variant);

        if self.json {
            println!("{}", report.to_json().wrap_err("Failed to serialize types")?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
