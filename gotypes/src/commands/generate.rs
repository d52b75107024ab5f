use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gotypes_codegen::{GenerateOptions, Generator};
use gotypes_core::Variant;

use super::ConfigArg;
use crate::reports::{GenerateReport, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArg,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Go package name of the generated files
    #[arg(short, long, default_value = "cli")]
    pub package: String,

    /// Variant to generate (extended or stringer)
    #[arg(long, default_value = "extended")]
    pub variant: Variant,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let registry = self.config.registry();
        let options = GenerateOptions::default()
            .with_package(&self.package)
            .with_variant(self.variant);
        let generator = Generator::new(&registry, options)?;

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator)
        }
    }

    fn run_generation(&self, generator: &Generator) -> Result<()> {
        let stats = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        GenerateReport {
            output_dir: self.output.clone(),
            package: self.package.clone(),
            variant: self.variant,
            types: generator.registry().len(),
            written: stats.written_paths,
        }
        .render(&mut TerminalOutput::new());

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview()?;
        PreviewReport { files }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
