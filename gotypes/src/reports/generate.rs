//! Generate command report data structures.

use std::path::PathBuf;

use gotypes_codegen::generation::PreviewEntry;
use gotypes_core::Variant;

use super::output::{Output, Report};

/// Result of writing generated files.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub package: String,
    pub variant: Variant,
    /// Number of types rendered.
    pub types: usize,
    /// Paths written, relative to `output_dir`.
    pub written: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "package {} ({}, {} types)",
            self.package, self.variant, self.types
        ));
        out.newline();
        out.section(&format!("Generated in {}", self.output_dir.display()));
        for path in &self.written {
            out.added_item(path);
        }
    }
}

/// Files that would be generated.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewEntry>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}
