//! Go code generator driven by a [`TypeRegistry`].

use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use gotypes_core::{TypeRegistry, Variant};

use crate::{
    files::{FileHeader, FlagsFile, GoFile, ValueFile, ValuesFile},
    generation::{FileEntry, FileRegistry, PreviewEntry, WriteStats},
};

/// Options controlling what is generated.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Go package clause of the generated files.
    pub package: String,
    /// Which registry variant to generate from.
    pub variant: Variant,
    /// Tool named in the "Code generated" marker.
    pub tool: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package: "cli".to_string(),
            variant: Variant::Extended,
            tool: "gotypes".to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }
}

/// Generates `value_gen.go`, `values_gen.go` and `flags_gen.go`.
///
/// # Example
///
/// ```
/// use gotypes_codegen::{GenerateOptions, Generator};
/// use gotypes_core::TypeRegistry;
///
/// let generator = Generator::new(TypeRegistry::builtin(), GenerateOptions::default()).unwrap();
/// let files = generator.preview().unwrap();
/// assert_eq!(files.len(), 3);
/// ```
#[derive(Debug)]
pub struct Generator {
    registry: TypeRegistry,
    options: GenerateOptions,
}

impl Generator {
    /// Validate the registry and derive the requested variant.
    pub fn new(registry: &TypeRegistry, options: GenerateOptions) -> Result<Self> {
        registry
            .validate()
            .map_err(|e| eyre::Report::new(*e))
            .wrap_err("Type table is invalid")?;

        if !is_go_identifier(&options.package) {
            return Err(eyre!("'{}' is not a valid Go package name", options.package));
        }

        let registry = registry.variant(options.variant);
        tracing::debug!(
            variant = %options.variant,
            types = registry.len(),
            package = %options.package,
            "prepared generator"
        );

        Ok(Self { registry, options })
    }

    /// The registry the generator renders from (already narrowed to the variant).
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Render every file into a registry without touching the filesystem.
    pub fn files(&self) -> Result<FileRegistry> {
        let zero_check = self.options.variant.needs_zero_check();
        let required = self
            .registry
            .required_imports(zero_check)
            .map_err(|e| eyre::Report::new(*e))?;
        let types = self.registry.list_types();
        let header = FileHeader::new(&self.options.tool, &self.options.package);

        let value = ValueFile::new(types, required, zero_check);
        let values = ValuesFile::new(types);
        let flags = FlagsFile::new(types, &self.options.package);
        let sources: [&dyn GoFile; 3] = [&value, &values, &flags];

        let mut files = FileRegistry::new();
        files.register_all(
            sources
                .iter()
                .map(|file| FileEntry::new(file.path(), file.render(&header))),
        );
        Ok(files)
    }

    /// Preview the generated files without writing them.
    pub fn preview(&self) -> Result<Vec<PreviewEntry>> {
        Ok(self.files()?.preview())
    }

    /// Write the generated files into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        let files = self.files()?;
        let stats = files
            .write_all(output_dir)
            .wrap_err_with(|| format!("Failed to generate into {}", output_dir.display()))?;

        tracing::info!(
            written = stats.written,
            dir = %output_dir.display(),
            "generated Go sources"
        );
        Ok(stats)
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = GenerateOptions::default()
            .with_package("flags")
            .with_variant(Variant::Stringer)
            .with_tool("gen");

        assert_eq!(options.package, "flags");
        assert_eq!(options.variant, Variant::Stringer);
        assert_eq!(options.tool, "gen");
    }

    #[test]
    fn test_rejects_bad_package() {
        let err = Generator::new(
            TypeRegistry::builtin(),
            GenerateOptions::default().with_package("my-pkg"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a valid Go package name"));
    }

    #[test]
    fn test_stringer_variant_narrows_registry() {
        let generator = Generator::new(
            TypeRegistry::builtin(),
            GenerateOptions::default().with_variant(Variant::Stringer),
        )
        .unwrap();

        assert_eq!(generator.registry().len(), 14);
        assert!(!generator.registry().supports_zero_check());
    }

    #[test]
    fn test_is_go_identifier() {
        assert!(is_go_identifier("cli"));
        assert!(is_go_identifier("_x1"));
        assert!(!is_go_identifier(""));
        assert!(!is_go_identifier("1cli"));
        assert!(!is_go_identifier("a.b"));
    }
}
