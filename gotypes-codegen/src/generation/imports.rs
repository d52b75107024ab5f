//! Import collection for generated Go files.

use indexmap::IndexSet;

use crate::builder::CodeBuilder;

/// Tracks imported packages and deduplicates them.
///
/// Maintains insertion order; rendering sorts the way gofmt does.
///
/// # Example
///
/// ```
/// use gotypes_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("time");
/// imports.add("strconv");
/// imports.add("time");
///
/// assert_eq!(imports.len(), 2);
/// assert_eq!(imports.render(), "import (\n\t\"strconv\"\n\t\"time\"\n)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    packages: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package import.
    pub fn add(&mut self, package: &str) {
        if !self.packages.contains(package) {
            self.packages.insert(package.to_string());
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Render the import declaration, or an empty string if there is nothing to import.
    pub fn render(&self) -> String {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_unstable();

        match sorted.as_slice() {
            [] => String::new(),
            [single] => format!("import \"{}\"\n", single),
            many => CodeBuilder::go()
                .block_with_close("import (", ")", |b| {
                    b.each(many.iter(), |b, pkg| b.line(&format!("\"{}\"", pkg)))
                })
                .build(),
        }
    }
}
