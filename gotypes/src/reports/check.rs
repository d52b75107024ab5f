//! Check command report data structures.

use gotypes_core::{TypeRegistry, Variant};

use super::output::{Output, Report};

/// Summary of a validated type table.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the table came from.
    pub source: String,
    /// Types in the extended variant.
    pub types: usize,
    /// Types in the stringer variant.
    pub stringer_types: usize,
    /// Whether every type carries a zero predicate.
    pub zero_check: bool,
    pub imports: Vec<String>,
    pub imports_stringer: Vec<String>,
}

impl CheckReport {
    pub fn new(source: String, registry: &TypeRegistry) -> Self {
        Self {
            source,
            types: registry.len(),
            stringer_types: registry.variant(Variant::Stringer).len(),
            zero_check: registry.supports_zero_check(),
            imports: registry.imports().to_vec(),
            imports_stringer: registry.imports_stringer().to_vec(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.source));
        out.newline();

        out.key_value_indented(
            "extended",
            &format!(
                "{} type{}{}",
                self.types,
                if self.types == 1 { "" } else { "s" },
                if self.zero_check { "" } else { " (no zero checks)" }
            ),
        );
        out.key_value_indented(
            "stringer",
            &format!(
                "{} type{}",
                self.stringer_types,
                if self.stringer_types == 1 { "" } else { "s" }
            ),
        );
        out.key_value_indented("imports", &self.imports.join(", "));
        out.key_value_indented("imports_stringer", &self.imports_stringer.join(", "));
    }
}
