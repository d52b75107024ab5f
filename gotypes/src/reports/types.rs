//! List command report data structures.

use gotypes_core::{TypeDescriptor, TypeRegistry, Variant};
use serde::Serialize;

use super::output::{Output, Report};

/// One registered type, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRow {
    pub source_type: String,
    pub identifier: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
}

impl From<&TypeDescriptor> for TypeRow {
    fn from(desc: &TypeDescriptor) -> Self {
        Self {
            source_type: desc.source_type().to_string(),
            identifier: desc.identifier().to_string(),
            format: desc.format().to_string(),
            zero: desc.zero().map(ToString::to_string),
        }
    }
}

/// Report data for `list`.
#[derive(Debug)]
pub struct TypesReport {
    /// Where the table came from.
    pub source: String,
    pub variant: Variant,
    pub rows: Vec<TypeRow>,
    /// Imports of the listed variant.
    pub imports: Vec<String>,
}

impl TypesReport {
    pub fn new(source: String, registry: &TypeRegistry, variant: Variant) -> Self {
        let view = registry.variant(variant);
        let imports = match variant {
            Variant::Extended => view.imports().to_vec(),
            Variant::Stringer => view.imports_stringer().to_vec(),
        };

        Self {
            source,
            variant,
            rows: view.list_types().iter().map(TypeRow::from).collect(),
            imports,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.rows.is_empty() {
            out.preformatted(&format!("No types defined in {}", self.source));
            return;
        }

        let width = self
            .rows
            .iter()
            .map(|r| r.source_type.len())
            .max()
            .unwrap_or(0);

        out.section(&format!("Types ({}, {})", self.rows.len(), self.variant));
        for row in &self.rows {
            let mut line = format!(
                "  {:<width$}  {:<10}  {}",
                row.source_type,
                row.identifier,
                row.format,
                width = width
            );
            if let Some(zero) = &row.zero {
                line.push_str(&format!("  [empty: {}]", zero));
            }
            out.preformatted(&line);
        }

        if !self.imports.is_empty() {
            out.newline();
            out.section("Imports");
            for import in &self.imports {
                out.list_item(import);
            }
        }
    }
}
