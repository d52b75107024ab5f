//! Renderers for the generated Go files.
//!
//! Each file renders one section per registered type, in registry order.

mod flags_gen;
mod value_gen;
mod values_gen;

pub use flags_gen::FlagsFile;
pub use value_gen::ValueFile;
pub use values_gen::ValuesFile;

use gotypes_core::TypeDescriptor;

use crate::{builder::CodeBuilder, generation::ImportCollector};

/// Header shared by all generated files.
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// Tool named in the "Code generated" marker.
    pub tool: String,
    /// Go package clause.
    pub package: String,
}

impl FileHeader {
    pub fn new(tool: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            package: package.into(),
        }
    }
}

/// A generated Go source file.
pub trait GoFile {
    /// File name relative to the output directory.
    fn path(&self) -> &'static str;

    /// Packages the rendered body refers to.
    fn imports(&self) -> ImportCollector;

    /// One rendered section per type.
    fn sections(&self) -> Vec<String>;

    /// Render the complete file.
    fn render(&self, header: &FileHeader) -> String {
        let mut out = CodeBuilder::go()
            .comment(&format!(
                "Code generated by {}; DO NOT EDIT.",
                header.tool
            ))
            .blank()
            .line(&format!("package {}", header.package))
            .blank()
            .build();

        let imports = self.imports().render();
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push('\n');
        }

        out.push_str(&self.sections().join("\n"));
        out
    }
}

/// Name of the scalar value type (`boolValue`, `timeDurationValue`).
pub(crate) fn value_type(desc: &TypeDescriptor) -> String {
    format!("{}Value", desc.value_stem())
}

/// Name of the list value type (`boolValues`, `timeDurationValues`).
pub(crate) fn values_type(desc: &TypeDescriptor) -> String {
    format!("{}Values", desc.value_stem())
}

/// Render a gofmt-aligned block of interface assertions.
///
/// ```text
/// var (
///     _ Value   = (*boolValues)(nil)
///     _ Emptier = (*boolValues)(nil)
/// )
/// ```
pub(crate) fn interface_assertions(b: CodeBuilder, ty: &str, interfaces: &[&str]) -> CodeBuilder {
    let width = interfaces.iter().map(|i| i.len()).max().unwrap_or(0);
    b.block_with_close("var (", ")", |b| {
        b.each(interfaces, |b, iface| {
            b.line(&format!("_ {:<width$} = (*{})(nil)", iface, ty, width = width))
        })
    })
}

#[cfg(test)]
mod tests {
    use gotypes_core::{Template, TypeDescriptor};

    use super::*;

    struct Empty;

    impl GoFile for Empty {
        fn path(&self) -> &'static str {
            "empty_gen.go"
        }

        fn imports(&self) -> ImportCollector {
            ImportCollector::new()
        }

        fn sections(&self) -> Vec<String> {
            vec!["// a\n".to_string(), "// b\n".to_string()]
        }
    }

    #[test]
    fn test_render_header_without_imports() {
        let out = Empty.render(&FileHeader::new("gotypes", "cli"));
        assert_eq!(
            out,
            "// Code generated by gotypes; DO NOT EDIT.\n\npackage cli\n\n// a\n\n// b\n"
        );
    }

    #[test]
    fn test_interface_assertions_are_aligned() {
        let code = interface_assertions(CodeBuilder::go(), "boolValues", &["Value", "Emptier"])
            .build();
        assert_eq!(
            code,
            "var (\n\t_ Value   = (*boolValues)(nil)\n\t_ Emptier = (*boolValues)(nil)\n)\n"
        );
    }

    #[test]
    fn test_type_names() {
        let desc = TypeDescriptor::new(
            "time.Duration",
            "Duration",
            Template::parse("time.Duration(*%s).String()").unwrap(),
        );
        assert_eq!(value_type(&desc), "timeDurationValue");
        assert_eq!(values_type(&desc), "timeDurationValues");
    }
}
