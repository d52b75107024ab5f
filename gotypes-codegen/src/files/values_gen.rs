//! List value types: `values_gen.go`.
//!
//! Each list type parses a comma separated value by delegating to the scalar
//! value type's `Set`, and joins elements back with commas.

use gotypes_core::TypeDescriptor;

use super::{GoFile, interface_assertions, value_type, values_type};
use crate::{builder::CodeBuilder, generation::ImportCollector};

const INTERFACES: &[&str] = &["Value", "Getter", "Emptier", "Typer"];

pub struct ValuesFile<'a> {
    types: &'a [TypeDescriptor],
}

impl<'a> ValuesFile<'a> {
    pub fn new(types: &'a [TypeDescriptor]) -> Self {
        Self { types }
    }

    fn section(&self, desc: &TypeDescriptor) -> String {
        let source = desc.source_type();
        let scalar = value_type(desc);
        let ty = values_type(desc);
        let slice = format!("[]{}", source);

        let b = CodeBuilder::go().comment(&slice).blank();
        interface_assertions(b, &ty, INTERFACES)
            .blank()
            .line(&format!("type {} {}", ty, slice))
            .blank()
            .block_with_close(
                &format!(
                    "func new{}Values(p *{}) *{} {{",
                    desc.identifier(),
                    slice,
                    ty
                ),
                "}",
                |b| b.line(&format!("return (*{})(p)", ty)),
            )
            .blank()
            .block_with_close(
                &format!("func (vs *{}) Set(val string) error {{", ty),
                "}",
                |b| {
                    b.line("rest := val")
                        .block_with_close("for rest != \"\" {", "}", |b| {
                            b.line("idx := strings.IndexByte(rest, ',')")
                                .line("if idx != -1 {")
                                .indent()
                                .line("val = rest[:idx]")
                                .line("rest = rest[idx+1:]")
                                .dedent()
                                .line("} else {")
                                .indent()
                                .line("val = rest")
                                .line("rest = \"\"")
                                .dedent()
                                .line("}")
                                .blank()
                                .line(&format!("var def {}", source))
                                .line("*vs = append(*vs, def)")
                                .block_with_close(
                                    &format!(
                                        "if err := (*{})(&(*vs)[len(*vs)-1]).Set(val); err != nil {{",
                                        scalar
                                    ),
                                    "}",
                                    |b| b.line("return err"),
                                )
                        })
                        .blank()
                        .line("return nil")
                },
            )
            .blank()
            .block_with_close(
                &format!("func (vs *{}) String() string {{", ty),
                "}",
                |b| {
                    b.block_with_close("if len(*vs) == 0 {", "}", |b| b.line("return \"\""))
                        .blank()
                        .line("var buf strings.Builder")
                        .line(&format!(
                            "_, _ = buf.WriteString((*{})(&(*vs)[0]).String())",
                            scalar
                        ))
                        .blank()
                        .block_with_close("for i := 1; i < len(*vs); i++ {", "}", |b| {
                            b.line("_ = buf.WriteByte(',')").line(&format!(
                                "_, _ = buf.WriteString((*{})(&(*vs)[i]).String())",
                                scalar
                            ))
                        })
                        .blank()
                        .line("return buf.String()")
                },
            )
            .blank()
            .line(&format!(
                "func (v *{}) Empty() bool {{ return len(*v) == 0 }}",
                ty
            ))
            .blank()
            .line(&format!(
                "func (v *{}) Get() interface{{}} {{ return {}(*v) }}",
                ty, slice
            ))
            .blank()
            .line(&format!(
                "func (*{}) Type() string {{ return \"{}\" }}",
                ty, slice
            ))
            .build()
    }
}

impl GoFile for ValuesFile<'_> {
    fn path(&self) -> &'static str {
        "values_gen.go"
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        imports.add("strings");
        for package in self.types.iter().filter_map(TypeDescriptor::package) {
            imports.add(package);
        }
        imports
    }

    fn sections(&self) -> Vec<String> {
        self.types.iter().map(|d| self.section(d)).collect()
    }
}
