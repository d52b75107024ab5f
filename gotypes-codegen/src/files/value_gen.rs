//! Scalar value types: `value_gen.go`.
//!
//! `String()` comes from each type's format template and, when zero checks are
//! enabled, `Empty()` from its zero predicate. `Set` parsing is not part of the
//! type table and stays hand-written in the target package.

use gotypes_core::{ImportSet, TypeDescriptor};

use super::{GoFile, value_type};
use crate::{builder::CodeBuilder, generation::ImportCollector};

/// Receiver variable substituted into templates.
const RECEIVER: &str = "v";

pub struct ValueFile<'a> {
    types: &'a [TypeDescriptor],
    required: &'a ImportSet,
    zero_check: bool,
}

impl<'a> ValueFile<'a> {
    /// `required` is the registry's `required_imports(zero_check)`.
    pub fn new(types: &'a [TypeDescriptor], required: &'a ImportSet, zero_check: bool) -> Self {
        Self {
            types,
            required,
            zero_check,
        }
    }

    fn section(&self, desc: &TypeDescriptor) -> String {
        let ty = value_type(desc);
        let source = desc.source_type();

        CodeBuilder::go()
            .comment(source)
            .blank()
            .line(&format!("type {} {}", ty, source))
            .blank()
            .block_with_close(
                &format!(
                    "func new{}Value(p *{}) *{} {{",
                    desc.identifier(),
                    source,
                    ty
                ),
                "}",
                |b| b.line(&format!("return (*{})(p)", ty)),
            )
            .blank()
            .line(&format!(
                "func ({} *{}) Get() interface{{}} {{ return {}(*{}) }}",
                RECEIVER, ty, source, RECEIVER
            ))
            .blank()
            .line(&format!(
                "func ({} *{}) String() string {{ return {} }}",
                RECEIVER,
                ty,
                desc.format_expr(RECEIVER)
            ))
            .blank()
            .line(&format!(
                "func (*{}) Type() string {{ return \"{}\" }}",
                ty, source
            ))
            .when(self.zero_check, |b| match desc.zero_expr(RECEIVER) {
                Some(zero) => b.blank().line(&format!(
                    "func ({} *{}) Empty() bool {{ return {} }}",
                    RECEIVER, ty, zero
                )),
                None => b,
            })
            .build()
    }
}

impl GoFile for ValueFile<'_> {
    fn path(&self) -> &'static str {
        "value_gen.go"
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for desc in self.types {
            let zero = desc
                .zero()
                .filter(|_| self.zero_check)
                .map(|z| z.packages())
                .unwrap_or_default();
            let referenced = desc
                .package()
                .into_iter()
                .chain(desc.format().packages())
                .chain(zero);
            for package in referenced {
                if self.required.contains(package) {
                    imports.add(package);
                }
            }
        }
        imports
    }

    fn sections(&self) -> Vec<String> {
        self.types.iter().map(|d| self.section(d)).collect()
    }
}
