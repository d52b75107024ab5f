//! Flag constructors: `flags_gen.go`.

use gotypes_core::TypeDescriptor;

use super::{GoFile, value_type};
use crate::{builder::CodeBuilder, generation::ImportCollector};

pub struct FlagsFile<'a> {
    types: &'a [TypeDescriptor],
    package: &'a str,
}

impl<'a> FlagsFile<'a> {
    /// `package` qualifies the usage examples in doc comments.
    pub fn new(types: &'a [TypeDescriptor], package: &'a str) -> Self {
        Self { types, package }
    }

    fn options_doc(&self, func: &str, args: &str) -> String {
        let pkg = self.package;
        format!(
            "If a name contains only one rune, it will be a short name, otherwise a long name.\n\
             To set a short name, you pass a {pkg}.WithShort.\n\
             \n\
             \x20 _ = {pkg}.{func}({args}\"name\", {pkg}.WithShort(\"n\"))\n\
             \n\
             To set a long name, you pass a {pkg}.WithLong.\n\
             \n\
             \x20 _ = {pkg}.{func}({args}\"n\", {pkg}.WithLong(\"name\"))\n\
             \n\
             A usage may be set by passing a {pkg}.Usage.\n\
             \n\
             \x20 _ = {pkg}.{func}({args}\"name\", {pkg}.Usage(\"The name of user\"))\n\
             \n\
             The flag is optional by default.\n\
             This may be changed by passing the {pkg}.Required.\n\
             \n\
             \x20 _ = {pkg}.{func}({args}\"name\", {pkg}.Required)\n\
             \n\
             All options can be used together."
        )
    }

    fn section(&self, desc: &TypeDescriptor) -> String {
        let name = desc.identifier();
        let source = desc.source_type();
        let var_fn = format!("{}Var", name);

        let var_doc = format!(
            "{var_fn} defines a {source} flag with specified name.\n\
             The argument p points to a {source} variable in which to store the value of the flag.\n\
             The return value will be an error from the register.RegisterFlag if it\n\
             failed to register the flag.\n\
             \n\
             {}",
            self.options_doc(&var_fn, "register, &p, ")
        );
        let ptr_doc = format!(
            "{name} defines a {source} flag with specified name.\n\
             The return value is the address of a {source} variable that stores the value of the flag.\n\
             \n\
             {}",
            self.options_doc(name, "register, ")
        );

        CodeBuilder::go()
            .comment(source)
            .blank()
            .comments(&var_doc)
            .block_with_close(
                &format!(
                    "func {}(register Register, p *{}, name string, options ...FlagOptionApplyer) error {{",
                    var_fn, source
                ),
                "}",
                |b| {
                    b.line(&format!(
                        "return Var(register, new{}Value(p), name, options...)",
                        name
                    ))
                },
            )
            .blank()
            .comments(&ptr_doc)
            .block_with_close(
                &format!(
                    "func {}(register Register, name string, options ...FlagOptionApplyer) *{} {{",
                    name, source
                ),
                "}",
                |b| {
                    b.line(&format!("p := new({})", source))
                        .line(&format!("_ = {}(register, p, name, options...)", var_fn))
                        .line("return p")
                },
            )
            .build()
    }
}

impl GoFile for FlagsFile<'_> {
    fn path(&self) -> &'static str {
        "flags_gen.go"
    }

    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for package in self.types.iter().filter_map(TypeDescriptor::package) {
            imports.add(package);
        }
        imports
    }

    fn sections(&self) -> Vec<String> {
        self.types
            .iter()
            .inspect(|d| tracing::trace!(ty = d.source_type(), value = %value_type(d), "flag section"))
            .map(|d| self.section(d))
            .collect()
    }
}
