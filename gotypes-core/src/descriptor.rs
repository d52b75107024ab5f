//! Per-type code generation metadata.

use crate::{Template, utils::to_lower_camel_case};

/// Code generation metadata for one primitive type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    source_type: String,
    identifier: String,
    format: Template,
    zero: Option<Template>,
}

impl TypeDescriptor {
    /// Create a descriptor without a zero predicate.
    pub fn new(
        source_type: impl Into<String>,
        identifier: impl Into<String>,
        format: Template,
    ) -> Self {
        Self {
            source_type: source_type.into(),
            identifier: identifier.into(),
            format,
            zero: None,
        }
    }

    /// Attach a zero predicate.
    pub fn with_zero(mut self, zero: Template) -> Self {
        self.zero = Some(zero);
        self
    }

    /// Drop the zero predicate.
    pub fn without_zero(mut self) -> Self {
        self.zero = None;
        self
    }

    /// The primitive type name, e.g. `int64` or `time.Duration`.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// The capitalized identifier suffix, e.g. `Int64` or `Duration`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Template turning a pointer variable into a string expression.
    pub fn format(&self) -> &Template {
        &self.format
    }

    /// Template testing whether the pointee is the zero value, if any.
    pub fn zero(&self) -> Option<&Template> {
        self.zero.as_ref()
    }

    pub fn has_zero(&self) -> bool {
        self.zero.is_some()
    }

    /// Render the format template for `var`.
    pub fn format_expr(&self, var: &str) -> String {
        self.format.render(var)
    }

    /// Render the zero predicate for `var`.
    pub fn zero_expr(&self, var: &str) -> Option<String> {
        self.zero.as_ref().map(|z| z.render(var))
    }

    /// Name stem of generated value types: `time.Duration` -> `timeDuration`.
    pub fn value_stem(&self) -> String {
        to_lower_camel_case(&self.source_type)
    }

    /// Package qualifying the source type (`time` for `time.Duration`).
    pub fn package(&self) -> Option<&str> {
        self.source_type
            .rsplit_once('.')
            .map(|(package, _)| package)
    }
}
