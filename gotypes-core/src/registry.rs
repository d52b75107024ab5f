//! The type registry: an ordered table of descriptors plus two import sets.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, ImportSet, Result, Template, TypeDescriptor,
    error::{Key, TemplateKind},
    imports::{IMPORTS, IMPORTS_STRINGER},
    utils::validate_identifier,
};

/// Which feature set of the registry a generator consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Format expressions and zero predicates, backed by `imports`.
    #[default]
    Extended,
    /// Format expressions only, backed by `imports_stringer`.
    Stringer,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Extended => "extended",
            Variant::Stringer => "stringer",
        }
    }

    /// Whether this variant carries zero predicates.
    pub fn needs_zero_check(&self) -> bool {
        matches!(self, Variant::Extended)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extended" | "full" => Ok(Variant::Extended),
            "stringer" | "minimal" => Ok(Variant::Stringer),
            _ => Err(format!(
                "unknown variant '{}', expected 'extended' or 'stringer'",
                s
            )),
        }
    }
}

/// An ordered, immutable table of [`TypeDescriptor`]s.
///
/// One canonical table backs both variants: zero predicates are optional per
/// descriptor, and [`TypeRegistry::variant`] derives the stringer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
    imports: ImportSet,
    imports_stringer: ImportSet,
}

impl TypeRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All descriptors in insertion order.
    pub fn list_types(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Find a descriptor by source type (`"int64"`).
    pub fn lookup(&self, source_type: &str) -> Option<&TypeDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.source_type() == source_type)
    }

    /// Find a descriptor by identifier name (`"Int64"`).
    pub fn lookup_identifier(&self, identifier: &str) -> Option<&TypeDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.identifier() == identifier)
    }

    /// Imports required by the extended variant.
    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Imports required by the stringer variant.
    pub fn imports_stringer(&self) -> &ImportSet {
        &self.imports_stringer
    }

    /// True if every descriptor carries a zero predicate.
    pub fn supports_zero_check(&self) -> bool {
        self.descriptors.iter().all(TypeDescriptor::has_zero)
    }

    /// Imports the generated code needs.
    ///
    /// Requesting zero checks from a registry without zero predicates is a
    /// configuration error.
    pub fn required_imports(&self, needs_zero_check: bool) -> Result<&ImportSet> {
        if !needs_zero_check {
            return Ok(&self.imports_stringer);
        }

        match self.descriptors.iter().find(|d| !d.has_zero()) {
            Some(desc) => Err(Box::new(Error::ZeroCheckUnsupported {
                source_type: desc.source_type().to_string(),
            })),
            None => Ok(&self.imports),
        }
    }

    /// Whether a descriptor, without its zero predicate, only needs `imports_stringer`.
    pub fn is_stringer_compatible(&self, desc: &TypeDescriptor) -> bool {
        required_packages(desc)
            .filter(|(kind, _)| *kind != TemplateKind::Zero)
            .all(|(_, p)| self.imports_stringer.contains(p))
    }

    /// Derive the registry for a variant.
    ///
    /// The stringer view drops zero predicates and every descriptor whose format
    /// template references a package outside `imports_stringer`.
    pub fn variant(&self, variant: Variant) -> TypeRegistry {
        match variant {
            Variant::Extended => self.clone(),
            Variant::Stringer => TypeRegistry {
                descriptors: self
                    .descriptors
                    .iter()
                    .filter(|d| self.is_stringer_compatible(d))
                    .map(|d| d.clone().without_zero())
                    .collect(),
                imports: self.imports.clone(),
                imports_stringer: self.imports_stringer.clone(),
            },
        }
    }

    /// Check the structural invariants of the table.
    ///
    /// Every problem is reported, not only the first.
    pub fn validate(&self) -> Result<()> {
        Error::collect(self.problems())
    }

    fn problems(&self) -> Vec<Error> {
        self.problems_at(|index| index + 1)
    }

    /// `entry` maps a descriptor index to its 1-based entry number in the source table.
    fn problems_at(&self, entry: impl Fn(usize) -> usize) -> Vec<Error> {
        let mut errors = Vec::new();
        let mut source_types: HashMap<&str, usize> = HashMap::new();
        let mut identifiers: HashMap<&str, usize> = HashMap::new();
        let mut value_types: HashMap<String, usize> = HashMap::new();

        for (index, desc) in self.descriptors.iter().enumerate() {
            let position = entry(index);

            if let Some(&first) = source_types.get(desc.source_type()) {
                errors.push(Error::DuplicateKey {
                    key: Key::SourceType,
                    value: desc.source_type().to_string(),
                    first,
                    second: position,
                });
            } else {
                source_types.insert(desc.source_type(), position);

                // distinct source types may still collapse to one Go type name
                let value_type = format!("{}Value", desc.value_stem());
                match value_types.get(&value_type) {
                    Some(&first) => errors.push(Error::DuplicateKey {
                        key: Key::ValueType,
                        value: value_type,
                        first,
                        second: position,
                    }),
                    None => {
                        value_types.insert(value_type, position);
                    }
                }
            }

            if let Some(&first) = identifiers.get(desc.identifier()) {
                errors.push(Error::DuplicateKey {
                    key: Key::IdentifierName,
                    value: desc.identifier().to_string(),
                    first,
                    second: position,
                });
            } else {
                identifiers.insert(desc.identifier(), position);
            }

            if let Some(reason) = validate_identifier(desc.identifier()) {
                errors.push(Error::InvalidIdentifier {
                    source_type: desc.source_type().to_string(),
                    name: desc.identifier().to_string(),
                    reason: reason.to_string(),
                });
            }

            let mut reported: Vec<&str> = Vec::new();
            for (kind, package) in required_packages(desc) {
                if !self.imports.contains(package) && !reported.contains(&package) {
                    reported.push(package);
                    errors.push(Error::MissingImport {
                        source_type: desc.source_type().to_string(),
                        kind,
                        package: package.to_string(),
                        import_set: IMPORTS,
                    });
                }
            }
        }

        for package in self.imports_stringer.iter() {
            if !self.imports.contains(package) {
                errors.push(Error::UnlistedImport {
                    package: package.to_string(),
                });
            }
        }

        errors
    }
}

/// Packages a descriptor references, tagged with where they come from.
fn required_packages(desc: &TypeDescriptor) -> impl Iterator<Item = (TemplateKind, &str)> {
    let source = desc.package().map(|p| (TemplateKind::SourceType, p));
    let format = desc
        .format()
        .packages()
        .into_iter()
        .map(|p| (TemplateKind::Format, p));
    let zero = desc
        .zero()
        .into_iter()
        .flat_map(|z| z.packages())
        .map(|p| (TemplateKind::Zero, p));
    source.into_iter().chain(format).chain(zero)
}

/// Builder for [`TypeRegistry`].
///
/// Templates are parsed as they are added; all problems are reported by
/// [`RegistryBuilder::build`].
///
/// # Example
///
/// ```
/// use gotypes_core::TypeRegistry;
///
/// let registry = TypeRegistry::builder()
///     .add("bool", "Bool", "strconv.FormatBool(bool(*%s))", Some("*%s == false"))
///     .add("string", "String", "string(*%s)", Some("*%s == \"\""))
///     .imports(["strconv"])
///     .imports_stringer(["strconv"])
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: Vec<TypeDescriptor>,
    /// Entry number of each descriptor, counting rejected entries too.
    positions: Vec<usize>,
    entries: usize,
    imports: Vec<String>,
    imports_stringer: Vec<String>,
    errors: Vec<Error>,
}

impl RegistryBuilder {
    /// Add a descriptor from raw template strings.
    pub fn add(
        mut self,
        source_type: &str,
        identifier: &str,
        format: &str,
        zero: Option<&str>,
    ) -> Self {
        self.entries += 1;
        let format = self.parse_template(source_type, TemplateKind::Format, format);
        let zero = zero.and_then(|z| self.parse_template(source_type, TemplateKind::Zero, z));

        if let Some(format) = format {
            let mut desc = TypeDescriptor::new(source_type, identifier, format);
            if let Some(zero) = zero {
                desc = desc.with_zero(zero);
            }
            self.descriptors.push(desc);
            self.positions.push(self.entries);
        }
        self
    }

    /// Set the imports of the extended variant.
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Set the imports of the stringer variant.
    pub fn imports_stringer<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports_stringer = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and produce the registry.
    pub fn build(self) -> Result<TypeRegistry> {
        let mut errors = self.errors;

        let (imports, dupes) = ImportSet::from_list(IMPORTS, self.imports);
        errors.extend(dupes);
        let (imports_stringer, dupes) = ImportSet::from_list(IMPORTS_STRINGER, self.imports_stringer);
        errors.extend(dupes);

        let registry = TypeRegistry {
            descriptors: self.descriptors,
            imports,
            imports_stringer,
        };
        let positions = self.positions;
        errors.extend(registry.problems_at(|index| {
            positions.get(index).copied().unwrap_or(index + 1)
        }));

        tracing::trace!(
            types = registry.len(),
            problems = errors.len(),
            "built type registry"
        );

        Error::collect(errors)?;
        Ok(registry)
    }

    fn parse_template(
        &mut self,
        source_type: &str,
        kind: TemplateKind,
        template: &str,
    ) -> Option<Template> {
        match Template::parse(template) {
            Ok(tpl) => Some(tpl),
            Err(e) => {
                self.errors.push(Error::MalformedTemplate {
                    source_type: source_type.to_string(),
                    kind,
                    template: template.to_string(),
                    found: e.found,
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> RegistryBuilder {
        TypeRegistry::builder()
            .add("bool", "Bool", "strconv.FormatBool(bool(*%s))", Some("*%s == false"))
            .add("int", "Int", "strconv.Itoa(int(*%s))", Some("*%s == 0"))
            .imports(["strconv"])
            .imports_stringer(["strconv"])
    }

    #[test]
    fn test_build_and_lookup() {
        let registry = small().build().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("int").unwrap().identifier(), "Int");
        assert_eq!(registry.lookup_identifier("Bool").unwrap().source_type(), "bool");
        assert!(registry.lookup("uint").is_none());
    }

    #[test]
    fn test_duplicate_source_type() {
        let err = small()
            .add("int", "Integer", "strconv.Itoa(int(*%s))", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            *err,
            Error::DuplicateKey { key: Key::SourceType, first: 2, second: 3, .. }
        ));
    }

    #[test]
    fn test_duplicate_positions_count_rejected_entries() {
        let err = TypeRegistry::builder()
            .add("string", "String", "string(*v)", None)
            .add("bool", "Bool", "strconv.FormatBool(bool(*%s))", None)
            .add("bool", "Boolean", "strconv.FormatBool(bool(*%s))", None)
            .imports(["strconv"])
            .build()
            .unwrap_err();

        let duplicate = err
            .problems()
            .into_iter()
            .find(|e| matches!(e, Error::DuplicateKey { .. }))
            .unwrap();
        assert!(matches!(
            duplicate,
            Error::DuplicateKey { key: Key::SourceType, first: 2, second: 3, .. }
        ));
    }

    #[test]
    fn test_duplicate_value_type_name() {
        let err = TypeRegistry::builder()
            .add("my_type", "MyType", "string(*%s)", None)
            .add("myType", "MyTypeAlt", "string(*%s)", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            &*err,
            Error::DuplicateKey { key: Key::ValueType, value, first: 1, second: 2 }
                if value == "myTypeValue"
        ));
    }

    #[test]
    fn test_duplicate_source_type_reported_once() {
        let err = small()
            .add("int", "Integer", "strconv.Itoa(int(*%s))", None)
            .build()
            .unwrap_err();

        assert_eq!(err.problems().len(), 1);
    }

    #[test]
    fn test_duplicate_identifier() {
        let err = small()
            .add("int64", "Int", "strconv.FormatInt(int64(*%s), 10)", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            &*err,
            Error::DuplicateKey { key: Key::IdentifierName, value, .. } if value == "Int"
        ));
    }

    #[test]
    fn test_malformed_template() {
        let err = small()
            .add("string", "String", "string(*v)", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            &*err,
            Error::MalformedTemplate { kind: TemplateKind::Format, found: 0, .. }
        ));
    }

    #[test]
    fn test_missing_import() {
        let err = small()
            .add("time.Duration", "Duration", "time.Duration(*%s).String()", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            &*err,
            Error::MissingImport { package, import_set: "imports", .. } if package == "time"
        ));
    }

    #[test]
    fn test_stringer_imports_must_be_in_imports() {
        let err = small()
            .imports_stringer(["strconv", "fmt"])
            .build()
            .unwrap_err();

        assert!(matches!(&*err, Error::UnlistedImport { package } if package == "fmt"));
    }

    #[test]
    fn test_qualified_source_type_needs_import() {
        let err = small()
            .add("net.IP", "IP", "%s.String()", None)
            .build()
            .unwrap_err();

        assert!(matches!(
            &*err,
            Error::MissingImport { kind: TemplateKind::SourceType, package, .. } if package == "net"
        ));
    }

    #[test]
    fn test_invalid_identifier() {
        let err = small()
            .add("uint", "uint", "strconv.FormatUint(uint64(*%s), 10)", None)
            .build()
            .unwrap_err();

        assert!(matches!(&*err, Error::InvalidIdentifier { name, .. } if name == "uint"));
    }

    #[test]
    fn test_all_problems_reported() {
        let err = small()
            .add("int", "Int", "*%s%s", None)
            .imports(["strconv", "strconv"])
            .build()
            .unwrap_err();

        // malformed template and duplicate import; the malformed entry is not added
        assert_eq!(err.problems().len(), 2);
    }

    #[test]
    fn test_required_imports() {
        let registry = TypeRegistry::builder()
            .add("bool", "Bool", "strconv.FormatBool(bool(*%s))", Some("*%s == false"))
            .add("time.Duration", "Duration", "time.Duration(*%s).String()", Some("*%s == 0"))
            .imports(["strconv", "time"])
            .imports_stringer(["strconv"])
            .build()
            .unwrap();

        let full = registry.required_imports(true).unwrap();
        assert_eq!(full.iter().collect::<Vec<_>>(), vec!["strconv", "time"]);

        let minimal = registry.required_imports(false).unwrap();
        assert_eq!(minimal.iter().collect::<Vec<_>>(), vec!["strconv"]);
    }

    #[test]
    fn test_zero_check_unsupported() {
        let registry = small()
            .add("string", "String", "string(*%s)", None)
            .build()
            .unwrap();

        assert!(!registry.supports_zero_check());
        let err = registry.required_imports(true).unwrap_err();
        assert!(matches!(
            &*err,
            Error::ZeroCheckUnsupported { source_type } if source_type == "string"
        ));
        assert!(registry.required_imports(false).is_ok());
    }

    #[test]
    fn test_stringer_variant() {
        let registry = TypeRegistry::builder()
            .add("bool", "Bool", "strconv.FormatBool(bool(*%s))", Some("*%s == false"))
            .add("time.Duration", "Duration", "time.Duration(*%s).String()", Some("*%s == 0"))
            .imports(["strconv", "time"])
            .imports_stringer(["strconv"])
            .build()
            .unwrap();

        let stringer = registry.variant(Variant::Stringer);
        assert_eq!(stringer.len(), 1);
        assert!(stringer.lookup("time.Duration").is_none());
        assert!(stringer.list_types().iter().all(|d| !d.has_zero()));
        assert!(stringer.validate().is_ok());

        assert_eq!(registry.variant(Variant::Extended), registry);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("extended".parse::<Variant>().unwrap(), Variant::Extended);
        assert_eq!("Stringer".parse::<Variant>().unwrap(), Variant::Stringer);
        assert_eq!("minimal".parse::<Variant>().unwrap(), Variant::Stringer);
        assert!("other".parse::<Variant>().is_err());
        assert_eq!(Variant::Stringer.to_string(), "stringer");
    }
}
