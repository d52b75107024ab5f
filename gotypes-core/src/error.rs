use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Which lookup key of a descriptor collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    SourceType,
    IdentifierName,
    /// Name of the generated value type (`timeDurationValue`).
    ValueType,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::SourceType => write!(f, "source type"),
            Key::IdentifierName => write!(f, "identifier name"),
            Key::ValueType => write!(f, "value type name"),
        }
    }
}

/// Which part of a descriptor an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Format,
    Zero,
    /// The qualified source type itself (`time.Duration`).
    SourceType,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Format => write!(f, "format template"),
            TemplateKind::Zero => write!(f, "zero predicate"),
            TemplateKind::SourceType => write!(f, "type name"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help(
        "run 'gotypes export --output gotypes.toml' to start from the built-in table"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse type table")]
    #[diagnostic(code(gotypes::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize type table")]
    #[diagnostic(code(gotypes::serialize_error))]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("duplicate {key} '{value}'")]
    #[diagnostic(
        code(gotypes::duplicate_key),
        help("entries #{first} and #{second} share the same {key}; each must be unique")
    )]
    DuplicateKey {
        key: Key,
        value: String,
        first: usize,
        second: usize,
    },

    #[error("{kind} of '{source_type}' must contain exactly one '%s', found {found}")]
    #[diagnostic(code(gotypes::malformed_template), help("template: {template}"))]
    MalformedTemplate {
        source_type: String,
        kind: TemplateKind,
        template: String,
        found: usize,
    },

    #[error("{kind} of '{source_type}' references '{package}' which is not in {import_set}")]
    #[diagnostic(
        code(gotypes::missing_import),
        help("add \"{package}\" to {import_set}")
    )]
    MissingImport {
        source_type: String,
        kind: TemplateKind,
        package: String,
        import_set: &'static str,
    },

    #[error("'{package}' is listed more than once in {import_set}")]
    #[diagnostic(code(gotypes::duplicate_import))]
    DuplicateImport {
        package: String,
        import_set: &'static str,
    },

    #[error("'{package}' is in imports_stringer but not in imports")]
    #[diagnostic(
        code(gotypes::unlisted_import),
        help("the stringer variant is a subset of the extended one; add \"{package}\" to imports")
    )]
    UnlistedImport { package: String },

    #[error("invalid identifier name '{name}' for '{source_type}'")]
    #[diagnostic(
        code(gotypes::invalid_identifier),
        help("{reason}. Use ASCII letters and digits, starting with an uppercase letter.")
    )]
    InvalidIdentifier {
        source_type: String,
        name: String,
        reason: String,
    },

    #[error("zero checks requested but '{source_type}' has no zero predicate")]
    #[diagnostic(
        code(gotypes::zero_check_unsupported),
        help("generate with the stringer variant, or add a zero predicate to every type")
    )]
    ZeroCheckUnsupported { source_type: String },

    #[error("type table has {} problem(s)", .errors.len())]
    #[diagnostic(code(gotypes::invalid))]
    Invalid {
        #[related]
        errors: Vec<Error>,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Collapse a list of validation errors into a single result.
    ///
    /// A single error is returned as-is, several are wrapped in [`Error::Invalid`].
    pub fn collect(mut errors: Vec<Error>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(Box::new(errors.remove(0))),
            _ => Err(Box::new(Error::Invalid { errors })),
        }
    }

    /// Iterate over the individual problems this error stands for.
    pub fn problems(&self) -> Vec<&Error> {
        match self {
            Error::Invalid { errors } => errors.iter().collect(),
            other => vec![other],
        }
    }
}
