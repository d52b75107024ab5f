//! Loading and saving type tables as TOML.
//!
//! ```toml
//! imports = ["strconv", "time"]
//! imports_stringer = ["strconv"]
//!
//! [[types]]
//! source = "bool"
//! name = "Bool"
//! format = "strconv.FormatBool(bool(*%s))"
//! zero = "*%s == false"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, TypeDescriptor, TypeRegistry};

/// Default file name of a type table.
pub const DEFAULT_FILENAME: &str = "gotypes.toml";

/// On-disk shape of a type table.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    imports_stringer: Vec<String>,
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawType {
    source: String,
    name: String,
    format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zero: Option<String>,
}

impl From<&TypeDescriptor> for RawType {
    fn from(desc: &TypeDescriptor) -> Self {
        Self {
            source: desc.source_type().to_string(),
            name: desc.identifier().to_string(),
            format: desc.format().to_string(),
            zero: desc.zero().map(ToString::to_string),
        }
    }
}

impl TypeRegistry {
    /// Parse a type table from a string (uses `gotypes.toml` as filename).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_filename(content, DEFAULT_FILENAME)
    }

    /// Parse a type table with a custom filename for error reporting.
    pub fn from_toml_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawTable =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        tracing::debug!(
            filename,
            types = raw.types.len(),
            "parsed type table"
        );

        raw.types
            .iter()
            .fold(TypeRegistry::builder(), |builder, ty| {
                builder.add(&ty.source, &ty.name, &ty.format, ty.zero.as_deref())
            })
            .imports(raw.imports)
            .imports_stringer(raw.imports_stringer)
            .build()
    }

    /// Serialize the registry in the same format accepted by [`TypeRegistry::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String> {
        let raw = RawTable {
            imports: self.imports().to_vec(),
            imports_stringer: self.imports_stringer().to_vec(),
            types: self.list_types().iter().map(RawType::from).collect(),
        };
        toml::to_string_pretty(&raw).map_err(|source| Box::new(Error::Serialize { source }))
    }
}

/// A type table file with both raw content and parsed registry.
#[derive(Debug)]
pub struct TypesToml {
    path: PathBuf,
    content: String,
    registry: TypeRegistry,
}

impl TypesToml {
    /// Open and parse a type table file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let registry = TypeRegistry::from_toml_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            registry,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> TypeRegistry {
        self.registry
    }
}
