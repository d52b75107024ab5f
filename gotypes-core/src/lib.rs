//! Primitive type registry for the gotypes flag code generator.
//!
//! A [`TypeRegistry`] is an ordered table of [`TypeDescriptor`]s, one per
//! primitive type of the generated flag library, plus the import sets that
//! rendered templates depend on.
//!
//! # Example
//!
//! ```
//! use gotypes_core::{TypeRegistry, Variant};
//!
//! let registry = TypeRegistry::builtin();
//! let bool_ty = registry.lookup("bool").unwrap();
//! assert_eq!(bool_ty.identifier(), "Bool");
//! assert_eq!(bool_ty.zero_expr("v").as_deref(), Some("*v == false"));
//!
//! let stringer = registry.variant(Variant::Stringer);
//! assert!(stringer.lookup("time.Duration").is_none());
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builtin;
mod config;
mod descriptor;
mod error;
mod imports;
mod registry;
mod template;
mod utils;

pub use config::{DEFAULT_FILENAME, TypesToml};
pub use descriptor::TypeDescriptor;
pub use error::{Error, Key, Result, TemplateKind};
pub use imports::{IMPORTS, IMPORTS_STRINGER, ImportSet};
pub use registry::{RegistryBuilder, TypeRegistry, Variant};
pub use template::{PLACEHOLDER, Template, TemplateError};
pub use utils::{to_lower_camel_case, validate_identifier};
