//! Go code generation for the gotypes flag library.
//!
//! The generator consumes a [`gotypes_core::TypeRegistry`] strictly through its
//! public interface: the ordered descriptor list, rendered templates and the
//! import set of the requested variant.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder)
//! - [`generation`] - Output management (ImportCollector, FileRegistry)
//! - [`files`] - Renderers for `value_gen.go`, `values_gen.go` and `flags_gen.go`

pub mod builder;
pub mod files;
pub mod generation;
mod generator;

pub use generator::{GenerateOptions, Generator};
