//! Output management: import collection and file registration.

mod imports;
mod registry;

pub use imports::ImportCollector;
pub use registry::{FileEntry, FileRegistry, PreviewEntry, WriteStats};
