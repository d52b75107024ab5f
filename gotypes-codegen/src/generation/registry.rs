//! File registration for declarative code generation.
//!
//! Renderers register their output here; the registry then previews or writes
//! everything in a stable order.
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("flags_gen.go", flags.render()));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file to be generated. Generated files are always overwritten.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the output directory.
    pub path: String,
    /// Rendered source.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Resolve the entry against an output directory.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write the entry, creating parent directories as needed.
    pub fn write(&self, base: &Path) -> Result<()> {
        let path = self.full_path(base);
        write_file(&path, &self.content)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))
    }
}

/// Rendered files of one generation run.
///
/// Entries are kept sorted by path so output order never depends on
/// registration order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry, replacing any previous entry with the same path.
    pub fn register(&mut self, entry: FileEntry) {
        match self.entries.binary_search_by(|e| e.path.cmp(&entry.path)) {
            Ok(index) => self.entries[index] = entry,
            Err(index) => self.entries.insert(index, entry),
        }
    }

    /// Register every entry of an iterator.
    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.register(entry);
        }
    }

    /// Get all registered entries, sorted by path.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Look up an entry by relative path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path and content of every file, without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write every file below `base`.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            entry.write(base)?;
            tracing::debug!(path = %entry.path, bytes = entry.content.len(), "wrote file");
            stats.written += 1;
            stats.written_paths.push(entry.path.clone());
        }

        Ok(stats)
    }
}

/// A file that would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Path relative to the output directory.
    pub path: String,
    /// Rendered source.
    pub content: String,
}

/// Outcome of [`FileRegistry::write_all`].
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Files written.
    pub written: usize,
    /// Relative paths written, in path order.
    pub written_paths: Vec<String>,
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("values_gen.go", ""));
        registry.register(FileEntry::new("flags_gen.go", ""));
        registry.register(FileEntry::new("value_gen.go", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["flags_gen.go", "value_gen.go", "values_gen.go"]);
    }

    #[test]
    fn test_register_replaces_same_path() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.go", "old"));
        registry.register(FileEntry::new("a.go", "new"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a.go").unwrap().content, "new");
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register_all([
            FileEntry::new("a.go", "package a\n"),
            FileEntry::new("nested/b.go", "package b\n"),
        ]);

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(stats.written_paths, vec!["a.go", "nested/b.go"]);
        assert_eq!(
            fs::read_to_string(temp.path().join("nested/b.go")).unwrap(),
            "package b\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.go");
        fs::write(&path, "stale").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.go", "fresh"));
        registry.write_all(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_preview() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("b.go", "content b"));
        registry.register(FileEntry::new("a.go", "content a"));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, "a.go");
        assert_eq!(preview[1].content, "content b");
    }
}
