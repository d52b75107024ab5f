//! Ordered sets of package identifiers required by rendered templates.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Name of the import set backing the extended variant.
pub const IMPORTS: &str = "imports";
/// Name of the import set backing the stringer variant.
pub const IMPORTS_STRINGER: &str = "imports_stringer";

/// An ordered set of distinct package identifiers.
///
/// Maintains insertion order for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportSet {
    packages: IndexSet<String>,
}

impl ImportSet {
    /// Create an empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list, reporting every repeated package.
    ///
    /// `name` identifies the set in error messages.
    pub fn from_list<I, S>(name: &'static str, items: I) -> (Self, Vec<Error>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        let mut errors = Vec::new();
        for item in items {
            let package = item.into();
            if set.contains(&package) {
                errors.push(Error::DuplicateImport {
                    package,
                    import_set: name,
                });
            } else {
                set.insert(package);
            }
        }
        (set, errors)
    }

    /// Add a package. Returns false if it was already present.
    pub fn insert(&mut self, package: impl Into<String>) -> bool {
        self.packages.insert(package.into())
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// Iterate over packages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages as an owned vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.packages.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}
