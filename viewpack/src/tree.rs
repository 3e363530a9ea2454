//! Virtual directory tree
//! ---------------------
//!
//! The tree mirrors the hierarchy the bundle was generated from. Leaves point
//! at asset generators (by their slot in the registry), directories map a
//! child segment to the next node. It is only used for enumeration: bytes are
//! always fetched through the registry.
//!
//! ```text
//! ""                        Directory
//! +-- layout.tpl            File(0)
//! +-- login.tpl             File(1)
//! L-- mail                  Directory
//!     L-- recover.email     File(2)
//! ```
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::path::canonical_name;

/// A node in the virtual tree, either a file or a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    /// Leaf holding the index of the asset's generator.
    File(usize),
    Directory(BTreeMap<String, DirectoryEntry>),
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        matches!(self, DirectoryEntry::Directory(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualTree {
    root: DirectoryEntry,
}

impl Default for VirtualTree {
    fn default() -> Self {
        VirtualTree {
            root: DirectoryEntry::Directory(BTreeMap::new()),
        }
    }
}

impl VirtualTree {
    pub fn new() -> VirtualTree {
        VirtualTree::default()
    }

    /// Adds a leaf for the canonical `name`, creating intermediate
    /// directories. Rejects names with empty, `.` or `..` segments and any
    /// insert that would turn a file into a directory or the other way round.
    pub fn insert(&mut self, name: &str, index: usize) -> Result<()> {
        let segments: Vec<&str> = name.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::InvalidBundle(format!(
                "asset name '{name}' has an empty path segment"
            )));
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(Error::InvalidBundle(format!(
                "asset name '{name}' has a relative path segment"
            )));
        }

        let (leaf, parents) = segments
            .split_last()
            .ok_or_else(|| Error::InvalidBundle("empty asset name".to_string()))?;

        let mut node = &mut self.root;
        for segment in parents {
            node = match node {
                DirectoryEntry::Directory(children) => children
                    .entry((*segment).to_string())
                    .or_insert_with(|| DirectoryEntry::Directory(BTreeMap::new())),
                DirectoryEntry::File(_) => return Err(passes_through_asset(name)),
            };
        }

        match node {
            DirectoryEntry::Directory(children) => {
                if let Some(existing) = children.get(*leaf) {
                    return Err(Error::InvalidBundle(if existing.is_dir() {
                        format!("'{name}' is both an asset and a directory")
                    } else {
                        format!("asset '{name}' is registered twice")
                    }));
                }
                children.insert((*leaf).to_string(), DirectoryEntry::File(index));
                Ok(())
            }
            DirectoryEntry::File(_) => Err(passes_through_asset(name)),
        }
    }

    /// Resolves `name` to its node. The empty path is the root.
    pub fn lookup(&self, name: &str) -> Option<&DirectoryEntry> {
        if name.is_empty() {
            return Some(&self.root);
        }
        let mut node = &self.root;
        for segment in canonical_name(name).split('/') {
            node = match node {
                DirectoryEntry::Directory(children) => children.get(segment)?,
                DirectoryEntry::File(_) => return None,
            };
        }
        Some(node)
    }

    /// Names directly below the directory `name`, sorted.
    pub fn list_children(&self, name: &str) -> Result<Vec<String>> {
        match self.lookup(name) {
            Some(DirectoryEntry::Directory(children)) => {
                Ok(children.keys().cloned().collect())
            }
            Some(DirectoryEntry::File(_)) => Err(Error::NotADirectory(name.to_string())),
            None => Err(Error::NotFound(name.to_string())),
        }
    }
}

fn passes_through_asset(name: &str) -> Error {
    Error::InvalidBundle(format!("'{name}' has an asset where a directory is expected"))
}
