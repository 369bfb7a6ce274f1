//! Virtual tree nodes as served by the portfolio backend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

/// One entry (file or directory) in the virtual tree.
///
/// Deserializes from the backend's JSON shape
/// (`{"name", "type": "dir"|"file", "size", "children"}`); extra fields such
/// as `path` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Byte count for files (0 for directories)
    #[serde(default)]
    pub size: u64,
    /// Children in display order (directories only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FsNode>,
}

impl FsNode {
    /// Create a directory node.
    pub fn dir(name: impl Into<String>, children: Vec<FsNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Dir,
            size: 0,
            children,
        }
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            size,
            children: Vec::new(),
        }
    }

    /// Parse a tree snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Find a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Check the tree invariants.
    ///
    /// Files must not have children and sibling names must be unique.
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        let mut stack = vec![(self, String::from("/"))];

        while let Some((node, path)) = stack.pop() {
            if node.is_file() {
                if !node.children.is_empty() {
                    return Err(format!("file '{}' has children", path));
                }
                continue;
            }

            let mut seen = HashSet::new();
            for child in &node.children {
                if !seen.insert(child.name.as_str()) {
                    return Err(format!(
                        "duplicate entry '{}' in '{}'",
                        child.name, path
                    ));
                }
                let child_path = if path == "/" {
                    format!("/{}", child.name)
                } else {
                    format!("{}/{}", path, child.name)
                };
                stack.push((child, child_path));
            }
        }

        Ok(())
    }
}
