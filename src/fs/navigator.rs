//! Navigation state over the read-only virtual tree.
//!
//! # Path Convention
//!
//! - Root: `"/"`
//! - Subdirectory: `"/projects"`, `"/projects/web"`
//! - Always absolute, no trailing slash, no empty segments

use super::node::FsNode;

/// Entry names never shown in directory listings.
pub const HIDDEN_NAMES: [&str; 2] = [".git", ".gitignore"];

/// Navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("The system cannot find the path specified.")]
    PathNotFound { path: String },

    #[error("invalid tree: {0}")]
    InvalidTree(String),
}

/// Current working directory plus selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Normalized absolute path of the current directory
    pub current_path: String,
    /// Index into the filtered listing of the current directory
    pub selected_index: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            selected_index: 0,
        }
    }
}

/// Result of opening the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A directory was entered
    Entered,
    /// A file should be opened
    OpenFile { name: String, path: String },
    /// The listing is empty
    Nothing,
}

/// Navigator over an immutable tree snapshot.
#[derive(Debug, Clone)]
pub struct Navigator {
    root: FsNode,
    state: NavigationState,
}

impl Navigator {
    /// Create a navigator positioned at the root.
    ///
    /// # Errors
    /// Returns [`NavError::InvalidTree`] if the root is not a directory or
    /// the tree has duplicate sibling names or files with children.
    pub fn new(root: FsNode) -> Result<Self, NavError> {
        if !root.is_dir() {
            return Err(NavError::InvalidTree(format!(
                "root '{}' is not a directory",
                root.name
            )));
        }
        root.validate().map_err(NavError::InvalidTree)?;

        Ok(Self {
            root,
            state: NavigationState::default(),
        })
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// Resolve an absolute path to a node.
    ///
    /// Empty segments are ignored, so `"/"`, `""` and `"//"` all resolve to
    /// the root. Traversing into a file or a missing name yields `None`.
    pub fn resolve(&self, path: &str) -> Option<&FsNode> {
        let mut current = &self.root;
        for part in path.split('/').filter(|s| !s.is_empty()) {
            if !current.is_dir() {
                return None;
            }
            current = current.child(part)?;
        }
        Some(current)
    }

    /// Change the current directory.
    ///
    /// - `".."` moves to the parent (root stays root) and selects the folder
    ///   just left
    /// - `"/"` moves to the root
    /// - anything else is absolute if it starts with `/`, else relative
    ///
    /// Backslashes are accepted as separators. State is unchanged on error.
    pub fn change_directory(&mut self, target: &str) -> Result<(), NavError> {
        let target = target.replace('\\', "/");

        match target.as_str() {
            ".." | "../" => {
                let parent = parent_path(&self.state.current_path);
                let restore = self
                    .state
                    .current_path
                    .rsplit('/')
                    .find(|s| !s.is_empty())
                    .and_then(|departed| {
                        self.listing_of(&parent)
                            .iter()
                            .position(|c| c.name == departed)
                    });
                self.enter(parent, restore)
            }
            "/" => self.enter("/".to_string(), None),
            other => {
                let joined = if other.starts_with('/') {
                    other.to_string()
                } else {
                    join_path(&self.state.current_path, other)
                };
                self.enter(normalize_path(&joined), None)
            }
        }
    }

    /// Filtered children of the current directory, in display order.
    pub fn list_current_directory(&self) -> Vec<&FsNode> {
        self.listing_of(&self.state.current_path)
    }

    /// The currently selected entry, if the listing is not empty.
    pub fn selected(&self) -> Option<&FsNode> {
        self.list_current_directory()
            .get(self.state.selected_index)
            .copied()
    }

    /// Select an entry by index, clamped to the listing.
    pub fn select(&mut self, index: usize) {
        let len = self.list_current_directory().len();
        self.state.selected_index = if len == 0 { 0 } else { index.min(len - 1) };
    }

    /// Move the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.list_current_directory().len();
        if len > 0 {
            self.state.selected_index = (self.state.selected_index + 1) % len;
        }
    }

    /// Move the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.list_current_directory().len();
        if len > 0 {
            self.state.selected_index = (self.state.selected_index + len - 1) % len;
        }
    }

    /// Open the selected entry: enter a directory or report a file to open.
    pub fn open_selected(&mut self) -> Result<OpenOutcome, NavError> {
        let Some(selected) = self.selected() else {
            return Ok(OpenOutcome::Nothing);
        };

        let name = selected.name.clone();
        let path = self.file_path(&name);
        if selected.is_dir() {
            self.enter(path, None)?;
            Ok(OpenOutcome::Entered)
        } else {
            Ok(OpenOutcome::OpenFile { name, path })
        }
    }

    /// Go to the parent directory. No-op at the root.
    pub fn close_selected(&mut self) -> Result<(), NavError> {
        if self.state.current_path == "/" {
            return Ok(());
        }
        self.change_directory("..")
    }

    /// Absolute path of `name` inside the current directory.
    pub fn file_path(&self, name: &str) -> String {
        join_path(&self.state.current_path, name)
    }

    /// Current directory in DOS form (`C:\projects\web`).
    pub fn dos_path(&self) -> String {
        to_dos_path(&self.state.current_path)
    }

    fn listing_of(&self, path: &str) -> Vec<&FsNode> {
        match self.resolve(path) {
            Some(node) if node.is_dir() => node
                .children
                .iter()
                .filter(|c| !is_hidden(&c.name))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn enter(&mut self, path: String, restore: Option<usize>) -> Result<(), NavError> {
        match self.resolve(&path) {
            Some(node) if node.is_dir() => {
                self.state.current_path = path;
                self.state.selected_index = restore.unwrap_or(0);
                log::debug!("Changed directory to {}", self.state.current_path);
                Ok(())
            }
            _ => Err(NavError::PathNotFound { path }),
        }
    }
}

/// Whether an entry is excluded from listings.
pub fn is_hidden(name: &str) -> bool {
    HIDDEN_NAMES.contains(&name)
}

/// Normalize a path to absolute form with no empty segments.
pub fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

/// Parent of an absolute path. The parent of `/` is `/`.
pub fn parent_path(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rsplit_once('/') {
        Some(("", _)) | None => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}

/// Join a relative path onto an absolute base without doubling the separator.
pub fn join_path(base: &str, rel: &str) -> String {
    if base == "/" {
        format!("/{}", rel)
    } else {
        format!("{}/{}", base, rel)
    }
}

/// Format an absolute path as a DOS path on drive `C:`.
pub fn to_dos_path(path: &str) -> String {
    let normalized = normalize_path(path);
    format!("C:\\{}", normalized[1..].replace('/', "\\"))
}
