//! Virtual filesystem: the read-only portfolio tree and the navigator that
//! walks it.

mod navigator;
mod node;

pub use navigator::{
    is_hidden, join_path, normalize_path, parent_path, to_dos_path, NavError, NavigationState,
    Navigator, OpenOutcome, HIDDEN_NAMES,
};
pub use node::{FsNode, NodeKind};
