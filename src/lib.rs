//! A small toolkit of path-tree algorithms for Rust.
//! Computes common ancestors and relative paths between nodes of any
//! hierarchical namespace, and materializes directory chains on demand.
//!
//! ### Overview
//!
//! `vfs-path-kit` works against the [`PathNode`] trait: a node knows its parent,
//! its name, whether it is a container, how to look a child up and how to create
//! a child container. Anything that can answer those questions (a local disk, an
//! in-memory tree, a remote namespace) can be queried with the functions below.
//!
//! **Key ideas**:
//! - **Abstraction**: the algorithms never see a concrete storage backend.
//! - **Queries never fail**: disjoint trees are a normal outcome reported as `None`.
//! - **Idempotence**: `ensure_directory_path` creates only what is missing.
//! - **Backends included**: [`MapNode`] keeps a tree in memory, [`DirNode`] maps
//!   to a host directory.
//!
//! ### Example
//!
//! ```
//! use vfs_path_kit::{MapNode, PathNode, common_ancestor, ensure_directory_path, relative_path};
//!
//! let root = MapNode::new_root("R");
//! let x = ensure_directory_path(&root, "A/X").unwrap();
//! let b = ensure_directory_path(&root, "B").unwrap();
//!
//! assert_eq!(common_ancestor(&x, &b), Some(root.clone()));
//! assert_eq!(relative_path(&x, &b, '/').as_deref(), Some("../../B"));
//! ```

mod ancestry;
mod error;
mod materialize;
mod names;
mod node;
mod tree;

pub use ancestry::{
    ancestors, common_ancestor, common_ancestor_of, common_ancestors, find_relative, is_ancestor,
    path_components, relative_path, relative_path_from_ancestor, resolve_relative_path, root_of,
};
pub use error::{CreationError, CreationErrorKind, PathError, PathResult};
pub use materialize::{ensure_directory_path, sequent_child_name};
pub use names::{
    build_url, extract_file_name, filter_valid_names, is_bad_name, is_plain_child_name,
    is_valid_segment_name, parent_url, split_url,
};
pub use node::{ARCHIVE_SEPARATOR, PathNode, Result, VFS_PATH_SEPARATOR};
pub use tree::{DirNode, EntryType, MapNode};
