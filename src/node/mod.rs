use std::hash::Hash;

pub mod utils;

/// Canonical separator of inner paths and URLs.
pub const VFS_PATH_SEPARATOR: char = '/';

/// Marker appended to URLs that point inside an archive.
pub const ARCHIVE_SEPARATOR: &str = "!/";

/// Capability interface every tree backend must provide.
///
/// A `PathNode` is a cheap handle designating one position in a hierarchical
/// namespace (a directory or a leaf). The algorithms of this crate only ever
/// walk parents, read names and look children up; the single mutating
/// operation is [`PathNode::create_child_container`], whose effect is owned by
/// the backend.
///
/// ### Contract
///
/// - Handles designating the same position compare equal and hash equally.
/// - The chain obtained by repeatedly following [`PathNode::parent`] is finite
///   and acyclic. Cyclic backing stores are a contract violation.
/// - [`PathNode::find_child`] has no side effect.
pub trait PathNode: Clone + Eq + Hash {
    /// Returns the parent node, or `None` for a root.
    fn parent(&self) -> Option<Self>;

    /// Returns the final path segment of this node.
    fn name(&self) -> &str;

    /// Returns true if the node may have children.
    fn is_container(&self) -> bool;

    /// Looks up a direct child by name.
    fn find_child(&self, name: &str) -> Option<Self>;

    /// Creates a child container named `name` and returns it.
    /// Fails if the backend rejects the name or a non-container child with that
    /// name already exists.
    fn create_child_container(&self, name: &str) -> Result<Self>;
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;
