//! This module provides an in-memory [`PathNode`] backend.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use anyhow::anyhow;
use tracing::debug;

use crate::names::is_plain_child_name;
use crate::node::{PathNode, Result, VFS_PATH_SEPARATOR};
use crate::tree::EntryType;

/// A handle to a node of an in-memory tree.
///
/// `MapNode` keeps the whole hierarchy in process memory, which makes it the
/// natural backend for tests and for callers that only need a scratch
/// namespace.
///
/// ### Internal state
///
/// * Every node owns its children through `Arc`s kept in a name-ordered
///   `BTreeMap`, guarded by an `RwLock`.
/// * The parent is a `Weak` back-reference: a node never keeps its parent
///   alive.
/// * Identity is pointer identity. Two handles are equal only if they point to
///   the same node, so equally named nodes of two separate trees are distinct.
///
/// ### Invariants
///
/// 1. **Unique names**: a container has at most one child per name.
/// 2. **Acyclic**: nodes are only ever attached below the node that created
///    them, so the parent chain always ends at a root.
/// 3. **Leaves are final**: a leaf never has children.
///
/// ### Lifecycle
///
/// A tree lives as long as a handle to its root does. Once the root is dropped
/// the subtree goes with it; a kept handle to a descendant then sees
/// `parent() == None` upwards of the first dropped ancestor.
///
/// ### Example
///
/// ```
/// use vfs_path_kit::{MapNode, PathNode};
///
/// let root = MapNode::new_root("root");
/// let docs = root.create_child_container("docs").unwrap();
/// docs.create_child_leaf("note.txt").unwrap();
///
/// assert_eq!(root.find_child("docs"), Some(docs.clone()));
/// assert_eq!(docs.path(), "/docs");
/// ```
#[derive(Clone)]
pub struct MapNode(Arc<Inner>);

struct Inner {
    name: String,
    entry_type: EntryType,
    parent: Weak<Inner>,
    children: RwLock<BTreeMap<String, Arc<Inner>>>,
}

impl MapNode {
    /// Creates a new detached root container.
    pub fn new_root<S: Into<String>>(name: S) -> Self {
        Self(Arc::new(Inner {
            name: name.into(),
            entry_type: EntryType::Container,
            parent: Weak::new(),
            children: RwLock::new(BTreeMap::new()),
        }))
    }

    pub fn entry_type(&self) -> EntryType {
        self.0.entry_type
    }

    /// Creates a new leaf child.
    /// Returns an error if the name is invalid, `self` is a leaf, or the name
    /// is already taken.
    pub fn create_child_leaf(&self, name: &str) -> Result<MapNode> {
        self.insert_child(name, EntryType::Leaf)
    }

    /// Returns the direct children in name order.
    pub fn children(&self) -> Vec<MapNode> {
        self.0
            .children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|child| MapNode(Arc::clone(child)))
            .collect()
    }

    /// Returns the `/`-joined path from the root down to this node.
    /// The root itself renders as `/`.
    pub fn path(&self) -> String {
        let mut names = Vec::new();
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            names.push(current.0.name.clone());
            current = parent;
        }
        if names.is_empty() {
            return VFS_PATH_SEPARATOR.to_string();
        }
        names
            .iter()
            .rev()
            .fold(String::new(), |mut path, name| {
                path.push(VFS_PATH_SEPARATOR);
                path.push_str(name);
                path
            })
    }

    fn insert_child(&self, name: &str, entry_type: EntryType) -> Result<MapNode> {
        Self::check_name(name)?;
        if self.0.entry_type.is_leaf() {
            return Err(anyhow!("{} is not a container", self.path()));
        }

        let mut children = self
            .0
            .children
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = children.get(name) {
            if entry_type.is_container() && existing.entry_type.is_container() {
                return Ok(MapNode(Arc::clone(existing)));
            }
            return Err(anyhow!("{}/{} already exists", self.path_prefix(), name));
        }

        let child = Arc::new(Inner {
            name: name.to_string(),
            entry_type,
            parent: Arc::downgrade(&self.0),
            children: RwLock::new(BTreeMap::new()),
        });
        children.insert(name.to_string(), Arc::clone(&child));
        drop(children);

        let child = MapNode(child);
        debug!(path = %child.path(), kind = ?entry_type, "inserted node");
        Ok(child)
    }

    fn check_name(name: &str) -> Result<()> {
        if !is_plain_child_name(name) {
            return Err(anyhow!("invalid name: {:?}", name));
        }
        Ok(())
    }

    fn path_prefix(&self) -> String {
        if self.parent().is_none() {
            String::new()
        } else {
            self.path()
        }
    }
}

impl PathNode for MapNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent.upgrade().map(MapNode)
    }

    fn name(&self) -> &str {
        &self.0.name
    }

    fn is_container(&self) -> bool {
        self.0.entry_type.is_container()
    }

    fn find_child(&self, name: &str) -> Option<Self> {
        self.0
            .children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(|child| MapNode(Arc::clone(child)))
    }

    /// Returns the existing child when it already is a container.
    fn create_child_container(&self, name: &str) -> Result<Self> {
        self.insert_child(name, EntryType::Container)
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MapNode {}

impl Hash for MapNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for MapNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapNode")
            .field("path", &self.path())
            .field("entry_type", &self.0.entry_type)
            .finish()
    }
}
