//! Common-ancestor and relative-path queries over [`PathNode`] trees.
//!
//! Every function here is a pure query: nothing is created, cached or
//! mutated, and the absence of a relation (nodes living in disjoint trees) is
//! reported as `None` instead of an error.

use std::collections::{HashMap, HashSet};
use std::iter;

use tracing::trace;

use crate::node::PathNode;
use crate::node::utils::split_on;

/// Iterates over the ancestor chain of `node`, starting with `node` itself
/// and ending with its root.
pub fn ancestors<N: PathNode>(node: &N) -> impl Iterator<Item = N> {
    iter::successors(Some(node.clone()), |current| current.parent())
}

/// Returns the root-most ancestor of `node` (the node itself for a root).
pub fn root_of<N: PathNode>(node: &N) -> N {
    let mut current = node.clone();
    while let Some(parent) = current.parent() {
        current = parent;
    }
    current
}

/// Returns the ancestor chain of `node` root-first, `node` being the last
/// element.
pub fn path_components<N: PathNode>(node: &N) -> Vec<N> {
    let mut components: Vec<N> = ancestors(node).collect();
    components.reverse();
    components
}

/// Returns true if `ancestor` is on the chain of `node`.
/// A node is its own ancestor unless `strict` is set.
pub fn is_ancestor<N: PathNode>(ancestor: &N, node: &N, strict: bool) -> bool {
    let mut chain = ancestors(node);
    if strict {
        chain.next();
    }
    chain.any(|current| &current == ancestor)
}

/// Returns the deepest node present in the ancestor chains of both `a` and
/// `b`, or `None` if they belong to disjoint trees.
pub fn common_ancestor<N: PathNode>(a: &N, b: &N) -> Option<N> {
    if a == b {
        return Some(a.clone());
    }
    let chain: HashSet<N> = ancestors(a).collect();
    ancestors(b).find(|current| chain.contains(current))
}

/// Folds [`common_ancestor`] over `nodes` from left to right.
///
/// Returns `None` for an empty input and as soon as one pair has no common
/// ancestor.
pub fn common_ancestor_of<'a, N, I>(nodes: I) -> Option<N>
where
    N: PathNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut nodes = nodes.into_iter();
    let mut ancestor = nodes.next()?.clone();
    for node in nodes {
        match common_ancestor(&ancestor, node) {
            Some(found) => ancestor = found,
            None => {
                trace!(node = node.name(), "disjoint node, no common ancestor");
                return None;
            }
        }
    }
    Some(ancestor)
}

/// Returns one common ancestor per tree represented in `nodes`.
///
/// Nodes are first bucketed by their root-most ancestor so that nodes from
/// unrelated trees are never compared; each bucket is then folded with
/// [`common_ancestor`]. Duplicate nodes are considered once. The order of the
/// result is unspecified.
pub fn common_ancestors<'a, N, I>(nodes: I) -> Vec<N>
where
    N: PathNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut index: HashMap<N, usize> = HashMap::new();
    let mut buckets: Vec<Vec<N>> = Vec::new();
    let mut seen: HashSet<&N> = HashSet::new();

    for node in nodes {
        if !seen.insert(node) {
            continue;
        }
        let key = root_of(node);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(node.clone());
    }
    trace!(buckets = buckets.len(), "partitioned nodes by root");

    // Nodes sharing a root always have a common ancestor (the root itself).
    buckets
        .iter()
        .filter_map(|bucket| common_ancestor_of(bucket))
        .collect()
}

/// Builds the path leading from `ancestor` down to `node`, segment names
/// joined by `separator`. Returns `Some("")` when both are the same node and
/// `None` when `ancestor` is not on the chain of `node`.
pub fn relative_path_from_ancestor<N: PathNode>(
    ancestor: &N,
    node: &N,
    separator: char,
) -> Option<String> {
    let mut names = Vec::new();
    for current in ancestors(node) {
        if &current == ancestor {
            names.reverse();
            return Some(join(names, separator));
        }
        names.push(current.name().to_string());
    }
    None
}

/// Returns the relative path leading from `from` to `to`, or `None` when the
/// nodes have no common ancestor.
///
/// The path rises with one `..` followed by `separator` per level between
/// `from` and the common ancestor, then descends through the segment names
/// from the ancestor down to `to`.
///
/// ```
/// use vfs_path_kit::{MapNode, PathNode, relative_path};
///
/// let root = MapNode::new_root("R");
/// let a = root.create_child_container("A").unwrap();
/// let x = a.create_child_container("X").unwrap();
/// let b = root.create_child_container("B").unwrap();
///
/// assert_eq!(relative_path(&x, &b, '/').as_deref(), Some("../../B"));
/// assert_eq!(relative_path(&root, &x, '/').as_deref(), Some("A/X"));
/// ```
pub fn relative_path<N: PathNode>(from: &N, to: &N, separator: char) -> Option<String> {
    let ancestor = common_ancestor(from, to)?;

    let mut path = String::new();
    for current in ancestors(from) {
        if current == ancestor {
            break;
        }
        path.push_str("..");
        path.push(separator);
    }
    path.push_str(&relative_path_from_ancestor(&ancestor, to, separator)?);
    Some(path)
}

/// Walks from `base` through `segments`: `..` moves to the parent, `.` and
/// empty segments stay in place, anything else is looked up as a child.
/// Returns `None` as soon as a step leads nowhere.
pub fn find_relative<N, I, S>(base: &N, segments: I) -> Option<N>
where
    N: PathNode,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut current = base.clone();
    for segment in segments {
        current = match segment.as_ref() {
            "" | "." => current,
            ".." => current.parent()?,
            name => current.find_child(name)?,
        };
    }
    Some(current)
}

/// Resolves a path produced by [`relative_path`] starting at `base`.
pub fn resolve_relative_path<N: PathNode>(base: &N, path: &str, separator: char) -> Option<N> {
    find_relative(base, split_on(path, separator))
}

fn join(names: Vec<String>, separator: char) -> String {
    let mut buffer = [0u8; 4];
    let separator: &str = separator.encode_utf8(&mut buffer);
    names.join(separator)
}
