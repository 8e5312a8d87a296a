//! This module provides a [`PathNode`] backend that maps to a real directory on
//! the host system.
//!
//! ### Key Features:
//! - **Isolated root**: every node lives below a mount root; `parent()` stops
//!   there, so walks never escape it.
//! - **Path normalization**: the mount root is normalized lexically.
//! - **Live view**: nothing is cached; each query looks at the host filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use tracing::debug;

use crate::names::is_plain_child_name;
use crate::node::{PathNode, Result, utils};

/// A handle to a file or directory below a host mount root.
///
/// ### Usage notes:
/// - Symlinks are not followed when checking for existence; a link to a
///   directory is a container only if the host reports it as a directory.
/// - Permissions are not adjusted; the mount root must be writable for
///   `create_child_container` to succeed.
/// - Errors are returned via `anyhow::Result` with descriptive messages.
///
/// ### Example:
/// ```
/// use vfs_path_kit::{DirNode, PathNode, ensure_directory_path};
///
/// let tmp = std::env::temp_dir().join("vfs_path_kit_doc");
/// let root = DirNode::open(&tmp).unwrap();
/// let leaf = ensure_directory_path(&root, "docs/notes").unwrap();
///
/// assert!(leaf.host_path().is_dir());
/// assert_eq!(leaf.inner_path(), std::path::Path::new("docs/notes"));
/// # std::fs::remove_dir_all(&tmp).unwrap();
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DirNode {
    root: Arc<PathBuf>, // host-related absolute normalized path
    inner: PathBuf,     // relative to `root`, empty for the root node
    name: String,
}

impl DirNode {
    /// Mounts `root` and returns its node.
    /// * `root` is an absolute host path. If it does not exist it is created
    ///   together with its parents.
    /// If `root` is empty, relative, or an existing non-directory, an error is
    /// returned.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        if root.as_os_str().is_empty() {
            return Err(anyhow!("invalid root path: empty"));
        }
        if root.is_relative() {
            return Err(anyhow!("the root path must be absolute"));
        }
        if root.exists() && !root.is_dir() {
            return Err(anyhow!("{:?} is not a directory", root));
        }

        let root = utils::normalize(root);
        if !root.exists() {
            fs::create_dir_all(&root)?;
            debug!(root = %root.display(), "created mount root");
        }

        Ok(Self::mount_node(Arc::new(root)))
    }

    fn mount_node(root: Arc<PathBuf>) -> Self {
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "/".to_string());
        Self {
            root,
            inner: PathBuf::new(),
            name,
        }
    }

    /// Returns the host mount root this node belongs to.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the path of this node relative to the mount root.
    pub fn inner_path(&self) -> &Path {
        self.inner.as_path()
    }

    /// Returns the host path of this node.
    pub fn host_path(&self) -> PathBuf {
        self.root.join(&self.inner)
    }

    fn child(&self, name: &str) -> Self {
        Self {
            root: Arc::clone(&self.root),
            inner: self.inner.join(name),
            name: name.to_string(),
        }
    }
}

impl PathNode for DirNode {
    fn parent(&self) -> Option<Self> {
        let parent = self.inner.parent()?;
        match parent.file_name() {
            Some(name) => Some(Self {
                root: Arc::clone(&self.root),
                inner: parent.to_path_buf(),
                name: name.to_string_lossy().into_owned(),
            }),
            None => Some(Self::mount_node(Arc::clone(&self.root))),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_container(&self) -> bool {
        self.host_path().is_dir()
    }

    fn find_child(&self, name: &str) -> Option<Self> {
        if !is_plain_child_name(name) {
            return None;
        }
        let child = self.child(name);
        fs::symlink_metadata(child.host_path()).ok().map(|_| child)
    }

    /// Creates one directory below this node.
    /// An existing directory is returned as is; an existing file is an error.
    fn create_child_container(&self, name: &str) -> Result<Self> {
        if !is_plain_child_name(name) {
            return Err(anyhow!("invalid directory name: {:?}", name));
        }
        let child = self.child(name);
        let host = child.host_path();
        match fs::create_dir(&host) {
            Ok(()) => {
                debug!(path = %host.display(), "created directory");
                Ok(child)
            }
            // may have been created concurrently
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                if host.is_dir() {
                    Ok(child)
                } else {
                    Err(anyhow!("{} exists but is not a directory", host.display()))
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl std::fmt::Debug for DirNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DirNode").field(&self.host_path()).finish()
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::{common_ancestor, ensure_directory_path, relative_path};

    fn setup_test_env() -> TempDir {
        TempDir::new("dirnode_test").unwrap()
    }

    mod open {
        use super::*;

        #[test]
        fn test_open_existing_dir() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            assert_eq!(root.root(), utils::normalize(tmp.path()));
            assert_eq!(root.inner_path(), Path::new(""));
            assert_eq!(root.parent(), None);
            assert!(root.is_container());
            Ok(())
        }

        #[test]
        fn test_open_creates_missing_root() -> Result<()> {
            let tmp = setup_test_env();
            let missing = tmp.path().join("a/b/mount");
            let root = DirNode::open(&missing)?;
            assert!(missing.is_dir());
            assert_eq!(root.name(), "mount");
            Ok(())
        }

        #[test]
        fn test_open_rejects_bad_roots() -> Result<()> {
            let tmp = setup_test_env();
            let file = tmp.path().join("plain.txt");
            fs::write(&file, b"content")?;

            assert!(DirNode::open("").is_err());
            assert!(DirNode::open("relative/path").is_err());
            let err = DirNode::open(&file).unwrap_err();
            assert!(err.to_string().contains("is not a directory"));
            Ok(())
        }
    }

    mod nodes {
        use super::*;

        #[test]
        fn test_create_and_find_child() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            let docs = root.create_child_container("docs")?;
            assert!(tmp.path().join("docs").is_dir());
            assert_eq!(root.find_child("docs"), Some(docs.clone()));
            assert_eq!(docs.parent(), Some(root));
            Ok(())
        }

        #[test]
        fn test_create_existing_dir_returns_it() -> Result<()> {
            let tmp = setup_test_env();
            fs::create_dir(tmp.path().join("docs"))?;
            let root = DirNode::open(tmp.path())?;
            let docs = root.create_child_container("docs")?;
            assert_eq!(docs.inner_path(), Path::new("docs"));
            Ok(())
        }

        #[test]
        fn test_files_are_leaves() -> Result<()> {
            let tmp = setup_test_env();
            fs::write(tmp.path().join("note.txt"), b"hello")?;
            let root = DirNode::open(tmp.path())?;

            let note = root.find_child("note.txt").unwrap();
            assert!(!note.is_container());
            let err = root.create_child_container("note.txt").unwrap_err();
            assert!(err.to_string().contains("not a directory"));
            Ok(())
        }

        #[test]
        fn test_escaping_names_are_rejected() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path().join("mount"))?;
            for name in [".", "..", "", "a/b", "a\\b", "/"] {
                assert_eq!(root.find_child(name), None, "{name:?}");
                assert!(root.create_child_container(name).is_err(), "{name:?}");
            }
            Ok(())
        }

        #[test]
        fn test_parent_chain_stops_at_mount() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            let deep = ensure_directory_path(&root, "a/b/c")?;
            let b = deep.parent().unwrap();
            let a = b.parent().unwrap();
            assert_eq!(b.name(), "b");
            assert_eq!(a.name(), "a");
            assert_eq!(a.parent(), Some(root.clone()));
            assert_eq!(root.parent(), None);
            Ok(())
        }
    }

    mod algorithms {
        use super::*;

        #[test]
        fn test_ensure_directory_path_on_disk() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            let first = ensure_directory_path(&root, "A/newdir")?;
            assert!(tmp.path().join("A/newdir").is_dir());
            let second = ensure_directory_path(&root, "A/newdir")?;
            assert_eq!(first, second);
            Ok(())
        }

        #[test]
        fn test_relative_path_on_disk() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            let x = ensure_directory_path(&root, "A/X")?;
            let b = ensure_directory_path(&root, "B")?;
            assert_eq!(common_ancestor(&x, &b), Some(root.clone()));
            assert_eq!(relative_path(&x, &b, '/').as_deref(), Some("../../B"));
            Ok(())
        }

        #[test]
        fn test_separate_mounts_are_disjoint() -> Result<()> {
            let tmp = setup_test_env();
            let left = DirNode::open(tmp.path().join("left"))?;
            let right = DirNode::open(tmp.path().join("right"))?;
            assert_eq!(common_ancestor(&left, &right), None);
            Ok(())
        }

        #[test]
        fn test_concurrent_materialization_of_same_path() -> Result<()> {
            let tmp = setup_test_env();
            let root = DirNode::open(tmp.path())?;
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let root = root.clone();
                    std::thread::spawn(move || ensure_directory_path(&root, "shared/deep/leaf"))
                })
                .collect();

            for handle in handles {
                let leaf = handle.join().unwrap()?;
                assert_eq!(leaf.inner_path(), Path::new("shared/deep/leaf"));
            }
            assert!(tmp.path().join("shared/deep/leaf").is_dir());
            Ok(())
        }
    }
}
