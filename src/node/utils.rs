use std::path::{Component, Path, PathBuf};

use super::VFS_PATH_SEPARATOR;

/// Lexically normalizes a host path: drops `.` components and resolves `..`
/// against the components collected so far. Never touches the filesystem.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(parent) = result.parent() {
                    result = parent.to_path_buf();
                }
            }
            _ => result.push(component),
        }
    }
    result
}

/// Splits a `/`-separated relative path into its non-empty segments.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    split_on(path, VFS_PATH_SEPARATOR)
}

/// Splits `path` on `separator`, skipping empty segments.
pub fn split_on(path: &str, separator: char) -> impl Iterator<Item = &str> {
    path.split(separator).filter(|segment| !segment.is_empty())
}

/// Converts OS-specific backslashes to the canonical `/` separator.
pub fn to_system_independent(path: &str) -> String {
    path.replace('\\', "/")
}
