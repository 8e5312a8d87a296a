//! Directory materialization: making sure a chain of containers exists below a
//! node, creating only the missing segments.

use tracing::debug;

use crate::error::{CreationError, CreationErrorKind, PathError, PathResult};
use crate::names::is_valid_segment_name;
use crate::node::PathNode;
use crate::node::utils::split_segments;

/// Walks `relative_path` (segments separated by `/`) below `root`, reusing
/// existing children and creating the missing ones, and returns the last node.
///
/// Empty segments (doubled, leading or trailing slashes) are skipped and an
/// empty path returns `root` itself. Calling it again against an unchanged
/// backend returns the same node without creating anything.
///
/// # Errors
/// * [`PathError::InvalidName`] for a bare separator segment such as `\`.
///   Every segment is checked before the backend is touched, so nothing has
///   been created when this error is returned.
/// * [`PathError::Creation`] when a segment exists but is not a container, or
///   when the backend refuses to create it. The error names the segment and
///   the prefix materialized so far; containers created before the failure are
///   left in place.
pub fn ensure_directory_path<N: PathNode>(root: &N, relative_path: &str) -> PathResult<N> {
    if let Some(bad) = split_segments(relative_path).find(|s| !is_valid_segment_name(s)) {
        return Err(PathError::InvalidName {
            name: bad.to_string(),
        });
    }

    let mut current = root.clone();
    let mut materialized: Vec<&str> = Vec::new();
    let mut created = 0usize;

    for segment in split_segments(relative_path) {

        let fail = |kind| CreationError {
            segment: segment.to_string(),
            materialized: materialized.join("/"),
            created,
            kind,
        };

        current = match current.find_child(segment) {
            Some(child) if child.is_container() => child,
            Some(_) => return Err(fail(CreationErrorKind::NotAContainer).into()),
            None => {
                let child = current
                    .create_child_container(segment)
                    .map_err(|err| fail(CreationErrorKind::Rejected(err)))?;
                created += 1;
                debug!(segment, parent = current.name(), "created missing container");
                child
            }
        };
        materialized.push(segment);
    }

    Ok(current)
}

/// Returns the first name among `prefix.ext`, `prefix1.ext`, `prefix2.ext`, ...
/// that is not taken by a child of `dir`.
pub fn sequent_child_name<N: PathNode>(dir: &N, prefix: &str, extension: &str) -> String {
    let mut name = format!("{prefix}.{extension}");
    let mut counter = 1usize;
    while dir.find_child(&name).is_some() {
        name = format!("{prefix}{counter}.{extension}");
        counter += 1;
    }
    name
}
