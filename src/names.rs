//! Segment name validation and URL helpers.

use std::borrow::Cow;

use crate::node::utils::to_system_independent;
use crate::node::{ARCHIVE_SEPARATOR, VFS_PATH_SEPARATOR};

const SCHEME_SEPARATOR: &str = "://";

/// Returns true unless `name` is empty or a bare separator (`/` or `\`).
/// Length and character set are left to the backend.
pub fn is_valid_segment_name(name: &str) -> bool {
    !is_bad_name(name)
}

/// Negation of [`is_valid_segment_name`].
pub fn is_bad_name(name: &str) -> bool {
    name.is_empty() || name == "/" || name == "\\"
}

/// Returns true if `name` can be stored as a single child entry: a valid
/// segment that is neither `.` nor `..` and holds no `/` or `\`.
pub fn is_plain_child_name(name: &str) -> bool {
    is_valid_segment_name(name) && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Drops invalid names, preserving the order of the others.
/// The input is borrowed back untouched when nothing has to be dropped.
pub fn filter_valid_names<S>(names: &[S]) -> Cow<'_, [S]>
where
    S: AsRef<str> + Clone,
{
    if names.iter().all(|name| is_valid_segment_name(name.as_ref())) {
        return Cow::Borrowed(names);
    }
    Cow::Owned(
        names
            .iter()
            .filter(|name| is_valid_segment_name(name.as_ref()))
            .cloned()
            .collect(),
    )
}

/// Builds `scheme://path`, converting backslashes in `path` to `/`.
/// Archive entries get the `!/` marker appended.
pub fn build_url(scheme: &str, path: &str, is_archive_entry: bool) -> String {
    let mut url = String::with_capacity(
        scheme.len() + SCHEME_SEPARATOR.len() + path.len() + ARCHIVE_SEPARATOR.len(),
    );
    url.push_str(scheme);
    url.push_str(SCHEME_SEPARATOR);
    url.push_str(&to_system_independent(path));
    if is_archive_entry {
        url.push_str(ARCHIVE_SEPARATOR);
    }
    url
}

/// Splits `scheme://path` into its scheme and path.
pub fn split_url(url: &str) -> Option<(&str, &str)> {
    url.split_once(SCHEME_SEPARATOR)
}

/// Returns the part of `url` before the last `/`.
pub fn parent_url(url: &str) -> Option<&str> {
    url.rfind(VFS_PATH_SEPARATOR).map(|index| &url[..index])
}

/// Returns the part of `url_or_path` after the last `/`.
pub fn extract_file_name(url_or_path: &str) -> Option<&str> {
    url_or_path
        .rfind(VFS_PATH_SEPARATOR)
        .map(|index| &url_or_path[index + 1..])
}
