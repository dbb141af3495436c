//! CLI command implementations.

pub mod collect;
pub mod validate;

use std::path::Path;

/// An unset action input arrives as an empty string.
pub(crate) fn project_root(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    }
}
