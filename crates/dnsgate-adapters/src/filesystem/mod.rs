//! Filesystem adapters.

mod local;
mod memory;

use std::path::Path;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// Whether `path` ends in one of `extensions`.
///
/// Case-insensitive. A configured extension may be written with or without
/// its leading dot (`yaml` and `.yaml` are the same).
pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
