use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};

/// Expands `~` and environment variables in a configured path
///
/// Falls back to expanding only the tilde when a variable is not set.
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Expands a path given as a string, returning it as a `PathBuf`
pub fn expand_pathbuf(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(expand_path(text)),
        None => path.to_path_buf(),
    }
}

/// Platform directories for the application, if a home directory is known
pub(crate) fn find_project_folder() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}
