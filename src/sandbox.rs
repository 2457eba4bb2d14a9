//! Path guard for the sandbox root.
//!
//! Resolution is purely lexical: `.` and `..` segments are folded without
//! touching the filesystem, so both endpoints can reject an escaping path
//! before any I/O happens. Symlink escapes are not detected; that is a known
//! gap, not a feature.

use std::path::{Component, Path, PathBuf};

use crate::error::TaskError;

/// Resolve `candidate` against `root` and reject anything that lands outside.
///
/// Relative candidates are interpreted relative to the root. The root itself
/// is expected to already be absolute and normalized (see `Config::from_env`).
pub fn resolve(root: &Path, candidate: &str) -> Result<PathBuf, TaskError> {
    let raw = Path::new(candidate);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        root.join(raw)
    };

    let normalized = normalize(&joined);
    if !normalized.starts_with(root) {
        return Err(TaskError::Forbidden(format!(
            "Access denied outside {}",
            root.display()
        )));
    }

    Ok(normalized)
}

/// Fold `.` and `..` components lexically.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
