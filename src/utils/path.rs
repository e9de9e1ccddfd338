//! Path resolution helpers.

use std::path::{Path, PathBuf};

/// Canonicalize a path, falling back to a cwd-joined absolute path when it
/// does not exist yet.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a user-supplied path relative to cwd, then to `fallback_dir`.
///
/// Existing paths come back canonical, so they compare equal to the
/// canonical content directory even when given through a symlink.
///
/// `posts/a.md` and `content/blog/posts/a.md` both resolve when run from the
/// site root with `content/blog` as fallback.
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}
