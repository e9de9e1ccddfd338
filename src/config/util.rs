//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{ConfigError, DEFAULT_CONFIG_NAME};

/// Find the config file for `config_name`, starting at `cwd`.
///
/// Only the default name may be missing; an explicit `--config` must exist.
pub fn locate_config(config_name: &Path, cwd: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match find_config_file(config_name, cwd) {
        Some(path) => Ok(Some(path)),
        None if config_name == Path::new(DEFAULT_CONFIG_NAME) => Ok(None),
        None => Err(ConfigError::NotFound(config_name.to_path_buf())),
    }
}

/// Find config file by searching upward from `start`
///
/// Returns the path of the first `config_name` found in `start` or one of
/// its ancestors.
///
/// # Example
/// ```text
/// /home/user/blog/content/blog/a-carta/  ← start
/// /home/user/blog/leitura.toml            ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/blog/a-carta");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("leitura.toml"), "").unwrap();

        let found = find_config_file(Path::new("leitura.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("leitura.toml")));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&path, dir.path()), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            find_config_file(Path::new("leitura-nao-existe-em-lugar-algum.toml"), dir.path()),
            None
        );
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate_config(Path::new("leitura-personalizado.toml"), dir.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::NotFound(ref p) if p == Path::new("leitura-personalizado.toml"))
        );

        let path = dir.path().join("outro.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(
            locate_config(Path::new("outro.toml"), dir.path()).unwrap(),
            Some(path.clone())
        );
        assert_eq!(locate_config(&path, Path::new("/")).unwrap(), Some(path));
    }

    #[test]
    fn test_default_config_may_be_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sem-config");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "").unwrap();

        assert!(locate_config(Path::new(DEFAULT_CONFIG_NAME), &nested).is_ok());
        assert_eq!(
            locate_config(Path::new(DEFAULT_CONFIG_NAME), &nested).unwrap(),
            Some(dir.path().join(DEFAULT_CONFIG_NAME))
        );
    }
}
