//! Post discovery under the content directory.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;

use crate::utils::path::resolve_path;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect post files based on CLI paths.
///
/// - no paths: every post under `content_dir`
/// - `-`: paths read from stdin, one per line
/// - files must carry one of `extensions`, directories are walked
pub fn collect_post_files(
    paths: &[PathBuf],
    content_dir: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        if !content_dir.is_dir() {
            bail!("Content directory not found: {}", content_dir.display());
        }
        return Ok(walk_posts(content_dir, extensions));
    }

    let mut files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !has_post_extension(&resolved, extensions) {
                bail!("Not a post file: {}", path.display());
            }
            files.push(resolved);
        } else if resolved.is_dir() {
            files.extend(walk_posts(&resolved, extensions));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Walk a directory recursively for post files, sorted by path.
fn walk_posts(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| has_post_extension(p, extensions))
        .collect();
    files.sort();
    files
}

fn has_post_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Read file paths from stdin, one per line
fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::normalize_path;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("blog");
        fs::create_dir_all(blog.join("a-carta")).unwrap();
        fs::create_dir_all(blog.join("facade")).unwrap();
        fs::write(blog.join("a-carta/index.md"), "a").unwrap();
        fs::write(blog.join("facade/index.mdx"), "b").unwrap();
        fs::write(blog.join("facade/Facade.kt"), "class Facade").unwrap();
        fs::write(blog.join(".DS_Store"), "").unwrap();
        dir
    }

    #[test]
    fn test_collect_all_posts() {
        let dir = site();
        let blog = dir.path().join("blog");
        let files = collect_post_files(&[], &blog, &exts()).unwrap();

        assert_eq!(
            files,
            vec![blog.join("a-carta/index.md"), blog.join("facade/index.mdx")]
        );
    }

    #[test]
    fn test_collect_respects_extensions() {
        let dir = site();
        let blog = dir.path().join("blog");
        let files = collect_post_files(&[], &blog, &["mdx".to_string()]).unwrap();
        assert_eq!(files, vec![blog.join("facade/index.mdx")]);
    }

    #[test]
    fn test_collect_explicit_paths() {
        let dir = site();
        let blog = dir.path().join("blog");
        let files = collect_post_files(
            &[blog.join("facade"), blog.join("facade/index.mdx")],
            &blog,
            &exts(),
        )
        .unwrap();
        assert_eq!(files, vec![normalize_path(&blog).join("facade/index.mdx")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_content_dir() {
        let dir = site();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path(), &link).unwrap();
        let content_dir = normalize_path(&link.join("blog"));

        let files = collect_post_files(
            &[
                link.join("blog/a-carta/index.md"),
                dir.path().join("blog/a-carta"),
            ],
            &content_dir,
            &exts(),
        )
        .unwrap();

        assert_eq!(files, vec![content_dir.join("a-carta/index.md")]);
        assert_eq!(
            crate::content::slug::slug_for(&files[0], &content_dir),
            "/a-carta/"
        );
    }

    #[test]
    fn test_collect_rejects_non_post_file() {
        let dir = site();
        let blog = dir.path().join("blog");
        let err = collect_post_files(&[blog.join("facade/Facade.kt")], &blog, &exts());
        assert!(err.is_err());
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = site();
        let blog = dir.path().join("blog");
        let err = collect_post_files(&[blog.join("nao-existe")], &blog, &exts()).unwrap_err();
        assert!(err.to_string().contains("Path not found"));
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_post_files(&[], &dir.path().join("content"), &exts());
        assert!(err.is_err());
    }
}
