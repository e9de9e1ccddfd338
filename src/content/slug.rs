//! Post slugs derived from file paths.

use std::path::{Component, Path};

/// Slug of a post file relative to the content directory.
///
/// The extension is dropped, `index` segments are elided and the result is
/// wrapped in slashes:
///
/// ```text
/// content/blog/a-carta/index.md      -> /a-carta/
/// content/blog/notas/sobre-nomes.mdx -> /notas/sobre-nomes/
/// content/blog/index.md              -> /
/// ```
pub fn slug_for(file: &Path, content_dir: &Path) -> String {
    let rel = file.strip_prefix(content_dir).unwrap_or(file);
    let stem = rel.with_extension("");

    let mut slug = String::from("/");
    for component in stem.components() {
        if let Component::Normal(s) = component {
            let s = s.to_string_lossy();
            if s != "index" {
                slug.push_str(&s);
                slug.push('/');
            }
        }
    }

    slug
}
