// SPDX-License-Identifier: MPL-2.0
//! Where a picture reference points.

use std::path::{Path, PathBuf};

/// A resolved picture reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Fetched over HTTP(S).
    Remote(String),
    /// Read from disk.
    Local(PathBuf),
}

impl ImageSource {
    /// Resolves a picture reference from the data file.
    ///
    /// `http://` and `https://` references are remote. Anything else is a
    /// path under `base_dir`; a leading `/` is stripped because listings use
    /// site-root paths such as `/images/car.webp`. Blank references resolve
    /// to `None`.
    pub fn resolve(reference: &str, base_dir: &Path) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        if is_remote(reference) {
            return Some(Self::Remote(reference.to_string()));
        }

        let relative = reference.trim_start_matches(['/', '\\']);
        if relative.is_empty() {
            return None;
        }
        Some(Self::Local(base_dir.join(relative)))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_remote(reference: &str) -> bool {
    let lower = reference
        .get(..8)
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| reference.to_ascii_lowercase());
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_references_are_remote() {
        let base = Path::new("/srv/public");
        assert_eq!(
            ImageSource::resolve("https://cdn.example.com/a.jpg", base),
            Some(ImageSource::Remote("https://cdn.example.com/a.jpg".into()))
        );
        assert!(ImageSource::resolve("HTTP://cdn.example.com/b.jpg", base)
            .is_some_and(|s| s.is_remote()));
    }

    #[test]
    fn site_root_paths_resolve_under_base() {
        let base = Path::new("/srv/public");
        assert_eq!(
            ImageSource::resolve("/images/car.webp", base),
            Some(ImageSource::Local(PathBuf::from("/srv/public/images/car.webp")))
        );
        assert_eq!(
            ImageSource::resolve("images/car.webp", base),
            Some(ImageSource::Local(PathBuf::from("/srv/public/images/car.webp")))
        );
    }

    #[test]
    fn blank_references_do_not_resolve() {
        let base = Path::new("/srv/public");
        assert!(ImageSource::resolve("", base).is_none());
        assert!(ImageSource::resolve("   ", base).is_none());
        assert!(ImageSource::resolve("/", base).is_none());
    }
}
