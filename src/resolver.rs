//! Static resource resolution
//!
//! Selects the active build directory once at startup and answers, per request,
//! whether a relative path names a regular file inside a root. Paths that would
//! leave the root are rejected before touching the filesystem, and symlinks are
//! checked again after canonicalization.

use crate::http::mime;
use crate::logger;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Path traversal attempt blocked: {0}")]
    PathTraversal(String),
}

/// A canonicalized directory that files are served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    /// Open an existing directory as a root
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = dir.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Sub-root for a child directory, if it exists
    pub fn child(&self, name: &str) -> Option<Self> {
        Self::open(self.root.join(name)).ok()
    }

    /// Resolve `relative` to a regular file under this root
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ResolveError> {
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            return Err(ResolveError::NotFound(relative.to_string()));
        }
        let clean = sanitize(relative)?;

        let candidate = self.root.join(&clean);
        if !candidate.is_file() {
            return Err(ResolveError::NotFound(relative.to_string()));
        }

        let canonical = candidate
            .canonicalize()
            .map_err(|_| ResolveError::NotFound(relative.to_string()))?;
        if !canonical.starts_with(&self.root) {
            return Err(ResolveError::PathTraversal(format!(
                "{relative} -> {}",
                canonical.display()
            )));
        }
        Ok(canonical)
    }

    /// Resolve and read a file, returning its bytes and content type
    ///
    /// Traversal attempts are logged; every failure maps to `None`.
    pub async fn load(&self, relative: &str) -> Option<(Vec<u8>, &'static str)> {
        let path = match self.resolve(relative) {
            Ok(p) => p,
            Err(e @ ResolveError::PathTraversal(_)) => {
                logger::log_warning(&e.to_string());
                return None;
            }
            Err(ResolveError::NotFound(_)) => return None,
        };

        match fs::read(&path).await {
            Ok(content) => Some((content, mime::content_type_for(&path))),
            Err(e) => {
                logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
                None
            }
        }
    }
}

/// Pick the first candidate directory that exists
pub fn select_root<S: AsRef<str>>(candidates: &[S]) -> Option<AssetRoot> {
    candidates.iter().find_map(|c| {
        let dir = Path::new(c.as_ref());
        if dir.is_dir() {
            AssetRoot::open(dir).ok()
        } else {
            None
        }
    })
}

/// Reduce a request path to plain relative components
fn sanitize(relative: &str) -> Result<PathBuf, ResolveError> {
    if relative.contains('\0') || relative.contains('\\') {
        return Err(ResolveError::PathTraversal(relative.to_string()));
    }

    let mut clean = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::PathTraversal(relative.to_string()));
            }
        }
    }

    if clean.as_os_str().is_empty() {
        return Err(ResolveError::NotFound(relative.to_string()));
    }
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn build_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        stdfs::create_dir_all(dir.path().join("static/js")).unwrap();
        stdfs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();
        stdfs::write(dir.path().join("favicon.ico"), [0u8, 1, 2]).unwrap();
        stdfs::write(dir.path().join("static/js/main.js"), "console.log(1)").unwrap();
        dir
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = build_tree();
        let root = AssetRoot::open(dir.path()).unwrap();
        let path = root.resolve("static/js/main.js").unwrap();
        assert!(path.ends_with("static/js/main.js"));
        assert!(root.resolve("/favicon.ico").is_ok());
    }

    #[test]
    fn test_resolve_missing_and_directory() {
        let dir = build_tree();
        let root = AssetRoot::open(dir.path()).unwrap();
        assert!(matches!(root.resolve("nope.png"), Err(ResolveError::NotFound(_))));
        assert!(matches!(root.resolve("static"), Err(ResolveError::NotFound(_))));
        assert!(matches!(root.resolve(""), Err(ResolveError::NotFound(_))));
        assert!(matches!(root.resolve("./"), Err(ResolveError::NotFound(_))));
    }

    #[test]
    fn test_resolve_rejects_parent_segments() {
        let outer = TempDir::new().unwrap();
        stdfs::write(outer.path().join("secret.txt"), "secret").unwrap();
        stdfs::create_dir(outer.path().join("build")).unwrap();
        let root = AssetRoot::open(outer.path().join("build")).unwrap();

        assert!(matches!(
            root.resolve("../secret.txt"),
            Err(ResolveError::PathTraversal(_))
        ));
        assert!(matches!(
            root.resolve("static/../../secret.txt"),
            Err(ResolveError::PathTraversal(_))
        ));
        assert!(matches!(
            root.resolve("..\\secret.txt"),
            Err(ResolveError::PathTraversal(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_symlink_escape() {
        let outer = TempDir::new().unwrap();
        stdfs::write(outer.path().join("secret.txt"), "secret").unwrap();
        stdfs::create_dir(outer.path().join("build")).unwrap();
        std::os::unix::fs::symlink(
            outer.path().join("secret.txt"),
            outer.path().join("build/link.txt"),
        )
        .unwrap();
        let root = AssetRoot::open(outer.path().join("build")).unwrap();

        assert!(matches!(
            root.resolve("link.txt"),
            Err(ResolveError::PathTraversal(_))
        ));
    }

    #[test]
    fn test_select_root_first_existing() {
        let dir = build_tree();
        let existing = dir.path().to_str().unwrap().to_string();
        let candidates = vec![
            "/definitely/not/here".to_string(),
            existing.clone(),
            "/tmp".to_string(),
        ];
        let root = select_root(&candidates).unwrap();
        assert_eq!(root.path(), Path::new(&existing).canonicalize().unwrap());

        assert!(select_root(&["/definitely/not/here"]).is_none());
        let empty: [&str; 0] = [];
        assert!(select_root(&empty).is_none());
    }

    #[test]
    fn test_child_root() {
        let dir = build_tree();
        let root = AssetRoot::open(dir.path()).unwrap();
        let statics = root.child("static").unwrap();
        assert!(statics.resolve("js/main.js").is_ok());
        assert!(root.child("missing").is_none());
    }

    #[tokio::test]
    async fn test_load_infers_content_type() {
        let dir = build_tree();
        let root = AssetRoot::open(dir.path()).unwrap();
        let (content, content_type) = root.load("static/js/main.js").await.unwrap();
        assert_eq!(content, b"console.log(1)");
        assert_eq!(content_type, "application/javascript; charset=utf-8");
        assert!(root.load("../etc/passwd").await.is_none());
        assert!(root.load("missing.css").await.is_none());
    }
}
