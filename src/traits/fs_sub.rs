//! Deriving narrower-scoped filesystems.

use crate::{FsError, FsOpen};

/// Derives a filesystem rooted at a sub-path.
///
/// `sub("a")` followed by `open("b")` resolves the same location as
/// `open("a/b")` on the parent.
///
/// # Example
///
/// ```rust
/// use githubfs::{FsError, FsOpen, FsSub};
///
/// fn open_readme<F: FsSub>(fs: &F, repo: &str) -> Result<(), FsError> {
///     let scoped = fs.sub(repo)?;
///     let readme = scoped.open("README.md")?;
///     readme.close()
/// }
/// ```
pub trait FsSub: FsOpen {
    /// The derived filesystem type.
    type Sub: FsOpen;

    /// Returns a filesystem whose root is `dir`.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidPath`] if `dir` is not a well-formed relative path
    fn sub(&self, dir: &str) -> Result<Self::Sub, FsError>;
}
