//! Path-based directory listing.

use crate::{DirEntry, FsError, FsOpen, Node};

/// Directory listing addressed by path.
///
/// Blanket-implemented for every [`FsOpen`] type.
pub trait FsDir: FsOpen {
    /// List every entry of the directory at `path`.
    ///
    /// # Errors
    ///
    /// - Anything [`FsOpen::open`] reports
    /// - [`FsError::NotADirectory`] if the path is a file
    fn read_dir(&self, path: &str) -> Result<ReadDirIter, FsError> {
        match self.open(path)? {
            Node::Dir(dir) => Ok(ReadDirIter::from_vec(dir.into_entries())),
            Node::File(_) => Err(FsError::NotADirectory {
                path: path.to_string(),
            }),
        }
    }
}

// Blanket implementation - any FsOpen type gets FsDir for free
impl<T: FsOpen + ?Sized> FsDir for T {}

/// Iterator over directory entries.
///
/// The listing is fully materialized when the directory is opened, so
/// iteration never fails.
///
/// # Example
///
/// ```rust
/// use githubfs::{FsDir, FsError};
///
/// fn list_dirs<B: FsDir>(fs: &B, path: &str) -> Result<Vec<String>, FsError> {
///     Ok(fs
///         .read_dir(path)?
///         .filter(|entry| entry.is_dir())
///         .map(|entry| entry.name)
///         .collect())
/// }
/// ```
#[derive(Debug)]
pub struct ReadDirIter(std::vec::IntoIter<DirEntry>);

impl ReadDirIter {
    /// Create from a pre-collected vector.
    pub fn from_vec(entries: Vec<DirEntry>) -> Self {
        Self(entries.into_iter())
    }
}

impl Iterator for ReadDirIter {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for ReadDirIter {}
