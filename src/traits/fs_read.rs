//! Path-based read operations.

use std::io::Read;

use crate::{FsError, FsOpen, Metadata, Node};

/// Upper bound on the buffer reserved up front by [`FsRead::read`].
const SIZE_HINT_LIMIT: usize = 1 << 20;

/// Read operations addressed by path.
///
/// Every method has a default implementation on top of
/// [`FsOpen::open`], and any `FsOpen` type gets them through the blanket
/// implementation.
///
/// # Example
///
/// ```rust
/// use githubfs::{FsError, FsRead};
///
/// fn first_line<B: FsRead>(fs: &B, path: &str) -> Result<String, FsError> {
///     let text = fs.read_to_string(path)?;
///     Ok(text.lines().next().unwrap_or_default().to_string())
/// }
/// ```
pub trait FsRead: FsOpen {
    /// Read entire file contents as bytes.
    ///
    /// # Errors
    ///
    /// - Anything [`FsOpen::open`] reports
    /// - [`FsError::NotAFile`] if the path is a directory
    /// - [`FsError::Io`] if the content stream fails
    fn read(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let mut file = match self.open(path)? {
            Node::File(file) => file,
            Node::Dir(_) => {
                return Err(FsError::NotAFile {
                    path: path.to_string(),
                });
            }
        };

        // The reported size is only a hint; the remote may misstate it.
        let hint = usize::try_from(file.size()).unwrap_or(0).min(SIZE_HINT_LIMIT);
        let mut data = Vec::with_capacity(hint);
        file.read_to_end(&mut data).map_err(|source| FsError::Io {
            operation: "read",
            path: path.to_string(),
            source,
        })?;
        file.close()?;

        Ok(data)
    }

    /// Read file contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// - Anything [`read`](FsRead::read) reports
    /// - [`FsError::InvalidData`] if the file contains invalid UTF-8
    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        let data = self.read(path)?;
        String::from_utf8(data).map_err(|_| FsError::InvalidData {
            path: path.to_string(),
            details: "not valid UTF-8".into(),
        })
    }

    /// Get metadata for a path.
    ///
    /// Performs a full `open`, including fetching file content.
    fn metadata(&self, path: &str) -> Result<Metadata, FsError> {
        let node = self.open(path)?;
        let metadata = node.stat();
        node.close()?;
        Ok(metadata)
    }

    /// Open a file for reading, returning a boxed reader.
    ///
    /// # Errors
    ///
    /// - Anything [`FsOpen::open`] reports
    /// - [`FsError::NotAFile`] if the path is a directory
    fn open_read(&self, path: &str) -> Result<Box<dyn Read + Send>, FsError> {
        match self.open(path)? {
            Node::File(file) => Ok(Box::new(file)),
            Node::Dir(_) => Err(FsError::NotAFile {
                path: path.to_string(),
            }),
        }
    }
}

// Blanket implementation - any FsOpen type gets FsRead for free
impl<T: FsOpen + ?Sized> FsRead for T {}
