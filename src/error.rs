//! Error types for the GitHub filesystem.
//!
//! [`FsError`] is the filesystem-facing vocabulary. [`RemoteError`] is what a
//! [`RemoteClient`](crate::RemoteClient) reports. [`translate`] is the only
//! place remote failures are interpreted.

use std::io;

/// Filesystem error type with contextual variants.
///
/// Variants raised by `open`/`sub` carry the operation name and the path as
/// given or resolved. Every variant maps onto a coarse [`io::ErrorKind`]
/// through [`FsError::kind`].
///
/// # Examples
///
/// ```rust
/// use githubfs::FsError;
///
/// let err = FsError::NotFound { operation: "open", path: "/acct/proj/missing".into() };
/// assert_eq!(err.to_string(), "open: not found: /acct/proj/missing");
/// assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    // Input Errors
    /// Path is not a well-formed relative path.
    #[error("{operation}: invalid argument: {path:?}")]
    InvalidPath {
        /// The operation that rejected the path.
        operation: &'static str,
        /// The offending path.
        path: String,
    },

    /// The path resolved to no owner at all.
    #[error("{operation}: owner is missing")]
    OwnerMissing {
        /// The operation that failed.
        operation: &'static str,
        /// Always empty: there is nothing to resolve the path against.
        path: String,
    },

    // Remote Errors
    /// Path does not exist on the remote.
    #[error("{operation}: not found: {path}")]
    NotFound {
        /// The operation that failed.
        operation: &'static str,
        /// The canonical path that was not found.
        path: String,
    },

    /// The remote refused access.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The operation that was denied.
        operation: &'static str,
        /// The canonical path where permission was denied.
        path: String,
    },

    /// The remote answered with neither a file nor a directory.
    #[error("invalid response: no file or directory returned for {path}")]
    InvalidResponse {
        /// The canonical path that was requested.
        path: String,
    },

    /// Any other remote failure, passed through unmodified.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    // Type Errors
    /// Expected a file but found a directory.
    #[error("not a file: {path}")]
    NotAFile {
        /// The path that is not a file.
        path: String,
    },

    /// Expected a directory but found a file.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: String,
    },

    // Data Errors
    /// File content could not be decoded.
    #[error("invalid data: {path} ({details})")]
    InvalidData {
        /// The path with invalid data.
        path: String,
        /// Details about the invalid data.
        details: String,
    },

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classifies the error as not-found, permission, invalid input, or other.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FsError::NotFound { .. } | FsError::OwnerMissing { .. } => io::ErrorKind::NotFound,
            FsError::PermissionDenied { .. } => io::ErrorKind::PermissionDenied,
            FsError::InvalidPath { .. } => io::ErrorKind::InvalidInput,
            FsError::Io { source, .. } => source.kind(),
            _ => io::ErrorKind::Other,
        }
    }

    /// Returns `true` for not-found-class errors.
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }
}

impl From<FsError> for io::Error {
    fn from(error: FsError) -> Self {
        match error {
            FsError::Io { source, .. } => source,
            other => io::Error::new(other.kind(), other),
        }
    }
}

/// Failure reported by a [`RemoteClient`](crate::RemoteClient).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The remote API answered with an unsuccessful HTTP-like status.
    #[error("remote returned status {status}: {message}")]
    Status {
        /// The status code.
        status: u16,
        /// The message reported by the remote, if any.
        message: String,
    },

    /// The request context's deadline passed before the call completed.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The HTTP-like status code, if the remote produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Maps a remote failure onto the filesystem error vocabulary.
///
/// | Remote | Result |
/// |--------|--------|
/// | status 404 | [`FsError::NotFound`] tagged with `operation` and `path` |
/// | status 401, 403 | [`FsError::PermissionDenied`] tagged likewise |
/// | anything else | [`FsError::Remote`], untagged |
pub(crate) fn translate(error: RemoteError, operation: &'static str, path: &str) -> FsError {
    match error.status() {
        Some(404) => FsError::NotFound {
            operation,
            path: path.to_string(),
        },
        Some(401 | 403) => FsError::PermissionDenied {
            operation,
            path: path.to_string(),
        },
        _ => FsError::Remote(error),
    }
}
