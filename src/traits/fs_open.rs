//! Opening paths as handles.

use crate::{FsError, Node};

/// Opens a slash-separated relative path.
///
/// The single required operation. Every path-based convenience in
/// [`FsRead`](crate::FsRead), [`FsDir`](crate::FsDir), and
/// [`FsExt`](crate::FsExt) is built on it.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsOpen`.
pub trait FsOpen: Send + Sync {
    /// Open `name` and return a file or directory handle.
    ///
    /// `name` must be a well-formed relative path; `"."` is the root.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidPath`] if `name` is malformed (no remote call is made)
    /// - [`FsError::OwnerMissing`] if the path resolves to no owner
    /// - [`FsError::NotFound`] if the remote has nothing at the path
    /// - [`FsError::PermissionDenied`] if the remote refuses access
    /// - [`FsError::Remote`] for any other remote failure
    fn open(&self, name: &str) -> Result<Node, FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_open_is_object_safe() {
        fn _check(_: &dyn FsOpen) {}
    }

    #[test]
    fn fs_open_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: FsOpen>() {
            _assert_send_sync::<T>();
        }
    }
}
