//! # Extension Traits
//!
//! Convenience methods for any filesystem.
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`exists`](FsExt::exists) | Check if a path resolves to anything |
//! | [`is_file`](FsExt::is_file) | Check if path is a regular file |
//! | [`is_dir`](FsExt::is_dir) | Check if path is a directory |
//! | [`file_size`](FsExt::file_size) | Size of a file in bytes |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, `read_json` deserializes a JSON file.

use crate::{Fs, FsError};

/// Extension methods for any filesystem.
///
/// All methods have default implementations, so every [`Fs`] gets them.
/// Each call performs a full `open`, remote round-trips included.
///
/// # Example
///
/// ```rust
/// use githubfs::{Fs, FsExt, FsError};
///
/// fn has_license<B: Fs>(fs: &B, repo: &str) -> Result<bool, FsError> {
///     fs.is_file(&format!("{repo}/LICENSE"))
/// }
/// ```
pub trait FsExt: Fs {
    /// Check if a path exists.
    ///
    /// Returns `Ok(false)` for not-found-class errors (including a path
    /// without an owner). Other errors are returned.
    fn exists(&self, path: &str) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a regular file.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_file(&self, path: &str) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(m) => Ok(m.is_file()),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a directory.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_dir(&self, path: &str) -> Result<bool, FsError> {
        match self.metadata(path) {
            Ok(m) => Ok(m.is_dir()),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Get the size of a file in bytes, as reported by the remote.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the path doesn't exist.
    fn file_size(&self, path: &str) -> Result<u64, FsError> {
        Ok(self.metadata(path)?.size)
    }
}

// Blanket implementation - any Fs gets FsExt for free
impl<B: Fs + ?Sized> FsExt for B {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::de::DeserializeOwned;

    /// JSON deserialization extension methods.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait FsExtJson: Fs {
        /// Read a file and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - `FsError::NotFound`: File doesn't exist
        /// - `FsError::InvalidData`: File isn't valid UTF-8
        /// - `FsError::Deserialization`: JSON parsing failed
        fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FsError> {
            let data = self.read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| FsError::Deserialization(e.to_string()))
        }
    }

    // Blanket implementation
    impl<B: Fs + ?Sized> FsExtJson for B {}
}

#[cfg(feature = "serde")]
pub use json::FsExtJson;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dir, File, FsOpen, Node};
    use std::io::Cursor;

    /// Mock filesystem with one file, one directory, and one forbidden path.
    struct MockFs;

    impl FsOpen for MockFs {
        fn open(&self, name: &str) -> Result<Node, FsError> {
            match name {
                "o/r/file.txt" => Ok(Node::File(File::new(
                    "file.txt",
                    100,
                    Box::new(Cursor::new(vec![0u8; 100])),
                ))),
                "o/r/config.json" => Ok(Node::File(File::new(
                    "config.json",
                    11,
                    Box::new(Cursor::new(br#"{"depth":3}"#.to_vec())),
                ))),
                "o/r" => Ok(Node::Dir(Dir::new("r", Vec::new()))),
                "o/secret" => Err(FsError::PermissionDenied {
                    operation: "open",
                    path: "/o/secret".into(),
                }),
                "." => Err(FsError::OwnerMissing {
                    operation: "open",
                    path: String::new(),
                }),
                _ => Err(FsError::NotFound {
                    operation: "open",
                    path: format!("/{name}"),
                }),
            }
        }
    }

    #[test]
    fn exists_reports_present_paths() {
        assert!(MockFs.exists("o/r/file.txt").unwrap());
        assert!(MockFs.exists("o/r").unwrap());
    }

    #[test]
    fn exists_maps_not_found_class_to_false() {
        assert!(!MockFs.exists("o/r/missing").unwrap());
        assert!(!MockFs.exists(".").unwrap());
    }

    #[test]
    fn exists_propagates_permission_errors() {
        let err = MockFs.exists("o/secret").unwrap_err();
        assert!(matches!(err, FsError::PermissionDenied { .. }));
    }

    #[test]
    fn is_file_and_is_dir() {
        assert!(MockFs.is_file("o/r/file.txt").unwrap());
        assert!(!MockFs.is_dir("o/r/file.txt").unwrap());
        assert!(MockFs.is_dir("o/r").unwrap());
        assert!(!MockFs.is_file("o/r").unwrap());
        assert!(!MockFs.is_file("o/r/missing").unwrap());
        assert!(!MockFs.is_dir("o/r/missing").unwrap());
    }

    #[test]
    fn file_size_returns_remote_size() {
        assert_eq!(MockFs.file_size("o/r/file.txt").unwrap(), 100);
        assert!(MockFs.file_size("o/r/missing").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn read_json_deserializes_file() {
        #[derive(serde::Deserialize)]
        struct Config {
            depth: u32,
        }

        let config: Config = MockFs.read_json("o/r/config.json").unwrap();
        assert_eq!(config.depth, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn read_json_reports_parse_errors() {
        let err = MockFs
            .read_json::<serde_json::Value>("o/r/file.txt")
            .unwrap_err();
        assert!(matches!(err, FsError::Deserialization(_)));
    }
}
