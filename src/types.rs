//! Core value types for the GitHub filesystem.

use std::time::SystemTime;

/// Directory bit of a synthesized mode (`S_IFDIR`).
pub const MODE_DIR: u32 = 0o040000;

/// Type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory. Owners' repositories are always directories.
    Directory,
}

/// Unix-style permissions stored as a mode bitmask.
///
/// The remote carries no permission data, so these are always synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u32);

impl Permissions {
    /// Create permissions from a Unix mode (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Permissions reported for files (0o644 = rw-r--r--).
    #[inline]
    pub const fn default_file() -> Self {
        Self(0o644)
    }

    /// Permissions reported for directories (0o755 = rwxr-xr-x).
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o755)
    }

    /// Permissions reported for the given entry type.
    #[inline]
    pub const fn for_type(file_type: FileType) -> Self {
        match file_type {
            FileType::File => Self::default_file(),
            FileType::Directory => Self::default_dir(),
        }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::default_file()
    }
}

/// Stat-style view of a file, directory, or directory entry.
///
/// Commit timestamps and other remote metadata are not surfaced:
/// `modified` is always `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Base name of the entry.
    pub name: String,
    /// Type of the entry.
    pub file_type: FileType,
    /// Size in bytes. Only meaningful for files.
    pub size: u64,
    /// Synthesized permissions.
    pub permissions: Permissions,
    /// Last modification time. Never known.
    pub modified: Option<SystemTime>,
}

impl Metadata {
    /// Metadata for a regular file.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, FileType::File, size)
    }

    /// Metadata for a directory.
    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, FileType::Directory, 0)
    }

    fn new(name: impl Into<String>, file_type: FileType, size: u64) -> Self {
        Self {
            name: name.into(),
            file_type,
            size,
            permissions: Permissions::for_type(file_type),
            modified: None,
        }
    }

    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Full mode: permission bits, plus [`MODE_DIR`] for directories.
    ///
    /// ```rust
    /// use githubfs::{Metadata, MODE_DIR};
    ///
    /// assert_eq!(Metadata::dir("src").mode(), MODE_DIR | 0o755);
    /// assert_eq!(Metadata::file("README.md", 12).mode(), 0o644);
    /// ```
    pub fn mode(&self) -> u32 {
        match self.file_type {
            FileType::Directory => MODE_DIR | self.permissions.mode(),
            FileType::File => self.permissions.mode(),
        }
    }
}

/// A single row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (base name only).
    pub name: String,
    /// Type of the entry.
    pub file_type: FileType,
    /// Size in bytes. Repositories and sub-directories report 0.
    pub size: u64,
}

impl DirEntry {
    /// Returns `true` if the entry is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Stat-style view of the entry.
    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.name.clone(), self.file_type, self.size)
    }
}
