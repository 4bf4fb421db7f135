//! # Filesystem Traits
//!
//! The read-only capability set a repository filesystem exposes.
//!
//! ## Trait Layers
//!
//! ```text
//! FsOpen (required: open)
//!    ├── FsRead  (read, read_to_string, metadata, open_read)  blanket
//!    ├── FsDir   (read_dir)                                   blanket
//!    └── FsSub   (sub)                                        implemented
//!
//! FsOpen + FsRead + FsDir = Fs
//! ```
//!
//! Implement [`FsOpen`] and the path-based traits come for free. There are
//! no write traits: the remote is read-only.
//!
//! ## Object Safety
//!
//! [`FsOpen`] is object-safe, so filesystems can be handled as trait objects:
//!
//! ```rust
//! use githubfs::FsOpen;
//!
//! fn process(fs: &dyn FsOpen) {
//!     let _ = fs.open("acct/proj/README.md");
//! }
//! ```

mod fs_dir;
mod fs_open;
mod fs_read;
mod fs_sub;

pub use fs_dir::{FsDir, ReadDirIter};
pub use fs_open::FsOpen;
pub use fs_read::FsRead;
pub use fs_sub::FsSub;

/// Read-only filesystem: open, read and list by path.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type that implements [`FsOpen`].
///
/// # Example
///
/// ```rust
/// use githubfs::{Fs, FsError};
///
/// // Generic function that works with any Fs implementation
/// fn collect_markdown<B: Fs>(fs: &B, dir: &str) -> Result<Vec<String>, FsError> {
///     let mut docs = Vec::new();
///     for entry in fs.read_dir(dir)? {
///         if !entry.is_dir() && entry.name.ends_with(".md") {
///             docs.push(fs.read_to_string(&format!("{dir}/{}", entry.name))?);
///         }
///     }
///     Ok(docs)
/// }
/// ```
pub trait Fs: FsOpen + FsRead + FsDir {}

// Blanket implementation - any type implementing all three gets Fs for free
impl<T: FsOpen + FsRead + FsDir> Fs for T {}
