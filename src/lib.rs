//! # githubfs
//!
//! A **read-only virtual filesystem** over the repositories hosted on GitHub.
//!
//! Paths are slash-separated and relative. The first segment names an owner,
//! the second a repository, and the rest a path inside that repository:
//!
//! ```text
//! "sagikazarmark"                        → directory of the owner's repositories
//! "sagikazarmark/locafero"               → repository root
//! "sagikazarmark/locafero/README.md"     → file
//! ```
//!
//! A handle can be pinned to an owner or repository up front (see
//! [`Options`]) or narrowed later with [`FsSub::sub`]; pinned segments are
//! then skipped when resolving paths.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use githubfs::{FsOpen, FsRead, GitHubClient, GitHubFs};
//!
//! let fs = GitHubFs::new(GitHubClient::from_env()?);
//! let readme = fs.read_to_string("sagikazarmark/locafero/README.md")?;
//! println!("{}", readme.lines().next().unwrap_or_default());
//!
//! let mut root = fs.open("sagikazarmark/locafero")?;
//! if let Some(dir) = root.as_dir_mut() {
//!     for entry in dir.read_dir(0).entries {
//!         println!("{}{}", entry.name, if entry.is_dir() { "/" } else { "" });
//!     }
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`GitHubFs`] | The filesystem handle |
//! | [`Options`] | Construction-time configuration |
//! | [`Node`] | An open handle: [`File`] or [`Dir`] |
//! | [`Dir`] | Materialized listing with a resumable cursor |
//! | [`Reference`] | (owner, repository, path) location |
//! | [`RemoteClient`] | The two remote operations the filesystem needs |
//! | [`FsError`] | Error type with operation and path context |
//! | [`Metadata`] | Stat-style file info with synthesized mode |
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FsError>`:
//!
//! ```rust
//! use githubfs::FsError;
//!
//! let err = FsError::NotFound { operation: "open", path: "/acct/proj/missing.txt".into() };
//! assert_eq!(err.to_string(), "open: not found: /acct/proj/missing.txt");
//!
//! let err = FsError::PermissionDenied { operation: "open", path: "/acct/private".into() };
//! assert_eq!(err.to_string(), "open: permission denied: /acct/private");
//! ```
//!
//! Remote 404s become [`FsError::NotFound`], 401/403 become
//! [`FsError::PermissionDenied`], and every other remote failure is passed
//! through unchanged as [`FsError::Remote`]. Nothing is retried or cached.
//!
//! ---
//!
//! ## Thread Safety
//!
//! [`GitHubFs`] is `Send + Sync` and cheap to clone. Open handles are not
//! shared: [`Dir::read_dir`] takes `&mut self`.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Metadata`], [`DirEntry`], wire models; `FsExtJson` |
//! | `github` | `GitHubClient`, a blocking REST implementation of [`RemoteClient`] |

// Private modules
mod error;
mod ext;
mod fs;
mod node;
mod options;
mod path;
mod reference;
mod remote;
mod traits;
mod types;

#[cfg(feature = "github")]
mod github;

// Public re-exports - error types
pub use error::{FsError, RemoteError};

// Public re-exports - core types
pub use types::{DirEntry, FileType, MODE_DIR, Metadata, Permissions};

// Public re-exports - handles
pub use node::{Dir, DirBatch, File, Node};

// Public re-exports - resolution
pub use path::valid_path;
pub use reference::Reference;

// Public re-exports - filesystem
pub use fs::GitHubFs;
pub use options::Options;
pub use traits::{Fs, FsDir, FsOpen, FsRead, FsSub, ReadDirIter};

// Public re-exports - remote collaborator
pub use remote::{
    Contents, ContextFn, Page, RemoteClient, RemoteEntry, RemoteFile, Repository, RequestContext,
};

// Public re-exports - infrastructure
pub use ext::FsExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsExtJson;

#[cfg(feature = "github")]
pub use github::{DEFAULT_API_URL, GitHubClient};
