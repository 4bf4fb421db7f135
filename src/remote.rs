//! # Remote Collaborator
//!
//! The seam between the filesystem and whatever talks to the hosting API.
//!
//! ## Responsibility
//! - Define the two remote operations the filesystem needs ([`RemoteClient`])
//! - Define the response shapes those operations return
//! - Carry an ambient deadline into every call ([`RequestContext`])
//!
//! Transport, authentication, and rate limiting all live behind
//! [`RemoteClient`]. The filesystem never retries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::RemoteError;

/// Ambient cancellation token handed to every remote call.
///
/// Clients should give up once [`is_expired`](RequestContext::is_expired)
/// and bound their own I/O by [`remaining`](RequestContext::remaining).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context without a deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires at `deadline`.
    ///
    /// An existing earlier deadline is kept.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Self {
            deadline: Some(deadline),
        }
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` means unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns `true` once the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}

/// Derives the context for a single remote call from the handle's base context.
///
/// Invoked exactly once per remote call, so it can hand out a fresh deadline
/// each time:
///
/// ```rust
/// use githubfs::{ContextFn, RequestContext};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let per_call: ContextFn = Arc::new(|ctx: &RequestContext| ctx.with_timeout(Duration::from_secs(10)));
/// let ctx = per_call(&RequestContext::background());
/// assert!(ctx.deadline().is_some());
/// ```
pub type ContextFn = Arc<dyn Fn(&RequestContext) -> RequestContext + Send + Sync>;

/// A repository owned by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repository {
    /// Repository name (without the owner prefix).
    pub name: String,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Number of the next page, or `0` when this is the last one.
    pub next_page: u32,
}

impl<T> Page<T> {
    /// The final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: 0,
        }
    }
}

/// A single file as returned by the contents endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteFile {
    /// Base name of the file.
    pub name: String,
    /// Size in bytes as reported by the remote.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: u64,
    /// Content payload, encoded according to `encoding`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<String>,
    /// Transport encoding of `content` (`"base64"`, `""`, or `"none"`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub encoding: Option<String>,
}

/// A single row of a directory listing from the contents endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoteEntry {
    /// Base name of the entry.
    pub name: String,
    /// Entry type: `"file"`, `"dir"`, `"symlink"`, or `"submodule"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Size in bytes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: u64,
}

impl RemoteEntry {
    /// Returns `true` if the remote reports this entry as a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }
}

/// Result of fetching the contents at a path.
///
/// A well-behaved remote populates exactly one of `file` and `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents {
    /// Set when the path is a single file.
    pub file: Option<RemoteFile>,
    /// Set when the path is a directory.
    pub entries: Option<Vec<RemoteEntry>>,
}

impl Contents {
    /// A single-file response.
    pub fn file(file: RemoteFile) -> Self {
        Self {
            file: Some(file),
            entries: None,
        }
    }

    /// A directory listing response.
    pub fn dir(entries: Vec<RemoteEntry>) -> Self {
        Self {
            file: None,
            entries: Some(entries),
        }
    }
}

/// The remote operations the filesystem consumes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: one client is shared by every
/// handle derived through `sub`.
///
/// # Object Safety
///
/// This trait is object-safe and is stored as `Arc<dyn RemoteClient>`.
pub trait RemoteClient: Send + Sync {
    /// Lists repositories owned by `owner`.
    ///
    /// `page == 0` requests the first page. The returned
    /// [`Page::next_page`] is `0` on the last page.
    fn list_by_owner(
        &self,
        ctx: &RequestContext,
        owner: &str,
        page: u32,
    ) -> Result<Page<Repository>, RemoteError>;

    /// Fetches the contents at `path` in `owner/repo`.
    ///
    /// `path == ""` denotes the repository root.
    fn get_contents(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Contents, RemoteError>;
}

impl<T: RemoteClient + ?Sized> RemoteClient for Arc<T> {
    fn list_by_owner(
        &self,
        ctx: &RequestContext,
        owner: &str,
        page: u32,
    ) -> Result<Page<Repository>, RemoteError> {
        (**self).list_by_owner(ctx, owner, page)
    }

    fn get_contents(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Contents, RemoteError> {
        (**self).get_contents(ctx, owner, repo, path)
    }
}
