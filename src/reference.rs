//! # Reference Resolver
//!
//! Maps the flat filesystem namespace onto the two-level remote model.
//!
//! ## Responsibility
//! - Represent a logical location as an (owner, repository, path) triple
//! - Extend a location by joining further path segments
//! - Validate a location before any remote call is made
//!
//! ## Segment Consumption
//!
//! ```text
//! unscoped  + "acct/proj/docs/readme.md"  →  (acct, proj, docs/readme.md)
//! (acct)    + "proj/docs"                 →  (acct, proj, docs)
//! (acct,proj) + "docs/readme.md"          →  (acct, proj, docs/readme.md)
//! ```

use std::fmt;

use crate::FsError;
use crate::path::{components, join_paths, valid_path};

/// A location in the remote content tree.
///
/// Invariants (upheld by [`join`](Reference::join)):
/// - a non-empty repository implies a non-empty owner
/// - a non-empty path implies a non-empty owner and repository
///
/// References are immutable values. Joining produces a new reference.
///
/// # Example
///
/// ```rust
/// use githubfs::Reference;
///
/// let root = Reference::default();
/// let r = root.join("acct/proj/docs/readme.md");
/// assert_eq!(r.owner(), "acct");
/// assert_eq!(r.repository(), "proj");
/// assert_eq!(r.path(), "docs/readme.md");
/// assert_eq!(r.to_string(), "/acct/proj/docs/readme.md");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reference {
    owner: String,
    repository: String,
    path: String,
}

impl Reference {
    /// A reference pinned to an owner only.
    pub fn owner_only(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    /// A reference pinned to the root of a repository.
    pub fn repository_root(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            path: String::new(),
        }
    }

    /// The account or organization namespace. Empty for the root.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name. Empty when only the owner is known.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The path inside the repository. Empty for the repository root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns `true` if both owner and repository are pinned.
    pub fn is_repository_scoped(&self) -> bool {
        !self.owner.is_empty() && !self.repository.is_empty()
    }

    pub(crate) fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }

    pub(crate) fn set_repository(&mut self, repository: &str) {
        self.repository = repository.to_string();
    }

    pub(crate) fn clear_repository(&mut self) {
        self.repository.clear();
    }

    /// Extends this reference by a well-formed relative path.
    ///
    /// `name` must already satisfy [`valid_path`]. `""` and `"."` leave
    /// the reference unchanged.
    ///
    /// Once owner and repository are pinned, `name` is appended to the
    /// path. Otherwise its segments fill the owner slot, then the
    /// repository slot, and whatever remains becomes the path.
    pub fn join(&self, name: &str) -> Reference {
        let mut next = self.clone();

        if self.is_repository_scoped() {
            next.path = join_paths(&self.path, name);
            return next;
        }

        let mut segments = components(name);

        if next.owner.is_empty() {
            if let Some(owner) = segments.next() {
                next.owner = owner.to_string();
            }
        }

        if next.repository.is_empty() && !next.owner.is_empty() {
            if let Some(repository) = segments.next() {
                next.repository = repository.to_string();
            }
        }

        let rest = segments.collect::<Vec<_>>().join("/");
        if !rest.is_empty() {
            next.path = join_paths(&next.path, &rest);
        }

        next
    }

    /// Checks that this reference can be resolved by `operation`.
    ///
    /// # Errors
    ///
    /// - [`FsError::OwnerMissing`] if no owner is pinned
    /// - [`FsError::InvalidPath`] if the path is not well-formed
    ///
    /// # Panics
    ///
    /// If the reference invariant is broken. [`join`](Reference::join)
    /// never produces such a reference.
    pub fn validate(&self, operation: &'static str) -> Result<(), FsError> {
        assert!(
            !((self.owner.is_empty() && !self.repository.is_empty())
                || ((self.owner.is_empty() || self.repository.is_empty())
                    && !self.path.is_empty())),
            "invalid reference {self:?}: repository or path set without its parent"
        );

        if self.owner.is_empty() {
            return Err(FsError::OwnerMissing {
                operation,
                path: String::new(),
            });
        }

        if !self.path.is_empty() && !valid_path(&self.path) {
            return Err(FsError::InvalidPath {
                operation,
                path: self.path.clone(),
            });
        }

        Ok(())
    }
}

/// Renders the canonical, root-anchored form `/owner/repository/path`.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.owner.as_str(), self.repository.as_str(), self.path.as_str()]
            .into_iter()
            .flat_map(components)
            .collect();

        write!(f, "/{}", parts.join("/"))
    }
}
