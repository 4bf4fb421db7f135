//! Construction-time configuration for [`GitHubFs`].

use std::fmt;
use std::sync::Arc;

use crate::{ContextFn, GitHubFs, Reference, RemoteClient, RequestContext};

/// Everything a [`GitHubFs`] handle is configured with.
///
/// Applied once by [`build`](Options::build). The handle never changes
/// afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use githubfs::{GitHubClient, Options};
/// use std::time::Duration;
///
/// let fs = Options::new(GitHubClient::from_env()?)
///     .repository("sagikazarmark", "locafero")
///     .context_fn(|ctx| ctx.with_timeout(Duration::from_secs(30)))
///     .build();
/// ```
pub struct Options {
    reference: Reference,
    client: Arc<dyn RemoteClient>,
    context: RequestContext,
    context_fn: Option<ContextFn>,
}

impl Options {
    /// Starts from an unscoped configuration around `client`.
    pub fn new(client: impl RemoteClient + 'static) -> Self {
        Self::shared(Arc::new(client))
    }

    /// Like [`new`](Options::new), for a client that is already shared.
    pub fn shared(client: Arc<dyn RemoteClient>) -> Self {
        Self {
            reference: Reference::default(),
            client,
            context: RequestContext::background(),
            context_fn: None,
        }
    }

    /// Pins the owner. An empty owner is ignored.
    pub fn owner(mut self, owner: &str) -> Self {
        if !owner.is_empty() {
            self.reference.set_owner(owner);
        }
        self
    }

    /// Pins the owner and repository. Empty values are ignored.
    ///
    /// A repository needs an owner, pinned here or through
    /// [`owner`](Options::owner). If none is pinned by the time
    /// [`build`](Options::build) runs, the repository is ignored with a
    /// warning and the handle stays unscoped: `open("acct")` then lists the
    /// repositories of `acct`.
    pub fn repository(mut self, owner: &str, repository: &str) -> Self {
        if !owner.is_empty() {
            self.reference.set_owner(owner);
        }
        if !repository.is_empty() {
            self.reference.set_repository(repository);
        }
        self
    }

    /// Sets the base context every per-call context is derived from.
    pub fn context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the function deriving a fresh context for each remote call.
    pub fn context_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestContext) -> RequestContext + Send + Sync + 'static,
    {
        self.context_fn = Some(Arc::new(f));
        self
    }

    /// Builds the filesystem handle.
    ///
    /// A repository pinned without an owner cannot be resolved and is dropped.
    pub fn build(self) -> GitHubFs {
        let mut reference = self.reference;

        if reference.owner().is_empty() && !reference.repository().is_empty() {
            tracing::warn!(
                repository = reference.repository(),
                "repository configured without an owner; ignoring it"
            );
            reference.clear_repository();
        }

        let context_fn = self
            .context_fn
            .unwrap_or_else(|| Arc::new(|ctx: &RequestContext| *ctx));

        GitHubFs::from_parts(reference, self.client, self.context, context_fn)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("reference", &self.reference)
            .field("context", &self.context)
            .field("context_fn", &self.context_fn.is_some())
            .finish_non_exhaustive()
    }
}
