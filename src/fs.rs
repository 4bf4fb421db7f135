//! # Filesystem Façade
//!
//! [`GitHubFs`] resolves paths against its pinned [`Reference`] and
//! dispatches to the remote.
//!
//! ## Control Flow
//!
//! ```text
//! open(name) ─▶ valid_path? ─▶ reference.join(name) ─▶ validate
//!                                        │
//!                 ┌──────────────────────┴───────────────────────┐
//!          no repository                                    repository
//!                 ▼                                              ▼
//!      list_repositories(owner)                        fetch_content(ref)
//!      (paginated, fully eager)                   (single file or listing)
//! ```
//!
//! Nothing is cached: every `open` performs fresh remote calls.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::translate;
use crate::path::{base_name, valid_path};
use crate::{
    ContextFn, Dir, DirEntry, File, FileType, FsError, FsOpen, FsSub, Node, Options, Reference,
    RemoteClient, RemoteFile, RequestContext,
};

/// Read-only filesystem over repository contents.
///
/// Cloning is cheap: handles share the remote client and the context
/// derivation function. Handles hold no per-request state and can be used
/// from several threads at once.
///
/// # Path Namespace
///
/// | Pinned reference | `open("a/b/c")` resolves to |
/// |------------------|-----------------------------|
/// | none | owner `a`, repository `b`, path `c` |
/// | owner `o` | owner `o`, repository `a`, path `b/c` |
/// | owner `o`, repository `r` | owner `o`, repository `r`, path `a/b/c` |
#[derive(Clone)]
pub struct GitHubFs {
    reference: Reference,
    client: Arc<dyn RemoteClient>,
    context: RequestContext,
    context_fn: ContextFn,
}

impl GitHubFs {
    /// An unscoped filesystem over `client`.
    ///
    /// Use [`Options`] to pin an owner or repository up front.
    pub fn new(client: impl RemoteClient + 'static) -> Self {
        Options::new(client).build()
    }

    pub(crate) fn from_parts(
        reference: Reference,
        client: Arc<dyn RemoteClient>,
        context: RequestContext,
        context_fn: ContextFn,
    ) -> Self {
        Self {
            reference,
            client,
            context,
            context_fn,
        }
    }

    /// The reference every path is resolved against.
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Derives the context for one remote call.
    pub(crate) fn call_context(&self) -> RequestContext {
        (self.context_fn)(&self.context)
    }

    fn clone_with(&self, reference: Reference) -> Self {
        Self {
            reference,
            ..self.clone()
        }
    }

    /// Lists every repository of `owner` as a directory.
    ///
    /// Pages are accumulated before returning; a failure on any page fails
    /// the whole listing.
    fn list_repositories(&self, owner: &str) -> Result<Dir, FsError> {
        let diagnostic_path = format!("/{owner}");
        let mut entries = Vec::new();
        let mut page = 0;

        loop {
            debug!(owner, page, "listing repositories");

            let listing = self
                .client
                .list_by_owner(&self.call_context(), owner, page)
                .map_err(|e| translate(e, "open", &diagnostic_path))?;

            entries.extend(listing.items.into_iter().map(|repo| DirEntry {
                name: repo.name,
                file_type: FileType::Directory,
                size: 0,
            }));

            if listing.next_page == 0 {
                break;
            }
            page = listing.next_page;
        }

        debug!(owner, repositories = entries.len(), "listed repositories");
        Ok(Dir::new(owner, entries))
    }

    /// Fetches the file or directory `reference` points at.
    fn fetch_content(&self, reference: &Reference) -> Result<Node, FsError> {
        let canonical = reference.to_string();

        debug!(
            owner = reference.owner(),
            repository = reference.repository(),
            path = reference.path(),
            "fetching contents"
        );

        let contents = self
            .client
            .get_contents(
                &self.call_context(),
                reference.owner(),
                reference.repository(),
                reference.path(),
            )
            .map_err(|e| translate(e, "open", &canonical))?;

        if let Some(file) = contents.file {
            let size = file.size;
            let name = file.name.clone();
            let bytes = decode_content(file, &canonical)?;
            return Ok(Node::File(File::new(
                name,
                size,
                Box::new(Cursor::new(bytes)),
            )));
        }

        if let Some(items) = contents.entries {
            let entries = items
                .into_iter()
                .map(|item| DirEntry {
                    file_type: if item.is_dir() {
                        FileType::Directory
                    } else {
                        FileType::File
                    },
                    name: item.name,
                    size: item.size,
                })
                .collect();
            return Ok(Node::Dir(Dir::new(base_name(&canonical), entries)));
        }

        Err(FsError::InvalidResponse { path: canonical })
    }
}

impl FsOpen for GitHubFs {
    fn open(&self, name: &str) -> Result<Node, FsError> {
        if !valid_path(name) {
            return Err(FsError::InvalidPath {
                operation: "open",
                path: name.to_string(),
            });
        }

        let reference = self.reference.join(name);
        reference.validate("open")?;

        if reference.repository().is_empty() {
            return self.list_repositories(reference.owner()).map(Node::Dir);
        }

        self.fetch_content(&reference)
    }
}

impl FsSub for GitHubFs {
    type Sub = GitHubFs;

    /// Only `dir`'s well-formedness is checked here. Whether the derived
    /// reference resolves is reported by the first `open` through it.
    fn sub(&self, dir: &str) -> Result<GitHubFs, FsError> {
        if !valid_path(dir) {
            return Err(FsError::InvalidPath {
                operation: "sub",
                path: dir.to_string(),
            });
        }

        Ok(self.clone_with(self.reference.join(dir)))
    }
}

impl fmt::Debug for GitHubFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubFs")
            .field("reference", &self.reference)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Decodes the transport encoding of a file payload.
fn decode_content(file: RemoteFile, path: &str) -> Result<Vec<u8>, FsError> {
    let invalid = |details: String| FsError::InvalidData {
        path: path.to_string(),
        details,
    };

    match file.encoding.as_deref().unwrap_or("") {
        "base64" => {
            let content = file
                .content
                .ok_or_else(|| invalid("malformed response: base64 encoding of null content".into()))?;
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(compact)
                .map_err(|e| invalid(format!("base64 decode failed: {e}")))
        }
        "" => Ok(file.content.unwrap_or_default().into_bytes()),
        "none" => Err(invalid(
            "unsupported content encoding: none (file is likely larger than 1 MB)".into(),
        )),
        other => Err(invalid(format!("unsupported content encoding: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_file(content: Option<&str>, encoding: Option<&str>) -> RemoteFile {
        RemoteFile {
            name: "f".into(),
            size: 0,
            content: content.map(String::from),
            encoding: encoding.map(String::from),
        }
    }

    #[test]
    fn decode_base64_ignores_line_breaks() {
        let file = remote_file(Some("aGVs\nbG8g\nd29y\nbGQ=\n"), Some("base64"));
        assert_eq!(decode_content(file, "/o/r/f").unwrap(), b"hello world");
    }

    #[test]
    fn decode_base64_without_content_fails() {
        let err = decode_content(remote_file(None, Some("base64")), "/o/r/f").unwrap_err();
        assert!(matches!(err, FsError::InvalidData { .. }));
    }

    #[test]
    fn decode_base64_garbage_fails() {
        let err = decode_content(remote_file(Some("***"), Some("base64")), "/o/r/f").unwrap_err();
        match err {
            FsError::InvalidData { path, .. } => assert_eq!(path, "/o/r/f"),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn decode_plain_content() {
        let file = remote_file(Some("raw"), None);
        assert_eq!(decode_content(file, "/o/r/f").unwrap(), b"raw");
        let file = remote_file(None, Some(""));
        assert!(decode_content(file, "/o/r/f").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_none_and_unknown_encodings() {
        let err = decode_content(remote_file(Some(""), Some("none")), "/o/r/big").unwrap_err();
        assert!(err.to_string().contains("unsupported content encoding: none"));

        let err = decode_content(remote_file(Some(""), Some("utf-16")), "/o/r/f").unwrap_err();
        assert!(err.to_string().contains("utf-16"));
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }

    #[test]
    fn github_fs_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GitHubFs>();
    }
}
