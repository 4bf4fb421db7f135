//! # Open Handles
//!
//! What [`FsOpen::open`](crate::FsOpen::open) hands back.
//!
//! ## Overview
//!
//! ```text
//! Node ─┬─ File  (name, size, content stream)
//!       └─ Dir   (name, materialized entries, cursor)
//! ```
//!
//! Both shapes support `stat`, `close`, and `read`. Only [`Dir`] supports
//! incremental listing through [`Dir::read_dir`].

use std::fmt;
use std::io::{self, Read};

use crate::{DirEntry, FsError, Metadata};

/// An open regular file.
///
/// Owns its content stream. Closing consumes the handle, so the stream is
/// released exactly once.
pub struct File {
    name: String,
    size: u64,
    content: Box<dyn Read + Send>,
}

impl File {
    /// Creates a file handle over an in-memory content stream.
    pub fn new(name: impl Into<String>, size: u64, content: Box<dyn Read + Send>) -> Self {
        Self {
            name: name.into(),
            size,
            content,
        }
    }

    /// Base name of the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size reported by the remote.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Stat-style view of the file.
    pub fn stat(&self) -> Metadata {
        Metadata::file(self.name.clone(), self.size)
    }

    /// Releases the content stream.
    pub fn close(self) -> Result<(), FsError> {
        Ok(())
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("File")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// One batch returned by [`Dir::read_dir`].
///
/// `end_of_dir` is the "no more entries" signal. It can accompany a
/// non-empty batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirBatch {
    /// Entries in listing order.
    pub entries: Vec<DirEntry>,
    /// Set when the caller asked for more entries than remained.
    pub end_of_dir: bool,
}

impl DirBatch {
    /// Number of entries in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the batch holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An open directory with a fully materialized listing.
///
/// No remote calls happen after the directory is opened. The read cursor is
/// private, unsynchronized state: `read_dir` takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Dir {
    name: String,
    entries: Vec<DirEntry>,
    offset: usize,
}

impl Dir {
    /// Creates a directory handle positioned at its first entry.
    pub fn new(name: impl Into<String>, entries: Vec<DirEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
            offset: 0,
        }
    }

    /// Base name of the directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stat-style view of the directory.
    pub fn stat(&self) -> Metadata {
        Metadata::dir(self.name.clone())
    }

    /// Number of entries not yet returned by [`read_dir`](Dir::read_dir).
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.offset
    }

    /// Reads the next entries.
    ///
    /// - `n == 0` drains everything from the cursor on and never signals
    ///   end-of-directory, even when nothing is left.
    /// - `n > 0` returns at most `n` entries. The batch signals
    ///   end-of-directory when nothing remained, or when it drained the
    ///   listing while fewer than `n` entries were left.
    ///
    /// # Example
    ///
    /// ```rust
    /// use githubfs::{Dir, DirEntry, FileType};
    ///
    /// let entry = |name: &str| DirEntry { name: name.into(), file_type: FileType::File, size: 1 };
    /// let mut dir = Dir::new("docs", vec![entry("a"), entry("b"), entry("c")]);
    ///
    /// let first = dir.read_dir(2);
    /// assert_eq!(first.len(), 2);
    /// assert!(!first.end_of_dir);
    ///
    /// let second = dir.read_dir(2);
    /// assert_eq!(second.len(), 1);
    /// assert!(second.end_of_dir);
    ///
    /// let third = dir.read_dir(2);
    /// assert!(third.is_empty() && third.end_of_dir);
    /// ```
    pub fn read_dir(&mut self, n: usize) -> DirBatch {
        let remaining = self.remaining();

        if n == 0 {
            let entries = self.entries[self.offset..].to_vec();
            self.offset = self.entries.len();
            return DirBatch {
                entries,
                end_of_dir: false,
            };
        }

        if remaining == 0 {
            return DirBatch {
                entries: Vec::new(),
                end_of_dir: true,
            };
        }

        let count = n.min(remaining);
        let entries = self.entries[self.offset..self.offset + count].to_vec();
        self.offset += count;

        DirBatch {
            entries,
            end_of_dir: self.offset >= self.entries.len() && n > count,
        }
    }

    /// Drains every remaining entry. Same as `read_dir(0)`.
    pub fn read_dir_all(&mut self) -> Vec<DirEntry> {
        self.read_dir(0).entries
    }

    /// Consumes the handle, returning the entries not yet read.
    pub fn into_entries(mut self) -> Vec<DirEntry> {
        self.entries.split_off(self.offset)
    }

    /// Releases the directory. Nothing to free.
    pub fn close(self) -> Result<(), FsError> {
        Ok(())
    }
}

/// Directories read as an immediately exhausted stream.
impl Read for Dir {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }
}

/// An open filesystem handle: either a regular file or a directory.
#[derive(Debug)]
pub enum Node {
    /// A regular file.
    File(File),
    /// A directory.
    Dir(Dir),
}

impl Node {
    /// Stat-style view of the handle.
    pub fn stat(&self) -> Metadata {
        match self {
            Node::File(file) => file.stat(),
            Node::Dir(dir) => dir.stat(),
        }
    }

    /// Base name of the handle.
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Dir(dir) => dir.name(),
        }
    }

    /// Returns `true` for directories.
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// Mutable access to the directory cursor, if this is a directory.
    pub fn as_dir_mut(&mut self) -> Option<&mut Dir> {
        match self {
            Node::Dir(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// Converts into a file handle, if this is a file.
    pub fn into_file(self) -> Option<File> {
        match self {
            Node::File(file) => Some(file),
            Node::Dir(_) => None,
        }
    }

    /// Converts into a directory handle, if this is a directory.
    pub fn into_dir(self) -> Option<Dir> {
        match self {
            Node::Dir(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    /// Releases the handle.
    pub fn close(self) -> Result<(), FsError> {
        match self {
            Node::File(file) => file.close(),
            Node::Dir(dir) => dir.close(),
        }
    }
}

impl Read for Node {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Node::File(file) => file.read(buf),
            Node::Dir(dir) => dir.read(buf),
        }
    }
}
