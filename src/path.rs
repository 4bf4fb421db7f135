//! # Path Helpers
//!
//! Slash-separated path handling for the filesystem namespace.
//!
//! ## Responsibility
//! - Decide whether a name is a well-formed relative path ([`valid_path`])
//! - Join and normalize slash-separated components
//!
//! Paths here are never OS paths. They are always `/`-separated, relative,
//! and free of `.`/`..` components once validated.

/// Reports whether `name` is a well-formed relative path.
///
/// Valid paths are unrooted, slash-separated sequences of non-empty
/// elements where no element is `.` or `..`. The special name `"."`
/// denotes the root and is valid.
///
/// # Example
///
/// ```rust
/// use githubfs::valid_path;
///
/// assert!(valid_path("."));
/// assert!(valid_path("owner/repo/README.md"));
/// assert!(!valid_path(""));
/// assert!(!valid_path("/owner"));
/// assert!(!valid_path("owner/../other"));
/// assert!(!valid_path("owner//repo"));
/// ```
pub fn valid_path(name: &str) -> bool {
    if name == "." {
        return true;
    }

    !name.is_empty()
        && name
            .split('/')
            .all(|elem| !elem.is_empty() && elem != "." && elem != "..")
}

/// Splits a path into its meaningful components, skipping empty and `.` elements.
pub(crate) fn components(name: &str) -> impl Iterator<Item = &str> {
    name.split('/').filter(|elem| !elem.is_empty() && *elem != ".")
}

/// Joins two relative paths component-wise.
///
/// Empty and `.` components are dropped, so joining onto the root (`""`)
/// or joining `"."` leaves the other side unchanged.
pub(crate) fn join_paths(base: &str, name: &str) -> String {
    components(base)
        .chain(components(name))
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns the last component of a slash-separated path.
///
/// The root path (`""`, `"/"`, `"."`) yields `"/"`.
pub(crate) fn base_name(name: &str) -> &str {
    components(name).last().unwrap_or("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_path_accepts_root() {
        assert!(valid_path("."));
    }

    #[test]
    fn valid_path_accepts_nested_names() {
        assert!(valid_path("a"));
        assert!(valid_path("a/b/c.txt"));
        assert!(valid_path("..a/b..")); // dots inside names are fine
    }

    #[test]
    fn valid_path_rejects_malformed_names() {
        for name in ["", "/", "/a", "a/", "a//b", "./a", "a/.", "..", "a/../b"] {
            assert!(!valid_path(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn join_paths_skips_empty_and_dot() {
        assert_eq!(join_paths("", "."), "");
        assert_eq!(join_paths("", "a/b"), "a/b");
        assert_eq!(join_paths("a", "."), "a");
        assert_eq!(join_paths("a/b", "c"), "a/b/c");
    }

    #[test]
    fn base_name_returns_last_component() {
        assert_eq!(base_name("/owner/repo/docs/readme.md"), "readme.md");
        assert_eq!(base_name("/owner/repo"), "repo");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name(""), "/");
    }
}
