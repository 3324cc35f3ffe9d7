//! Path sanitization: space encoding and root-slash handling.

/// Encode literal spaces in a path as `%20`.
///
/// No other percent-encoding is performed; everything else passes through
/// verbatim. An empty result means the canonical form carries no `/` at all
/// (the root-slash rule lives in the canonicalizer).
pub fn sanitize_path(path: &str) -> String {
    path.replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_percent20() {
        assert_eq!(sanitize_path("my docs/file one.txt"), "my%20docs/file%20one.txt");
    }

    #[test]
    fn empty_path_stays_empty() {
        assert_eq!(sanitize_path(""), "");
    }

    #[test]
    fn everything_else_is_verbatim() {
        assert_eq!(sanitize_path("a/b?q=1&x=2#frag"), "a/b?q=1&x=2#frag");
        assert_eq!(sanitize_path("already%20encoded"), "already%20encoded");
    }
}
