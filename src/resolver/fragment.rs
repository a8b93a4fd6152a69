//! URL fragment parsing for line highlights

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

static LINE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L(\d+)(?:-L(\d+))?$").expect("valid line fragment pattern"));

static DIFF_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^diff-([0-9a-fA-F]{64})(?:([LR])(\d+)(?:-([LR])(\d+))?)?$")
        .expect("valid diff fragment pattern")
});

/// 1-based, inclusive line range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: u32,
    /// `None` highlights the start line only
    pub end: Option<u32>,
}

/// Parse `L<start>` or `L<start>-L<end>`
///
/// Anything else, including line 0, yields `None` rather than an error.
pub fn parse_line_fragment(fragment: &str) -> Option<LineRange> {
    let captures = LINE_FRAGMENT.captures(fragment)?;
    let start = captures[1].parse::<u32>().ok().filter(|n| *n > 0)?;
    let end = match captures.get(2) {
        Some(end) => Some(end.as_str().parse::<u32>().ok().filter(|n| *n > 0)?),
        None => None,
    };
    Some(LineRange { start, end })
}

/// Lowercase hex SHA-256 of a file path
///
/// GitHub identifies files in diff anchors by this hash, which lets a diff
/// link be matched against a changeset fetched separately.
pub fn path_fingerprint(path: &str) -> String {
    hex::encode(Sha256::digest(path.as_bytes()))
}

/// File and highlighted lines addressed by a `#diff-…` fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffHighlightId {
    /// SHA-256 of the file path, lowercase hex
    pub file_hash: String,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
    /// Whether the lines refer to the new (right) side of the diff
    pub right: bool,
}

impl DiffHighlightId {
    pub fn new(file_hash: impl Into<String>) -> Self {
        Self {
            file_hash: file_hash.into().to_ascii_lowercase(),
            start_line: None,
            end_line: None,
            right: false,
        }
    }

    /// Parse `diff-<hash>`, optionally followed by `L12`, `R12` or a range like `R12-R14`
    pub fn parse(fragment: &str) -> Option<Self> {
        let captures = DIFF_FRAGMENT.captures(fragment)?;
        let mut id = Self::new(&captures[1]);
        if let (Some(side), Some(start)) = (captures.get(2), captures.get(3)) {
            id.right = side.as_str() == "R";
            id.start_line = start.as_str().parse().ok();
            id.end_line = captures.get(5).and_then(|end| end.as_str().parse().ok());
        }
        Some(id)
    }

    pub fn matches_path(&self, path: &str) -> bool {
        path_fingerprint(path).eq_ignore_ascii_case(&self.file_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(
            parse_line_fragment("L12"),
            Some(LineRange {
                start: 12,
                end: None
            })
        );
    }

    #[test]
    fn test_line_range() {
        assert_eq!(
            parse_line_fragment("L12-L14"),
            Some(LineRange {
                start: 12,
                end: Some(14)
            })
        );
    }

    #[test]
    fn test_malformed_fragments_are_ignored() {
        for fragment in ["L12-", "Lx", "", "12", "L12-14", "L-L3", "L0", "L3-L0", "readme"] {
            assert_eq!(parse_line_fragment(fragment), None, "fragment {:?}", fragment);
        }
    }

    #[test]
    fn test_oversized_line_number_is_ignored() {
        assert_eq!(parse_line_fragment("L99999999999"), None);
    }

    #[test]
    fn test_path_fingerprint_is_sha256_hex() {
        assert_eq!(
            path_fingerprint(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(path_fingerprint("src/app.txt").len(), 64);
    }

    #[test]
    fn test_diff_fragment_with_range() {
        let hash = path_fingerprint("src/main.rs");
        let id = DiffHighlightId::parse(&format!("diff-{}R10-R12", hash)).unwrap();
        assert_eq!(id.file_hash, hash);
        assert_eq!(id.start_line, Some(10));
        assert_eq!(id.end_line, Some(12));
        assert!(id.right);
        assert!(id.matches_path("src/main.rs"));
    }

    #[test]
    fn test_diff_fragment_hash_only_and_uppercase() {
        let hash = path_fingerprint("README.md").to_ascii_uppercase();
        let id = DiffHighlightId::parse(&format!("diff-{}", hash)).unwrap();
        assert_eq!(id.start_line, None);
        assert!(!id.right);
        assert!(id.matches_path("README.md"));
        assert!(!id.matches_path("readme.md"));
    }

    #[test]
    fn test_diff_fragment_left_line() {
        let hash = path_fingerprint("a.txt");
        let id = DiffHighlightId::parse(&format!("diff-{}L3", hash)).unwrap();
        assert_eq!(id.start_line, Some(3));
        assert_eq!(id.end_line, None);
        assert!(!id.right);
    }

    #[test]
    fn test_diff_fragment_rejects_garbage() {
        assert_eq!(DiffHighlightId::parse("diff-1234"), None);
        assert_eq!(DiffHighlightId::parse("L12"), None);
    }
}
