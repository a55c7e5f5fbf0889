//! Link classification
//!
//! The mirror renders a preview card for single source files, served under
//! `/{author}/{repository}/blob/{branch}/{path}`. Every other page is passed
//! through to GitHub as-is.
//!
//! A preview shows at most [`MAX_PREVIEW_LINES`] lines, picked with a
//! `?lines=<from>-<to>` query (1-based, inclusive).

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Longest code excerpt the mirror renders
pub const MAX_PREVIEW_LINES: usize = 50;

/// Line range a source-file preview will show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewLines {
    pub from: usize,
    pub to: usize,
}

impl Default for PreviewLines {
    fn default() -> Self {
        Self {
            from: 1,
            to: MAX_PREVIEW_LINES,
        }
    }
}

impl PreviewLines {
    /// Read `lines` from a raw query string, clamped to the preview size
    ///
    /// A missing or malformed value gives the first [`MAX_PREVIEW_LINES`] lines.
    /// A bare `<from>` shows as many lines as fit from there.
    pub fn from_query(query: &str) -> Self {
        let requested = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "lines")
            .and_then(|(_, value)| parse_range(&value));

        match requested {
            Some((from, to)) => Self::clamped(from, to),
            None => Self::default(),
        }
    }

    fn clamped(from: usize, to: Option<usize>) -> Self {
        let from = from.max(1);
        let last = from.saturating_add(MAX_PREVIEW_LINES - 1);
        let to = to.unwrap_or(last).clamp(from, last);
        Self { from, to }
    }
}

impl std::fmt::Display for PreviewLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lines {}-{}", self.from, self.to)
    }
}

fn parse_range(value: &str) -> Option<(usize, Option<usize>)> {
    match value.split_once('-') {
        Some((from, to)) => Some((from.trim().parse().ok()?, Some(to.trim().parse().ok()?))),
        None => Some((value.trim().parse().ok()?, None)),
    }
}

/// What the mirror will do with a rewritten link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkKind {
    /// A single file in a repository; the mirror renders a code preview
    SourceFile {
        author: String,
        repository: String,
        branch: String,
        path: String,
        lines: PreviewLines,
    },
    /// Any other page
    Other,
}

impl LinkKind {
    /// Classify the part of a link after the host (and port)
    pub fn classify(remainder: &str) -> Self {
        let (path, query) = split_path_and_query(remainder);
        let Some(path) = path.strip_prefix('/') else {
            return Self::Other;
        };

        let mut parts = path.splitn(5, '/');
        let (Some(author), Some(repository), Some("blob"), Some(branch), Some(file)) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Self::Other;
        };

        if [author, repository, branch, file].iter().any(|s| s.is_empty()) {
            return Self::Other;
        }

        Self::SourceFile {
            author: author.to_string(),
            repository: repository.to_string(),
            branch: branch.to_string(),
            path: file.to_string(),
            lines: PreviewLines::from_query(query),
        }
    }

    /// Decoded file name for source files, e.g. `main.rs`
    pub fn file_name(&self) -> Option<String> {
        match self {
            Self::SourceFile { path, .. } => {
                let last = path.rsplit('/').find(|s| !s.is_empty())?;
                Some(percent_decode_str(last).decode_utf8_lossy().into_owned())
            }
            Self::Other => None,
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceFile {
                author,
                repository,
                branch,
                lines,
                ..
            } => {
                let name = self.file_name().unwrap_or_else(|| "<undefined>".into());
                write!(
                    f,
                    "source file {} · {}/{}@{} ({})",
                    name, author, repository, branch, lines
                )
            }
            Self::Other => write!(f, "other page"),
        }
    }
}

/// Split into path and query; the fragment is dropped
fn split_path_and_query(remainder: &str) -> (&str, &str) {
    let without_fragment = match remainder.split_once('#') {
        Some((before, _)) => before,
        None => remainder,
    };
    without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file() {
        let kind = LinkKind::classify("/rust-lang/rust/blob/master/src/main.rs");
        assert_eq!(
            kind,
            LinkKind::SourceFile {
                author: "rust-lang".into(),
                repository: "rust".into(),
                branch: "master".into(),
                path: "src/main.rs".into(),
                lines: PreviewLines { from: 1, to: 50 },
            }
        );
        assert_eq!(kind.file_name().as_deref(), Some("main.rs"));
    }

    #[test]
    fn test_source_file_with_query_and_fragment() {
        let kind = LinkKind::classify("/a/b/blob/main/lib.rs?plain=1#L3-L9");
        assert!(matches!(kind, LinkKind::SourceFile { ref path, .. } if path == "lib.rs"));
    }

    #[test]
    fn test_percent_encoded_file_name() {
        let kind = LinkKind::classify("/a/b/blob/main/docs/hello%20world.md");
        assert_eq!(kind.file_name().as_deref(), Some("hello world.md"));
    }

    #[test]
    fn test_other_pages() {
        assert_eq!(LinkKind::classify(""), LinkKind::Other);
        assert_eq!(LinkKind::classify("/"), LinkKind::Other);
        assert_eq!(LinkKind::classify("/rust-lang/rust"), LinkKind::Other);
        assert_eq!(LinkKind::classify("/rust-lang/rust/tree/master/src"), LinkKind::Other);
        assert_eq!(LinkKind::classify("/rust-lang/rust/blob/master"), LinkKind::Other);
        assert_eq!(LinkKind::classify("/rust-lang/rust/blob/master/"), LinkKind::Other);
        assert_eq!(LinkKind::classify("?tab=repositories"), LinkKind::Other);
        assert_eq!(LinkKind::classify(".company.com/a/b/blob/m/f"), LinkKind::Other);
    }

    #[test]
    fn test_display() {
        let kind = LinkKind::classify("/me/proj/blob/dev/a/b.txt");
        assert_eq!(kind.to_string(), "source file b.txt · me/proj@dev (lines 1-50)");
        assert_eq!(LinkKind::Other.to_string(), "other page");
    }

    fn lines_of(remainder: &str) -> PreviewLines {
        match LinkKind::classify(remainder) {
            LinkKind::SourceFile { lines, .. } => lines,
            LinkKind::Other => panic!("not a source file: {remainder}"),
        }
    }

    #[test]
    fn test_requested_lines() {
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=10-20"),
            PreviewLines { from: 10, to: 20 }
        );
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?theme=dark&lines=3-9#L1"),
            PreviewLines { from: 3, to: 9 }
        );
    }

    #[test]
    fn test_lines_clamped_to_preview_size() {
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=100-400"),
            PreviewLines { from: 100, to: 149 }
        );
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=0-10"),
            PreviewLines { from: 1, to: 10 }
        );
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=20-5"),
            PreviewLines { from: 20, to: 20 }
        );
    }

    #[test]
    fn test_lines_open_ended_and_malformed() {
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=7"),
            PreviewLines { from: 7, to: 56 }
        );
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=abc"),
            PreviewLines::default()
        );
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?plain=1"),
            PreviewLines::default()
        );
    }

    #[test]
    fn test_percent_encoded_range() {
        assert_eq!(
            lines_of("/a/b/blob/main/lib.rs?lines=5%2D8"),
            PreviewLines { from: 5, to: 8 }
        );
    }
}
