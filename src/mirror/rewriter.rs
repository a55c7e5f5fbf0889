//! The rewriter: read the page URL, rewrite it, hand it to the clipboard

use anyhow::Result;

use super::rule::{PrefixBoundary, RewriteRule};
use crate::host::{ClipboardSink, UrlSource};

/// Result of one rewriter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The link matched; the rewritten link was written to the clipboard
    Copied {
        rewritten: String,
        boundary: PrefixBoundary,
    },
    /// The link does not start with the source prefix; nothing was written
    Skipped { url: String },
}

/// Run the rewriter once
///
/// A link that doesn't match is not an error. Clipboard failures are returned
/// as-is, without retry.
pub fn run<S, C>(rule: &RewriteRule, source: &mut S, clipboard: &mut C) -> Result<Outcome>
where
    S: UrlSource + ?Sized,
    C: ClipboardSink + ?Sized,
{
    let url = source.current_url()?;

    let Some(rewrite) = rule.apply(&url) else {
        tracing::debug!(%url, prefix = rule.source_prefix(), "link does not match, nothing to do");
        return Ok(Outcome::Skipped { url });
    };

    let host = rewrite.actual_host();
    if rewrite.boundary == PrefixBoundary::Loose && host != rule.source_host() {
        let host = host.unwrap_or_default();
        tracing::warn!(
            %url,
            %host,
            "prefix matched in the middle of a host name; rewriting anyway"
        );
    }

    clipboard.write(&rewrite.rewritten)?;
    tracing::info!(from = %url, to = %rewrite.rewritten, "copied rewritten link");

    Ok(Outcome::Copied {
        boundary: rewrite.boundary,
        rewritten: rewrite.rewritten,
    })
}
