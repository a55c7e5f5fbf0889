//! Copy command - Rewrite a GitHub link and put it on the clipboard

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils;
use crate::config::Mirror;
use crate::host::{ClipboardSink, DryRunClipboard, SystemClipboard, UrlSource};
use crate::mirror::{self, Outcome, PrefixBoundary};

/// Copy options
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOptions {
    /// Mirror to rewrite to
    pub mirror: Mirror,
    /// Don't touch the clipboard, only report
    pub dry_run: bool,
    /// Print only the rewritten link on stdout
    pub print: bool,
    /// Hold the clipboard until another application takes it over
    pub wait: bool,
}

/// Execute the copy command
pub fn execute(url: Option<String>, options: CopyOptions) -> Result<()> {
    let mut source = utils::url_source(url);

    let outcome = if options.dry_run {
        copy_with(source.as_mut(), &mut DryRunClipboard::new(), &options)?
    } else {
        copy_with(
            source.as_mut(),
            &mut SystemClipboard::new(options.wait),
            &options,
        )?
    };

    if options.print {
        if let Outcome::Copied { rewritten, .. } = &outcome {
            println!("{}", rewritten);
        }
    } else {
        println!("{}", format_outcome(&outcome, options.dry_run));
    }

    Ok(())
}

/// Run the rewriter against the given URL source and clipboard
pub fn copy_with<S, C>(source: &mut S, clipboard: &mut C, options: &CopyOptions) -> Result<Outcome>
where
    S: UrlSource + ?Sized,
    C: ClipboardSink + ?Sized,
{
    mirror::run(&options.mirror.rule(), source, clipboard).context("Failed to copy rewritten link")
}

/// Human-readable summary of a rewriter run
pub fn format_outcome(outcome: &Outcome, dry_run: bool) -> String {
    match outcome {
        Outcome::Copied {
            rewritten,
            boundary,
        } => {
            let label = if dry_run { "Would copy:" } else { "Copied:" };
            let mut out = format!("{} {}", label.green(), rewritten);
            if *boundary == PrefixBoundary::Loose {
                out.push_str(&format!(
                    "\n{} the link only shares a prefix with the GitHub host",
                    "Note:".yellow()
                ));
            }
            out
        }
        Outcome::Skipped { url } => format!("{}", format!("Not a GitHub link: {}", url).dimmed()),
    }
}
