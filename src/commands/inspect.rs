//! Inspect command - Show how a link would be rewritten, without copying it

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::utils;
use crate::config::Mirror;
use crate::mirror::{LinkKind, PrefixBoundary};

/// Everything known about a link and its rewrite
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub url: String,
    pub mirror: Mirror,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<PrefixBoundary>,
    /// Host the link really points at, reported for loose matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkKind>,
}

impl Inspection {
    /// Loose match whose real host isn't the one in the source prefix
    pub fn points_elsewhere(&self) -> bool {
        self.boundary == Some(PrefixBoundary::Loose)
            && self.host != self.mirror.rule().source_host()
    }
}

/// Inspect a single link against a mirror
pub fn inspect(url: &str, mirror: Mirror) -> Inspection {
    let rule = mirror.rule();
    let Some(rewrite) = rule.apply(url) else {
        return Inspection {
            url: url.to_string(),
            mirror,
            matched: false,
            rewritten: None,
            boundary: None,
            host: None,
            link: None,
        };
    };

    // A loose match means the remainder is still part of a host name
    let (host, link) = match rewrite.boundary {
        PrefixBoundary::Clean => (None, LinkKind::classify(rewrite.path)),
        PrefixBoundary::Loose => (rewrite.actual_host(), LinkKind::Other),
    };

    Inspection {
        url: url.to_string(),
        mirror,
        matched: true,
        boundary: Some(rewrite.boundary),
        rewritten: Some(rewrite.rewritten),
        host,
        link: Some(link),
    }
}

/// Execute the inspect command
pub fn execute(url: Option<String>, mirror: Mirror, json: bool) -> Result<()> {
    let url = utils::read_url(url)?;
    let inspection = inspect(&url, mirror);

    if json {
        let out = serde_json::to_string_pretty(&inspection)
            .context("Failed to serialize inspection")?;
        println!("{}", out);
    } else {
        println!("{}", format_inspection(&inspection));
    }

    Ok(())
}

/// Human-readable report
pub fn format_inspection(inspection: &Inspection) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {}\n", "Link:", inspection.url));
    out.push_str(&format!(
        "{:<10} {} ({})\n",
        "Mirror:",
        inspection.mirror,
        inspection.mirror.target_prefix()
    ));

    let Some(rewritten) = &inspection.rewritten else {
        out.push_str(&format!(
            "{}",
            "Not a GitHub link, nothing would be copied".yellow()
        ));
        return out;
    };

    out.push_str(&format!("{:<10} {}\n", "Rewritten:", rewritten.green()));
    if let Some(link) = &inspection.link {
        out.push_str(&format!("{:<10} {}", "Page:", link));
    }

    if inspection.points_elsewhere() {
        let host = inspection.host.as_deref().unwrap_or("an unknown host");
        out.push_str(&format!(
            "\n{} prefix matched, but the link points at {}",
            "Warning:".yellow(),
            host
        ));
    }

    out
}
