//! Shared utilities for commands

use anyhow::Result;
use std::io;

use crate::host::{ArgumentUrl, StdinUrl, UrlSource};

/// URL source for an optional command-line argument, falling back to stdin
pub fn url_source(url: Option<String>) -> Box<dyn UrlSource> {
    match url {
        Some(url) => Box::new(ArgumentUrl(url)),
        None => Box::new(StdinUrl::new(io::stdin().lock())),
    }
}

/// Read the URL once from an optional argument or stdin
pub fn read_url(url: Option<String>) -> Result<String> {
    url_source(url).current_url()
}
