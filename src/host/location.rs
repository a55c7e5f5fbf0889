//! Where the current page URL comes from

use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Supplies the URL of the page being rewritten
pub trait UrlSource {
    fn current_url(&mut self) -> Result<String>;
}

/// URL passed on the command line
#[derive(Debug, Clone)]
pub struct ArgumentUrl(pub String);

impl UrlSource for ArgumentUrl {
    fn current_url(&mut self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// First line of a reader, usually stdin
#[derive(Debug)]
pub struct StdinUrl<R> {
    reader: R,
}

impl<R: BufRead> StdinUrl<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> UrlSource for StdinUrl<R> {
    fn current_url(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read URL from stdin")?;

        if read == 0 {
            bail!("No URL given (pass one as an argument or on stdin)");
        }

        // Only the line terminator is dropped; the URL itself is kept verbatim
        let url = line.trim_end_matches(['\n', '\r']);
        if url.is_empty() {
            bail!("No URL given (pass one as an argument or on stdin)");
        }

        Ok(url.to_string())
    }
}
