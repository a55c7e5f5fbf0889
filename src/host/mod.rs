//! Capabilities provided by the environment: the page URL and the clipboard

pub mod clipboard;
pub mod location;

pub use clipboard::{ClipboardError, ClipboardSink, DryRunClipboard, SystemClipboard};
pub use location::{ArgumentUrl, StdinUrl, UrlSource};
