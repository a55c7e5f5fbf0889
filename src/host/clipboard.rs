//! Clipboard sinks
//!
//! [`SystemClipboard`] goes through arboard. On Linux (X11) the clipboard
//! contents are served by the writing process, so they disappear once this
//! process exits unless a clipboard manager takes them over. Waiting mode
//! keeps the process alive until another application owns the clipboard.

use arboard::Clipboard;
use thiserror::Error;

/// Errors from writing to a clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard is unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("failed to write to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Something that can receive the rewritten link
pub trait ClipboardSink {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The real system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard {
    wait: bool,
}

impl SystemClipboard {
    /// `wait` blocks each write until the contents are taken over (Linux only)
    pub fn new(wait: bool) -> Self {
        Self { wait }
    }

    /// Whether written text stays on the clipboard after this process exits
    pub fn outlives_process(&self) -> bool {
        self.wait || !cfg!(target_os = "linux")
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;

        if self.wait {
            tracing::info!("holding the clipboard until another application takes it over");
            set_text_and_wait(&mut clipboard, text)?;
            tracing::debug!(len = text.len(), "clipboard contents taken over");
            return Ok(());
        }

        clipboard.set_text(text).map_err(ClipboardError::Write)?;

        if !self.outlives_process() {
            tracing::warn!(
                "clipboard contents are lost when this process exits unless a clipboard \
                 manager keeps them; pass --wait to hold them"
            );
        }
        tracing::debug!(len = text.len(), "wrote text to system clipboard");
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text_and_wait(clipboard: &mut Clipboard, text: &str) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(ClipboardError::Write)
}

// Elsewhere the OS owns the contents once they are written
#[cfg(not(target_os = "linux"))]
fn set_text_and_wait(clipboard: &mut Clipboard, text: &str) -> Result<(), ClipboardError> {
    clipboard.set_text(text).map_err(ClipboardError::Write)
}

/// Records writes instead of touching the system clipboard
#[derive(Debug, Default)]
pub struct DryRunClipboard {
    written: Vec<String>,
}

impl DryRunClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text passed to [`ClipboardSink::write`], in order
    pub fn written(&self) -> &[String] {
        &self.written
    }
}

impl ClipboardSink for DryRunClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        tracing::debug!(text, "dry-run: skipping clipboard write");
        self.written.push(text.to_string());
        Ok(())
    }
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for &mut T {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}
