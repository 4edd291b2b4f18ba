//! System clipboard for copying post links.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy link: {0}")]
    Write(#[source] arboard::Error),
}

/// Lazily opened clipboard. Opening can fail on headless sessions, so it is
/// deferred until the first copy and retried on the next one.
#[derive(Default)]
pub struct LinkClipboard {
    clipboard: Option<Clipboard>,
}

impl LinkClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy_link(&mut self, link: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        self.clipboard
            .insert(clipboard)
            .set_text(link.to_string())
            .map_err(ClipboardError::Write)
    }
}
