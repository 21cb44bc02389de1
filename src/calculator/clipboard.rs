//! Clipboard functionality for copying the displayed value.

use arboard::Clipboard;
use tracing::debug;

use crate::error::{Error, Result};

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| Error::Clipboard(format!("failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(format!("failed to copy to clipboard: {}", e)))?;

    debug!(text, "copied to clipboard");
    Ok(())
}
