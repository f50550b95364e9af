//! Best-effort clipboard support
//!
//! Copying a story is a convenience, not a feature the session depends
//! on: failures (headless machines, missing display server) are logged
//! at debug level and never surfaced to the user.

/// Copy `text` to the system clipboard
///
/// Returns whether the copy succeeded. Failures are swallowed; callers
/// may use the return value to decide whether to print a confirmation.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => {
            tracing::debug!("Copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            tracing::debug!("Clipboard copy failed: {}", e);
            false
        }
    }
}
