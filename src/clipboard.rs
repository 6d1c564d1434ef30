//! Clipboard output.
//!
//! X11 and Wayland selections are served by the owning process, so on Linux
//! the URL would vanish as soon as gistclip exits. There we hand the text to
//! a detached copy of ourselves (`--clipboard-daemon`) that keeps ownership
//! until another application takes the clipboard over.

use crate::logging::{log_debug, log_info};
use anyhow::{Context, Result};
use arboard::Clipboard;

#[cfg(target_os = "linux")]
const CLIPBOARD_DAEMON_FLAG: &str = "--clipboard-daemon";

pub fn write_clipboard(text: &str) -> Result<()> {
    log_debug(&format!("Writing {} bytes to clipboard", text.len()));

    // Set it here first so a missing display fails the run.
    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write text to clipboard")?;

    #[cfg(target_os = "linux")]
    spawn_clipboard_daemon(text)?;

    log_info("Successfully wrote text to clipboard");
    Ok(())
}

#[cfg(target_os = "linux")]
fn spawn_clipboard_daemon(text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe().context("Failed to locate gistclip executable")?;
    let mut child = Command::new(exe)
        .arg(CLIPBOARD_DAEMON_FLAG)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to spawn clipboard daemon")?;

    let mut stdin = child
        .stdin
        .take()
        .context("Clipboard daemon has no stdin")?;
    stdin
        .write_all(text.as_bytes())
        .context("Failed to hand text to clipboard daemon")?;

    log_debug(&format!("Clipboard daemon running as pid {}", child.id()));
    Ok(())
}

/// Entry point for `--clipboard-daemon`: read the text from stdin and hold
/// the selection until someone else owns it.
pub fn serve_clipboard_daemon() -> Result<()> {
    use std::io::Read;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read clipboard text from stdin")?;

    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard in daemon")?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard
            .set()
            .wait()
            .text(text)
            .context("Failed to set text in clipboard daemon")?;
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text)
        .context("Failed to set text in clipboard daemon")?;

    Ok(())
}
