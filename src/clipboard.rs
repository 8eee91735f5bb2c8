// src/clipboard.rs
//! Clipboard capability, OS-specific:
//! - macOS: pbcopy
//! - Linux: xclip, falling back to xsel
//! - Windows: clip.exe

use crate::error::ApiError;
use std::process::{Command, Stdio};

/// Seam for the clipboard capability so controllers can be tested without
/// touching the real clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ApiError>;
}

/// The real system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ApiError> {
        copy_to_clipboard(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_clipboard(text: &str) -> Result<(), ApiError> {
    pipe_through(Command::new("pbcopy"), text)
}

#[cfg(target_os = "linux")]
fn copy_to_clipboard(text: &str) -> Result<(), ApiError> {
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    match pipe_through(xclip, text) {
        Ok(()) => Ok(()),
        Err(_) => {
            let mut xsel = Command::new("xsel");
            xsel.args(["--clipboard", "--input"]);
            pipe_through(xsel, text)
        }
    }
}

#[cfg(target_os = "windows")]
fn copy_to_clipboard(text: &str) -> Result<(), ApiError> {
    pipe_through(Command::new("clip"), text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_to_clipboard(_text: &str) -> Result<(), ApiError> {
    Err(ApiError::capability(
        "Clipboard not supported on this platform",
    ))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_through(mut command: Command, text: &str) -> Result<(), ApiError> {
    use std::io::Write;

    let program = command.get_program().to_string_lossy().to_string();

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ApiError::capability(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ApiError::capability(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ApiError::capability(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ApiError::capability(format!(
            "{} exited with error",
            program
        )))
    }
}
