//! Clipboard sink for signal exports.
//!
//! The terminal implementation asks the emulator to set the system clipboard
//! with an OSC 52 sequence. Terminals that ignore OSC 52 give no feedback, so
//! only write errors and a non-terminal stdout count as failures.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crossterm::{execute, Command};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(#[from] io::Error),
}

/// Anything that can receive a plain-text payload.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// `ESC ] 52 ; c ; <base64> BEL`: set the system clipboard selection.
#[derive(Debug, Clone, Copy)]
pub struct SetClipboard<'a>(pub &'a str);

impl Command for SetClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "OSC 52 needs an ANSI terminal",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// OSC 52 clipboard over any writer (stdout in production).
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        execute!(self.out, SetClipboard(text))?;
        Ok(())
    }
}

/// Clipboard that always fails, used when stdout is not a terminal.
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

/// In-memory clipboard. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent payload, if any.
    pub fn last(&self) -> Option<String> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }

    pub fn writes(&self) -> usize {
        self.history.lock().map(|h| h.len()).unwrap_or(0)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut history = self
            .history
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard history poisoned".into()))?;
        history.push(text.to_string());
        Ok(())
    }
}

/// Pick the clipboard for this process: OSC 52 on a terminal, otherwise a
/// clipboard that reports why it cannot copy.
pub fn system_clipboard() -> Box<dyn Clipboard> {
    let stdout = io::stdout();
    if stdout.is_terminal() {
        Box::new(Osc52Clipboard::new(stdout))
    } else {
        Box::new(UnavailableClipboard::new("stdout is not a terminal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_writes_escape_sequence() {
        let mut clip = Osc52Clipboard::new(Vec::new());
        clip.write_text("12:05 - EUR/USD NEXTGEN - CALL").unwrap();
        let text = String::from_utf8(clip.out).unwrap();
        assert_eq!(
            text,
            "\x1b]52;c;MTI6MDUgLSBFVVIvVVNEIE5FWFRHRU4gLSBDQUxM\x07"
        );
    }

    #[test]
    fn osc52_payload_decodes_to_batch_text() {
        let batch = "12:05 - USD/JPY NEXTGEN - PUT\n12:10 - USD/JPY NEXTGEN - CALL";
        let mut clip = Osc52Clipboard::new(Vec::new());
        clip.write_text(batch).unwrap();

        let text = String::from_utf8(clip.out).unwrap();
        let payload = text
            .strip_prefix("\x1b]52;c;")
            .and_then(|rest| rest.strip_suffix('\x07'))
            .expect("OSC 52 framing");
        assert_eq!(STANDARD.decode(payload).unwrap(), batch.as_bytes());
    }

    #[test]
    fn unavailable_always_fails() {
        let mut clip = UnavailableClipboard::new("no terminal");
        let err = clip.write_text("x").unwrap_err();
        assert!(err.to_string().contains("no terminal"));
    }

    #[test]
    fn memory_clones_share_history() {
        let clip = MemoryClipboard::new();
        let mut writer = clip.clone();
        writer.write_text("a").unwrap();
        writer.write_text("b").unwrap();
        assert_eq!(clip.writes(), 2);
        assert_eq!(clip.last().as_deref(), Some("b"));
    }
}
