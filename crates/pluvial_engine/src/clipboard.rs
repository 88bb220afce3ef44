//! Clipboard copy for share text.
//!
//! The primary path asks the terminal to set the system clipboard with an
//! OSC 52 escape sequence. Terminals that ignore it (or output that is not a
//! terminal) fall back to writing the text into the state directory, where the
//! user can pick it up by hand.

use std::io::{self, Write};
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pluvial_logging::{pluvial_info, pluvial_warn};
use thiserror::Error;

use crate::persist::{PersistError, StateDir};

pub const SHARE_FALLBACK_FILENAME: &str = "share.txt";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
    #[error("fallback file write failed: {0}")]
    Persist(#[from] PersistError),
}

/// Where the copied text ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Terminal,
    File(PathBuf),
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<CopyOutcome, ClipboardError>;
}

pub struct Osc52Clipboard<W: Write> {
    out: W,
    is_terminal: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<CopyOutcome, ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::Unavailable(
                "output is not a terminal".to_string(),
            ));
        }
        let payload = STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{payload}\x07")?;
        self.out.flush()?;
        Ok(CopyOutcome::Terminal)
    }
}

pub struct FileClipboard {
    dir: StateDir,
    filename: String,
}

impl FileClipboard {
    pub fn new(dir: StateDir) -> Self {
        Self {
            dir,
            filename: SHARE_FALLBACK_FILENAME.to_string(),
        }
    }
}

impl Clipboard for FileClipboard {
    fn copy(&mut self, text: &str) -> Result<CopyOutcome, ClipboardError> {
        let path = self.dir.write_atomic(&self.filename, text)?;
        Ok(CopyOutcome::File(path))
    }
}

/// Tries `primary`, then `fallback`.
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn copy(&mut self, text: &str) -> Result<CopyOutcome, ClipboardError> {
        match self.primary.copy(text) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                pluvial_warn!("Clipboard copy failed ({}); using fallback", err);
                let outcome = self.fallback.copy(text)?;
                pluvial_info!("Share text copied via fallback: {:?}", outcome);
                Ok(outcome)
            }
        }
    }
}
