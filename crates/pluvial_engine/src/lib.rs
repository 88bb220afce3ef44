//! Pluvial engine: side effects requested by the core (sharing, clipboard, state files).
mod clipboard;
mod persist;
mod share_url;

pub use clipboard::{
    Clipboard, ClipboardError, CopyOutcome, FallbackClipboard, FileClipboard, Osc52Clipboard,
    SHARE_FALLBACK_FILENAME,
};
pub use persist::{ensure_state_dir, PersistError, StateDir};
pub use share_url::share_url;
