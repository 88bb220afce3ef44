use std::sync::Once;

use pluvial_core::{calculate, ShareChannel};
use pluvial_engine::{
    share_url, Clipboard, ClipboardError, CopyOutcome, FallbackClipboard, FileClipboard,
    Osc52Clipboard, StateDir, SHARE_FALLBACK_FILENAME,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use url::Url;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pluvial_logging::initialize_for_tests);
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy(&mut self, _text: &str) -> Result<CopyOutcome, ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

#[test]
fn whatsapp_url_encodes_share_text() {
    init_logging();
    let calc = calculate("100", "800", Some("0.8")).unwrap();
    let url = share_url(ShareChannel::WhatsApp, calc.share_text.as_str()).unwrap();

    assert!(url.starts_with("https://api.whatsapp.com/send?text="));
    assert!(!url.contains('\n'));
    assert!(!url.contains(' '));
    assert!(url.contains("%23RainwaterHarvesting"));
    assert!(url.contains("64%2C000"));
}

#[test]
fn share_urls_decode_back_to_exact_text() {
    init_logging();
    let calc = calculate("100,5", "800", Some("0.85")).unwrap();
    let text = calc.share_text.as_str();

    let channels = [
        (ShareChannel::WhatsApp, "text"),
        (ShareChannel::Facebook, "quote"),
    ];
    for (channel, key) in channels {
        let url = Url::parse(&share_url(channel, text).unwrap()).unwrap();
        let decoded = url
            .query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned());
        assert_eq!(decoded.as_deref(), Some(text));
    }
}

#[test]
fn osc52_writes_base64_escape_sequence() {
    let mut out = Vec::new();
    let outcome = Osc52Clipboard::new(&mut out, true).copy("hola").unwrap();

    assert_eq!(outcome, CopyOutcome::Terminal);
    assert_eq!(String::from_utf8(out).unwrap(), "\u{1b}]52;c;aG9sYQ==\u{7}");
}

#[test]
fn osc52_refuses_non_terminal_output() {
    let mut out = Vec::new();
    let result = Osc52Clipboard::new(&mut out, false).copy("hola");

    assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    assert!(out.is_empty());
}

#[test]
fn fallback_writes_share_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let dir = StateDir::new(temp.path());
    let mut clipboard = FallbackClipboard::new(BrokenClipboard, FileClipboard::new(dir.clone()));

    let outcome = clipboard.copy("share me").unwrap();

    let expected = dir.path_of(SHARE_FALLBACK_FILENAME);
    assert_eq!(outcome, CopyOutcome::File(expected.clone()));
    assert_eq!(std::fs::read_to_string(expected).unwrap(), "share me");
}

#[test]
fn fallback_not_used_when_primary_succeeds() {
    let temp = TempDir::new().unwrap();
    let dir = StateDir::new(temp.path());
    let mut out = Vec::new();
    let mut clipboard = FallbackClipboard::new(
        Osc52Clipboard::new(&mut out, true),
        FileClipboard::new(dir.clone()),
    );

    assert_eq!(clipboard.copy("x").unwrap(), CopyOutcome::Terminal);
    assert!(dir.read(SHARE_FALLBACK_FILENAME).unwrap().is_none());
}
