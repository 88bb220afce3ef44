use pluvial_core::Effect;
use pluvial_engine::{share_url, Clipboard, CopyOutcome, StateDir};
use pluvial_logging::{pluvial_error, pluvial_info, pluvial_warn};

use super::persistence;

/// Executes effects emitted by `update`, returning notices for the user.
pub struct EffectRunner<C: Clipboard> {
    state_dir: StateDir,
    clipboard: C,
}

impl<C: Clipboard> EffectRunner<C> {
    pub fn new(state_dir: StateDir, clipboard: C) -> Self {
        Self {
            state_dir,
            clipboard,
        }
    }

    #[cfg(test)]
    pub fn state_dir(&self) -> &StateDir {
        &self.state_dir
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistPreferences(preferences) => {
                    pluvial_info!("PersistPreferences dark_mode={}", preferences.dark_mode);
                    persistence::save_preferences(&self.state_dir, preferences);
                }
                Effect::OpenShareUrl { channel, text } => match share_url(channel, &text) {
                    Some(url) => {
                        pluvial_info!("OpenShareUrl channel={} url_len={}", channel, url.len());
                        notices.push(format!("Open this link to share on {channel}:\n{url}"));
                    }
                    None => {
                        pluvial_warn!("No share URL for channel {}", channel);
                    }
                },
                Effect::CopyToClipboard { text } => match self.clipboard.copy(&text) {
                    Ok(CopyOutcome::Terminal) => notices.push(
                        "✅ Text copied to the clipboard. Paste it into your Instagram post."
                            .to_string(),
                    ),
                    Ok(CopyOutcome::File(path)) => notices.push(format!(
                        "✅ Text saved to {}. Paste it into your Instagram post.",
                        path.display()
                    )),
                    Err(err) => {
                        pluvial_error!("CopyToClipboard failed: {}", err);
                        notices.push(format!("Could not copy the share text: {err}"));
                    }
                },
            }
        }
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluvial_core::{Preferences, ShareChannel};
    use pluvial_engine::{FileClipboard, SHARE_FALLBACK_FILENAME};
    use tempfile::TempDir;

    fn runner(temp: &TempDir) -> EffectRunner<FileClipboard> {
        let dir = StateDir::new(temp.path());
        EffectRunner::new(dir.clone(), FileClipboard::new(dir))
    }

    #[test]
    fn share_url_effect_produces_link_notice() {
        let temp = TempDir::new().unwrap();
        let notices = runner(&temp).run(vec![Effect::OpenShareUrl {
            channel: ShareChannel::WhatsApp,
            text: "hi there".to_string(),
        }]);

        assert_eq!(
            notices,
            vec!["Open this link to share on WhatsApp:\nhttps://api.whatsapp.com/send?text=hi+there"
                .to_string()]
        );
    }

    #[test]
    fn clipboard_effect_writes_fallback_file() {
        let temp = TempDir::new().unwrap();
        let mut runner = runner(&temp);
        let notices = runner.run(vec![Effect::CopyToClipboard {
            text: "share".to_string(),
        }]);

        assert_eq!(notices.len(), 1);
        assert_eq!(
            runner.state_dir().read(SHARE_FALLBACK_FILENAME).unwrap().as_deref(),
            Some("share")
        );
    }

    #[test]
    fn persist_effect_saves_preferences() {
        let temp = TempDir::new().unwrap();
        let mut runner = runner(&temp);
        let notices = runner.run(vec![Effect::PersistPreferences(Preferences {
            dark_mode: true,
        })]);

        assert!(notices.is_empty());
        assert!(persistence::load_preferences(runner.state_dir()).dark_mode);
    }
}
