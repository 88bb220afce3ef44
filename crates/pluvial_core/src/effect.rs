use crate::{Preferences, ShareChannel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistPreferences(Preferences),
    OpenShareUrl { channel: ShareChannel, text: String },
    CopyToClipboard { text: String },
}
