use pluvial_core::Preferences;
use pluvial_engine::StateDir;
use pluvial_logging::{pluvial_error, pluvial_info, pluvial_warn};
use serde::{Deserialize, Serialize};

pub(crate) const PREFERENCES_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
struct PersistedPreferences {
    dark_mode: bool,
}

/// Loads saved preferences; anything missing or unreadable yields the defaults.
pub(crate) fn load_preferences(dir: &StateDir) -> Preferences {
    let content = match dir.read(PREFERENCES_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return Preferences::default(),
        Err(err) => {
            pluvial_warn!(
                "Failed to read preferences from {:?}: {}",
                dir.path_of(PREFERENCES_FILENAME),
                err
            );
            return Preferences::default();
        }
    };

    let persisted: PersistedPreferences = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            pluvial_warn!(
                "Failed to parse preferences from {:?}: {}",
                dir.path_of(PREFERENCES_FILENAME),
                err
            );
            return Preferences::default();
        }
    };

    pluvial_info!("Loaded preferences from {:?}", dir.root());
    Preferences {
        dark_mode: persisted.dark_mode,
    }
}

pub(crate) fn save_preferences(dir: &StateDir, preferences: Preferences) {
    let persisted = PersistedPreferences {
        dark_mode: preferences.dark_mode,
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            pluvial_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = dir.write_atomic(PREFERENCES_FILENAME, &content) {
        pluvial_error!("Failed to write preferences to {:?}: {}", dir.root(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn preferences_round_trip() {
        let temp = TempDir::new().unwrap();
        let dir = StateDir::new(temp.path().join("state"));

        assert_eq!(load_preferences(&dir), Preferences::default());
        save_preferences(&dir, Preferences { dark_mode: true });
        assert_eq!(load_preferences(&dir), Preferences { dark_mode: true });
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let dir = StateDir::new(temp.path());
        dir.write_atomic(PREFERENCES_FILENAME, "dark_mode = yes please")
            .unwrap();

        assert_eq!(load_preferences(&dir), Preferences::default());
    }
}
