use crate::format::ResultRows;
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub surface_input: String,
    pub rainfall_input: String,
    pub coefficient_selection: Option<String>,
    /// User-facing validation message, if the last submission failed.
    pub message: Option<String>,
    pub error: Option<ValidationError>,
    pub results: Option<ResultRows>,
    /// Present exactly when the share buttons should be shown.
    pub share_text: Option<String>,
    pub dark_mode: bool,
    pub theme_icon: &'static str,
    pub menu_open: bool,
    pub menu_icon: &'static str,
    pub map_zoom: u8,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn share_enabled(&self) -> bool {
        self.share_text.is_some()
    }
}
