use crate::format::ResultRows;
use crate::map::{zoom_for_viewport_width, DEFAULT_ZOOM};
use crate::view_model::AppViewModel;
use crate::{calculate, Calculation, MenuState, Preferences, ValidationError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    surface_input: String,
    rainfall_input: String,
    coefficient_selection: Option<String>,
    calculation: Option<Calculation>,
    error: Option<ValidationError>,
    preferences: Preferences,
    menu: MenuState,
    viewport_width: Option<u32>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            surface_input: self.surface_input.clone(),
            rainfall_input: self.rainfall_input.clone(),
            coefficient_selection: self.coefficient_selection.clone(),
            message: self.error.map(|err| err.user_message().to_string()),
            error: self.error,
            results: self
                .calculation
                .as_ref()
                .map(|calc| ResultRows::from_result(&calc.result)),
            share_text: self
                .calculation
                .as_ref()
                .map(|calc| calc.share_text.as_str().to_string()),
            dark_mode: self.preferences.dark_mode,
            theme_icon: self.preferences.theme_icon(),
            menu_open: self.menu.is_open(),
            menu_icon: self.menu.icon(),
            map_zoom: self.view_zoom(),
            dirty: self.dirty,
        }
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_surface_input(&mut self, text: String) {
        if self.surface_input != text {
            self.surface_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_rainfall_input(&mut self, text: String) {
        if self.rainfall_input != text {
            self.rainfall_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_coefficient_selection(&mut self, selection: Option<String>) {
        if self.coefficient_selection != selection {
            self.coefficient_selection = selection;
            self.mark_dirty();
        }
    }

    /// Run the calculator on the current form values.
    ///
    /// The previous result and message are dropped before validation so a
    /// failed submission never leaves a stale result on screen.
    pub(crate) fn submit(&mut self) {
        self.calculation = None;
        self.error = None;
        match calculate(
            &self.surface_input,
            &self.rainfall_input,
            self.coefficient_selection.as_deref(),
        ) {
            Ok(calculation) => self.calculation = Some(calculation),
            Err(err) => self.error = Some(err),
        }
        self.mark_dirty();
    }

    pub(crate) fn clear_form(&mut self) {
        self.surface_input.clear();
        self.rainfall_input.clear();
        self.coefficient_selection = None;
        self.calculation = None;
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn set_preferences(&mut self, preferences: Preferences) {
        if self.preferences != preferences {
            self.preferences = preferences;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_menu(&mut self, menu: MenuState) {
        if self.menu != menu {
            self.menu = menu;
            self.mark_dirty();
        }
    }

    pub(crate) fn menu(&self) -> MenuState {
        self.menu
    }

    pub(crate) fn set_viewport_width(&mut self, width: u32) {
        let before = self.view_zoom();
        self.viewport_width = Some(width);
        if self.view_zoom() != before {
            self.mark_dirty();
        }
    }

    fn view_zoom(&self) -> u8 {
        self.viewport_width.map_or(DEFAULT_ZOOM, zoom_for_viewport_width)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
