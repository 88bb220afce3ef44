use crate::{AppState, Effect, MenuState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SurfaceChanged(text) => {
            state.set_surface_input(text);
            Vec::new()
        }
        Msg::RainfallChanged(text) => {
            state.set_rainfall_input(text);
            Vec::new()
        }
        Msg::CoefficientSelected(selection) => {
            state.set_coefficient_selection(selection);
            Vec::new()
        }
        Msg::Submitted => {
            state.submit();
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear_form();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let preferences = state.preferences().toggled();
            state.set_preferences(preferences);
            vec![Effect::PersistPreferences(preferences)]
        }
        Msg::RestorePreferences(preferences) => {
            // Already persisted; applying must not write it back.
            state.set_preferences(preferences);
            Vec::new()
        }
        Msg::MenuToggled => {
            let next = state.menu().toggled();
            state.set_menu(next);
            Vec::new()
        }
        Msg::MenuLinkClicked => {
            state.set_menu(MenuState::Closed);
            Vec::new()
        }
        Msg::ShareRequested(channel) => match state.calculation() {
            Some(calculation) => {
                let text = calculation.share_text.as_str().to_string();
                if channel.uses_clipboard() {
                    vec![Effect::CopyToClipboard { text }]
                } else {
                    vec![Effect::OpenShareUrl { channel, text }]
                }
            }
            None => Vec::new(),
        },
        Msg::ViewportResized(width) => {
            state.set_viewport_width(width);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
