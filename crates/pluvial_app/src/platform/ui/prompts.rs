//! Interactive prompts for the terminal session.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use pluvial_core::{AppViewModel, RoofCoefficient, ShareChannel};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Calculate,
    Share(ShareChannel),
    ToggleMenu,
    Navigate(usize),
    ToggleTheme,
    Clear,
    Quit,
}

/// Actions offered for the current view, with their labels.
pub fn available_actions(view: &AppViewModel) -> Vec<(String, Action)> {
    let mut actions = vec![("Enter values and calculate".to_string(), Action::Calculate)];

    if view.share_enabled() {
        for channel in ShareChannel::ALL {
            let label = if channel.uses_clipboard() {
                format!("Copy text for {channel}")
            } else {
                format!("Share on {channel}")
            };
            actions.push((label, Action::Share(channel)));
        }
    }

    if view.menu_open {
        for (index, link) in NAV_LINKS.iter().enumerate() {
            actions.push((format!("Go to {link}"), Action::Navigate(index)));
        }
        actions.push((format!("{} Close menu", view.menu_icon), Action::ToggleMenu));
    } else {
        actions.push((format!("{} Menu", view.menu_icon), Action::ToggleMenu));
    }

    let theme_label = if view.dark_mode {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };
    actions.push((
        format!("{} {theme_label}", view.theme_icon),
        Action::ToggleTheme,
    ));
    actions.push(("Clear".to_string(), Action::Clear));
    actions.push(("Quit".to_string(), Action::Quit));
    actions
}

pub fn choose_action(view: &AppViewModel) -> dialoguer::Result<Action> {
    let actions = available_actions(view);
    let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(PROMPT_ACTION)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[index].1)
}

pub fn prompt_text(prompt: &str, initial: &str) -> dialoguer::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
}

/// Roof type picker; the placeholder entry maps to no selection.
pub fn prompt_roof(current: Option<&str>) -> dialoguer::Result<Option<String>> {
    let catalog = RoofCoefficient::catalog();
    let mut labels = vec![ROOF_PLACEHOLDER.to_string()];
    labels.extend(
        catalog
            .iter()
            .map(|entry| format!("{} ({})", entry.label, entry.value)),
    );
    let default = current
        .and_then(|raw| {
            catalog
                .iter()
                .position(|entry| entry.selection_value() == raw)
        })
        .map_or(0, |position| position + 1);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(PROMPT_ROOF)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(index
        .checked_sub(1)
        .map(|position| catalog[position].selection_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluvial_core::{update, AppState, Msg};

    fn actions_of(view: &AppViewModel) -> Vec<Action> {
        available_actions(view).into_iter().map(|(_, a)| a).collect()
    }

    #[test]
    fn share_actions_only_after_result() {
        let state = AppState::new();
        assert!(!actions_of(&state.view())
            .iter()
            .any(|a| matches!(a, Action::Share(_))));

        let (state, _) = update(state, Msg::SurfaceChanged("10".into()));
        let (state, _) = update(state, Msg::RainfallChanged("10".into()));
        let (state, _) = update(state, Msg::CoefficientSelected(Some("0.9".into())));
        let (state, _) = update(state, Msg::Submitted);
        let shares = actions_of(&state.view())
            .into_iter()
            .filter(|a| matches!(a, Action::Share(_)))
            .count();
        assert_eq!(shares, 3);
    }

    #[test]
    fn open_menu_offers_navigation() {
        let (state, _) = update(AppState::new(), Msg::MenuToggled);
        let actions = actions_of(&state.view());
        assert!(actions.contains(&Action::Navigate(0)));
        assert!(actions.contains(&Action::Navigate(NAV_LINKS.len() - 1)));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }
}
