use colored::{ColoredString, Colorize};
use pluvial_core::{AppViewModel, MapZone, ResultRows, RoofCoefficient, ZoneColor, MAP_CENTER};

use super::constants::*;

/// Heading and accent colors for the current theme.
struct Palette {
    dark: bool,
}

impl Palette {
    fn heading(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_cyan().bold()
        } else {
            text.blue().bold()
        }
    }

    fn value(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_white().bold()
        } else {
            text.bold()
        }
    }
}

pub fn render(view: &AppViewModel) -> Vec<String> {
    let palette = Palette {
        dark: view.dark_mode,
    };
    let mut lines = Vec::new();

    lines.push(format!(
        "{}   {} {}",
        palette.heading(APP_TITLE),
        view.theme_icon,
        view.menu_icon
    ));
    if view.menu_open {
        for link in NAV_LINKS {
            lines.push(format!("  • {link}"));
        }
    }

    lines.push(format!(
        "{PROMPT_SURFACE}: {}",
        display_input(&view.surface_input)
    ));
    lines.push(format!(
        "{PROMPT_RAINFALL}: {}",
        display_input(&view.rainfall_input)
    ));
    lines.push(format!(
        "{PROMPT_ROOF}: {}",
        roof_label(view.coefficient_selection.as_deref())
    ));

    if let Some(message) = &view.message {
        lines.push(format!("⚠️ {}", message.as_str().yellow()));
    }

    if let Some(rows) = &view.results {
        lines.push(String::new());
        lines.extend(render_results(&palette, rows));
    }

    if view.share_enabled() {
        lines.push(String::new());
        lines.push("Share: Facebook | Instagram | WhatsApp".to_string());
    }

    lines
}

fn render_results(palette: &Palette, rows: &ResultRows) -> Vec<String> {
    vec![
        palette.heading("Estimated results").to_string(),
        format!(
            "💧 {} liters per year",
            palette.value(&rows.liters_per_year)
        ),
        format!("🏠 Full tanks: {}", palette.value(&rows.tank_fills)),
        format!("🧺 Wash loads (60 L): {}", palette.value(&rows.wash_loads)),
        format!("🚽 Flushes (6 L): {}", palette.value(&rows.toilet_flushes)),
    ]
}

fn display_input(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}

/// Label of the selected roof type, or the raw value when it is not in the catalog.
pub fn roof_label(selection: Option<&str>) -> String {
    let Some(raw) = selection else {
        return ROOF_PLACEHOLDER.to_string();
    };
    RoofCoefficient::catalog()
        .iter()
        .find(|entry| entry.selection_value() == raw)
        .map(|entry| format!("{} ({})", entry.label, entry.value))
        .unwrap_or_else(|| raw.to_string())
}

pub fn render_roofs() -> Vec<String> {
    RoofCoefficient::catalog()
        .iter()
        .map(|entry| format!("{:<24} {}", entry.label, entry.value))
        .collect()
}

pub fn render_map(zoom: u8) -> Vec<String> {
    let mut lines = vec![format!(
        "Map centre {:.4}, {:.4} at zoom {}",
        MAP_CENTER.0, MAP_CENTER.1, zoom
    )];
    for zone in MapZone::defaults() {
        let (lat_min, lat_max, lon_min, lon_max) = bounds(zone);
        lines.push(format!(
            "{} {:<16} lat {:.3}..{:.3}  lon {:.3}..{:.3}",
            swatch(zone.color),
            zone.name,
            lat_min,
            lat_max,
            lon_min,
            lon_max
        ));
    }
    lines
}

fn bounds(zone: &MapZone) -> (f64, f64, f64, f64) {
    zone.corners.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(lat_min, lat_max, lon_min, lon_max), &(lat, lon)| {
            (
                lat_min.min(lat),
                lat_max.max(lat),
                lon_min.min(lon),
                lon_max.max(lon),
            )
        },
    )
}

fn swatch(color: ZoneColor) -> ColoredString {
    let block = "■■";
    match color {
        ZoneColor::Red => block.red(),
        ZoneColor::Orange => block.truecolor(255, 165, 0),
        ZoneColor::Green => block.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluvial_core::{update, AppState, Msg};
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn results_are_rendered_with_display_rounding() {
        plain();
        let state = AppState::new();
        let (state, _) = update(state, Msg::SurfaceChanged("100".into()));
        let (state, _) = update(state, Msg::RainfallChanged("800".into()));
        let (state, _) = update(state, Msg::CoefficientSelected(Some("0.8".into())));
        let (state, _) = update(state, Msg::Submitted);

        let lines = render(&state.view());
        assert_eq!(lines[3], "Roof type: Clay or concrete tile (0.8)");
        assert!(lines.contains(&"💧 64,000 liters per year".to_string()));
        assert!(lines.contains(&"🏠 Full tanks: 58.2".to_string()));
        assert!(lines.contains(&"🧺 Wash loads (60 L): 1066.7".to_string()));
        assert!(lines.contains(&"🚽 Flushes (6 L): 10667".to_string()));
    }

    #[test]
    fn validation_message_replaces_results() {
        plain();
        let (state, _) = update(AppState::new(), Msg::Submitted);
        let lines = render(&state.view());

        assert!(lines
            .iter()
            .any(|l| l.contains("Please enter only valid numbers in all fields.")));
        assert!(!lines.iter().any(|l| l.contains("liters per year")));
    }

    #[test]
    fn open_menu_lists_links() {
        plain();
        let (state, _) = update(AppState::new(), Msg::MenuToggled);
        let lines = render(&state.view());
        assert!(lines[0].ends_with("🌙 ✖"));
        assert_eq!(lines[1], "  • Calculator");
    }

    #[test]
    fn map_lists_every_zone() {
        plain();
        let lines = render_map(12);
        assert_eq!(lines.len(), 1 + MapZone::defaults().len());
        assert!(lines[0].ends_with("zoom 12"));
        assert!(lines[1].contains("Water scarcity"));
        assert!(lines[1].contains("lat 19.205..19.210"));
    }
}
