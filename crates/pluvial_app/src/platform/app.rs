use std::io::{self, IsTerminal};

use anyhow::{bail, Context};
use clap::Parser;
use dialoguer::console::Term;
use pluvial_core::{update, AppState, AppViewModel, EstimationResult, Msg};
use pluvial_engine::{
    ensure_state_dir, Clipboard, FallbackClipboard, FileClipboard, Osc52Clipboard, StateDir,
};
use pluvial_logging::{pluvial_info, pluvial_warn};
use serde::Serialize;

use super::cli::{Cli, Command};
use super::effects::EffectRunner;
use super::logging;
use super::persistence;
use super::ui::constants::{CELL_WIDTH_PX, PROMPT_RAINFALL, PROMPT_SURFACE};
use super::ui::prompts::{self, Action};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);
    pluvial_info!("pluvial starting, state dir {:?}", cli.state_dir);

    let state_dir = StateDir::new(&cli.state_dir);
    match cli.command {
        Some(Command::Roofs) => print_lines(render::render_roofs()),
        Some(Command::Map { width }) => {
            let (state, _) = update(AppState::new(), Msg::ViewportResized(width));
            print_lines(render::render_map(state.view().map_zoom));
        }
        Some(Command::Estimate {
            surface,
            rainfall,
            coefficient,
            json,
        }) => run_estimate(state_dir, surface, rainfall, coefficient, json)?,
        None => run_interactive(state_dir)?,
    }
    Ok(())
}

/// Owns the state and feeds effects to the runner after each update.
struct Session<C: Clipboard> {
    state: AppState,
    runner: EffectRunner<C>,
}

impl<C: Clipboard> Session<C> {
    fn new(runner: EffectRunner<C>) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<String> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects)
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn take_dirty_view(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }
}

fn build_session(state_dir: StateDir) -> Session<impl Clipboard> {
    let stdout_is_terminal = io::stdout().is_terminal();
    let clipboard = FallbackClipboard::new(
        Osc52Clipboard::new(io::stdout(), stdout_is_terminal),
        FileClipboard::new(state_dir.clone()),
    );
    let mut session = Session::new(EffectRunner::new(state_dir.clone(), clipboard));
    let preferences = persistence::load_preferences(&state_dir);
    session.dispatch(Msg::RestorePreferences(preferences));
    session
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    surface_area: &'a str,
    rainfall_mm: &'a str,
    coefficient: &'a str,
    result: &'a EstimationResult,
    share_text: &'a str,
}

fn run_estimate(
    state_dir: StateDir,
    surface: String,
    rainfall: String,
    coefficient: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = build_session(state_dir);
    session.dispatch(Msg::SurfaceChanged(surface));
    session.dispatch(Msg::RainfallChanged(rainfall));
    session.dispatch(Msg::CoefficientSelected(coefficient));
    session.dispatch(Msg::Submitted);

    let Some(calculation) = session.state.calculation() else {
        match session.view().error {
            Some(err) => bail!("{} ({})", err.user_message(), err),
            None => bail!("calculation produced no result"),
        }
    };

    if json {
        let report = EstimateReport {
            surface_area: &calculation.inputs.surface_area,
            rainfall_mm: &calculation.inputs.rainfall_mm,
            coefficient: &calculation.inputs.coefficient_label,
            result: &calculation.result,
            share_text: calculation.share_text.as_str(),
        };
        let text = serde_json::to_string_pretty(&report).context("serialize estimate")?;
        println!("{text}");
    } else {
        print_lines(render::render(&session.view()));
        println!();
        println!("{}", calculation.share_text);
    }
    Ok(())
}

fn run_interactive(state_dir: StateDir) -> anyhow::Result<()> {
    if let Err(err) = ensure_state_dir(state_dir.root()) {
        pluvial_warn!(
            "State directory unavailable, preferences will not be saved: {}",
            err
        );
    }
    let mut session = build_session(state_dir);
    session.dispatch(Msg::ViewportResized(terminal_width_px()));
    session.take_dirty_view();
    print_lines(render::render(&session.view()));

    loop {
        session.dispatch(Msg::ViewportResized(terminal_width_px()));
        if let Some(view) = session.take_dirty_view() {
            println!();
            print_lines(render::render(&view));
        }

        let view = session.view();
        let notices = match prompts::choose_action(&view).context("read action")? {
            Action::Calculate => edit_and_submit(&mut session, &view)?,
            Action::Share(channel) => session.dispatch(Msg::ShareRequested(channel)),
            Action::ToggleMenu => session.dispatch(Msg::MenuToggled),
            Action::Navigate(index) => {
                let mut notices = session.dispatch(Msg::MenuLinkClicked);
                match index {
                    0 => notices.extend(edit_and_submit(&mut session, &view)?),
                    1 => print_lines(render::render_map(view.map_zoom)),
                    _ => print_lines(render::render_roofs()),
                }
                notices
            }
            Action::ToggleTheme => session.dispatch(Msg::ThemeToggled),
            Action::Clear => session.dispatch(Msg::ClearClicked),
            Action::Quit => break,
        };
        print_lines(notices);
    }

    pluvial_info!("pluvial session finished");
    Ok(())
}

fn edit_and_submit<C: Clipboard>(
    session: &mut Session<C>,
    view: &AppViewModel,
) -> anyhow::Result<Vec<String>> {
    let surface = prompts::prompt_text(PROMPT_SURFACE, &view.surface_input)?;
    let rainfall = prompts::prompt_text(PROMPT_RAINFALL, &view.rainfall_input)?;
    let roof = prompts::prompt_roof(view.coefficient_selection.as_deref())?;

    let mut notices = session.dispatch(Msg::SurfaceChanged(surface));
    notices.extend(session.dispatch(Msg::RainfallChanged(rainfall)));
    notices.extend(session.dispatch(Msg::CoefficientSelected(roof)));
    notices.extend(session.dispatch(Msg::Submitted));
    Ok(notices)
}

fn terminal_width_px() -> u32 {
    let (_rows, cols) = Term::stdout().size();
    u32::from(cols) * CELL_WIDTH_PX
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
