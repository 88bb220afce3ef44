//! Pluvial core: input parsing, the harvest estimate, and the pure UI state machine.
mod coefficient;
mod effect;
mod error;
mod estimate;
mod format;
mod map;
mod msg;
mod numeric;
mod pipeline;
mod preferences;
mod share;
mod state;
mod update;
mod view_model;

pub use coefficient::{label_for, resolve_selection, Coefficient, RoofCoefficient};
pub use effect::Effect;
pub use error::{Field, ValidationError, ValidationErrorKind};
pub use estimate::{
    estimate, EstimationResult, TANK_CAPACITY_LITERS, TOILET_FLUSH_LITERS, WASH_LOAD_LITERS,
};
pub use format::{format_liters, format_one_decimal, format_whole, ResultRows};
pub use map::{
    zoom_for_viewport_width, MapZone, ZoneColor, DEFAULT_ZOOM, MAP_CENTER, NARROW_VIEWPORT_WIDTH,
    NARROW_ZOOM,
};
pub use msg::Msg;
pub use numeric::{
    is_valid_numeric, normalize, parse_number, parse_positive, require_positive, NumericError,
    ValidatedMagnitude,
};
pub use pipeline::{calculate, Calculation};
pub use preferences::{MenuState, Preferences};
pub use share::{build_share_text, ShareChannel, ShareInputs, ShareText, SHARE_HASHTAGS};
pub use state::AppState;
pub use update::update;
pub use view_model::AppViewModel;
