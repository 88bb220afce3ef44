pub const APP_TITLE: &str = "Rainwater calculator";
pub const PROMPT_SURFACE: &str = "Roof surface (m²)";
pub const PROMPT_RAINFALL: &str = "Annual rainfall (mm)";
pub const PROMPT_ROOF: &str = "Roof type";
pub const PROMPT_ACTION: &str = "What next?";
pub const ROOF_PLACEHOLDER: &str = "-- Select a roof type --";
pub const NAV_LINKS: [&str; 3] = ["Calculator", "Zone map", "Roof types"];
/// Approximate pixel width of one terminal column, for the map zoom rule.
pub const CELL_WIDTH_PX: u32 = 8;
