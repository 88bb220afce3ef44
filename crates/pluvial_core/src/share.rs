use std::fmt;

use crate::format::{format_liters, format_one_decimal, format_whole};
use crate::EstimationResult;

/// External channel a result can be shared through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Facebook,
    Instagram,
    WhatsApp,
}

impl ShareChannel {
    pub const ALL: [ShareChannel; 3] = [
        ShareChannel::Facebook,
        ShareChannel::Instagram,
        ShareChannel::WhatsApp,
    ];

    /// Instagram has no web text-share endpoint; its text goes to the clipboard.
    pub fn uses_clipboard(self) -> bool {
        matches!(self, ShareChannel::Instagram)
    }
}

impl fmt::Display for ShareChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareChannel::Facebook => write!(f, "Facebook"),
            ShareChannel::Instagram => write!(f, "Instagram"),
            ShareChannel::WhatsApp => write!(f, "WhatsApp"),
        }
    }
}

/// The input values as they should appear in the shared text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareInputs {
    pub surface_area: String,
    pub rainfall_mm: String,
    pub coefficient_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareText(String);

impl ShareText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShareText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const SHARE_HASHTAGS: &str = "#RainwaterHarvesting #SaveWater";

pub fn build_share_text(inputs: &ShareInputs, result: &EstimationResult) -> ShareText {
    let text = format!(
        "💧 Rainwater calculator: results\n\
         Surface: {surface} m²\n\
         Annual rainfall: {rainfall} mm\n\
         Coefficient: {coefficient}\n\
         ➡️ Estimated liters per year: {liters} L\n\
         Equiv.: {tanks} tanks | {loads} wash loads | {flushes} flushes.\n\
         {tags}",
        surface = inputs.surface_area,
        rainfall = inputs.rainfall_mm,
        coefficient = inputs.coefficient_label,
        liters = format_liters(result.liters_per_year),
        tanks = format_one_decimal(result.tank_fills),
        loads = format_one_decimal(result.wash_loads),
        flushes = format_whole(result.toilet_flushes),
        tags = SHARE_HASHTAGS,
    );
    ShareText(text)
}
