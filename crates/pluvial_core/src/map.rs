//! Static water-availability zones shown on the map panel.

/// Viewports narrower than this get the zoomed-out map.
pub const NARROW_VIEWPORT_WIDTH: u32 = 768;
pub const DEFAULT_ZOOM: u8 = 13;
pub const NARROW_ZOOM: u8 = 12;
/// Map centre as (latitude, longitude).
pub const MAP_CENTER: (f64, f64) = (19.2076, -99.9172);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneColor {
    Red,
    Orange,
    Green,
}

impl ZoneColor {
    pub fn name(self) -> &'static str {
        match self {
            ZoneColor::Red => "red",
            ZoneColor::Orange => "orange",
            ZoneColor::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapZone {
    pub name: &'static str,
    pub color: ZoneColor,
    pub corners: [(f64, f64); 4],
    pub fill_opacity: f64,
}

const ZONES: [MapZone; 3] = [
    MapZone {
        name: "Water scarcity",
        color: ZoneColor::Red,
        corners: [
            (19.210, -99.930),
            (19.205, -99.930),
            (19.205, -99.920),
            (19.210, -99.920),
        ],
        fill_opacity: 0.4,
    },
    MapZone {
        name: "Medium water",
        color: ZoneColor::Orange,
        corners: [
            (19.200, -99.940),
            (19.195, -99.940),
            (19.195, -99.930),
            (19.200, -99.930),
        ],
        fill_opacity: 0.4,
    },
    MapZone {
        name: "Water abundance",
        color: ZoneColor::Green,
        corners: [
            (19.215, -99.910),
            (19.210, -99.910),
            (19.210, -99.900),
            (19.215, -99.900),
        ],
        fill_opacity: 0.4,
    },
];

impl MapZone {
    pub fn defaults() -> &'static [MapZone] {
        &ZONES
    }
}

pub fn zoom_for_viewport_width(width: u32) -> u8 {
    if width < NARROW_VIEWPORT_WIDTH {
        NARROW_ZOOM
    } else {
        DEFAULT_ZOOM
    }
}
