// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Choropleth polygon styles derived from the selection state.

use crate::map::state::MapSelectionState;
use serde::Serialize;

/// Resting fill colors. A district's color is keyed by its Kemendagri code,
/// so it stays the same however the source orders its features.
pub const PALETTE: [&str; 8] = [
    "#2563eb", // blue
    "#16a34a", // green
    "#ea580c", // orange
    "#9333ea", // purple
    "#dc2626", // red
    "#0891b2", // cyan
    "#ca8a04", // amber
    "#db2777", // pink
];

const DEFAULT_STROKE: &str = "#ffffff";
const SELECTED_STROKE: &str = "#1e3a8a";
const HOVER_STROKE: &str = "#f59e0b";

pub const DEFAULT_WEIGHT: f64 = 2.0;
pub const SELECTED_WEIGHT: f64 = 4.0;
pub const HOVER_WEIGHT: f64 = 3.0;

pub const DEFAULT_FILL_OPACITY: f64 = 0.6;
pub const SELECTED_FILL_OPACITY: f64 = 1.0;
pub const HOVER_FILL_OPACITY: f64 = 0.85;

/// Leaflet-style path options for one district polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStyle {
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub fill_opacity: f64,
}

pub fn palette_color(code: u64) -> &'static str {
    PALETTE[(code % PALETTE.len() as u64) as usize]
}

/// Style when the pointer is elsewhere.
pub fn resting_style(code: u64, selected: bool) -> PolygonStyle {
    if selected {
        PolygonStyle {
            fill_color: palette_color(code),
            color: SELECTED_STROKE,
            weight: SELECTED_WEIGHT,
            fill_opacity: SELECTED_FILL_OPACITY,
        }
    } else {
        PolygonStyle {
            fill_color: palette_color(code),
            color: DEFAULT_STROKE,
            weight: DEFAULT_WEIGHT,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

pub fn hover_style(code: u64) -> PolygonStyle {
    PolygonStyle {
        fill_color: palette_color(code),
        color: HOVER_STROKE,
        weight: HOVER_WEIGHT,
        fill_opacity: HOVER_FILL_OPACITY,
    }
}

/// Current style of a district: hover overrides selection.
pub fn style_for(code: u64, slug: &str, state: &MapSelectionState) -> PolygonStyle {
    if state.is_hovered(slug) {
        hover_style(code)
    } else {
        resting_style(code, state.is_selected(slug))
    }
}
