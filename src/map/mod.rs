// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive district map: fetch, selection state, styling and rendering.

pub mod client;
pub mod state;
pub mod style;
pub mod view;

pub use client::{ClientError, DistrictClient};
pub use state::{MapEffect, MapEvent, MapSelectionState, Phase};
pub use style::PolygonStyle;
pub use view::{MapRender, MapView, PolygonLayer, TileLayer, Viewport};
