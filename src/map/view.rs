// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive kecamatan map.
//!
//! `MapView` owns the fetched districts, the selection state and the current
//! viewport. Input arrives as [`MapEvent`]s; [`MapView::render`] derives the
//! tile layer, the styled polygons and the viewport from that state.

use crate::map::state::{MapEffect, MapEvent, MapSelectionState};
use crate::map::style::{style_for, PolygonStyle};
use crate::models::{Bounds, EnrichedDistrict, LatLng};
use serde_json::Value;
use std::fmt::Display;

/// Padding around a district when zooming to it, in pixels.
pub const FIT_PADDING_PX: u32 = 20;

/// Used until districts arrive, or when none has usable bounds.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -10.55,
    lng: 121.85,
};
pub const DEFAULT_ZOOM: u8 = 10;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Where the map is looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { center: LatLng, zoom: u8 },
    FitBounds { bounds: Bounds, padding: u32 },
}

/// Base raster layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayer {
    pub url: &'static str,
    pub attribution: &'static str,
}

/// One district polygon ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonLayer<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub geometry: &'a Value,
    pub style: PolygonStyle,
}

/// What the hosting page should show.
#[derive(Debug, Clone, PartialEq)]
pub enum MapRender<'a> {
    Loading,
    /// Fetch failed; the page offers a retry
    Error { message: &'a str },
    Map {
        tiles: TileLayer,
        polygons: Vec<PolygonLayer<'a>>,
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Vec<EnrichedDistrict>),
    Failed(String),
}

/// Identifies one fetch; results from older fetches are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// District map with a parent selection callback.
pub struct MapView<F>
where
    F: FnMut(Option<&EnrichedDistrict>),
{
    load: LoadState,
    selection: MapSelectionState,
    viewport: Viewport,
    on_district_select: F,
    generation: u64,
    mounted: bool,
}

impl<F> MapView<F>
where
    F: FnMut(Option<&EnrichedDistrict>),
{
    /// Mount a view; it shows the loading state until a fetch completes.
    pub fn new(on_district_select: F) -> Self {
        Self {
            load: LoadState::Loading,
            selection: MapSelectionState::default(),
            viewport: Viewport::Center {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            on_district_select,
            generation: 0,
            mounted: true,
        }
    }

    /// Start a fetch. Also used by the page's retry button.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Deliver a fetch result. Returns false if the result was dropped
    /// because the view unmounted or a newer fetch started.
    pub fn finish_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<EnrichedDistrict>, E>,
    ) -> bool {
        if !self.mounted || ticket.0 != self.generation {
            tracing::debug!(ticket = ticket.0, "Dropping stale district fetch");
            return false;
        }

        match result {
            Ok(districts) => {
                self.viewport = initial_viewport(&districts);
                self.selection = MapSelectionState::default();
                self.load = LoadState::Ready(districts);
            }
            Err(e) => {
                tracing::warn!(error = %e, "District fetch failed");
                self.load = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Tear down: later fetch results and events are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn selection(&self) -> &MapSelectionState {
        &self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handle one interaction event.
    pub fn dispatch(&mut self, event: MapEvent) {
        if !self.mounted {
            return;
        }
        let LoadState::Ready(districts) = &self.load else {
            return;
        };

        // Events for polygons that are not on the map are ignored
        let known_slug = match &event {
            MapEvent::PointerEnter(slug)
            | MapEvent::PointerLeave(slug)
            | MapEvent::PolygonClick(slug) => districts.iter().any(|d| &d.slug == slug),
            MapEvent::BackgroundClick => true,
        };
        if !known_slug {
            return;
        }

        let (next, effects) = self.selection.apply(&event);
        for effect in effects {
            match effect {
                MapEffect::NotifySelect(slug) => {
                    let district = slug
                        .as_deref()
                        .and_then(|s| districts.iter().find(|d| d.slug == s));
                    (self.on_district_select)(district);
                }
                MapEffect::FitBounds(slug) => {
                    let bounds = districts
                        .iter()
                        .find(|d| d.slug == slug)
                        .map(|d| d.coordinates.bounds)
                        .filter(|b| !b.is_empty());
                    if let Some(bounds) = bounds {
                        self.viewport = Viewport::FitBounds {
                            bounds,
                            padding: FIT_PADDING_PX,
                        };
                    }
                }
            }
        }
        self.selection = next;
    }

    /// Derive what to draw from the current state.
    pub fn render(&self) -> MapRender<'_> {
        match &self.load {
            LoadState::Loading => MapRender::Loading,
            LoadState::Failed(message) => MapRender::Error { message },
            LoadState::Ready(districts) => MapRender::Map {
                tiles: TileLayer {
                    url: TILE_URL,
                    attribution: TILE_ATTRIBUTION,
                },
                polygons: districts
                    .iter()
                    .filter(|d| !d.geometry.is_null())
                    .map(|d| PolygonLayer {
                        slug: &d.slug,
                        name: &d.name,
                        geometry: &d.geometry,
                        style: style_for(d.code, &d.slug, &self.selection),
                    })
                    .collect(),
                viewport: self.viewport,
            },
        }
    }
}

/// Frame every district that has bounds.
fn initial_viewport(districts: &[EnrichedDistrict]) -> Viewport {
    districts
        .iter()
        .map(|d| d.coordinates.bounds)
        .filter(|b| !b.is_empty())
        .reduce(|a, b| a.union(&b))
        .map_or(
            Viewport::Center {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            |bounds| Viewport::FitBounds {
                bounds,
                padding: FIT_PADDING_PX,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::style::{hover_style, resting_style};
    use crate::services::{DistrictService, InMemoryGeoRepository, TableStatsProvider};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn districts() -> Vec<EnrichedDistrict> {
        let json_data = std::fs::read_to_string("data/kecamatan_sabu_raijua.geojson")
            .expect("bundled kecamatan data should exist");
        DistrictService::new(
            Arc::new(InMemoryGeoRepository::new(json_data)),
            Arc::new(TableStatsProvider::seeded(1)),
        )
        .list_districts()
        .unwrap()
        .districts
    }

    type Calls = Rc<RefCell<Vec<Option<String>>>>;

    fn ready_view() -> (MapView<impl FnMut(Option<&EnrichedDistrict>)>, Calls) {
        let calls: Calls = Rc::default();
        let sink = calls.clone();
        let mut view = MapView::new(move |d: Option<&EnrichedDistrict>| {
            sink.borrow_mut().push(d.map(|d| d.slug.clone()))
        });
        let ticket = view.begin_load();
        assert!(view.finish_load(ticket, Ok::<_, String>(districts())));
        (view, calls)
    }

    fn polygon_style<'a>(render: &MapRender<'a>, slug: &str) -> PolygonStyle {
        match render {
            MapRender::Map { polygons, .. } => polygons
                .iter()
                .find(|p| p.slug == slug)
                .map(|p| p.style.clone())
                .unwrap(),
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_click_raijua_then_background() {
        let (mut view, calls) = ready_view();

        view.dispatch(MapEvent::PolygonClick("raijua".to_string()));
        assert_eq!(*calls.borrow(), vec![Some("raijua".to_string())]);

        view.dispatch(MapEvent::BackgroundClick);
        assert_eq!(
            *calls.borrow(),
            vec![Some("raijua".to_string()), None]
        );
        assert_eq!(view.selection().selected, None);
    }

    #[test]
    fn test_click_reframes_to_district_bounds() {
        let (mut view, _) = ready_view();
        let before = view.viewport();

        view.dispatch(MapEvent::PolygonClick("sabu-timur".to_string()));
        let Viewport::FitBounds { bounds, padding } = view.viewport() else {
            panic!("expected fit bounds");
        };
        assert_eq!(padding, FIT_PADDING_PX);
        assert_eq!(bounds.east, 122.02);
        assert_ne!(view.viewport(), before);

        // Background click keeps the current framing
        view.dispatch(MapEvent::BackgroundClick);
        assert_eq!(view.viewport(), Viewport::FitBounds { bounds, padding });
    }

    #[test]
    fn test_initial_viewport_covers_all_districts() {
        let (view, _) = ready_view();
        let Viewport::FitBounds { bounds, .. } = view.viewport() else {
            panic!("expected fit bounds");
        };
        // Pulau Dana (part of Raijua) is the southwestern extreme
        assert_eq!(bounds.west, 121.27);
        assert_eq!(bounds.south, -10.85);
        assert_eq!(bounds.east, 122.02);
    }

    #[test]
    fn test_hover_and_leave_restyle() {
        let (mut view, _) = ready_view();
        let code = 532001;

        view.dispatch(MapEvent::PointerEnter("sabu-barat".to_string()));
        assert_eq!(polygon_style(&view.render(), "sabu-barat"), hover_style(code));

        view.dispatch(MapEvent::PointerLeave("sabu-barat".to_string()));
        assert_eq!(
            polygon_style(&view.render(), "sabu-barat"),
            resting_style(code, false)
        );

        view.dispatch(MapEvent::PolygonClick("sabu-barat".to_string()));
        view.dispatch(MapEvent::PointerEnter("sabu-barat".to_string()));
        view.dispatch(MapEvent::PointerLeave("sabu-barat".to_string()));
        assert_eq!(
            polygon_style(&view.render(), "sabu-barat"),
            resting_style(code, true)
        );
    }

    #[test]
    fn test_unknown_slug_is_ignored() {
        let (mut view, calls) = ready_view();
        view.dispatch(MapEvent::PolygonClick("kupang".to_string()));
        assert!(calls.borrow().is_empty());
        assert_eq!(view.selection().selected, None);
    }

    #[test]
    fn test_failed_fetch_renders_error() {
        let mut view = MapView::new(|_: Option<&EnrichedDistrict>| {});
        assert_eq!(view.render(), MapRender::Loading);

        let ticket = view.begin_load();
        view.finish_load(ticket, Err::<Vec<EnrichedDistrict>, _>("HTTP 500"));
        assert_eq!(view.render(), MapRender::Error { message: "HTTP 500" });

        // Events on a failed map do nothing
        view.dispatch(MapEvent::BackgroundClick);
        assert_eq!(view.selection(), &MapSelectionState::default());
    }

    #[test]
    fn test_result_after_unmount_is_dropped() {
        let calls: Calls = Rc::default();
        let sink = calls.clone();
        let mut view = MapView::new(move |d: Option<&EnrichedDistrict>| {
            sink.borrow_mut().push(d.map(|d| d.slug.clone()))
        });

        let ticket = view.begin_load();
        view.unmount();
        assert!(!view.finish_load(ticket, Ok::<_, String>(districts())));
        assert_eq!(view.render(), MapRender::Loading);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut view = MapView::new(|_: Option<&EnrichedDistrict>| {});
        let first = view.begin_load();
        let second = view.begin_load();

        assert!(!view.finish_load(first, Err::<Vec<EnrichedDistrict>, _>("timeout")));
        assert!(view.finish_load(second, Ok::<_, String>(districts())));
        assert!(matches!(view.render(), MapRender::Map { .. }));
    }

    #[test]
    fn test_polygons_without_geometry_are_not_drawn() {
        let mut list = districts();
        list[0].geometry = Value::Null;
        list[0].coordinates = Default::default();

        let mut view = MapView::new(|_: Option<&EnrichedDistrict>| {});
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok::<_, String>(list));

        let MapRender::Map { polygons, .. } = view.render() else {
            panic!("expected map");
        };
        assert_eq!(polygons.len(), 5);
    }
}
