// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hover/selection state of the district map.
//!
//! Interaction events are reduced into a new [`MapSelectionState`] plus a
//! list of effects for the view to carry out. Styling and framing are then
//! derived from the state instead of being mutated inside event handlers.

/// Pointer and click input on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    PointerEnter(String),
    PointerLeave(String),
    PolygonClick(String),
    /// Click on the map outside every polygon
    BackgroundClick,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEffect {
    /// Notify the parent of the new selection (`None` when cleared)
    NotifySelect(Option<String>),
    /// Reframe the map around the district with this slug
    FitBounds(String),
}

/// Interaction phase as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Idle,
    Hovering(&'a str),
    Selected(&'a str),
}

/// Which district is selected and which one is under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSelectionState {
    pub selected: Option<String>,
    pub hovered: Option<String>,
}

impl MapSelectionState {
    /// Apply one event, returning the next state and the effects to run.
    pub fn apply(&self, event: &MapEvent) -> (MapSelectionState, Vec<MapEffect>) {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match event {
            MapEvent::PointerEnter(slug) => {
                next.hovered = Some(slug.clone());
            }
            MapEvent::PointerLeave(slug) => {
                if next.hovered.as_deref() == Some(slug.as_str()) {
                    next.hovered = None;
                }
            }
            MapEvent::PolygonClick(slug) => {
                next.selected = Some(slug.clone());
                effects.push(MapEffect::NotifySelect(Some(slug.clone())));
                effects.push(MapEffect::FitBounds(slug.clone()));
            }
            MapEvent::BackgroundClick => {
                next.selected = None;
                next.hovered = None;
                effects.push(MapEffect::NotifySelect(None));
            }
        }

        (next, effects)
    }

    /// Hover wins over selection while the pointer is on a polygon.
    pub fn phase(&self) -> Phase<'_> {
        match (&self.hovered, &self.selected) {
            (Some(hovered), _) => Phase::Hovering(hovered),
            (None, Some(selected)) => Phase::Selected(selected),
            (None, None) => Phase::Idle,
        }
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.as_deref() == Some(slug)
    }

    pub fn is_hovered(&self, slug: &str) -> bool {
        self.hovered.as_deref() == Some(slug)
    }
}
