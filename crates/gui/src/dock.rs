//! Dock layout: map-centric panel arrangement using egui_dock.
//!
//! Layout: Map (center, ~72%) | Right sidebar (Places / Feature, ~28%)
//!         ────────────────────┼──────────────────────────────────────
//!         Console (bottom, ~22% of total height)

use egui_dock::{DockState, NodeIndex};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Map,
    Places,
    Feature,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Map => write!(f, "Map"),
            PanelId::Places => write!(f, "Places"),
            PanelId::Feature => write!(f, "Feature"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
pub fn create_dock_state() -> DockState<PanelId> {
    let mut dock_state = DockState::new(vec![PanelId::Map]);

    let [top, _bottom] = dock_state.main_surface_mut().split_below(
        NodeIndex::root(),
        0.78,
        vec![PanelId::Console],
    );

    let [_map, right] =
        dock_state
            .main_surface_mut()
            .split_right(top, 0.72, vec![PanelId::Places]);

    let [_places, _feature] =
        dock_state
            .main_surface_mut()
            .split_below(right, 0.5, vec![PanelId::Feature]);

    dock_state
}
