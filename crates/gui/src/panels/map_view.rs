//! Map panel: walkers basemap with selection overlay and tap-to-identify.

use std::cell::Cell;

use egui::Ui;
use walkers::{Map, Plugin, Projector};

use crate::render::basemap::BasemapState;
use crate::render::overlay::SelectionMarker;

/// Action returned by the map panel.
pub enum MapAction {
    /// The user tapped the map at the given WGS-84 lon/lat.
    Identify { lon: f64, lat: f64 },
    None,
}

/// Render the map panel. Returns the tap action, if any.
pub fn show_map(ui: &mut Ui, basemap: &mut BasemapState, selection: Option<(f64, f64)>) -> MapAction {
    let tapped = Cell::new(None);

    let home = basemap.home;
    let (tiles, memory) = basemap.tiles_and_memory();

    let mut map = Map::new(Some(tiles), memory, home).with_plugin(TapProbe { out: &tapped });

    if let Some((lon, lat)) = selection {
        map = map.with_plugin(SelectionMarker { lon, lat });
    }

    ui.add(map);

    match tapped.get() {
        Some((lon, lat)) => MapAction::Identify { lon, lat },
        None => MapAction::None,
    }
}

/// Plugin that converts a primary click on the map into a lon/lat tap.
struct TapProbe<'a> {
    out: &'a Cell<Option<(f64, f64)>>,
}

impl Plugin for TapProbe<'_> {
    fn run(self: Box<Self>, ui: &mut Ui, response: &egui::Response, projector: &Projector) {
        let clicked = ui.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });

        if let Some(pos) = clicked {
            if response.rect.contains(pos) && !response.dragged() {
                let geo = projector.unproject(pos.to_vec2());
                self.out.set(Some((geo.x(), geo.y())));
            }
        }
    }
}
