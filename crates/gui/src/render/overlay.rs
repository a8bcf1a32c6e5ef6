//! Map overlay plugin that highlights the identified feature.

use egui::{Color32, Stroke, Ui};
use walkers::{lon_lat, Plugin, Projector};

/// Draws a selection marker at a WGS-84 position on top of the basemap.
pub struct SelectionMarker {
    pub lon: f64,
    pub lat: f64,
}

impl Plugin for SelectionMarker {
    fn run(self: Box<Self>, ui: &mut Ui, _response: &egui::Response, projector: &Projector) {
        let screen = projector.project(lon_lat(self.lon, self.lat));
        let center = egui::pos2(screen.x, screen.y);

        let painter = ui.painter();
        painter.circle_filled(center, 6.0, Color32::from_rgb(0, 200, 255));
        painter.circle_stroke(center, 10.0, Stroke::new(2.0, Color32::WHITE));
    }
}
