//! Places panel: the five preset locations.

use egui::Ui;

use crate::state::PLACES;

/// Show the places list. Returns the list position if one was clicked.
pub fn show_places(ui: &mut Ui, selected: &mut Option<usize>) -> Option<usize> {
    let mut clicked = None;

    ui.heading("Places");
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, place) in PLACES.iter().enumerate() {
                let is_selected = *selected == Some(index);
                let response = ui.selectable_label(is_selected, place.name);

                if response.clicked() {
                    *selected = Some(index);
                    clicked = Some(index);
                }

                response.on_hover_text(format!("{:.6}, {:.6}", place.lon, place.lat));
            }
        });

    clicked
}
