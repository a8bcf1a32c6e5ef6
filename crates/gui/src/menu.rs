//! Menu bar: File, View, Places, Help.

use egui::Ui;

use crate::render::basemap::BasemapStyle;
use crate::state::PLACES;

/// Actions triggered by menu items.
pub enum MenuAction {
    Exit,
    ChangeBasemap(BasemapStyle),
    ResetView,
    /// Jump to a preset location by list position.
    GoTo(usize),
    About,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui, current_basemap: BasemapStyle) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            if ui.button("Reset View").clicked() {
                action = MenuAction::ResetView;
                ui.close_menu();
            }
            ui.separator();
            ui.menu_button("Basemap", |ui| {
                for &style in BasemapStyle::ALL {
                    let is_current = style == current_basemap;
                    if ui.selectable_label(is_current, style.name()).clicked() {
                        action = MenuAction::ChangeBasemap(style);
                        ui.close_menu();
                    }
                }
            });
        });

        ui.menu_button("Places", |ui| {
            for (index, place) in PLACES.iter().enumerate() {
                if ui.button(place.name).clicked() {
                    action = MenuAction::GoTo(index);
                    ui.close_menu();
                }
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About PopAtlas").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}
