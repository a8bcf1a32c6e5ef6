//! Main application: PopAtlasApp implements eframe::App.

use crossbeam_channel::{Receiver, Sender};
use egui_dock::{DockArea, DockState, Style, TabViewer};

use popatlas_service::{summarize, FeatureService, FeatureSummary};

use crate::dock::{create_dock_state, PanelId};
use crate::identify::{dispatch_identify, tap_tolerance_meters};
use crate::menu::{show_menu_bar, MenuAction};
use crate::panels::console::show_console;
use crate::panels::feature_info::show_feature_info;
use crate::panels::map_view::{show_map, MapAction};
use crate::panels::places::show_places;
use crate::render::basemap::{BasemapState, BasemapStyle};
use crate::state::{AppMessage, LogEntry, Place};

/// The main application state.
pub struct PopAtlasApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// Message channels for background thread communication.
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,

    /// Basemap tiles, style, and pan/zoom state.
    basemap: BasemapState,

    /// Attributes of the last identified feature.
    feature: Option<FeatureSummary>,

    /// Map position of the last identified feature (selection marker).
    selection: Option<(f64, f64)>,

    /// Currently highlighted entry in the places list.
    selected_place: Option<usize>,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Sequence number of the most recent identify query; completions
    /// carrying an older sequence are stale ("last tap wins").
    identify_seq: u64,

    /// Whether an identify query is in flight.
    identifying: bool,

    /// Pending modal error dialog text.
    error_dialog: Option<String>,

    /// Show about dialog.
    show_about: bool,
}

impl PopAtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Dark theme without window shadows
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let (tx, rx) = crossbeam_channel::unbounded();

        // The original opens on the night-streets style, world view.
        let mut basemap = BasemapState::new(&cc.egui_ctx, BasemapStyle::NightStreets, 0.0, 20.0);
        basemap.reset_view();

        let mut app = Self {
            dock_state: create_dock_state(),
            tx,
            rx,
            basemap,
            feature: None,
            selection: None,
            selected_place: None,
            logs: Vec::new(),
            identify_seq: 0,
            identifying: false,
            error_dialog: None,
            show_about: false,
        };

        app.logs.push(LogEntry::info("PopAtlas started"));
        app.logs.push(LogEntry::info(format!(
            "Feature layer: {}",
            FeatureService::WorldPopulation2015.layer_url()
        )));

        app
    }

    /// Process pending messages from background threads.
    fn process_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::IdentifyComplete { seq, features } => {
                    if seq != self.identify_seq {
                        self.logs
                            .push(LogEntry::info("Stale identify result discarded"));
                        continue;
                    }
                    self.identifying = false;

                    let Some(first) = features.first() else {
                        self.logs
                            .push(LogEntry::info("No features at the tap point"));
                        continue;
                    };

                    let summary = summarize(first);
                    self.selection = first.geometry.map(|g| (g.x, g.y));
                    self.logs.push(LogEntry::success(format!(
                        "Identified: {}",
                        summary.country.as_deref().unwrap_or("(unnamed feature)")
                    )));
                    self.feature = Some(summary);
                }

                AppMessage::IdentifyFailed {
                    seq,
                    context,
                    message,
                } => {
                    self.logs
                        .push(LogEntry::error(format!("{context}: {message}")));
                    // Only the latest query may raise the dialog; a stale
                    // failure was already superseded by a newer tap.
                    if seq == self.identify_seq {
                        self.identifying = false;
                        self.error_dialog = Some(message);
                    }
                }

                AppMessage::Log(entry) => {
                    self.logs.push(entry);
                }
            }
        }
    }

    /// Swap the active basemap style.
    fn change_basemap(&mut self, ctx: &egui::Context, style: BasemapStyle) {
        if style == self.basemap.style() {
            return;
        }
        self.basemap.set_style(ctx, style);
        self.logs
            .push(LogEntry::info(format!("Basemap: {}", style.name())));
    }

    /// Centre the map on a preset location.
    fn go_to_place(&mut self, index: usize) {
        let Some(place) = Place::by_index(index) else {
            return;
        };
        self.basemap.center_on(place.lon, place.lat);
        self.selected_place = Some(index);
        self.logs
            .push(LogEntry::info(format!("Centred on {}", place.name)));
    }

    /// Launch an identify query for a tap at the given WGS-84 lon/lat.
    fn launch_identify(&mut self, lon: f64, lat: f64) {
        self.identify_seq += 1;
        self.identifying = true;

        let zoom = self.basemap.memory.zoom();
        let tolerance_m = tap_tolerance_meters(lat, zoom);

        dispatch_identify(self.identify_seq, lon, lat, tolerance_m, self.tx.clone());
    }
}

impl eframe::App for PopAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending messages
        self.process_messages();

        // Keep repainting while a query is in flight so its completion shows
        // without waiting for the next input event.
        if self.identifying {
            ctx.request_repaint();
        }

        // Menu bar
        let current_basemap = self.basemap.style();
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            match show_menu_bar(ui, current_basemap) {
                MenuAction::Exit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                MenuAction::ChangeBasemap(style) => {
                    self.change_basemap(ctx, style);
                }
                MenuAction::ResetView => {
                    self.basemap.reset_view();
                }
                MenuAction::GoTo(index) => {
                    self.go_to_place(index);
                }
                MenuAction::About => {
                    self.show_about = true;
                }
                MenuAction::None => {}
            }
        });

        // Basemap selector bar
        egui::TopBottomPanel::top("basemap_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Basemap:");

                let mut picked = None;
                egui::ComboBox::from_id_salt("basemap_select")
                    .selected_text(current_basemap.name())
                    .show_ui(ui, |ui| {
                        for (index, &style) in BasemapStyle::ALL.iter().enumerate() {
                            if ui
                                .selectable_label(style == current_basemap, style.name())
                                .clicked()
                            {
                                picked = Some(BasemapStyle::from_index(index));
                            }
                        }
                    });
                if let Some(style) = picked {
                    self.change_basemap(ctx, style);
                }

                ui.separator();
                ui.label("World Population Data 2015 (UN)");

                if self.identifying {
                    ui.separator();
                    ui.spinner();
                    ui.label("Identifying...");
                }
            });
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About PopAtlas")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("PopAtlas Desktop");
                    ui.label("World-population map viewer");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Modal error dialog: every handler failure lands here with the
        // error's message text.
        if let Some(message) = self.error_dialog.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.error_dialog = None;
                    }
                });
        }

        // Main dock area
        let mut tab_viewer = PopAtlasTabViewer {
            basemap: &mut self.basemap,
            feature: self.feature.as_ref(),
            selection: self.selection,
            logs: &self.logs,
            selected_place: &mut self.selected_place,
            map_action: MapAction::None,
            place_clicked: None,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Extract results before dropping the borrow
        let map_action = std::mem::replace(&mut tab_viewer.map_action, MapAction::None);
        let place_clicked = tab_viewer.place_clicked.take();
        drop(tab_viewer);

        if let MapAction::Identify { lon, lat } = map_action {
            self.launch_identify(lon, lat);
        }

        if let Some(index) = place_clicked {
            self.go_to_place(index);
        }
    }
}

/// TabViewer implementation for egui_dock.
struct PopAtlasTabViewer<'a> {
    basemap: &'a mut BasemapState,
    feature: Option<&'a FeatureSummary>,
    selection: Option<(f64, f64)>,
    logs: &'a [LogEntry],
    selected_place: &'a mut Option<usize>,
    /// Action from the map panel.
    map_action: MapAction,
    /// Action from the places panel.
    place_clicked: Option<usize>,
}

impl<'a> TabViewer for PopAtlasTabViewer<'a> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Map => {
                self.map_action = show_map(ui, self.basemap, self.selection);
            }

            PanelId::Places => {
                if let Some(index) = show_places(ui, self.selected_place) {
                    self.place_clicked = Some(index);
                }
            }

            PanelId::Feature => {
                show_feature_info(ui, self.feature);
            }

            PanelId::Console => {
                show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false // Panels cannot be closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> PopAtlasApp {
        let ctx = egui::Context::default();
        let (tx, rx) = crossbeam_channel::unbounded();

        PopAtlasApp {
            dock_state: create_dock_state(),
            tx,
            rx,
            basemap: BasemapState::new(&ctx, BasemapStyle::OpenStreetMap, 0.0, 20.0),
            feature: None,
            selection: None,
            selected_place: None,
            logs: Vec::new(),
            identify_seq: 0,
            identifying: false,
            error_dialog: None,
            show_about: false,
        }
    }

    fn failed(seq: u64) -> AppMessage {
        AppMessage::IdentifyFailed {
            seq,
            context: "Identify".to_string(),
            message: "connection timed out".to_string(),
        }
    }

    #[test]
    fn current_failure_opens_the_dialog() {
        let mut app = test_app();
        app.identify_seq = 1;
        app.identifying = true;

        app.tx.send(failed(1)).unwrap();
        app.process_messages();

        assert_eq!(app.error_dialog.as_deref(), Some("connection timed out"));
        assert!(!app.identifying);
    }

    #[test]
    fn stale_failure_only_logs() {
        let mut app = test_app();
        app.identify_seq = 2;
        app.identifying = true;

        app.tx.send(failed(1)).unwrap();
        app.process_messages();

        assert!(app.error_dialog.is_none());
        assert!(app.identifying, "the newer query is still in flight");
        assert!(app
            .logs
            .iter()
            .any(|e| e.message.contains("connection timed out")));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = test_app();
        app.identify_seq = 2;
        app.identifying = true;

        app.tx
            .send(AppMessage::IdentifyComplete {
                seq: 1,
                features: Vec::new(),
            })
            .unwrap();
        app.process_messages();

        assert!(app.feature.is_none());
        assert!(app.identifying);
    }
}
