//! PopAtlas Desktop GUI
//!
//! World-population map viewer: slippy basemaps, preset locations, and
//! tap-to-identify against the UN World Population 2015 feature service.

mod app;
mod dock;
mod identify;
mod menu;
mod panels;
mod render;
mod state;

use app::PopAtlasApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PopAtlas — World Population 2015")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 600.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "PopAtlas",
        native_options,
        Box::new(|cc| Ok(Box::new(PopAtlasApp::new(cc)))),
    )
}
