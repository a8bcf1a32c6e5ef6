//! Feature info panel: country, region, and population of the last
//! identified feature as title/value pairs.

use egui::Ui;

use popatlas_service::FeatureSummary;

/// Show the feature info panel.
pub fn show_feature_info(ui: &mut Ui, summary: Option<&FeatureSummary>) {
    ui.heading("Feature");
    ui.separator();

    let Some(summary) = summary else {
        ui.centered_and_justified(|ui| {
            ui.label("Tap the map to identify a country.");
        });
        return;
    };

    egui::Grid::new("feature_attributes")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.strong("Country");
            ui.label(summary.country.as_deref().unwrap_or(""));
            ui.end_row();

            ui.strong("Region");
            ui.label(summary.region.as_deref().unwrap_or(""));
            ui.end_row();

            ui.strong("2015 Population");
            ui.label(summary.population.as_deref().unwrap_or(""));
            ui.end_row();
        });
}
