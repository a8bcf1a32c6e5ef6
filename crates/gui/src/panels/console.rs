//! Console panel: log messages with colored levels.

use egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::{LogEntry, LogLevel};

fn level_color(level: LogLevel) -> Color32 {
    match level {
        LogLevel::Info => Color32::from_gray(200),
        LogLevel::Warning => Color32::from_rgb(235, 170, 60),
        LogLevel::Error => Color32::from_rgb(235, 90, 80),
        LogLevel::Success => Color32::from_rgb(110, 210, 130),
    }
}

/// Show the console panel with log messages.
pub fn show_console(ui: &mut Ui, logs: &[LogEntry]) {
    ui.heading("Console");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logs {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(wall_clock(entry))
                            .weak()
                            .monospace()
                            .size(11.0),
                    );
                    ui.label(
                        RichText::new(format!("{:>5}", entry.level.label()))
                            .color(level_color(entry.level))
                            .monospace()
                            .size(11.0),
                    );
                    ui.label(RichText::new(&entry.message).size(11.0));
                });
            }
        });
}

/// HH:MM:SS (UTC) of the entry timestamp.
fn wall_clock(entry: &LogEntry) -> String {
    let since_epoch = entry
        .timestamp
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = since_epoch.as_secs() % 86400;
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
