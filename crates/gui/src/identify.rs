//! Background identify queries against the feature service.

use crossbeam_channel::Sender;

use popatlas_service::blocking::identify_at;
use popatlas_service::{ClientOptions, FeatureService, IdentifyParams};

use crate::state::{AppMessage, LogEntry};

/// Tap tolerance in screen pixels, matching the original identify call.
pub const TAP_TOLERANCE_PX: f64 = 10.0;

/// Web-mercator ground resolution at the equator, metres per pixel at zoom 0
/// with 256-pixel tiles.
const GROUND_RESOLUTION_Z0: f64 = 156_543.033_928;

/// Convert the pixel tolerance to metres at the given latitude and zoom.
pub fn tap_tolerance_meters(lat: f64, zoom: f64) -> f64 {
    TAP_TOLERANCE_PX * GROUND_RESOLUTION_Z0 * lat.to_radians().cos().abs() / 2f64.powf(zoom)
}

/// Launch an identify query at the given WGS-84 lon/lat on a worker thread.
///
/// Results arrive as [`AppMessage::IdentifyComplete`] or
/// [`AppMessage::IdentifyFailed`] tagged with `seq`.
pub fn dispatch_identify(seq: u64, lon: f64, lat: f64, tolerance_m: f64, tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(format!(
            "Identify at {lon:.5}, {lat:.5}..."
        ))));

        let params = IdentifyParams::new(lon, lat)
            .tolerance_meters(tolerance_m)
            .max_results(5);

        match identify_at(
            FeatureService::WorldPopulation2015,
            &params,
            ClientOptions::default(),
        ) {
            Ok(features) => {
                let _ = tx.send(AppMessage::IdentifyComplete { seq, features });
            }
            Err(e) => {
                let _ = tx.send(AppMessage::IdentifyFailed {
                    seq,
                    context: "Identify".to_string(),
                    message: e.to_string(),
                });
            }
        }
    });
}
