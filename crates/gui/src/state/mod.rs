pub mod messages;
pub mod places;

pub use messages::{AppMessage, LogEntry, LogLevel};
pub use places::{Place, PLACES};
