//! Application messages for inter-thread communication.

use popatlas_service::Feature;

/// Messages sent from background threads to the main UI loop.
pub enum AppMessage {
    /// An identify query completed.
    ///
    /// `seq` ties the result to the tap that launched it; a result whose
    /// sequence is no longer the latest is stale and gets dropped.
    IdentifyComplete { seq: u64, features: Vec<Feature> },

    /// An identify query failed.
    IdentifyFailed {
        seq: u64,
        context: String,
        message: String,
    },

    /// A log message for the console.
    Log(LogEntry),
}

/// Log level for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    /// Short console tag.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
            LogLevel::Success => "ok",
        }
    }
}

/// A log entry for the console panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: std::time::SystemTime,
}

impl LogEntry {
    fn new(level: LogLevel, msg: impl Into<String>) -> Self {
        Self {
            level,
            message: msg.into(),
            timestamp: std::time::SystemTime::now(),
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, msg)
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, msg)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tags() {
        assert_eq!(LogLevel::Info.label(), "info");
        assert_eq!(LogLevel::Warning.label(), "warn");
        assert_eq!(LogLevel::Error.label(), "error");
        assert_eq!(LogLevel::Success.label(), "ok");
    }

    #[test]
    fn constructors_set_the_level() {
        assert_eq!(LogEntry::info("a").level, LogLevel::Info);
        assert_eq!(LogEntry::warning("b").level, LogLevel::Warning);
        assert_eq!(LogEntry::error("c").level, LogLevel::Error);
        assert_eq!(LogEntry::success("d").level, LogLevel::Success);
    }
}
