use chrono::Local;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Mutex;

// Minimum level echoed to stderr
static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} {}", self.timestamp, self.level.label(), self.message)
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current) = LOG_LEVEL.lock() {
        *current = level;
    }
}

pub fn get_log_level() -> LogLevel {
    LOG_LEVEL
        .lock()
        .map(|level| *level)
        .unwrap_or(LogLevel::Warning)
}

/// Echo a message to stderr when it meets the current level.
///
/// Output goes to stderr only, so machine-readable stdout stays untouched.
pub fn log(level: LogLevel, message: &str) {
    if level < get_log_level() {
        return;
    }

    let entry = LogEntry {
        timestamp: Local::now().format("%H:%M:%S").to_string(),
        level,
        message: message.to_string(),
    };
    eprintln!("{}", entry);
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_round_trip() {
        set_log_level(LogLevel::Debug);
        assert_eq!(get_log_level(), LogLevel::Debug);
        set_log_level(LogLevel::Warning);
        assert_eq!(get_log_level(), LogLevel::Warning);
    }

    #[test]
    fn test_entry_format() {
        let entry = LogEntry {
            timestamp: "12:00:00".to_string(),
            level: LogLevel::Info,
            message: "Validating report.md".to_string(),
        };
        assert_eq!(entry.to_string(), "[12:00:00] INFO  Validating report.md");
    }
}
