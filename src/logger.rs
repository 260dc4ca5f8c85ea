use std::sync::LazyLock;
use strum_macros::{Display, EnumString};

/// Severity levels understood by the logging macros, ordered from most to least verbose.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum LogLevel {
    Event,
    Log,
    Info,
    Warn,
    Error,
}

/// Minimum level read once from `AGC_LOG_LEVEL`, falling back to `log`.
static MIN_LEVEL: LazyLock<LogLevel> = LazyLock::new(|| {
    std::env::var("AGC_LOG_LEVEL").ok().and_then(|v| v.parse().ok()).unwrap_or(LogLevel::Log)
});

pub fn enabled(level: LogLevel) -> bool { level >= *MIN_LEVEL }

pub fn timestamp() -> String { chrono::Utc::now().format("%H:%M:%S%.3f").to_string() }

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Info) {
            println!("\x1b[32m[INFO] [{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Log) {
            println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Warn) {
            println!("\x1b[35m[WARN] [{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Error) {
            eprintln!("\x1b[31m[ERROR][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!("\x1b[1;31m[FATAL][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
    };
}

/// Mission phase changes and anomalies, printed unless the level is raised to `error`.
#[macro_export]
macro_rules! phase {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Warn) {
            println!("\x1b[1;34m[PHASE][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}

/// Per-tick chatter, only printed when `AGC_LOG_LEVEL=event`.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Event) {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}
