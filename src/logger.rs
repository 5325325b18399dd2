//! Minimal colored stdout logging used across both demo flows.

/// Base macro the leveled macros expand through. Prints the colored tag,
/// a UTC wall-clock timestamp and the formatted message on one line.
#[macro_export]
macro_rules! log_line {
    ($color:literal, $tag:literal, $($arg:tt)*) => {
        println!(
            concat!("\x1b[", $color, "m[", $tag, "][{}]\x1b[0m {}"),
            chrono::Utc::now().format("%H:%M:%S"),
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_line!("32", "INFO ", $($arg)*) };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => { $crate::log_line!("33", "LOG  ", $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_line!("35", "WARN ", $($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_line!("31", "ERROR", $($arg)*) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!(
            "\x1b[1;31m[FATAL][{}]\x1b[0m {}",
            chrono::Utc::now().format("%H:%M:%S"),
            format!($($arg)*)
        )
    };
}

/// Render-command tracing for the debris display, silent unless
/// `LOG_GROUNDLINK_EVENTS` is set.
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("LOG_GROUNDLINK_EVENTS").is_ok() {
            $crate::log_line!("36", "EVENT", $($arg)*)
        }
    };
}
