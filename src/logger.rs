//! Structured logging implementation

use core::sync::atomic::{AtomicBool, Ordering};

use log::{Level, LevelFilter, Metadata, Record};

use crate::config;
use crate::platform::{Plat, Platform};

// ————————————————————————————————— Logger ————————————————————————————————— //

pub struct Logger {}

impl Logger {
    const GLOBAL_LOG_LEVEL: LevelFilter = match config::LOG_LEVEL.as_bytes() {
        b"trace" => LevelFilter::Trace,
        b"debug" => LevelFilter::Debug,
        b"info" => LevelFilter::Info,
        b"warn" => LevelFilter::Warn,
        b"error" => LevelFilter::Error,
        b"off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    };
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Self::GLOBAL_LOG_LEVEL >= metadata.level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Plat::debug_print(format_args!(
                "[{} | {}] {}\n",
                level_display(record.level()),
                record.target(),
                record.args()
            ))
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    static IS_INITIALIZED: AtomicBool = AtomicBool::new(false);

    match IS_INITIALIZED.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst) {
        Ok(_) => {
            // The logger can only be set once, and we are the only ones setting it.
            let _ = log::set_logger(&Logger {});
            log::set_max_level(Logger::GLOBAL_LOG_LEVEL);
        }
        Err(_) => {
            log::warn!("Logger is already initialized, skipping init");
        }
    };
}

// ————————————————————————————————— Utils —————————————————————————————————— //

fn level_display(level: Level) -> &'static str {
    level_tag(level, config::LOG_COLOR)
}

fn level_tag(level: Level, color: bool) -> &'static str {
    if color {
        // We log with colors, using ANSI escape sequences
        match level {
            Level::Error => "\x1b[31;1mError\x1b[0m",
            Level::Warn => "\x1b[33;1mWarn\x1b[0m ",
            Level::Info => "\x1b[32;1mInfo\x1b[0m ",
            Level::Debug => "\x1b[34;1mDebug\x1b[0m",
            Level::Trace => "\x1b[35;1mTrace\x1b[0m",
        }
    } else {
        match level {
            Level::Error => "Error",
            Level::Warn => "Warn ",
            Level::Info => "Info ",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
        }
    }
}
