//! Configuration constants
//!
//! The constants in this file are parsed at compile time from environment variables, so a board
//! configuration can be baked into the benchmark image without any runtime cost.

use config_helpers::{is_enabled, parse_str_or, parse_usize_or};

// ———————————————————————— Configuration Parameters ———————————————————————— //

/// The desired log level.
pub const LOG_LEVEL: &str = parse_str_or(option_env!("BOARD_LOG_LEVEL"), "info");

/// If colors in logs are enabled.
pub const LOG_COLOR: bool = is_enabled!("BOARD_LOG_COLOR");

/// MMIO base address of the debug UART.
pub const UART_BASE: usize = parse_usize_or(option_env!("BOARD_UART_BASE"), 0x10000000);
