//! Compile-time configuration helpers
//!
//! The board configuration is passed through environment variables at build time and parsed in
//! `const` context, so invalid values fail the build rather than the benchmark run.

#![no_std]

// ———————————————————————————————— Helpers ————————————————————————————————— //

/// Helper macro to check if a boolean choice is enabled by the configuration, defaulting to yes.
///
/// The current implementation works around the limitation of const functions in rust at the
/// time of writing.
#[macro_export]
macro_rules! is_enabled {
    ($env_var: tt) => {
        match option_env!($env_var) {
            Some(env_var) => match env_var.as_bytes() {
                b"false" => false,
                _ => true,
            },
            None => true,
        }
    };
}

// ————————————————————————————— Value Parsing —————————————————————————————— //

pub const fn parse_usize(env_var: Option<&str>) -> Option<usize> {
    match env_var {
        Some(value) => match usize::from_str_radix(value, 10) {
            Ok(value) => Some(value),
            Err(_) => panic!("Failed to parse integer from configuration"),
        },
        None => None,
    }
}

pub const fn parse_usize_or(env_var: Option<&str>, default: usize) -> usize {
    match parse_usize(env_var) {
        Some(value) => value,
        None => default,
    }
}

pub const fn parse_str_or(env_var: Option<&'static str>, default: &'static str) -> &'static str {
    match env_var {
        Some(var) => var,
        None => default,
    }
}

// ————————————————————————————————— Tests —————————————————————————————————— //
