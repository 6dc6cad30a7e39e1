//! Host platform, running in userspace.
//!
//! When compiled for tests the debug console output is captured in a buffer so tests can assert
//! on the exact bytes the board would have sent over the wire.

use core::fmt;

use super::Platform;

#[cfg(test)]
use {core::fmt::Write, spin::Mutex, std::string::String};

#[cfg(test)]
static CAPTURED_OUTPUT: Mutex<String> = Mutex::new(String::new());

pub struct HostPlatform {}

impl Platform for HostPlatform {
    fn name() -> &'static str {
        "Host"
    }

    fn init() {}

    #[cfg(test)]
    fn debug_print(args: fmt::Arguments) {
        CAPTURED_OUTPUT
            .lock()
            .write_fmt(args)
            .expect("Failed to capture debug output");
    }

    #[cfg(not(test))]
    fn debug_print(args: fmt::Arguments) {
        // No console is attached when running as a plain userspace library.
        let _ = args;
    }
}

/// Drain the captured debug console output.
#[cfg(test)]
pub fn take_output() -> String {
    core::mem::take(&mut *CAPTURED_OUTPUT.lock())
}
