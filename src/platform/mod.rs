//! Platform support
//!
//! The platform abstracts the debug console used for the benchmark report and the logs.

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
mod host;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod virt;

use core::fmt;

use crate::arch::{Arch, Architecture};
use crate::logger;

// ————————————————————————————— Select Platform ———————————————————————————— //

/// Export the current platform.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub type Plat = virt::VirtPlatform;

/// Host platform, running in userspace.
#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
pub type Plat = host::HostPlatform;

#[cfg(all(test, not(any(target_arch = "riscv32", target_arch = "riscv64"))))]
pub use host::take_output;

// ————————————————————————— Platform Definition ———————————————————————————— //

pub trait Platform {
    fn name() -> &'static str;
    fn init();

    /// Write directly to the platform debug console, bypassing the logger.
    fn debug_print(args: fmt::Arguments);
}

pub fn init() {
    Plat::init();
    logger::init();
    Arch::init();

    log::debug!("Board initialized on platform: {}", Plat::name());
}
