//! Cyclemark
//!
//! Board support for benchmark harnesses running on RISC-V targets. The library exposes the
//! three lifecycle hooks expected by the harness ([initialise_board], [start_trigger] and
//! [stop_trigger]) and reads the hardware cycle counter around the measured region.

// Mark the crate as no_std, but only when not running tests.
// We need std to be able to run tests in user-space on the host architecture.
#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod config;
pub mod logger;
pub mod platform;

mod trigger;

pub use trigger::{elapsed_cycles, initialise_board, start_trigger, stop_trigger};

// ————————————————————————————— Panic Handler —————————————————————————————— //

/// Configure a panic handler for a bare-metal benchmark binary.
///
/// The handler logs the panic info on the platform console and then parks the hart, as there is
/// no supervisor to report the failure to.
#[macro_export]
macro_rules! board_panic {
    () => {
        #[panic_handler]
        fn panic(info: &core::panic::PanicInfo) -> ! {
            $crate::log::error!("Benchmark panicked: {:#?}", info);
            loop {
                core::hint::spin_loop();
            }
        }
    };
}

// Re-exported for the `board_panic!` macro.
pub use log;
