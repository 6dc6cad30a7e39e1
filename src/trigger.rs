//! Benchmark lifecycle hooks
//!
//! The benchmark harness drives the board through three callbacks with a fixed C ABI:
//! `initialise_board` once at startup, then `start_trigger` and `stop_trigger` around the
//! measured region. The hooks are deliberately kept out of line so they remain stable linkable
//! symbols the harness (and instrumentation) can resolve.

use spin::Mutex;

use crate::arch::{Arch, Architecture};
use crate::platform::{self, Plat, Platform};

/// The process-wide counter slot.
///
/// `start_trigger` stores the counter value at the start of the measured region, `stop_trigger`
/// overwrites it with the elapsed delta. The harness is single-threaded so the lock is never
/// contended.
static CYCLE: Mutex<u64> = Mutex::new(0);

// ——————————————————————————————— Harness ABI —————————————————————————————— //

/// Set up the board: console, logger and counter access.
#[no_mangle]
#[inline(never)]
pub extern "C" fn initialise_board() {
    platform::init();
}

/// Record the cycle counter at the start of the measured region.
#[no_mangle]
#[inline(never)]
pub extern "C" fn start_trigger() {
    *CYCLE.lock() = Arch::read_cycle();
}

/// Compute the elapsed cycle count and report it on the debug console.
///
/// The report line is parsed by the harness and must keep the exact format
/// `cycle = 0x` followed by 16 zero-padded lowercase hex digits.
#[no_mangle]
#[inline(never)]
pub extern "C" fn stop_trigger() {
    let mut cycle = CYCLE.lock();
    let elapsed = Arch::read_cycle().wrapping_sub(*cycle);
    *cycle = elapsed;

    Plat::debug_print(format_args!("cycle = 0x{:016x}\n", elapsed));
}

/// Return the elapsed cycle count recorded by the last `stop_trigger`.
pub fn elapsed_cycles() -> u64 {
    *CYCLE.lock()
}

// ————————————————————————————————— Tests —————————————————————————————————— //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::mock;
    use crate::platform::take_output;

    // The counter, the mock and the capture buffer are process-wide, so the tests touching them
    // serialize on the lock shared with the arch tests.
    use crate::arch::mock::TEST_LOCK;

    #[test]
    fn empty_region_has_small_delta() {
        let _guard = TEST_LOCK.lock();

        mock::set_cycle(1_000);
        start_trigger();
        stop_trigger();
        let _ = take_output();

        // One counter read separates start from stop.
        assert_eq!(elapsed_cycles(), mock::cycles_per_read());
    }

    #[test]
    fn report_line_is_fixed_width_hex() {
        let _guard = TEST_LOCK.lock();

        mock::set_cycle(0xabcd_0000);
        start_trigger();
        stop_trigger();
        let line = take_output();

        let digits = line
            .strip_prefix("cycle = 0x")
            .and_then(|rest| rest.strip_suffix('\n'))
            .expect("malformed report line");
        assert_eq!(digits.len(), 16);
        assert!(digits.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!digits.contains(char::is_uppercase));
    }

    #[test]
    fn report_is_zero_padded() {
        let _guard = TEST_LOCK.lock();

        mock::set_cycle(0);
        start_trigger();
        stop_trigger();

        assert_eq!(take_output(), "cycle = 0x0000000000000010\n");
    }

    #[test]
    fn delta_wraps_on_counter_rollover() {
        let _guard = TEST_LOCK.lock();

        // Counter wraps between start and stop, the delta must still be small.
        mock::set_cycle(u64::MAX - 7);
        start_trigger();
        stop_trigger();
        let _ = take_output();

        assert_eq!(elapsed_cycles(), mock::cycles_per_read());
    }

    /// A writer resetting the mock counter on another thread must never land between a
    /// measurement's start and stop reads, both sides hold the shared lock.
    #[test]
    fn concurrent_counter_writers_serialize() {
        let writer = std::thread::spawn(|| {
            for _ in 0..100 {
                let _guard = TEST_LOCK.lock();
                mock::set_cycle(100);
                let _ = Arch::read_cycle();
            }
        });

        for _ in 0..100 {
            let _guard = TEST_LOCK.lock();
            mock::set_cycle(1_000);
            start_trigger();
            stop_trigger();
            let _ = take_output();
            assert_eq!(elapsed_cycles(), mock::cycles_per_read());
        }

        writer.join().unwrap();
    }
}
