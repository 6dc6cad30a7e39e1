//! A mock of architecture specific features when running in user space.
//!
//! This implementation is useful for running the board support code on the host (potentially
//! non-riscv) architecture, such as when running unit tests. The mock counter is monotonically
//! increasing: each read advances it by a fixed step, mimicking the passage of time on a real
//! core.

use core::sync::atomic::{AtomicU64, Ordering};

use super::Architecture;

/// Number of mock cycles elapsed between two consecutive counter reads.
const CYCLES_PER_READ: u64 = 16;

static MOCK_CYCLE: AtomicU64 = AtomicU64::new(0);

/// User space mock, running on the host architecture.
pub struct HostArch {}

impl Architecture for HostArch {
    fn init() {}

    fn read_cycle() -> u64 {
        MOCK_CYCLE.fetch_add(CYCLES_PER_READ, Ordering::Relaxed)
    }
}

/// Control over the mock counter, for tests.
pub mod mock {
    use super::*;

    /// Serializes the tests touching the process-wide mock counter. The test runner executes
    /// tests from different modules on parallel threads, so every test that writes or measures
    /// through the mock must hold this lock.
    #[cfg(test)]
    pub(crate) static TEST_LOCK: spin::Mutex<()> = spin::Mutex::new(());

    /// Set the mock cycle counter to an arbitrary value.
    pub fn set_cycle(value: u64) {
        MOCK_CYCLE.store(value, Ordering::Relaxed);
    }

    /// The counter step applied on each read.
    pub const fn cycles_per_read() -> u64 {
        CYCLES_PER_READ
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_counter_is_monotonic() {
        let _guard = mock::TEST_LOCK.lock();

        mock::set_cycle(100);
        let first = HostArch::read_cycle();
        let second = HostArch::read_cycle();
        assert_eq!(first, 100);
        assert!(second > first);
    }
}
