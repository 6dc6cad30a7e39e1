//! Bare metal RISC-V
//!
//! Cycle counter access through the unprivileged counter CSRs, see RISC-V Unprivileged ISA,
//! chapter "Base Counters and Timers".

use core::arch::asm;

use super::Architecture;

/// Bare metal RISC-V runtime.
pub struct MetalArch {}

impl Architecture for MetalArch {
    fn init() {
        // The cycle counter is free-running, nothing to configure.
    }

    #[cfg(target_arch = "riscv64")]
    fn read_cycle() -> u64 {
        let cycle: u64;
        unsafe {
            asm!(
                "csrr {x}, cycle",
                x = out(reg) cycle);
        }
        cycle
    }

    #[cfg(target_arch = "riscv32")]
    fn read_cycle() -> u64 {
        // On RV32 the counter spans the cycle and cycleh CSRs, so the halves are combined with
        // the rollover-safe read sequence.
        super::read_cycle_split(read_cycle_lo, read_cycle_hi)
    }
}

// ————————————————————————————— RV32 CSR Reads ————————————————————————————— //

#[cfg(target_arch = "riscv32")]
fn read_cycle_lo() -> u32 {
    let lo: u32;
    unsafe {
        asm!(
            "csrr {x}, cycle",
            x = out(reg) lo);
    }
    lo
}

#[cfg(target_arch = "riscv32")]
fn read_cycle_hi() -> u32 {
    let hi: u32;
    unsafe {
        asm!(
            "csrr {x}, cycleh",
            x = out(reg) hi);
    }
    hi
}
