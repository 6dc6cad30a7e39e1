//! QEMU virt / Spike style board
//!
//! The only device the benchmark hooks need is a 16550 UART for the report line and the logs.
//! The MMIO base defaults to QEMU virt's UART and can be overridden through the configuration.

use core::fmt;
use core::fmt::Write;

use spin::Mutex;
use uart_16550::MmioSerialPort;

use super::Platform;
use crate::config;

// ———————————————————————————— Platform Devices ———————————————————————————— //

static SERIAL_PORT: Mutex<Option<MmioSerialPort>> = Mutex::new(None);

// ———————————————————————————————— Platform ———————————————————————————————— //

pub struct VirtPlatform {}

impl Platform for VirtPlatform {
    fn name() -> &'static str {
        "QEMU virt"
    }

    fn init() {
        // Serial
        let mut uart = SERIAL_PORT.lock();
        // SAFETY: the UART base address comes from the board configuration and is only turned
        // into a device once, guarded by the mutex.
        let mut mmio = unsafe { MmioSerialPort::new(config::UART_BASE) };
        mmio.init();
        *uart = Some(mmio);
    }

    fn debug_print(args: fmt::Arguments) {
        let mut serial_port = SERIAL_PORT.lock();
        if let Some(ref mut serial_port) = serial_port.as_mut() {
            serial_port
                .write_fmt(args)
                .expect("Printing to serial failed")
        };
    }
}
