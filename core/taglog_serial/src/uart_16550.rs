//! [Sink](taglog::Sink) implementation for a 16550 compatible UART.
//!
//! The port is initialized by the `uart_16550` crate and then switched to the
//! requested baud rate by reprogramming the divisor latch.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use taglog::Sink;
use uart_16550::MmioSerialPort;
use uart_16550::SerialPort as IoSerialPort;
use x86_64::instructions::{interrupts, port::Port};

use crate::DEFAULT_BAUD_RATE;

/// Rate of the divisor latch input: the 1.8432 MHz reference over 16.
const BASE_BAUD: u32 = 115_200;

const DATA: usize = 0;
const INTERRUPT_ENABLE: usize = 1;
const LINE_CONTROL: usize = 3;

const LCR_DLAB: u8 = 0x80;
const LCR_8N1: u8 = 0x03;

/// How the UART registers are reached.
#[derive(Debug, Clone, Copy)]
pub enum Interface {
    /// I/O ports starting at the given base.
    Io(u16),
    /// Memory mapped registers `reg_stride` bytes apart.
    Mmio { base: usize, reg_stride: usize },
}

/// A 16550 UART used as a log sink.
#[derive(Debug)]
pub struct Uart {
    interface: Interface,
    baud: u32,
}

impl Uart {
    /// Creates a sink at [`DEFAULT_BAUD_RATE`].
    ///
    /// # Safety
    ///
    /// `interface` must describe the registers of a 16550 compatible UART that
    /// nothing else drives.
    pub const unsafe fn new(interface: Interface) -> Self {
        Self { interface, baud: DEFAULT_BAUD_RATE }
    }

    /// Overrides the baud rate programmed by `init`.
    pub const fn with_baud(self, baud: u32) -> Self {
        Self { baud, ..self }
    }

    fn write_register(&self, register: usize, value: u8) {
        match self.interface {
            Interface::Io(base) => {
                let mut port = Port::<u8>::new(base + register as u16);
                // SAFETY: the constructor contract guarantees a 16550 at `base`.
                unsafe { port.write(value) };
            }
            Interface::Mmio { base, reg_stride } => {
                let address = (base + register * reg_stride) as *mut u8;
                // SAFETY: the constructor contract guarantees mapped 16550 registers.
                unsafe { address.write_volatile(value) };
            }
        }
    }

    fn set_divisor(&self, divisor: u16) {
        let [low, high] = divisor.to_le_bytes();
        self.write_register(LINE_CONTROL, LCR_DLAB);
        self.write_register(DATA, low);
        self.write_register(INTERRUPT_ENABLE, high);
        self.write_register(LINE_CONTROL, LCR_8N1);
    }
}

/// Divisor latch value for `baud`, clamped to the valid range.
pub(crate) const fn divisor_for(baud: u32) -> u16 {
    let baud = if baud == 0 { 1 } else { baud };
    let divisor = BASE_BAUD / baud;
    if divisor == 0 {
        1
    } else if divisor > u16::MAX as u32 {
        u16::MAX
    } else {
        divisor as u16
    }
}

impl Sink for Uart {
    fn init(&self) {
        match self.interface {
            Interface::Io(base) => {
                // SAFETY: the constructor contract guarantees a 16550 at `base`.
                let mut serial_port = unsafe { IoSerialPort::new(base) };
                serial_port.init();
            }
            Interface::Mmio { base, reg_stride } => {
                // SAFETY: the constructor contract guarantees mapped 16550 registers.
                let mut serial_port = unsafe { MmioSerialPort::new_with_stride(base, reg_stride) };
                serial_port.init();
            }
        }
        // The crate default is 38400 baud.
        interrupts::without_interrupts(|| self.set_divisor(divisor_for(self.baud)));
    }

    fn write(&self, bytes: &[u8]) {
        match self.interface {
            Interface::Io(base) => {
                // SAFETY: the constructor contract guarantees a 16550 at `base`.
                let mut serial_port = unsafe { IoSerialPort::new(base) };
                interrupts::without_interrupts(|| {
                    for b in bytes {
                        serial_port.send(*b);
                    }
                });
            }
            Interface::Mmio { base, reg_stride } => {
                // SAFETY: the constructor contract guarantees mapped 16550 registers.
                let mut serial_port = unsafe { MmioSerialPort::new_with_stride(base, reg_stride) };
                interrupts::without_interrupts(|| {
                    for b in bytes {
                        serial_port.send(*b);
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_matches_common_rates() {
        assert_eq!(divisor_for(115_200), 1);
        assert_eq!(divisor_for(57_600), 2);
        assert_eq!(divisor_for(38_400), 3);
        assert_eq!(divisor_for(9_600), 12);
    }

    #[test]
    fn divisor_is_clamped() {
        assert_eq!(divisor_for(0), u16::MAX);
        assert_eq!(divisor_for(1), u16::MAX);
        assert_eq!(divisor_for(921_600), 1);
    }

    #[test]
    fn default_rate_is_115200() {
        // SAFETY: the UART is never touched.
        let uart = unsafe { Uart::new(Interface::Io(0x3F8)) };
        assert_eq!(uart.baud, DEFAULT_BAUD_RATE);
        assert_eq!(uart.with_baud(9_600).baud, 9_600);
    }
}
