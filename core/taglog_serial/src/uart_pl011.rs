//! [Sink](taglog::Sink) implementation for an Arm PL011 UART.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use taglog::Sink;

use crate::DEFAULT_BAUD_RATE;

mod regs {
    pub const DR: usize = 0x00;
    pub const FR: usize = 0x18;
    pub const IBRD: usize = 0x24;
    pub const FBRD: usize = 0x28;
    pub const LCR_H: usize = 0x2C;
    pub const CR: usize = 0x30;

    pub const FR_BUSY: u32 = 1 << 3;
    pub const FR_TXFF: u32 = 1 << 5;

    pub const LCR_H_FEN: u32 = 1 << 4;
    pub const LCR_H_WLEN_8: u32 = 0b11 << 5;

    pub const CR_UARTEN: u32 = 1 << 0;
    pub const CR_TXE: u32 = 1 << 8;
    pub const CR_RXE: u32 = 1 << 9;
}

/// A PL011 UART used as a log sink.
///
/// The sink reports ready once the UART is enabled, so output logged before
/// `init` is held in the engine's ring buffer.
#[derive(Debug)]
pub struct Uart {
    base_address: usize,
    clock_hz: u32,
    baud: u32,
}

impl Uart {
    /// Creates a sink for the PL011 at `base_address`, fed by a `clock_hz`
    /// reference clock, running at [`DEFAULT_BAUD_RATE`].
    ///
    /// # Safety
    ///
    /// `base_address` must point to the MMIO control registers of a PL011
    /// device, mapped as device memory and not driven by anything else.
    pub const unsafe fn new(base_address: usize, clock_hz: u32) -> Self {
        Self { base_address, clock_hz, baud: DEFAULT_BAUD_RATE }
    }

    /// Overrides the baud rate programmed by `init`.
    pub const fn with_baud(self, baud: u32) -> Self {
        Self { baud, ..self }
    }

    /// Writes a single byte, waiting for room in the transmit FIFO.
    pub fn write_byte(&self, byte: u8) {
        while self.read_reg(regs::FR) & regs::FR_TXFF != 0 {}
        self.write_reg(regs::DR, byte as u32);
        while self.read_reg(regs::FR) & regs::FR_BUSY != 0 {}
    }

    fn read_reg(&self, offset: usize) -> u32 {
        // SAFETY: the constructor contract guarantees mapped PL011 registers.
        unsafe { ((self.base_address + offset) as *const u32).read_volatile() }
    }

    fn write_reg(&self, offset: usize, value: u32) {
        // SAFETY: the constructor contract guarantees mapped PL011 registers.
        unsafe { ((self.base_address + offset) as *mut u32).write_volatile(value) }
    }
}

/// Integer and fractional baud rate divisors for `baud` from `clock_hz`.
///
/// The divisor is `clock_hz / (16 * baud)` in units of 1/64, rounded.
pub(crate) const fn divisors(clock_hz: u32, baud: u32) -> (u32, u32) {
    let baud = if baud == 0 { 1 } else { baud as u64 };
    let scaled = (clock_hz as u64 * 8 / baud + 1) / 2;
    ((scaled >> 6) as u32, (scaled & 0x3F) as u32)
}

impl Sink for Uart {
    fn init(&self) {
        self.write_reg(regs::CR, 0);
        while self.read_reg(regs::FR) & regs::FR_BUSY != 0 {}

        let (integer, fraction) = divisors(self.clock_hz, self.baud);
        self.write_reg(regs::IBRD, integer);
        self.write_reg(regs::FBRD, fraction);
        // 8N1 with FIFOs. LCR_H must follow the divisor writes to latch them.
        self.write_reg(regs::LCR_H, regs::LCR_H_WLEN_8 | regs::LCR_H_FEN);
        self.write_reg(regs::CR, regs::CR_UARTEN | regs::CR_TXE | regs::CR_RXE);
    }

    fn write(&self, bytes: &[u8]) {
        for byte in bytes {
            self.write_byte(*byte);
        }
    }

    fn is_ready(&self) -> bool {
        self.read_reg(regs::CR) & (regs::CR_UARTEN | regs::CR_TXE) == regs::CR_UARTEN | regs::CR_TXE
    }
}
