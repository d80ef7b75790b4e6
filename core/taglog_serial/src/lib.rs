//! Serial [`Sink`](taglog::Sink) implementations for the taglog engine.
//!
//! All transports run at [`DEFAULT_BAUD_RATE`] unless told otherwise, with
//! 8 data bits, no parity, one stop bit, and no flow control.
//!
//! ```no_run
//! use taglog::{clock::ZeroClock, Config, Engine};
//! use taglog_serial::UartPl011;
//!
//! // SAFETY: the PL011 registers of this board are identity mapped at this address.
//! static ENGINE: Engine<UartPl011, ZeroClock> =
//!     Engine::new(unsafe { UartPl011::new(0x0900_0000, 24_000_000) }, ZeroClock, Config::new());
//!
//! taglog::init_with(&ENGINE).unwrap();
//! taglog::logi!("boot", "serial console up");
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(not(test), no_std)]

/// Symbol rate used by every transport unless overridden.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        mod uart_16550;
        pub use uart_16550::{Interface, Uart as Uart16550};
    }
}

mod uart_pl011;
pub use uart_pl011::Uart as UartPl011;

pub use taglog::sink::{Gated, NullSink};
