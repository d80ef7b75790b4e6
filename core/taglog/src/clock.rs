//! Millisecond time sources for line timestamps.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

/// A monotonic millisecond counter. Wrapping at `u32::MAX` is acceptable.
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> u32;
}

/// A clock backed by a plain function, such as a platform tick counter.
#[derive(Debug, Clone, Copy)]
pub struct FnClock(pub fn() -> u32);

impl Clock for FnClock {
    fn now_ms(&self) -> u32 {
        (self.0)()
    }
}

/// A clock that always reads zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroClock;

impl Clock for ZeroClock {
    fn now_ms(&self) -> u32 {
        0
    }
}

/// Milliseconds since the first reading, from the host monotonic clock.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdClock {
    origin: spin::Once<std::time::Instant>,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose origin is set on first use.
    pub const fn new() -> Self {
        Self { origin: spin::Once::new() }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        let origin = self.origin.call_once(std::time::Instant::now);
        // Truncation wraps roughly every 49 days.
        origin.elapsed().as_millis() as u32
    }
}
