//! Shared test doubles.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use taglog::{clock::Clock, lock::SpinRawMutex, Config, Engine, Sink};

/// Collects everything written to it. Readiness can be toggled.
#[derive(Debug)]
pub struct CaptureSink {
    bytes: Mutex<Vec<u8>>,
    ready: AtomicBool,
}

impl CaptureSink {
    pub fn new(ready: bool) -> Self {
        Self { bytes: Mutex::new(Vec::new()), ready: AtomicBool::new(ready) }
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Returns and clears the captured text.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl Sink for CaptureSink {
    fn write(&self, bytes: &[u8]) {
        self.bytes.lock().unwrap().extend_from_slice(bytes);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// A clock stuck at a fixed reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn now_ms(&self) -> u32 {
        self.0
    }
}

pub type TestEngine<const N: usize = 1024> = Engine<CaptureSink, FixedClock, SpinRawMutex, N>;

/// An engine with colors off, writing straight to a ready capture sink.
pub fn plain_engine() -> TestEngine {
    Engine::new(CaptureSink::new(true), FixedClock(0), Config::new().with_colors(false))
}
