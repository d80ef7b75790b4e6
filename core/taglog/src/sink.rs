//! Output ports for formatted log bytes.
//!
//! A [`Sink`] receives finished byte sequences. The engine only writes to a
//! sink that reports itself ready; otherwise the bytes go to the ring buffer
//! and wait for [`process_buffer`](crate::Logger::process_buffer).
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

/// A destination for log output.
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait Sink {
    /// Prepare the transport. Called once by `init`.
    fn init(&self) {}

    /// Write `bytes` in order. Writes never fail from the caller's point of view.
    fn write(&self, bytes: &[u8]);

    /// Returns true when the transport can accept bytes.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn init(&self) {
        (**self).init()
    }

    fn write(&self, bytes: &[u8]) {
        (**self).write(bytes)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _bytes: &[u8]) {}
}

/// Writes to the process standard output.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

#[cfg(feature = "std")]
impl Sink for Stdout {
    fn write(&self, bytes: &[u8]) {
        use std::io::Write;

        let mut out = std::io::stdout().lock();
        // Output errors have nowhere to be reported.
        let _ = out.write_all(bytes);
        let _ = out.flush();
    }
}

/// Wraps a sink whose link is not always up.
///
/// The wrapper reports ready only after [`Gated::set_ready`] has been called
/// with `true` and the inner sink is ready as well.
#[derive(Debug)]
pub struct Gated<S> {
    inner: S,
    ready: AtomicBool,
}

impl<S> Gated<S> {
    /// Wraps `inner`, starting out not ready.
    pub const fn new(inner: S) -> Self {
        Self { inner, ready: AtomicBool::new(false) }
    }

    /// Marks the link as up or down.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }

    /// Returns the wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Sink> Sink for Gated<S> {
    fn init(&self) {
        self.inner.init()
    }

    fn write(&self, bytes: &[u8]) {
        self.inner.write(bytes)
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire) && self.inner.is_ready()
    }
}
