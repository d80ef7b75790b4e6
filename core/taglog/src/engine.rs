//! The logging engine.
//!
//! An [`Engine`] bundles the sink, the clock, and all mutable state (gate
//! tables, ring buffer, statistics) behind a single [`lock_api::Mutex`]. It is
//! `const` constructible so it can live in a `static`, and it is a plain value
//! so tests can build as many independent instances as they like.
//!
//! ## Examples
//!
//! ```
//! use taglog::{clock::ZeroClock, sink::NullSink, Config, Engine, Logger, Severity};
//!
//! static ENGINE: Engine<NullSink, ZeroClock> = Engine::new(NullSink, ZeroClock, Config::new());
//!
//! ENGINE.set_level("net", Severity::Warn).unwrap();
//! assert!(ENGINE.should_emit("net", Severity::Error));
//! assert!(!ENGINE.should_emit("net", Severity::Info));
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt::{self, Write};

use lock_api::RawMutex;

use crate::{
    clock::Clock,
    config::{Config, BUFFER_SIZE},
    error::{Error, Result},
    format::{format_dump, format_hex, format_line, Chunk},
    gate::Gate,
    lock::DefaultRawMutex,
    logger::Logger,
    ring_buffer::RingBuffer,
    severity::Severity,
    sink::Sink,
    tag::Tag,
};

/// Counters for output that was lost or shortened.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Bytes the ring buffer could not keep.
    pub dropped_bytes: usize,
    /// Lines whose text was cut to fit the staging buffers.
    pub truncated_lines: usize,
}

impl Stats {
    const fn new() -> Self {
        Self { dropped_bytes: 0, truncated_lines: 0 }
    }

    /// Turns the counters into an error, dropped output first.
    ///
    /// Counters saturate rather than wrap, so a loss is never hidden.
    pub const fn check(&self) -> Result<()> {
        if self.dropped_bytes > 0 {
            Err(Error::BufferOverrun)
        } else if self.truncated_lines > 0 {
            Err(Error::FormatTruncated)
        } else {
            Ok(())
        }
    }
}

/// Everything guarded by the engine lock.
#[derive(Debug)]
struct State<const N: usize> {
    gate: Gate,
    buffer: RingBuffer<N>,
    stats: Stats,
}

/// A complete logger instance.
///
/// `S` is the output port, `C` the timestamp source, `R` the lock backend, and
/// `N` the ring buffer size.
pub struct Engine<S, C, R = DefaultRawMutex, const N: usize = BUFFER_SIZE> {
    sink: S,
    clock: C,
    colors: bool,
    state: lock_api::Mutex<R, State<N>>,
}

impl<S, C, R, const N: usize> Engine<S, C, R, N>
where
    R: RawMutex,
{
    /// Creates an engine with empty tables, an empty ring buffer, and a
    /// permissive default level.
    pub const fn new(sink: S, clock: C, config: Config) -> Self {
        Self {
            sink,
            clock,
            colors: config.colors,
            state: lock_api::Mutex::const_new(
                R::INIT,
                State { gate: Gate::new(), buffer: RingBuffer::new(config.overflow), stats: Stats::new() },
            ),
        }
    }

    /// Returns the output port.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns true if text lines carry color codes.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Returns the loss counters.
    pub fn stats(&self) -> Stats {
        self.state.lock().stats
    }

    /// Number of bytes waiting in the ring buffer.
    pub fn buffered_len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Returns the threshold in force for `tag`.
    pub fn effective_threshold(&self, tag: &str) -> Severity {
        self.state.lock().gate.effective_threshold(&Tag::new(tag))
    }

    /// Returns the most permissive filter any tag can pass, for use with
    /// [`log::set_max_level`].
    pub fn max_level_filter(&self) -> log::LevelFilter {
        self.state.lock().gate.loosest_threshold().into()
    }
}

impl<S, C, R, const N: usize> Engine<S, C, R, N>
where
    S: Sink,
    C: Clock,
    R: RawMutex,
{
    /// Hands `bytes` to the sink, or to the ring buffer if the sink is not ready.
    fn emit(&self, state: &mut State<N>, bytes: &[u8]) {
        if self.sink.is_ready() {
            self.sink.write(bytes);
        } else {
            let dropped = state.buffer.write(bytes);
            state.stats.dropped_bytes = state.stats.dropped_bytes.saturating_add(dropped);
        }
    }

    /// Runs a configuration change, reporting a failure through the sink.
    fn configure(&self, change: impl FnOnce(&mut Gate) -> Result<()>) -> Result<()> {
        let mut state = self.state.lock();
        let result = change(&mut state.gate);
        if let Err(error) = result {
            self.diagnose(error);
        }
        result
    }

    /// Prints `"Error: <text>"` when the sink is ready. Otherwise the
    /// diagnostic is dropped; it never goes to the ring buffer.
    fn diagnose(&self, error: Error) {
        if self.sink.is_ready() {
            let mut text = Chunk::new();
            let _ = writeln!(text, "Error: {error}");
            self.sink.write(text.as_bytes());
        }
    }
}

impl<S, C, R, const N: usize> Logger for Engine<S, C, R, N>
where
    S: Sink,
    C: Clock,
    R: RawMutex,
{
    fn init(&self) {
        self.sink.init();
    }

    fn should_emit(&self, tag: &str, severity: Severity) -> bool {
        self.state.lock().gate.should_emit(&Tag::new(tag), severity)
    }

    fn log(&self, severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
        let tag = Tag::new(tag);
        if !self.state.lock().gate.should_emit(&tag, severity) {
            return;
        }

        // Rendered outside the lock so that Display impls may log themselves.
        let line = format_line(self.clock.now_ms(), severity, &tag, args, self.colors);

        let mut state = self.state.lock();
        if line.is_truncated() {
            state.stats.truncated_lines = state.stats.truncated_lines.saturating_add(1);
        }
        self.emit(&mut state, line.as_bytes());
    }

    fn log_hex(&self, severity: Severity, tag: &str, bytes: &[u8]) {
        let tag = Tag::new(tag);
        let mut state = self.state.lock();
        if !state.gate.should_emit(&tag, severity) {
            return;
        }

        for chunk in format_hex(self.clock.now_ms(), &tag, bytes) {
            self.emit(&mut state, chunk.as_bytes());
        }
    }

    fn log_dump(&self, severity: Severity, tag: &str, bytes: &[u8]) {
        let tag = Tag::new(tag);
        let mut state = self.state.lock();
        if !state.gate.should_emit(&tag, severity) {
            return;
        }

        for chunk in format_dump(self.clock.now_ms(), &tag, bytes) {
            self.emit(&mut state, chunk.as_bytes());
        }
    }

    fn set_level(&self, tag: &str, severity: Severity) -> Result<()> {
        self.configure(|gate| gate.set_level(Tag::new(tag), severity))
    }

    fn set_default_level(&self, severity: Severity) {
        self.state.lock().gate.set_default_level(severity);
    }

    fn exclude_tag(&self, tag: &str) -> Result<()> {
        self.configure(|gate| gate.exclude(Tag::new(tag)))
    }

    fn include_tag(&self, tag: &str) -> Result<()> {
        self.configure(|gate| gate.include(&Tag::new(tag)))
    }

    fn process_buffer(&self) -> usize {
        let mut state = self.state.lock();
        if !self.sink.is_ready() {
            return 0;
        }
        state.buffer.drain_into(&self.sink)
    }
}

impl<S, C, R, const N: usize> fmt::Debug for Engine<S, C, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine").field("colors", &self.colors).field("buffer_size", &N).finish_non_exhaustive()
    }
}
