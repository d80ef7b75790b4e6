//! The logging interface and its `log` crate adapter.
//!
//! [`Logger`] is the object-safe interface of an engine; the process-wide
//! functions forward to a `&'static dyn Logger`. Every [`Engine`] also
//! implements [`log::Log`], so it can be handed to [`log::set_logger`]: the
//! record target is used as the tag and `Trace` is treated as
//! [`Severity::Verbose`].
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

use lock_api::RawMutex;

use crate::{clock::Clock, engine::Engine, error::Result, severity::Severity, sink::Sink};

/// Operations of a tag-filtered logger.
///
/// Tags longer than [`TAG_CAPACITY`](crate::tag::TAG_CAPACITY) bytes are
/// truncated wherever they are accepted.
pub trait Logger {
    /// Prepares the output transport. Call once at startup.
    fn init(&self);

    /// Returns true if a message at `severity` for `tag` would be emitted.
    fn should_emit(&self, tag: &str, severity: Severity) -> bool;

    /// Emits one formatted line if `tag` and `severity` pass the gate.
    fn log(&self, severity: Severity, tag: &str, args: fmt::Arguments<'_>);

    /// Emits `bytes` as a single line of hex tokens.
    fn log_hex(&self, severity: Severity, tag: &str, bytes: &[u8]);

    /// Emits `bytes` as an offset-annotated memory dump.
    fn log_dump(&self, severity: Severity, tag: &str, bytes: &[u8]);

    /// Sets the minimum severity for `tag`.
    fn set_level(&self, tag: &str, severity: Severity) -> Result<()>;

    /// Sets the threshold for tags without their own level.
    fn set_default_level(&self, severity: Severity);

    /// Silences `tag` regardless of its level.
    fn exclude_tag(&self, tag: &str) -> Result<()>;

    /// Lifts a previous [`exclude_tag`](Logger::exclude_tag).
    fn include_tag(&self, tag: &str) -> Result<()>;

    /// Moves buffered output to the sink. Returns the number of bytes written,
    /// which is zero while the sink is not ready.
    fn process_buffer(&self) -> usize;
}

impl<S, C, R, const N: usize> log::Log for Engine<S, C, R, N>
where
    S: Sink + Send + Sync,
    C: Clock + Send + Sync,
    R: RawMutex + Send + Sync,
{
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::should_emit(self, metadata.target(), metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, record.level().into(), record.target(), *record.args());
    }

    fn flush(&self) {
        Logger::process_buffer(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::MockClock, config::Config, lock::SpinRawMutex, sink::MockSink};
    use log::Log;

    fn engine(sink: MockSink) -> Engine<MockSink, MockClock, SpinRawMutex, 64> {
        let mut clock = MockClock::new();
        clock.expect_now_ms().return_const(8u32);
        Engine::new(sink, clock, Config::new().with_colors(false))
    }

    #[test]
    fn records_use_target_as_tag() {
        let mut sink = MockSink::new();
        sink.expect_is_ready().return_const(true);
        sink.expect_write().withf(|bytes| bytes == b"(8)[VERBOSE][net]: trace 1\n").times(1).return_const(());

        let engine = engine(sink);
        Log::log(
            &engine,
            &log::Record::builder().target("net").level(log::Level::Trace).args(format_args!("trace {}", 1)).build(),
        );
    }

    #[test]
    fn enabled_matches_the_gate() {
        let engine = engine(MockSink::new());
        Logger::set_level(&engine, "disk", Severity::Warn).unwrap();

        let warn = log::Metadata::builder().target("disk").level(log::Level::Warn).build();
        let info = log::Metadata::builder().target("disk").level(log::Level::Info).build();
        assert!(engine.enabled(&warn));
        assert!(!engine.enabled(&info));

        Logger::exclude_tag(&engine, "disk").unwrap();
        assert!(!engine.enabled(&warn));
    }

    #[test]
    fn flush_waits_for_the_sink() {
        let mut sink = MockSink::new();
        sink.expect_is_ready().return_const(false);
        sink.expect_write().never();

        let engine = engine(sink);
        Logger::log(&engine, Severity::Info, "x", format_args!("held"));
        assert_eq!(engine.buffered_len(), 19);

        // Still not ready, so nothing moves.
        engine.flush();
        assert_eq!(engine.buffered_len(), 19);
    }
}
