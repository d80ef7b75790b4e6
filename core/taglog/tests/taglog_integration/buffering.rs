//! Ring buffer fallback through the engine.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

use taglog::{ring_buffer::OverflowPolicy, Config, Engine, Logger, Severity, Stats};

use super::common::{CaptureSink, FixedClock, TestEngine};

fn engine<const N: usize>(policy: OverflowPolicy) -> TestEngine<N> {
    Engine::new(CaptureSink::new(false), FixedClock(7), Config::new().with_colors(false).with_overflow(policy))
}

#[test]
fn buffered_lines_drain_in_order() {
    let engine: TestEngine = engine(OverflowPolicy::DropNewest);
    engine.log(Severity::Info, "a", format_args!("first"));
    engine.log_hex(Severity::Info, "a", &[0x10, 0x20]);
    engine.log(Severity::Error, "b", format_args!("second"));
    assert_eq!(engine.sink().take(), "");

    engine.sink().set_ready(true);
    let expected = "(7)[INFO][a]: first\n(7)[HEX][a]: 10 20 \n(7)[ERROR][b]: second\n";
    assert_eq!(engine.process_buffer(), expected.len());
    assert_eq!(engine.sink().take(), expected);
    assert_eq!(engine.process_buffer(), 0);
}

#[test]
fn ready_sink_bypasses_the_buffer() {
    let engine: TestEngine = engine(OverflowPolicy::DropNewest);
    engine.sink().set_ready(true);
    engine.log(Severity::Info, "a", format_args!("direct"));

    assert_eq!(engine.buffered_len(), 0);
    assert_eq!(engine.sink().take(), "(7)[INFO][a]: direct\n");
}

#[test]
fn drop_newest_keeps_the_start_of_the_stream() {
    // 31 usable bytes; each line is 21 bytes.
    let engine: TestEngine<32> = engine(OverflowPolicy::DropNewest);
    engine.log(Severity::Info, "t", format_args!("line 1"));
    engine.log(Severity::Info, "t", format_args!("line 2"));

    assert_eq!(engine.stats(), Stats { dropped_bytes: 11, truncated_lines: 0 });
    engine.sink().set_ready(true);
    engine.process_buffer();
    assert_eq!(engine.sink().take(), "(7)[INFO][t]: line 1\n(7)[INFO][");
}

#[test]
fn overwrite_oldest_keeps_the_end_of_the_stream() {
    let engine: TestEngine<32> = engine(OverflowPolicy::OverwriteOldest);
    engine.log(Severity::Info, "t", format_args!("line 1"));
    engine.log(Severity::Info, "t", format_args!("line 2"));

    assert_eq!(engine.stats().dropped_bytes, 11);
    engine.sink().set_ready(true);
    engine.process_buffer();
    assert_eq!(engine.sink().take(), "]: line 1\n(7)[INFO][t]: line 2\n");
}
