//! Tag-Filtered Logging for Constrained Targets
//!
//! This library provides a small logging engine for targets with little memory
//! and no allocator. Every message carries a short tag and a [`Severity`]; a
//! per-tag threshold table and an exclusion set decide what reaches the output.
//! Output is rendered into fixed stack buffers and written to a [`Sink`]. When
//! the sink is not ready, for example a serial link that is not up yet, output
//! is kept in a ring buffer until [`process_buffer`] is called.
//!
//! ## Examples and Usage
//!
//! On a hosted target the `std` feature provides a stdout engine:
//!
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() {
//! use taglog::{logi, logw, Severity};
//!
//! taglog::init().unwrap();
//! taglog::set_level("net", Severity::Warn).unwrap();
//!
//! logi!("net", "link up at {} Mbit/s", 100); // below the threshold for "net"
//! logw!("net", "retransmit {}", 3);
//! taglog::log_hex(Severity::Info, "rx", &[0xAB, 0x00, 0xFF]);
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//! Embedded targets declare their own engine over a transport from
//! `taglog_serial`, or any other [`Sink`], and install it with [`init_with`].
//!
//! ```
//! use taglog::{clock::FnClock, sink::{Gated, NullSink}, Config, Engine};
//!
//! fn ticks() -> u32 {
//!     0
//! }
//!
//! static ENGINE: Engine<Gated<NullSink>, FnClock> = Engine::new(Gated::new(NullSink), FnClock(ticks), Config::new());
//!
//! taglog::init_with(&ENGINE).unwrap();
//! taglog::loge!("main", "written to the ring buffer until the link is up");
//! ENGINE.sink().set_ready(true);
//! taglog::process_buffer();
//! ```
//!
//! Every engine is also a [`log::Log`] implementation, with the record target
//! used as the tag.
//!
//! ## Features
//!
//! - `std`: stdout sink, host clock, and the default process-wide engine.
//! - `colors` (default): ANSI color codes around each text line.
//! - `buffer-overwrite`: a full ring buffer discards its oldest bytes instead of new ones.
//! - `mutex-spin` (default), `mutex-os`, `mutex-none`: the lock backend.
//! - `alloc`: unbounded tag tables over `BTreeMap` and `BTreeSet`.
//!
//! The ring buffer size is taken from the `TAGLOG_BUFFER_SIZE` environment
//! variable at build time and defaults to 1024 bytes.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(all(not(feature = "std"), not(test), not(feature = "mockall")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod gate;
mod global;
pub mod lock;
pub mod logger;
mod macros;
pub mod registry;
pub mod ring_buffer;
pub mod severity;
pub mod sink;
pub mod tag;

pub use config::Config;
pub use engine::{Engine, Stats};
pub use error::{Error, Result};
pub use global::{
    exclude_tag, include_tag, init_with, install, log, log_dump, log_hex, logger, process_buffer, set_default_level,
    set_level, should_emit,
};
#[cfg(feature = "std")]
pub use global::{init, std_engine, StdEngine};
pub use logger::Logger;
pub use severity::Severity;
pub use sink::Sink;
pub use tag::Tag;
