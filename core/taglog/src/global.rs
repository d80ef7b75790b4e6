//! The process-wide logger.
//!
//! One [`Logger`] can be installed per process. The free functions in this
//! module forward to it and quietly do nothing until something is installed,
//! so library code may log unconditionally.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

use spin::Once;

use crate::{
    error::{Error, Result},
    logger::Logger,
    severity::Severity,
};

static LOGGER: Once<&'static (dyn Logger + Sync)> = Once::new();

/// Installs `logger` as the process-wide logger.
///
/// Fails with [`Error::AlreadyInstalled`] if a logger was installed before.
pub fn install(logger: &'static (dyn Logger + Sync)) -> Result<()> {
    let mut installed = false;
    LOGGER.call_once(|| {
        installed = true;
        logger
    });

    if installed {
        Ok(())
    } else {
        Err(Error::AlreadyInstalled)
    }
}

/// Installs `logger` and prepares its transport.
pub fn init_with<L: Logger + Sync>(logger: &'static L) -> Result<()> {
    install(logger)?;
    logger.init();
    Ok(())
}

/// Returns the installed logger, if any.
pub fn logger() -> Option<&'static (dyn Logger + Sync)> {
    LOGGER.get().copied()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use crate::{clock::StdClock, config::Config, engine::Engine, sink::Stdout};

        /// The engine installed by [`init`].
        pub type StdEngine = Engine<Stdout, StdClock>;

        static STD_ENGINE: StdEngine = Engine::new(Stdout, StdClock::new(), Config::new());

        /// Installs a stdout engine configured from the crate features.
        pub fn init() -> Result<()> {
            init_with(&STD_ENGINE)
        }

        /// Returns the engine used by [`init`], installed or not.
        pub fn std_engine() -> &'static StdEngine {
            &STD_ENGINE
        }
    }
}

/// Returns true if the installed logger would emit `severity` for `tag`.
pub fn should_emit(tag: &str, severity: Severity) -> bool {
    logger().is_some_and(|logger| logger.should_emit(tag, severity))
}

/// Emits a formatted line. Prefer the [`taglog!`](crate::taglog) family of macros.
pub fn log(severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
    if let Some(logger) = logger() {
        logger.log(severity, tag, args);
    }
}

/// Emits `bytes` as one line of hex tokens.
pub fn log_hex(severity: Severity, tag: &str, bytes: &[u8]) {
    if let Some(logger) = logger() {
        logger.log_hex(severity, tag, bytes);
    }
}

/// Emits `bytes` as an offset-annotated memory dump.
pub fn log_dump(severity: Severity, tag: &str, bytes: &[u8]) {
    if let Some(logger) = logger() {
        logger.log_dump(severity, tag, bytes);
    }
}

/// Sets the minimum severity for `tag`.
pub fn set_level(tag: &str, severity: Severity) -> Result<()> {
    logger().map_or(Ok(()), |logger| logger.set_level(tag, severity))
}

/// Sets the threshold for tags without their own level.
pub fn set_default_level(severity: Severity) {
    if let Some(logger) = logger() {
        logger.set_default_level(severity);
    }
}

/// Silences `tag` regardless of its level.
pub fn exclude_tag(tag: &str) -> Result<()> {
    logger().map_or(Ok(()), |logger| logger.exclude_tag(tag))
}

/// Lifts a previous [`exclude_tag`].
pub fn include_tag(tag: &str) -> Result<()> {
    logger().map_or(Ok(()), |logger| logger.include_tag(tag))
}

/// Moves buffered output to the sink, returning the number of bytes written.
pub fn process_buffer() -> usize {
    logger().map_or(0, |logger| logger.process_buffer())
}
