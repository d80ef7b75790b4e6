//! Message severities and their rendering.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

/// ANSI sequence that restores the default terminal color.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Ordered log severity.
///
/// Lower values are more important. As a threshold, [`Severity::None`] lets
/// nothing through and [`Severity::Verbose`] lets everything through; a message
/// at severity `s` passes a threshold `t` when `s <= t`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// No logging.
    None = 0,
    /// Error conditions.
    Error = 1,
    /// Warnings.
    Warn = 2,
    /// Informational messages.
    Info = 3,
    /// Debugging detail.
    Debug = 4,
    /// Everything.
    #[default]
    Verbose = 5,
}

impl Severity {
    /// Every severity, most restrictive first.
    pub const ALL: [Severity; 6] =
        [Severity::None, Severity::Error, Severity::Warn, Severity::Info, Severity::Debug, Severity::Verbose];

    /// Converts a raw level value, returning `None` when out of range.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::None),
            1 => Some(Severity::Error),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Info),
            4 => Some(Severity::Debug),
            5 => Some(Severity::Verbose),
            _ => None,
        }
    }

    /// The label printed between brackets on each line.
    ///
    /// [`Severity::None`] is not a message level and renders as `UNKNOWN`.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::None => "UNKNOWN",
        }
    }

    /// The ANSI color sequence for this severity.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warn => "\x1b[33m",
            Severity::Info => "\x1b[32m",
            Severity::Debug => "\x1b[34m",
            Severity::Verbose => "\x1b[37m",
            Severity::None => "",
        }
    }

    /// Returns true if a message at this severity passes `threshold`.
    pub const fn passes(self, threshold: Severity) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Verbose,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::None => log::LevelFilter::Off,
            Severity::Error => log::LevelFilter::Error,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Info => log::LevelFilter::Info,
            Severity::Debug => log::LevelFilter::Debug,
            Severity::Verbose => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_numeric() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(Severity::from_u8(i as u8), Some(*severity));
        }
        assert_eq!(Severity::from_u8(6), None);
    }

    #[test]
    fn passes_compares_against_threshold() {
        assert!(Severity::Error.passes(Severity::Warn));
        assert!(Severity::Warn.passes(Severity::Warn));
        assert!(!Severity::Info.passes(Severity::Warn));
        assert!(!Severity::Error.passes(Severity::None));
        for severity in Severity::ALL {
            assert!(severity.passes(Severity::Verbose));
        }
    }

    #[test]
    fn none_renders_as_unknown_without_color() {
        assert_eq!(Severity::None.label(), "UNKNOWN");
        assert_eq!(Severity::None.color(), "");
        assert_eq!(Severity::Error.color(), "\x1b[31m");
        assert_eq!(Severity::Verbose.color(), "\x1b[37m");
    }

    #[test]
    fn log_levels_map_onto_severities() {
        assert_eq!(Severity::from(log::Level::Trace), Severity::Verbose);
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
        assert_eq!(log::LevelFilter::from(Severity::None), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(Severity::Verbose), log::LevelFilter::Trace);
    }
}
