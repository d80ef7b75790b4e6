//! Emission macros for the process-wide logger.
//!
//! The message arguments go through `format_args!`, so nothing is allocated
//! and nothing is rendered when the message does not pass the gate.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

/// Logs a formatted message at the given severity.
///
/// ```
/// use taglog::{taglog, Severity};
///
/// taglog!(Severity::Info, "boot", "stage {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! taglog {
    ($severity:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log($severity, $tag, ::core::format_args!($($arg)+))
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! loge {
    ($tag:expr, $($arg:tt)+) => {
        $crate::taglog!($crate::Severity::Error, $tag, $($arg)+)
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! logw {
    ($tag:expr, $($arg:tt)+) => {
        $crate::taglog!($crate::Severity::Warn, $tag, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! logi {
    ($tag:expr, $($arg:tt)+) => {
        $crate::taglog!($crate::Severity::Info, $tag, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! logd {
    ($tag:expr, $($arg:tt)+) => {
        $crate::taglog!($crate::Severity::Debug, $tag, $($arg)+)
    };
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! logv {
    ($tag:expr, $($arg:tt)+) => {
        $crate::taglog!($crate::Severity::Verbose, $tag, $($arg)+)
    };
}

/// Logs a byte slice as hex tokens.
#[macro_export]
macro_rules! log_hex {
    ($severity:expr, $tag:expr, $bytes:expr $(,)?) => {
        $crate::log_hex($severity, $tag, ::core::convert::AsRef::<[u8]>::as_ref(&$bytes))
    };
}

/// Logs a byte slice as a memory dump.
#[macro_export]
macro_rules! log_dump {
    ($severity:expr, $tag:expr, $bytes:expr $(,)?) => {
        $crate::log_dump($severity, $tag, ::core::convert::AsRef::<[u8]>::as_ref(&$bytes))
    };
}
