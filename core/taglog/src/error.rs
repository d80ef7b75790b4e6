//! Error conditions reported by the logging engine.
//!
//! None of these are fatal. Configuration calls hand them back to the caller
//! and also print them through the sink when it is ready. Emission paths only
//! count them, and [`Stats::check`](crate::Stats::check) reports the count.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

/// A specialized [`Result`](core::result::Result) type for logging operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The fixed-capacity table an operation ran out of room in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The per-tag level table.
    Levels,
    /// The excluded tag set.
    Exclusions,
}

/// Logging error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The named table is at capacity and the tag is not already in it.
    RegistryFull(Table),
    /// The tag is not in the excluded set.
    TagNotFound,
    /// The ring buffer was full and bytes were dropped.
    ///
    /// Never returned by a log call; see [`Stats::check`](crate::Stats::check).
    BufferOverrun,
    /// Rendered text did not fit its staging buffer and was cut short.
    ///
    /// Never returned by a log call; see [`Stats::check`](crate::Stats::check).
    FormatTruncated,
    /// A process-wide logger has already been installed.
    AlreadyInstalled,
}

impl Error {
    /// Returns the diagnostic text for this error.
    pub const fn message(&self) -> &'static str {
        match self {
            Error::RegistryFull(Table::Exclusions) => "Tag list is full.",
            Error::RegistryFull(Table::Levels) => "Log levels list is full",
            Error::TagNotFound => "Tag not found in excluded list",
            Error::BufferOverrun => "Log buffer is full, output dropped",
            Error::FormatTruncated => "Log message truncated",
            Error::AlreadyInstalled => "A logger is already installed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_full_names_the_table() {
        assert_eq!(Error::RegistryFull(Table::Exclusions).message(), "Tag list is full.");
        assert_eq!(Error::RegistryFull(Table::Levels).message(), "Log levels list is full");
    }

    #[test]
    fn display_matches_message() {
        let text = std::format!("{}", Error::TagNotFound);
        assert_eq!(text, "Tag not found in excluded list");
    }
}
