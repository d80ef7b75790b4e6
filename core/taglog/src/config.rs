//! Build-time configuration for the logging engine.
//!
//! Table capacities and staging sizes are fixed constants. The ring buffer size
//! is read from the `TAGLOG_BUFFER_SIZE` environment variable when the crate is
//! compiled, falling back to [`DEFAULT_BUFFER_SIZE`]. Color output and the ring
//! buffer overflow policy follow the `colors` and `buffer-overwrite` features.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::ring_buffer::OverflowPolicy;

/// Storage reserved for a tag, including the terminator slot.
pub const MAX_TAG_LENGTH: usize = 20;

/// Number of tags that can be excluded at the same time.
pub const MAX_EXCLUDED_TAGS: usize = 10;

/// Number of tags that can carry their own level.
pub const MAX_LEVEL_TAGS: usize = 10;

/// Staging size for the formatted message body.
pub const MESSAGE_STAGING_SIZE: usize = 256;

/// Staging size for a fully composed line, color codes included.
pub const LINE_STAGING_SIZE: usize = 512;

/// Staging size for a single hex or dump chunk.
pub const CHUNK_STAGING_SIZE: usize = 128;

/// Ring buffer size used when `TAGLOG_BUFFER_SIZE` is not set.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Ring buffer size selected at build time.
pub const BUFFER_SIZE: usize = match option_env!("TAGLOG_BUFFER_SIZE") {
    Some(value) => parse_buffer_size(value),
    None => DEFAULT_BUFFER_SIZE,
};

const fn parse_buffer_size(value: &str) -> usize {
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "TAGLOG_BUFFER_SIZE must not be empty");

    let mut size: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "TAGLOG_BUFFER_SIZE must be a decimal integer");
        size = size * 10 + (bytes[i] - b'0') as usize;
        i += 1;
    }

    // One slot is always kept free to tell a full buffer from an empty one.
    assert!(size >= 2, "TAGLOG_BUFFER_SIZE must be at least 2");
    size
}

/// Per-engine settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Wrap text lines in ANSI color codes.
    pub colors: bool,
    /// What the ring buffer does when it runs out of room.
    pub overflow: OverflowPolicy,
}

impl Config {
    /// Creates the configuration selected by the crate features.
    pub const fn new() -> Self {
        Self {
            colors: cfg!(feature = "colors"),
            overflow: if cfg!(feature = "buffer-overwrite") {
                OverflowPolicy::OverwriteOldest
            } else {
                OverflowPolicy::DropNewest
            },
        }
    }

    /// Overrides the color setting.
    pub const fn with_colors(self, colors: bool) -> Self {
        Self { colors, ..self }
    }

    /// Overrides the ring buffer overflow policy.
    pub const fn with_overflow(self, overflow: OverflowPolicy) -> Self {
        Self { overflow, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_buffer_size_accepts_decimal() {
        assert_eq!(parse_buffer_size("1024"), 1024);
        assert_eq!(parse_buffer_size("2"), 2);
        assert_eq!(parse_buffer_size("65536"), 65536);
    }

    #[test]
    #[should_panic]
    fn parse_buffer_size_rejects_garbage() {
        parse_buffer_size("12k");
    }

    #[test]
    #[should_panic]
    fn parse_buffer_size_rejects_single_slot() {
        parse_buffer_size("1");
    }

    #[test]
    fn config_overrides_keep_other_fields() {
        let config = Config::new().with_colors(false).with_overflow(OverflowPolicy::OverwriteOldest);
        assert!(!config.colors);
        assert_eq!(config.overflow, OverflowPolicy::OverwriteOldest);

        let config = config.with_colors(true);
        assert!(config.colors);
        assert_eq!(config.overflow, OverflowPolicy::OverwriteOldest);
    }

    #[test]
    fn config_defaults_follow_features() {
        let config = Config::default();
        assert_eq!(config.colors, cfg!(feature = "colors"));
        assert_eq!(config.overflow == OverflowPolicy::OverwriteOldest, cfg!(feature = "buffer-overwrite"));
    }
}
