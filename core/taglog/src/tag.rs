//! Bounded tag identifiers.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

use crate::config::MAX_TAG_LENGTH;

/// Bytes of tag text a [`Tag`] keeps.
pub const TAG_CAPACITY: usize = MAX_TAG_LENGTH - 1;

/// A short tag stored inline.
///
/// Text longer than [`TAG_CAPACITY`] bytes is truncated at the nearest UTF-8
/// boundary. Lookups truncate the same way, so two tags that agree on their
/// first [`TAG_CAPACITY`] bytes are the same tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    bytes: [u8; TAG_CAPACITY],
    len: u8,
}

impl Tag {
    /// The empty tag, used to fill unused table slots.
    pub const EMPTY: Tag = Tag { bytes: [0; TAG_CAPACITY], len: 0 };

    /// Creates a tag from `text`, truncating if needed.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(TAG_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0; TAG_CAPACITY];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self { bytes, len: end as u8 }
    }

    /// Returns the stored tag text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Returns the stored tag bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Returns the length of the stored tag in bytes.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true for the empty tag.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Tag::new(text)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
