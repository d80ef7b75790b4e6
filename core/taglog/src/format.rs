//! Rendering of text lines and hex/dump sequences.
//!
//! All rendering happens in fixed stack buffers. Text that does not fit is cut
//! at a UTF-8 boundary; the color reset and the trailing newline of a line are
//! appended after the cut so a truncated line is still a complete line.
//!
//! Hex and dump renderings are iterators of short chunks, each of which can be
//! handed to the sink on its own.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt::{self, Write};

use crate::{
    config::{CHUNK_STAGING_SIZE, LINE_STAGING_SIZE, MESSAGE_STAGING_SIZE},
    severity::{Severity, ANSI_RESET},
    tag::Tag,
};

/// Bytes per dump row.
pub const DUMP_ROW_LENGTH: usize = 16;

/// A formatted, fully framed text line.
pub type Line = StackText<LINE_STAGING_SIZE>;

/// One piece of a hex or dump rendering.
pub type Chunk = StackText<CHUNK_STAGING_SIZE>;

/// Truncating text buffer of `N` bytes.
///
/// Writes past the current limit are cut at the last character that fits and
/// everything after the cut is ignored.
#[derive(Clone)]
pub struct StackText<const N: usize> {
    buf: [u8; N],
    len: usize,
    limit: usize,
    truncated: bool,
}

impl<const N: usize> StackText<N> {
    /// Creates an empty buffer that may fill all `N` bytes.
    pub const fn new() -> Self {
        Self::with_limit(N)
    }

    /// Creates an empty buffer that accepts at most `limit` bytes.
    pub const fn with_limit(limit: usize) -> Self {
        let limit = if limit < N { limit } else { N };
        Self { buf: [0; N], len: 0, limit, truncated: false }
    }

    /// Appends `text` within the full `N` bytes, ignoring the limit.
    ///
    /// Used for framing that must survive truncation of the content before it.
    pub fn push_framing(&mut self, text: &str) {
        self.limit = N;
        let truncated = self.truncated;
        self.truncated = false;
        self.append(text);
        self.truncated |= truncated;
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Returns the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of bytes written.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been written.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if any write was cut short.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn append(&mut self, text: &str) {
        if self.truncated {
            return;
        }

        let room = self.limit.saturating_sub(self.len);
        let mut take = text.len().min(room);
        while !text.is_char_boundary(take) {
            take -= 1;
        }

        self.buf[self.len..self.len + take].copy_from_slice(&text.as_bytes()[..take]);
        self.len += take;
        self.truncated = take < text.len();
    }
}

impl<const N: usize> Default for StackText<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for StackText<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for StackText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackText").field("text", &self.as_str()).field("truncated", &self.truncated).finish()
    }
}

/// Renders `"<color>(<ms>)[<LEVEL>][<tag>]: <message><reset>\n"`.
///
/// Color codes are left out when `colors` is false or the severity has no
/// color. The message body is limited to the message staging size and the
/// whole line to the line staging size.
pub fn format_line(timestamp_ms: u32, severity: Severity, tag: &Tag, args: fmt::Arguments<'_>, colors: bool) -> Line {
    let mut body = StackText::<MESSAGE_STAGING_SIZE>::new();
    let _ = body.write_fmt(args);

    let (color, reset) = match severity.color() {
        color if colors && !color.is_empty() => (color, ANSI_RESET),
        _ => ("", ""),
    };

    let mut line = Line::with_limit(LINE_STAGING_SIZE - reset.len() - 1);
    let _ = write!(line, "{color}({timestamp_ms})[{}][{tag}]: {}", severity.label(), body.as_str());
    if body.is_truncated() {
        line.truncated = true;
    }
    line.push_framing(reset);
    line.push_framing("\n");
    line
}

/// Renders `bytes` as `"(<ms>)[HEX][<tag>]: "` followed by one `"XX "` token per
/// byte and a newline.
pub fn format_hex<'a>(timestamp_ms: u32, tag: &'a Tag, bytes: &'a [u8]) -> HexChunks<'a> {
    HexChunks { timestamp_ms, tag, bytes, stage: HexStage::Header }
}

/// Renders `bytes` as a `"(<ms>)[DUMP][<tag>]:\n"` header followed by rows of
/// sixteen `"XX "` tokens, each row introduced by `"\n<OFFSET>: "`.
pub fn format_dump<'a>(timestamp_ms: u32, tag: &'a Tag, bytes: &'a [u8]) -> DumpChunks<'a> {
    DumpChunks { timestamp_ms, tag, bytes, stage: DumpStage::Header }
}

fn chunk(args: fmt::Arguments<'_>) -> Chunk {
    let mut chunk = Chunk::new();
    let _ = chunk.write_fmt(args);
    chunk
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HexStage {
    Header,
    Byte(usize),
    Newline,
    Done,
}

/// Chunks of a hex line. See [`format_hex`].
#[derive(Debug, Clone)]
pub struct HexChunks<'a> {
    timestamp_ms: u32,
    tag: &'a Tag,
    bytes: &'a [u8],
    stage: HexStage,
}

impl Iterator for HexChunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let (item, next) = match self.stage {
            HexStage::Header => {
                let next = if self.bytes.is_empty() { HexStage::Newline } else { HexStage::Byte(0) };
                (chunk(format_args!("({})[HEX][{}]: ", self.timestamp_ms, self.tag)), next)
            }
            HexStage::Byte(i) => {
                let next = if i + 1 < self.bytes.len() { HexStage::Byte(i + 1) } else { HexStage::Newline };
                (chunk(format_args!("{:02X} ", self.bytes[i])), next)
            }
            HexStage::Newline => (chunk(format_args!("\n")), HexStage::Done),
            HexStage::Done => return None,
        };
        self.stage = next;
        Some(item)
    }
}

impl core::iter::FusedIterator for HexChunks<'_> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DumpStage {
    Header,
    Offset(usize),
    Byte(usize),
    Newline,
    Done,
}

/// Chunks of a memory dump. See [`format_dump`].
#[derive(Debug, Clone)]
pub struct DumpChunks<'a> {
    timestamp_ms: u32,
    tag: &'a Tag,
    bytes: &'a [u8],
    stage: DumpStage,
}

impl Iterator for DumpChunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let (item, next) = match self.stage {
            DumpStage::Header => {
                let next = if self.bytes.is_empty() { DumpStage::Newline } else { DumpStage::Offset(0) };
                (chunk(format_args!("({})[DUMP][{}]:\n", self.timestamp_ms, self.tag)), next)
            }
            DumpStage::Offset(i) => (chunk(format_args!("\n{i:04X}: ")), DumpStage::Byte(i)),
            DumpStage::Byte(i) => {
                let next = match i + 1 {
                    n if n == self.bytes.len() => DumpStage::Newline,
                    n if n % DUMP_ROW_LENGTH == 0 => DumpStage::Offset(n),
                    n => DumpStage::Byte(n),
                };
                (chunk(format_args!("{:02X} ", self.bytes[i])), next)
            }
            DumpStage::Newline => (chunk(format_args!("\n")), DumpStage::Done),
            DumpStage::Done => return None,
        };
        self.stage = next;
        Some(item)
    }
}

impl core::iter::FusedIterator for DumpChunks<'_> {}
