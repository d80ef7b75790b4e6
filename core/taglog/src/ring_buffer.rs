//! Byte ring buffer used while the sink is not ready.
//!
//! The buffer holds at most `N - 1` bytes; one slot stays free so that
//! `head == tail` always means empty. What happens to bytes that do not fit is
//! decided by the [`OverflowPolicy`].
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::{config::BUFFER_SIZE, sink::Sink};

/// Behavior of a full ring buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Keep what is buffered and drop the incoming bytes.
    #[default]
    DropNewest,
    /// Discard the oldest buffered bytes to make room.
    OverwriteOldest,
}

/// Fixed-capacity FIFO of bytes.
#[derive(Debug)]
pub struct RingBuffer<const N: usize = BUFFER_SIZE> {
    data: [u8; N],
    head: usize,
    tail: usize,
    policy: OverflowPolicy,
}

impl<const N: usize> RingBuffer<N> {
    /// Number of bytes the buffer can hold.
    pub const CAPACITY: usize = N - 1;

    /// Creates an empty buffer.
    pub const fn new(policy: OverflowPolicy) -> Self {
        assert!(N >= 2, "ring buffer needs at least two slots");
        Self { data: [0; N], head: 0, tail: 0, policy }
    }

    /// Returns the overflow policy.
    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Number of buffered bytes.
    pub const fn len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// Returns true when nothing is buffered.
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true when no further byte fits without overflow handling.
    pub const fn is_full(&self) -> bool {
        (self.head + 1) % N == self.tail
    }

    /// Appends `bytes`, returning how many bytes were lost to overflow.
    ///
    /// With [`OverflowPolicy::DropNewest`] writing stops at the first byte that
    /// does not fit and the rest of `bytes` is dropped. With
    /// [`OverflowPolicy::OverwriteOldest`] every byte is stored and the oldest
    /// buffered bytes are discarded instead.
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        let mut dropped = 0;
        for (i, byte) in bytes.iter().enumerate() {
            if self.is_full() {
                match self.policy {
                    OverflowPolicy::DropNewest => return bytes.len() - i,
                    OverflowPolicy::OverwriteOldest => {
                        self.tail = (self.tail + 1) % N;
                        dropped += 1;
                    }
                }
            }
            self.data[self.head] = *byte;
            self.head = (self.head + 1) % N;
        }
        dropped
    }

    /// Removes and returns the oldest byte.
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.data[self.tail];
        self.tail = (self.tail + 1) % N;
        Some(byte)
    }

    /// Returns the buffered bytes, oldest first, as up to two slices.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.head >= self.tail {
            (&self.data[self.tail..self.head], &[])
        } else {
            (&self.data[self.tail..], &self.data[..self.head])
        }
    }

    /// Discards everything buffered.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Writes every buffered byte to `sink` in FIFO order and empties the
    /// buffer. Returns the number of bytes written.
    pub fn drain_into<S: Sink + ?Sized>(&mut self, sink: &S) -> usize {
        let (first, second) = self.as_slices();
        let drained = first.len() + second.len();
        if !first.is_empty() {
            sink.write(first);
        }
        if !second.is_empty() {
            sink.write(second);
        }
        self.clear();
        drained
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}
