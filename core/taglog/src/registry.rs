//! Tag level table and excluded tag set.
//!
//! The [`LevelTable`] and [`ExclusionTable`] traits give the gate a map-like
//! and a set-like contract. [`FixedLevels`] and [`FixedExclusions`] implement
//! them over inline arrays with a linear scan and never allocate. With the
//! `alloc` feature the same traits are implemented for `BTreeMap` and
//! `BTreeSet`, which have no capacity limit.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::{
    error::{Error, Result, Table},
    severity::Severity,
    tag::Tag,
};

/// Map from tag to minimum severity.
pub trait LevelTable {
    /// Returns the level registered for `tag`.
    fn level(&self, tag: &Tag) -> Option<Severity>;

    /// Inserts or updates the level for `tag`.
    ///
    /// Fails with [`Error::RegistryFull`] when `tag` is new and there is no room.
    fn set_level(&mut self, tag: Tag, severity: Severity) -> Result<()>;

    /// Returns the loosest registered level, if any.
    fn loosest(&self) -> Option<Severity>;

    /// Number of registered tags.
    fn len(&self) -> usize;

    /// Returns true when no tag has a level.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Set of excluded tags.
pub trait ExclusionTable {
    /// Returns true if `tag` is excluded.
    fn contains(&self, tag: &Tag) -> bool;

    /// Adds `tag`. Returns `Ok(false)` if it was already present.
    ///
    /// Fails with [`Error::RegistryFull`] when `tag` is new and there is no room.
    fn insert(&mut self, tag: Tag) -> Result<bool>;

    /// Removes `tag`, failing with [`Error::TagNotFound`] if it is absent.
    fn remove(&mut self, tag: &Tag) -> Result<()>;

    /// Number of excluded tags.
    fn len(&self) -> usize;

    /// Returns true when nothing is excluded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-capacity tag level table.
#[derive(Debug, Clone)]
pub struct FixedLevels<const CAP: usize> {
    entries: [(Tag, Severity); CAP],
    count: usize,
}

impl<const CAP: usize> FixedLevels<CAP> {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self { entries: [(Tag::EMPTY, Severity::None); CAP], count: 0 }
    }

    /// Iterates the registered entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Tag, Severity)> {
        self.entries[..self.count].iter()
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<const CAP: usize> Default for FixedLevels<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> LevelTable for FixedLevels<CAP> {
    fn level(&self, tag: &Tag) -> Option<Severity> {
        self.iter().find(|(entry, _)| entry == tag).map(|(_, severity)| *severity)
    }

    fn set_level(&mut self, tag: Tag, severity: Severity) -> Result<()> {
        if let Some(entry) = self.entries[..self.count].iter_mut().find(|(entry, _)| *entry == tag) {
            entry.1 = severity;
            return Ok(());
        }

        if self.count == CAP {
            return Err(Error::RegistryFull(Table::Levels));
        }

        self.entries[self.count] = (tag, severity);
        self.count += 1;
        Ok(())
    }

    fn loosest(&self) -> Option<Severity> {
        self.iter().map(|(_, severity)| *severity).max()
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Fixed-capacity excluded tag set.
///
/// Removal shifts the remaining tags left, so they keep their relative order.
#[derive(Debug, Clone)]
pub struct FixedExclusions<const CAP: usize> {
    tags: [Tag; CAP],
    count: usize,
}

impl<const CAP: usize> FixedExclusions<CAP> {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { tags: [Tag::EMPTY; CAP], count: 0 }
    }

    /// Iterates the excluded tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags[..self.count].iter()
    }

    /// Maximum number of tags.
    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<const CAP: usize> Default for FixedExclusions<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> ExclusionTable for FixedExclusions<CAP> {
    fn contains(&self, tag: &Tag) -> bool {
        self.iter().any(|excluded| excluded == tag)
    }

    fn insert(&mut self, tag: Tag) -> Result<bool> {
        if self.contains(&tag) {
            return Ok(false);
        }

        if self.count == CAP {
            return Err(Error::RegistryFull(Table::Exclusions));
        }

        self.tags[self.count] = tag;
        self.count += 1;
        Ok(true)
    }

    fn remove(&mut self, tag: &Tag) -> Result<()> {
        let index = self.iter().position(|excluded| excluded == tag).ok_or(Error::TagNotFound)?;
        self.tags.copy_within(index + 1..self.count, index);
        self.count -= 1;
        self.tags[self.count] = Tag::EMPTY;
        Ok(())
    }

    fn len(&self) -> usize {
        self.count
    }
}

#[cfg(feature = "alloc")]
mod unbounded {
    use alloc::collections::{BTreeMap, BTreeSet};

    use super::{ExclusionTable, LevelTable};
    use crate::{
        error::{Error, Result},
        severity::Severity,
        tag::Tag,
    };

    impl LevelTable for BTreeMap<Tag, Severity> {
        fn level(&self, tag: &Tag) -> Option<Severity> {
            self.get(tag).copied()
        }

        fn set_level(&mut self, tag: Tag, severity: Severity) -> Result<()> {
            self.insert(tag, severity);
            Ok(())
        }

        fn loosest(&self) -> Option<Severity> {
            self.values().copied().max()
        }

        fn len(&self) -> usize {
            BTreeMap::len(self)
        }
    }

    impl ExclusionTable for BTreeSet<Tag> {
        fn contains(&self, tag: &Tag) -> bool {
            BTreeSet::contains(self, tag)
        }

        fn insert(&mut self, tag: Tag) -> Result<bool> {
            Ok(BTreeSet::insert(self, tag))
        }

        fn remove(&mut self, tag: &Tag) -> Result<()> {
            if BTreeSet::remove(self, tag) {
                Ok(())
            } else {
                Err(Error::TagNotFound)
            }
        }

        fn len(&self) -> usize {
            BTreeSet::len(self)
        }
    }
}
