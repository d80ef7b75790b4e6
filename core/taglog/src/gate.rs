//! The emission predicate.
//!
//! A message passes the gate when its severity is within the threshold of its
//! tag and the tag is not excluded. Exclusion is an absolute veto: an excluded
//! tag emits nothing, not even errors. Tags match by exact (bounded) bytes; there
//! is no prefix or wildcard matching.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::{
    config::{MAX_EXCLUDED_TAGS, MAX_LEVEL_TAGS},
    error::Result,
    registry::{ExclusionTable, FixedExclusions, FixedLevels, LevelTable},
    severity::Severity,
    tag::Tag,
};

/// Per-tag thresholds, excluded tags, and the default threshold.
#[derive(Debug, Clone)]
pub struct Gate<L = FixedLevels<MAX_LEVEL_TAGS>, X = FixedExclusions<MAX_EXCLUDED_TAGS>> {
    levels: L,
    excluded: X,
    default_level: Severity,
}

impl Gate {
    /// Creates a gate over the fixed-capacity tables with a permissive default.
    pub const fn new() -> Self {
        Self::with_tables(FixedLevels::new(), FixedExclusions::new())
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, X> Gate<L, X>
where
    L: LevelTable,
    X: ExclusionTable,
{
    /// Creates a gate over caller supplied tables with a permissive default.
    pub const fn with_tables(levels: L, excluded: X) -> Self {
        Self { levels, excluded, default_level: Severity::Verbose }
    }

    /// Sets the threshold for `tag`.
    pub fn set_level(&mut self, tag: Tag, severity: Severity) -> Result<()> {
        self.levels.set_level(tag, severity)
    }

    /// Sets the threshold for tags without their own level.
    pub fn set_default_level(&mut self, severity: Severity) {
        self.default_level = severity;
    }

    /// Returns the threshold for tags without their own level.
    pub fn default_level(&self) -> Severity {
        self.default_level
    }

    /// Excludes `tag`. Excluding an already excluded tag changes nothing.
    pub fn exclude(&mut self, tag: Tag) -> Result<()> {
        self.excluded.insert(tag).map(|_| ())
    }

    /// Lifts the exclusion of `tag`.
    pub fn include(&mut self, tag: &Tag) -> Result<()> {
        self.excluded.remove(tag)
    }

    /// Returns true if `tag` is excluded.
    pub fn is_excluded(&self, tag: &Tag) -> bool {
        self.excluded.contains(tag)
    }

    /// Returns the threshold in force for `tag`.
    pub fn effective_threshold(&self, tag: &Tag) -> Severity {
        self.levels.level(tag).unwrap_or(self.default_level)
    }

    /// Returns true if a message at `severity` for `tag` should be emitted.
    pub fn should_emit(&self, tag: &Tag, severity: Severity) -> bool {
        severity.passes(self.effective_threshold(tag)) && !self.is_excluded(tag)
    }

    /// Returns the loosest threshold any tag can currently have.
    pub fn loosest_threshold(&self) -> Severity {
        self.levels.loosest().map_or(self.default_level, |level| level.max(self.default_level))
    }

    /// Returns the level table.
    pub fn levels(&self) -> &L {
        &self.levels
    }

    /// Returns the excluded tag set.
    pub fn exclusions(&self) -> &X {
        &self.excluded
    }
}
