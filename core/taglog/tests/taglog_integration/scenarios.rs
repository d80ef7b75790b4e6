//! End to end filtering scenarios.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

use taglog::{Error, Logger, Severity};

use super::common::plain_engine;

#[test]
fn level_and_exclusion_walkthrough() {
    let engine = plain_engine();
    let hi = || engine.log(Severity::Info, "x", format_args!("hi"));

    hi();
    assert_eq!(engine.sink().take(), "(0)[INFO][x]: hi\n");

    engine.set_level("x", Severity::Warn).unwrap();
    hi();
    assert_eq!(engine.sink().take(), "");
    engine.log(Severity::Warn, "x", format_args!("hi"));
    assert_eq!(engine.sink().take(), "(0)[WARN][x]: hi\n");

    engine.exclude_tag("x").unwrap();
    engine.log(Severity::Warn, "x", format_args!("hi"));
    engine.log(Severity::Error, "x", format_args!("hi"));
    assert_eq!(engine.sink().take(), "");

    engine.include_tag("x").unwrap();
    engine.log(Severity::Warn, "x", format_args!("hi"));
    assert_eq!(engine.sink().take(), "(0)[WARN][x]: hi\n");
}

#[test]
fn eleventh_level_is_reported_and_ignored() {
    let engine = plain_engine();
    for i in 0..10 {
        engine.set_level(&format!("tag{i}"), Severity::Error).unwrap();
    }

    assert_eq!(engine.set_level("tag10", Severity::Error), Err(Error::RegistryFull(taglog::error::Table::Levels)));
    assert_eq!(engine.sink().take(), "Error: Log levels list is full\n");

    for i in 0..10 {
        assert!(!engine.should_emit(&format!("tag{i}"), Severity::Warn));
    }
    // The rejected tag keeps the permissive default.
    assert!(engine.should_emit("tag10", Severity::Verbose));
}

#[test]
fn exclusion_diagnostics_are_written_to_the_sink() {
    let engine = plain_engine();
    for i in 0..10 {
        engine.exclude_tag(&format!("tag{i}")).unwrap();
    }

    assert!(engine.exclude_tag("tag10").is_err());
    assert!(engine.include_tag("never").is_err());
    assert_eq!(engine.sink().take(), "Error: Tag list is full.\nError: Tag not found in excluded list\n");

    // Re-excluding a present tag is silent even when the set is full.
    engine.exclude_tag("tag3").unwrap();
    assert_eq!(engine.sink().take(), "");
}

#[test]
fn long_tags_are_filtered_by_their_prefix() {
    let engine = plain_engine();
    engine.exclude_tag("a_tag_that_is_far_too_long_to_store").unwrap();

    assert!(!engine.should_emit("a_tag_that_is_far_t", Severity::Error));
    assert!(!engine.should_emit("a_tag_that_is_far_too_long_anyway", Severity::Error));
    assert!(engine.should_emit("a_tag_that_is_far", Severity::Error));

    engine.include_tag("a_tag_that_is_far_t").unwrap();
    engine.log(Severity::Info, "a_tag_that_is_far_too_long_to_store", format_args!("m"));
    assert_eq!(engine.sink().take(), "(0)[INFO][a_tag_that_is_far_t]: m\n");
}

#[test]
fn hex_and_dump_share_the_gate() {
    let engine = plain_engine();
    engine.set_level("bytes", Severity::Info).unwrap();

    engine.log_hex(Severity::Debug, "bytes", &[1, 2, 3]);
    engine.log_dump(Severity::Debug, "bytes", &[1, 2, 3]);
    assert_eq!(engine.sink().take(), "");

    engine.log_hex(Severity::Info, "bytes", &[0xAB, 0x00, 0xFF]);
    assert_eq!(engine.sink().take(), "(0)[HEX][bytes]: AB 00 FF \n");

    engine.exclude_tag("bytes").unwrap();
    engine.log_dump(Severity::Error, "bytes", &[0xAB]);
    assert_eq!(engine.sink().take(), "");
}

#[test]
fn other_tags_are_unaffected_by_configuration() {
    let engine = plain_engine();
    engine.set_level("a", Severity::Error).unwrap();
    engine.exclude_tag("b").unwrap();
    engine.set_default_level(Severity::Info);

    assert!(engine.should_emit("c", Severity::Info));
    assert!(!engine.should_emit("c", Severity::Debug));
    assert!(engine.should_emit("a", Severity::Error));
    assert!(!engine.should_emit("a", Severity::Warn));
    assert!(!engine.should_emit("b", Severity::Error));
}
