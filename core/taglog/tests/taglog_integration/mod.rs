//! Taglog Integration Tests
//!
//! Drives whole engines through the public API against a capturing sink.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

// Common utilities available to all test modules
mod common;

// Test module groups
mod buffering;
mod concurrency;
mod global;
mod scenarios;
