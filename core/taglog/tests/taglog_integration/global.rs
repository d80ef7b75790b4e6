//! The process-wide logger and the emission macros.
//!
//! Only this module may install a logger; every test binary gets one.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

use taglog::{Error, Severity};

use super::common::{plain_engine, TestEngine};

#[test]
fn free_functions_forward_to_the_installed_logger() {
    // Nothing installed: every call is a no-op.
    assert!(taglog::logger().is_none());
    taglog::logi!("early", "lost");
    assert_eq!(taglog::set_level("early", Severity::Error), Ok(()));
    assert_eq!(taglog::include_tag("early"), Ok(()));
    assert_eq!(taglog::process_buffer(), 0);
    assert!(!taglog::should_emit("early", Severity::Error));

    let engine: &'static TestEngine = Box::leak(Box::new(plain_engine()));
    taglog::init_with(engine).unwrap();
    assert_eq!(taglog::init_with(engine), Err(Error::AlreadyInstalled));
    assert_eq!(engine.sink().take(), "");

    taglog::logi!("net", "up {}", 1);
    taglog::logv!("net", "chatty");
    assert_eq!(engine.sink().take(), "(0)[INFO][net]: up 1\n(0)[VERBOSE][net]: chatty\n");

    taglog::set_level("net", Severity::Warn).unwrap();
    taglog::logi!("net", "hidden");
    taglog::logw!("net", "shown");
    taglog::loge!("net", "shown too");
    taglog::logd!("net", "hidden");
    assert_eq!(engine.sink().take(), "(0)[WARN][net]: shown\n(0)[ERROR][net]: shown too\n");

    taglog::exclude_tag("net").unwrap();
    taglog::loge!("net", "hidden");
    assert_eq!(engine.sink().take(), "");
    assert_eq!(taglog::include_tag("nope"), Err(Error::TagNotFound));
    assert_eq!(engine.sink().take(), "Error: Tag not found in excluded list\n");
    taglog::include_tag("net").unwrap();

    taglog::log_hex!(Severity::Error, "net", [0xAB_u8, 0x00, 0xFF]);
    assert_eq!(engine.sink().take(), "(0)[HEX][net]: AB 00 FF \n");

    taglog::set_default_level(Severity::None);
    taglog::log_dump!(Severity::Error, "other", vec![1_u8, 2]);
    taglog::taglog!(Severity::Error, "other", "hidden");
    assert_eq!(engine.sink().take(), "");
}
