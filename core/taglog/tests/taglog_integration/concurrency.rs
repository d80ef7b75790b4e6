//! Concurrent callers sharing one engine.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent

use std::thread;

use taglog::{Logger, Severity};

use super::common::plain_engine;

const THREADS: u8 = 8;
const ROUNDS: usize = 500;

#[test]
fn lines_and_hex_sequences_never_interleave() {
    let engine = plain_engine();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let engine = &engine;
            scope.spawn(move || {
                for i in 0..ROUNDS {
                    engine.log_hex(Severity::Info, "h", &[t; 8]);
                    engine.log(Severity::Info, "w", format_args!("thread {t} line {i}"));
                }
            });
        }
    });

    let text = engine.sink().take();
    assert!(text.ends_with('\n'));

    let mut hex_lines = 0;
    let mut text_lines = 0;
    for line in text.lines() {
        if let Some(body) = line.strip_prefix("(0)[HEX][h]: ") {
            let tokens: Vec<&str> = body.split_whitespace().collect();
            assert_eq!(tokens.len(), 8, "split hex line: {line:?}");
            assert!(tokens.iter().all(|token| *token == tokens[0]), "mixed hex line: {line:?}");
            let byte = u8::from_str_radix(tokens[0], 16).unwrap();
            assert!(byte < THREADS);
            hex_lines += 1;
        } else {
            let body = line.strip_prefix("(0)[INFO][w]: thread ").unwrap_or_else(|| panic!("broken line: {line:?}"));
            let (thread, round) = body.split_once(" line ").unwrap_or_else(|| panic!("broken line: {line:?}"));
            assert!(thread.parse::<u8>().unwrap() < THREADS);
            assert!(round.parse::<usize>().unwrap() < ROUNDS);
            text_lines += 1;
        }
    }

    let expected = THREADS as usize * ROUNDS;
    assert_eq!(hex_lines, expected);
    assert_eq!(text_lines, expected);
}
