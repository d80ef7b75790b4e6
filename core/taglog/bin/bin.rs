//! Executable that walks through the logging API on the host.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use clap::{Parser, Subcommand};
use taglog::{
    clock::StdClock,
    sink::{Gated, Stdout},
    Config, Engine, Severity,
};
use taglog::{logd, loge, logi, logv, logw};

type DemoEngine = Engine<Gated<Stdout>, StdClock>;

#[derive(Parser, Debug)]
struct Args {
    /// Print plain text without ANSI color codes.
    #[arg(long, default_value_t = false)]
    no_color: bool,
    #[command(subcommand)]
    demo: Demo,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Demo {
    /// Every severity, hex and dump output, exclusion and per-tag levels.
    FullMethods,
    /// Excluding a tag and including it again.
    TagsOnRuntime,
    /// Raising the threshold of a single tag.
    LevelByLog,
    /// Logging while the sink is down, then draining the ring buffer.
    Buffered,
}

fn main() -> Result<(), taglog::Error> {
    let args = Args::parse();

    let config = Config::new().with_colors(!args.no_color);
    let engine: &'static DemoEngine = Box::leak(Box::new(Engine::new(Gated::new(Stdout), StdClock::new(), config)));
    taglog::init_with(engine)?;

    if !matches!(args.demo, Demo::Buffered) {
        engine.sink().set_ready(true);
    }

    match args.demo {
        Demo::FullMethods => full_methods(engine),
        Demo::TagsOnRuntime => tags_on_runtime(),
        Demo::LevelByLog => level_by_log(),
        Demo::Buffered => buffered(engine),
    }
}

fn full_methods(engine: &'static DemoEngine) -> Result<(), taglog::Error> {
    logi!("main", "System initialized successfully.");
    loge!("main", "A critical error has occurred.");
    logw!("main", "This is a warning message.");
    logd!("main", "Debugging information.");
    logv!("main", "Detailed verbose message.");

    let data: [u8; 8] = [0xAB, 0xCD, 0xEF, 0x12, 0x34, 0x56, 0x78, 0x90];
    taglog::log_hex!(Severity::Debug, "buffer", data);
    taglog::log_dump!(Severity::Debug, "memory_dump", data);

    taglog::exclude_tag("main")?;
    logi!("main", "This message will not be displayed because the tag is excluded.");

    taglog::include_tag("main")?;
    logi!("main", "This message will be displayed because the tag has been included again.");

    taglog::set_level("main", Severity::Warn)?;
    logi!("main", "This message will not be displayed because the log level is below WARN.");
    logw!("main", "This message will be displayed because the log level is WARN.");

    // The same engine serves the `log` crate macros, keyed by target.
    if log::set_logger(engine).is_ok() {
        log::set_max_level(engine.max_level_filter());
        log::warn!(target: "main", "Routed through the log facade.");
        log::info!(target: "main", "Filtered by the same per-tag level.");
    }
    Ok(())
}

fn tags_on_runtime() -> Result<(), taglog::Error> {
    logi!("network", "Initialize network.");
    logw!("network", "Warning on network.");
    loge!("network", "Error on network.");

    taglog::exclude_tag("network")?;
    logi!("network", "Hello, this message will not shown");
    loge!("network", "Hello, this message also will not shown");

    taglog::include_tag("network")?;
    logi!("network", "Network tag is now available to show messages");
    Ok(())
}

fn level_by_log() -> Result<(), taglog::Error> {
    taglog::set_level("sensor", Severity::Debug)?;
    logd!("sensor", "Debug message in the sensor module.");
    logi!("sensor", "Info message in the sensor module.");
    logw!("sensor", "Warning in the sensor module.");
    loge!("sensor", "Error in the sensor module.");

    taglog::set_level("sensor", Severity::Warn)?;
    logi!("sensor", "This message will not be displayed.");
    logd!("sensor", "This message will also not be displayed.");
    logw!("sensor", "Warning in the sensor module.");
    loge!("sensor", "Error in the sensor module.");
    Ok(())
}

fn buffered(engine: &'static DemoEngine) -> Result<(), taglog::Error> {
    logi!("boot", "Queued while the link is down.");
    taglog::log_hex!(Severity::Info, "boot", [0xDE_u8, 0xAD, 0xBE, 0xEF]);
    logw!("boot", "Still queued.");

    // Nothing is written while the sink is not ready.
    let held = engine.buffered_len();
    let early = taglog::process_buffer();

    engine.sink().set_ready(true);
    let drained = taglog::process_buffer();
    logi!("boot", "Link up, drained {drained} of {held} buffered bytes ({early} while down).");

    let stats = engine.stats();
    if let Err(error) = stats.check() {
        logw!("boot", "{error}: {} bytes dropped, {} lines cut.", stats.dropped_bytes, stats.truncated_lines);
    }
    Ok(())
}
