//! Dungeon map resolution.
//!
//! Turns a snapshot of the in-game dungeon map (128x128 palette indices plus the
//! icons drawn on it) into room geometry: where the entrance is, how large a
//! room is on the map, which room the player is in, which segments make up that
//! room, and where all of it sits in the world.

use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::{Encode, pattern::PatternEncoder},
    filter::threshold::ThresholdFilter,
};
use std::{backtrace, env, path::Path};

pub mod config;
pub mod constants;
pub mod footprint;
pub mod geometry;
pub mod palette;
pub mod resolver;
pub mod types;

pub use config::ResolverConfig;
pub use footprint::{RoomFootprint, flood_fill_footprint};
pub use palette::Palette;
pub use resolver::{EntranceFix, MapGridResolver, ResolvedRoom, current_room_anchor};

const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

#[derive(Debug)]
struct BacktracePatternEncoder {
    pattern_encoder: PatternEncoder,
    is_backtrace_enabled: bool,
}

impl BacktracePatternEncoder {
    fn new(pattern: &str) -> Self {
        BacktracePatternEncoder {
            pattern_encoder: PatternEncoder::new(pattern),
            is_backtrace_enabled: env::var("RUST_BACKTRACE").is_ok()
                || env::var("RUST_LIB_BACKTRACE").is_ok(),
        }
    }
}

impl Encode for BacktracePatternEncoder {
    fn encode(
        &self,
        w: &mut dyn log4rs::encode::Write,
        record: &log::Record<'_>,
    ) -> anyhow::Result<()> {
        if record.level() != log::Level::Error || !self.is_backtrace_enabled {
            return self.pattern_encoder.encode(w, record);
        }

        let backtrace = backtrace::Backtrace::capture();
        let args = format_args!("{}\nBacktrace:\n{}", record.args(), backtrace);
        let new_record = log::Record::builder()
            .args(args)
            .level(record.level())
            .target(record.target())
            .module_path(record.module_path())
            .file(record.file())
            .line(record.line())
            .build();
        self.pattern_encoder.encode(w, &new_record)
    }
}

/// Installs the global logger: stderr filtered to `log_level`, plus an
/// optional log file.
///
/// Fails if the log file cannot be opened or a logger is already installed.
pub fn initialize_logger(log_level: LevelFilter, file_path: Option<&Path>) -> anyhow::Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder
        .build(root_builder.build(log_level))
        .context("invalid logger configuration")?;

    log4rs::init_config(config).context("a global logger is already installed")?;
    Ok(())
}

/// Installs the logger described by `config`.
pub fn initialize_logger_from_config(config: &ResolverConfig) -> anyhow::Result<()> {
    initialize_logger(config.log_level, config.log_file.as_deref())
}
