//! Internal logging built on the `log` facade. This is not to be confused
//! with _reporting_, which records model-level data about a running
//! simulation; log messages describe what the simulator itself is doing.
//!
//! This module (re)exports the five logging macros: `error!`, `warn!`,
//! `info!`, `debug!` and `trace!` where `error!` represents the
//! highest-priority messages and `trace!` the lowest. Logging is disabled
//! by default and enabled by passing `--log-level <level>` to the binary.

pub use log::{debug, error, info, trace, warn, LevelFilter};

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

// Use an ISO 8601 timestamp format and color coded level tag
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Installs the console logger filtered at `level`. `LevelFilter::Off`
/// leaves logging disabled. Must be called at most once per process.
pub fn init_logging(level: LevelFilter) {
    let stdout: ConsoleAppender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            panic!("failed to build logging config: {e}");
        }
    };
    log4rs::init_config(config).expect("logger already installed");
}
