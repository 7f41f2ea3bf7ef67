//! File logging via log4rs.
//!
//! The terminal is owned by the game screen, so records only ever go to a
//! file.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

/// Install a global logger that appends to `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_file_logger(path: &str, level: LevelFilter) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("open log file {path}"))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("build log config")?;

    log4rs::init_config(config).context("install logger")?;
    Ok(())
}
