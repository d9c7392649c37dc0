//! log4rs setup for the command line shell.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Console-only config used when no log4rs file is found.
pub fn default_log_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}

/// Initialise logging from `log_config` if it exists, else log warnings to stderr.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        log::debug!("Logging configured from {log_config}");
    } else {
        log4rs::init_config(default_log_config(LevelFilter::Warn)?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
        log::debug!("Log config {log_config} not found, using stderr");
    }
    Ok(())
}
