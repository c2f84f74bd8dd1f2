//! log4rs set-up.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {t} - {m}{n}";

/// Map the number of `-v` flags to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger that writes to stderr, so stdout only carries results.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger, from a log4rs YAML file when one is given.
pub fn init_logging(verbose: u8, log_config: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_config {
        Some(path) => {
            log4rs::init_file(path, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        }
        None => {
            log4rs::init_config(stderr_config(level_for(verbose))?)?;
        }
    }
    log::debug!("logging initialised");
    Ok(())
}
