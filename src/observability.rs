//! Logging setup and structured diagnostics.
//!
//! All crate output goes through the `log` facade. `init_logging` installs an
//! `env_logger` backend once per process; later calls are ignored. The
//! `log_metric!` macro emits a single JSON-ish key/value line at debug level.

use std::fs::{File, OpenOptions};
use std::sync::Once;

use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::error::Result;

/// Logs a structured key-value metric line at `debug` level.
///
/// # Example
/// ```
/// use sample_natives::log_metric;
/// let iters = 1000;
/// log_metric!("event"="mandelbrot", "max_iters"=&iters);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("SAMPLES_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

fn open_log_target(config: &LoggingConfig) -> Result<Option<File>> {
    match &config.log_file {
        Some(path) => Ok(Some(
            OpenOptions::new().append(true).create(true).open(path)?,
        )),
        None => Ok(None),
    }
}

/// Installs the `env_logger` backend described by `config`.
///
/// Only the first successful call in a process takes effect; later calls
/// return `Ok(())` without touching `config.log_file`. Fails only if the
/// configured log file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if INIT_LOGGER.is_completed() {
        return Ok(());
    }
    let target = open_log_target(config)?;
    let level: LevelFilter = config.level.into();

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();
        builder.is_test(false);
        builder.filter_level(level);

        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
