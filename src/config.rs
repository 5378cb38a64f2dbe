// In: src/config.rs

//! The single source of truth for sample-natives runtime configuration.
//!
//! `SamplesConfig` is created once at the application boundary (from a JSON
//! document or from defaults) and passed by reference to the fixture runner
//! and the logging setup.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SampleError};

//==================================================================================
// I. Logging
//==================================================================================

/// Verbosity of the crate's `log` output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Append log lines to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

//==================================================================================
// II. The Unified SamplesConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SamplesConfig {
    /// Iteration bound used when the fixture runner evaluates `mandelbrot`.
    #[serde(default = "default_mandelbrot_max_iters")]
    pub mandelbrot_max_iters: i32,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            mandelbrot_max_iters: default_mandelbrot_max_iters(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SamplesConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SamplesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mandelbrot_max_iters < 0 {
            return Err(SampleError::InvalidArgument(format!(
                "mandelbrot_max_iters must be non-negative, got {}",
                self.mandelbrot_max_iters
            )));
        }
        Ok(())
    }
}

fn default_mandelbrot_max_iters() -> i32 {
    1000
}
