//! This file is the root of the `sample_natives` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring the top-level modules (`kernels`, `ffi`, etc.).
//! 2.  Re-exporting the safe kernel API so Rust callers never touch raw pointers.
//!
//! The `ffi` module carries the unmangled `extern "C"` symbols that loaders
//! resolve when the crate is built as a `cdylib`.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod observability;

pub mod config;
pub mod error;
pub mod ffi;
pub mod fixtures;
pub mod kernels;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{LogLevel, LoggingConfig, SamplesConfig};
pub use error::{Result, SampleError};
pub use fixtures::{fixtures_json, run_fixtures, FixtureRecord};
pub use observability::init_logging;
