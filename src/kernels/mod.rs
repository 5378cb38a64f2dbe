//! This module collects the pure, stateless kernels behind every exported symbol.
//!
//! Kernels are safe Rust and know nothing about the C boundary; `crate::ffi`
//! wraps them with unmangled `extern "C"` entry points.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Scalar arithmetic
pub mod arith;

/// Escape-time fractals
pub mod mandelbrot;

/// Color lookup
pub mod palette;

/// Row delta filters
pub mod sub_filter;

/// Indirect calls
pub mod func_table;

//==================================================================================
// 2. Re-exports
//==================================================================================

pub use arith::{sample_add_f32, sample_add_f64, sample_add_i32, sample_add_i64};
pub use func_table::{func_fetch, func_invoke, BinaryOp};
pub use mandelbrot::mandelbrot;
pub use palette::palette_16color;
pub use sub_filter::{filter_line, unfilter_line};
