// In: src/ffi/mod.rs

//! The `extern "C"` boundary of the library.
//!
//! Every symbol here is unmangled and uses only fixed-width integers, IEEE-754
//! floats, and raw pointers with explicit lengths. The wrappers are thin: they
//! validate what can be validated at the boundary, delegate to `crate::kernels`,
//! and turn `SampleError`s into status codes so nothing unwinds into the host.

use crate::config::LoggingConfig;
use crate::error::{SampleError, STATUS_OK};
use crate::kernels::{self, sub_filter, BinaryOp};
use crate::observability;

//==================================================================================
// I. Arithmetic
//==================================================================================

#[no_mangle]
pub extern "C" fn sample_add_i32(a: i32, b: i32) -> i32 {
    kernels::sample_add_i32(a, b)
}

#[no_mangle]
pub extern "C" fn sample_add_i64(a: i64, b: i64) -> i64 {
    kernels::sample_add_i64(a, b)
}

#[no_mangle]
pub extern "C" fn sample_add_f32(a: f32, b: f32) -> f32 {
    kernels::sample_add_f32(a, b)
}

#[no_mangle]
pub extern "C" fn sample_add_f64(a: f64, b: f64) -> f64 {
    kernels::sample_add_f64(a, b)
}

//==================================================================================
// II. Mandelbrot & Palette
//==================================================================================

#[no_mangle]
pub extern "C" fn mandelbrot(max_iters: i32, cx: f64, cy: f64) -> i32 {
    kernels::mandelbrot(max_iters, cx, cy)
}

/// Returns `0x00RRGGBB` for indices 0–15 and -1 otherwise.
#[no_mangle]
pub extern "C" fn palette_16color(index: i32) -> i32 {
    kernels::palette_16color(index)
}

//==================================================================================
// III. Line Filters
//==================================================================================

type RowKernel = fn(&mut [u8], &[u8], usize) -> crate::error::Result<()>;

/// True if `[a, a + len)` and `[b, b + len)` share any address.
fn ranges_overlap(a: usize, b: usize, len: usize) -> bool {
    a < b.saturating_add(len) && b < a.saturating_add(len)
}

/// Validates raw row arguments, then runs `kernel` over `len`-element slices.
///
/// # Safety
/// Non-null `dest` and `src` must each point to at least `len` bytes.
/// Overlapping regions are rejected before any slice is built.
unsafe fn checked_row(
    kernel: RowKernel,
    dest: *mut u8,
    src: *const u8,
    len: i32,
) -> crate::error::Result<()> {
    if dest.is_null() || src.is_null() {
        return Err(SampleError::InvalidArgument(
            "null buffer pointer".to_string(),
        ));
    }
    let len = usize::try_from(len)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| {
            SampleError::InvalidArgument(format!("line length must be at least 1, got {len}"))
        })?;
    if ranges_overlap(dest as usize, src as usize, len) {
        return Err(SampleError::InvalidArgument(
            "dest and src buffers overlap".to_string(),
        ));
    }
    // SAFETY: pointers are non-null, disjoint, and the caller guarantees `len` valid bytes each.
    let dest = std::slice::from_raw_parts_mut(dest, len);
    let src = std::slice::from_raw_parts(src, len);
    kernel(dest, src, len)
}

fn to_status(name: &str, result: crate::error::Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => {
            log::warn!("{} rejected: {}", name, err);
            err.status_code()
        }
    }
}

/// Sub-filters `len` bytes of `src` into `dest`. Returns 0 or a negative status.
///
/// # Safety
/// `dest` and `src` must each be null or point to `len` addressable bytes.
/// Overlapping buffers are rejected with status -1.
#[no_mangle]
pub unsafe extern "C" fn filter_line(dest: *mut u8, src: *const u8, len: i32) -> i32 {
    to_status("filter_line", checked_row(sub_filter::filter_line, dest, src, len))
}

/// Inverse of [`filter_line`]. Returns 0 or a negative status.
///
/// # Safety
/// Same requirements as [`filter_line`].
#[no_mangle]
pub unsafe extern "C" fn unfilter_line(dest: *mut u8, src: *const u8, len: i32) -> i32 {
    to_status(
        "unfilter_line",
        checked_row(sub_filter::unfilter_line, dest, src, len),
    )
}

//==================================================================================
// IV. Function Table
//==================================================================================

/// Returns the table entry at `index`, or null.
#[no_mangle]
pub extern "C" fn func_fetch(index: i32) -> Option<BinaryOp> {
    kernels::func_fetch(index)
}

/// Calls `f(a, b)`; a null `f` yields 0.
#[no_mangle]
pub extern "C" fn func_invoke(f: Option<BinaryOp>, a: i32, b: i32) -> i32 {
    match f {
        Some(f) => kernels::func_invoke(f, a, b),
        None => {
            log::warn!("func_invoke called with a null function pointer");
            0
        }
    }
}

//==================================================================================
// V. Diagnostics
//==================================================================================

/// Turns on info-level logging to stderr for the rest of the process.
#[no_mangle]
pub extern "C" fn sample_enable_verbose_logging() {
    if let Err(err) = observability::init_logging(&LoggingConfig::default()) {
        log::warn!("could not enable verbose logging: {}", err);
    }
}
