//! A tiny table of binary `i32` operations for exercising indirect calls.
//!
//! Loaders fetch a function pointer by index and invoke it later through
//! `func_invoke`, which checks that pointers survive the boundary round trip.

/// Signature shared by every entry in the table.
pub type BinaryOp = extern "C" fn(i32, i32) -> i32;

extern "C" fn op_add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

extern "C" fn op_mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

const FUNC_TABLE: [BinaryOp; 2] = [op_add, op_mul];

/// Returns the operation at `index` (0 = add, 1 = multiply), if any.
pub fn func_fetch(index: i32) -> Option<BinaryOp> {
    usize::try_from(index)
        .ok()
        .and_then(|i| FUNC_TABLE.get(i).copied())
}

/// Calls `f(a, b)`.
pub fn func_invoke(f: BinaryOp, a: i32, b: i32) -> i32 {
    f(a, b)
}
