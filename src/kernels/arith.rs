//! Scalar addition kernels, one per fixed-width numeric type.
//!
//! Integer addition wraps on overflow (two's complement); float addition is
//! plain IEEE-754, so infinities and NaN propagate per the standard.

use num_traits::WrappingAdd;

/// Generic wrapping addition shared by the integer kernels.
#[inline]
pub fn wrapping_sum<T: WrappingAdd>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

#[inline]
pub fn sample_add_i32(a: i32, b: i32) -> i32 {
    wrapping_sum(a, b)
}

#[inline]
pub fn sample_add_i64(a: i64, b: i64) -> i64 {
    wrapping_sum(a, b)
}

#[inline]
pub fn sample_add_f32(a: f32, b: f32) -> f32 {
    a + b
}

#[inline]
pub fn sample_add_f64(a: f64, b: f64) -> f64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_i32_wraps_at_max() {
        assert_eq!(sample_add_i32(42, 3), 45);
        assert_eq!(sample_add_i32(-10, 89), 79);
        assert_eq!(sample_add_i32(i32::MAX, 1), i32::MIN);
        assert_eq!(sample_add_i32(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_add_i64_wraps_at_max() {
        assert_eq!(sample_add_i64(42, 3), 45);
        assert_eq!(sample_add_i64(i64::MAX, 1), i64::MIN);
        assert_eq!(sample_add_i64(i64::MIN, i64::MIN), 0);
    }

    #[test]
    fn test_add_f32_ieee_semantics() {
        assert_eq!(sample_add_f32(1.0, 2.0), 3.0);
        assert!(sample_add_f32(f32::NAN, 1.0).is_nan());
        assert!(sample_add_f32(f32::INFINITY, f32::NEG_INFINITY).is_nan());
        assert_eq!(sample_add_f32(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(sample_add_f32(42.1, 3.2), 42.1f32 + 3.2f32);
    }

    #[test]
    fn test_add_f64_ieee_semantics() {
        assert_eq!(sample_add_f64(0.1, 0.2), 0.30000000000000004);
        assert!(sample_add_f64(f64::NAN, 0.0).is_nan());
        assert_eq!(sample_add_f64(-f64::MAX, -f64::MAX), f64::NEG_INFINITY);
    }

    #[test]
    fn test_additions_are_pure() {
        for _ in 0..3 {
            assert_eq!(sample_add_i32(7, 8), 15);
            assert_eq!(sample_add_f64(1.5, 2.25), 3.75);
        }
    }
}
