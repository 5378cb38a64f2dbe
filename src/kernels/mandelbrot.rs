//! Escape-time counter for the Mandelbrot set.
//!
//! Iterates `z <- z^2 + c` from `z = 0` using the explicit real/imaginary
//! recurrence. The bail-out test is `|z|^2 <= 4.0`, checked before each step.

/// Squared modulus past which an orbit is considered escaped.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Returns the number of iterations performed before the orbit of `(cx, cy)`
/// escaped, or `max_iters` if it never did.
///
/// A non-positive `max_iters` yields 0.
pub fn mandelbrot(max_iters: i32, cx: f64, cy: f64) -> i32 {
    let (x0, y0) = (cx, cy);
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut iter = 0_i32;
    // Separate multiplies and adds; `mul_add` would change the rounding.
    while x * x + y * y <= ESCAPE_RADIUS_SQ && iter < max_iters {
        let xtemp = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = xtemp;
        iter += 1;
    }
    iter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(mandelbrot(100, 0.0, 0.0), 100);
        assert_eq!(mandelbrot(1000, 0.0, 0.0), 1000);
    }

    #[test]
    fn test_far_points_escape_after_one_step() {
        assert_eq!(mandelbrot(100, 2.0, 2.0), 1);
        assert_eq!(mandelbrot(1000, -2.0, -2.0), 1);
    }

    #[test]
    fn test_escape_after_two_steps() {
        // z1 = (-1.5, -1), |z1|^2 = 3.25; z2 = (-0.25, 2), |z2|^2 = 4.0625.
        assert_eq!(mandelbrot(1000, -1.5, -1.0), 2);
    }

    #[test]
    fn test_boundary_uses_inclusive_comparison() {
        // c = -2 lands on |z|^2 == 4.0 exactly and stays there forever.
        assert_eq!(mandelbrot(50, -2.0, 0.0), 50);
    }

    #[test]
    fn test_non_positive_bound() {
        assert_eq!(mandelbrot(0, 0.0, 0.0), 0);
        assert_eq!(mandelbrot(-5, 2.0, 2.0), 0);
    }

    #[test]
    fn test_nan_seed_stops_immediately_after_first_step() {
        // NaN fails every comparison, so the loop exits after one iteration.
        assert_eq!(mandelbrot(10, f64::NAN, 0.0), 1);
    }
}
