//! This module contains the pure, stateless kernels for the "sub" line filter.
//!
//! Each element is replaced by its wrapping difference from the element before
//! it, the predictor used for row-based image and byte-stream delta encoding.
//! The core algorithms are generic over primitive integers and work **in-place**;
//! the public byte-row API wraps them with explicit bounds checks.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

use crate::error::{Result, SampleError};

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Performs sub-filter encoding **in-place**: `data[i] = data[i] - data[i - 1]`.
pub fn encode_sub<T>(data: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    if data.len() <= 1 {
        return;
    }
    // Iterate backwards so each step still sees the original predecessor.
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(&data[i - 1]);
    }
}

/// Reverses [`encode_sub`] **in-place** with a running wrapping sum.
pub fn decode_sub<T>(data: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    if data.len() <= 1 {
        return;
    }
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

//==================================================================================
// 2. Bounds Validation
//==================================================================================

fn check_row(len: usize, src_len: usize, dest_len: usize) -> Result<()> {
    if len == 0 {
        log::debug!("line filter rejected: len must be at least 1");
        return Err(SampleError::InvalidArgument(
            "line length must be at least 1".to_string(),
        ));
    }
    let available = src_len.min(dest_len);
    if available < len {
        log::debug!(
            "line filter rejected: len {} exceeds buffers (src {}, dest {})",
            len,
            src_len,
            dest_len
        );
        return Err(SampleError::OutOfBounds {
            needed: len,
            available,
        });
    }
    Ok(())
}

//==================================================================================
// 3. Public Row API
//==================================================================================

/// Writes the sub-filtered form of `src[..len]` into `dest[..len]`.
///
/// `dest[0] = src[0]` and `dest[i] = src[i] - src[i - 1]` (mod 256).
/// Elements of `dest` past `len` are left untouched.
///
/// # Errors
/// `InvalidArgument` if `len == 0`, `OutOfBounds` if either buffer is shorter than `len`.
pub fn filter_line(dest: &mut [u8], src: &[u8], len: usize) -> Result<()> {
    check_row(len, src.len(), dest.len())?;
    let (dest, src) = (&mut dest[..len], &src[..len]);
    dest[0] = src[0];
    for i in 1..len {
        dest[i] = src[i].wrapping_sub(src[i - 1]);
    }
    Ok(())
}

/// Reconstructs a row from its sub-filter residuals: the inverse of [`filter_line`].
///
/// # Errors
/// Same contract as [`filter_line`].
pub fn unfilter_line(dest: &mut [u8], src: &[u8], len: usize) -> Result<()> {
    check_row(len, src.len(), dest.len())?;
    let dest = &mut dest[..len];
    dest.copy_from_slice(&src[..len]);
    decode_sub(dest);
    Ok(())
}

/// Sub-filters an entire row in place.
pub fn filter_in_place(row: &mut [u8]) -> Result<()> {
    if row.is_empty() {
        return Err(SampleError::InvalidArgument(
            "line length must be at least 1".to_string(),
        ));
    }
    encode_sub(row);
    Ok(())
}

/// Undoes [`filter_in_place`].
pub fn unfilter_in_place(row: &mut [u8]) -> Result<()> {
    if row.is_empty() {
        return Err(SampleError::InvalidArgument(
            "line length must be at least 1".to_string(),
        ));
    }
    decode_sub(row);
    Ok(())
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_line_wraps_negative_deltas() {
        let src = [10u8, 12, 15, 11];
        let mut dest = [0u8; 4];
        filter_line(&mut dest, &src, 4).unwrap();
        assert_eq!(dest, [10, 2, 3, 252]);
    }

    #[test]
    fn test_filter_line_single_element() {
        let src = [42u8];
        let mut dest = [0u8];
        filter_line(&mut dest, &src, 1).unwrap();
        assert_eq!(dest, [42]);
    }

    #[test]
    fn test_filter_line_leaves_tail_untouched() {
        let src = [5u8, 9, 200, 1];
        let mut dest = [0xAAu8; 6];
        filter_line(&mut dest, &src, 3).unwrap();
        assert_eq!(dest, [5, 4, 191, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn test_filter_line_demo_row() {
        let src = [
            20u8, 30, 39, 47, 53, 58, 62, 65, 67, 68, 68, 67, 65, 62, 58, 53,
        ];
        let mut dest = [0u8; 16];
        filter_line(&mut dest, &src, src.len()).unwrap();
        assert_eq!(
            dest,
            [20, 10, 9, 8, 6, 5, 4, 3, 2, 1, 0, 255, 254, 253, 252, 251]
        );
    }

    #[test]
    fn test_filter_line_rejects_zero_len() {
        let mut dest = [0u8; 2];
        let result = filter_line(&mut dest, &[1, 2], 0);
        assert!(matches!(result, Err(SampleError::InvalidArgument(_))));
    }

    #[test]
    fn test_filter_line_rejects_short_buffers() {
        let mut dest = [0u8; 2];
        let result = filter_line(&mut dest, &[1, 2, 3], 3);
        assert!(matches!(
            result,
            Err(SampleError::OutOfBounds {
                needed: 3,
                available: 2
            })
        ));

        let mut dest = [0u8; 8];
        let result = filter_line(&mut dest, &[1], 4);
        assert!(matches!(
            result,
            Err(SampleError::OutOfBounds {
                needed: 4,
                available: 1
            })
        ));
        assert_eq!(dest, [0u8; 8], "rejected call must not write");
    }

    #[test]
    fn test_unfilter_line_restores_row() {
        let original = [10u8, 12, 15, 11, 0, 255, 128];
        let mut filtered = [0u8; 7];
        filter_line(&mut filtered, &original, 7).unwrap();

        let mut restored = [0u8; 7];
        unfilter_line(&mut restored, &filtered, 7).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_in_place_variants_match_row_api() {
        let original = [100u8, 3, 250, 7, 7];
        let mut expected = [0u8; 5];
        filter_line(&mut expected, &original, 5).unwrap();

        let mut row = original;
        filter_in_place(&mut row).unwrap();
        assert_eq!(row, expected);

        unfilter_in_place(&mut row).unwrap();
        assert_eq!(row, original);

        assert!(filter_in_place(&mut [0u8; 0]).is_err());
        assert!(unfilter_in_place(&mut [0u8; 0]).is_err());
    }

    #[test]
    fn test_generic_core_on_wider_integers() {
        let original: Vec<i64> = vec![100, 110, 115, 112, 122];
        let mut buffer = original.clone();
        encode_sub(&mut buffer);
        assert_eq!(buffer, vec![100, 10, 5, -3, 10]);
        decode_sub(&mut buffer);
        assert_eq!(buffer, original);

        let mut wrapping: Vec<u16> = vec![1, 0];
        encode_sub(&mut wrapping);
        assert_eq!(wrapping, vec![1, u16::MAX]);
    }
}
