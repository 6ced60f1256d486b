//! Base-10 digit routines over `i32`.
//!
//! Division and remainder are truncating (`/` and `%` on signed integers
//! round toward zero), so every extracted digit carries the sign of the
//! input. Negative inputs therefore reverse to negative results and sum
//! to negative digit sums.

/// Reverses the decimal digits of `n`.
///
/// Trailing zeros are dropped (`reverse(120) == 21`). Arithmetic wraps on
/// overflow, matching unchecked 32-bit two's-complement integers; use
/// [`checked_reverse`] to detect it instead.
pub fn reverse(n: i32) -> i32 {
    let mut remaining = n;
    let mut result: i32 = 0;
    while remaining != 0 {
        result = result.wrapping_mul(10).wrapping_add(remaining % 10);
        remaining /= 10;
    }
    result
}

/// Like [`reverse`], but returns `None` when any intermediate value leaves
/// the `i32` range.
pub fn checked_reverse(n: i32) -> Option<i32> {
    let mut remaining = n;
    let mut result: i32 = 0;
    while remaining != 0 {
        result = result.checked_mul(10)?.checked_add(remaining % 10)?;
        remaining /= 10;
    }
    Some(result)
}

/// Sums the decimal digits of `n`. Digits of a negative input count as
/// negative, so `digit_sum(-123) == -6`.
pub fn digit_sum(n: i32) -> i32 {
    let mut remaining = n;
    let mut sum = 0;
    while remaining != 0 {
        let r = remaining % 10;
        remaining /= 10;
        sum += r;
    }
    sum
}
