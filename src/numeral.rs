//! Conversions between numeral sequences and arbitrary-precision integers.
//!
//! FF3 evaluates message halves with the digit at index 0 as the *least*
//! significant numeral, i.e. the reverse of the usual written order. Both
//! conversions here use that convention; it cancels out because encryption
//! and decryption read and write halves through the same functions.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::common::Error;

/// Interpret `digits` as a base-`radix` integer with `digits[0]` least
/// significant: `sum(digits[i] * radix^i)`.
///
/// Returns [`Error::StringNotInRadix`] if any digit is `>= radix`.
pub fn num_rev(digits: &[u16], radix: u32) -> Result<BigUint, Error> {
    let base = BigUint::from(radix);
    let mut acc = BigUint::zero();
    for &d in digits.iter().rev() {
        if u32::from(d) >= radix {
            return Err(Error::StringNotInRadix);
        }
        acc = acc * &base + u64::from(d);
    }
    Ok(acc)
}

/// Fill `out` with the base-`radix` digits of `n`, least significant first,
/// zero-padding the high positions.
///
/// The caller reduces `n` modulo `radix^out.len()` beforehand, so `n` always
/// fits.
pub fn str_rev(mut n: BigUint, out: &mut [u16], radix: u32) {
    let base = BigUint::from(radix);
    for slot in out.iter_mut() {
        let digit = &n % &base;
        *slot = digit.to_u16().unwrap();
        n /= &base;
    }
    debug_assert!(n.is_zero());
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_num_rev_is_little_endian() {
        // digits [1, 2, 3] in base 10 read as 321
        let n = num_rev(&[1, 2, 3], 10).unwrap();
        assert_eq!(n, BigUint::from(321u32));
    }

    #[test]
    fn test_num_rev_empty() {
        assert_eq!(num_rev(&[], 10).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_num_rev_rejects_digit_at_radix() {
        assert_eq!(num_rev(&[0, 10, 3], 10), Err(Error::StringNotInRadix));
    }

    #[test]
    fn test_str_rev_zero_pads_high_positions() {
        let mut out = [0xFFFFu16; 5];
        str_rev(BigUint::from(321u32), &mut out, 10);
        assert_eq!(out, [1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_roundtrip_large_value() {
        let digits: Vec<u16> = (0..40).map(|i| (i * 7 % 10) as u16).collect();
        let n = num_rev(&digits, 10).unwrap();

        let mut out = vec![0u16; digits.len()];
        str_rev(n, &mut out, 10);
        assert_eq!(out, digits);
    }

    #[test]
    fn test_roundtrip_max_radix() {
        let digits: Vec<u16> = vec![65535, 0, 12345, 1];
        let n = num_rev(&digits, 65536).unwrap();

        let mut out = vec![0u16; digits.len()];
        str_rev(n, &mut out, 65536);
        assert_eq!(out, digits);
    }
}
