use ark_std::vec::Vec;

/// Base used when setting up for an arbitrary range `[min, max)` and no base is given
pub const DEFAULT_BASE: u16 = 100;

/// Representation of `value` in base `base` with exactly `num_digits` digits in little-endian form, i.e.
/// `value = sum(digits[i] * base^i)`. Returns `None` if `value` needs more digits or the base is less than 2.
pub fn padded_base_n_digits(mut value: u128, base: u16, num_digits: usize) -> Option<Vec<u16>> {
    if base < 2 {
        return None;
    }
    let base = base as u128;
    let mut digits = Vec::with_capacity(num_digits);
    for _ in 0..num_digits {
        digits.push((value % base) as u16);
        value /= base;
    }
    if value != 0 {
        return None;
    }
    Some(digits)
}

/// Number of base `base` digits such that `base^digits > max`, found by dividing `max` by `base`
/// until nothing remains. At least 1. Returns `None` if the base is less than 2.
pub fn num_digits_for(max: u64, base: u16) -> Option<u16> {
    if base < 2 {
        return None;
    }
    let mut l = 0;
    let mut quotient = max;
    while quotient > 0 {
        quotient /= base as u64;
        l += 1;
    }
    Some(l.max(1))
}

/// `base^num_digits`, the exclusive upper bound of values that have `num_digits` digits in base `base`
pub fn perfect_range_max(base: u16, num_digits: u16) -> Option<u128> {
    (base as u128).checked_pow(num_digits as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(padded_base_n_digits(176, 10, 5), Some(vec![6, 7, 1, 0, 0]));
        assert_eq!(padded_base_n_digits(99999, 10, 5), Some(vec![9; 5]));
        assert_eq!(padded_base_n_digits(100000, 10, 5), None);
        assert_eq!(padded_base_n_digits(0, 2, 3), Some(vec![0, 0, 0]));
        assert_eq!(padded_base_n_digits(5, 2, 3), Some(vec![1, 0, 1]));
        assert_eq!(padded_base_n_digits(8, 2, 3), None);
        assert_eq!(padded_base_n_digits(3, 1, 3), None);
        assert_eq!(
            padded_base_n_digits(u64::MAX as u128, 100, 10).map(|d| d.len()),
            Some(10)
        );

        for (value, base) in [(0u128, 3u16), (1, 2), (12345678, 7), (u64::MAX as u128, 256)] {
            let digits = padded_base_n_digits(value, base, 40).unwrap();
            let mut recomposed = 0u128;
            for d in digits.iter().rev() {
                assert!(*d < base);
                recomposed = recomposed * base as u128 + *d as u128;
            }
            assert_eq!(recomposed, value);
        }
    }

    #[test]
    fn number_of_digits() {
        assert_eq!(num_digits_for(100, 100), Some(2));
        assert_eq!(num_digits_for(99, 100), Some(1));
        assert_eq!(num_digits_for(0, 100), Some(1));
        assert_eq!(num_digits_for(1, 10), Some(1));
        assert_eq!(num_digits_for(10, 10), Some(2));
        assert_eq!(num_digits_for(u64::MAX, 100), Some(10));
        assert_eq!(num_digits_for(u64::MAX, 2), Some(64));
        assert_eq!(num_digits_for(10, 1), None);

        for (max, base) in [(100u64, 100u16), (1000, 10), (17, 2), (u64::MAX, 100)] {
            let l = num_digits_for(max, base).unwrap();
            assert!(perfect_range_max(base, l).unwrap() > max as u128);
        }

        assert_eq!(perfect_range_max(10, 5), Some(100000));
        assert_eq!(perfect_range_max(2, 128), None);
        assert_eq!(perfect_range_max(2, 127), Some(1 << 127));
    }
}
