//! Integer arithmetic tools.

use mafcoder_common::ToolError;
use rand::Rng;

pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Uniform random integer in `[min, max)`.
pub fn random_in_range(min: i64, max: i64) -> Result<i64, ToolError> {
    if min >= max {
        return Err(ToolError::InvalidRange { min, max });
    }
    Ok(rand::thread_rng().gen_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_subtract() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 2), -5);
        assert_eq!(subtract(10, 4), 6);
        assert_eq!(subtract(4, 10), -6);
    }

    #[test]
    fn arithmetic_wraps_instead_of_panicking() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(subtract(i64::MIN, 1), i64::MAX);
    }

    #[test]
    fn random_stays_in_half_open_range() {
        for (min, max) in [(0, 1), (-5, 5), (100, 103), (i64::MIN, i64::MIN + 2)] {
            for _ in 0..200 {
                let v = random_in_range(min, max).unwrap();
                assert!(min <= v && v < max, "{v} not in [{min}, {max})");
            }
        }
    }

    #[test]
    fn random_single_value_range() {
        assert_eq!(random_in_range(41, 42).unwrap(), 41);
    }

    #[test]
    fn random_rejects_empty_or_inverted_range() {
        assert!(matches!(
            random_in_range(3, 3),
            Err(ToolError::InvalidRange { min: 3, max: 3 })
        ));
        assert!(random_in_range(10, -10).is_err());
    }
}
