//! Numeric value generators.

use rand::Rng;

/// Round a value to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a random amount in the given range (inclusive), rounded to
/// 2 decimal places.
///
/// Callers validate min <= max before generating; equal bounds collapse
/// to the bound itself.
pub fn amount_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return round2(min);
    }
    round2(rng.random_range(min..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_amount_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = amount_between(&mut rng, 10.0, 500.0);
            assert!((10.0..=500.0).contains(&value));
        }
    }

    #[test]
    fn test_amount_has_two_decimal_places() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = amount_between(&mut rng, 5.0, 1000.0);
            let scaled = value * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "expected 2 decimal places, got {value}"
            );
        }
    }

    #[test]
    fn test_equal_bounds_collapse() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(amount_between(&mut rng, 25.0, 25.0), 25.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-1.236), -1.24);
    }
}
