//! Pattern-based string generator.
//!
//! Patterns use two placeholder characters:
//! - `?` - random uppercase ASCII letter
//! - `#` - random digit
//!
//! All other characters pass through verbatim. Product SKUs use the
//! pattern `???-###-???`.

use rand::Rng;

/// Fill a pattern, replacing `?` with uppercase letters and `#` with
/// digits.
pub fn fill<R: Rng + ?Sized>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '?' => (b'A' + rng.random_range(0..26)) as char,
            '#' => char::from_digit(rng.random_range(0..10), 10).unwrap_or('0'),
            other => other,
        })
        .collect()
}
