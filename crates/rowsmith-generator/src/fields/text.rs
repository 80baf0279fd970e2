//! Lorem text generators backed by the `fake` crate.

use fake::faker::lorem::raw::{Sentence, Word};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;

/// Generate a single lorem word.
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    Word(EN).fake_with_rng(rng)
}

/// Generate a two-word phrase, used for product and order names.
pub fn two_words<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", word(rng), word(rng))
}

/// Generate lorem text of at most `max_length` characters.
///
/// Sentences are appended while they fit; a first sentence longer than
/// the cap is truncated on a character boundary so the result is never
/// empty for a non-zero cap.
pub fn text_up_to<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    let mut out = String::new();
    loop {
        let sentence: String = Sentence(EN, 4..10).fake_with_rng(rng);
        if out.is_empty() {
            if sentence.chars().count() > max_length {
                return sentence.chars().take(max_length).collect();
            }
            out = sentence;
        } else {
            if out.chars().count() + 1 + sentence.chars().count() > max_length {
                return out;
            }
            out.push(' ');
            out.push_str(&sentence);
        }
    }
}
