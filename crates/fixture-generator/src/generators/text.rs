//! Random text generator.

use fixture_core::Leaf;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Generate an alphanumeric string with a length in `1..=max_len`.
///
/// A `max_len` of zero yields an empty string.
pub fn generate_text<R: Rng>(rng: &mut R, max_len: usize) -> Leaf {
    if max_len == 0 {
        return Leaf::Text(String::new());
    }

    let len = rng.random_range(1..=max_len);
    let text: String = (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    Leaf::Text(text)
}
