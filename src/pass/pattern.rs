//! Pattern expansion: positional templates of `U`/`D`/`L` tokens.

use rand::Rng;
use rand::rngs::OsRng;

use super::charset;

/// Expand a pattern, resolving each position independently.
///
/// `U` draws a random uppercase letter, `D` a random digit, `L` a random
/// lowercase letter; any other character is copied through literally.
pub(crate) fn expand(pattern: &str) -> String {
    let mut rng = OsRng;
    pattern
        .chars()
        .map(|c| match c {
            'U' => random_char(charset::UPPERCASE, &mut rng),
            'D' => random_char(charset::DIGITS, &mut rng),
            'L' => random_char(charset::LOWERCASE, &mut rng),
            literal => literal,
        })
        .collect()
}

// Token sets are ASCII, so byte indexing is safe.
fn random_char(set: &str, rng: &mut OsRng) -> char {
    set.as_bytes()[rng.gen_range(0..set.len())] as char
}
