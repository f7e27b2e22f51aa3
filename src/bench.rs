//! Benchmark fixtures.
//!
//! Deterministic synthetic word lists so benchmarks do not depend on a
//! dictionary file being present.

use crate::wordlist::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Longest generated word.
const MAX_WORD_LENGTH: usize = 12;

/// Generates `count` lowercase words of 1 to 12 letters from `seed`.
///
/// The same `(count, seed)` pair always yields the same list.
pub fn synthetic_words(count: usize, seed: u64) -> WordList {
    let mut rng = StdRng::seed_from_u64(seed);

    let words = (0..count)
        .map(|_| {
            let len = rng.random_range(1..=MAX_WORD_LENGTH);
            (0..len)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect::<String>()
        })
        .collect::<Vec<_>>();
    WordList::from_words(words)
}
