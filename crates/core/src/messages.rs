//! Success-notification phrases
//!
//! The conversion notice carries one phrase from a fixed set. The pick is a
//! pure function of a seed so it is reproducible under test; live callers
//! supply a random seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed phrase set shown alongside a successful conversion
pub const PHRASES: [&str; 13] = [
    "Every time you do this, a kitten dies.",
    "Your TV is lonely right now.",
    "Heeeeeere fishy, fishy, fishy!",
    "Don't feel sad, don't feel glue, Einstein was ugly too.",
    "Love me or leave me. Hey, where is everybody going?",
    "Roses are red,\nviolets are blue,\nmost poems rhyme,\nbut this one doesn't.",
    "Heeere's Johnny!",
    "There are three kinds of people: those who can count and those who can't.",
    "The beatings will continue until morale improves.",
    "Copywight 1994 Elmer Fudd. All wights wesewved.",
    "2 + 2 = 5 for extremely large values of 2.",
    "This is not a bug, is a random feature.",
    "I took an IQ test and the results were negative.",
];

/// Picks a phrase deterministically from `PHRASES` for a given seed
pub fn pick(seed: u64) -> &'static str {
    let mut rng = StdRng::seed_from_u64(seed);
    PHRASES[rng.gen_range(0..PHRASES.len())]
}
