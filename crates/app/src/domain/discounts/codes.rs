//! Discount code generation.

use rand::{Rng, seq::SliceRandom};

/// Length of every generated code.
pub const CODE_LENGTH: usize = 8;

/// Characters a generated code is drawn from.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random code from [`CODE_ALPHABET`] using the given RNG.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .filter_map(|_| CODE_ALPHABET.choose(rng).copied().map(char::from))
        .collect()
}

/// Generate a random code using the thread-local RNG.
#[must_use]
pub fn generate_code() -> String {
    generate_code_with(&mut rand::thread_rng())
}
