use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a sequence of `length` elements drawn uniformly from `alphabet`,
/// reproducibly for a given `seed`. An empty alphabet yields an empty
/// sequence.
///
/// ## Example
///
/// ```
/// # use pairalign::generate::rand_sequence;
/// let seq = rand_sequence(b"ACGT", 20, 7);
/// assert_eq!(seq.len(), 20);
/// assert_eq!(seq, rand_sequence(b"ACGT", 20, 7));
/// ```
#[must_use]
pub fn rand_sequence<T: Copy>(alphabet: &[T], length: usize, seed: u64) -> Vec<T> {
    if alphabet.is_empty() {
        return Vec::new();
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length)
        .map(|_| alphabet[rng.next_u32() as usize % alphabet.len()])
        .collect()
}
