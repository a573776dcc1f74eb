//! Sample input generation.
//!
//! With no input files, the tool compresses a generated sample instead of
//! doing nothing. The sample mixes segments with very different symbol
//! distributions so the reported ratio actually says something: long runs
//! pack to almost nothing, skewed text sits in the middle, and uniform
//! random bytes come out larger than they went in.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `size` bytes of mixed-compressibility sample data.
///
/// Deterministic for a given seed.
pub fn generate(seed: u64, size: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    while data.len() < size {
        let segment = (size - data.len()).min(4096);

        match rng.gen_range(0..8) {
            // Runs of one byte value
            0 | 1 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(segment));
            }

            // Skewed text: common letters dominate, as in English
            2..=4 => {
                let weighted = b"eeeeettttaaaooinshrdlcumwf ygpbvkjxqz.";
                for _ in 0..segment {
                    data.push(weighted[rng.gen_range(0..weighted.len())]);
                }
            }

            // Short repeating motif
            5 | 6 => {
                let motif: Vec<u8> = (0..rng.gen_range(3..=16)).map(|_| rng.gen()).collect();
                for i in 0..segment {
                    data.push(motif[i % motif.len()]);
                }
            }

            // Uniform random bytes
            _ => {
                for _ in 0..segment {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size);
    data
}
