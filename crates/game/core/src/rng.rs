//! Deterministic shuffling for dealing the deck.
//!
//! Each peer shuffles its own copy of the deck. The order never travels over
//! the wire (cards are addressed by id), so the only requirement is that a
//! given seed always yields the same order, which keeps tests reproducible.

/// Seeded random source used by the dealer.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Fisher-Yates shuffle where every swap draws from its own derived seed.
    fn shuffle<T>(&self, seed: u64, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.range(compute_seed(seed, i as u64, 0), 0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Derive a seed for one random draw.
///
/// * `game_seed` - Base seed chosen when the runtime starts
/// * `round` - Deal counter (incremented on every reset)
/// * `context` - Distinguishes several draws inside the same deal
pub fn compute_seed(game_seed: u64, round: u64, context: u64) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= context.wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        PcgRng.shuffle(42, &mut a);
        PcgRng.shuffle(42, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..20).collect();
        PcgRng.shuffle(7, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn rounds_produce_different_seeds() {
        assert_ne!(compute_seed(1, 1, 0), compute_seed(1, 2, 0));
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        for seed in 0..200 {
            let v = PcgRng.range(seed, 3, 5);
            assert!((3..=5).contains(&v));
        }
        assert_eq!(PcgRng.range(9, 4, 4), 4);
    }
}
