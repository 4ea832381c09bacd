//! RNG module - injectable random source for piece and color selection
//!
//! Spawning picks a shape and a color uniformly at random. The game session
//! only sees the [`RandomSource`] trait, so tests can replay a fixed sequence
//! with [`ScriptedRng`] while the binary uses the seeded [`SimpleRng`].

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested `len`, so a script written for
/// one palette size stays in range for another.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let script = script.into();
        Self {
            script: if script.is_empty() { vec![0] } else { script },
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, len: usize) -> usize {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % len
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_index_in_range_and_covers_all() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let idx = rng.next_index(7);
            assert!(idx < 7);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every index should appear: {:?}", seen);
    }

    #[test]
    fn test_scripted_rng_cycles_and_wraps() {
        let mut rng = ScriptedRng::new(vec![1, 9, 4]);
        assert_eq!(rng.next_index(7), 1);
        assert_eq!(rng.next_index(7), 2);
        assert_eq!(rng.next_index(7), 4);
        assert_eq!(rng.next_index(7), 1);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut rng = ScriptedRng::new(Vec::new());
        assert_eq!(rng.next_index(3), 0);
        assert_eq!(rng.next_index(3), 0);
    }
}
