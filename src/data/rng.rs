// ---------------------------------------------------------------------------
// SimpleRng – minimal deterministic PRNG (xoshiro256**)
// ---------------------------------------------------------------------------

/// Small seeded generator used for the fallback dataset and the random-pick
/// action. Keeping the seed explicit makes both reproducible in tests;
/// there is no global random state anywhere in the crate.
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        // SplitMix-style expansion of the seed into the four state words.
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in [lo, hi] (inclusive). Requires `lo <= hi`.
    pub fn gen_range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as u64 + 1;
        lo + (self.next_u64() % span) as i32
    }

    /// Uniform index in [0, len).
    pub fn gen_range_usize(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform float in [lo, hi].
    pub fn gen_range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Pick one element of a non-empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.gen_range_usize(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn ranges_stay_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let y = rng.gen_range_i32(1990, 2023);
            assert!((1990..=2023).contains(&y));

            let r = rng.gen_range_f64(5.0, 10.0);
            assert!((5.0..=10.0).contains(&r));

            let i = rng.gen_range_usize(10);
            assert!(i < 10);
        }
    }

    #[test]
    fn choice_returns_slice_element() {
        let mut rng = SimpleRng::new(1);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert!(items.contains(rng.choice(&items)));
        }
    }
}
