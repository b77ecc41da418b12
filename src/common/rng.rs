//! Deterministic random source for sampling.
//!
//! Every sampling call in the crate draws from a single injected stream via
//! the [`Rng`] trait, so tests can substitute a seeded generator and replay
//! runs exactly. The trait is object-safe on purpose: models and trackers
//! take `&mut dyn Rng`.

/// Random number generator trait for deterministic testing.
///
/// Minimal interface: implementors supply `next_u64`, everything else is
/// derived from it.
pub trait Rng {
    /// Generate the next uint64 value
    fn next_u64(&mut self) -> u64;

    /// Generate a random f64 in [0, 1)
    fn rand(&mut self) -> f64 {
        self.next_u64() as f64 / (u64::MAX as f64 + 1.0)
    }

    /// Generate a uniform index in [0, len)
    ///
    /// # Panics
    /// Panics in debug builds if `len` is zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() requires a non-empty range");
        ((self.rand() * len as f64) as usize).min(len - 1)
    }
}

/// Simple deterministic random number generator using Xorshift64.
///
/// Minimal, fast, and good enough quality for simulation and testing.
/// Identical output for the same seed on every platform.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new SimpleRng with the given seed.
    /// If seed is 0, uses 1 instead to avoid degenerate state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Create a SimpleRng seeded from the operating system entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::RngCore::next_u64(&mut rand::thread_rng()))
    }
}

impl Rng for SimpleRng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

// Implement rand::RngCore to enable use with the rand ecosystem
impl rand::RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        Rng::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Rng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = Rng::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
