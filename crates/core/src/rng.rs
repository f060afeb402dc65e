//! RNG module - linear congruential piece selection
//!
//! Each piece is drawn independently and uniformly from the seven kinds.
//! The generator carries its own seed from call to call, so it is seeded once
//! (from a fixed value or the wall clock) and then evolves deterministically.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// LCG multiplier (`a`)
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment (`c`)
pub const LCG_INCREMENT: u64 = 12_345;
/// LCG modulus (`m = 2^31`)
pub const LCG_MODULUS: u64 = 1 << 31;

/// One LCG step: `(a * seed + c) mod m`.
///
/// The seed is reduced modulo `m` first, which leaves the result unchanged and
/// keeps the multiplication inside `u64`.
pub fn hash(seed: u64) -> u64 {
    (LCG_MULTIPLIER * (seed % LCG_MODULUS) + LCG_INCREMENT) % LCG_MODULUS
}

/// Milliseconds since the Unix epoch, used to seed a generator once at startup.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Persistent LCG whose state is the last hash output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a new generator from any seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Create a generator seeded from the wall clock
    pub fn from_clock() -> Self {
        Self::new(seed_from_clock())
    }

    /// Advance and return the next raw value in `[0, 2^31)`
    pub fn next_u32(&mut self) -> u32 {
        self.state = hash(self.state);
        self.state as u32
    }

    /// Advance and return the next value scaled into `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / LCG_MODULUS as f64
    }

    /// Random integer in `[min, max]`, both inclusive.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "random_int range is empty: {min}..={max}");
        let span = (max as i64 - min as i64 + 1).max(1);
        let offset = (self.next_unit() * span as f64).floor() as i64;
        (min as i64 + offset.min(span - 1)) as i32
    }

    /// Draw a uniformly random piece kind
    pub fn next_piece(&mut self) -> PieceKind {
        let last = PieceKind::ALL.len() as i32 - 1;
        PieceKind::ALL[self.random_int(0, last) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_formula() {
        assert_eq!(hash(0), 12_345);
        assert_eq!(hash(1), 1_103_515_245 + 12_345);
        // Values wrap modulo 2^31.
        assert!(hash(u64::MAX) < LCG_MODULUS);
        assert_eq!(hash(LCG_MODULUS + 7), hash(7));
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = Lcg::new(12345);
        let mut rng2 = Lcg::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_advances_between_calls() {
        // Consecutive draws from one seed must not repeat the same value.
        let mut rng = Lcg::new(42);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_int_stays_in_range() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            let v = rng.random_int(-3, 3);
            assert!((-3..=3).contains(&v));
        }
        assert_eq!(rng.random_int(5, 5), 5);
    }

    #[test]
    fn test_next_piece_covers_all_kinds() {
        let mut rng = Lcg::new(2024);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = rng.next_piece();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "Missing kinds: {:?}", seen);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = Lcg::new(99);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
