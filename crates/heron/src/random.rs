//! Reproducible random side triples in [1,100] that always form a triangle.
//!
//! Model
//! - Draw `a, b` uniformly from 1..=100, then `c` uniformly from
//!   `|a−b|+1 ..= min(a+b−1, 100)`. Integer sides make the strict inequality
//!   hold by construction; the loop re-draws only as a guard.
//! - A `ReplayToken (seed, index)` keys the RNG directly; the same token
//!   always replays the same triple.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::sides::SideLengths;
use crate::validate::is_triangle;

/// Replay token: the same `(seed, index)` always yields the same triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Seed and index fill disjoint halves of the 32-byte key, so distinct
    /// tokens never share a key.
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[16..24].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw a valid integer triple from any RNG.
pub fn random_sides_with<R: Rng>(rng: &mut R) -> SideLengths {
    loop {
        let a: u32 = rng.gen_range(1..=100);
        let b: u32 = rng.gen_range(1..=100);
        let lo = a.abs_diff(b) + 1;
        let hi = (a + b - 1).min(100);
        if lo > hi {
            continue;
        }
        let c: u32 = rng.gen_range(lo..=hi);
        let sides = SideLengths::new(a as f64, b as f64, c as f64);
        if is_triangle(&sides) {
            return sides;
        }
    }
}

/// Draw the triple selected by `tok`.
pub fn random_sides(tok: ReplayToken) -> SideLengths {
    random_sides_with(&mut tok.rng())
}
