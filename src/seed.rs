//! Seeded randomness for scene placement.
//!
//! Every body gets its own generator derived from a hash of its stable id, so
//! placement never depends on iteration order or shared random state.

use rand::RngCore;

use crate::constants::{FNV_OFFSET_BASIS, FNV_PRIME, MULBERRY_INCREMENT};

/// 32-bit FNV-1a over the UTF-16 code units of `key`.
pub fn hash_string_to_seed(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ unit as u32).wrapping_mul(FNV_PRIME)
    })
}

/// mulberry32: a tiny 32-bit generator whose output stream is reproducible
/// bit-for-bit from its seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(hash_string_to_seed(key))
    }

    /// Uniform sample in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform sample in [-1, 1).
    pub fn next_signed(&mut self) -> f64 {
        (self.next_unit() - 0.5) * 2.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
