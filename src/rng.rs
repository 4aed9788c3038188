//! Seed derivation for deterministic generation
//!
//! Every top-level generation call builds exactly one RNG from the caller's
//! seed and a namespace, then threads it down by `&mut`. Nothing is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Namespace for palette generation
pub const PALETTE_NAMESPACE: &str = "palette";
/// Namespace for genre blending
pub const BLEND_NAMESPACE: &str = "blend";

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derive a 64-bit seed from a caller seed, a namespace and an index.
///
/// Same inputs always yield the same output; different namespaces
/// decorrelate streams that share a caller seed.
pub fn derive_seed(seed: i64, namespace: &str, index: u64) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in namespace.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    let mixed = hash ^ (seed as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ index.rotate_left(32);
    splitmix64(mixed)
}

#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Serializable description of where an RNG stream came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedState {
    pub seed: i64,
    pub index: u64,
}

impl SeedState {
    pub fn new(seed: i64) -> Self {
        Self { seed, index: 0 }
    }

    /// Build the RNG for this seed inside `namespace`
    pub fn to_rng(&self, namespace: &str) -> Pcg32 {
        Pcg32::seed_from_u64(derive_seed(self.seed, namespace, self.index))
    }
}
