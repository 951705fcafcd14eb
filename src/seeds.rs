//! Seed management for map generation
//!
//! Resolves the user-facing seed string into a master seed and gives each
//! generation stage its own derived seed, so the relief field, the biome
//! field and the tile downgrade draws never share a random stream.
//!
//! Both steps use fixed algorithms (FNV-1a for text, a ChaCha8 stream for
//! sub-seeds), so a saved seed keeps producing the same map across builds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seeds for every stage of one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Raw noise behind the relief field
    pub relief: u64,
    /// Raw noise behind the biome field
    pub biomes: u64,
    /// Tile downgrade draws during classification
    pub tiles: u64,
}

impl MapSeeds {
    /// Derive all stage seeds from a master seed.
    ///
    /// Stage seeds are consecutive draws from a ChaCha8 stream keyed by the
    /// master, in the fixed order relief, biomes, tiles.
    pub fn from_master(master: u64) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(master);
        Self {
            master,
            relief: stream.next_u64(),
            biomes: stream.next_u64(),
            tiles: stream.next_u64(),
        }
    }

    /// Resolve a seed string.
    ///
    /// A plain decimal number is used as the master seed directly; any other
    /// text is hashed. `None` or blank text picks a fresh seed from entropy.
    pub fn from_seed_str(seed: Option<&str>) -> Self {
        match seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => Self::from_master(master_from_str(text)),
            None => Self::from_master(rand::random()),
        }
    }

    pub fn relief_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.relief)
    }

    pub fn biome_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.biomes)
    }

    pub fn tile_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.tiles)
    }
}

fn master_from_str(text: &str) -> u64 {
    if let Ok(n) = text.parse::<u64>() {
        return n;
    }
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
