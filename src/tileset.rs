//! Tile types and the relief/biome cascade that picks them

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::biomes::Biome;

/// Relief at or below this is water, for both biome and tile selection.
pub const WATERTABLE: f64 = 110.0;

/// Relief in `(WATERTABLE, SANDLEVEL]` is sand.
pub const SANDLEVEL: f64 = WATERTABLE + 10.0;

/// One in this many tiaga forest tiles becomes grass.
pub const TIAGA_GRASS_ODDS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Water,
    Sand,
    MountainHigh,
    Forest,
    Grass,
    None,
}

impl Tile {
    pub fn name(&self) -> &'static str {
        match self {
            Tile::Water => "Water",
            Tile::Sand => "Sand",
            Tile::MountainHigh => "MountainHigh",
            Tile::Forest => "Forest",
            Tile::Grass => "Grass",
            Tile::None => "None",
        }
    }

    pub fn all() -> &'static [Tile] {
        &[
            Tile::Water,
            Tile::Sand,
            Tile::MountainHigh,
            Tile::Forest,
            Tile::Grass,
            Tile::None,
        ]
    }
}

/// Pick the tile for a cell from its relief and already-assigned biome.
///
/// Draws from `rng` only for tiaga forest cells.
pub fn classify_tile<R: Rng>(relief: f64, biome: Biome, rng: &mut R) -> Tile {
    if relief <= WATERTABLE {
        Tile::Water
    } else if relief <= SANDLEVEL || biome == Biome::Desert {
        Tile::Sand
    } else if biome == Biome::Mountain {
        Tile::MountainHigh
    } else if matches!(biome, Biome::Forest | Biome::Tiaga) {
        if biome == Biome::Tiaga && rng.gen_range(0..TIAGA_GRASS_ODDS) == 0 {
            Tile::Grass
        } else {
            Tile::Forest
        }
    } else if relief > SANDLEVEL {
        Tile::Grass
    } else {
        Tile::None
    }
}
