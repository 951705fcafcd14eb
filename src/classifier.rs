//! Terrain classification sweep
//!
//! Walks the relief and biome fields column by column (all rows of column 0,
//! then column 1, ...) and assigns a biome and a tile to every cell. The
//! `AquaticCarry` state is folded through the sweep in that order.

use rand::Rng;

use crate::biomes::{AquaticCarry, Biome};
use crate::error::{GeneratorError, Result};
use crate::noise_field::NoiseField;
use crate::tileset::{classify_tile, Tile};
use crate::tilemap::Tilemap;

/// Classified map: one biome and one tile per cell.
#[derive(Clone, Debug)]
pub struct TerrainMap {
    pub tiles: Tilemap<Tile>,
    pub biomes: Tilemap<Biome>,
}

impl TerrainMap {
    pub fn width(&self) -> usize {
        self.tiles.width
    }

    pub fn height(&self) -> usize {
        self.tiles.height
    }
}

/// Classify every cell of two equally sized fields.
///
/// `rng` supplies the tiaga downgrade draws, consumed in sweep order.
pub fn classify<R: Rng>(
    relief: &NoiseField,
    biome_noise: &NoiseField,
    rng: &mut R,
) -> Result<TerrainMap> {
    if relief.width != biome_noise.width || relief.height != biome_noise.height {
        return Err(GeneratorError::InvalidParameters(format!(
            "relief field is {}x{} but biome field is {}x{}",
            relief.width, relief.height, biome_noise.width, biome_noise.height
        )));
    }
    if relief.width == 0 || relief.height == 0 {
        return Err(GeneratorError::InvalidDimensions {
            width: relief.width,
            height: relief.height,
        });
    }

    let mut tiles = Tilemap::new_with(relief.width, relief.height, Tile::None);
    let mut biomes = Tilemap::new_with(relief.width, relief.height, Biome::Unknown);

    relief
        .column_major_coords()
        .fold(AquaticCarry::default(), |carry, (x, y)| {
            let r = *relief.get(x, y);
            let (biome, next) = carry.step(r, *biome_noise.get(x, y));
            biomes.set(x, y, biome);
            tiles.set(x, y, classify_tile(r, biome, rng));
            next
        });

    Ok(TerrainMap { tiles, biomes })
}
