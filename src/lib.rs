//! Procedural tile map generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod classifier;
pub mod error;
pub mod export;
pub mod generator;
pub mod noise_field;
pub mod seeds;
pub mod tilemap;
pub mod tileset;

pub use biomes::Biome;
pub use classifier::TerrainMap;
pub use error::GeneratorError;
pub use generator::{GenerationParams, GeneratorConfig, MapGenerator};
pub use tileset::Tile;
pub use tilemap::Tilemap;
