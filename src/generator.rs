//! Map generator: ties the noise synthesizer and the classifier together.
//!
//! Every call to [`MapGenerator::generate`] rebuilds both noise fields and
//! the tile map from scratch. There is no partial regeneration.

use serde::{Deserialize, Serialize};

use crate::classifier::{self, TerrainMap};
use crate::error::{GeneratorError, Result};
use crate::noise_field::{generate_noise, NoiseParams};
use crate::seeds::MapSeeds;
use crate::tileset::Tile;
use crate::tilemap::Tilemap;

/// User-facing generation parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub name: String,
    pub width: usize,
    pub height: usize,
    /// `None` picks a fresh seed; the generator then records it here
    pub seed: Option<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            width: 10,
            height: 10,
            seed: Some("12345abc".to_string()),
        }
    }
}

impl GenerationParams {
    pub fn new(name: impl Into<String>, width: usize, height: usize, seed: Option<String>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            seed,
        }
    }

    /// Build params from raw form fields (name, width, height, seed).
    ///
    /// Width and height must parse as non-negative integers. A blank seed
    /// means "pick a new seed".
    pub fn from_fields(name: &str, width: &str, height: &str, seed: &str) -> Result<Self> {
        let parse_dim = |label: &str, text: &str| -> Result<usize> {
            text.trim().parse::<usize>().map_err(|_| {
                GeneratorError::InvalidParameters(format!(
                    "{} must be a whole number, got {:?}",
                    label, text
                ))
            })
        };
        let width = parse_dim("width", width)?;
        let height = parse_dim("height", height)?;
        let seed = seed.trim();

        Ok(Self {
            name: name.trim().to_string(),
            width,
            height,
            seed: if seed.is_empty() { None } else { Some(seed.to_string()) },
        })
    }

    /// Both dimensions must be at least 1 and their product must fit in `usize`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(GeneratorError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Noise settings for the two fields
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub relief: NoiseParams,
    pub biome: NoiseParams,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            relief: NoiseParams::new(10.0, 200.0),
            biome: NoiseParams::new(5.0, 66.0),
        }
    }
}

pub struct MapGenerator {
    params: GenerationParams,
    config: GeneratorConfig,
}

impl MapGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self::with_config(params, GeneratorConfig::default())
    }

    pub fn with_config(params: GenerationParams, config: GeneratorConfig) -> Self {
        Self { params, config }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Replace the stored parameters without regenerating.
    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    /// Store `params` and generate a fresh tile map from them.
    pub fn generate(&mut self, params: GenerationParams) -> Result<Tilemap<Tile>> {
        self.set_params(params);
        self.regenerate()
    }

    /// Generate a fresh tile map from the stored parameters.
    pub fn regenerate(&mut self) -> Result<Tilemap<Tile>> {
        Ok(self.generate_terrain()?.tiles)
    }

    /// Generate tiles and biomes from the stored parameters.
    pub fn generate_terrain(&mut self) -> Result<TerrainMap> {
        self.params.validate()?;
        self.config.relief.validate()?;
        self.config.biome.validate()?;

        let seeds = self.resolve_seeds();
        self.generate_with_seeds(&seeds)
    }

    /// Resolve the stored seed into stage seeds.
    ///
    /// A missing seed is drawn from entropy and written back into the stored
    /// params as its decimal master, so saved params regenerate the same map.
    pub fn resolve_seeds(&mut self) -> MapSeeds {
        let seeds = MapSeeds::from_seed_str(self.params.seed.as_deref());
        if self.params.seed.as_deref().map_or(true, |s| s.trim().is_empty()) {
            self.params.seed = Some(seeds.master.to_string());
        }
        seeds
    }

    /// Generate tiles and biomes from explicit seeds.
    pub fn generate_with_seeds(&self, seeds: &MapSeeds) -> Result<TerrainMap> {
        let GenerationParams { name, width, height, .. } = &self.params;
        let (width, height) = (*width, *height);
        log::info!(
            "Generating map '{}' ({}x{}) with seed {}",
            name,
            width,
            height,
            seeds.master
        );

        let relief = generate_noise(width, height, &self.config.relief, &mut seeds.relief_rng())?;
        let biome_noise =
            generate_noise(width, height, &self.config.biome, &mut seeds.biome_rng())?;
        let terrain = classifier::classify(&relief, &biome_noise, &mut seeds.tile_rng())?;

        log::info!("Map generated");
        Ok(terrain)
    }
}
