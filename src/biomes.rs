//! Biome classification
//!
//! Land cells pick a biome from the biome noise field through a cascade of
//! upper bounds. Water cells are normally `Aquatic`, but a water cell that
//! directly follows swamp in the sweep keeps reporting the swamp it sits in.

use serde::{Deserialize, Serialize};

use crate::tileset::WATERTABLE;

// Upper bounds on biome noise, checked in this order (first match wins).
pub const BIOME_DESERT_LEVEL: f64 = 85.0;
pub const BIOME_SWAMP_LEVEL: f64 = 100.0;
pub const BIOME_FOREST_LEVEL: f64 = 125.0;
pub const BIOME_GRASSLAND_LEVEL: f64 = 150.0;
pub const BIOME_TIAGA_LEVEL: f64 = 175.0;
pub const BIOME_MOUNTAIN_LEVEL: f64 = 255.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Aquatic,
    Desert,
    Swamp,
    Forest,
    Grassland,
    Tiaga,
    Mountain,
    Unknown,
}

impl Biome {
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Aquatic => "Aquatic",
            Biome::Desert => "Desert",
            Biome::Swamp => "Swamp",
            Biome::Forest => "Forest",
            Biome::Grassland => "Grassland",
            Biome::Tiaga => "Tiaga",
            Biome::Mountain => "Mountain",
            Biome::Unknown => "Unknown",
        }
    }

    pub fn all() -> &'static [Biome] {
        &[
            Biome::Aquatic,
            Biome::Desert,
            Biome::Swamp,
            Biome::Forest,
            Biome::Grassland,
            Biome::Tiaga,
            Biome::Mountain,
            Biome::Unknown,
        ]
    }
}

/// Land biome for a biome noise value, ignoring relief.
pub fn land_biome(biome_noise: f64) -> Biome {
    if biome_noise <= BIOME_DESERT_LEVEL {
        Biome::Desert
    } else if biome_noise <= BIOME_SWAMP_LEVEL {
        Biome::Swamp
    } else if biome_noise <= BIOME_FOREST_LEVEL {
        Biome::Forest
    } else if biome_noise <= BIOME_GRASSLAND_LEVEL {
        Biome::Grassland
    } else if biome_noise <= BIOME_TIAGA_LEVEL {
        Biome::Tiaga
    } else if biome_noise <= BIOME_MOUNTAIN_LEVEL {
        Biome::Mountain
    } else {
        Biome::Unknown
    }
}

/// State carried from one cell to the next during the classification sweep.
///
/// After a swamp cell, the next water cell inherits `prev_biome` instead of
/// becoming `Aquatic`; that water cell (or any non-swamp land cell) re-opens
/// `allow_aquatic`. The state spans the whole sweep, not a region, so the
/// result depends on traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AquaticCarry {
    pub allow_aquatic: bool,
    pub prev_biome: Option<Biome>,
}

impl Default for AquaticCarry {
    fn default() -> Self {
        Self {
            allow_aquatic: true,
            prev_biome: None,
        }
    }
}

impl AquaticCarry {
    /// Classify one cell and return the state for the next one.
    pub fn step(self, relief: f64, biome_noise: f64) -> (Biome, AquaticCarry) {
        if relief <= WATERTABLE {
            if self.allow_aquatic {
                return (Biome::Aquatic, self);
            }
            // prev_biome is always set once aquatic has been suppressed
            let biome = self.prev_biome.unwrap_or(Biome::Aquatic);
            return (biome, AquaticCarry { allow_aquatic: true, ..self });
        }

        let biome = land_biome(biome_noise);
        let next = match biome {
            Biome::Swamp => AquaticCarry {
                allow_aquatic: false,
                prev_biome: Some(Biome::Swamp),
            },
            _ => AquaticCarry { allow_aquatic: true, ..self },
        };
        (biome, next)
    }
}
