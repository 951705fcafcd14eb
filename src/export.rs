//! Map snapshots for persistence.
//!
//! A snapshot pairs the generation parameters with the finished tile grid,
//! keyed `generator_data` and `tile_map`. The grid is stored as rows,
//! `tile_map[y][x]`, so the outer list has one entry per map row.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generator::GenerationParams;
use crate::tileset::Tile;
use crate::tilemap::Tilemap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub generator_data: GenerationParams,
    pub tile_map: Vec<Vec<Tile>>,
}

impl MapSnapshot {
    pub fn new(params: &GenerationParams, tiles: &Tilemap<Tile>) -> Self {
        Self {
            generator_data: params.clone(),
            tile_map: tiles.to_rows(),
        }
    }

    /// Rebuild the tile grid. Fails on an empty or ragged `tile_map`.
    pub fn tiles(&self) -> Result<Tilemap<Tile>> {
        Tilemap::from_rows(&self.tile_map)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;
    use crate::generator::MapGenerator;

    #[test]
    fn test_snapshot_keys() {
        let params = GenerationParams::new("Keys", 2, 1, None);
        let tiles = Tilemap::from_vec(2, 1, vec![Tile::Water, Tile::MountainHigh]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&MapSnapshot::new(&params, &tiles).to_json().unwrap()).unwrap();

        assert_eq!(value["generator_data"]["name"], "Keys");
        assert_eq!(value["generator_data"]["seed"], serde_json::Value::Null);
        assert_eq!(value["tile_map"][0][0], "water");
        assert_eq!(value["tile_map"][0][1], "mountainhigh");
    }

    #[test]
    fn test_tile_map_outer_list_is_rows() {
        let params = GenerationParams::new("Tall", 2, 3, None);
        let mut tiles = Tilemap::new_with(2, 3, Tile::Grass);
        tiles.set(1, 2, Tile::Snow);
        let snapshot = MapSnapshot::new(&params, &tiles);

        assert_eq!(snapshot.tile_map.len(), 3);
        assert!(snapshot.tile_map.iter().all(|row| row.len() == 2));
        assert_eq!(snapshot.tile_map[2][1], Tile::Snow);
    }

    #[test]
    fn test_unseeded_snapshot_replays() {
        let mut generator = MapGenerator::new(GenerationParams::default());
        let tiles = generator.generate(GenerationParams::new("Fresh", 13, 9, None)).unwrap();
        let json = MapSnapshot::new(generator.params(), &tiles).to_json().unwrap();

        let restored = MapSnapshot::from_json(&json).unwrap();
        assert!(restored.generator_data.seed.is_some());
        let mut replay = MapGenerator::new(GenerationParams::default());
        assert_eq!(replay.generate(restored.generator_data.clone()).unwrap(), restored.tiles().unwrap());
    }

    #[test]
    fn test_generated_map_survives_snapshot() {
        let params = GenerationParams::new("Snap", 11, 7, Some("snap".to_string()));
        let mut generator = MapGenerator::new(GenerationParams::default());
        let tiles = generator.generate(params.clone()).unwrap();

        let json = MapSnapshot::new(&params, &tiles).to_json().unwrap();
        let restored = MapSnapshot::from_json(&json).unwrap();
        assert_eq!(restored.generator_data, params);
        assert_eq!(restored.tiles().unwrap(), tiles);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("map_snapshot_{}.json", std::process::id()));
        let params = GenerationParams::default();
        let tiles = Tilemap::new_with(3, 2, Tile::Grass);
        let snapshot = MapSnapshot::new(&params, &tiles);

        snapshot.save(&path).unwrap();
        let loaded = MapSnapshot::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_ragged_snapshot_rejected() {
        let snapshot = MapSnapshot {
            generator_data: GenerationParams::default(),
            tile_map: vec![vec![Tile::Sand, Tile::Sand], vec![Tile::Sand]],
        };
        assert!(matches!(snapshot.tiles(), Err(GeneratorError::InvalidDimensions { .. })));
        assert!(matches!(MapSnapshot::from_json("{"), Err(GeneratorError::Json(_))));
    }
}
