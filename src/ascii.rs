//! ASCII rendering and export for generated maps
//!
//! Maps are printed row by row, top to bottom, one character per cell.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::biomes::Biome;
use crate::classifier::TerrainMap;
use crate::generator::GenerationParams;
use crate::tileset::Tile;
use crate::tilemap::Tilemap;

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsciiMode {
    Tiles,
    Biomes,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Tiles => "Tile",
            AsciiMode::Biomes => "Biome",
        }
    }
}

pub fn tile_char(tile: &Tile) -> char {
    match tile {
        Tile::Water => '~',
        Tile::Sand => '.',
        Tile::MountainHigh => '^',
        Tile::Forest => 'T',
        Tile::Grass => '"',
        Tile::None => ' ',
    }
}

pub fn biome_char(biome: &Biome) -> char {
    match biome {
        Biome::Aquatic => '~',
        Biome::Desert => 'd',
        Biome::Swamp => 'S',
        Biome::Forest => 'F',
        Biome::Grassland => 'g',
        Biome::Tiaga => 't',
        Biome::Mountain => 'M',
        Biome::Unknown => '?',
    }
}

/// Render any map with a per-cell character function.
pub fn render_with<T: Clone>(map: &Tilemap<T>, to_char: impl Fn(&T) -> char) -> String {
    let mut result = String::with_capacity((map.width + 1) * map.height);
    for y in 0..map.height {
        result.extend(map.row(y).iter().map(&to_char));
        result.push('\n');
    }
    result
}

pub fn render_ascii_map(terrain: &TerrainMap, mode: AsciiMode) -> String {
    match mode {
        AsciiMode::Tiles => render_with(&terrain.tiles, tile_char),
        AsciiMode::Biomes => render_with(&terrain.biomes, biome_char),
    }
}

pub fn tile_legend() -> String {
    let mut legend = String::from("=== TILE LEGEND ===\n");
    for tile in Tile::all() {
        legend.push_str(&format!("  {} {}\n", tile_char(tile), tile.name()));
    }
    legend
}

pub fn biome_legend() -> String {
    let mut legend = String::from("=== BIOME LEGEND ===\n");
    for biome in Biome::all() {
        legend.push_str(&format!("  {} {}\n", biome_char(biome), biome.name()));
    }
    legend
}

pub fn calculate_tile_stats(tiles: &Tilemap<Tile>) -> HashMap<Tile, usize> {
    let mut stats = HashMap::new();
    for (_, _, &tile) in tiles.iter() {
        *stats.entry(tile).or_insert(0) += 1;
    }
    stats
}

pub fn calculate_biome_stats(biomes: &Tilemap<Biome>) -> HashMap<Biome, usize> {
    let mut stats = HashMap::new();
    for (_, _, &biome) in biomes.iter() {
        *stats.entry(biome).or_insert(0) += 1;
    }
    stats
}

/// Write a text report: header, both map views, legends and statistics.
pub fn export_ascii_report(
    terrain: &TerrainMap,
    params: &GenerationParams,
    seed: u64,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_report(&mut file, terrain, params, seed)
}

pub fn write_report<W: Write>(
    out: &mut W,
    terrain: &TerrainMap,
    params: &GenerationParams,
    seed: u64,
) -> io::Result<()> {
    let total = terrain.width() * terrain.height();

    writeln!(out, "=== MAP GENERATOR REPORT ===")?;
    writeln!(out, "Name: {}", params.name)?;
    match &params.seed {
        Some(text) => writeln!(out, "Seed: {} ({})", text, seed)?,
        None => writeln!(out, "Seed: {} (random)", seed)?,
    }
    writeln!(out, "Size: {}x{}", terrain.width(), terrain.height())?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;

    for mode in [AsciiMode::Tiles, AsciiMode::Biomes] {
        writeln!(out, "=== MAP ({} View) ===", mode.name())?;
        write!(out, "{}", render_ascii_map(terrain, mode))?;
        writeln!(out)?;
    }

    write!(out, "{}", tile_legend())?;
    write!(out, "{}", biome_legend())?;
    writeln!(out)?;

    writeln!(out, "=== STATISTICS ===")?;
    writeln!(out, "Total tiles: {}", total)?;
    let tile_stats = calculate_tile_stats(&terrain.tiles);
    for tile in Tile::all() {
        let count = tile_stats.get(tile).copied().unwrap_or(0);
        let share = 100.0 * count as f64 / total as f64;
        writeln!(out, "  {:<14} {:>6} ({:.1}%)", tile.name(), count, share)?;
    }
    let biome_stats = calculate_biome_stats(&terrain.biomes);
    for biome in Biome::all() {
        let count = biome_stats.get(biome).copied().unwrap_or(0);
        let share = 100.0 * count as f64 / total as f64;
        writeln!(out, "  {:<14} {:>6} ({:.1}%)", biome.name(), count, share)?;
    }

    Ok(())
}
