//! Debug script: print biome and tile views side by side with biome counts

use map_generator::ascii::{biome_char, biome_legend, calculate_biome_stats, tile_char, tile_legend};
use map_generator::biomes::Biome;
use map_generator::seeds::MapSeeds;
use map_generator::{GenerationParams, MapGenerator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let width = 64;
    let height = 32;
    let seed = 12345u64;

    let params = GenerationParams::new("Debug", width, height, Some(seed.to_string()));
    let generator = MapGenerator::new(params);
    let terrain = match generator.generate_with_seeds(&MapSeeds::from_master(seed)) {
        Ok(terrain) => terrain,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== BIOME | TILE DEBUG MAP ({}x{}) seed={} ===", width, height, seed);
    for y in 0..height {
        let biomes: String = terrain.biomes.row(y).iter().map(biome_char).collect();
        let tiles: String = terrain.tiles.row(y).iter().map(tile_char).collect();
        println!("{} | {}", biomes, tiles);
    }
    println!();
    print!("{}", biome_legend());
    print!("{}", tile_legend());
    println!();

    let counts = calculate_biome_stats(&terrain.biomes);
    let total = (width * height) as f64;
    println!("BIOME COUNTS:");
    for biome in Biome::all() {
        let count = counts.get(biome).copied().unwrap_or(0);
        println!("  {:<10} {:>5} ({:.1}%)", biome.name(), count, 100.0 * count as f64 / total);
    }
}
