use clap::Parser;

use map_generator::ascii::{self, AsciiMode};
use map_generator::export::MapSnapshot;
use map_generator::noise_field::NoiseParams;
use map_generator::{GenerationParams, GeneratorConfig, MapGenerator};

#[derive(Parser, Debug)]
#[command(name = "map_generator")]
#[command(about = "Generate procedural tile maps from fractal value noise")]
struct Args {
    /// Map name stored with the generation parameters
    #[arg(short, long, default_value = "Default")]
    name: String,

    /// Width of the map in tiles
    #[arg(short = 'W', long, default_value = "10")]
    width: usize,

    /// Height of the map in tiles
    #[arg(short = 'H', long, default_value = "10")]
    height: usize,

    /// Seed text (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<String>,

    /// Relief noise frequency
    #[arg(long, default_value = "10.0")]
    relief_frequency: f64,

    /// Relief noise starting octave size
    #[arg(long, default_value = "200.0")]
    relief_octaves: f64,

    /// Biome noise frequency
    #[arg(long, default_value = "5.0")]
    biome_frequency: f64,

    /// Biome noise starting octave size
    #[arg(long, default_value = "66.0")]
    biome_octaves: f64,

    /// Print the biome view instead of the tile view
    #[arg(long)]
    biomes: bool,

    /// Save a JSON snapshot (generator_data + tile_map) to this path
    #[arg(long)]
    json: Option<String>,

    /// Write an ASCII report with both views and statistics to this path
    #[arg(long)]
    ascii: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let params = GenerationParams::new(args.name, args.width, args.height, args.seed);
    let config = GeneratorConfig {
        relief: NoiseParams::new(args.relief_frequency, args.relief_octaves),
        biome: NoiseParams::new(args.biome_frequency, args.biome_octaves),
    };

    if let Err(e) = params.validate().and(config.relief.validate()).and(config.biome.validate()) {
        log::error!("{}", e);
        std::process::exit(2);
    }

    let mut generator = MapGenerator::with_config(params, config);
    let seeds = generator.resolve_seeds();

    let terrain = match generator.generate_with_seeds(&seeds) {
        Ok(terrain) => terrain,
        Err(e) => {
            log::error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let mode = if args.biomes { AsciiMode::Biomes } else { AsciiMode::Tiles };
    print!("{}", ascii::render_ascii_map(&terrain, mode));

    if let Some(ref path) = args.json {
        let snapshot = MapSnapshot::new(generator.params(), &terrain.tiles);
        match snapshot.save(path) {
            Ok(()) => log::info!("Saved snapshot to: {}", path),
            Err(e) => log::error!("Failed to save snapshot: {}", e),
        }
    }

    if let Some(ref path) = args.ascii {
        match ascii::export_ascii_report(&terrain, generator.params(), seeds.master, path) {
            Ok(()) => log::info!("Exported ASCII report to: {}", path),
            Err(e) => log::error!("Failed to export ASCII report: {}", e),
        }
    }
}
