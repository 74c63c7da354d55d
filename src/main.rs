//! Seedwalk CLI - random-walk terrain generator.
//!
//! Configures a generator, runs it a number of times and prints the grid
//! after each run.

use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use seedwalk::walk::MAX_TILES;
use seedwalk::{TerrainGenerator, Tile, WalkConfig};

/// Random-walk seed point terrain generator.
#[derive(Parser)]
#[command(name = "seedwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate terrain and print the grid after every run.
    Generate {
        /// Horizontal grid size in tiles.
        #[arg(long, default_value = "20")]
        width: usize,

        /// Vertical grid size in tiles.
        #[arg(long, default_value = "20")]
        height: usize,

        /// Number of land creation points.
        #[arg(short, long, default_value = "2")]
        points: usize,

        /// Moves per creation point in each run.
        #[arg(short, long, default_value = "30")]
        iterations: usize,

        /// Number of runs to perform.
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Clear the grid between runs, keeping the creation points.
        #[arg(long)]
        wipe_between_runs: bool,
    },

    /// Display information about a grid configuration.
    Info {
        /// Horizontal grid size in tiles.
        #[arg(long, default_value = "20")]
        width: usize,

        /// Vertical grid size in tiles.
        #[arg(long, default_value = "20")]
        height: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            width,
            height,
            points,
            iterations,
            runs,
            seed,
            wipe_between_runs,
        } => {
            let seed = seed.unwrap_or_else(clock_seed);
            let config = WalkConfig {
                width,
                height,
                creation_points: points,
                iterations_per_run: iterations,
                seed,
            };
            run_generate(&config, runs, wipe_between_runs);
        }
        Commands::Info { width, height } => {
            run_info(width, height);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run_generate(config: &WalkConfig, runs: usize, wipe_between_runs: bool) {
    if runs == 0 {
        eprintln!("Error: Runs must be at least 1");
        std::process::exit(1);
    }

    println!("Seedwalk - Random-Walk Terrain Generator");
    println!("========================================");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Creation points: {}", config.creation_points);
    println!("Moves per run: {}", config.iterations_per_run);
    println!("Seed: {}", config.seed);

    let start = Instant::now();

    let mut generator = TerrainGenerator::from_config(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for run in 0..runs {
        if wipe_between_runs && run > 0 {
            generator.reinitialize();
        }
        generator.generate().unwrap_or_else(|e| {
            eprintln!("Error during generation: {}", e);
            std::process::exit(1);
        });

        let grid = generator.snapshot();
        println!(
            "\n[{}/{}] claimed {} of {} tiles",
            run + 1,
            runs,
            grid.claimed_count(),
            grid.tile_count()
        );
        print!("{}", grid);
    }

    let grid = generator.snapshot();
    let land = grid.claimed_count() as f64 / grid.tile_count() as f64 * 100.0;
    println!();
    println!(
        "Tiles: {} origin, {} active, {} empty ({:.1}% land)",
        grid.count(Tile::Origin),
        grid.count(Tile::Active),
        grid.count(Tile::Empty),
        land
    );
    println!("Completed in {:.2?}", start.elapsed());
}

fn run_info(width: usize, height: usize) {
    let tiles = (width as u64).saturating_mul(height as u64);
    let bytes_grid = tiles.saturating_mul(std::mem::size_of::<Tile>() as u64);
    let bytes_text = (height as u64).saturating_mul((width as u64).saturating_mul(2) + 1);

    println!("Seedwalk - Grid Configuration Info");
    println!("==================================");
    println!();
    println!("Grid: {}x{}", width, height);
    println!("Tiles: {:>12}", tiles);
    println!();
    println!("Memory usage (in-memory):");
    println!("  Tile buffer:  {:>12} bytes ({:.2} KB)", bytes_grid, bytes_grid as f64 / 1024.0);
    println!("  Text render:  {:>12} bytes ({:.2} KB)", bytes_text, bytes_text as f64 / 1024.0);

    if width == 0 || height == 0 || tiles > MAX_TILES as u64 {
        println!();
        println!(
            "Warning: both dimensions must be at least 1 and the grid at most {} tiles",
            MAX_TILES
        );
    }
}
