//! EstateSearch - Property Search CLI
//!
//! Filters home listings against a structured query and suggests
//! similar areas when a location search comes back empty.

use anyhow::Result;
use clap::Parser;
use estatesearch::config::Config;
use estatesearch::listing::{load_homes, HomeQuery};
use estatesearch::search::{filter_homes, similar_areas};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the listings JSON file (defaults to the configured data path)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Free-text location query
    #[arg(short, long)]
    location: Option<String>,

    /// Minimum number of bedrooms
    #[arg(long)]
    beds: Option<u32>,

    /// Minimum number of bathrooms
    #[arg(long)]
    baths: Option<u32>,

    /// Required amenity (repeatable)
    #[arg(short, long = "amenity")]
    amenities: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🏠 EstateSearch v{} starting...", env!("CARGO_PKG_VERSION"));

    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data_path));

    let homes = load_homes(&data_path)?;
    info!("📂 Loaded {} listings from {}", homes.len(), data_path.display());

    let query = HomeQuery {
        location: args.location,
        beds: args.beds,
        baths: args.baths,
        amenities: args.amenities,
    };

    let results = filter_homes(&homes, &query);
    if !results.is_empty() {
        info!("✅ {} properties found", results.len());
        for home in &results {
            println!(
                "#{:<4} {:<40} {:<20} {} bed / {} bath  {}",
                home.id, home.title, home.location, home.beds, home.baths, home.price
            );
        }
        return Ok(());
    }

    // Zero-match fallback: suggest similar areas for a location query
    if let Some(location) = &query.location {
        let suggestions = similar_areas(
            location,
            &homes,
            config.min_similarity,
            config.max_suggestions,
        );
        if suggestions.is_empty() {
            info!("❌ No properties found for '{}'", location);
        } else {
            info!(
                "💡 No direct matches for '{}' - you might like these nearby areas:",
                location
            );
            for m in &suggestions {
                println!(
                    "{:.2}  #{:<4} {:<40} {}",
                    m.score, m.home.id, m.home.title, m.home.location
                );
            }
        }
    } else {
        info!("❌ No properties matched the query");
    }

    Ok(())
}
