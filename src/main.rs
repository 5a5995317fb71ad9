use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use cinerack::data::stats;
use cinerack::{load, SessionState};

/// Seed for the generated fallback dataset, fixed so repeated demo runs
/// show the same catalog.
const FALLBACK_SEED: u64 = 42;

const LISTING_LIMIT: usize = 10;

fn main() -> Result<()> {
    env_logger::init();

    // Single optional argument: the catalog file path.
    let source: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let catalog = load(source.as_deref(), FALLBACK_SEED).context("loading movie catalog")?;

    let pick_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED);
    let mut session = SessionState::new(catalog, pick_seed);

    print_overview(&session);
    print_listing(&session);

    if let Some(pick) = session.random_pick() {
        println!("\nRandom pick: {pick}");
    }

    Ok(())
}

fn print_overview(session: &SessionState) {
    let catalog = session.catalog();

    println!("Catalog: {} movies", catalog.len());
    if let Some((lo, hi)) = catalog.year_bounds {
        println!("  years   {lo}–{hi}");
    }
    if let Some((lo, hi)) = catalog.rating_bounds {
        println!("  ratings {lo:.1}–{hi:.1}");
    }

    println!("\nMovies by language:");
    for (language, count) in stats::language_distribution(catalog) {
        println!("  {language:<12} {count}");
    }

    println!("\nMovies by genre:");
    for (genre, count) in stats::genre_distribution(catalog) {
        println!("  {genre:<12} {count}");
    }

    println!("\nTop actors:");
    for (actor, count) in stats::top_actors(catalog, stats::TOP_ACTORS_DEFAULT) {
        println!("  {actor:<24} {count}");
    }
}

fn print_listing(session: &SessionState) {
    let results = session.results();
    println!(
        "\nHighest rated ({} shown of {}):",
        results.len().min(LISTING_LIMIT),
        results.len()
    );
    for rec in results.iter().take(LISTING_LIMIT) {
        println!("  {rec}");
    }
}
