//! Offline probe for the hero query layer.
//!
//! Loads a recorded snapshot, resolves every attribute of every hero in it,
//! and prints the profiles as RON on stdout. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Bundled lane fight snapshot
//! cargo run -p hero-probe
//!
//! # Custom snapshot with a shorter invisibility window
//! HERO_SNAPSHOT=./fight.ron HERO_INVIS_TTL_MS=50 RUST_LOG=debug cargo run -p hero-probe
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use hero_content::{ContentFactory, SnapshotLoader};
use hero_core::{HeroSnapshot, HeroView};
use hero_runtime::{HeroService, RuntimeConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    setup_logging();

    let config = RuntimeConfig::from_env();
    let heroes = load_heroes()?;
    tracing::info!("Probing {} heroes", heroes.len());

    let mut service = HeroService::builder().config(config).build()?;
    service.begin_tick(heroes.iter().map(|hero| hero.handle()));

    let mut profiles = Vec::with_capacity(heroes.len());
    for hero in &heroes {
        let profile = service.profile(hero)?;
        tracing::debug!(actor = %hero.handle(), class = %hero.class(), "resolved");
        profiles.push(profile);
    }

    let output = ron::ser::to_string_pretty(&profiles, ron::ser::PrettyConfig::default())
        .context("Failed to serialize hero profiles")?;
    println!("{}", output);

    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads `HERO_SNAPSHOT`, falling back to the bundled lane fight.
fn load_heroes() -> Result<Vec<HeroSnapshot>> {
    match std::env::var("HERO_SNAPSHOT") {
        Ok(path) => {
            let path = PathBuf::from(path);
            SnapshotLoader::load(&path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))
        }
        Err(_) => ContentFactory::bundled().load_snapshot("lane_fight"),
    }
}
