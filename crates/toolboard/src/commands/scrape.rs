//! Placeholder scrape command.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use toolboard_data::{DataStore, Synthesizer};

use crate::config;

/// Run the scrape command.
pub fn run(config_path: &Path, seed: Option<u64>) -> Result<()> {
    let file_config = config::load(config_path)?;

    let store = DataStore::new(file_config.data_dir());
    let synth = Synthesizer {
        max_tools: file_config.scrape.max_tools,
        fixtures: file_config.scrape.fixtures,
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = chrono::Utc::now().date_naive();

    let report = synth
        .run(&store, &mut rng, today)
        .context("Scrape failed")?;

    if report.evicted > 0 {
        tracing::info!("Dropped {} oldest tool(s)", report.evicted);
    }
    tracing::info!("{} tools in {}", report.tools, store.dir().display());

    Ok(())
}
