//! Placeholder record synthesis.
//!
//! Nothing here fetches anything. A scrape fabricates one tool per run and
//! rewrites the fixture news and leaderboard.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::fixtures;
use crate::records::Tool;
use crate::store::{DataStore, StoreError};

/// Maximum number of tools kept in `tools.json`.
pub const DEFAULT_MAX_TOOLS: usize = 50;

const NAMES: &[&str] = &[
    "NovaFlow",
    "Synthetix",
    "BrainWave",
    "PixelMinds",
    "CopyGenius",
    "CodePilot",
];

const CATEGORIES: &[&str] = &["Productivity", "Design", "Marketing", "Video", "Writing", "Code"];

/// Fabricate a tool added on `today`.
pub fn random_tool<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Tool {
    let base = NAMES.choose(rng).copied().unwrap_or(NAMES[0]);
    let name = format!("{}{}", base, rng.gen_range(0..100));
    let category = CATEGORIES.choose(rng).copied().unwrap_or(CATEGORIES[0]);

    Tool {
        description: format!(
            "Automated discovery: This AI tool helps with {} tasks efficiently.",
            category.to_lowercase()
        ),
        category: Some(Some(category.to_string())),
        url: format!("https://example.com/{}", name.to_lowercase()),
        date_added: Some(Some(today.format("%Y-%m-%d").to_string())),
        name,
        ..Default::default()
    }
}

/// Put `tool` at the head of `tools` and drop from the tail down to `cap`.
pub fn push_bounded(tools: &mut Vec<Tool>, tool: Tool, cap: usize) {
    tools.insert(0, tool);
    tools.truncate(cap);
}

/// Outcome of a scrape run.
#[derive(Debug)]
pub struct ScrapeReport {
    /// The tool that was added
    pub added: Tool,

    /// Tools in the store after the run
    pub tools: usize,

    /// Tools dropped from the tail
    pub evicted: usize,

    /// Whether news and leaderboard were rewritten
    pub fixtures_written: bool,
}

/// Runs one scrape against a [`DataStore`].
#[derive(Debug, Clone)]
pub struct Synthesizer {
    /// Cap on the tool list
    pub max_tools: usize,

    /// Rewrite news.json and llms.json with fixture content
    pub fixtures: bool,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            max_tools: DEFAULT_MAX_TOOLS,
            fixtures: true,
        }
    }
}

impl Synthesizer {
    /// Add one tool and refresh the fixtures.
    ///
    /// Files are written tools, news, llms. A failure part way leaves the
    /// earlier files updated.
    pub fn run<R: Rng + ?Sized>(
        &self,
        store: &DataStore,
        rng: &mut R,
        today: NaiveDate,
    ) -> Result<ScrapeReport, StoreError> {
        let cap = self.max_tools.max(1);
        if cap != self.max_tools {
            tracing::warn!("max_tools must be at least 1, using {}", cap);
        }

        let mut tools = store.load_tools_or_empty()?;
        let before = tools.len();

        let added = random_tool(rng, today);
        tracing::info!("Found new tool: {}", added.name);

        push_bounded(&mut tools, added.clone(), cap);
        let evicted = (before + 1).saturating_sub(tools.len());

        store.save_tools(&tools)?;
        tracing::info!("Updated {} ({} tools)", store.tools_path().display(), tools.len());

        if self.fixtures {
            let date = today.format("%Y-%m-%d").to_string();
            store.save_news(&fixtures::news(&date))?;
            store.save_llms(&fixtures::leaderboard())?;
            tracing::info!("Refreshed news and leaderboard fixtures");
        }

        Ok(ScrapeReport {
            added,
            tools: tools.len(),
            evicted,
            fixtures_written: self.fixtures,
        })
    }
}
