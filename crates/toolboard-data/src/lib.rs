//! Data store and record synthesis for toolboard.
//!
//! Records live in three flat JSON arrays inside a data directory. The
//! synthesizer fabricates placeholder tools and fixture news/leaderboard data.

pub mod fixtures;
pub mod records;
pub mod store;
pub mod synth;

pub use records::{LlmEntry, NewsItem, Tool, UNCATEGORIZED};
pub use store::{DataStore, StoreError};
pub use synth::{push_bounded, random_tool, ScrapeReport, Synthesizer, DEFAULT_MAX_TOOLS};
