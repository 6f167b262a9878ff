//! Static page builder for toolboard.
//!
//! Renders tool, news and leaderboard cards from the data store and splices
//! them into a user-supplied HTML template.

pub mod builder;
pub mod inject;
pub mod render;

pub use builder::{compose, BuildConfig, BuildError, BuildResult, PageBuilder, SiteData};
