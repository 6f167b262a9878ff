//! Static page builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rand::Rng;

use toolboard_data::{DataStore, LlmEntry, NewsItem, StoreError, Tool};

use crate::inject::{
    inject_script, Substitutions, CATEGORIES_MARKER, LLM_MARKER, NEWS_MARKER, TOOLS_MARKER,
};
use crate::render::{categories, Renderer};

/// Name of the generated page inside the output directory.
pub const OUTPUT_FILE: &str = "index.html";

/// Configuration for building the page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding tools.json, news.json and llms.json
    pub data_dir: PathBuf,

    /// HTML template with placeholder markers
    pub template_path: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("scraped_data"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of tool cards
    pub tools: usize,

    /// Number of news items
    pub news: usize,

    /// Number of leaderboard entries
    pub llms: usize,

    /// Number of category filters
    pub categories: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Path of the written page
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read template: {0}")]
    ReadError(String),

    #[error(transparent)]
    DataError(#[from] StoreError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Everything the page is rendered from.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub tools: Vec<Tool>,
    pub news: Vec<NewsItem>,
    pub llms: Vec<LlmEntry>,
}

/// Render `data` into `template`.
///
/// No I/O. The only nondeterminism is the like counts drawn from `rng`.
pub fn compose<R: Rng + ?Sized>(
    renderer: &Renderer,
    data: &SiteData,
    template: &str,
    rng: &mut R,
) -> Result<String, BuildError> {
    let render_err = |e: minijinja::Error| BuildError::TemplateError(e.to_string());

    let tools_html = renderer.render_tools(&data.tools, rng).map_err(render_err)?;
    let news_html = renderer.render_news(&data.news).map_err(render_err)?;
    let llm_html = renderer.render_leaderboard(&data.llms).map_err(render_err)?;
    let categories_html = renderer
        .render_categories(&categories(&data.tools))
        .map_err(render_err)?;

    let mut subs = Substitutions::new();
    subs.insert(TOOLS_MARKER, tools_html)
        .insert(NEWS_MARKER, news_html)
        .insert(LLM_MARKER, llm_html)
        .insert(CATEGORIES_MARKER, categories_html);

    Ok(inject_script(&subs.apply(template)))
}

/// Builds `index.html` from the data store and template.
pub struct PageBuilder {
    config: BuildConfig,
    store: DataStore,
    renderer: Renderer,
}

impl PageBuilder {
    pub fn new(config: BuildConfig) -> Self {
        let store = DataStore::new(&config.data_dir);

        Self {
            config,
            store,
            renderer: Renderer::new(),
        }
    }

    /// Build the page with the thread-local RNG.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Build the page drawing like counts from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let data = self.load_data()?;

        let template = fs::read_to_string(&self.config.template_path).map_err(|e| {
            BuildError::ReadError(format!("{}: {}", self.config.template_path.display(), e))
        })?;

        let html = compose(&self.renderer, &data, &template, rng)?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let output_path = self.config.output_dir.join(OUTPUT_FILE);
        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(BuildResult {
            tools: data.tools.len(),
            news: data.news.len(),
            llms: data.llms.len(),
            categories: categories(&data.tools).len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_path,
        })
    }

    /// Tools are required; news and leaderboard fall back to empty.
    fn load_data(&self) -> Result<SiteData, BuildError> {
        let tools = self.store.load_tools()?;
        let news = self.store.load_news();
        let llms = self.store.load_llms();

        tracing::debug!(
            "Loaded {} tools, {} news items, {} leaderboard entries from {}",
            tools.len(),
            news.len(),
            llms.len(),
            self.store.dir().display()
        );

        Ok(SiteData { tools, news, llms })
    }
}
