//! Scaffold a toolboard project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use toolboard_data::DataStore;

use crate::config;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing toolboard...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let file_config = config::load(config_path)?;
    scaffold(&file_config, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'toolboard scrape' then 'toolboard build' to generate the page.");

    Ok(())
}

/// Write the template and an empty tool list where `file_config` points.
fn scaffold(file_config: &config::ConfigFile, yes: bool) -> Result<()> {
    let template_path = Path::new(&file_config.build.template);
    if template_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            template_path.display()
        );
    } else {
        if let Some(parent) = template_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create template directory")?;
            }
        }
        fs::write(template_path, DEFAULT_TEMPLATE)
            .with_context(|| format!("Failed to write {}", template_path.display()))?;
        tracing::info!("Created {}", template_path.display());
    }

    // Seed an empty tool list so `build` works before the first scrape
    let store = DataStore::new(file_config.data_dir());
    if !store.tools_path().exists() || yes {
        store
            .save_tools(&[])
            .context("Failed to create tools.json")?;
        tracing::info!("Created {}", store.tools_path().display());
    }

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# toolboard configuration

[data]
# Directory holding tools.json, news.json and llms.json
dir = "scraped_data"

[build]
# HTML template with placeholder markers
template = "template.html"

# Output directory for index.html
output = "dist"

[scrape]
# Maximum number of tools kept, newest first
max_tools = 50

# Rewrite news.json and llms.json with fixture data on every scrape
fixtures = true
"#;

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>AI Tools Directory</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
  <header class="bg-white border-b border-gray-200">
    <div class="max-w-7xl mx-auto px-4 py-6">
      <h1 class="text-3xl font-bold text-gray-900">AI Tools Directory</h1>
      <p class="text-gray-500 mt-1">New tools, news and the LLM leaderboard, updated daily.</p>
      <input id="searchInput" type="search" placeholder="Search tools..."
             class="mt-4 w-full md:w-96 px-4 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-indigo-500">
    </div>
  </header>

  <main class="max-w-7xl mx-auto px-4 py-8 grid grid-cols-1 lg:grid-cols-4 gap-8">
    <section class="lg:col-span-3">
      <div class="flex flex-wrap gap-2 mb-6">
        <button class="category-filter px-4 py-2 rounded-full text-sm font-medium bg-indigo-600 text-white border border-transparent shadow-sm"
                onclick="filterCategory('all')" data-category="all">
          All
        </button>
        <!-- CATEGORIES_PLACEHOLDER -->
      </div>
      <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
        <!-- TOOLS_PLACEHOLDER -->
      </div>
    </section>

    <aside class="space-y-8">
      <div class="bg-white rounded-xl shadow-md p-6">
        <h2 class="text-xl font-bold text-gray-900 mb-4">Latest News</h2>
        <div class="space-y-4">
          <!-- NEWS_PLACEHOLDER -->
        </div>
      </div>
      <div class="bg-white rounded-xl shadow-md p-6">
        <h2 class="text-xl font-bold text-gray-900 mb-4">LLM Leaderboard</h2>
        <div class="space-y-3">
          <!-- LLM_PLACEHOLDER -->
        </div>
      </div>
    </aside>
  </main>
</body>
</html>
"#;
