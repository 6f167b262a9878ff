//! Static page build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use toolboard_static::{BuildConfig, PageBuilder};

use crate::config;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = config::load(config_path)?;

    let config = BuildConfig {
        data_dir: file_config.data_dir(),
        template_path: PathBuf::from(&file_config.build.template),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
    };

    let builder = PageBuilder::new(config);
    let result = match seed {
        Some(seed) => builder.build_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => builder.build(),
    }
    .context("Error building site")?;

    tracing::info!(
        "Rendered {} tools, {} news items, {} leaderboard entries and {} categories in {}ms",
        result.tools,
        result.news,
        result.llms,
        result.categories,
        result.duration_ms
    );

    tracing::info!("Successfully wrote {}", result.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::write_config;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATE: &str = "<html><body><!-- TOOLS_PLACEHOLDER --></body></html>";

    fn project(tools_json: Option<&str>) -> (tempfile::TempDir, PathBuf) {
        let temp = tempdir().unwrap();
        let config = write_config(temp.path(), "");
        fs::write(temp.path().join("template.html"), TEMPLATE).unwrap();
        if let Some(json) = tools_json {
            let data = temp.path().join("scraped_data");
            fs::create_dir_all(&data).unwrap();
            fs::write(data.join("tools.json"), json).unwrap();
        }
        (temp, config)
    }

    #[test]
    fn writes_to_configured_output() {
        let (temp, config) = project(Some(r#"[{"name":"Foo","url":"http://x"}]"#));

        run(&config, None, Some(1)).unwrap();

        let html = fs::read_to_string(temp.path().join("dist").join("index.html")).unwrap();
        assert!(html.contains("Foo"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn output_flag_overrides_config() {
        let (temp, config) = project(Some("[]"));
        let custom = temp.path().join("public");

        run(&config, Some(custom.clone()), None).unwrap();

        assert!(custom.join("index.html").exists());
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn seeded_builds_match() {
        let (temp, config) = project(Some(r#"[{"name":"A"},{"name":"B"}]"#));
        let page = temp.path().join("dist").join("index.html");

        run(&config, None, Some(3)).unwrap();
        let first = fs::read_to_string(&page).unwrap();
        run(&config, None, Some(3)).unwrap();
        let second = fs::read_to_string(&page).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_tools_fails() {
        let (temp, config) = project(None);

        let result = run(&config, None, None);

        assert!(result.is_err());
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn missing_template_fails() {
        let (temp, config) = project(Some("[]"));
        fs::remove_file(temp.path().join("template.html")).unwrap();

        assert!(run(&config, None, None).is_err());
    }
}
