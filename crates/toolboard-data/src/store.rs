//! Flat-file JSON data store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::records::{LlmEntry, NewsItem, Tool};

pub const TOOLS_FILE: &str = "tools.json";
pub const NEWS_FILE: &str = "news.json";
pub const LLMS_FILE: &str = "llms.json";

/// Errors that can occur when reading or writing data files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Required data file not found: {0}")]
    MissingRequired(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// The three JSON arrays backing the site.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at `dir`. Nothing is touched until a load or save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tools_path(&self) -> PathBuf {
        self.dir.join(TOOLS_FILE)
    }

    pub fn news_path(&self) -> PathBuf {
        self.dir.join(NEWS_FILE)
    }

    pub fn llms_path(&self) -> PathBuf {
        self.dir.join(LLMS_FILE)
    }

    /// Load tools. The file must exist and parse.
    pub fn load_tools(&self) -> Result<Vec<Tool>, StoreError> {
        read_array(&self.tools_path())
    }

    /// Load tools, treating a missing file as an empty list.
    ///
    /// A file that exists but doesn't parse is still an error.
    pub fn load_tools_or_empty(&self) -> Result<Vec<Tool>, StoreError> {
        match read_array(&self.tools_path()) {
            Err(StoreError::MissingRequired(path)) => {
                tracing::debug!("{} not found, starting from an empty list", path.display());
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Load news, degrading to an empty list on any failure.
    pub fn load_news(&self) -> Vec<NewsItem> {
        read_optional(&self.news_path())
    }

    /// Load the leaderboard, degrading to an empty list on any failure.
    pub fn load_llms(&self) -> Vec<LlmEntry> {
        read_optional(&self.llms_path())
    }

    pub fn save_tools(&self, tools: &[Tool]) -> Result<(), StoreError> {
        write_array(&self.tools_path(), tools)
    }

    pub fn save_news(&self, news: &[NewsItem]) -> Result<(), StoreError> {
        write_array(&self.news_path(), news)
    }

    pub fn save_llms(&self, llms: &[LlmEntry]) -> Result<(), StoreError> {
        write_array(&self.llms_path(), llms)
    }
}

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::MissingRequired(path.to_path_buf()),
        _ => StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    read_array(path).unwrap_or_else(|e| {
        tracing::warn!("{}", fallback_message(&e));
        Vec::new()
    })
}

/// Warning logged when an optional file degrades to an empty list.
fn fallback_message(err: &StoreError) -> String {
    match err {
        StoreError::MissingRequired(path) => {
            format!("{} not found, using empty list", path.display())
        }
        other => format!("{}, using empty list", other),
    }
}

fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let write_err = |message: String| StoreError::Write {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
    }

    let json = serde_json::to_string_pretty(items).map_err(|e| write_err(e.to_string()))?;
    fs::write(path, json).map_err(|e| write_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn tool(name: &str) -> Tool {
        Tool {
            name: name.to_string(),
            description: "desc".to_string(),
            category: Some(Some("Code".to_string())),
            url: format!("https://example.com/{}", name.to_lowercase()),
            date_added: Some(Some("2024-01-01".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn missing_tools_is_fatal() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());

        let result = store.load_tools();

        assert!(matches!(result, Err(StoreError::MissingRequired(_))));
    }

    #[test]
    fn missing_tools_can_start_empty() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());

        assert!(store.load_tools_or_empty().unwrap().is_empty());
    }

    #[test]
    fn malformed_tools_is_fatal_even_when_empty_allowed() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(TOOLS_FILE), "[{not json").unwrap();
        let store = DataStore::new(temp.path());

        assert!(matches!(
            store.load_tools_or_empty(),
            Err(StoreError::Malformed { .. })
        ));
        assert!(matches!(store.load_tools(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn optional_files_degrade_to_empty() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(NEWS_FILE), "{\"not\": \"an array\"}").unwrap();
        let store = DataStore::new(temp.path());

        assert!(store.load_news().is_empty());
        assert!(store.load_llms().is_empty());
    }

    #[test]
    fn missing_optional_file_warning_is_not_required() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());
        let err = read_array::<NewsItem>(&store.news_path()).unwrap_err();

        let message = fallback_message(&err);

        assert!(message.ends_with("news.json not found, using empty list"));
        assert!(!message.contains("Required"));
        assert!(store.load_news().is_empty());
    }

    #[test]
    fn malformed_optional_file_warning_names_the_problem() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(LLMS_FILE), "[").unwrap();
        let store = DataStore::new(temp.path());
        let err = read_array::<LlmEntry>(&store.llms_path()).unwrap_err();

        assert!(fallback_message(&err).starts_with("Invalid JSON in"));
    }

    #[test]
    fn saves_and_loads_tools_in_order() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path().join("scraped_data"));
        let tools = vec![tool("Newest"), tool("Older")];

        store.save_tools(&tools).unwrap();

        assert_eq!(store.load_tools().unwrap(), tools);
    }

    #[test]
    fn writes_pretty_json() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());

        store.save_tools(&[tool("Foo")]).unwrap();

        let content = fs::read_to_string(store.tools_path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"name\": \"Foo\""));
    }
}
