//! Record types stored in the JSON data files.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Category shown for tools that don't carry one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// An AI tool listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Raw category; use [`Tool::category`] for display.
    ///
    /// The outer `None` means the key is absent; `Some(None)` is an explicit
    /// `null`, written back as-is.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,

    #[serde(default)]
    pub url: String,

    /// Date the tool was added, `YYYY-MM-DD`. Absent and `null` are kept
    /// apart the same way as `category`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<Option<String>>,

    /// Fields this crate doesn't know about, kept so rewrites don't drop them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tool {
    /// Category for display and filtering.
    ///
    /// Missing and empty categories both fall back to [`UNCATEGORIZED`].
    pub fn category(&self) -> &str {
        match self.category.as_ref().and_then(|c| c.as_deref()) {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    pub fn date_added(&self) -> Option<&str> {
        self.date_added.as_ref().and_then(|d| d.as_deref())
    }

    /// Upper-cased first character of the name, used as the card avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A news headline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A leaderboard entry. Rank is the position in the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LlmEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub performance: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
