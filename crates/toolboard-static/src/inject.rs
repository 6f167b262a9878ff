//! Marker substitution and script injection for the page template.

use std::collections::{HashMap, HashSet};

use regex::Regex;

pub const TOOLS_MARKER: &str = "<!-- TOOLS_PLACEHOLDER -->";
pub const NEWS_MARKER: &str = "<!-- NEWS_PLACEHOLDER -->";
pub const LLM_MARKER: &str = "<!-- LLM_PLACEHOLDER -->";
pub const CATEGORIES_MARKER: &str = "<!-- CATEGORIES_PLACEHOLDER -->";

const BODY_CLOSE: &str = "</body>";

/// A set of marker replacements applied in one pass.
///
/// Only the first occurrence of each marker is replaced, and replacement text
/// is never rescanned, so content that happens to contain a marker is left
/// as-is.
#[derive(Debug, Default)]
pub struct Substitutions {
    map: HashMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` for `marker`. A later call for the same marker wins.
    pub fn insert(&mut self, marker: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.map.insert(marker.into(), content.into());
        self
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Apply the substitutions to `template`.
    ///
    /// Markers missing from the template are skipped.
    pub fn apply(&self, template: &str) -> String {
        if self.map.is_empty() {
            return template.to_string();
        }

        // Longest first so a marker that prefixes another can't shadow it
        let mut markers: Vec<&str> = self.map.keys().map(String::as_str).collect();
        markers.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let pattern = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Failed to compile marker pattern: {}", e);
                return template.to_string();
            }
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for m in re.find_iter(template) {
            let marker = m.as_str();
            if !seen.insert(marker) {
                continue;
            }
            if let Some(content) = self.map.get(marker) {
                output.push_str(&template[last..m.start()]);
                output.push_str(content);
                last = m.end();
            }
        }

        for marker in markers.iter().filter(|m| !seen.contains(*m)) {
            tracing::debug!("Marker {} not found in template", marker);
        }

        output.push_str(&template[last..]);
        output
    }
}

/// Insert the filter/search script before the first `</body>`.
///
/// Returns the document unchanged when there is no closing body tag.
pub fn inject_script(html: &str) -> String {
    match html.find(BODY_CLOSE) {
        Some(pos) => {
            let mut output = String::with_capacity(html.len() + FILTER_SCRIPT.len());
            output.push_str(&html[..pos]);
            output.push_str(FILTER_SCRIPT);
            output.push_str(&html[pos..]);
            output
        }
        None => {
            tracing::warn!("Template has no {} tag, filter script not injected", BODY_CLOSE);
            html.to_string()
        }
    }
}

/// Client-side category filter and search over tool cards.
pub const FILTER_SCRIPT: &str = r#"
<script>
  function filterCategory(category) {
    const cards = document.querySelectorAll('.tool-card');
    const buttons = document.querySelectorAll('.category-filter');

    buttons.forEach(btn => {
      const btnCat = btn.getAttribute('data-category');
      const isAll = (category === 'all' && btn.innerText.trim() === 'All');

      if (btnCat === category || isAll) {
        btn.classList.add('bg-indigo-600', 'text-white', 'border-transparent');
        btn.classList.remove('bg-white', 'text-gray-700', 'border-gray-200');
      } else {
        btn.classList.remove('bg-indigo-600', 'text-white', 'border-transparent');
        btn.classList.add('bg-white', 'text-gray-700', 'border-gray-200');
      }
    });

    cards.forEach(card => {
      const cardCat = card.getAttribute('data-category');
      card.style.display = (category === 'all' || cardCat === category) ? 'flex' : 'none';
    });
  }

  const searchInput = document.getElementById('searchInput');
  if (searchInput) {
    searchInput.addEventListener('input', function(e) {
      const term = e.target.value.toLowerCase();
      document.querySelectorAll('.tool-card').forEach(card => {
        const name = (card.getAttribute('data-name') || '').toLowerCase();
        const desc = (card.getAttribute('data-desc') || '').toLowerCase();
        card.style.display = (name.includes(term) || desc.includes(term)) ? 'flex' : 'none';
      });
    });
  }
</script>
"#;
