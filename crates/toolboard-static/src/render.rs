//! Card rendering for tools, news and the leaderboard.

use std::collections::BTreeSet;
use std::ops::Range;

use minijinja::{context, AutoEscape, Environment};
use rand::Rng;
use serde::Serialize;

use toolboard_data::{LlmEntry, NewsItem, Tool};

/// Range the displayed like count is drawn from.
pub const LIKES: Range<u32> = 50..550;

pub const NO_NEWS: &str = r#"<p class="text-gray-500 text-sm italic">No news available today.</p>"#;
pub const NO_LEADERBOARD: &str =
    r#"<p class="text-gray-500 text-sm italic">Leaderboard updating...</p>"#;

#[derive(Debug, Clone, Serialize)]
struct ToolCard<'a> {
    name: &'a str,
    category: &'a str,
    description: &'a str,
    url: &'a str,
    initial: String,
    likes: u32,
}

#[derive(Debug, Clone, Serialize)]
struct RankedEntry<'a> {
    rank: String,
    model: &'a LlmEntry,
}

/// Distinct display categories across `tools`, sorted ascending.
pub fn categories(tools: &[Tool]) -> Vec<String> {
    tools
        .iter()
        .map(|t| t.category())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Rank label for a leaderboard position.
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("#{}", n + 1),
    }
}

/// Renders card fragments with minijinja.
///
/// Values are embedded verbatim; the data files are trusted.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template("tools", TOOLS_TEMPLATE)
            .expect("Failed to add tools template");
        env.add_template("news", NEWS_TEMPLATE)
            .expect("Failed to add news template");
        env.add_template("leaderboard", LEADERBOARD_TEMPLATE)
            .expect("Failed to add leaderboard template");
        env.add_template("categories", CATEGORIES_TEMPLATE)
            .expect("Failed to add categories template");

        Self { env }
    }

    /// Render tool cards. Each card gets a fresh like count from `rng`.
    pub fn render_tools<R: Rng + ?Sized>(
        &self,
        tools: &[Tool],
        rng: &mut R,
    ) -> Result<String, minijinja::Error> {
        let cards: Vec<ToolCard> = tools
            .iter()
            .map(|tool| ToolCard {
                name: &tool.name,
                category: tool.category(),
                description: &tool.description,
                url: &tool.url,
                initial: tool.initial(),
                likes: rng.gen_range(LIKES),
            })
            .collect();

        self.env
            .get_template("tools")?
            .render(context! { cards => cards })
    }

    /// Render news cards, or the placeholder when there are none.
    pub fn render_news(&self, news: &[NewsItem]) -> Result<String, minijinja::Error> {
        if news.is_empty() {
            return Ok(NO_NEWS.to_string());
        }

        self.env
            .get_template("news")?
            .render(context! { items => news })
    }

    /// Render the leaderboard, or the placeholder when it is empty.
    pub fn render_leaderboard(&self, llms: &[LlmEntry]) -> Result<String, minijinja::Error> {
        if llms.is_empty() {
            return Ok(NO_LEADERBOARD.to_string());
        }

        let entries: Vec<RankedEntry> = llms
            .iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: rank_label(i),
                model: entry,
            })
            .collect();

        self.env
            .get_template("leaderboard")?
            .render(context! { entries => entries })
    }

    /// Render one filter button per category.
    pub fn render_categories(&self, categories: &[String]) -> Result<String, minijinja::Error> {
        self.env
            .get_template("categories")?
            .render(context! { categories => categories })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

const TOOLS_TEMPLATE: &str = r##"{% for tool in cards %}
<div class="tool-card bg-white rounded-xl shadow-md overflow-hidden hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1 border border-gray-100 p-6 flex flex-col justify-between h-full"
     data-name="{{ tool.name }}" data-category="{{ tool.category }}" data-desc="{{ tool.description }}">
  <div class="flex items-start justify-between mb-4">
    <div class="flex items-center space-x-3">
      <div class="h-10 w-10 rounded-full bg-indigo-100 flex items-center justify-center text-indigo-600 font-bold text-lg flex-shrink-0">
        {{ tool.initial }}
      </div>
      <div>
        <h3 class="text-lg font-bold text-gray-900 leading-tight">{{ tool.name }}</h3>
        <span class="text-xs text-gray-500 font-medium bg-gray-100 px-2 py-0.5 rounded-full">{{ tool.category }}</span>
      </div>
    </div>
    <div class="flex items-center text-gray-400 text-xs space-x-1 flex-shrink-0">
      <span>❤️ {{ tool.likes }}</span>
    </div>
  </div>
  <p class="text-gray-600 text-sm mb-6 flex-grow leading-relaxed">
    {{ tool.description }}
  </p>
  <div class="mt-auto pt-4 border-t border-gray-100">
    <a href="{{ tool.url }}" target="_blank" rel="noopener noreferrer"
       class="block w-full text-center bg-gray-900 hover:bg-indigo-600 text-white font-medium py-2.5 rounded-lg transition-colors duration-200 text-sm">
      Visit Website
    </a>
  </div>
</div>
{% endfor %}"##;

const NEWS_TEMPLATE: &str = r##"{% for item in items %}
<a href="{{ item.url }}" target="_blank" class="block group">
  <div class="border-l-4 border-indigo-500 pl-4 py-2 hover:bg-gray-50 transition-colors rounded-r-lg">
    <h4 class="font-bold text-gray-900 group-hover:text-indigo-600 transition-colors">{{ item.title }}</h4>
    <p class="text-sm text-gray-600 mt-1 line-clamp-2">{{ item.summary }}</p>
    <span class="text-xs text-gray-400 mt-2 block">{{ item.date }}</span>
  </div>
</a>
{% endfor %}"##;

const LEADERBOARD_TEMPLATE: &str = r##"{% for entry in entries %}
<div class="bg-gray-50 rounded-lg p-4 border border-gray-200">
  <div class="flex justify-between items-start mb-2">
    <h4 class="font-bold text-gray-900">{{ entry.rank }} {{ entry.model.name }}</h4>
    <span class="text-xs font-semibold px-2 py-1 bg-green-100 text-green-800 rounded-full">{{ entry.model.performance }}</span>
  </div>
  <p class="text-xs text-gray-500 mb-2">by {{ entry.model.provider }} • {{ entry.model.context }} Context</p>
  <p class="text-sm text-gray-700 mb-3">{{ entry.model.description }}</p>
  <div class="flex justify-between items-center text-xs">
    <span class="font-mono bg-gray-200 px-1 rounded">{{ entry.model.price }}</span>
    <a href="{{ entry.model.url }}" target="_blank" class="text-indigo-600 hover:underline">Try it →</a>
  </div>
</div>
{% endfor %}"##;

const CATEGORIES_TEMPLATE: &str = r##"{% for cat in categories %}
<button class="category-filter px-4 py-2 rounded-full text-sm font-medium bg-white text-gray-700 border border-gray-200 hover:bg-gray-50 hover:border-indigo-300 transition shadow-sm"
        onclick="filterCategory('{{ cat }}')" data-category="{{ cat }}">
  {{ cat }}
</button>
{% endfor %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tool(name: &str, category: Option<&str>) -> Tool {
        Tool {
            name: name.to_string(),
            description: format!("{name} description"),
            category: category.map(|c| Some(c.to_string())),
            url: format!("https://example.com/{name}"),
            ..Default::default()
        }
    }

    fn likes_in(html: &str) -> Vec<u32> {
        html.split("<span>")
            .skip(1)
            .map(|rest| {
                let text = rest.split('<').next().unwrap();
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                digits.parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let tools = vec![
            tool("a", Some("Video")),
            tool("b", Some("Code")),
            tool("c", None),
            tool("d", Some("Code")),
        ];

        assert_eq!(categories(&tools), vec!["Code", "Uncategorized", "Video"]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn renders_tool_card_verbatim() {
        let renderer = Renderer::new();
        let mut rng = StdRng::seed_from_u64(0);
        let tools = vec![tool("<b>Foo</b>", Some("Code & Dev"))];

        let html = renderer.render_tools(&tools, &mut rng).unwrap();

        assert!(html.contains(r#"data-name="<b>Foo</b>""#));
        assert!(html.contains(r#"data-category="Code & Dev""#));
        assert!(html.contains(r#"href="https://example.com/<b>Foo</b>""#));
        assert!(html.contains("Visit Website"));
    }

    #[test]
    fn tool_card_shows_initial() {
        let renderer = Renderer::new();
        let html = renderer
            .render_tools(&[tool("brainWave", None)], &mut StdRng::seed_from_u64(0))
            .unwrap();

        assert!(html.contains("\n        B\n"));
        assert!(html.contains(">Uncategorized</span>"));
    }

    #[test]
    fn empty_news_renders_placeholder() {
        let renderer = Renderer::new();

        assert_eq!(renderer.render_news(&[]).unwrap(), NO_NEWS);
        assert_eq!(renderer.render_leaderboard(&[]).unwrap(), NO_LEADERBOARD);
    }

    #[test]
    fn renders_news_items() {
        let renderer = Renderer::new();
        let news = vec![NewsItem {
            title: "Headline".to_string(),
            summary: "Summary".to_string(),
            url: "https://news.example".to_string(),
            date: "2024-01-02".to_string(),
            ..Default::default()
        }];

        let html = renderer.render_news(&news).unwrap();

        assert!(html.contains(r#"<a href="https://news.example""#));
        assert!(html.contains(">Headline</h4>"));
        assert!(html.contains(">2024-01-02</span>"));
        assert!(!html.contains("No news available"));
    }

    #[test]
    fn leaderboard_ranks_by_position() {
        let renderer = Renderer::new();
        let llms: Vec<LlmEntry> = (0..5)
            .map(|i| LlmEntry {
                name: format!("Model{i}"),
                provider: "Lab".to_string(),
                context: "8k".to_string(),
                ..Default::default()
            })
            .collect();

        let html = renderer.render_leaderboard(&llms).unwrap();

        assert!(html.contains("🥇 Model0"));
        assert!(html.contains("🥈 Model1"));
        assert!(html.contains("🥉 Model2"));
        assert!(html.contains("#4 Model3"));
        assert!(html.contains("#5 Model4"));
        assert!(html.contains("by Lab • 8k Context"));
        assert!(html.contains("Try it →"));
    }

    #[test]
    fn stored_rank_does_not_override_position() {
        let renderer = Renderer::new();
        let llms: Vec<LlmEntry> =
            serde_json::from_str(r#"[{"name":"M0","rank":"999"},{"name":"M1"}]"#).unwrap();

        let html = renderer.render_leaderboard(&llms).unwrap();

        assert!(html.contains("🥇 M0"));
        assert!(html.contains("🥈 M1"));
        assert!(!html.contains("999"));
    }

    #[test]
    fn rank_labels() {
        assert_eq!(rank_label(0), "🥇");
        assert_eq!(rank_label(3), "#4");
        assert_eq!(rank_label(9), "#10");
    }

    #[test]
    fn renders_category_buttons() {
        let renderer = Renderer::new();

        let html = renderer
            .render_categories(&["Code".to_string(), "Video".to_string()])
            .unwrap();

        assert!(html.contains(r#"onclick="filterCategory('Code')" data-category="Code""#));
        assert!(html.contains(r#"data-category="Video""#));
        assert_eq!(html.matches("<button").count(), 2);
    }

    #[test]
    fn same_seed_same_output() {
        let renderer = Renderer::new();
        let tools = vec![tool("a", None), tool("b", Some("Code"))];

        let first = renderer
            .render_tools(&tools, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = renderer
            .render_tools(&tools, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn likes_stay_in_range(seed in any::<u64>(), n in 1usize..20) {
            let renderer = Renderer::new();
            let tools: Vec<Tool> = (0..n).map(|i| tool(&format!("t{i}"), None)).collect();

            let html = renderer
                .render_tools(&tools, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let likes = likes_in(&html);

            prop_assert_eq!(likes.len(), n);
            prop_assert!(likes.iter().all(|l| LIKES.contains(l)));
        }

        #[test]
        fn categories_match_set_semantics(cats in proptest::collection::vec(proptest::option::of("[A-Za-z]{1,6}"), 0..12)) {
            let tools: Vec<Tool> = cats
                .iter()
                .map(|c| tool("x", c.as_deref()))
                .collect();

            let got = categories(&tools);

            let mut expected: Vec<String> = cats
                .iter()
                .map(|c| c.clone().unwrap_or_else(|| "Uncategorized".to_string()))
                .collect();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(got, expected);
        }
    }
}
