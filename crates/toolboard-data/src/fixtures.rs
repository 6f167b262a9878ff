//! Fixed news and leaderboard content written on every scrape.

use crate::records::{LlmEntry, NewsItem};

struct NewsFixture {
    title: &'static str,
    summary: &'static str,
    url: &'static str,
}

struct LlmFixture {
    name: &'static str,
    provider: &'static str,
    price: &'static str,
    performance: &'static str,
    context: &'static str,
    description: &'static str,
    url: &'static str,
}

const NEWS: &[NewsFixture] = &[
    NewsFixture {
        title: "Open-weight models close the gap on coding benchmarks",
        summary: "Community evaluations show recent open-weight releases trailing hosted models by only a few points on common code-generation suites.",
        url: "https://example.com/news/open-weight-coding",
    },
    NewsFixture {
        title: "Longer context windows become the default",
        summary: "Most major providers now ship context windows above 100k tokens, shifting attention to retrieval quality over raw length.",
        url: "https://example.com/news/long-context",
    },
    NewsFixture {
        title: "Agent frameworks converge on tool-calling standards",
        summary: "Tool schemas are becoming interchangeable across vendors, making it easier to swap models behind the same agent.",
        url: "https://example.com/news/tool-calling",
    },
];

const LEADERBOARD: &[LlmFixture] = &[
    LlmFixture {
        name: "GPT-4o",
        provider: "OpenAI",
        price: "$5 / 1M tokens",
        performance: "88.7 MMLU",
        context: "128k",
        description: "Multimodal flagship with fast responses across text, vision and audio.",
        url: "https://chat.openai.com",
    },
    LlmFixture {
        name: "Claude 3.5 Sonnet",
        provider: "Anthropic",
        price: "$3 / 1M tokens",
        performance: "88.3 MMLU",
        context: "200k",
        description: "Strong at coding and long-document analysis.",
        url: "https://claude.ai",
    },
    LlmFixture {
        name: "Gemini 1.5 Pro",
        provider: "Google",
        price: "$3.50 / 1M tokens",
        performance: "85.9 MMLU",
        context: "1M",
        description: "Very long context for whole-repository and video inputs.",
        url: "https://gemini.google.com",
    },
    LlmFixture {
        name: "Llama 3.1 405B",
        provider: "Meta",
        price: "Open weights",
        performance: "87.3 MMLU",
        context: "128k",
        description: "Largest open-weight model, self-hostable.",
        url: "https://llama.meta.com",
    },
    LlmFixture {
        name: "Mistral Large",
        provider: "Mistral AI",
        price: "$2 / 1M tokens",
        performance: "84.0 MMLU",
        context: "128k",
        description: "European model with solid multilingual performance.",
        url: "https://chat.mistral.ai",
    },
];

/// News items dated `date`.
pub fn news(date: &str) -> Vec<NewsItem> {
    NEWS.iter()
        .map(|n| NewsItem {
            title: n.title.to_string(),
            summary: n.summary.to_string(),
            url: n.url.to_string(),
            date: date.to_string(),
            ..Default::default()
        })
        .collect()
}

/// Leaderboard entries, best first.
pub fn leaderboard() -> Vec<LlmEntry> {
    LEADERBOARD
        .iter()
        .map(|m| LlmEntry {
            name: m.name.to_string(),
            provider: m.provider.to_string(),
            price: m.price.to_string(),
            performance: m.performance.to_string(),
            context: m.context.to_string(),
            description: m.description.to_string(),
            url: m.url.to_string(),
            ..Default::default()
        })
        .collect()
}
