use std::time::Duration;

use recall_core::errors::{RecallResult, RetrievalError};
use recall_core::models::Passage;
use recall_core::traits::ISourceProvider;
use serde_json::Value;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Web search provider backed by the DuckDuckGo Instant Answer API.
///
/// Maps the abstract and related topics of the JSON answer to passages.
/// Transport and decode failures become `ProviderUnavailable`; the engine
/// recovers that into an empty result, so this adapter never retries.
pub struct WebSearchProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    max_results: usize,
}

impl WebSearchProvider {
    /// Build a provider with the given request timeout.
    pub fn new(timeout: Duration, max_results: usize) -> RecallResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recall/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RetrievalError::ProviderUnavailable {
                reason: format!("http client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_results,
        })
    }

    /// Point the provider at a different endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn unavailable(reason: impl std::fmt::Display) -> RetrievalError {
        RetrievalError::ProviderUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Pull passages out of an instant-answer document: the abstract
    /// first, then related-topic texts up to `max_results`.
    fn parse_answer(&self, answer: &Value, query: &str) -> Vec<Passage> {
        let mut passages = Vec::new();

        if let Some(abstract_text) = answer["Abstract"].as_str().filter(|s| !s.is_empty()) {
            let source = answer["AbstractURL"]
                .as_str()
                .filter(|s| !s.is_empty())
                .unwrap_or("duckduckgo.com");
            passages.push(Passage::new(abstract_text, source));
        }

        if let Some(topics) = answer["RelatedTopics"].as_array() {
            for topic in topics {
                if passages.len() >= self.max_results {
                    break;
                }
                if let Some(text) = topic["Text"].as_str().filter(|s| !s.is_empty()) {
                    let source = topic["FirstURL"]
                        .as_str()
                        .filter(|s| !s.is_empty())
                        .unwrap_or("duckduckgo.com");
                    passages.push(Passage::new(text, source));
                }
            }
        }

        debug!(query, passages = passages.len(), "parsed instant answer");
        passages
    }
}

impl ISourceProvider for WebSearchProvider {
    fn search(&self, query: &str) -> RecallResult<Vec<Passage>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .map_err(Self::unavailable)?;

        let answer: Value = response
            .error_for_status()
            .map_err(Self::unavailable)?
            .json()
            .map_err(Self::unavailable)?;

        Ok(self.parse_answer(&answer, query))
    }

    fn name(&self) -> &str {
        "duckduckgo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> WebSearchProvider {
        WebSearchProvider::new(Duration::from_secs(10), 5).unwrap()
    }

    #[test]
    fn parses_abstract_and_topics() {
        let answer: Value = serde_json::from_str(
            r#"{
                "Abstract": "Rust is a systems programming language.",
                "AbstractURL": "https://www.rust-lang.org",
                "RelatedTopics": [
                    {"Text": "Cargo is the Rust package manager.", "FirstURL": "https://doc.rust-lang.org/cargo"},
                    {"Text": "", "FirstURL": "https://ignored.example"},
                    {"Name": "grouped topic without text"}
                ]
            }"#,
        )
        .unwrap();

        let passages = provider().parse_answer(&answer, "rust");
        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].source, "https://www.rust-lang.org");
        assert_eq!(passages[1].text, "Cargo is the Rust package manager.");
    }

    #[test]
    fn empty_answer_yields_no_passages() {
        let answer: Value =
            serde_json::from_str(r#"{"Abstract": "", "RelatedTopics": []}"#).unwrap();
        assert!(provider().parse_answer(&answer, "q").is_empty());
    }

    #[test]
    fn respects_max_results() {
        let answer: Value = serde_json::from_str(
            r#"{
                "Abstract": "one",
                "AbstractURL": "https://a",
                "RelatedTopics": [
                    {"Text": "two", "FirstURL": "https://b"},
                    {"Text": "three", "FirstURL": "https://c"},
                    {"Text": "four", "FirstURL": "https://d"}
                ]
            }"#,
        )
        .unwrap();

        let provider = WebSearchProvider::new(Duration::from_secs(10), 2).unwrap();
        assert_eq!(provider.parse_answer(&answer, "q").len(), 2);
    }

    #[test]
    fn missing_source_falls_back_to_host_label() {
        let answer: Value =
            serde_json::from_str(r#"{"Abstract": "text only", "RelatedTopics": []}"#).unwrap();
        let passages = provider().parse_answer(&answer, "q");
        assert_eq!(passages[0].source, "duckduckgo.com");
    }

    #[test]
    fn unreachable_endpoint_is_provider_unavailable() {
        // Port 9 (discard) with a tiny timeout: the request cannot succeed.
        let provider = WebSearchProvider::new(Duration::from_millis(50), 5)
            .unwrap()
            .with_endpoint("http://127.0.0.1:9/");
        let err = provider.search("query").unwrap_err();
        assert!(err.to_string().contains("provider unavailable"));
    }
}
