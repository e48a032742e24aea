//! OpenSearch suggestion client (MediaWiki `action=opensearch`).
//!
//! Response shape: `[query, [titles...], [descriptions...], [urls...]]`.
//! Only the second element is used. Anything else is a fetch failure; there
//! is no retry.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use itinera_core::SuggestionSource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// The phrase sent to the search endpoint for a destination.
pub fn search_phrase(destination: &str) -> String {
    format!("{destination} tourist attractions")
}

/// Pull the suggestion list out of an opensearch JSON body.
pub fn parse_opensearch_body(body: &Value) -> Result<Vec<String>> {
    let list = body
        .as_array()
        .context("opensearch response is not a JSON array")?
        .get(1)
        .context("opensearch response has no suggestion list")?
        .as_array()
        .context("opensearch suggestions are not an array")?;

    list.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .with_context(|| format!("non-string suggestion: {v}"))
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct OpenSearchClient {
    settings: SearchSettings,
    http: reqwest::Client,
}

impl OpenSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("itinera/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self { settings, http })
    }

    pub async fn fetch_async(&self, destination: &str, limit: usize) -> Result<Vec<String>> {
        let phrase = search_phrase(destination);
        let limit = limit.to_string();
        debug!(endpoint = %self.settings.endpoint, %phrase, %limit, "opensearch request");

        let resp = self
            .http
            .get(&self.settings.endpoint)
            .query(&[
                ("action", "opensearch"),
                ("search", phrase.as_str()),
                ("limit", limit.as_str()),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("opensearch request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("opensearch error: {status} {txt}");
        }

        let body: Value = resp.json().await.context("parse opensearch response")?;
        let suggestions = parse_opensearch_body(&body)?;
        info!(destination, count = suggestions.len(), "opensearch suggestions");
        Ok(suggestions)
    }

    /// Blocking wrapper around [`Self::fetch_async`].
    ///
    /// Safe to call from any context: a multi-threaded runtime is handed the
    /// request via `block_in_place`; a current-thread runtime cannot be
    /// blocked, so the request runs on a scoped thread with its own runtime.
    pub fn fetch(&self, destination: &str, limit: usize) -> Result<Vec<String>> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.fetch_async(destination, limit)))
            }
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| self.fetch_on_own_runtime(destination, limit))
                    .join()
                    .map_err(|_| anyhow!("opensearch worker thread panicked"))?
            }),
            Err(_) => self.fetch_on_own_runtime(destination, limit),
        }
    }

    fn fetch_on_own_runtime(&self, destination: &str, limit: usize) -> Result<Vec<String>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("create tokio runtime")?;
        rt.block_on(self.fetch_async(destination, limit))
    }
}

impl SuggestionSource for OpenSearchClient {
    fn suggestions(&self, destination: &str, limit: usize) -> Result<Vec<String>> {
        self.fetch(destination, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_second_element() {
        let body = json!([
            "Lisbon tourist attractions",
            ["Belém Tower", "Jerónimos Monastery"],
            ["", ""],
            ["https://en.wikipedia.org/wiki/Bel%C3%A9m_Tower", "https://en.wikipedia.org/wiki/Jer%C3%B3nimos_Monastery"]
        ]);
        assert_eq!(
            parse_opensearch_body(&body).unwrap(),
            vec!["Belém Tower", "Jerónimos Monastery"]
        );
    }

    #[test]
    fn test_parse_empty_list_is_ok() {
        let body = json!(["nowhere tourist attractions", [], [], []]);
        assert!(parse_opensearch_body(&body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(parse_opensearch_body(&json!({"error": "x"})).is_err());
        assert!(parse_opensearch_body(&json!(["only query"])).is_err());
        assert!(parse_opensearch_body(&json!(["q", "not a list"])).is_err());
        assert!(parse_opensearch_body(&json!(["q", ["ok", 3]])).is_err());
    }

    #[test]
    fn test_search_phrase() {
        assert_eq!(search_phrase("Oslo"), "Oslo tourist attractions");
    }

    #[test]
    fn test_default_settings() {
        let s = SearchSettings::default();
        assert_eq!(s.timeout_secs, 5);
        assert!(s.endpoint.ends_with("/w/api.php"));
    }
}
