//! Google Custom Search image lookups.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::traits::ImageSearch;
use crate::config::ImageSearchConfig;
use crate::error::{CourtsideError, Result};

const SERVICE: &str = "image_search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

#[derive(Clone)]
pub struct GoogleImageSearch {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    cx: Option<String>,
}

impl GoogleImageSearch {
    pub fn new(config: &ImageSearchConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                CourtsideError::Internal(format!("failed to build image search client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            cx: config.cx.clone().filter(|c| !c.is_empty()),
        })
    }

    fn params(&self, query: &str) -> Result<Vec<(&'static str, String)>> {
        let (Some(key), Some(cx)) = (&self.api_key, &self.cx) else {
            return Err(CourtsideError::upstream(
                SERVICE,
                "image search is not configured (api_key/cx missing)",
            ));
        };
        Ok(vec![
            ("key", key.clone()),
            ("cx", cx.clone()),
            ("q", query.to_string()),
            ("num", "1".to_string()),
            ("dateRestrict", "d[1]".to_string()),
            ("imgSize", "xlarge".to_string()),
            ("searchType", "image".to_string()),
        ])
    }
}

#[async_trait]
impl ImageSearch for GoogleImageSearch {
    async fn first_image(&self, query: &str) -> Result<String> {
        let params = self.params(query)?;
        debug!(query, "image search request");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                CourtsideError::upstream(SERVICE, reason)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, query, "image search returned an error status");
            return Err(CourtsideError::upstream(
                SERVICE,
                format!("search failed: status={}", status),
            ));
        }

        let body: SearchResponse = resp
            .json()
            .await
            .map_err(|e| CourtsideError::upstream(SERVICE, format!("invalid response: {}", e)))?;
        first_link(body, query)
    }
}

fn first_link(body: SearchResponse, query: &str) -> Result<String> {
    body.items
        .into_iter()
        .next()
        .map(|item| item.link)
        .ok_or_else(|| CourtsideError::NotFound(format!("No image found for '{}'", query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> ImageSearchConfig {
        ImageSearchConfig {
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key: api_key.map(ToString::to_string),
            cx: Some("engine".to_string()),
            timeout_ms: 1000,
        }
    }

    #[test]
    fn test_params_carry_image_filters() {
        let search = GoogleImageSearch::new(&config(Some("secret"))).unwrap();
        let params = search.params("Luka Doncic").unwrap();
        assert!(params.contains(&("q", "Luka Doncic".to_string())));
        assert!(params.contains(&("searchType", "image".to_string())));
        assert!(params.contains(&("num", "1".to_string())));
    }

    #[test]
    fn test_missing_key_is_upstream_unavailable() {
        let search = GoogleImageSearch::new(&config(Some(""))).unwrap();
        let err = search.params("anyone").unwrap_err();
        assert!(err.is_upstream());
    }

    #[test]
    fn test_first_link() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"items": [{"link": "https://img/1.jpg"}, {"link": "https://img/2.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(first_link(body, "q").unwrap(), "https://img/1.jpg");

        let empty: SearchResponse = serde_json::from_str(r#"{"kind": "customsearch"}"#).unwrap();
        assert!(matches!(
            first_link(empty, "q"),
            Err(CourtsideError::NotFound(_))
        ));
    }
}
