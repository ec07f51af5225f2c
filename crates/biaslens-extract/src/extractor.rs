//! Input classification and text extraction

use crate::error::ExtractError;
use crate::html::extract_main_text;
use biaslens_domain::{ExtractionMetadata, SourceKind};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default timeout for fetching URL inputs.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-agent sent when fetching URL inputs.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; BiasLens/1.0)";

/// Turns raw user input (plain text, HTML, or a URL) into clean text plus a
/// source tag.
pub struct Extractor {
    client: reqwest::Client,
}

impl Extractor {
    /// Create an extractor with the default fetch timeout.
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_fetch_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create an extractor with a custom fetch timeout.
    pub fn with_fetch_timeout(timeout: Duration) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ExtractError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Normalize input into plain text and metadata about its source.
    ///
    /// - Empty/whitespace input yields empty text, `extracted = false`.
    /// - An absolute http(s) URL is fetched and its body treated as HTML.
    /// - Input containing both `<` and `>` is treated as inline HTML.
    /// - Anything else is returned trimmed, verbatim.
    pub async fn extract(
        &self,
        raw_input: &str,
    ) -> Result<(String, ExtractionMetadata), ExtractError> {
        let cleaned = raw_input.trim();

        if cleaned.is_empty() {
            return Ok((String::new(), ExtractionMetadata::default()));
        }

        if is_probable_url(cleaned) {
            info!(url = cleaned, "fetching URL input for extraction");
            let body = self.fetch_url(cleaned).await?;
            let text = extract_main_text(&body);
            let metadata = ExtractionMetadata {
                source_kind: SourceKind::Url,
                extracted: true,
                source_url: Some(cleaned.to_string()),
            };
            return Ok((text, metadata));
        }

        if cleaned.contains('<') && cleaned.contains('>') {
            debug!("detected HTML input, extracting main text");
            let metadata = ExtractionMetadata {
                source_kind: SourceKind::Html,
                extracted: true,
                source_url: None,
            };
            return Ok((extract_main_text(cleaned), metadata));
        }

        debug!("detected plain text input");
        Ok((cleaned.to_string(), ExtractionMetadata::default()))
    }

    async fn fetch_url(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ExtractError::Fetch {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|source| ExtractError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Whether a string looks like an absolute http(s) URL with a host.
fn is_probable_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
