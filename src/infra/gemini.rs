//! Thin asynchronous client for the Gemini generateContent API.
//!
//! - `analyze` turns a submitted shipment plan into a structured
//!   `LogisticsResult` (JSON response mode).
//! - `fetch_shipping_news` pulls a grounded news digest via the Google
//!   Search tool and keeps the grounding chunks as source citations.
//!
//! Each call is a single attempt; retry policy lives with the user.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{LogisticsResult, NewsDigest, NewsItem, NewsSource, ShipmentData};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);
const USER_AGENT: &str = "freight-route-advisor/1.0.0";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {message}")]
    Api {
        code: Option<u16>,
        status: Option<String>,
        message: String,
    },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response carried no usable content")]
    MissingContent,
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Key and model come from the environment; everything else keeps its
    /// default. A missing key is not an error here - the first request
    /// will fail and surface through the normal failure path.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = key;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        config
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: Url,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new() -> Result<Self, GeminiError> {
        Self::with_config(GeminiConfig::from_env())
    }

    pub fn with_config(config: GeminiConfig) -> Result<Self, GeminiError> {
        let base_url = Url::parse(&config.endpoint)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// One-shot analysis of a shipment plan. The service is asked for pure
    /// JSON matching the `LogisticsResult` shape; illustrative values may
    /// differ between calls for identical input.
    pub async fn analyze(&self, shipment: &ShipmentData) -> Result<LogisticsResult, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content::user(analysis_prompt(shipment))],
            generation_config: Some(GenerationConfig {
                temperature: 0.4,
                response_mime_type: Some("application/json".to_string()),
            }),
            tools: None,
        };

        println!("[gemini] requesting shipment analysis ({})", self.config.model);
        let response = self.generate(&request).await?;
        let text = extract_text(&response)?;
        let result = serde_json::from_str(strip_code_fences(&text))?;
        Ok(result)
    }

    /// Grounded shipping-news digest. Failures here are the caller's to
    /// log; nothing user-facing depends on this succeeding.
    pub async fn fetch_shipping_news(&self) -> Result<NewsDigest, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content::user(NEWS_PROMPT.to_string())],
            generation_config: None,
            tools: Some(vec![Tool {
                google_search: GoogleSearch {},
            }]),
        };

        println!("[gemini] requesting shipping news digest");
        let response = self.generate(&request).await?;
        let text = extract_text(&response)?;
        let items = parse_news_items(strip_code_fences(&text))?;
        let sources = extract_sources(&response);
        Ok(NewsDigest { items, sources })
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GeminiError> {
        let url = self.generate_url()?;
        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the structured API error when the body carries one.
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
                return Err(GeminiError::Api {
                    code: envelope.error.code,
                    status: envelope.error.status,
                    message: envelope.error.message,
                });
            }
            return Err(GeminiError::Api {
                code: Some(status.as_u16()),
                status: None,
                message: format!("HTTP {status}: {body}"),
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        if let Some(error) = parsed.error {
            return Err(GeminiError::Api {
                code: error.code,
                status: error.status,
                message: error.message,
            });
        }
        Ok(parsed)
    }

    fn generate_url(&self) -> Result<Url, GeminiError> {
        let mut url = self
            .base_url
            .join(&format!("models/{}:generateContent", self.config.model))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

fn analysis_prompt(shipment: &ShipmentData) -> String {
    format!(
        "You are a senior freight forwarder planning an import into Kosovo.\n\
         Analyze this shipment and respond with a single JSON object using exactly these keys:\n\
         classification (category, subCategory, hsCodeHint), flightOption and seaOption \
         (method, route, estimatedDays, estimatedCost, ports, legs[label, location, durationDays, cost, \
         type one of Inland|Freight|Customs|Delivery]), incotermAnalysis (description, totalEstimatedFees, \
         breakdown[label, amount]), containerRecommendation (type, reason, utilizationPercent, \
         natureOfGoodsAdvice), currencyOptimization (recommendation, paymentOptions[currency, totalCost, \
         isRecommended, exchangeRateRisk], savingsPotential, analysis, reasoning, baseValueUSD), \
         importSteps[step, detail, estimatedCost], mandatoryCertificates[certificate, description, \
         level one of Mandatory|Recommended, authority], forecasting (trend one of rising|falling|stable, \
         explanation, bestTimeToShip), historicalPriceData[month, price] in chronological order, \
         trackingData (airTrackingId, seaTrackingId, liveLocalization[latitude, longitude, status, lastUpdated]).\n\
         Mark exactly one payment option as recommended and keep leg costs and durations roughly \
         summing to the option totals.\n\n\
         Shipment parameters:\n\
         - Shipping mode: {mode}\n\
         - Factory location: {factory}\n\
         - Product: {product}\n\
         - Weight: {weight} kg\n\
         - Volume: {volume} m3\n\
         - Invoice amount: {amount} {currency}\n\
         - Incoterm: {incoterm}\n\
         - Origin port: {port}\n\
         - Container: {container}",
        mode = shipment.shipping_mode.label(),
        factory = shipment.factory_location,
        product = shipment.product_description,
        weight = shipment.weight,
        volume = shipment.volume,
        amount = shipment.invoice_amount,
        currency = shipment.currency.code(),
        incoterm = shipment.incoterm.code(),
        port = shipment.origin_port,
        container = shipment.container_type.label(),
    )
}

const NEWS_PROMPT: &str = "Search for current global shipping and freight news: port congestion, \
    container rates, canal disruptions, trade policy. Return a JSON array of 4 to 6 items, each with \
    keys headline, summary, shippingImpact and date (human-readable). Respond with the JSON only.";

/// The service wraps JSON answers in Markdown fences more often than not.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// The digest arrives either as a bare array or wrapped in `{ "news": [...] }`.
fn parse_news_items(text: &str) -> Result<Vec<NewsItem>, GeminiError> {
    if let Ok(items) = serde_json::from_str::<Vec<NewsItem>>(text) {
        return Ok(items);
    }

    #[derive(Deserialize)]
    struct NewsWrapper {
        news: Vec<NewsItem>,
    }

    let wrapper: NewsWrapper = serde_json::from_str(text)?;
    Ok(wrapper.news)
}

fn extract_text(response: &GenerateResponse) -> Result<String, GeminiError> {
    let text = response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::MissingContent);
    }
    Ok(text)
}

fn extract_sources(response: &GenerateResponse) -> Vec<NewsSource> {
    let chunks = response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .map(|metadata| metadata.grounding_chunks.as_slice())
        .unwrap_or_default();

    let mut sources = Vec::new();
    for chunk in chunks {
        let Some(web) = &chunk.web else { continue };
        let Some(uri) = web.uri.clone() else { continue };
        if sources.iter().any(|existing: &NewsSource| existing.uri == uri) {
            continue;
        }
        let title = web
            .title
            .clone()
            .filter(|title| !title.trim().is_empty())
            .or_else(|| Url::parse(&uri).ok().and_then(|u| u.host_str().map(String::from)))
            .unwrap_or_else(|| uri.clone());
        sources.push(NewsSource { title, uri });
    }
    sources
}

// Gemini API request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<RequestPart>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: CandidateContent,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    status: Option<String>,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_targets_the_configured_model() {
        let client = GeminiClient::with_config(GeminiConfig {
            api_key: "test-key".to_string(),
            ..GeminiConfig::default()
        })
        .expect("client should initialize");
        let url = client.generate_url().expect("url should build");
        assert!(url
            .as_str()
            .contains("models/gemini-3-flash-preview:generateContent"));
        assert!(url.as_str().contains("key=test-key"));
    }

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn news_items_decode_from_both_shapes() {
        let bare = r#"[{"headline": "h", "summary": "s", "shippingImpact": "i", "date": "June 2"}]"#;
        let wrapped = format!(r#"{{"news": {bare}}}"#);

        let from_bare = parse_news_items(bare).expect("bare array should parse");
        let from_wrapped = parse_news_items(&wrapped).expect("wrapper should parse");
        assert_eq!(from_bare, from_wrapped);
        assert_eq!(from_bare[0].headline, "h");
    }

    #[test]
    fn grounding_chunks_become_deduplicated_sources() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "[]"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://example.com/a", "title": "Example A"}},
                    {"web": {"uri": "https://example.com/a", "title": "Duplicate"}},
                    {"web": {"uri": "https://news.example.org/b", "title": "  "}},
                    {"web": {}}
                ]}
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).expect("envelope should decode");
        let sources = extract_sources(&response);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].title, "Example A");
        // Blank titles fall back to the host name.
        assert_eq!(sources[1].title, "news.example.org");
    }

    #[test]
    fn structured_api_errors_are_surfaced() {
        let body = r#"{"error": {"code": 429, "status": "RESOURCE_EXHAUSTED", "message": "slow down"}}"#;
        let response: GenerateResponse = serde_json::from_str(body).expect("envelope should decode");
        let error = response.error.expect("error should be present");
        assert_eq!(error.code, Some(429));
        assert_eq!(error.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }

    #[test]
    fn empty_candidates_are_missing_content() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("envelope should decode");
        assert!(matches!(
            extract_text(&response),
            Err(GeminiError::MissingContent)
        ));
    }

    #[tokio::test]
    #[ignore = "requires live GEMINI_API_KEY and network"]
    async fn live_news_digest_when_env_set() {
        if std::env::var(API_KEY_ENV).map(|v| v.trim().is_empty()).unwrap_or(true) {
            eprintln!("skipped: {API_KEY_ENV} is not set");
            return;
        }

        let client = GeminiClient::new().expect("client should initialize");
        let digest = client
            .fetch_shipping_news()
            .await
            .expect("live news fetch should succeed");
        assert!(!digest.items.is_empty());
    }
}
