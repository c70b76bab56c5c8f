//! Gateway facade: the AI operations the rest of the service consumes
//!
//! Each operation composes a prompt, encodes exactly one request, performs
//! exactly one backend call, extracts the first generated text and, for the
//! structured operations, normalizes it into a JSON mapping. Configuration
//! is fixed at construction; the gateway holds no other state, so concurrent
//! calls need no locking.

use crate::config::Config;
use crate::gemini::{GeminiClient, GenerateContentRequest, GenerateContentResponse};
use crate::normalize::normalize_to_object;
use crate::{prompts, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Sentinel returned when the backend answers without any usable text.
///
/// Keeps every consumer total; the cost is that the sentinel occasionally
/// reads like generated content. Structured callers fail normalization on it
/// and degrade to the empty mapping.
pub const NO_RESPONSE_FALLBACK: &str = "No response generated.";

/// First text part of the first candidate, or the fallback sentinel.
pub fn extract_text(response: &GenerateContentResponse) -> String {
    match response.first_text() {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!("AI backend answered without usable text; using fallback");
            NO_RESPONSE_FALLBACK.to_string()
        }
    }
}

/// The operation catalogue exposed to the marketplace's controllers.
///
/// Text operations resolve to generated prose or Markdown; structured
/// operations resolve to a JSON mapping whose keys are all optional for the
/// caller. Transport failures surface as errors here; serving code that must
/// never fail a request combines these with [`text_or_degraded`] and
/// [`object_or_degraded`].
#[async_trait]
pub trait AiService: Send + Sync {
    /// Marketing-style description for a listing.
    async fn generate_description(&self, details: &str) -> Result<String>;

    /// Concise assistant answer to a free-text question.
    async fn chat(&self, question: &str) -> Result<String>;

    /// `location`/`minPrice`/`maxPrice` extracted from a search query.
    async fn extract_search_criteria(&self, query: &str) -> Result<Map<String, Value>>;

    /// Markdown report about the area around `location`.
    async fn neighborhood_report(&self, location: &str) -> Result<String>;

    /// `style`/`features`/`estimatedPriceRange` read off a property photo.
    async fn extract_criteria_from_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Map<String, Value>>;

    /// Markdown redesign plan for a room photo and a target style.
    async fn interior_design_advice(
        &self,
        image: &[u8],
        mime_type: &str,
        style: &str,
    ) -> Result<String>;

    /// `rentalYield`/`cashFlow`/`appreciationForecast`/`riskAssessment`/
    /// `investmentRating` report for a listing.
    async fn investment_analysis(&self, details: &str) -> Result<Map<String, Value>>;

    /// Offer letter for a listing, an offer amount and buyer conditions.
    async fn offer_letter(
        &self,
        details: &str,
        offer_amount: &str,
        conditions: &str,
    ) -> Result<String>;

    /// Markdown summary of a photographed legal document.
    async fn summarize_document(&self, image: &[u8], mime_type: &str) -> Result<String>;

    /// `familyFriendlyScore`/`youngProfessionalScore` for an amenity list.
    async fn lifestyle_score(&self, amenities: &str) -> Result<Map<String, Value>>;
}

/// Production gateway backed by the Gemini transport client.
pub struct AiGateway {
    client: GeminiClient,
}

impl AiGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            client: GeminiClient::new(config),
        }
    }

    /// Construct with a shared connection pool.
    pub fn new_with_client(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            client: GeminiClient::new_with_client(config, http_client),
        }
    }

    async fn generate_text(&self, prompt: String) -> Result<String> {
        let request = GenerateContentRequest::from_text(prompt);
        let response = self.client.generate(&request).await?;
        Ok(extract_text(&response))
    }

    async fn generate_object(&self, prompt: String) -> Result<Map<String, Value>> {
        let text = self.generate_text(prompt).await?;
        Ok(normalize_to_object(&text))
    }

    async fn generate_text_with_image(
        &self,
        prompt: String,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String> {
        let request = GenerateContentRequest::with_inline_image(prompt, mime_type, image);
        let response = self.client.generate(&request).await?;
        Ok(extract_text(&response))
    }

    async fn generate_object_with_image(
        &self,
        prompt: String,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Map<String, Value>> {
        let text = self
            .generate_text_with_image(prompt, image, mime_type)
            .await?;
        Ok(normalize_to_object(&text))
    }
}

#[async_trait]
impl AiService for AiGateway {
    async fn generate_description(&self, details: &str) -> Result<String> {
        self.generate_text(prompts::property_description(details))
            .await
    }

    async fn chat(&self, question: &str) -> Result<String> {
        self.generate_text(prompts::chat_answer(question)).await
    }

    async fn extract_search_criteria(&self, query: &str) -> Result<Map<String, Value>> {
        self.generate_object(prompts::search_criteria(query)).await
    }

    async fn neighborhood_report(&self, location: &str) -> Result<String> {
        self.generate_text(prompts::neighborhood_report(location))
            .await
    }

    async fn extract_criteria_from_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Map<String, Value>> {
        self.generate_object_with_image(prompts::image_criteria(), image, mime_type)
            .await
    }

    async fn interior_design_advice(
        &self,
        image: &[u8],
        mime_type: &str,
        style: &str,
    ) -> Result<String> {
        self.generate_text_with_image(prompts::interior_design(style), image, mime_type)
            .await
    }

    async fn investment_analysis(&self, details: &str) -> Result<Map<String, Value>> {
        self.generate_object(prompts::investment_analysis(details))
            .await
    }

    async fn offer_letter(
        &self,
        details: &str,
        offer_amount: &str,
        conditions: &str,
    ) -> Result<String> {
        self.generate_text(prompts::offer_letter(details, offer_amount, conditions))
            .await
    }

    async fn summarize_document(&self, image: &[u8], mime_type: &str) -> Result<String> {
        self.generate_text_with_image(prompts::document_summary(), image, mime_type)
            .await
    }

    async fn lifestyle_score(&self, amenities: &str) -> Result<Map<String, Value>> {
        self.generate_object(prompts::lifestyle_score(amenities))
            .await
    }
}

/// Serving policy for text operations: a failed call is presented as if it
/// were generated content, so an AI hiccup never fails the enclosing
/// request. The branch is explicit so callers can still tell "backend said
/// no" from "network said no" by using the `Result` directly.
pub fn text_or_degraded(result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("AI operation degraded to error text: {}", e);
            format!("Error communicating with AI service: {}", e)
        }
    }
}

/// Serving policy for structured operations: a failed call degrades to the
/// empty mapping, consistent with every structured key being optional.
pub fn object_or_degraded(result: Result<Map<String, Value>>) -> Map<String, Value> {
    match result {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!("AI operation degraded to empty mapping: {}", e);
            Map::new()
        }
    }
}

/// Typed view over the mapping produced by `extract_search_criteria`.
///
/// Every field is optional by contract; lookups default instead of failing
/// when a key is absent or carries an unexpected type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            location: object
                .get("location")
                .and_then(Value::as_str)
                .map(str::to_string),
            min_price: object.get("minPrice").and_then(Value::as_f64),
            max_price: object.get("maxPrice").and_then(Value::as_f64),
        }
    }
}
