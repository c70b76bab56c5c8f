use crate::config::Config;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// One attempt per call; failures surface immediately, no retry or backoff.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin REST client for the backend's `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self::new_with_client(config, Client::new())
    }

    /// Construct with a shared connection pool.
    pub fn new_with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// POST one request and decode the response envelope.
    ///
    /// The key is carried as a `?key=` query credential, so the request URL
    /// must never appear in logs or error values; reqwest errors are
    /// stripped of it before they leave this module.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}?key={}", self.api_url, self.api_key);

        tracing::debug!("Sending generateContent request to AI backend");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Failed to send request to AI backend: {}", e);
                Error::Http(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| Error::Http(e.without_url()))?;
            tracing::error!("AI backend returned status {}: {}", status, error_text);
            return Err(Error::AiBackend(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode AI backend response: {}\nBody: {}", e, body);
            Error::AiBackend(format!("failed to decode response envelope: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer, api_key: &str) -> GeminiClient {
        GeminiClient::new(&Config::new(server.uri(), api_key))
    }

    #[tokio::test]
    async fn test_generate_appends_key_as_query_credential() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [ { "content": { "parts": [ { "text": "hi" } ] } } ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let request = GenerateContentRequest::from_text("hello");

        let response = client.generate(&request).await.unwrap();
        assert_eq!(response.first_text(), Some("hi"));
    }

    #[tokio::test]
    async fn test_generate_posts_the_prompt_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_string_contains("list the amenities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [ { "content": { "parts": [ { "text": "ok" } ] } } ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "key");
        let request = GenerateContentRequest::from_text("please list the amenities");

        client.generate(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_backend_error_without_the_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = make_client(&server, "super-secret");
        let request = GenerateContentRequest::from_text("hello");

        let err = client.generate(&request).await.unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::AiBackend(_)));
        assert!(message.contains("429"));
        assert!(message.contains("quota exceeded"));
        assert!(!message.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_undecodable_envelope_maps_to_backend_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = make_client(&server, "key");
        let request = GenerateContentRequest::from_text("hello");

        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, Error::AiBackend(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_error_does_not_leak_the_key() {
        // Nothing listens on this port; the send itself fails.
        let config = Config::new("http://127.0.0.1:1/generate", "super-secret");
        let client = GeminiClient::new(&config);
        let request = GenerateContentRequest::from_text("hello");

        let err = client.generate(&request).await.unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Http(_)));
        assert!(!message.contains("super-secret"));
        assert!(!message.contains("key="));
    }
}
