//! In-process stand-in for the gateway, for tests and offline development.

use crate::gateway::AiService;
use crate::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// Scripted [`AiService`] that never touches the network.
///
/// Queued responses are served in order and cycle once exhausted; without a
/// queue, text operations echo their input and structured operations return
/// the empty mapping. The call count is shared across all operations.
pub struct MockAiService {
    text_responses: Arc<Mutex<Vec<String>>>,
    object_responses: Arc<Mutex<Vec<Map<String, Value>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAiService {
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(Mutex::new(Vec::new())),
            object_responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.text_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_object_response(self, response: Map<String, Value>) -> Self {
        self.object_responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn record_call(&self) -> usize {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *count
    }

    fn next_text(&self, call: usize, default: String) -> String {
        let responses = self.text_responses.lock().unwrap();
        if responses.is_empty() {
            default
        } else {
            responses[(call - 1) % responses.len()].clone()
        }
    }

    fn next_object(&self, call: usize) -> Map<String, Value> {
        let responses = self.object_responses.lock().unwrap();
        if responses.is_empty() {
            Map::new()
        } else {
            responses[(call - 1) % responses.len()].clone()
        }
    }
}

impl Default for MockAiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiService for MockAiService {
    async fn generate_description(&self, details: &str) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, format!("A wonderful property: {}", details)))
    }

    async fn chat(&self, question: &str) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, format!("An answer to: {}", question)))
    }

    async fn extract_search_criteria(&self, _query: &str) -> Result<Map<String, Value>> {
        let call = self.record_call();
        Ok(self.next_object(call))
    }

    async fn neighborhood_report(&self, location: &str) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, format!("A report about {}", location)))
    }

    async fn extract_criteria_from_image(
        &self,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<Map<String, Value>> {
        let call = self.record_call();
        Ok(self.next_object(call))
    }

    async fn interior_design_advice(
        &self,
        _image: &[u8],
        _mime_type: &str,
        style: &str,
    ) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, format!("Redesign ideas in a {} style", style)))
    }

    async fn investment_analysis(&self, _details: &str) -> Result<Map<String, Value>> {
        let call = self.record_call();
        Ok(self.next_object(call))
    }

    async fn offer_letter(
        &self,
        details: &str,
        offer_amount: &str,
        _conditions: &str,
    ) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, format!("An offer of {} for {}", offer_amount, details)))
    }

    async fn summarize_document(&self, _image: &[u8], _mime_type: &str) -> Result<String> {
        let call = self.record_call();
        Ok(self.next_text(call, "A summary of the document.".to_string()))
    }

    async fn lifestyle_score(&self, _amenities: &str) -> Result<Map<String, Value>> {
        let call = self.record_call();
        Ok(self.next_object(call))
    }
}
