//! Thin HTTP client for a FLUX.1-schnell Gradio Space.
//!
//! Gradio exposes named endpoints under `/call`: posting the input payload to
//! `/call/infer` yields an event id, and reading `/call/infer/{event_id}`
//! returns a server-sent-event body whose `complete` event carries the
//! result. `generate` runs both steps and hands back the first artifact of
//! the result payload.
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

/// Inference parameters sent alongside the prompt, in the positional order
/// the Space's `infer` endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub seed: i64,
    pub randomize_seed: bool,
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            seed: 0,
            randomize_seed: true,
            width: 512,
            height: 512,
            num_inference_steps: 4,
        }
    }
}

#[derive(Clone)]
pub struct FluxClient {
    client: Client,
    base_url: String,
}

impl FluxClient {
    pub fn new(base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        FluxClient { client: Client::new(), base_url: base }
    }

    /// Generate one image from an (already enriched) prompt.
    ///
    /// Returns the image artifact reference exactly as the Space reports it,
    /// an opaque JSON value with the file path and URL.
    pub async fn generate(&self, prompt: &str, params: &GenerationParams) -> AppResult<Value> {
        let event_id = self.submit(prompt, params).await?;
        self.collect_result(&event_id).await
    }

    /// Post the inference payload and obtain the event id for its result.
    async fn submit(&self, prompt: &str, params: &GenerationParams) -> AppResult<String> {
        let url = format!("{}/call/infer", self.base_url);
        tracing::info!("Submitting prompt to FLUX Space at URL: {}", url);

        let body = json!({
            "data": [
                prompt,
                params.seed,
                params.randomize_seed,
                params.width,
                params.height,
                params.num_inference_steps,
            ]
        });
        tracing::debug!("Inference payload: {:?}", body);

        let response = self.client.post(&url)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let json: Value = response.json().await.map_err(AppError::HttpClient)?;
            json.get("event_id")
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| {
                    AppError::Inference(format!("No event_id in Space response: {}", json))
                })
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to submit prompt. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Inference(error_message))
        }
    }

    /// Read the event stream for a submitted call and extract the artifact.
    async fn collect_result(&self, event_id: &str) -> AppResult<Value> {
        let url = format!("{}/call/infer/{}", self.base_url, event_id);
        let response = self.client.get(&url)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            return Err(AppError::Inference(format!(
                "Failed to read result stream: {:?}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(AppError::HttpClient)?;
        let data = parse_event_stream(&body)?;
        data.as_array()
            .and_then(|arr| arr.first())
            .cloned()
            .ok_or_else(|| AppError::Inference("Space returned an empty result payload".to_string()))
    }
}

/// Pull the `complete` event's payload out of a Gradio SSE body.
///
/// The stream interleaves `event:`/`data:` line pairs; `error` events abort,
/// and a stream that ends without a `complete` payload is treated as a
/// failed generation.
fn parse_event_stream(body: &str) -> AppResult<Value> {
    let mut event = "";
    for line in body.lines() {
        if let Some(name) = line.strip_prefix("event:") {
            event = name.trim();
        } else if let Some(payload) = line.strip_prefix("data:") {
            match event {
                "complete" => {
                    return serde_json::from_str(payload.trim()).map_err(|e| {
                        AppError::Inference(format!("Malformed result payload: {}", e))
                    });
                }
                "error" => {
                    return Err(AppError::Inference(format!(
                        "Space reported an error: {}",
                        payload.trim()
                    )));
                }
                _ => {}
            }
        }
    }
    Err(AppError::Inference("Result stream ended without a complete event".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_event_payload() {
        let body = "event: generating\ndata: null\n\nevent: complete\ndata: [{\"url\": \"https://example/img.webp\"}, 42]\n\n";
        let data = parse_event_stream(body).unwrap();
        assert_eq!(data[0]["url"], "https://example/img.webp");
        assert_eq!(data[1], 42);
    }

    #[test]
    fn error_event_maps_to_inference_error() {
        let body = "event: error\ndata: \"GPU quota exceeded\"\n\n";
        let err = parse_event_stream(body).unwrap_err();
        assert!(matches!(err, AppError::Inference(_)));
        assert!(err.to_string().contains("GPU quota exceeded"));
    }

    #[test]
    fn stream_without_complete_is_an_error() {
        let body = "event: heartbeat\ndata: null\n\n";
        assert!(parse_event_stream(body).is_err());
    }

    #[test]
    fn default_params_match_the_space_contract() {
        let p = GenerationParams::default();
        assert_eq!(p.seed, 0);
        assert!(p.randomize_seed);
        assert_eq!((p.width, p.height), (512, 512));
        assert_eq!(p.num_inference_steps, 4);
    }

    #[test]
    fn base_url_is_trimmed() {
        let c = FluxClient::new("https://host/space///".to_string());
        assert_eq!(c.base_url, "https://host/space");
    }
}
