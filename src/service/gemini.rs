//! Gemini `generateContent` backend over blocking HTTP.

use super::response::{first_inline_image, parse_content, response_text, GenerateResponse};
use super::{prompt, schema, ContentService};
use crate::{Content, Error, GeneratorConfig, Result, Strategy};
use log::{debug, warn};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

/// Content service talking to the Gemini REST API.
pub struct GeminiService {
    client: Client,
    config: GeneratorConfig,
}

impl GeminiService {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `{api_base}/models/{model}:generateContent`
    pub fn endpoint(&self, model: &str) -> Result<Url> {
        let model = model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        let raw = format!(
            "{}/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            model_path
        );
        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid endpoint {}: {}", raw, e)))
    }

    fn parts(strategy: &Strategy, text: String) -> Vec<Value> {
        let mut parts = vec![json!({ "text": text })];
        if let Some(image) = strategy.usable_image() {
            // An unreadable photo only loses context; the call still goes out.
            match image.decode() {
                Ok(_) => parts.push(json!({
                    "inlineData": {
                        "mimeType": "image/jpeg",
                        "data": image.payload().unwrap_or_default(),
                    }
                })),
                Err(e) => warn!("Skipping product image: {}", e),
            }
        }
        parts
    }

    /// Request body for copy generation.
    pub fn copy_request(&self, strategy: &Strategy) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": Self::parts(strategy, prompt::copy_prompt(strategy)),
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::content_schema(),
            }
        })
    }

    /// Request body for background generation.
    pub fn background_request(&self, strategy: &Strategy) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": Self::parts(strategy, prompt::background_prompt(strategy)),
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": { "aspectRatio": self.config.aspect_ratio },
            }
        })
    }

    fn call(&self, model: &str, body: &Value) -> Result<GenerateResponse> {
        let endpoint = self.endpoint(model)?;
        debug!("POST {}", endpoint);

        let res = self
            .client
            .post(endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()?;
        let status = res.status();
        let text = res.text()?;

        let parsed: GenerateResponse = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                Error::Generation(format!("unreadable response from {}: {}", model, e))
            } else {
                Error::Generation(format!("{} returned HTTP {}", model, status))
            }
        })?;
        if let Some(err) = &parsed.error {
            return Err(Error::Generation(format!("{} returned an error: {}", model, err.message)));
        }
        if !status.is_success() {
            return Err(Error::Generation(format!("{} returned HTTP {}", model, status)));
        }
        Ok(parsed)
    }
}

impl ContentService for GeminiService {
    fn generate_copy(&self, strategy: &Strategy) -> Result<Content> {
        let body = self.copy_request(strategy);
        let response = self.call(&self.config.copy_model, &body)?;
        parse_content(&response_text(&response))
    }

    fn generate_background(&self, strategy: &Strategy) -> Result<Option<String>> {
        let body = self.background_request(strategy);
        let response = self.call(&self.config.image_model, &body)?;
        let image = first_inline_image(&response);
        if image.is_none() {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "none".to_string());
            warn!("Background response carried no inline image (finish reason: {})", reason);
        }
        Ok(image)
    }
}
