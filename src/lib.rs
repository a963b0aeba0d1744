//! AdGenius
//!
//! Turns a marketing strategy (goal, audience, keywords, promotion, visual
//! style, optional product photo and scene) into ad copy and poster
//! previews using a generative-AI backend.
//!
//! # Features
//!
//! - **Gemini backend** (default): copy and background images via the
//!   Gemini `generateContent` REST API
//! - **Poster rendering**: four layouts times seven visual styles, rendered
//!   to standalone HTML
//! - **Campaign history**: the five most recent campaigns, kept in a
//!   pluggable storage slot
//!
//! # Example
//!
//! ```no_run
//! use adgenius::{Controller, GeneratorConfig, StrategyForm};
//! use adgenius::history::FileStorage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = adgenius::new_service(GeneratorConfig::from_env())?;
//! let mut controller = Controller::new(FileStorage::new(".adgenius"));
//!
//! let form = StrategyForm {
//!     keywords: "eco bottle, reusable".to_string(),
//!     promo: "buy one get one".to_string(),
//!     ..Default::default()
//! };
//! controller.submit(&service, form.submit()?)?;
//! println!("Slogan: {}", controller.content().map(|c| c.slogan.as_str()).unwrap_or(""));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod model;
pub use model::{
    now_millis, Audience, CampaignRecord, Content, Goal, ProductImage, SocialPost, Strategy, StrategyForm,
    VisualStyle, IMAGE_STORED_SENTINEL, MAX_POSTERS,
};

pub mod clipboard;
pub mod history;
pub mod rendering;
pub mod service;

pub mod controller;
pub use controller::{generate_campaign, Controller, Generated, Stage, View};

// Async-friendly facade running service calls on tokio's blocking pool
pub mod async_api;
pub use async_api::Studio;

pub use service::ContentService;

/// Configuration for the generation backend
///
/// Defaults target the public Gemini endpoint with the models the service
/// was designed around. `api_key` is empty by default; use
/// [`GeneratorConfig::from_env`] or set it explicitly.
///
/// # Examples
///
/// ```
/// let cfg = adgenius::GeneratorConfig::default();
/// assert_eq!(cfg.aspect_ratio, "3:4");
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL of the REST API, without trailing slash
    pub api_base: String,
    /// Model used for copy generation
    pub copy_model: String,
    /// Model used for background images
    pub image_model: String,
    /// Requested background aspect ratio, `W:H`
    pub aspect_ratio: String,
    /// HTTP transport timeout in milliseconds
    pub timeout_ms: u64,
    /// User agent string to send with requests
    pub user_agent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            copy_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            aspect_ratio: "3:4".to_string(),
            timeout_ms: 120_000,
            user_agent: concat!("adgenius/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GeneratorConfig {
    /// Defaults overlaid with `GEMINI_API_KEY` (or `GOOGLE_API_KEY`,
    /// `API_KEY`) and `GEMINI_API_BASE`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(key) = non_empty_env("GEMINI_API_KEY")
            .or_else(|| non_empty_env("GOOGLE_API_KEY"))
            .or_else(|| non_empty_env("API_KEY"))
        {
            cfg.api_key = key;
        }
        if let Some(base) = non_empty_env("GEMINI_API_BASE") {
            cfg.api_base = base.trim_end_matches('/').to_string();
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("API key is not set (GEMINI_API_KEY)".into()));
        }
        if self.copy_model.trim().is_empty() || self.image_model.trim().is_empty() {
            return Err(Error::Config("model names must not be empty".into()));
        }
        let ratio_ok = self
            .aspect_ratio
            .split_once(':')
            .map(|(w, h)| {
                matches!((w.parse::<u32>(), h.parse::<u32>()), (Ok(w), Ok(h)) if w > 0 && h > 0)
            })
            .unwrap_or(false);
        if !ratio_ok {
            return Err(Error::Config(format!("invalid aspect ratio '{}'", self.aspect_ratio)));
        }
        Ok(())
    }
}

/// Create the default content service backend.
#[cfg(feature = "gemini")]
pub fn new_service(config: GeneratorConfig) -> Result<impl ContentService> {
    service::GeminiService::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert!(config.api_base.ends_with("/v1beta"));
        assert_eq!(config.aspect_ratio, "3:4");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_aspect_ratio() {
        let mut config = GeneratorConfig {
            api_key: "k".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        config.aspect_ratio = "3x4".into();
        assert!(config.validate().is_err());
        config.aspect_ratio = "0:4".into();
        assert!(config.validate().is_err());
    }
}
