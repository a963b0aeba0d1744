//! Content service client: copy and poster-background generation.
//!
//! Both operations are independent remote calls. `generate_background`
//! distinguishes a hard failure (`Err`) from a response that simply carried
//! no image (`Ok(None)`); callers decide how each affects the flow.

pub mod prompt;
pub mod response;
pub mod schema;

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiService;

use crate::{Content, Result, Strategy};
use std::sync::Arc;

/// Remote generation backend
pub trait ContentService: Send + Sync {
    /// Generate marketing copy for the strategy.
    fn generate_copy(&self, strategy: &Strategy) -> Result<Content>;

    /// Generate one poster background and return it as an image URL.
    /// `Ok(None)` means the response contained no image payload.
    fn generate_background(&self, strategy: &Strategy) -> Result<Option<String>>;
}

impl<T: ContentService + ?Sized> ContentService for Arc<T> {
    fn generate_copy(&self, strategy: &Strategy) -> Result<Content> {
        (**self).generate_copy(strategy)
    }

    fn generate_background(&self, strategy: &Strategy) -> Result<Option<String>> {
        (**self).generate_background(strategy)
    }
}

impl<T: ContentService + ?Sized> ContentService for &T {
    fn generate_copy(&self, strategy: &Strategy) -> Result<Content> {
        (**self).generate_copy(strategy)
    }

    fn generate_background(&self, strategy: &Strategy) -> Result<Option<String>> {
        (**self).generate_background(strategy)
    }
}
