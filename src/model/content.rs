//! Generated copy returned by the content service.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Social-media post fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub title: String,
    /// Pain-point hook
    pub description: String,
    pub solution: String,
    pub cta: String,
    /// Stored without the leading `#`
    pub hashtags: Vec<String>,
}

/// Structured result of copy generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub social_post: SocialPost,
    pub slogan: String,
    pub promo_tagline: String,
    /// Optional statistic or urgency cue shown as a badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_viz_value: Option<String>,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::Generation(format!("generated copy is missing `{}`", field)))
    } else {
        Ok(())
    }
}

impl Content {
    /// Check required fields and normalize hashtags and the highlight value.
    pub fn validate(mut self) -> Result<Content> {
        let post = &self.social_post;
        require("socialPost.title", &post.title)?;
        require("socialPost.description", &post.description)?;
        require("socialPost.solution", &post.solution)?;
        require("socialPost.cta", &post.cta)?;
        require("slogan", &self.slogan)?;
        require("promoTagline", &self.promo_tagline)?;

        self.social_post.hashtags = self
            .social_post
            .hashtags
            .iter()
            .map(|tag| tag.trim().trim_start_matches('#').trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        self.data_viz_value = self
            .data_viz_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(self)
    }

    pub fn highlight(&self) -> Option<&str> {
        self.data_viz_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Content {
        Content {
            social_post: SocialPost {
                title: "Hydrate smarter".into(),
                description: "Tired of plastic?".into(),
                solution: "Our eco bottle lasts years.".into(),
                cta: "Grab two today".into(),
                hashtags: vec!["#eco".into(), "##green".into(), " ".into(), "bottle".into()],
            },
            slogan: "Sip green".into(),
            promo_tagline: "Buy one get one".into(),
            data_viz_value: Some("  ".into()),
        }
    }

    #[test]
    fn validate_normalizes_tags_and_highlight() {
        let c = sample().validate().unwrap();
        assert_eq!(c.social_post.hashtags, vec!["eco", "green", "bottle"]);
        assert_eq!(c.highlight(), None);
    }

    #[test]
    fn validate_rejects_blank_required_field() {
        let mut c = sample();
        c.slogan = " ".into();
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("slogan"));
    }
}
