//! Wire types for `generateContent` responses and their normalization.

use crate::{Content, Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "inline_data")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, alias = "mime_type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }
}

/// Concatenated text parts of the first candidate.
pub fn response_text(response: &GenerateResponse) -> String {
    response
        .first_parts()
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("")
}

/// Remove markdown code-fence markers the service may wrap JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse copy text into validated [`Content`].
pub fn parse_content(text: &str) -> Result<Content> {
    let clean = strip_code_fences(text);
    if clean.is_empty() {
        return Err(Error::Generation("service returned no copy".into()));
    }
    let content: Content = serde_json::from_str(&clean)
        .map_err(|e| Error::Generation(format!("copy did not match the content schema: {}", e)))?;
    content.validate()
}

/// First inline image of the first candidate as a PNG data URL.
pub fn first_inline_image(response: &GenerateResponse) -> Option<String> {
    response
        .first_parts()
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| !d.data.is_empty())
        .map(|d| format!("data:image/png;base64,{}", d.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COPY: &str = r##"{"socialPost":{"title":"T","description":"D","solution":"S","cta":"C","hashtags":["a","#b"]},"slogan":"Go","promoTagline":"Now"}"##;

    #[test]
    fn fenced_json_is_parsed() {
        let fenced = format!("```json\n{}\n```", COPY);
        let c = parse_content(&fenced).unwrap();
        assert_eq!(c.slogan, "Go");
        assert_eq!(c.social_post.hashtags, vec!["a", "b"]);
        assert_eq!(c.data_viz_value, None);
    }

    #[test]
    fn missing_required_field_is_a_generation_error() {
        let bad = r#"{"socialPost":{"title":"T","description":"D","solution":"S","cta":"C","hashtags":[]},"slogan":"Go"}"#;
        assert!(matches!(parse_content(bad), Err(Error::Generation(_))));
        assert!(matches!(parse_content("not json"), Err(Error::Generation(_))));
        assert!(matches!(parse_content("```"), Err(Error::Generation(_))));
    }

    #[test]
    fn first_inline_image_skips_text_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[
            {"text":"here you go"},
            {"inlineData":{"mimeType":"image/png","data":"QUJD"}},
            {"inlineData":{"mimeType":"image/png","data":"REVG"}}
        ]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_inline_image(&resp).as_deref(), Some("data:image/png;base64,QUJD"));
        assert_eq!(response_text(&resp), "here you go");
    }

    #[test]
    fn no_image_part_yields_none() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"sorry"}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_inline_image(&resp), None);
        assert_eq!(first_inline_image(&GenerateResponse::default()), None);
    }
}
