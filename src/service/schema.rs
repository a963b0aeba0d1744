//! Structured-output schema for copy generation.

use serde_json::{json, Value};

/// Response schema matching [`crate::Content`]; every field is required
/// except `dataVizValue`.
pub fn content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "socialPost": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "solution": { "type": "STRING" },
                    "cta": { "type": "STRING" },
                    "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["title", "description", "solution", "cta", "hashtags"]
            },
            "slogan": { "type": "STRING" },
            "promoTagline": { "type": "STRING" },
            "dataVizValue": { "type": "STRING" }
        },
        "required": ["socialPost", "slogan", "promoTagline"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_the_only_optional_field() {
        let schema = content_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, vec!["socialPost", "slogan", "promoTagline"]);
        assert_eq!(schema["properties"]["socialPost"]["required"].as_array().unwrap().len(), 5);
    }
}
