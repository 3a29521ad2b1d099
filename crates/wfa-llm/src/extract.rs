//! Response text extraction

use serde_json::Value;

/// The response layouts the client knows how to read, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape<'a> {
    /// OpenAI-style `choices[0].message.content`
    Chat(&'a str),
    /// Top-level `output` field
    Output(&'a Value),
    /// Top-level `text` field
    Text(&'a Value),
    /// Anything else; the whole body is used
    Unknown(&'a Value),
}

impl<'a> ResponseShape<'a> {
    pub fn classify(body: &'a Value) -> Self {
        if let Some(content) = chat_content(body) {
            return Self::Chat(content);
        }
        if let Some(output) = body.get("output") {
            return Self::Output(output);
        }
        if let Some(text) = body.get("text") {
            return Self::Text(text);
        }
        Self::Unknown(body)
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Chat(content) => content.to_string(),
            Self::Output(value) | Self::Text(value) | Self::Unknown(value) => stringify(value),
        }
    }
}

/// Pull the completion text out of a decoded response body.
pub fn extract_content(body: &Value) -> String {
    ResponseShape::classify(body).into_text()
}

fn chat_content(body: &Value) -> Option<&str> {
    body.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .filter(|content| !content.is_empty())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_choices() {
        let body = json!({"choices": [{"message": {"content": "X"}}]});
        assert_eq!(ResponseShape::classify(&body), ResponseShape::Chat("X"));
        assert_eq!(extract_content(&body), "X");
    }

    #[test]
    fn test_output_field() {
        assert_eq!(extract_content(&json!({"output": "Y"})), "Y");
        assert_eq!(
            extract_content(&json!({"output": ["a", "b"]})),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_text_field() {
        assert_eq!(extract_content(&json!({"text": "Z"})), "Z");
    }

    #[test]
    fn test_unknown_shape_stringifies_body() {
        let body = json!({"foo": "bar"});
        assert!(matches!(ResponseShape::classify(&body), ResponseShape::Unknown(_)));
        assert_eq!(extract_content(&body), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_empty_choices_fall_through() {
        assert_eq!(extract_content(&json!({"choices": [], "output": "Y"})), "Y");
        assert_eq!(
            extract_content(&json!({"choices": [{"message": {"content": ""}}], "text": "Z"})),
            "Z"
        );
        assert_eq!(
            extract_content(&json!({"choices": [{"message": {}}], "output": "Y"})),
            "Y"
        );
    }

    #[test]
    fn test_output_beats_text() {
        assert_eq!(extract_content(&json!({"output": "Y", "text": "Z"})), "Y");
    }
}
