use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_part::GeminiPart;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }

    /// Role-less content, as the API expects for `systemInstruction`.
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![GeminiPart { text: text.into() }],
        }
    }

    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}
