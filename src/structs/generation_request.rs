use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::config::constants::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE};

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,

    /// Model to use instead of the configured default.
    #[serde(default, alias = "model_override", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default)]
    pub json_mode: bool,

    /// Only consulted when `json_mode` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<Value>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            json_mode: false,
            json_schema: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_json_mode(mut self, schema: Option<Value>) -> Self {
        self.json_mode = true;
        self.json_schema = schema;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// The override, if one was given and is not blank.
    pub fn model_override(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.trim().is_empty())
    }
}
