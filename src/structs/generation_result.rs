use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by `POST /generate` on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Raw model output, never rewritten.
    pub text: String,
    pub model_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Value>,
}
