use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("Vertex AI API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

impl AiProviderError {
    /// Maps a non-success status of the generation endpoint to a provider error.
    ///
    /// Only `error.message` from the body is kept; the raw body belongs in the logs.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::describe(status, body);
        match status {
            400 => Self::ApiError(format!("Bad request: {}", message)),
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimited(message),
            _ => Self::ApiError(format!("HTTP {}: {}", status, message)),
        }
    }

    fn describe(status: u16, body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(|message| message.as_str())
                    .map(|message| message.trim().to_string())
            })
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUSY_BODY: &str = r#"{"error":{"code":503,"message":"busy","status":"UNAVAILABLE","details":[{"@type":"type.googleapis.com/google.rpc.DebugInfo"}]}}"#;

    #[test]
    fn status_mapping() {
        assert!(matches!(AiProviderError::from_status(400, r#"{"error":{"message":"x"}}"#), AiProviderError::ApiError(m) if m == "Bad request: x"));
        assert!(matches!(AiProviderError::from_status(403, "denied"), AiProviderError::AuthenticationError(_)));
        assert!(matches!(AiProviderError::from_status(429, ""), AiProviderError::RateLimited(_)));
    }

    #[test]
    fn keeps_only_the_error_message() {
        let err = AiProviderError::from_status(503, BUSY_BODY);
        assert_eq!(err.to_string(), "Vertex AI API Error: HTTP 503: busy");
    }

    #[test]
    fn unstructured_body_falls_back_to_status_text() {
        assert_eq!(
            AiProviderError::from_status(502, "<html>upstream exploded</html>").to_string(),
            "Vertex AI API Error: HTTP 502: Bad Gateway"
        );
        assert_eq!(
            AiProviderError::from_status(401, r#"{"error":{"code":401}}"#),
            AiProviderError::AuthenticationError("Unauthorized".to_string())
        );
    }
}
