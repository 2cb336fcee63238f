use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone, Error)]
pub enum ProxyError {
    // Startup errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    // Model call errors
    #[error("Generation error: {0}")]
    GenerationError(#[from] AiProviderError),

    // Request errors raised before the model is called
    #[error("Invalid request: {field} {constraint}")]
    ValidationError {
        field: String,
        constraint: String,
    },

    // Server lifecycle errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ProxyError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Message for terminal output, with the configured hint when one exists.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for proxy operations
pub type ProxyResult<T> = Result<T, ProxyError>;
