use crate::config::constants::{
    vertex_api_base, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_REGION, GEMINI_MODEL_ENV,
    GOOGLE_ACCESS_TOKEN_ENV, HOST_ENV, INSTRUCTION_CHANNEL_ENV, PORT_ENV, PROJECT_ID_ENV,
    REGION_ENV, VERTEX_API_BASE_ENV,
};
use crate::enums::instruction_channel::InstructionChannel;
use crate::errors::{ProxyError, ProxyResult};
use crate::structs::config::app_config::AppConfig;

pub struct ConfigManager;

impl ConfigManager {
    pub fn from_env() -> ProxyResult<AppConfig> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default model alone, for commands that never reach Vertex AI and so need no project.
    pub fn default_model_from_env() -> String {
        Self::default_model_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn default_model_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::non_blank(&lookup, GEMINI_MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Builds the configuration from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ProxyResult<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| Self::non_blank(&lookup, key);

        let project_id = get(PROJECT_ID_ENV).ok_or_else(|| {
            ProxyError::config_error(
                "PROJECT_ID is not set",
                Some(PROJECT_ID_ENV),
                Some("export PROJECT_ID=<your-gcp-project>"),
            )
        })?;

        let region = get(REGION_ENV).unwrap_or_else(|| DEFAULT_REGION.to_string());

        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ProxyError::config_error(
                    &format!("PORT '{}' is not a valid port number", raw),
                    Some(PORT_ENV),
                    Some("use a value between 1 and 65535"),
                )
            })?,
            None => DEFAULT_PORT,
        };

        let instruction_channel = match get(INSTRUCTION_CHANNEL_ENV) {
            Some(raw) => raw.parse::<InstructionChannel>().map_err(|e| {
                ProxyError::config_error(&e, Some(INSTRUCTION_CHANNEL_ENV), Some("use 'system' or 'prepend'"))
            })?,
            None => InstructionChannel::default(),
        };

        let api_base = get(VERTEX_API_BASE_ENV)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| vertex_api_base(&region));

        Ok(AppConfig {
            project_id,
            default_model: Self::default_model_from_lookup(&lookup),
            host: get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            instruction_channel,
            access_token: get(GOOGLE_ACCESS_TOKEN_ENV),
            api_base,
            region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> ProxyResult<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigManager::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_project_is_set() {
        let config = load(&[("PROJECT_ID", "demo")]).unwrap();
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.region, "us-central1");
        assert_eq!(config.default_model, "gemini-2.0-flash-001");
        assert_eq!(config.port, 8080);
        assert_eq!(config.instruction_channel, InstructionChannel::SystemInstruction);
        assert_eq!(config.api_base, "https://us-central1-aiplatform.googleapis.com/v1");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn missing_or_blank_project_is_fatal() {
        assert!(matches!(load(&[]), Err(ProxyError::ConfigurationError { .. })));
        assert!(matches!(load(&[("PROJECT_ID", "  ")]), Err(ProxyError::ConfigurationError { .. })));
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("PROJECT_ID", "demo"),
            ("REGION", "europe-west4"),
            ("GEMINI_MODEL", "gemini-1.5-pro-002"),
            ("PORT", "9000"),
            ("INSTRUCTION_CHANNEL", "prepend"),
            ("GOOGLE_ACCESS_TOKEN", "ya29.token"),
        ])
        .unwrap();
        assert_eq!(config.region, "europe-west4");
        assert_eq!(config.api_base, "https://europe-west4-aiplatform.googleapis.com/v1");
        assert_eq!(config.default_model, "gemini-1.5-pro-002");
        assert_eq!(config.port, 9000);
        assert_eq!(config.instruction_channel, InstructionChannel::PrependedTurn);
        assert_eq!(config.access_token.as_deref(), Some("ya29.token"));
    }

    #[test]
    fn bad_port_and_channel_are_rejected() {
        assert!(load(&[("PROJECT_ID", "demo"), ("PORT", "eighty")]).is_err());
        assert!(load(&[("PROJECT_ID", "demo"), ("INSTRUCTION_CHANNEL", "sideband")]).is_err());
    }

    #[test]
    fn api_base_override_drops_trailing_slash() {
        let config = load(&[("PROJECT_ID", "demo"), ("VERTEX_API_BASE", "http://127.0.0.1:9999/v1/")]).unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9999/v1");
    }

    #[test]
    fn default_model_ignores_blank_value_without_project() {
        let blank = |key: &str| (key == "GEMINI_MODEL").then(|| "  ".to_string());
        assert_eq!(ConfigManager::default_model_from_lookup(blank), "gemini-2.0-flash-001");

        let set = |key: &str| (key == "GEMINI_MODEL").then(|| "gemini-1.5-pro-002".to_string());
        assert_eq!(ConfigManager::default_model_from_lookup(set), "gemini-1.5-pro-002");
        assert_eq!(load(&[("PROJECT_ID", "demo"), ("GEMINI_MODEL", " ")]).unwrap().default_model, "gemini-2.0-flash-001");
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = load(&[("PROJECT_ID", "demo"), ("GOOGLE_ACCESS_TOKEN", "secret-token")]).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("[REDACTED]"));
    }
}
