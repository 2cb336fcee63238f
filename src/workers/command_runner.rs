use std::sync::Arc;
use std::time::Instant;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::SERVICE_TITLE;
use crate::enums::commands::Commands;
use crate::errors::{ProxyError, ProxyResult};
use crate::server::api_server::ApiServer;
use crate::services::ai_providers::vertex_ai::VertexAiProvider;
use crate::services::response_interpreter::ResponseInterpreter;
use crate::structs::config::app_config::AppConfig;
use crate::structs::generation_request::GenerationRequest;
use crate::structs::model_catalog::ModelCatalog;

pub struct CommandRunner;

impl CommandRunner {
    pub async fn run_command(command: Option<Commands>) -> ProxyResult<()> {
        let command = command.unwrap_or(Commands::Serve { host: None, port: None });

        match command {
            Commands::Serve { host, port } => Self::serve_command(host, port).await,
            Commands::Generate { prompt, model, temperature, max_output_tokens, json, schema } => {
                let request = Self::build_request(prompt, model, temperature, max_output_tokens, json, schema)?;
                Self::generate_command(request).await
            }
            Commands::Models => Self::models_command(),
        }
    }

    pub fn build_interpreter(config: &AppConfig) -> ResponseInterpreter {
        let provider = Arc::new(VertexAiProvider::new(config));
        ResponseInterpreter::new(config.default_model.clone(), provider)
            .with_channel(config.instruction_channel)
    }

    async fn serve_command(host: Option<String>, port: Option<u16>) -> ProxyResult<()> {
        let mut config = ConfigManager::from_env()?;
        if let Some(host) = host {
            config.host = host;
        }
        if let Some(port) = port {
            config.port = port;
        }

        log::info!("🚀 Starting {} for project {} in {}", SERVICE_TITLE, config.project_id, config.region);
        log::debug!("Configuration: {:?}", config);

        let addr = config.bind_address()?;
        let server = ApiServer::new(
            Self::build_interpreter(&config),
            ModelCatalog::known(&config.default_model),
        );

        server.run(addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for shutdown signal: {}", e);
                return;
            }
            log::info!("🛑 Shutting down...");
        }).await
    }

    pub fn build_request(
        prompt: String,
        model: Option<String>,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
        json: bool,
        schema: Option<String>,
    ) -> ProxyResult<GenerationRequest> {
        let schema = schema
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    ProxyError::validation_error("--schema", &format!("must be valid JSON ({})", e))
                })
            })
            .transpose()?;

        let mut request = GenerationRequest::new(prompt);
        request.model = model;
        if let Some(temperature) = temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_output_tokens) = max_output_tokens {
            request = request.with_max_output_tokens(max_output_tokens);
        }
        if json || schema.is_some() {
            request = request.with_json_mode(schema);
        }

        Ok(request)
    }

    async fn generate_command(request: GenerationRequest) -> ProxyResult<()> {
        let config = ConfigManager::from_env()?;
        let interpreter = Self::build_interpreter(&config);

        let start = Instant::now();
        let result = interpreter.generate(&request).await?;
        log::info!("⏱️  Generated in {:.2}s", start.elapsed().as_secs_f64());

        Self::print_json(&result)
    }

    fn models_command() -> ProxyResult<()> {
        Self::print_json(&ModelCatalog::known(&ConfigManager::default_model_from_env()))
    }

    fn print_json<T: Serialize>(value: &T) -> ProxyResult<()> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| ProxyError::system_error("render output", &e.to_string()))?;
        println!("{}", rendered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_flag_implies_json_mode() {
        let request = CommandRunner::build_request(
            "give me a user".into(),
            None,
            None,
            None,
            false,
            Some(r#"{"type":"object"}"#.into()),
        )
        .unwrap();
        assert!(request.json_mode);
        assert_eq!(request.json_schema, Some(json!({"type": "object"})));
    }

    #[test]
    fn invalid_schema_is_rejected() {
        let err = CommandRunner::build_request("x".into(), None, None, None, true, Some("{not json".into())).unwrap_err();
        assert!(matches!(err, ProxyError::ValidationError { .. }));
    }

    #[test]
    fn flags_override_defaults() {
        let request = CommandRunner::build_request(
            "x".into(),
            Some("gemini-1.5-pro-001".into()),
            Some(0.25),
            Some(64),
            false,
            None,
        )
        .unwrap();
        assert_eq!(request.model_override(), Some("gemini-1.5-pro-001"));
        assert_eq!(request.temperature, 0.25);
        assert_eq!(request.max_output_tokens, 64);
        assert!(!request.json_mode);
    }
}
