use std::sync::Arc;
use async_trait::async_trait;
use mockall::mock;
use gemini_proxy::enums::ai_provider_error::AiProviderError;
use gemini_proxy::services::response_interpreter::ResponseInterpreter;
use gemini_proxy::structs::generation_options::GenerationOptions;
use gemini_proxy::traits::model_generator::ModelGenerator;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

mock! {
    pub Generator {}

    #[async_trait]
    impl ModelGenerator for Generator {
        async fn generate(&self, prompt: String, options: GenerationOptions, model_id: String) -> Result<String, AiProviderError>;
    }
}

/// Always answers with the same text or error.
pub struct StaticGenerator {
    reply: Result<String, AiProviderError>,
}

impl StaticGenerator {
    pub fn text(text: &str) -> Self {
        Self { reply: Ok(text.to_string()) }
    }

    pub fn failing(error: AiProviderError) -> Self {
        Self { reply: Err(error) }
    }
}

#[async_trait]
impl ModelGenerator for StaticGenerator {
    async fn generate(&self, _prompt: String, _options: GenerationOptions, _model_id: String) -> Result<String, AiProviderError> {
        self.reply.clone()
    }
}

/// Answers with the prompt it was given.
pub struct EchoGenerator;

#[async_trait]
impl ModelGenerator for EchoGenerator {
    async fn generate(&self, prompt: String, _options: GenerationOptions, model_id: String) -> Result<String, AiProviderError> {
        tokio::task::yield_now().await;
        Ok(format!("{}:{}", model_id, prompt))
    }
}

pub fn interpreter_with<G: ModelGenerator + 'static>(generator: G) -> ResponseInterpreter {
    ResponseInterpreter::new(DEFAULT_MODEL, Arc::new(generator))
}
