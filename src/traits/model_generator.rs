use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::generation_options::GenerationOptions;

/// A stateless text-generation backend.
#[async_trait]
pub trait ModelGenerator: Send + Sync {
    async fn generate(&self, prompt: String, options: GenerationOptions, model_id: String) -> Result<String, AiProviderError>;
}
