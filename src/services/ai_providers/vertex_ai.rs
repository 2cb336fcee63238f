use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::instruction_channel::InstructionChannel;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::app_config::AppConfig;
use crate::structs::generation_options::GenerationOptions;
use crate::traits::model_generator::ModelGenerator;

/// Calls `generateContent` on the Vertex AI publisher-model endpoint.
#[derive(Clone)]
pub struct VertexAiProvider {
    base_url: String,
    project_id: String,
    region: String,
    access_token: Option<String>,
    client: Client,
}

impl VertexAiProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base.clone(),
            project_id: config.project_id.clone(),
            region: config.region.clone(),
            access_token: config.access_token.clone(),
            client: Client::new(),
        }
    }

    pub fn generate_url(&self, model_id: &str) -> String {
        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.base_url, self.project_id, self.region, model_id
        )
    }

    pub fn get_request(prompt: String, options: &GenerationOptions) -> GeminiRequest {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        if let Some(instruction) = options.system_instruction.clone() {
            match options.channel {
                InstructionChannel::SystemInstruction => {
                    system_instruction = Some(GeminiContent::instruction(instruction));
                }
                InstructionChannel::PrependedTurn => {
                    contents.push(GeminiContent::user(instruction));
                }
            }
        }

        contents.push(GeminiContent::user(prompt));

        GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(options.temperature),
                max_output_tokens: Some(options.max_output_tokens),
            }),
        }
    }

    async fn make_request(&self, url: &str, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        let mut request_builder = self.client
            .post(url)
            .header("Content-Type", "application/json")
            .json(request_body);

        if let Some(token) = &self.access_token {
            request_builder = request_builder.bearer_auth(token);
        }

        request_builder
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl ModelGenerator for VertexAiProvider {
    async fn generate(&self, prompt: String, options: GenerationOptions, model_id: String) -> Result<String, AiProviderError> {
        let url = self.generate_url(&model_id);
        let request_body = Self::get_request(prompt, &options);

        log::debug!("📦 Request model: {} ({} turns)", model_id, request_body.contents.len());

        let response = self.make_request(&url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Vertex AI error response ({}): {}", status, error_text);

            return Err(AiProviderError::from_status(status.as_u16(), &error_text));
        }

        let body: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(text) = body.first_text() {
            return Ok(text);
        }

        let reason = body
            .block_reason()
            .map(|r| format!("prompt blocked: {}", r))
            .or_else(|| body.finish_reason().map(|r| format!("finish reason: {}", r)))
            .unwrap_or_else(|| "no content in response".to_string());

        Err(AiProviderError::EmptyResponse(reason))
    }
}
