use std::sync::Arc;
use crate::errors::ProxyResult;
use crate::helpers::json_extractor::extract_structured;
use crate::enums::extraction::{Extraction, UnavailableReason};
use crate::enums::instruction_channel::InstructionChannel;
use crate::prompts::json_mode_prompt::json_mode_instruction;
use crate::structs::built_instruction::BuiltInstruction;
use crate::structs::generation_options::GenerationOptions;
use crate::structs::generation_request::GenerationRequest;
use crate::structs::generation_result::GenerationResult;
use crate::traits::model_generator::ModelGenerator;

/// Turns a `GenerationRequest` into a model call and the model's text back into a
/// `GenerationResult`.
///
/// Holds no per-request state, so one instance can serve any number of concurrent
/// requests.
#[derive(Clone)]
pub struct ResponseInterpreter {
    default_model: String,
    channel: InstructionChannel,
    generator: Arc<dyn ModelGenerator>,
}

impl ResponseInterpreter {
    pub fn new(default_model: impl Into<String>, generator: Arc<dyn ModelGenerator>) -> Self {
        Self {
            default_model: default_model.into(),
            channel: InstructionChannel::default(),
            generator,
        }
    }

    pub fn with_channel(mut self, channel: InstructionChannel) -> Self {
        self.channel = channel;
        self
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn channel(&self) -> InstructionChannel {
        self.channel
    }

    pub fn build_instruction(&self, request: &GenerationRequest) -> BuiltInstruction {
        let effective_model = request
            .model_override()
            .unwrap_or(&self.default_model)
            .to_string();

        let system_instruction = request
            .json_mode
            .then(|| json_mode_instruction(request.json_schema.as_ref()));

        BuiltInstruction {
            effective_prompt: request.prompt.clone(),
            system_instruction,
            effective_model,
        }
    }

    pub async fn invoke(&self, built: &BuiltInstruction, temperature: f32, max_output_tokens: u32) -> ProxyResult<String> {
        let options = GenerationOptions {
            system_instruction: built.system_instruction.clone(),
            temperature,
            max_output_tokens,
            channel: self.channel,
        };

        let text = self
            .generator
            .generate(built.effective_prompt.clone(), options, built.effective_model.clone())
            .await?;

        Ok(text)
    }

    pub async fn generate(&self, request: &GenerationRequest) -> ProxyResult<GenerationResult> {
        self.generate_with_outcome(request).await.map(|(result, _)| result)
    }

    /// Like `generate`, also reporting why no JSON was attached when that is the case.
    pub async fn generate_with_outcome(&self, request: &GenerationRequest) -> ProxyResult<(GenerationResult, Option<UnavailableReason>)> {
        let built = self.build_instruction(request);
        let text = self
            .invoke(&built, request.temperature, request.max_output_tokens)
            .await?;

        let (json_data, missing) = match extract_structured(&text, request.json_mode) {
            Extraction::Parsed(value) => (Some(value), None),
            Extraction::Unavailable(reason) => (None, Some(reason)),
        };

        let result = GenerationResult {
            text,
            model_used: built.effective_model,
            json_data,
        };

        Ok((result, missing))
    }
}
