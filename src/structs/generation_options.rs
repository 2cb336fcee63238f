use crate::enums::instruction_channel::InstructionChannel;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub system_instruction: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub channel: InstructionChannel,
}
