/// What the interpreter sends to the model for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltInstruction {
    pub effective_prompt: String,
    pub system_instruction: Option<String>,
    pub effective_model: String,
}
