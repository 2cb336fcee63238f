pub mod ai_providers;
pub mod response_interpreter;
