pub mod ai_provider_error;
pub mod commands;
pub mod extraction;
pub mod instruction_channel;
