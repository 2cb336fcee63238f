pub mod ai;
pub mod api_response;
pub mod built_instruction;
pub mod cli;
pub mod config;
pub mod generation_options;
pub mod generation_request;
pub mod generation_result;
pub mod model_catalog;
