pub mod json_mode_prompt;
