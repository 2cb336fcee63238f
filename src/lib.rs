pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod prompts;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
