pub const PROJECT_ID_ENV: &str = "PROJECT_ID";
pub const REGION_ENV: &str = "REGION";
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const INSTRUCTION_CHANNEL_ENV: &str = "INSTRUCTION_CHANNEL";
pub const GOOGLE_ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";
pub const VERTEX_API_BASE_ENV: &str = "VERTEX_API_BASE";

pub const DEFAULT_REGION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Largest `POST /generate` body accepted.
pub const MAX_REQUEST_BODY_BYTES: u64 = 1024 * 1024;

pub const SERVICE_TITLE: &str = "Gemini API Proxy";

/// Known model identifiers served by `GET /models`.
pub const KNOWN_MODELS: &[(&str, &str)] = &[
    ("gemini-2.0-flash-001", "Gemini 2.0 Flash, fast general-purpose model"),
    ("gemini-2.0-flash-lite-001", "Gemini 2.0 Flash-Lite, lowest latency and cost"),
    ("gemini-1.5-pro-002", "Gemini 1.5 Pro, long-context reasoning"),
    ("gemini-1.5-pro-001", "Gemini 1.5 Pro (first release)"),
    ("gemini-1.5-flash-002", "Gemini 1.5 Flash"),
    ("gemini-1.5-flash-001", "Gemini 1.5 Flash (first release)"),
];

pub fn vertex_api_base(region: &str) -> String {
    format!("https://{}-aiplatform.googleapis.com/v1", region)
}
