use std::fmt;
use std::net::SocketAddr;
use crate::config::constants::{
    vertex_api_base, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_REGION, HOST_ENV,
};
use crate::enums::instruction_channel::InstructionChannel;
use crate::errors::{ProxyError, ProxyResult};

/// Process-wide settings, resolved once at startup and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub project_id: String,
    pub region: String,
    pub default_model: String,
    pub host: String,
    pub port: u16,
    pub instruction_channel: InstructionChannel,
    pub access_token: Option<String>,
    pub api_base: String,
}

impl AppConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            region: DEFAULT_REGION.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            instruction_channel: InstructionChannel::default(),
            access_token: None,
            api_base: vertex_api_base(DEFAULT_REGION),
        }
    }

    /// Changes the region and the endpoint derived from it.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self.api_base = vertex_api_base(&self.region);
        self
    }

    pub fn bind_address(&self) -> ProxyResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            ProxyError::config_error(
                &format!("invalid bind address {}:{}: {}", self.host, self.port, e),
                Some(HOST_ENV),
                Some("use an IP address such as 0.0.0.0 or 127.0.0.1"),
            )
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("project_id", &self.project_id)
            .field("region", &self.region)
            .field("default_model", &self.default_model)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("instruction_channel", &self.instruction_channel)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .finish()
    }
}
