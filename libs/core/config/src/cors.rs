use crate::{env_required, ConfigError, FromEnv};

/// Single browser origin allowed to call the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Exact match against an `Origin` header value.
    pub fn allows(&self, origin: &str) -> bool {
        origin.trim_end_matches('/') == self.allowed_origin
    }
}

impl FromEnv for CorsConfig {
    /// Requires FRONTEND_URL
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_required("FRONTEND_URL")?))
    }
}
