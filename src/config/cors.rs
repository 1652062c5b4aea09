use std::env;

/// CORS configuration, read from `CORS_ALLOWED_ORIGINS` as a comma-separated
/// list. A single `*` allows any origin.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }

    pub fn allow_any(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}
