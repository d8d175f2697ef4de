use std::env;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_CHAT_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEFAULT_PHOTO_BASE_URL: &str = "https://api.pexels.com/v1";

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct PexelsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub openrouter: OpenRouterConfig,
    pub pexels: PexelsConfig,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        OpenRouterConfig {
            api_key: None,
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

impl OpenRouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = non_empty_var("OPENROUTER_API_KEY");
        let base_url =
            non_empty_var("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_CHAT_BASE_URL.into());
        let model = non_empty_var("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.into());

        OpenRouterConfig {
            api_key,
            base_url,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for PexelsConfig {
    fn default() -> Self {
        PexelsConfig {
            api_key: None,
            base_url: DEFAULT_PHOTO_BASE_URL.to_string(),
        }
    }
}

impl PexelsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = non_empty_var("PEXELS_API_KEY");
        let base_url =
            non_empty_var("PEXELS_BASE_URL").unwrap_or_else(|| DEFAULT_PHOTO_BASE_URL.into());

        PexelsConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads both credentials once. Call this at startup and pass the result
    /// into [`crate::ContentService::new`].
    pub fn from_env() -> Self {
        Config {
            openrouter: OpenRouterConfig::from_env(),
            pexels: PexelsConfig::from_env(),
        }
    }

    pub fn with_openrouter(mut self, config: OpenRouterConfig) -> Self {
        self.openrouter = config;
        self
    }

    pub fn with_pexels(mut self, config: PexelsConfig) -> Self {
        self.pexels = config;
        self
    }
}

// An empty variable counts as unset, same as a missing one.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
