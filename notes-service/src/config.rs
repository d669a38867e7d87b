use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "PORT";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Set to "false" or "0" to stop appending generated summaries to the store.
    pub const SAVE_SUMMARIES_AS_NOTES: &str = "SAVE_SUMMARIES_AS_NOTES";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8000;
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
}

/// Settings for one LLM vendor.
///
/// `api_key` may be absent; the adapter reports that when it is first used.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai: ProviderConfig,
    pub gemini: ProviderConfig,
    pub save_summaries_as_notes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("Invalid {} '{}': {}", env_vars::PORT, raw, e))?,
            None => defaults::PORT,
        };

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: non_empty(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            openai: ProviderConfig {
                api_key: non_empty(env_vars::OPENAI_API_KEY),
                base_url: non_empty(env_vars::OPENAI_BASE_URL)
                    .unwrap_or_else(|| defaults::OPENAI_BASE_URL.to_string()),
                model: non_empty(env_vars::OPENAI_MODEL)
                    .unwrap_or_else(|| defaults::OPENAI_MODEL.to_string()),
            },
            gemini: ProviderConfig {
                api_key: non_empty(env_vars::GEMINI_API_KEY),
                base_url: non_empty(env_vars::GEMINI_BASE_URL)
                    .unwrap_or_else(|| defaults::GEMINI_BASE_URL.to_string()),
                model: non_empty(env_vars::GEMINI_MODEL)
                    .unwrap_or_else(|| defaults::GEMINI_MODEL.to_string()),
            },
            save_summaries_as_notes: lookup(env_vars::SAVE_SUMMARIES_AS_NOTES)
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
                .unwrap_or(true),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    /// Config as if no variables were set, so no provider has a key.
    pub fn empty_config() -> Config {
        Config::from_lookup(|_| None).expect("defaults are valid")
    }

    /// Empty config with both providers pointed at `base_url`.
    pub fn config_with_base_url(base_url: &str) -> Config {
        let mut config = empty_config();
        config.openai.base_url = base_url.to_string();
        config.gemini.base_url = base_url.to_string();
        config
    }
}
