//! Startup credential resolution.
//!
//! Both provider keys are read once from the environment at process start
//! and injected into the adapters; inner components never read ambient
//! state. A missing key refuses startup rather than failing on first use.

use super::file_config::FileConfig;
use thiserror::Error;

/// Errors resolving required credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("environment variable {0} is not set (required for {1})")]
    Missing(String, &'static str),

    #[error("environment variable {0} is empty")]
    Empty(String),
}

/// Resolved provider credentials.
#[derive(Debug)]
pub struct Credentials {
    pub openai_api_key: String,
    pub serpapi_key: String,
}

impl Credentials {
    /// Resolve both keys from the environment variables named in the
    /// configuration.
    pub fn resolve(config: &FileConfig) -> Result<Self, CredentialError> {
        Ok(Self {
            openai_api_key: read_env(&config.openai.api_key_env, "text generation")?,
            serpapi_key: read_env(&config.serpapi.api_key_env, "shopping search")?,
        })
    }
}

fn read_env(name: &str, purpose: &'static str) -> Result<String, CredentialError> {
    let value = std::env::var(name)
        .map_err(|_| CredentialError::Missing(name.to_string(), purpose))?;
    if value.trim().is_empty() {
        return Err(CredentialError::Empty(name.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_names_it_in_the_error() {
        let mut config = FileConfig::default();
        config.openai.api_key_env = "ADCHAT_TEST_SURELY_UNSET_KEY".to_string();

        let err = Credentials::resolve(&config).unwrap_err();
        assert!(err.to_string().contains("ADCHAT_TEST_SURELY_UNSET_KEY"));
    }

    #[test]
    fn resolves_when_both_are_set() {
        // Process-global env mutation; variable names are test-unique
        unsafe {
            std::env::set_var("ADCHAT_TEST_OPENAI_KEY", "sk-test");
            std::env::set_var("ADCHAT_TEST_SERPAPI_KEY", "serp-test");
        }
        let mut config = FileConfig::default();
        config.openai.api_key_env = "ADCHAT_TEST_OPENAI_KEY".to_string();
        config.serpapi.api_key_env = "ADCHAT_TEST_SERPAPI_KEY".to_string();

        let credentials = Credentials::resolve(&config).unwrap();
        assert_eq!(credentials.openai_api_key, "sk-test");
        assert_eq!(credentials.serpapi_key, "serp-test");
    }
}
